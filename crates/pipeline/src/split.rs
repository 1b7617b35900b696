//! Chronological train/test split.
//!
//! Each user's most recent `n_test` ratings are held out for testing.

use data_loader::{RatingRow, UserId};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Rank of every row within its user's ratings, newest first.
///
/// Ties on the timestamp are broken by row order, so the row seen first gets
/// the smaller rank. Ranks start at 1.
pub fn recency_ranks<T: RatingRow>(rows: &[T]) -> Vec<usize> {
    let mut by_user: HashMap<UserId, Vec<usize>> = HashMap::new();
    for (idx, row) in rows.iter().enumerate() {
        by_user.entry(row.user_id()).or_default().push(idx);
    }

    let mut ranks = vec![0; rows.len()];
    for indices in by_user.values_mut() {
        // Stable sort keeps first-seen order among equal timestamps
        indices.sort_by_key(|&idx| Reverse(rows[idx].timestamp()));
        for (position, &idx) in indices.iter().enumerate() {
            ranks[idx] = position + 1;
        }
    }
    ranks
}

/// Split rating rows into `(train, test)`.
///
/// ## Algorithm
/// 1. Rank each user's rows by timestamp, newest first (see [`recency_ranks`])
/// 2. Rows ranked `<= n_test` go to test, the rest to train
///
/// A user with fewer than `n_test` ratings ends up entirely in test. Both
/// outputs keep the input's relative row order.
pub fn train_test_split<T: RatingRow>(rows: Vec<T>, n_test: usize) -> (Vec<T>, Vec<T>) {
    let ranks = recency_ranks(&rows);

    let mut train = Vec::with_capacity(rows.len());
    let mut test = Vec::new();
    for (row, rank) in rows.into_iter().zip(ranks) {
        if rank > n_test {
            train.push(row);
        } else {
            test.push(row);
        }
    }

    tracing::debug!(train = train.len(), test = test.len(), n_test, "Split ratings");
    (train, test)
}
