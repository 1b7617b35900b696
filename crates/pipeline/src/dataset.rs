//! Indexable dataset of `(label, [user_id, movie_id])` examples.

use crate::error::{PipelineError, Result};
use crate::traits::Dataset;
use data_loader::RatingRow;

/// One example: a binary label column and the `[user_id, movie_id]` pair
pub type Example = ([f32; 1], [u32; 2]);

/// Binary label for a rating: 1 only when strictly above the threshold
pub fn binarize(rating: f32, threshold: f32) -> f32 {
    if rating > threshold { 1.0 } else { 0.0 }
}

/// Immutable dataset built from a finalized rating table.
///
/// Holds the id pairs, a parallel column of labels, and `field_dims`, the
/// per-column maximum id + 1 used to size embedding tables downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieLensDataset {
    data: Vec<[u32; 2]>,
    target: Vec<[f32; 1]>,
    field_dims: [usize; 2],
}

impl MovieLensDataset {
    /// Build a dataset from rating rows.
    ///
    /// An empty input yields `field_dims == [0, 0]`.
    pub fn new<T: RatingRow>(rows: &[T], threshold: f32) -> Self {
        let data: Vec<[u32; 2]> = rows
            .iter()
            .map(|row| [row.user_id(), row.movie_id()])
            .collect();
        let target = rows
            .iter()
            .map(|row| [binarize(row.rating(), threshold)])
            .collect();
        let field_dims = compute_field_dims(&data);

        Self {
            data,
            target,
            field_dims,
        }
    }

    /// Per-column `max + 1` of the id pairs
    pub fn field_dims(&self) -> [usize; 2] {
        self.field_dims
    }

    /// All id pairs, in row order
    pub fn data(&self) -> &[[u32; 2]] {
        &self.data
    }

    /// All labels, in row order
    pub fn targets(&self) -> &[[f32; 1]] {
        &self.target
    }

    /// Fraction of examples labelled 1; 0.0 for an empty dataset
    pub fn positive_ratio(&self) -> f64 {
        if self.target.is_empty() {
            return 0.0;
        }
        let positives = self.target.iter().filter(|t| t[0] > 0.0).count();
        positives as f64 / self.target.len() as f64
    }

    /// Iterate over every example in order
    pub fn iter(&self) -> impl Iterator<Item = Example> + '_ {
        self.target.iter().copied().zip(self.data.iter().copied())
    }
}

impl Dataset for MovieLensDataset {
    type Item = Example;

    fn len(&self) -> usize {
        self.data.len()
    }

    fn item_at(&self, index: usize) -> Result<Example> {
        match (self.target.get(index), self.data.get(index)) {
            (Some(label), Some(pair)) => Ok((*label, *pair)),
            _ => Err(PipelineError::IndexOutOfRange {
                index,
                len: self.data.len(),
            }),
        }
    }
}

fn compute_field_dims(data: &[[u32; 2]]) -> [usize; 2] {
    data.iter().fold([0, 0], |dims, pair| {
        [
            dims[0].max(pair[0] as usize + 1),
            dims[1].max(pair[1] as usize + 1),
        ]
    })
}
