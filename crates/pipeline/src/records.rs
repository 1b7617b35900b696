//! Rows produced by the preprocessing stage.
//!
//! Unlike the raw rows from `data_loader`, identifiers here are zero-based
//! and genres/tags are parsed into sets.

use data_loader::{MovieId, RatingRow, UserId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Shared empty set backing the `tags_or_empty` views
static NO_TAGS: BTreeSet<String> = BTreeSet::new();

/// Movie metadata after genre splitting and the tag merge
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieMeta {
    pub id: MovieId,
    pub title: String,
    pub genres: BTreeSet<String>,
    /// Lowercased, deduplicated tags.
    ///
    /// `None` when the movie has no row in tags.csv at all, which is not the
    /// same thing as an empty set.
    pub tags: Option<BTreeSet<String>>,
}

impl MovieMeta {
    /// Tags, treating "no tag rows" as an empty set
    pub fn tags_or_empty(&self) -> &BTreeSet<String> {
        self.tags.as_ref().unwrap_or(&NO_TAGS)
    }
}

/// A rating joined with the metadata of the rated movie.
///
/// The join is a left merge, so ratings for a movie missing from movies.csv
/// keep `None` in every metadata column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedRating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub rating: f32,
    pub timestamp: i64,
    pub title: Option<String>,
    pub genres: Option<BTreeSet<String>>,
    pub tags: Option<BTreeSet<String>>,
}

impl EnrichedRating {
    /// Tags, treating a missing set as empty
    pub fn tags_or_empty(&self) -> &BTreeSet<String> {
        self.tags.as_ref().unwrap_or(&NO_TAGS)
    }
}

impl RatingRow for EnrichedRating {
    fn user_id(&self) -> UserId {
        self.user_id
    }

    fn movie_id(&self) -> MovieId {
        self.movie_id
    }

    fn rating(&self) -> f32 {
        self.rating
    }

    fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_or_empty() {
        let mut movie = MovieMeta {
            id: 0,
            title: "Toy Story (1995)".to_string(),
            genres: BTreeSet::from(["Animation".to_string()]),
            tags: None,
        };
        assert!(movie.tags_or_empty().is_empty());

        movie.tags = Some(BTreeSet::from(["pixar".to_string()]));
        assert!(movie.tags_or_empty().contains("pixar"));
    }
}
