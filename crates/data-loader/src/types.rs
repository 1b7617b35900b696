//! Core domain types for the MovieLens CSV tables.
//!
//! These are the rows exactly as they appear in `movies.csv`, `ratings.csv`
//! and `tags.csv`. Identifiers are still 1-based here; shifting them is the
//! job of the preprocessing stage.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Identifier of a user (1-based in the source files)
pub type UserId = u32;

/// Identifier of a movie (1-based in the source files, not contiguous)
pub type MovieId = u32;

// =============================================================================
// Raw table rows
// =============================================================================

/// One row of `movies.csv`: `movieId,title,genres`
///
/// `genres` is kept as the raw pipe-separated string ("Adventure|Comedy").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "movieId")]
    pub id: MovieId,
    pub title: String,
    pub genres: String,
}

/// One row of `ratings.csv`: `userId,movieId,rating,timestamp`
///
/// Rust concept: all fields are `Copy`, so the whole struct can be `Copy`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    /// Rating value, half-star steps from 0.5 to 5.0
    pub rating: f32,
    /// Unix timestamp when rating was made
    pub timestamp: i64,
}

/// One row of `tags.csv`: `userId,movieId,tag,timestamp`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    #[serde(rename = "userId")]
    pub user_id: UserId,
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    pub tag: String,
    pub timestamp: i64,
}

// =============================================================================
// RatingRow
// =============================================================================

/// Read access to the columns every rating table carries.
///
/// The splitter and the dataset wrapper only need these four columns, so
/// they are generic over this trait instead of one concrete row type.
pub trait RatingRow {
    fn user_id(&self) -> UserId;
    fn movie_id(&self) -> MovieId;
    fn rating(&self) -> f32;
    fn timestamp(&self) -> i64;
}

impl RatingRow for Rating {
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

// =============================================================================
// MovieLensTables
// =============================================================================

/// The three raw tables loaded from a MovieLens directory.
///
/// Rows keep file order; later stages rely on it for tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct MovieLensTables {
    pub movies: Vec<Movie>,
    pub ratings: Vec<Rating>,
    pub tags: Vec<Tag>,
}

impl MovieLensTables {
    /// Creates an empty set of tables
    pub fn new() -> Self {
        Self::default()
    }

    /// Get counts for debugging/validation: (movies, ratings, tags)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.movies.len(), self.ratings.len(), self.tags.len())
    }
}
