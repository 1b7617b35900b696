//! # Data Loader Crate
//!
//! This crate reads the MovieLens "latest" CSV dataset into memory.
//!
//! ## Main Components
//!
//! - **types**: Row types (Movie, Rating, Tag), the `RatingRow` trait and
//!   `MovieLensTables`
//! - **parser**: Deserialize CSV files into Rust structs
//! - **tables**: Load all three tables from a directory
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::MovieLensTables;
//! use std::path::Path;
//!
//! let tables = MovieLensTables::load_from_dir(Path::new("data/ml-latest-small"))?;
//! let (movies, ratings, tags) = tables.counts();
//! println!("{movies} movies, {ratings} ratings, {tags} tags");
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod tables;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    // Rows
    Movie,
    Rating,
    Tag,
    RatingRow,
    // Tables
    MovieLensTables,
};
