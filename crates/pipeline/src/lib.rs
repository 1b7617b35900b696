//! Preparation pipeline turning MovieLens tables into training datasets.
//!
//! This crate provides:
//! - Preprocessing: genre/tag normalization, user cap, merges, zero-based ids
//! - A chronological per-user train/test split
//! - MovieLensDataset, an indexable `(label, [user_id, movie_id])` dataset
//!
//! ## Architecture
//! The pipeline runs in stages:
//! 1. `data_loader` reads movies.csv, ratings.csv and tags.csv
//! 2. `preprocess` normalizes and merges the tables
//! 3. `train_test_split` holds out each user's most recent ratings
//! 4. `MovieLensDataset` binarizes ratings and exposes field dimensions
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{get_dataset, Dataset, PipelineConfig};
//!
//! let config = PipelineConfig::new("data/ml-latest-small").with_n_test(5);
//! let prepared = get_dataset(&config)?;
//!
//! let (label, [user_id, movie_id]) = prepared.train.item_at(0)?;
//! let [n_users, n_movies] = prepared.train.field_dims();
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod prepare;
pub mod preprocess;
pub mod records;
pub mod split;
pub mod traits;

// Re-export main types
pub use config::PipelineConfig;
pub use dataset::{binarize, Example, MovieLensDataset};
pub use error::{PipelineError, Result};
pub use prepare::{get_dataset, prepare_tables, PreparedData};
pub use preprocess::{preprocess, Preprocessed};
pub use records::{EnrichedRating, MovieMeta};
pub use split::train_test_split;
pub use traits::Dataset;
