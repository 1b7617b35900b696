//! Error types for the preparation pipeline.

use data_loader::DataLoadError;
use thiserror::Error;

/// Errors raised while preprocessing, splitting or indexing the data
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Loading one of the CSV tables failed
    #[error(transparent)]
    Load(#[from] DataLoadError),

    /// A source identifier could not be shifted to zero-based
    #[error("Cannot zero-base {field} {value} in {table} table: identifiers must start at 1")]
    InvalidIdentifier {
        table: &'static str,
        field: &'static str,
        value: u32,
    },

    /// Dataset access outside `[0, len)`
    #[error("Index {index} out of range for dataset of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PipelineError>;
