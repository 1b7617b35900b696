//! Pipeline configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default binarization threshold: ratings strictly above it are positive
pub const DEFAULT_THRESHOLD: f32 = 4.0;

/// Default number of distinct users kept after preprocessing
pub const DEFAULT_USER_CAP: usize = 1000;

/// Default number of most recent ratings held out per user
pub const DEFAULT_N_TEST: usize = 5;

/// Everything `get_dataset` needs to know.
///
/// ## Usage
/// ```ignore
/// let config = PipelineConfig::new("data/ml-latest-small")
///     .with_threshold(3.5)
///     .without_user_cap()
///     .with_n_test(10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Directory holding movies.csv, ratings.csv and tags.csv
    pub data_dir: PathBuf,
    /// Ratings strictly greater than this become label 1
    pub threshold: f32,
    /// Keep only the N smallest distinct user ids; `None` keeps everyone
    pub n_user: Option<usize>,
    /// Most recent ratings per user that go to the test split
    pub n_test: usize,
}

impl PipelineConfig {
    /// Create a config for `data_dir` with default parameters
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_user_cap(mut self, n_user: usize) -> Self {
        self.n_user = Some(n_user);
        self
    }

    pub fn without_user_cap(mut self) -> Self {
        self.n_user = None;
        self
    }

    pub fn with_n_test(mut self, n_test: usize) -> Self {
        self.n_test = n_test;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data/ml-latest-small"),
            threshold: DEFAULT_THRESHOLD,
            n_user: Some(DEFAULT_USER_CAP),
            n_test: DEFAULT_N_TEST,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PipelineConfig::default();
        assert_eq!(config.threshold, 4.0);
        assert_eq!(config.n_user, Some(1000));
        assert_eq!(config.n_test, 5);
    }

    #[test]
    fn test_builder() {
        let config = PipelineConfig::new("/tmp/ml")
            .with_threshold(3.0)
            .with_user_cap(10)
            .with_n_test(2);

        assert_eq!(config.data_dir, PathBuf::from("/tmp/ml"));
        assert_eq!(config.threshold, 3.0);
        assert_eq!(config.n_user, Some(10));
        assert_eq!(config.n_test, 2);

        assert_eq!(config.without_user_cap().n_user, None);
    }
}
