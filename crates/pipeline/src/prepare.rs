//! End-to-end preparation: load, preprocess, split, build datasets.

use crate::config::PipelineConfig;
use crate::dataset::MovieLensDataset;
use crate::error::Result;
use crate::preprocess::{preprocess, Preprocessed};
use crate::records::MovieMeta;
use crate::split::train_test_split;
use data_loader::MovieLensTables;

/// Result of [`get_dataset`]
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub movies: Vec<MovieMeta>,
    pub train: MovieLensDataset,
    pub test: MovieLensDataset,
}

/// Load the tables from `config.data_dir` and run the whole pipeline
pub fn get_dataset(config: &PipelineConfig) -> Result<PreparedData> {
    let tables = MovieLensTables::load_from_dir(&config.data_dir)?;
    prepare_tables(tables, config)
}

/// Run the pipeline on tables that are already in memory
pub fn prepare_tables(tables: MovieLensTables, config: &PipelineConfig) -> Result<PreparedData> {
    let Preprocessed { movies, ratings } = preprocess(tables, config)?;
    tracing::info!("Loaded and preprocessed data");

    let (train_rows, test_rows) = train_test_split(ratings, config.n_test);
    tracing::info!(
        train = train_rows.len(),
        test = test_rows.len(),
        "Split data"
    );

    let train = MovieLensDataset::new(&train_rows, config.threshold);
    let test = MovieLensDataset::new(&test_rows, config.threshold);
    tracing::info!(
        train_field_dims = ?train.field_dims(),
        test_field_dims = ?test.field_dims(),
        "Built datasets"
    );

    Ok(PreparedData {
        movies,
        train,
        test,
    })
}
