//! Integration tests for the pipeline.
//!
//! These tests write a small MovieLens-shaped directory to disk and run the
//! full load -> preprocess -> split -> dataset chain on it.

use pipeline::{get_dataset, Dataset, PipelineConfig, PipelineError};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

const MOVIES: &str = "\
movieId,title,genres
1,Toy Story (1995),Adventure|Animation|Children|Comedy|Fantasy
2,Jumanji (1995),Adventure|Children|Fantasy
3,\"Grumpier Old Men, The (1995)\",Comedy|Romance
4,Waiting to Exhale (1995),Comedy|Drama|Romance
";

const TAGS: &str = "\
userId,movieId,tag,timestamp
2,1,Pixar,1445714994
3,1,pixar,1445714995
2,3,Sequel,1445714996
";

// User 1 rates movie 6, which is missing from movies.csv
const RATINGS: &str = "\
userId,movieId,rating,timestamp
1,1,4.0,100
1,2,4.5,200
1,3,3.0,300
1,4,5.0,400
1,6,2.0,500
1,2,1.0,600
2,1,5.0,50
2,3,4.0,50
2,4,3.5,40
3,2,4.5,70
3,4,2.5,80
4,1,5.0,10
";

fn write_fixture(dir: &Path) {
    fs::write(dir.join("movies.csv"), MOVIES).unwrap();
    fs::write(dir.join("tags.csv"), TAGS).unwrap();
    fs::write(dir.join("ratings.csv"), RATINGS).unwrap();
}

fn test_config(dir: &Path) -> PipelineConfig {
    PipelineConfig::new(dir).with_user_cap(3).with_n_test(2)
}

#[test]
fn test_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let prepared = get_dataset(&test_config(dir.path())).unwrap();

    // Movies are zero-based and carry tags only where tags.csv has rows
    let ids: Vec<_> = prepared.movies.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![0, 1, 2, 3]);
    assert_eq!(
        prepared.movies[0].tags,
        Some(BTreeSet::from(["pixar".to_string()]))
    );
    assert_eq!(prepared.movies[1].tags, None);
    assert_eq!(
        prepared.movies[2].tags,
        Some(BTreeSet::from(["sequel".to_string()]))
    );
    assert_eq!(prepared.movies[2].title, "Grumpier Old Men, The (1995)");

    // User 4 is beyond the cap; user 3 has only two ratings
    let train: Vec<_> = prepared.train.iter().collect();
    assert_eq!(
        train,
        vec![
            ([0.0], [0, 0]),
            ([1.0], [0, 1]),
            ([0.0], [0, 2]),
            ([1.0], [0, 3]),
            ([0.0], [1, 3]),
        ]
    );

    let test: Vec<_> = prepared.test.iter().collect();
    assert_eq!(
        test,
        vec![
            ([0.0], [0, 5]),
            ([0.0], [0, 1]),
            ([1.0], [1, 0]),
            ([0.0], [1, 2]),
            ([1.0], [2, 1]),
            ([0.0], [2, 3]),
        ]
    );

    assert_eq!(prepared.train.field_dims(), [2, 4]);
    assert_eq!(prepared.test.field_dims(), [3, 6]);
}

#[test]
fn test_without_user_cap() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let config = test_config(dir.path()).without_user_cap();
    let prepared = get_dataset(&config).unwrap();

    assert_eq!(prepared.train.len(), 5);
    assert_eq!(prepared.test.len(), 7);
    assert_eq!(prepared.test.item_at(6).unwrap(), ([1.0], [3, 0]));
}

#[test]
fn test_threshold_changes_labels() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let config = test_config(dir.path()).with_threshold(3.0);
    let prepared = get_dataset(&config).unwrap();

    let labels: Vec<f32> = prepared.train.targets().iter().map(|t| t[0]).collect();
    assert_eq!(labels, vec![1.0, 1.0, 0.0, 1.0, 1.0]);
}

#[test]
fn test_item_past_end_is_error() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let prepared = get_dataset(&test_config(dir.path())).unwrap();
    let len = prepared.train.len();

    let err = prepared.train.item_at(len).unwrap_err();
    assert!(matches!(err, PipelineError::IndexOutOfRange { index, .. } if index == len));
}

#[test]
fn test_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = PipelineConfig::new(dir.path().join("nope"));

    let err = get_dataset(&config).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Load(data_loader::DataLoadError::FileNotFound { .. })
    ));
}

#[test]
fn test_malformed_ratings_fail() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::write(
        dir.path().join("ratings.csv"),
        "userId,movieId,rating,timestamp\n1,1,great,100\n",
    )
    .unwrap();

    let err = get_dataset(&test_config(dir.path())).unwrap_err();
    match err {
        PipelineError::Load(data_loader::DataLoadError::ParseError { file, line, .. }) => {
            assert_eq!(file, "ratings.csv");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
