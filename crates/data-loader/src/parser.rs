//! Parser for MovieLens CSV files.
//!
//! Handles the three files of the "latest" MovieLens layout:
//! - movies.csv: movieId,title,genres
//! - ratings.csv: userId,movieId,rating,timestamp
//! - tags.csv: userId,movieId,tag,timestamp
//!
//! Every file starts with a header row. Titles and tags may contain commas,
//! in which case the field is double-quoted; the `csv` crate takes care of
//! that. No validation happens beyond what deserialization enforces.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Open a file, turning "not found" into `DataLoadError::FileNotFound`
fn open_file(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DataLoadError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => DataLoadError::IoError(e),
    })
}

/// Deserialize every record of a headed CSV stream into `T`.
///
/// `file` is only used to label errors.
fn read_records<T, R>(reader: R, file: &str) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    reader
        .deserialize()
        .map(|record| record.map_err(|e| DataLoadError::from_csv(file, e)))
        .collect()
}

/// Parse `movies.csv` from any reader
pub fn parse_movies_from_reader<R: Read>(reader: R) -> Result<Vec<Movie>> {
    read_records(reader, "movies.csv")
}

/// Parse `ratings.csv` from any reader
pub fn parse_ratings_from_reader<R: Read>(reader: R) -> Result<Vec<Rating>> {
    read_records(reader, "ratings.csv")
}

/// Parse `tags.csv` from any reader
pub fn parse_tags_from_reader<R: Read>(reader: R) -> Result<Vec<Tag>> {
    read_records(reader, "tags.csv")
}

/// Parse the movies.csv file
pub fn parse_movies(path: &Path) -> Result<Vec<Movie>> {
    parse_movies_from_reader(open_file(path)?)
}

/// Parse the ratings.csv file
pub fn parse_ratings(path: &Path) -> Result<Vec<Rating>> {
    parse_ratings_from_reader(open_file(path)?)
}

/// Parse the tags.csv file
pub fn parse_tags(path: &Path) -> Result<Vec<Tag>> {
    parse_tags_from_reader(open_file(path)?)
}
