//! Loading the three MovieLens tables from a directory.
//!
//! This is the entry point of the whole pipeline: everything downstream
//! works on the in-memory [`MovieLensTables`] built here.

use crate::error::Result;
use crate::parser;
use crate::types::MovieLensTables;
use std::path::Path;

impl MovieLensTables {
    /// Load `movies.csv`, `ratings.csv` and `tags.csv` from a directory
    ///
    /// Steps:
    /// 1. Parse movies
    /// 2. Parse tags
    /// 3. Parse ratings
    ///
    /// Files are read one after another; the first failure aborts the load.
    pub fn load_from_dir(data_dir: &Path) -> Result<Self> {
        tracing::info!("Loading MovieLens tables from {}", data_dir.display());

        let movies = parser::parse_movies(&data_dir.join("movies.csv"))?;
        tracing::info!(rows = movies.len(), "Loaded movie table");

        let tags = parser::parse_tags(&data_dir.join("tags.csv"))?;
        tracing::info!(rows = tags.len(), "Loaded tag table");

        let ratings = parser::parse_ratings(&data_dir.join("ratings.csv"))?;
        tracing::info!(rows = ratings.len(), "Loaded rating table");

        Ok(Self {
            movies,
            ratings,
            tags,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DataLoadError;
    use std::fs;

    fn write_fixture(dir: &Path) {
        fs::write(
            dir.join("movies.csv"),
            "movieId,title,genres\n1,Toy Story (1995),Adventure|Animation\n2,Jumanji (1995),Adventure\n",
        )
        .unwrap();
        fs::write(
            dir.join("ratings.csv"),
            "userId,movieId,rating,timestamp\n1,1,4.0,964982703\n1,2,3.5,964981247\n2,1,5.0,964982224\n",
        )
        .unwrap();
        fs::write(
            dir.join("tags.csv"),
            "userId,movieId,tag,timestamp\n2,1,pixar,1445714994\n",
        )
        .unwrap();
    }

    #[test]
    fn test_load_from_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());

        let tables = MovieLensTables::load_from_dir(dir.path()).unwrap();

        assert_eq!(tables.counts(), (2, 3, 1));
        assert_eq!(tables.ratings[2].user_id, 2);
        assert_eq!(tables.tags[0].tag, "pixar");
    }

    #[test]
    fn test_load_fails_on_missing_table() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(dir.path());
        fs::remove_file(dir.path().join("tags.csv")).unwrap();

        let err = MovieLensTables::load_from_dir(dir.path()).unwrap_err();

        match err {
            DataLoadError::FileNotFound { path } => assert!(path.ends_with("tags.csv")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_dataset() {
        // Requires the real dataset; place ml-latest-small in ../../data/
        let data_dir = Path::new("../../data/ml-latest-small");

        if data_dir.exists() {
            let tables = MovieLensTables::load_from_dir(data_dir).unwrap();
            let (movies, ratings, tags) = tables.counts();

            assert_eq!(movies, 9742);
            assert_eq!(ratings, 100836);
            assert_eq!(tags, 3683);
        }
    }
}
