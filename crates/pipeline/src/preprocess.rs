//! Preprocessing: normalize the raw tables, merge them and zero-base ids.
//!
//! ## Algorithm
//! The steps run in a fixed order because each one depends on the column
//! state left by the previous one:
//! 1. Split each movie's genre string on `|` into a set
//! 2. Lowercase tags and aggregate them into one set per movie
//! 3. Keep only ratings from the N smallest distinct user ids (optional)
//! 4. Left-merge tags into movies, then movies into ratings
//! 5. Shift movie ids (movie table) and user/movie ids (rating table) down by one

use crate::config::PipelineConfig;
use crate::error::{PipelineError, Result};
use crate::records::{EnrichedRating, MovieMeta};
use data_loader::{Movie, MovieId, MovieLensTables, Rating, Tag};
use std::collections::{BTreeSet, HashMap};

/// Output of [`preprocess`]: enriched movie metadata and zero-based ratings
#[derive(Debug, Clone, Default)]
pub struct Preprocessed {
    pub movies: Vec<MovieMeta>,
    pub ratings: Vec<EnrichedRating>,
}

/// Run every preprocessing step on freshly loaded tables.
///
/// Only `config.n_user` is read here; the threshold is applied later when
/// the datasets are built.
pub fn preprocess(tables: MovieLensTables, config: &PipelineConfig) -> Result<Preprocessed> {
    let MovieLensTables {
        movies,
        ratings,
        tags,
    } = tables;

    let movies = split_genres(movies);
    tracing::info!(movies = movies.len(), "Split movie genres");

    let tags_by_movie = aggregate_tags(&tags);
    tracing::info!(tagged_movies = tags_by_movie.len(), "Aggregated tags");

    let ratings = cap_users(ratings, config.n_user);
    tracing::info!(ratings = ratings.len(), n_user = ?config.n_user, "Filtered ratings by user cap");

    let movies = merge_movies_with_tags(movies, &tags_by_movie);
    let ratings = merge_ratings_with_movies(ratings, &movies);

    let movies = zero_base_movies(movies)?;
    let ratings = zero_base_ratings(ratings)?;
    tracing::info!("Merged tables and shifted identifiers to zero-based");

    Ok(Preprocessed { movies, ratings })
}

/// Split a pipe-separated genre string into a set
///
/// Example: "Adventure|Comedy|Adventure" -> {"Adventure", "Comedy"}
pub fn parse_genres(genres: &str) -> BTreeSet<String> {
    genres.split('|').map(str::to_string).collect()
}

/// Step 1: turn raw movie rows into metadata rows with parsed genres.
///
/// Tags are not known yet, so every row starts with `tags: None`.
pub fn split_genres(movies: Vec<Movie>) -> Vec<MovieMeta> {
    movies
        .into_iter()
        .map(|movie| MovieMeta {
            genres: parse_genres(&movie.genres),
            id: movie.id,
            title: movie.title,
            tags: None,
        })
        .collect()
}

/// Step 2: lowercase every tag and collect the distinct tags of each movie
pub fn aggregate_tags(tags: &[Tag]) -> HashMap<MovieId, BTreeSet<String>> {
    let mut by_movie: HashMap<MovieId, BTreeSet<String>> = HashMap::new();
    for tag in tags {
        by_movie
            .entry(tag.movie_id)
            .or_default()
            .insert(tag.tag.to_lowercase());
    }
    by_movie
}

/// Step 3: keep ratings from the `n_user` numerically smallest user ids.
///
/// Selection is by the sorted list of distinct ids, not by how many ratings
/// each user has. `None` keeps everything; `Some(0)` keeps nothing.
pub fn cap_users(ratings: Vec<Rating>, n_user: Option<usize>) -> Vec<Rating> {
    let Some(n_user) = n_user else {
        return ratings;
    };

    let distinct: BTreeSet<_> = ratings.iter().map(|r| r.user_id).collect();
    let Some(&max_user) = distinct.iter().take(n_user).last() else {
        return Vec::new();
    };

    ratings
        .into_iter()
        .filter(|r| r.user_id <= max_user)
        .collect()
}

/// Step 4a: left-merge aggregated tags into the movie table.
///
/// Movies without any tag row keep `tags: None`.
pub fn merge_movies_with_tags(
    movies: Vec<MovieMeta>,
    tags_by_movie: &HashMap<MovieId, BTreeSet<String>>,
) -> Vec<MovieMeta> {
    movies
        .into_iter()
        .map(|mut movie| {
            movie.tags = tags_by_movie.get(&movie.id).cloned();
            movie
        })
        .collect()
}

/// Step 4b: left-merge movie metadata into the rating table.
///
/// Rating order is preserved. A rating whose movie is not in the movie
/// table keeps `None` for title, genres and tags. If the movie table has a
/// duplicated id, the first row wins.
pub fn merge_ratings_with_movies(ratings: Vec<Rating>, movies: &[MovieMeta]) -> Vec<EnrichedRating> {
    let mut by_id: HashMap<MovieId, &MovieMeta> = HashMap::with_capacity(movies.len());
    for movie in movies {
        by_id.entry(movie.id).or_insert(movie);
    }

    ratings
        .into_iter()
        .map(|rating| {
            let meta = by_id.get(&rating.movie_id);
            EnrichedRating {
                user_id: rating.user_id,
                movie_id: rating.movie_id,
                rating: rating.rating,
                timestamp: rating.timestamp,
                title: meta.map(|m| m.title.clone()),
                genres: meta.map(|m| m.genres.clone()),
                tags: meta.and_then(|m| m.tags.clone()),
            }
        })
        .collect()
}

fn shift_down(value: u32, table: &'static str, field: &'static str) -> Result<u32> {
    value
        .checked_sub(1)
        .ok_or(PipelineError::InvalidIdentifier { table, field, value })
}

/// Step 5a: make movie ids zero-based in the movie table
pub fn zero_base_movies(movies: Vec<MovieMeta>) -> Result<Vec<MovieMeta>> {
    movies
        .into_iter()
        .map(|mut movie| {
            movie.id = shift_down(movie.id, "movies", "movieId")?;
            Ok(movie)
        })
        .collect()
}

/// Step 5b: make user and movie ids zero-based in the rating table
pub fn zero_base_ratings(ratings: Vec<EnrichedRating>) -> Result<Vec<EnrichedRating>> {
    ratings
        .into_iter()
        .map(|mut rating| {
            rating.user_id = shift_down(rating.user_id, "ratings", "userId")?;
            rating.movie_id = shift_down(rating.movie_id, "ratings", "movieId")?;
            Ok(rating)
        })
        .collect()
}
