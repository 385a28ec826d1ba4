//! Core data types for the movie search client
//!
//! Mirrors the JSON shapes returned by the search endpoint.

use serde::{Deserialize, Serialize};

/// A movie record from a search response
///
/// Only the fields the client consumes are kept; anything else the
/// server sends (`id`, `overview`, `genres`, ...) is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Movie title
    pub title: String,

    /// Average vote on a 0-10 scale (e.g., 7.8)
    pub vote_average: f64,
}

/// Body of `GET /api/v1/search/`
///
/// `results` is required; a body without it does not decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching movies in server order
    pub results: Vec<Movie>,
}

/// Parameters accepted by the search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Title query, sent as `q`
    pub query: String,

    /// Optional genre filter, sent as `genre`
    pub genre: Option<String>,
}

impl SearchRequest {
    /// Request matching titles only
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            genre: None,
        }
    }

    /// Narrow the request to a genre
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}
