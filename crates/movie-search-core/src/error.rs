//! Error types for the movie search client
//!
//! Provides a single error enum with human-readable messages
//! and Tauri-compatible serialization.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Error type for all movie search operations
///
/// Implements Display for human-readable messages and Serialize
/// for Tauri command compatibility.
#[derive(Error, Debug)]
pub enum MovieSearchError {
    /// Request could not be built, sent, or its body read
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body was not a valid search response
    #[error("Failed to parse response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Page element with the given id does not exist
    #[error("Element not found: {0}")]
    ElementNotFound(String),
}

impl Serialize for MovieSearchError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for movie search operations
pub type Result<T> = std::result::Result<T, MovieSearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_error(body: &str) -> MovieSearchError {
        serde_json::from_str::<serde_json::Value>(body)
            .unwrap_err()
            .into()
    }

    #[test]
    fn test_error_display_element_not_found() {
        let error = MovieSearchError::ElementNotFound("search".to_string());
        assert_eq!(error.to_string(), "Element not found: search");
    }

    #[test]
    fn test_error_display_parse_error() {
        let error = parse_error("<html>");
        assert!(error.to_string().starts_with("Failed to parse response: "));
    }

    #[test]
    fn test_parse_error_from_serde() {
        let error = parse_error("{\"results\":");
        assert!(matches!(error, MovieSearchError::ParseError(_)));
    }

    #[test]
    fn test_error_serialize() {
        let error = MovieSearchError::ElementNotFound("movies".to_string());
        let json = serde_json::to_string(&error).expect("Serialization should succeed");
        assert_eq!(json, "\"Element not found: movies\"");
    }
}
