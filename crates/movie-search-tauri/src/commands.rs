//! Tauri commands for movie search
//!
//! This module contains all Tauri command implementations.

use movie_search_core::Movie;
use tauri::State;

use crate::SearchState;

/// Run a search and return the rendered results container
///
/// # Arguments
/// * `state` - Managed SearchState from Tauri
/// * `query` - Raw query, as typed into the search input
///
/// # Returns
/// Inner HTML of the results container after the search
///
/// # Errors
/// Returns error message as String if the search fails
#[tauri::command]
pub async fn search_movie(state: State<'_, SearchState>, query: String) -> Result<String, String> {
    state.search_movie(&query).await
}

/// Search for movies and return structured results
///
/// # Arguments
/// * `state` - Managed SearchState from Tauri
/// * `query` - Title query
/// * `genre` - Optional genre filter
///
/// # Errors
/// Returns error message as String if the search fails
#[tauri::command]
pub async fn search_movies(
    state: State<'_, SearchState>,
    query: String,
    genre: Option<String>,
) -> Result<Vec<Movie>, String> {
    state.search_movies(&query, genre.as_deref()).await
}

/// Current contents of the results container
#[tauri::command]
pub fn movies_html(state: State<'_, SearchState>) -> String {
    state.movies_html()
}
