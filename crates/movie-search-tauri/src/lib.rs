//! Movie Search Tauri Integration
//!
//! Provides a Tauri plugin that runs movie searches for a webview front end.
//!
//! # Usage
//!
//! Register the plugin in your Tauri application:
//!
//! ```ignore
//! fn main() {
//!     tauri::Builder::default()
//!         .plugin(movie_search_tauri::init())
//!         .run(tauri::generate_context!())
//!         .expect("error while running tauri application");
//! }
//! ```
//!
//! Then invoke commands from the frontend:
//!
//! ```javascript
//! import { invoke } from '@tauri-apps/api/core';
//!
//! // Run a search and get the rendered results container
//! const query = document.getElementById('search').value;
//! document.getElementById('movies').innerHTML =
//!   await invoke('plugin:moviesearch|search_movie', { query });
//!
//! // Structured results, optionally filtered by genre
//! const movies = await invoke('plugin:moviesearch|search_movies', {
//!   query: 'batman',
//!   genre: 'action'
//! });
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use movie_search_core::{
    ClientConfig, MemoryPage, MovieApiClient, SearchHandler, SearchOptions, SearchRequest,
};
use tauri::{
    Manager, Runtime,
    plugin::{Builder, TauriPlugin},
};

mod commands;

/// Shared search state for Tauri commands
///
/// Writing the query and reading it back for the request happen under
/// `typing`, so each command sends its own query. The network wait is not
/// locked: overlapping commands behave like overlapping searches in a
/// browser, and the last response to arrive owns the container.
pub struct SearchState {
    pub(crate) page: Arc<MemoryPage>,
    pub(crate) handler: SearchHandler<MemoryPage>,
    typing: Mutex<()>,
}

impl SearchState {
    /// Create a new SearchState with default configuration
    ///
    /// # Errors
    /// Returns error string if client initialization fails
    pub fn new() -> Result<Self, String> {
        Self::with_config(ClientConfig::default(), SearchOptions::default())
    }

    /// Create a new SearchState with custom client and page options
    ///
    /// # Errors
    /// Returns error string if client initialization fails
    pub fn with_config(config: ClientConfig, options: SearchOptions) -> Result<Self, String> {
        let client = MovieApiClient::with_config(config).map_err(|e| e.to_string())?;
        let page = Arc::new(MemoryPage::new());
        page.add_element(&options.input_id);
        page.add_element(&options.container_id);
        let handler = SearchHandler::with_client(client, Arc::clone(&page), options);
        Ok(Self {
            page,
            handler,
            typing: Mutex::new(()),
        })
    }

    /// Type `query` into the search input, run the search, and return the
    /// container HTML
    ///
    /// # Errors
    /// Returns the search error message; the container is left unchanged
    pub async fn search_movie(&self, query: &str) -> Result<String, String> {
        let search = {
            let _typing = self.typing.lock().unwrap_or_else(PoisonError::into_inner);
            self.page.set_value(&self.handler.options().input_id, query);
            self.handler.search_movie()
        };
        search.await.map_err(|e| e.to_string())?;
        Ok(self.movies_html())
    }

    /// Structured search results, optionally filtered by genre
    ///
    /// Does not touch the page.
    ///
    /// # Errors
    /// Returns the search error message
    pub async fn search_movies(&self, query: &str, genre: Option<&str>) -> Result<Vec<Movie>, String> {
        let mut request = SearchRequest::new(query);
        request.genre = genre.map(str::to_string);
        self.handler
            .client()
            .search(&request)
            .await
            .map_err(|e| e.to_string())
    }

    /// Current contents of the results container
    pub fn movies_html(&self) -> String {
        self.page
            .inner_html(&self.handler.options().container_id)
            .unwrap_or_default()
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new().expect("Failed to create default SearchState")
    }
}

/// Initialize the moviesearch plugin with default configuration
///
/// # Example
/// ```ignore
/// tauri::Builder::default()
///     .plugin(movie_search_tauri::init())
///     .run(tauri::generate_context!())
///     .expect("error while running tauri application");
/// ```
pub fn init<R: Runtime>() -> TauriPlugin<R> {
    init_with_config(ClientConfig::default(), SearchOptions::default())
}

/// Initialize the moviesearch plugin against a specific API and page layout
pub fn init_with_config<R: Runtime>(config: ClientConfig, options: SearchOptions) -> TauriPlugin<R> {
    Builder::new("moviesearch")
        .invoke_handler(tauri::generate_handler![
            commands::search_movie,
            commands::search_movies,
            commands::movies_html
        ])
        .setup(move |app, _api| {
            let state =
                SearchState::with_config(config, options).map_err(Box::<dyn std::error::Error>::from)?;
            tracing::debug!(base_url = state.handler.client().base_url(), "moviesearch plugin ready");
            app.manage(state);
            Ok(())
        })
        .build()
}

// Re-export types for convenience
pub use movie_search_core::Movie;
