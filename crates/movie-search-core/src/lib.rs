//! Movie Search Core Library
//!
//! Async client for a movie-search JSON API, plus a search trigger that
//! renders results into a page.
//!
//! # Overview
//!
//! - [`MovieApiClient`] sends `GET /api/v1/search/?q=...` and decodes the
//!   `{"results": [...]}` body
//! - [`SearchHandler`] reads the query from a page input, runs the search,
//!   and replaces the results container with one fragment per movie
//! - [`Page`] is the element store the handler works against;
//!   [`MemoryPage`] keeps it in memory
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use movie_search_core::{MemoryPage, Result, SearchHandler};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let page = Arc::new(MemoryPage::with_search_elements());
//!     let handler = SearchHandler::new(Arc::clone(&page))?;
//!
//!     page.set_value("search", "batman");
//!     handler.search_movie().await?;
//!
//!     // <div class="movie"><h3>Batman</h3><p>Rating: 7.8</p></div>...
//!     println!("{}", page.inner_html("movies").unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! # Escaping
//!
//! By default the query goes into the URL verbatim and titles go into the
//! fragments verbatim. A query containing `&` splits into extra parameters,
//! and a title containing markup is rendered as markup. Use
//! [`QueryEncoding::Percent`] and [`HtmlMode::Escaped`] to encode both.

mod client;
mod error;
mod handler;
pub mod page;
pub mod render;
mod types;
pub mod url;

// Re-export client types
pub use client::{ClientConfig, MovieApiClient};

// Re-export error types
pub use error::{MovieSearchError, Result};

// Re-export the search trigger
pub use handler::{SearchHandler, SearchOptions};

// Re-export page types
pub use page::{MemoryPage, Page};

// Re-export rendering options
pub use render::HtmlMode;

// Re-export data types
pub use types::{Movie, SearchRequest, SearchResponse};

// Re-export URL options
pub use url::QueryEncoding;
