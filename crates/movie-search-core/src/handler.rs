//! Search trigger bound to a page
//!
//! Reads the query from the page input, runs one search, and replaces
//! the results container with the rendered movies.

use std::future::Future;
use std::sync::Arc;

use tracing::debug;

use crate::client::MovieApiClient;
use crate::error::{MovieSearchError, Result};
use crate::page::{MOVIES_CONTAINER_ID, Page, SEARCH_INPUT_ID};
use crate::render::{HtmlMode, render_results};
use crate::types::SearchRequest;

/// Page bindings and rendering options for [`SearchHandler`]
#[derive(Debug, Clone)]
pub struct SearchOptions {
    /// Id of the query input (default: "search")
    pub input_id: String,
    /// Id of the results container (default: "movies")
    pub container_id: String,
    /// How titles are written into fragments (default: raw)
    pub html_mode: HtmlMode,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            input_id: SEARCH_INPUT_ID.to_string(),
            container_id: MOVIES_CONTAINER_ID.to_string(),
            html_mode: HtmlMode::Raw,
        }
    }
}

/// Runs searches from page state into the results container
///
/// Invocations are independent. Overlapping searches are not cancelled or
/// ordered: whichever response arrives last owns the container.
pub struct SearchHandler<P: Page + 'static> {
    client: MovieApiClient,
    page: Arc<P>,
    options: SearchOptions,
}

impl<P: Page + 'static> SearchHandler<P> {
    /// Create a handler with the default client and options
    ///
    /// # Errors
    /// Returns error if HTTP client initialization fails
    pub fn new(page: Arc<P>) -> Result<Self> {
        Ok(Self::with_client(
            MovieApiClient::new()?,
            page,
            SearchOptions::default(),
        ))
    }

    /// Create a handler from an existing client
    pub fn with_client(client: MovieApiClient, page: Arc<P>, options: SearchOptions) -> Self {
        Self {
            client,
            page,
            options,
        }
    }

    /// Run a search for the current value of the input element
    ///
    /// The query is read when this method is called, before the returned
    /// future is first polled. The container is replaced only after the
    /// response body has been decoded, so a failed search leaves it as it
    /// was.
    ///
    /// # Errors
    /// - `ElementNotFound` if the input or container does not exist
    /// - `HttpError` if the request cannot be sent or the body read
    /// - `ParseError` if the body is not a search response
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> movie_search_core::Result<()> {
    /// use std::sync::Arc;
    /// use movie_search_core::{MemoryPage, SearchHandler};
    ///
    /// let page = Arc::new(MemoryPage::with_search_elements());
    /// let handler = SearchHandler::new(Arc::clone(&page))?;
    ///
    /// page.set_value("search", "batman");
    /// handler.search_movie().await?;
    /// println!("{}", page.inner_html("movies").unwrap_or_default());
    /// # Ok(())
    /// # }
    /// ```
    pub fn search_movie(&self) -> impl Future<Output = Result<()>> + Send + use<P> {
        let query = self
            .page
            .input_value(&self.options.input_id)
            .ok_or_else(|| MovieSearchError::ElementNotFound(self.options.input_id.clone()));
        let client = self.client.clone();
        let page = Arc::clone(&self.page);
        let container_id = self.options.container_id.clone();
        let html_mode = self.options.html_mode;

        async move {
            let url = client.search_url(&SearchRequest::new(query?));
            let response = client.fetch_json(&url).await?;

            let html = render_results(&response.results, html_mode);
            if !page.set_inner_html(&container_id, &html) {
                return Err(MovieSearchError::ElementNotFound(container_id));
            }

            debug!(url = %url, results = response.results.len(), "search results rendered");
            Ok(())
        }
    }

    /// The page this handler is bound to
    pub fn page(&self) -> &Arc<P> {
        &self.page
    }

    /// The client used for searches
    pub fn client(&self) -> &MovieApiClient {
        &self.client
    }

    /// Page bindings and rendering options
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }
}
