//! HTTP client for the movie search API
//!
//! Issues a single GET per search and decodes the JSON body. The status
//! code is not inspected: whatever the server sends is decoded as a
//! search response.

use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

use crate::error::{MovieSearchError, Result};
use crate::types::{Movie, SearchRequest, SearchResponse};
use crate::url::{DEFAULT_BASE_URL, QueryEncoding, build_search_request_url};

const USER_AGENT: &str = concat!("movie-search/", env!("CARGO_PKG_VERSION"));

/// Configuration for the HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (default: "http://127.0.0.1:8000")
    pub base_url: String,
    /// Request timeout in seconds (default: none, wait indefinitely)
    pub timeout_secs: Option<u64>,
    /// How query values are written into the URL (default: raw)
    pub query_encoding: QueryEncoding,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: None,
            query_encoding: QueryEncoding::Raw,
        }
    }
}

/// HTTP client wrapper for the search endpoint
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct MovieApiClient {
    client: reqwest::Client,
    base_url: String,
    query_encoding: QueryEncoding,
}

impl MovieApiClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers);
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(MovieSearchError::HttpError)?;

        Ok(Self {
            client,
            base_url: config.base_url,
            query_encoding: config.query_encoding,
        })
    }

    /// Search URL for a request, using the configured base and encoding
    pub fn search_url(&self, request: &SearchRequest) -> String {
        build_search_request_url(&self.base_url, request, self.query_encoding)
    }

    /// Search for movies
    ///
    /// # Returns
    /// Movies in server order, empty if nothing matched
    ///
    /// # Errors
    /// - `HttpError` if the request cannot be sent or the body read
    /// - `ParseError` if the body is not a search response
    ///
    /// # Example
    /// ```no_run
    /// # async fn example() -> movie_search_core::Result<()> {
    /// use movie_search_core::{MovieApiClient, SearchRequest};
    /// let client = MovieApiClient::new()?;
    /// let movies = client.search(&SearchRequest::new("batman").with_genre("action")).await?;
    /// for movie in movies {
    ///     println!("{} ({})", movie.title, movie.vote_average);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Movie>> {
        let url = self.search_url(request);
        let response = self.fetch_json(&url).await?;
        Ok(response.results)
    }

    /// GET a URL and decode the body as a search response
    ///
    /// Non-2xx responses are decoded like any other; an error page fails
    /// with `ParseError`.
    pub async fn fetch_json(&self, url: &str) -> Result<SearchResponse> {
        debug!(url, "sending search request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(MovieSearchError::HttpError)?;

        let status = response.status();
        let body = response.text().await.map_err(MovieSearchError::HttpError)?;
        debug!(url, %status, bytes = body.len(), "search response received");

        let parsed: SearchResponse =
            serde_json::from_str(&body).map_err(MovieSearchError::ParseError)?;
        Ok(parsed)
    }

    /// Configured API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> MovieApiClient {
        MovieApiClient::with_config(ClientConfig {
            base_url: server.uri(),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_client_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.timeout_secs, None);
        assert_eq!(config.query_encoding, QueryEncoding::Raw);
    }

    #[test]
    fn test_client_creation() {
        let client = MovieApiClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_search_url_uses_config() {
        let client = MovieApiClient::with_config(ClientConfig {
            base_url: "http://movies.local".to_string(),
            timeout_secs: Some(5),
            query_encoding: QueryEncoding::Percent,
        })
        .unwrap();
        let url = client.search_url(&SearchRequest::new("tom&jerry"));
        assert_eq!(url, "http://movies.local/api/v1/search/?q=tom%26jerry");
    }

    #[tokio::test]
    async fn test_search_sends_query_and_genre() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/search/"))
            .and(query_param("q", "batman"))
            .and(query_param("genre", "action"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "results": [{"id": 1, "title": "Batman", "vote_average": 7.8}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let movies = client_for(&server)
            .search(&SearchRequest::new("batman").with_genre("action"))
            .await
            .unwrap();

        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Batman");
        assert_eq!(movies[0].vote_average, 7.8);
    }

    #[tokio::test]
    async fn test_error_status_with_error_body_fails_to_parse() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<h1>Server Error</h1>"))
            .mount(&server)
            .await;

        let result = client_for(&server).search(&SearchRequest::new("batman")).await;
        assert!(matches!(result, Err(MovieSearchError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_error_status_with_search_body_is_decoded() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"results": []})))
            .mount(&server)
            .await;

        let movies = client_for(&server)
            .search(&SearchRequest::new("nothing"))
            .await
            .unwrap();
        assert!(movies.is_empty());
    }

    #[tokio::test]
    async fn test_missing_results_field() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"detail": "Not found."})))
            .mount(&server)
            .await;

        let result = client_for(&server).search(&SearchRequest::new("x")).await;
        assert!(matches!(result, Err(MovieSearchError::ParseError(_))));
    }

    #[tokio::test]
    async fn test_timeout_when_configured() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"results": []}))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let client = MovieApiClient::with_config(ClientConfig {
            base_url: server.uri(),
            timeout_secs: Some(1),
            ..ClientConfig::default()
        })
        .unwrap();

        match client.search(&SearchRequest::new("slow")).await {
            Err(MovieSearchError::HttpError(e)) => assert!(e.is_timeout()),
            other => panic!("Expected timeout, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let client = MovieApiClient::with_config(ClientConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();

        let result = client.search(&SearchRequest::new("batman")).await;
        assert!(matches!(result, Err(MovieSearchError::HttpError(_))));
    }
}
