//! URL helper functions for the search endpoint
//!
//! Builds search URLs against a configurable API base.

use crate::types::SearchRequest;

/// Base URL of a locally running API server
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Path of the search endpoint, including its trailing slash
pub const SEARCH_PATH: &str = "/api/v1/search/";

/// How query values are written into the URL
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QueryEncoding {
    /// Interpolate the value verbatim. Characters such as `&`, `=` and `#`
    /// change the meaning of the query string.
    #[default]
    Raw,
    /// Percent-encode the value.
    Percent,
}

impl QueryEncoding {
    fn apply<'a>(self, value: &'a str) -> std::borrow::Cow<'a, str> {
        match self {
            QueryEncoding::Raw => std::borrow::Cow::Borrowed(value),
            QueryEncoding::Percent => urlencoding::encode(value),
        }
    }
}

/// Builds the search URL for a given query
///
/// # Arguments
/// * `base_url` - API base, with or without a trailing slash
/// * `query` - Search query string
/// * `encoding` - How to write the query into the URL
///
/// # Example
/// ```
/// use movie_search_core::url::{build_search_url, QueryEncoding};
/// let url = build_search_url("http://127.0.0.1:8000", "batman", QueryEncoding::Raw);
/// assert_eq!(url, "http://127.0.0.1:8000/api/v1/search/?q=batman");
///
/// let url = build_search_url("http://127.0.0.1:8000", "tom&jerry", QueryEncoding::Percent);
/// assert_eq!(url, "http://127.0.0.1:8000/api/v1/search/?q=tom%26jerry");
/// ```
pub fn build_search_url(base_url: &str, query: &str, encoding: QueryEncoding) -> String {
    format!(
        "{}{}?q={}",
        base_url.trim_end_matches('/'),
        SEARCH_PATH,
        encoding.apply(query)
    )
}

/// Builds the search URL for a full request, including the genre filter
///
/// # Example
/// ```
/// use movie_search_core::SearchRequest;
/// use movie_search_core::url::{build_search_request_url, QueryEncoding};
/// let request = SearchRequest::new("batman").with_genre("action");
/// let url = build_search_request_url("http://127.0.0.1:8000/", &request, QueryEncoding::Raw);
/// assert_eq!(url, "http://127.0.0.1:8000/api/v1/search/?q=batman&genre=action");
/// ```
pub fn build_search_request_url(
    base_url: &str,
    request: &SearchRequest,
    encoding: QueryEncoding,
) -> String {
    let mut url = build_search_url(base_url, &request.query, encoding);
    if let Some(genre) = &request.genre {
        url.push_str("&genre=");
        url.push_str(&encoding.apply(genre));
    }
    url
}
