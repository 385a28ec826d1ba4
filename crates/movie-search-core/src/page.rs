//! Page elements the search handler reads from and writes to
//!
//! [`Page`] is the seam between the handler and whatever hosts the UI.
//! [`MemoryPage`] keeps elements in memory and backs the Tauri plugin.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Default id of the query input element
pub const SEARCH_INPUT_ID: &str = "search";

/// Default id of the results container element
pub const MOVIES_CONTAINER_ID: &str = "movies";

/// Access to page elements by id
pub trait Page: Send + Sync {
    /// Current value of the input element, or `None` if it does not exist
    fn input_value(&self, id: &str) -> Option<String>;

    /// Replace the inner HTML of an element
    ///
    /// Returns `false` if the element does not exist.
    fn set_inner_html(&self, id: &str, html: &str) -> bool;
}

#[derive(Debug, Default)]
struct Element {
    value: String,
    inner_html: String,
}

/// In-memory page holding elements keyed by id
#[derive(Debug, Default)]
pub struct MemoryPage {
    elements: Mutex<HashMap<String, Element>>,
}

impl MemoryPage {
    /// Create an empty page
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page with the default `search` input and `movies` container
    pub fn with_search_elements() -> Self {
        let page = Self::new();
        page.add_element(SEARCH_INPUT_ID);
        page.add_element(MOVIES_CONTAINER_ID);
        page
    }

    /// Add an empty element, replacing any element with the same id
    pub fn add_element(&self, id: &str) {
        self.lock().insert(id.to_string(), Element::default());
    }

    /// Set the value of an input element
    ///
    /// Returns `false` if the element does not exist.
    pub fn set_value(&self, id: &str, value: &str) -> bool {
        match self.lock().get_mut(id) {
            Some(element) => {
                element.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Inner HTML of an element, or `None` if it does not exist
    pub fn inner_html(&self, id: &str) -> Option<String> {
        self.lock().get(id).map(|element| element.inner_html.clone())
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Element>> {
        // No invariant spans more than one element write
        self.elements.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Page for MemoryPage {
    fn input_value(&self, id: &str) -> Option<String> {
        self.lock().get(id).map(|element| element.value.clone())
    }

    fn set_inner_html(&self, id: &str, html: &str) -> bool {
        match self.lock().get_mut(id) {
            Some(element) => {
                element.inner_html = html.to_string();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_search_elements() {
        let page = MemoryPage::with_search_elements();
        assert_eq!(page.input_value(SEARCH_INPUT_ID), Some(String::new()));
        assert_eq!(page.inner_html(MOVIES_CONTAINER_ID), Some(String::new()));
    }

    #[test]
    fn test_set_value_round_trip() {
        let page = MemoryPage::with_search_elements();
        assert!(page.set_value(SEARCH_INPUT_ID, "  batman "));
        assert_eq!(page.input_value(SEARCH_INPUT_ID).as_deref(), Some("  batman "));
    }

    #[test]
    fn test_missing_element() {
        let page = MemoryPage::new();
        assert!(!page.set_value("search", "x"));
        assert!(!page.set_inner_html("movies", "<p></p>"));
        assert_eq!(page.input_value("search"), None);
        assert_eq!(page.inner_html("movies"), None);
    }

    #[test]
    fn test_set_inner_html_replaces() {
        let page = MemoryPage::with_search_elements();
        page.set_inner_html(MOVIES_CONTAINER_ID, "<p>old</p>");
        page.set_inner_html(MOVIES_CONTAINER_ID, "");
        assert_eq!(page.inner_html(MOVIES_CONTAINER_ID).as_deref(), Some(""));
    }
}
