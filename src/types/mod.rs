use std::borrow::Cow;
use std::sync::Arc;

use crate::config::Config;
use crate::services::PageStore;
use crate::templates::TemplateSet;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: PageStore,
    pub templates: Arc<TemplateSet>,
}

/// In-memory record for one wiki page. Built transiently per request from a
/// file read or submitted form data; the filesystem is the source of truth.
#[derive(Debug, Clone)]
pub struct Page {
    /// Unique identifier, doubling as the filesystem key.
    pub title: String,
    /// Raw body bytes, not required to be valid UTF-8.
    pub body: Vec<u8>,
    /// Titles of all persisted pages, consumed by the home view.
    pub list: Vec<String>,
}

impl Page {
    /// Page with only the title set, for edit forms over missing files.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: Vec::new(),
            list: Vec::new(),
        }
    }

    /// Lossy text view of the body for template interpolation.
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_has_no_body_or_list() {
        let page = Page::empty("Draft");
        assert_eq!(page.title, "Draft");
        assert!(page.body.is_empty());
        assert!(page.list.is_empty());
    }

    #[test]
    fn body_text_is_lossy_over_invalid_utf8() {
        let page = Page {
            title: "Binary".to_string(),
            body: vec![b'h', b'i', 0xFF],
            list: Vec::new(),
        };
        assert!(page.body_text().starts_with("hi"));
    }
}
