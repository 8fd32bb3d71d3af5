use std::borrow::Cow;
use std::path::PathBuf;
use std::sync::Arc;

use crate::services::TemplateService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub data_dir: Arc<PathBuf>,
    pub templates: Arc<TemplateService>,
}

/// A wiki page, the sole persisted entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub body: Vec<u8>,
}

impl Page {
    /// Create a page with the given title and body
    pub fn new(title: impl Into<String>, body: Vec<u8>) -> Self {
        Self {
            title: title.into(),
            body,
        }
    }

    /// Create a page with an empty body, used when editing a page that
    /// does not exist yet
    pub fn empty(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }

    /// View the body as text for template rendering
    pub fn body_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
