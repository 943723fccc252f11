// File: src/render.rs
// Purpose: Render sink capability and an in-memory content region

use maud::html;
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// A request to replace the content of one region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Selector of the region to replace, e.g. "#app-root"
    pub container: String,
    /// Element name of the component to place in the region
    pub selector: String,
    /// Path handed to the component
    pub path: String,
    /// Optional message, used by the error route
    pub message: Option<String>,
}

impl RenderRequest {
    /// Renders the component element with escaped attributes
    ///
    /// # Examples
    ///
    /// ```
    /// use wayfinder::RenderRequest;
    ///
    /// let request = RenderRequest {
    ///     container: "#app-root".into(),
    ///     selector: "error-page".into(),
    ///     path: "/a\"b".into(),
    ///     message: Some("Path not found".into()),
    /// };
    /// assert_eq!(
    ///     request.to_markup(),
    ///     r#"<error-page path="/a&quot;b" message="Path not found"></error-page>"#
    /// );
    /// ```
    pub fn to_markup(&self) -> String {
        let path = html! { (self.path) }.into_string();
        let message = self
            .message
            .as_ref()
            .map(|message| format!(r#" message="{}""#, html! { (message) }.into_string()))
            .unwrap_or_default();

        format!(
            r#"<{selector} path="{path}"{message}></{selector}>"#,
            selector = self.selector
        )
    }
}

/// Capability that replaces the visible content region
pub trait RenderSink: Send + Sync {
    fn replace_content(&self, request: &RenderRequest);
}

/// In-memory render sink keeping the latest markup per container
#[derive(Debug, Default)]
pub struct MarkupRegion {
    regions: Mutex<HashMap<String, String>>,
}

impl MarkupRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current markup of a container, if anything was rendered into it
    pub fn content(&self, container: &str) -> Option<String> {
        self.regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(container)
            .cloned()
    }
}

impl RenderSink for MarkupRegion {
    fn replace_content(&self, request: &RenderRequest) {
        tracing::debug!(container = %request.container, selector = %request.selector, "replacing content");
        self.regions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(request.container.clone(), request.to_markup());
    }
}
