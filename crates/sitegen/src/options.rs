//! Configuration options for page rendering

/// Placeholder replaced by the page title
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced by the rendered document
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Options for filling a page template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    /// Literal token replaced by the page title
    pub title_placeholder: String,

    /// Literal token replaced by the serialized HTML
    pub content_placeholder: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title_placeholder: TITLE_PLACEHOLDER.to_string(),
            content_placeholder: CONTENT_PLACEHOLDER.to_string(),
        }
    }
}
