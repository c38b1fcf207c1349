//! PageService - the main entry point for rendering markdown pages.

use sitegen_core::ElementNode;

use crate::convert::markdown_to_html;
use crate::options::PageOptions;
use crate::page::{extract_title, fill_template};
use crate::Result;

/// Renders markdown documents into full HTML pages
#[derive(Debug, Clone, Default)]
pub struct PageService {
    options: PageOptions,
}

impl PageService {
    /// Create a new PageService with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a PageService with custom options
    pub fn with_options(options: PageOptions) -> Self {
        Self { options }
    }

    /// Get the current options
    pub fn options(&self) -> &PageOptions {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut PageOptions {
        &mut self.options
    }

    /// Convert markdown to its element tree
    pub fn convert(&self, markdown: &str) -> Result<ElementNode> {
        markdown_to_html(markdown)
    }

    /// Render a markdown document into the template.
    ///
    /// The document is converted before its title is looked up, so a
    /// malformed span is reported ahead of a missing title.
    pub fn render(&self, markdown: &str, template: &str) -> Result<String> {
        let content = self.convert(markdown)?.to_html();
        let title = extract_title(markdown)?;
        log::debug!("rendering page {:?} ({} bytes of content)", title, content.len());

        Ok(fill_template(template, &title, &content, &self.options))
    }
}

/// Render a page with default options
pub fn render_page(markdown: &str, template: &str) -> Result<String> {
    PageService::new().render(markdown, template)
}
