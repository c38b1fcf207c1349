//! # sitegen
//!
//! Convert markdown documents to HTML.
//!
//! ## Design
//!
//! A document is split into blocks on blank lines. Each block is classified
//! (heading, code, quote, unordered list, ordered list, paragraph), stripped
//! of its block syntax, and its inline spans are tokenized into bold, italic,
//! code, link and image pieces. The result is a tree of
//! [`ElementNode`]s rooted at a `div`, which serializes to an HTML string.
//!
//! Every step is a pure function of its input: no global state, no I/O.
//!
//! ## Example
//!
//! ```rust
//! use sitegen::markdown_to_html;
//!
//! let node = markdown_to_html("# Hello\n\nSome **bold** text").unwrap();
//! assert_eq!(
//!     node.to_html(),
//!     "<div><h1>Hello</h1><p>Some <b>bold</b> text</p></div>"
//! );
//! ```
//!
//! ## Example (page)
//!
//! ```rust
//! use sitegen::PageService;
//!
//! let service = PageService::new();
//! let page = service
//!     .render("# Home\n\nWelcome", "<title>{{ Title }}</title>{{ Content }}")
//!     .unwrap();
//! assert_eq!(page, "<title>Home</title><div><h1>Home</h1><p>Welcome</p></div>");
//! ```

pub mod block;
mod convert;
pub mod inline;
mod options;
mod page;
mod service;

pub use block::{classify, split_blocks, BlockKind};
pub use convert::{block_to_node, convert_block, markdown_to_html};
pub use inline::{
    extract_markdown_images, extract_markdown_links, split_tokens_delimiter, text_to_children,
    text_to_tokens, DelimitedKind, InlineToken,
};
pub use options::{PageOptions, CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER};
pub use page::{extract_title, fill_template};
pub use service::{render_page, PageService};
pub use sitegen_core::{serialize, ElementNode};

/// Error type for sitegen operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SitegenError {
    #[error("Unbalanced delimiter `{delimiter}` in: {text}")]
    UnbalancedDelimiter { delimiter: String, text: String },

    #[error("Missing title: no level-1 heading found")]
    MissingTitle,

    /// Classified as code but not wrapped in fences. Indicates a bug.
    #[error("Malformed code block: {0}")]
    MalformedCodeBlock(String),
}

pub type Result<T> = std::result::Result<T, SitegenError>;
