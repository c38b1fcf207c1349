//! sitegen-core - HTML element tree and serialization
//!
//! This crate provides the output data structure of the markdown converter:
//! a single [`ElementNode`] type covering both tagged elements and raw text
//! leaves, plus the serializer that renders a tree to an HTML string.
//!
//! # Architecture
//!
//! ```text
//!                    ┌──────────────┐
//! Markdown String ──▶│ Element Tree │ ──▶ HTML String
//!                    └──────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use sitegen_core::{serialize, ElementNode};
//!
//! let tree = ElementNode::parent(
//!     "p",
//!     vec![
//!         ElementNode::text("This is "),
//!         ElementNode::leaf("b", "bold"),
//!         ElementNode::text(" text."),
//!     ],
//! );
//!
//! assert_eq!(serialize(&tree), "<p>This is <b>bold</b> text.</p>");
//! ```

mod node;
mod serialize;

pub use node::ElementNode;
pub use serialize::serialize;
