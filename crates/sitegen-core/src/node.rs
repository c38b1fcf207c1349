//! Element node structure for the HTML output tree.
//!
//! A node is either a text leaf (no tag, a value) or an element (a tag, with
//! an optional value and any number of children). Both shapes share one
//! struct so callers inspect `tag` and `children` instead of dispatching on a
//! type hierarchy.

use indexmap::IndexMap;

/// A node of the HTML output tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementNode {
    /// Tag name (lowercase, e.g. "p", "h1"). `None` for raw text leaves
    pub tag: Option<String>,

    /// Literal text rendered before the children
    pub value: Option<String>,

    /// Child nodes, in document order
    pub children: Vec<ElementNode>,

    /// Attributes, iterated in insertion order when rendered
    pub attributes: IndexMap<String, String>,
}

impl ElementNode {
    /// Create a raw text leaf
    pub fn text(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            ..Default::default()
        }
    }

    /// Create an element carrying a literal value and no children
    pub fn leaf(tag: &str, value: &str) -> Self {
        Self {
            tag: Some(tag.to_lowercase()),
            value: Some(value.to_string()),
            ..Default::default()
        }
    }

    /// Create an element wrapping the given children
    pub fn parent(tag: &str, children: Vec<ElementNode>) -> Self {
        Self {
            tag: Some(tag.to_lowercase()),
            children,
            ..Default::default()
        }
    }

    /// Builder-style attribute setter
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Check if this is a raw text leaf
    pub fn is_text(&self) -> bool {
        self.tag.is_none()
    }

    /// Get the tag name, if any
    pub fn tag_name(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute. An existing attribute keeps its original position.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Add a child node
    pub fn add_child(&mut self, child: ElementNode) {
        self.children.push(child);
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        let mut content = self.value.clone().unwrap_or_default();
        for child in &self.children {
            content.push_str(&child.text_content());
        }
        content
    }

    /// Render this node and its descendants as HTML
    pub fn to_html(&self) -> String {
        crate::serialize::serialize(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_text() {
        let node = ElementNode::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.tag_name(), None);
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_create_leaf() {
        let node = ElementNode::leaf("B", "bold");
        assert!(!node.is_text());
        assert_eq!(node.tag_name(), Some("b"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_attributes() {
        let node = ElementNode::leaf("a", "Example")
            .with_attr("href", "https://example.com")
            .with_attr("title", "Example");
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("title"), Some("Example"));
        assert_eq!(node.attr("class"), None);
    }

    #[test]
    fn test_set_attr_keeps_position() {
        let mut node = ElementNode::leaf("img", "")
            .with_attr("src", "a.png")
            .with_attr("alt", "A");
        node.set_attr("src", "b.png");

        let names: Vec<&str> = node.attributes.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["src", "alt"]);
        assert_eq!(node.attr("src"), Some("b.png"));
    }

    #[test]
    fn test_children() {
        let mut parent = ElementNode::parent("div", Vec::new());
        parent.add_child(ElementNode::text("Hello"));
        parent.add_child(ElementNode::leaf("span", " "));
        parent.add_child(ElementNode::text("World"));

        assert_eq!(parent.children.len(), 3);
        assert_eq!(parent.children.iter().filter(|c| c.is_text()).count(), 2);
    }

    #[test]
    fn test_text_content() {
        let div = ElementNode::parent(
            "div",
            vec![
                ElementNode::text("Hello "),
                ElementNode::parent("span", vec![ElementNode::text("World")]),
            ],
        );

        assert_eq!(div.text_content(), "Hello World");
    }
}
