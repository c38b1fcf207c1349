//! HTML serialization
//!
//! Converts an element tree into an HTML string.

use crate::node::ElementNode;

/// Serialize a node and its descendants to an HTML string
pub fn serialize(node: &ElementNode) -> String {
    let mut output = String::with_capacity(256);
    serialize_node(node, false, &mut output);
    output
}

/// `fold` is set once a `p` element has been entered: newlines in text values
/// below it render as single spaces.
fn serialize_node(node: &ElementNode, fold: bool, out: &mut String) {
    let Some(tag) = node.tag.as_deref() else {
        if let Some(value) = &node.value {
            push_value(value, fold, out);
        }
        return;
    };

    let fold = fold || tag == "p";

    out.push('<');
    out.push_str(tag);
    serialize_attributes(node, out);
    out.push('>');

    if let Some(value) = &node.value {
        push_value(value, fold, out);
    }

    for child in &node.children {
        serialize_node(child, fold, out);
    }

    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn serialize_attributes(node: &ElementNode, out: &mut String) {
    for (name, value) in &node.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

fn push_value(value: &str, fold: bool, out: &mut String) {
    if fold {
        for c in value.chars() {
            out.push(if c == '\n' { ' ' } else { c });
        }
    } else {
        out.push_str(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_leaf() {
        let node = ElementNode::text("Hello World");
        assert_eq!(serialize(&node), "Hello World");
    }

    #[test]
    fn test_empty_text_leaf() {
        let node = ElementNode::default();
        assert_eq!(serialize(&node), "");
    }

    #[test]
    fn test_leaf_with_tag() {
        let node = ElementNode::leaf("b", "bold");
        assert_eq!(serialize(&node), "<b>bold</b>");
    }

    #[test]
    fn test_link_attributes() {
        let node = ElementNode::leaf("a", "Click me!")
            .with_attr("href", "https://www.google.com")
            .with_attr("target", "_blank");
        assert_eq!(
            serialize(&node),
            "<a href=\"https://www.google.com\" target=\"_blank\">Click me!</a>"
        );
    }

    #[test]
    fn test_image_is_not_self_closing() {
        let node = ElementNode::leaf("img", "")
            .with_attr("src", "test.png")
            .with_attr("alt", "Test");
        assert_eq!(serialize(&node), "<img src=\"test.png\" alt=\"Test\"></img>");
    }

    #[test]
    fn test_nested_parents() {
        let node = ElementNode::parent(
            "div",
            vec![ElementNode::parent(
                "span",
                vec![ElementNode::leaf("b", "grandchild")],
            )],
        );
        assert_eq!(serialize(&node), "<div><span><b>grandchild</b></span></div>");
    }

    #[test]
    fn test_mixed_children() {
        let node = ElementNode::parent(
            "p",
            vec![
                ElementNode::leaf("b", "Bold text"),
                ElementNode::text("Normal text"),
                ElementNode::leaf("i", "italic text"),
                ElementNode::text("Normal text"),
            ],
        );
        assert_eq!(
            serialize(&node),
            "<p><b>Bold text</b>Normal text<i>italic text</i>Normal text</p>"
        );
    }

    #[test]
    fn test_paragraph_folds_newlines() {
        let node = ElementNode::parent(
            "p",
            vec![
                ElementNode::text("first line\nsecond "),
                ElementNode::leaf("b", "bold\nspan"),
            ],
        );
        let html = serialize(&node);
        assert_eq!(html, "<p>first line second <b>bold span</b></p>");
        assert!(!html.contains('\n'));
    }

    #[test]
    fn test_paragraph_folds_own_value() {
        let node = ElementNode::leaf("p", "one\ntwo");
        assert_eq!(serialize(&node), "<p>one two</p>");
    }

    #[test]
    fn test_code_keeps_newlines() {
        let node = ElementNode::parent(
            "pre",
            vec![ElementNode::leaf("code", "let x = 1;\nlet y = 2;\n")],
        );
        assert_eq!(
            serialize(&node),
            "<pre><code>let x = 1;\nlet y = 2;\n</code></pre>"
        );
    }

    #[test]
    fn test_blockquote_keeps_newlines() {
        let node = ElementNode::parent("blockquote", vec![ElementNode::text("a\nb")]);
        assert_eq!(serialize(&node), "<blockquote>a\nb</blockquote>");
    }

    #[test]
    fn test_to_html_matches_serialize() {
        let node = ElementNode::parent("div", vec![ElementNode::leaf("h1", "Title")]);
        assert_eq!(node.to_html(), serialize(&node));
    }
}
