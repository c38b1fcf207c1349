//! Inline span tokenization.
//!
//! A span is tokenized in three stages: images are cut out first, then
//! links, then the remaining plain text is split on each delimiter in turn
//! (`` ` ``, `**`, `_`).

use once_cell::sync::Lazy;
use regex::Regex;
use sitegen_core::ElementNode;

use crate::{Result, SitegenError};

static IMAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"!\[([^\[\]]*)\]\(([^\[\]\(\)]+)\)").expect("image pattern is valid")
});

static LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[([^\[\]]*)\]\(([^\[\]\(\)]+)\)").expect("link pattern is valid")
});

/// Delimiters in the order they are applied.
const DELIMITERS: &[(&str, DelimitedKind)] = &[
    ("`", DelimitedKind::Code),
    ("**", DelimitedKind::Bold),
    ("_", DelimitedKind::Italic),
];

/// A typed piece of an inline span
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineToken {
    /// Plain text
    PlainText(String),

    /// Bold text (`**text**`)
    Bold(String),

    /// Italic text (`_text_`)
    Italic(String),

    /// Inline code (`` `text` ``)
    Code(String),

    /// Link with anchor text and URL
    Link { content: String, url: String },

    /// Image with alt text and URL
    Image { alt: String, url: String },
}

/// Token kinds produced by delimiter splitting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimitedKind {
    Bold,
    Italic,
    Code,
}

impl DelimitedKind {
    fn token(self, content: &str) -> InlineToken {
        let content = content.to_string();
        match self {
            DelimitedKind::Bold => InlineToken::Bold(content),
            DelimitedKind::Italic => InlineToken::Italic(content),
            DelimitedKind::Code => InlineToken::Code(content),
        }
    }
}

impl InlineToken {
    /// Create a plain text token
    pub fn plain(text: &str) -> Self {
        InlineToken::PlainText(text.to_string())
    }

    fn as_plain(&self) -> Option<&str> {
        match self {
            InlineToken::PlainText(text) => Some(text),
            _ => None,
        }
    }
}

impl From<InlineToken> for ElementNode {
    fn from(token: InlineToken) -> Self {
        match token {
            InlineToken::PlainText(text) => ElementNode::text(&text),
            InlineToken::Bold(text) => ElementNode::leaf("b", &text),
            InlineToken::Italic(text) => ElementNode::leaf("i", &text),
            InlineToken::Code(text) => ElementNode::leaf("code", &text),
            InlineToken::Link { content, url } => {
                ElementNode::leaf("a", &content).with_attr("href", &url)
            }
            InlineToken::Image { alt, url } => ElementNode::leaf("img", "")
                .with_attr("src", &url)
                .with_attr("alt", &alt),
        }
    }
}

/// Find every `![alt](url)` in the text, as `(alt, url)` pairs
pub fn extract_markdown_images(text: &str) -> Vec<(String, String)> {
    extract_pairs(&IMAGE_RE, text)
}

/// Find every `[anchor](url)` in the text, as `(anchor, url)` pairs
pub fn extract_markdown_links(text: &str) -> Vec<(String, String)> {
    extract_pairs(&LINK_RE, text)
}

fn extract_pairs(re: &Regex, text: &str) -> Vec<(String, String)> {
    re.captures_iter(text)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
        .collect()
}

/// Tokenize an inline span
pub fn text_to_tokens(text: &str) -> Result<Vec<InlineToken>> {
    let tokens = split_tokens_pattern(vec![InlineToken::plain(text)], &IMAGE_RE, |alt, url| {
        InlineToken::Image { alt, url }
    });
    let mut tokens = split_tokens_pattern(tokens, &LINK_RE, |content, url| InlineToken::Link {
        content,
        url,
    });

    for &(delimiter, kind) in DELIMITERS {
        tokens = split_tokens_delimiter(tokens, delimiter, kind)?;
    }

    Ok(tokens)
}

/// Tokenize an inline span straight into element nodes
pub fn text_to_children(text: &str) -> Result<Vec<ElementNode>> {
    Ok(text_to_tokens(text)?
        .into_iter()
        .map(ElementNode::from)
        .collect())
}

/// Split every plain text token on `delimiter`; odd fragments become `kind`.
///
/// Fails if a plain text token contains the delimiter and the text one
/// character past its first occurrence holds no further occurrence. Only
/// that is checked: an odd count above one passes, and so does a lone `***`
/// for `**` since the scan restarts inside the first match.
pub fn split_tokens_delimiter(
    tokens: Vec<InlineToken>,
    delimiter: &str,
    kind: DelimitedKind,
) -> Result<Vec<InlineToken>> {
    for text in tokens.iter().filter_map(InlineToken::as_plain) {
        if let Some(start) = text.find(delimiter) {
            if !text[start + 1..].contains(delimiter) {
                return Err(SitegenError::UnbalancedDelimiter {
                    delimiter: delimiter.to_string(),
                    text: text.to_string(),
                });
            }
        }
    }

    let mut result = Vec::with_capacity(tokens.len());
    for token in tokens {
        let text = match token {
            InlineToken::PlainText(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };

        for (i, fragment) in text.split(delimiter).enumerate() {
            if fragment.is_empty() {
                continue;
            }
            if i % 2 == 1 {
                result.push(kind.token(fragment));
            } else {
                result.push(InlineToken::plain(fragment));
            }
        }
    }

    Ok(result)
}

/// Cut every match of `re` out of the plain text tokens
fn split_tokens_pattern<F>(tokens: Vec<InlineToken>, re: &Regex, make: F) -> Vec<InlineToken>
where
    F: Fn(String, String) -> InlineToken,
{
    let mut result = Vec::with_capacity(tokens.len());

    for token in tokens {
        let text = match token {
            InlineToken::PlainText(text) => text,
            other => {
                result.push(other);
                continue;
            }
        };

        let mut last = 0;
        for caps in re.captures_iter(&text) {
            let Some(whole) = caps.get(0) else { continue };
            if whole.start() > last {
                result.push(InlineToken::plain(&text[last..whole.start()]));
            }
            result.push(make(caps[1].to_string(), caps[2].to_string()));
            last = whole.end();
        }
        if last < text.len() {
            result.push(InlineToken::plain(&text[last..]));
        }
    }

    result
}
