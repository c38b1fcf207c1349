//! Block splitting and classification.

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of two or more line breaks separate blocks.
static BLANK_LINES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n{2,}").expect("blank line pattern is valid"));

/// Fence that opens and closes a code block
pub const CODE_FENCE: &str = "```";

/// The kind of a block, derived from its text alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// ATX heading with level (1-6)
    Heading(u8),
    /// Fenced code block
    Code,
    /// Every line starts with `>`
    Quote,
    /// Every line starts with `- `
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... without gaps
    OrderedList,
    /// Anything else
    Paragraph,
}

/// Split a document into trimmed, non-empty blocks.
///
/// `\r\n` line endings are normalized to `\n` first.
pub fn split_blocks(markdown: &str) -> Vec<String> {
    let markdown = markdown.replace("\r\n", "\n");
    BLANK_LINES_RE
        .split(&markdown)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .map(str::to_string)
        .collect()
}

/// Classify a trimmed block. First matching rule wins.
pub fn classify(block: &str) -> BlockKind {
    if let Some(level) = heading_level(block) {
        return BlockKind::Heading(level);
    }

    if is_code(block) {
        return BlockKind::Code;
    }

    if block.lines().all(|line| line.starts_with('>')) {
        return BlockKind::Quote;
    }

    if block.lines().all(|line| line.starts_with("- ")) {
        return BlockKind::UnorderedList;
    }

    if block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&ordered_prefix(i)))
    {
        return BlockKind::OrderedList;
    }

    BlockKind::Paragraph
}

/// Heading level if the block opens with 1-6 `#` and a space
pub fn heading_level(block: &str) -> Option<u8> {
    let hashes = block.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && block[hashes..].starts_with(' ') {
        Some(hashes as u8)
    } else {
        None
    }
}

/// Prefix expected on the zero-based `index`-th line of an ordered list
pub fn ordered_prefix(index: usize) -> String {
    format!("{}. ", index + 1)
}

fn is_code(block: &str) -> bool {
    block.len() >= 2 * CODE_FENCE.len()
        && block.starts_with(CODE_FENCE)
        && block.ends_with(CODE_FENCE)
}
