//! Convert markdown blocks to the HTML element tree
//!
//! Each block is classified, stripped of its block-level syntax, and turned
//! into one element whose inline content comes from the tokenizer.

use sitegen_core::ElementNode;

use crate::block::{classify, ordered_prefix, split_blocks, BlockKind, CODE_FENCE};
use crate::inline::text_to_children;
use crate::{Result, SitegenError};

/// Convert a markdown document into a `div` wrapping one element per block
pub fn markdown_to_html(markdown: &str) -> Result<ElementNode> {
    let blocks = split_blocks(markdown);
    log::debug!("split document into {} blocks", blocks.len());

    let children = blocks
        .iter()
        .map(String::as_str)
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;

    Ok(ElementNode::parent("div", children))
}

/// Classify a single trimmed block and convert it
pub fn block_to_node(block: &str) -> Result<ElementNode> {
    let kind = classify(block);
    log::trace!("classified block as {:?}", kind);
    convert_block(block, kind)
}

/// Convert a block whose kind is already known
pub fn convert_block(block: &str, kind: BlockKind) -> Result<ElementNode> {
    match kind {
        BlockKind::Heading(level) => {
            let marker = format!("{} ", "#".repeat(level as usize));
            let text = block.strip_prefix(marker.as_str()).unwrap_or(block);
            Ok(ElementNode::parent(
                &format!("h{}", level),
                text_to_children(text)?,
            ))
        }

        BlockKind::Paragraph => Ok(ElementNode::parent("p", text_to_children(block.trim())?)),

        BlockKind::Quote => {
            let text = block
                .lines()
                .map(|line| line.strip_prefix('>').unwrap_or(line).trim())
                .collect::<Vec<_>>()
                .join("\n");
            Ok(ElementNode::parent("blockquote", text_to_children(&text)?))
        }

        BlockKind::UnorderedList => {
            let items = block
                .lines()
                .map(|line| list_item(line.strip_prefix("- ").unwrap_or(line)))
                .collect::<Result<Vec<_>>>()?;
            Ok(ElementNode::parent("ul", items))
        }

        BlockKind::OrderedList => {
            let items = block
                .lines()
                .enumerate()
                .map(|(i, line)| {
                    let prefix = ordered_prefix(i);
                    list_item(line.strip_prefix(prefix.as_str()).unwrap_or(line))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(ElementNode::parent("ol", items))
        }

        BlockKind::Code => {
            let code = block
                .strip_prefix(CODE_FENCE)
                .and_then(|rest| rest.strip_suffix(CODE_FENCE))
                .ok_or_else(|| SitegenError::MalformedCodeBlock(block.to_string()))?;
            Ok(ElementNode::parent(
                "pre",
                vec![ElementNode::leaf("code", code.trim_start())],
            ))
        }
    }
}

fn list_item(text: &str) -> Result<ElementNode> {
    Ok(ElementNode::parent("li", text_to_children(text)?))
}
