//! Markdown serialization of block sequences.

use crate::model::Block;

/// Convert blocks back to markdown text.
///
/// Each block becomes one line followed by a blank line, so the output
/// parses back to the same blocks.
pub fn to_markdown(blocks: &[Block]) -> String {
    let mut lines = Vec::with_capacity(blocks.len() * 2);
    for block in blocks {
        lines.push(block.to_markdown());
        lines.push(String::new());
    }
    lines.join("\n")
}
