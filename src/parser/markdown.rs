//! Line-oriented block parser for plain-structured markdown.

use crate::model::{Block, BlockKind};

/// Parse markdown text into an ordered sequence of blocks.
///
/// Recognized structure:
/// - `# text` starts a level 1 heading, `## text` a level 2 heading. A
///   heading always ends at the end of its line.
/// - Any other non-blank line starts or continues a paragraph. Consecutive
///   lines are joined with a single space.
/// - Blank lines separate blocks and never appear inside one.
///
/// Lines end at `\n`, `\r\n`, a lone `\r`, and the other line and paragraph
/// separators listed in [`is_line_break`].
///
/// Anything that looks almost like a heading (`###`, `#text`) is kept as
/// paragraph text. This function never fails.
pub fn parse(text: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::default();

    for line in split_lines(text) {
        let line = line.trim();

        if line.is_empty() {
            builder.flush_paragraph();
            continue;
        }

        match split_heading(line) {
            Some((kind, heading)) => builder.push_heading(kind, heading),
            None => builder.push_paragraph_line(line),
        }
    }

    builder.finish()
}

/// Characters that end a line. `\r\n` counts as a single break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines without their terminators. A trailing break does
/// not produce an extra empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some((index, brk)) = rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            let line = rest;
            rest = "";
            return Some(line);
        };

        let line = &rest[..index];
        let mut end = index + brk.len_utf8();
        if brk == '\r' && rest[end..].starts_with('\n') {
            end += 1;
        }
        rest = &rest[end..];
        Some(line)
    })
}

/// Split a trimmed line into heading kind and heading text.
///
/// Returns `None` unless the line starts with one or two `#` followed by
/// whitespace.
fn split_heading(line: &str) -> Option<(BlockKind, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    let kind = BlockKind::heading(hashes)?;

    let rest = &line[hashes..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }

    Some((kind, rest.trim()))
}

/// Accumulates blocks and the lines of the paragraph being read.
#[derive(Default)]
struct BlockBuilder<'a> {
    blocks: Vec<Block>,
    paragraph: Vec<&'a str>,
}

impl<'a> BlockBuilder<'a> {
    fn push_heading(&mut self, kind: BlockKind, text: &str) {
        self.flush_paragraph();
        self.blocks.push(Block::new(kind, text));
    }

    fn push_paragraph_line(&mut self, line: &'a str) {
        self.paragraph.push(line);
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join(" ");
        self.paragraph.clear();
        self.blocks.push(Block::paragraph(text));
    }

    fn finish(mut self) -> Vec<Block> {
        self.flush_paragraph();
        self.blocks
    }
}
