//! Block-level types.

use serde::{Deserialize, Serialize};

/// Structural kind of a block.
///
/// The set is closed: renderers match on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Level 1 heading (`# Title`)
    Heading1,
    /// Level 2 heading (`## Section`)
    Heading2,
    /// Plain paragraph
    Paragraph,
}

impl BlockKind {
    /// Create a heading kind from its level, if the level is supported.
    pub fn heading(level: usize) -> Option<Self> {
        match level {
            1 => Some(BlockKind::Heading1),
            2 => Some(BlockKind::Heading2),
            _ => None,
        }
    }

    /// Check if this is a heading kind.
    pub fn is_heading(&self) -> bool {
        matches!(self, BlockKind::Heading1 | BlockKind::Heading2)
    }

    /// Get the heading level (1-2) or None for paragraphs.
    pub fn level(&self) -> Option<u8> {
        match self {
            BlockKind::Heading1 => Some(1),
            BlockKind::Heading2 => Some(2),
            BlockKind::Paragraph => None,
        }
    }

    /// HTML tag used to render this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Heading1 => "h1",
            BlockKind::Heading2 => "h2",
            BlockKind::Paragraph => "p",
        }
    }

    /// Markdown marker that introduces a block of this kind.
    pub fn marker(&self) -> &'static str {
        match self {
            BlockKind::Heading1 => "# ",
            BlockKind::Heading2 => "## ",
            BlockKind::Paragraph => "",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BlockKind::Heading1 => "heading1",
            BlockKind::Heading2 => "heading2",
            BlockKind::Paragraph => "paragraph",
        };
        f.write_str(name)
    }
}

/// A classified, normalized unit of document structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Structural kind
    pub kind: BlockKind,

    /// Text content on a single logical line, without markdown markers
    pub text: String,
}

impl Block {
    /// Create a new block.
    pub fn new(kind: BlockKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a level 1 heading block.
    pub fn heading1(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading1, text)
    }

    /// Create a level 2 heading block.
    pub fn heading2(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Heading2, text)
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::new(BlockKind::Paragraph, text)
    }

    /// Create a block of the same kind carrying different text.
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self::new(self.kind, text)
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        self.kind.is_heading()
    }

    /// Markdown source line for this block.
    pub fn to_markdown(&self) -> String {
        format!("{}{}", self.kind.marker(), self.text)
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:?}", self.kind, self.text)
    }
}
