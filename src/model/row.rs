//! Row-level types: the aligned two-column model handed to renderers.

use super::{Block, BlockKind};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// One line of the two-column layout.
///
/// A side is blank (empty text, no kind) when the other sequence ran out of
/// blocks during alignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Kind that drives shared row styling
    pub kind: BlockKind,

    /// Source-side text
    pub left_text: String,

    /// Translated-side text
    pub right_text: String,

    /// Kind of the source block, if present
    pub left_kind: Option<BlockKind>,

    /// Kind of the translated block, if present
    pub right_kind: Option<BlockKind>,
}

impl Row {
    /// Pair a source block with a translated block.
    pub fn paired(left: &Block, right: &Block, kind: BlockKind) -> Self {
        Self {
            kind,
            left_text: left.text.clone(),
            right_text: right.text.clone(),
            left_kind: Some(left.kind),
            right_kind: Some(right.kind),
        }
    }

    /// A row with only the source side filled.
    pub fn left_only(left: &Block) -> Self {
        Self {
            kind: left.kind,
            left_text: left.text.clone(),
            right_text: String::new(),
            left_kind: Some(left.kind),
            right_kind: None,
        }
    }

    /// A row with only the translated side filled.
    pub fn right_only(right: &Block) -> Self {
        Self {
            kind: right.kind,
            left_text: String::new(),
            right_text: right.text.clone(),
            left_kind: None,
            right_kind: Some(right.kind),
        }
    }

    /// Both sides carry a block.
    pub fn is_paired(&self) -> bool {
        self.left_kind.is_some() && self.right_kind.is_some()
    }

    /// Neither side has any text.
    pub fn is_empty(&self) -> bool {
        self.left_text.is_empty() && self.right_text.is_empty()
    }

    /// Both sides are present but classified differently.
    pub fn has_kind_conflict(&self) -> bool {
        matches!((self.left_kind, self.right_kind), (Some(l), Some(r)) if l != r)
    }
}

/// Source and translation block counts that did not agree.
///
/// This is a warning, not a failure: the shorter side is padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCountMismatch {
    /// Number of source blocks
    pub source: usize,

    /// Number of translated blocks
    pub translated: usize,
}

impl BlockCountMismatch {
    /// Number of rows that carry only one side.
    pub fn padded_rows(&self) -> usize {
        self.source.abs_diff(self.translated)
    }
}

impl std::fmt::Display for BlockCountMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "block count mismatch (source={}, translation={})",
            self.source, self.translated
        )
    }
}

/// Validated, ordered rows ready for rendering.
///
/// Deserialized models go through [`RowModel::build`] as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRowModel")]
pub struct RowModel {
    rows: Vec<Row>,
    mismatch: Option<BlockCountMismatch>,
}

/// Unvalidated wire form of [`RowModel`].
#[derive(Deserialize)]
struct RawRowModel {
    rows: Vec<Row>,
    #[serde(default)]
    mismatch: Option<BlockCountMismatch>,
}

impl TryFrom<RawRowModel> for RowModel {
    type Error = Error;

    fn try_from(raw: RawRowModel) -> Result<Self> {
        Ok(RowModel::build(raw.rows)?.with_mismatch(raw.mismatch))
    }
}

impl RowModel {
    /// Validate rows and package them for rendering.
    ///
    /// Fails with [`Error::EmptyRow`] if a row has no text on either side.
    pub fn build(rows: Vec<Row>) -> Result<Self> {
        if let Some(index) = rows.iter().position(Row::is_empty) {
            return Err(Error::EmptyRow(index));
        }
        Ok(Self {
            rows,
            mismatch: None,
        })
    }

    /// Attach the block-count mismatch observed during alignment.
    pub fn with_mismatch(mut self, mismatch: Option<BlockCountMismatch>) -> Self {
        self.mismatch = mismatch;
        self
    }

    /// The rows in document order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Iterate over the rows.
    pub fn iter(&self) -> std::slice::Iter<'_, Row> {
        self.rows.iter()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Block-count mismatch, if one was observed.
    pub fn mismatch(&self) -> Option<BlockCountMismatch> {
        self.mismatch
    }

    /// Summarize the rows.
    pub fn stats(&self) -> RowStats {
        let mut stats = RowStats::new();
        for row in self.iter() {
            stats.add_row(row);
        }
        stats
    }
}

impl<'a> IntoIterator for &'a RowModel {
    type Item = &'a Row;
    type IntoIter = std::slice::Iter<'a, Row>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Counts collected over a row model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowStats {
    /// Total number of rows
    pub row_count: usize,

    /// Rows with both sides present
    pub paired_count: usize,

    /// Rows with only the source side
    pub left_only_count: usize,

    /// Rows with only the translated side
    pub right_only_count: usize,

    /// Paired rows whose sides have different kinds
    pub kind_conflict_count: usize,

    /// Rows styled as headings
    pub heading_count: usize,

    /// Rows styled as paragraphs
    pub paragraph_count: usize,
}

impl RowStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one row.
    pub fn add_row(&mut self, row: &Row) {
        self.row_count += 1;
        match (row.left_kind, row.right_kind) {
            (Some(_), Some(_)) => self.paired_count += 1,
            (Some(_), None) => self.left_only_count += 1,
            (None, Some(_)) => self.right_only_count += 1,
            (None, None) => {}
        }
        if row.has_kind_conflict() {
            self.kind_conflict_count += 1;
        }
        if row.kind.is_heading() {
            self.heading_count += 1;
        } else {
            self.paragraph_count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_constructors() {
        let left = Block::heading1("Titre");
        let right = Block::heading1("Título");

        let row = Row::paired(&left, &right, BlockKind::Heading1);
        assert!(row.is_paired());
        assert!(!row.has_kind_conflict());
        assert_eq!(row.left_kind, Some(BlockKind::Heading1));
        assert_eq!(row.right_text, "Título");

        let row = Row::left_only(&left);
        assert!(!row.is_paired());
        assert_eq!(row.right_text, "");
        assert_eq!(row.right_kind, None);
        assert_eq!(row.kind, BlockKind::Heading1);

        let row = Row::right_only(&right);
        assert_eq!(row.left_text, "");
        assert_eq!(row.left_kind, None);
    }

    #[test]
    fn test_kind_conflict() {
        let row = Row::paired(
            &Block::heading2("Partie"),
            &Block::paragraph("Parte"),
            BlockKind::Heading2,
        );
        assert!(row.has_kind_conflict());
    }

    #[test]
    fn test_build_rejects_empty_row() {
        let empty = Row {
            kind: BlockKind::Paragraph,
            left_text: String::new(),
            right_text: String::new(),
            left_kind: Some(BlockKind::Paragraph),
            right_kind: Some(BlockKind::Paragraph),
        };
        let rows = vec![Row::left_only(&Block::paragraph("ok")), empty];

        let result = RowModel::build(rows);
        assert!(matches!(result, Err(Error::EmptyRow(1))));
    }

    #[test]
    fn test_deserialize_validates_rows() {
        let json = r#"{"rows":[{"kind":"paragraph","left_text":"","right_text":"","left_kind":null,"right_kind":null}],"mismatch":null}"#;
        let err = serde_json::from_str::<RowModel>(json).unwrap_err();
        assert!(err.to_string().contains("Row 0 has no content"));

        let json = r#"{"rows":[{"kind":"heading1","left_text":"Titre","right_text":"","left_kind":"heading1","right_kind":null}],"mismatch":{"source":1,"translated":0}}"#;
        let model: RowModel = serde_json::from_str(json).unwrap();
        assert_eq!(model.len(), 1);
        assert_eq!(model.mismatch().map(|m| m.padded_rows()), Some(1));
    }

    #[test]
    fn test_build_empty_model() {
        let model = RowModel::build(Vec::new()).unwrap();
        assert!(model.is_empty());
        assert_eq!(model.mismatch(), None);
        assert_eq!(model.stats(), RowStats::default());
    }

    #[test]
    fn test_stats() {
        let rows = vec![
            Row::paired(
                &Block::heading1("A"),
                &Block::heading1("B"),
                BlockKind::Heading1,
            ),
            Row::paired(
                &Block::paragraph("C"),
                &Block::heading2("D"),
                BlockKind::Paragraph,
            ),
            Row::left_only(&Block::paragraph("E")),
            Row::right_only(&Block::heading2("F")),
        ];
        let stats = RowModel::build(rows).unwrap().stats();

        assert_eq!(stats.row_count, 4);
        assert_eq!(stats.paired_count, 2);
        assert_eq!(stats.left_only_count, 1);
        assert_eq!(stats.right_only_count, 1);
        assert_eq!(stats.kind_conflict_count, 1);
        assert_eq!(stats.heading_count, 2);
        assert_eq!(stats.paragraph_count, 2);
    }

    #[test]
    fn test_mismatch_display() {
        let mismatch = BlockCountMismatch {
            source: 3,
            translated: 2,
        };
        assert_eq!(mismatch.padded_rows(), 1);
        assert_eq!(
            mismatch.to_string(),
            "block count mismatch (source=3, translation=2)"
        );
    }
}
