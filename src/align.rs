//! Positional alignment of source and translated blocks.
//!
//! Row *i* always pairs source block *i* with translated block *i*. When the
//! two sequences differ in length, the surplus blocks of the longer one are
//! emitted against a blank cell and a [`BlockCountMismatch`] is reported.
//! Alignment never fails on the shape of the input.

use crate::error::Result;
use crate::model::{Block, BlockKind, Row, RowModel};
use serde::{Deserialize, Serialize};

pub use crate::model::BlockCountMismatch;

/// Which side decides the shared kind of a paired row whose kinds differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindPolicy {
    /// The source (left) block's kind wins
    #[default]
    Source,
    /// The translated (right) block's kind wins
    Translation,
}

impl KindPolicy {
    /// Resolve the shared kind for a paired row.
    pub fn resolve(&self, left: BlockKind, right: BlockKind) -> BlockKind {
        match self {
            KindPolicy::Source => left,
            KindPolicy::Translation => right,
        }
    }
}

/// Result of aligning two block sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// Rows in document order
    pub rows: Vec<Row>,

    /// Present when the sequences had different lengths
    pub mismatch: Option<BlockCountMismatch>,
}

impl Alignment {
    /// Validate the rows and package them as a row model.
    pub fn into_model(self) -> Result<RowModel> {
        Ok(RowModel::build(self.rows)?.with_mismatch(self.mismatch))
    }
}

/// Pairs source blocks with translated blocks.
#[derive(Debug, Clone, Copy, Default)]
pub struct Aligner {
    policy: KindPolicy,
}

impl Aligner {
    /// Create an aligner with the default (source-authoritative) policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the kind policy.
    pub fn with_policy(mut self, policy: KindPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Align two block sequences position by position.
    ///
    /// Produces `max(source.len(), translated.len())` rows. A length
    /// difference is logged as a warning and returned in
    /// [`Alignment::mismatch`].
    pub fn align(&self, source: &[Block], translated: &[Block]) -> Alignment {
        let mismatch = if source.len() != translated.len() {
            let mismatch = BlockCountMismatch {
                source: source.len(),
                translated: translated.len(),
            };
            log::warn!(
                "Block count mismatch (source={}, translation={}); padding shorter side with empty cells",
                mismatch.source,
                mismatch.translated
            );
            Some(mismatch)
        } else {
            None
        };

        let paired = source.len().min(translated.len());
        let mut rows = Vec::with_capacity(source.len().max(translated.len()));

        for (left, right) in source.iter().zip(translated) {
            let kind = self.policy.resolve(left.kind, right.kind);
            rows.push(Row::paired(left, right, kind));
        }
        rows.extend(source[paired..].iter().map(Row::left_only));
        rows.extend(translated[paired..].iter().map(Row::right_only));

        Alignment { rows, mismatch }
    }

    /// Align source blocks with one translated string per block.
    ///
    /// Each translation takes the kind of its source block. Surplus strings
    /// or blocks are padded like any other mismatch.
    pub fn align_translations<S: AsRef<str>>(
        &self,
        source: &[Block],
        translations: &[S],
    ) -> Alignment {
        let translated: Vec<Block> = source
            .iter()
            .zip(translations)
            .map(|(block, text)| block.with_text(text.as_ref()))
            .chain(
                translations
                    .iter()
                    .skip(source.len())
                    .map(|text| Block::paragraph(text.as_ref())),
            )
            .collect();
        self.align(source, &translated)
    }
}

/// Align two block sequences with the default policy.
pub fn align(source: &[Block], translated: &[Block]) -> Alignment {
    Aligner::new().align(source, translated)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> Vec<Block> {
        vec![
            Block::heading1("Titre"),
            Block::paragraph("Premier."),
            Block::paragraph("Second."),
        ]
    }

    #[test]
    fn test_equal_lengths() {
        let translated = vec![
            Block::heading1("Título"),
            Block::paragraph("Primero."),
            Block::paragraph("Segundo."),
        ];
        let alignment = align(&source(), &translated);

        assert_eq!(alignment.mismatch, None);
        assert_eq!(alignment.rows.len(), 3);
        for row in &alignment.rows {
            assert!(row.is_paired());
            assert!(!row.left_text.is_empty());
            assert!(!row.right_text.is_empty());
            assert_eq!(row.left_kind, row.right_kind);
            assert_eq!(Some(row.kind), row.left_kind);
        }
    }

    #[test]
    fn test_translation_shorter() {
        let translated = vec![Block::heading1("Título"), Block::paragraph("Primero.")];
        let alignment = align(&source(), &translated);

        assert_eq!(alignment.rows.len(), 3);
        assert_eq!(
            alignment.mismatch,
            Some(BlockCountMismatch {
                source: 3,
                translated: 2
            })
        );

        let last = &alignment.rows[2];
        assert_eq!(last.left_text, "Second.");
        assert_eq!(last.right_text, "");
        assert_eq!(last.kind, BlockKind::Paragraph);
        assert_eq!(last.right_kind, None);
    }

    #[test]
    fn test_translation_longer() {
        let translated = vec![
            Block::heading1("Título"),
            Block::paragraph("Primero."),
            Block::paragraph("Segundo."),
            Block::heading2("Extra"),
        ];
        let alignment = align(&source(), &translated);

        assert_eq!(alignment.rows.len(), 4);
        let last = &alignment.rows[3];
        assert_eq!(last.left_text, "");
        assert_eq!(last.left_kind, None);
        assert_eq!(last.right_text, "Extra");
        assert_eq!(last.kind, BlockKind::Heading2);
    }

    #[test]
    fn test_empty_sequences() {
        let alignment = align(&[], &[]);
        assert!(alignment.rows.is_empty());
        assert_eq!(alignment.mismatch, None);
    }

    #[test]
    fn test_one_side_empty() {
        let alignment = align(&[], &source());
        assert_eq!(alignment.rows.len(), 3);
        assert!(alignment.rows.iter().all(|r| r.left_text.is_empty()));
        assert_eq!(alignment.mismatch.unwrap().padded_rows(), 3);
    }

    #[test]
    fn test_kind_conflict_policy() {
        let left = vec![Block::heading2("Partie")];
        let right = vec![Block::paragraph("Parte")];

        let by_source = Aligner::new().align(&left, &right);
        assert_eq!(by_source.rows[0].kind, BlockKind::Heading2);
        assert!(by_source.rows[0].has_kind_conflict());

        let by_translation = Aligner::new()
            .with_policy(KindPolicy::Translation)
            .align(&left, &right);
        assert_eq!(by_translation.rows[0].kind, BlockKind::Paragraph);
        assert_eq!(by_translation.rows[0].left_kind, Some(BlockKind::Heading2));
    }

    #[test]
    fn test_align_translations() {
        let alignment = Aligner::new().align_translations(&source(), &["Título", "Uno.", "Dos."]);
        assert_eq!(alignment.mismatch, None);
        assert_eq!(alignment.rows[0].right_kind, Some(BlockKind::Heading1));
        assert_eq!(alignment.rows[2].right_text, "Dos.");
    }

    #[test]
    fn test_align_translations_short() {
        let alignment = Aligner::new().align_translations(&source(), &["Título"]);
        assert_eq!(alignment.rows.len(), 3);
        assert!(alignment.mismatch.is_some());
    }

    #[test]
    fn test_into_model() {
        let model = align(&source(), &source()[..1]).into_model().unwrap();
        assert_eq!(model.len(), 3);
        assert_eq!(
            model.mismatch(),
            Some(BlockCountMismatch {
                source: 3,
                translated: 1
            })
        );
    }
}
