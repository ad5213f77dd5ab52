//! Property tests for parsing and alignment.

use bilingual_pdf::render::to_markdown;
use bilingual_pdf::{align, parse, Aligner, Block, BlockKind, KindPolicy};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = BlockKind> {
    prop_oneof![
        Just(BlockKind::Heading1),
        Just(BlockKind::Heading2),
        Just(BlockKind::Paragraph),
    ]
}

/// Single-line text that can never be read as a heading marker. Paragraphs
/// whose first line is a bare `#` do not re-parse to themselves; that case
/// is pinned by a parser unit test.
fn text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9àéèçñ.,!?']{1,12}( [A-Za-z0-9àéèçñ.,!?']{1,12}){0,6}"
}

fn block_strategy() -> impl Strategy<Value = Block> {
    (kind_strategy(), text_strategy()).prop_map(|(kind, text)| Block::new(kind, text))
}

fn blocks_strategy() -> impl Strategy<Value = Vec<Block>> {
    prop::collection::vec(block_strategy(), 0..20)
}

proptest! {
    #[test]
    fn test_parse_is_deterministic(text in "(#{0,3} ?[a-z ]{0,10}\r?\n?){0,12}") {
        prop_assert_eq!(parse(&text), parse(&text));
    }

    #[test]
    fn test_parse_yields_single_line_blocks(text in "[#a-z \t\n\r\u{85}\u{2028}\u{2029}]{0,200}") {
        for block in parse(&text) {
            prop_assert!(!block.text.is_empty());
            prop_assert_eq!(block.text.trim(), block.text.as_str());
            let line_breaks = ['\n', '\r', '\u{85}', '\u{2028}', '\u{2029}'];
            prop_assert!(!block.text.contains(line_breaks));
        }
    }

    #[test]
    fn test_line_endings_are_equivalent(lines in prop::collection::vec("(#{0,2} )?[a-z]{0,8}", 0..12)) {
        let lf = parse(&lines.join("\n"));
        prop_assert_eq!(parse(&lines.join("\r\n")), lf.clone());
        prop_assert_eq!(parse(&lines.join("\r")), lf);
    }

    #[test]
    fn test_paragraph_reparse_is_identity(lines in prop::collection::vec(text_strategy(), 1..6)) {
        let blocks = parse(&lines.join("\n"));
        prop_assert_eq!(blocks.len(), 1);
        prop_assert_eq!(blocks[0].kind, BlockKind::Paragraph);

        let reparsed = parse(&blocks[0].text);
        prop_assert_eq!(reparsed, blocks);
    }

    #[test]
    fn test_parse_preserves_order(blocks in blocks_strategy()) {
        prop_assert_eq!(parse(&to_markdown(&blocks)), blocks);
    }

    #[test]
    fn test_alignment_length(source in blocks_strategy(), translated in blocks_strategy()) {
        let alignment = align(&source, &translated);
        prop_assert_eq!(alignment.rows.len(), source.len().max(translated.len()));
        prop_assert_eq!(alignment.mismatch.is_some(), source.len() != translated.len());
    }

    #[test]
    fn test_right_padding(source in blocks_strategy(), cut in 0usize..20) {
        let translated = &source[..cut.min(source.len())];
        let alignment = align(&source, translated);

        for (row, block) in alignment.rows[translated.len()..].iter().zip(&source[translated.len()..]) {
            prop_assert_eq!(row.right_text.as_str(), "");
            prop_assert_eq!(row.right_kind, None);
            prop_assert_eq!(row.left_text.as_str(), block.text.as_str());
            prop_assert_eq!(row.kind, block.kind);
        }
    }

    #[test]
    fn test_left_padding(translated in blocks_strategy(), cut in 0usize..20) {
        let source = &translated[..cut.min(translated.len())];
        let alignment = align(source, &translated);

        for (row, block) in alignment.rows[source.len()..].iter().zip(&translated[source.len()..]) {
            prop_assert_eq!(row.left_text.as_str(), "");
            prop_assert_eq!(row.right_text.as_str(), block.text.as_str());
            prop_assert_eq!(row.kind, block.kind);
        }
    }

    #[test]
    fn test_policy_picks_side(source in blocks_strategy(), translated in blocks_strategy()) {
        let by_source = Aligner::new().align(&source, &translated);
        let by_translation = Aligner::new()
            .with_policy(KindPolicy::Translation)
            .align(&source, &translated);

        for (i, (a, b)) in by_source.rows.iter().zip(&by_translation.rows).enumerate() {
            if i < source.len() {
                prop_assert_eq!(a.kind, source[i].kind);
            }
            if i < translated.len() {
                prop_assert_eq!(b.kind, translated[i].kind);
            }
        }
    }

    #[test]
    fn test_aligned_rows_build_model(source in blocks_strategy(), translated in blocks_strategy()) {
        let model = align(&source, &translated).into_model().unwrap();
        let stats = model.stats();
        prop_assert_eq!(stats.row_count, model.len());
        prop_assert_eq!(
            stats.paired_count + stats.left_only_count + stats.right_only_count,
            stats.row_count
        );
    }
}
