//! Pre-translated markdown files.

use crate::error::{Error, Result};
use crate::model::Block;
use crate::parser;
use std::path::Path;

/// Parse pre-translated markdown text into blocks.
pub fn parse_translation(text: &str) -> Vec<Block> {
    parser::parse(text)
}

/// Load a pre-translated markdown file and parse it into blocks.
///
/// A file that cannot be read means the translation is unavailable.
pub fn load_translation_file<P: AsRef<Path>>(path: P) -> Result<Vec<Block>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::TranslationUnavailable(format!("cannot read {}: {}", path.display(), e))
    })?;

    let blocks = parse_translation(&text);
    log::debug!(
        "Loaded {} translated blocks from {}",
        blocks.len(),
        path.display()
    );
    Ok(blocks)
}
