//! Translation sources.
//!
//! A translation comes either from a [`Translator`] that returns one string
//! per source block, or from a pre-translated markdown file that is parsed
//! with the same block parser as the source.

mod file;
mod stub;

pub use file::{load_translation_file, parse_translation};
pub use stub::StubTranslator;

use crate::error::{Error, Result};
use crate::model::Block;
use serde::{Deserialize, Serialize};

/// Translation direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LanguagePair {
    /// Source language code (e.g., "fr")
    pub source: String,

    /// Target language code (e.g., "es")
    pub target: String,
}

impl LanguagePair {
    /// Create a new language pair.
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl Default for LanguagePair {
    fn default() -> Self {
        Self::new("fr", "es")
    }
}

impl std::fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}→{}", self.source, self.target)
    }
}

/// A service that translates block text.
///
/// Implementations must return exactly one string per input block, in
/// order, or fail with [`Error::TranslationUnavailable`]. Retries and
/// timeouts are the implementation's business.
pub trait Translator {
    /// Name of this translator, for diagnostics.
    fn name(&self) -> &str;

    /// Translate the text of each block.
    fn translate(&self, blocks: &[Block], pair: &LanguagePair) -> Result<Vec<String>>;
}

impl<T: Translator + ?Sized> Translator for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn translate(&self, blocks: &[Block], pair: &LanguagePair) -> Result<Vec<String>> {
        (**self).translate(blocks, pair)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn translate(&self, blocks: &[Block], pair: &LanguagePair) -> Result<Vec<String>> {
        (**self).translate(blocks, pair)
    }
}

/// Translate blocks and keep each source block's kind.
///
/// A translator that returns the wrong number of strings has broken its
/// contract; that is reported as [`Error::TranslationUnavailable`] rather
/// than papered over.
pub fn translate_blocks<T: Translator + ?Sized>(
    translator: &T,
    blocks: &[Block],
    pair: &LanguagePair,
) -> Result<Vec<Block>> {
    log::debug!(
        "Translating {} blocks {} with {}",
        blocks.len(),
        pair,
        translator.name()
    );

    let texts = translator.translate(blocks, pair)?;
    if texts.len() != blocks.len() {
        return Err(Error::TranslationUnavailable(format!(
            "{} returned {} translations for {} blocks",
            translator.name(),
            texts.len(),
            blocks.len()
        )));
    }

    Ok(blocks
        .iter()
        .zip(texts)
        .map(|(block, text)| block.with_text(text))
        .collect())
}
