//! Offline stub translator for development and tests.

use super::{LanguagePair, Translator};
use crate::error::Result;
use crate::model::Block;

/// Prefixes each block with the target language tag, e.g. `[ES] Bonjour`.
#[derive(Debug, Clone, Default)]
pub struct StubTranslator {
    _private: (),
}

impl StubTranslator {
    /// Create a new stub translator.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Translator for StubTranslator {
    fn name(&self) -> &str {
        "stub"
    }

    fn translate(&self, blocks: &[Block], pair: &LanguagePair) -> Result<Vec<String>> {
        let tag = pair.target.to_uppercase();
        Ok(blocks
            .iter()
            .map(|block| format!("[{}] {}", tag, block.text))
            .collect())
    }
}
