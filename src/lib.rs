//! # bilingual-pdf
//!
//! Turn a markdown document and its translation into a row-aligned,
//! two-column bilingual page.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bilingual_pdf::{Bilingual, StubTranslator};
//!
//! fn main() -> bilingual_pdf::Result<()> {
//!     let source = std::fs::read_to_string("sample.md")?;
//!
//!     let conversion = Bilingual::new()
//!         .with_languages("fr", "es")
//!         .convert_with(&source, &StubTranslator::new())?;
//!
//!     std::fs::write("sample.fr.es.html", conversion.to_html())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Parse**: markdown text becomes headings (levels 1-2) and paragraphs
//! - **Translate**: a [`Translator`] returns one string per block, or a
//!   pre-translated file is parsed with the same parser
//! - **Align**: blocks are paired by position; a count mismatch pads the
//!   shorter side and is reported, never raised
//! - **Render**: rows become an HTML page, JSON, or markdown

pub mod align;
pub mod error;
pub mod lang;
pub mod model;
pub mod output;
pub mod parser;
pub mod render;
pub mod translate;

// Re-export commonly used types
pub use align::{align, Aligner, Alignment, KindPolicy};
pub use error::{Error, Result};
pub use model::{Block, BlockCountMismatch, BlockKind, Row, RowModel, RowStats};
pub use output::PageFormat;
pub use parser::{parse, parse_file};
pub use render::{JsonFormat, RenderOptions};
pub use translate::{LanguagePair, StubTranslator, Translator};

use std::path::Path;

/// Build the HTML page for a source text and a pre-translated text using
/// default options.
///
/// # Example
///
/// ```
/// let html = bilingual_pdf::to_html("# Titre", "# Título").unwrap();
/// assert!(html.contains("<h1>Título</h1>"));
/// ```
pub fn to_html(source_text: &str, translation_text: &str) -> Result<String> {
    let conversion = Bilingual::new().convert_with_translation(source_text, translation_text)?;
    Ok(conversion.to_html())
}

/// Builder for converting documents into bilingual row models.
///
/// # Example
///
/// ```no_run
/// use bilingual_pdf::{Bilingual, KindPolicy};
///
/// let source = std::fs::read_to_string("sample.md")?;
/// let conversion = Bilingual::new()
///     .with_languages("fr", "es")
///     .with_kind_policy(KindPolicy::Source)
///     .convert_with_translation_file(&source, "sample.es.md")?;
///
/// if let Some(mismatch) = conversion.mismatch() {
///     eprintln!("warning: {}", mismatch);
/// }
/// # Ok::<(), bilingual_pdf::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bilingual {
    pair: LanguagePair,
    policy: KindPolicy,
    render_options: Option<RenderOptions>,
}

impl Bilingual {
    /// Create a new builder (fr → es, source-authoritative kinds).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set source and target language codes.
    pub fn with_languages(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.pair = LanguagePair::new(source, target);
        self
    }

    /// Set the language pair.
    pub fn with_pair(mut self, pair: LanguagePair) -> Self {
        self.pair = pair;
        self
    }

    /// Set the policy for rows whose two sides have different kinds.
    pub fn with_kind_policy(mut self, policy: KindPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set render options. Without this, options are derived from the
    /// language pair.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = Some(options);
        self
    }

    /// The language pair in use.
    pub fn pair(&self) -> &LanguagePair {
        &self.pair
    }

    /// Translate the source with a translator and align the result.
    ///
    /// A translator failure is returned unchanged.
    pub fn convert_with<T: Translator + ?Sized>(
        &self,
        source_text: &str,
        translator: &T,
    ) -> Result<Conversion> {
        let source = parse(source_text);
        let translated = translate::translate_blocks(translator, &source, &self.pair)?;
        self.finish(source, translated)
    }

    /// Align the source with pre-translated markdown text.
    pub fn convert_with_translation(
        &self,
        source_text: &str,
        translation_text: &str,
    ) -> Result<Conversion> {
        let source = parse(source_text);
        let translated = translate::parse_translation(translation_text);
        self.finish(source, translated)
    }

    /// Align the source with a pre-translated markdown file.
    pub fn convert_with_translation_file<P: AsRef<Path>>(
        &self,
        source_text: &str,
        path: P,
    ) -> Result<Conversion> {
        let source = parse(source_text);
        let translated = translate::load_translation_file(path)?;
        self.finish(source, translated)
    }

    fn finish(&self, source: Vec<Block>, translated: Vec<Block>) -> Result<Conversion> {
        log::debug!(
            "Aligning {} source blocks with {} translated blocks",
            source.len(),
            translated.len()
        );

        let rows = Aligner::new()
            .with_policy(self.policy)
            .align(&source, &translated)
            .into_model()?;

        let render_options = self
            .render_options
            .clone()
            .unwrap_or_else(|| RenderOptions::for_languages(&self.pair));

        Ok(Conversion {
            source,
            translated,
            rows,
            render_options,
        })
    }
}

/// Result of a conversion: both block sequences and the aligned rows.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Source blocks
    pub source: Vec<Block>,

    /// Translated blocks
    pub translated: Vec<Block>,

    /// Aligned rows
    pub rows: RowModel,

    render_options: RenderOptions,
}

impl Conversion {
    /// Block-count mismatch between source and translation, if any.
    pub fn mismatch(&self) -> Option<BlockCountMismatch> {
        self.rows.mismatch()
    }

    /// Row statistics.
    pub fn stats(&self) -> RowStats {
        self.rows.stats()
    }

    /// Render the two-column HTML page.
    pub fn to_html(&self) -> String {
        render::to_html(&self.rows, &self.render_options)
    }

    /// Export the rows as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.rows, format)
    }

    /// The translated blocks as markdown.
    pub fn translation_markdown(&self) -> String {
        render::to_markdown(&self.translated)
    }

    /// Render options used by [`Conversion::to_html`].
    pub fn render_options(&self) -> &RenderOptions {
        &self.render_options
    }
}
