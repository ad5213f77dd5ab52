//! Output file naming.
//!
//! `sample.fr.md` translated fr→es becomes `sample.fr.es.pdf`, and a saved
//! translation becomes `sample.es.md`.

use crate::translate::LanguagePair;
use std::path::{Path, PathBuf};

/// Kind of page file being written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFormat {
    /// PDF produced by an external HTML-to-PDF engine
    #[default]
    Pdf,
    /// The intermediate HTML page
    Html,
}

impl PageFormat {
    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            PageFormat::Pdf => "pdf",
            PageFormat::Html => "html",
        }
    }

    /// Check if a path carries this format's extension.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == self.extension())
    }
}

/// Base name for derived files: the input minus `.md` and minus a trailing
/// `.<source>` language suffix.
pub fn output_stem(input: &Path, source_lang: &str) -> String {
    let lossy = input.to_string_lossy();
    let input: &str = &lossy;
    let stem = input.strip_suffix(".md").unwrap_or(input);
    let suffix = format!(".{}", source_lang);
    stem.strip_suffix(suffix.as_str())
        .unwrap_or(stem)
        .to_string()
}

/// Default page path: `<stem>.<source>.<target>.<ext>`.
pub fn default_output_path(input: &Path, pair: &LanguagePair, format: PageFormat) -> PathBuf {
    PathBuf::from(format!(
        "{}.{}.{}.{}",
        output_stem(input, &pair.source),
        pair.source,
        pair.target,
        format.extension()
    ))
}

/// Path for a saved machine translation: `<stem>.<target>.md`.
pub fn translation_path(input: &Path, pair: &LanguagePair) -> PathBuf {
    PathBuf::from(format!(
        "{}.{}.md",
        output_stem(input, &pair.source),
        pair.target
    ))
}

/// Path for the JSON row export next to a page file.
pub fn json_path(output: &Path) -> PathBuf {
    output.with_extension("json")
}
