//! Error types for the bilingual-pdf library.

use std::io;
use thiserror::Error;

/// Result type alias for bilingual-pdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building a bilingual document.
///
/// Parsing never fails: malformed markup degrades to paragraph blocks, so
/// there is no variant for rejected input.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The translation source could not produce a translation.
    #[error("Translation unavailable: {0}")]
    TranslationUnavailable(String),

    /// One or more language codes are not known to the translation service.
    #[error("Unsupported language code(s): {}", .0.join(", "))]
    UnsupportedLanguage(Vec<String>),

    /// A row with nothing on either side reached the row model.
    #[error("Row {0} has no content on either side")]
    EmptyRow(usize),

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}
