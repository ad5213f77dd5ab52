//! Markdown block parsing.
//!
//! The same parser is applied to the source document and to user-supplied
//! translation files, so both sides of a row share one set of structural
//! rules.

mod markdown;

pub use markdown::parse;

use crate::error::Result;
use crate::model::Block;
use std::path::Path;

/// Read a UTF-8 markdown file and parse it into blocks.
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Block>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    log::debug!("Parsing {} ({} bytes)", path.as_ref().display(), text.len());
    Ok(parse(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.fr.md");
        std::fs::write(&path, "# Titre\n\nBonjour.\n").unwrap();

        let blocks = parse_file(&path).unwrap();
        assert_eq!(blocks, vec![Block::heading1("Titre"), Block::paragraph("Bonjour.")]);
    }

    #[test]
    fn test_parse_file_missing() {
        assert!(matches!(
            parse_file("/nonexistent/sample.md"),
            Err(Error::Io(_))
        ));
    }
}
