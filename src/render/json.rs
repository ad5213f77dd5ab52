//! JSON export of row models.

use crate::error::{Error, Result};
use crate::model::RowModel;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a row model to JSON.
pub fn to_json(model: &RowModel, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(model),
        JsonFormat::Compact => serde_json::to_string(model),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::align::align;
    use crate::model::Block;

    #[test]
    fn test_to_json_pretty() {
        let model = align(&[Block::heading1("Titre")], &[Block::heading1("Título")])
            .into_model()
            .unwrap();

        let json = to_json(&model, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"left_text\": \"Titre\""));
        assert!(json.contains("\"kind\": \"heading1\""));
        assert!(json.contains("\"mismatch\": null"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact_with_mismatch() {
        let model = align(&[Block::paragraph("a"), Block::paragraph("b")], &[])
            .into_model()
            .unwrap();

        let json = to_json(&model, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"mismatch\":{\"source\":2,\"translated\":0}"));
        assert!(json.contains("\"right_kind\":null"));
    }

    #[test]
    fn test_json_round_trip() {
        let model = align(&[Block::paragraph("a")], &[Block::heading2("b")])
            .into_model()
            .unwrap();
        let json = to_json(&model, JsonFormat::Compact).unwrap();
        let back: RowModel = serde_json::from_str(&json).unwrap();
        assert_eq!(back, model);
    }
}
