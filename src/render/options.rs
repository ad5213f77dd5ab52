//! Rendering options and configuration.

use crate::lang;
use crate::translate::LanguagePair;

/// Options for rendering the two-column page.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Header label of the source column
    pub left_label: String,

    /// Header label of the translated column
    pub right_label: String,

    /// Value of the document's `lang` attribute
    pub document_lang: String,

    /// CSS page size (e.g., "A4", "letter")
    pub page_size: String,

    /// CSS page margin (e.g., "2cm")
    pub page_margin: String,

    /// CSS font-family list for body text
    pub font_family: String,

    /// Body font size in points
    pub font_size_pt: f32,

    /// Render inline markdown (links, bold, italic) inside cells
    pub inline_markdown: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options labelled for a language pair.
    pub fn for_languages(pair: &LanguagePair) -> Self {
        Self::new().with_languages(pair)
    }

    /// Set column labels and document language from a language pair.
    pub fn with_languages(mut self, pair: &LanguagePair) -> Self {
        self.left_label = lang::label(&pair.source);
        self.right_label = lang::label(&pair.target);
        self.document_lang = pair.source.clone();
        self
    }

    /// Set both column labels.
    pub fn with_labels(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_label = left.into();
        self.right_label = right.into();
        self
    }

    /// Set the page size.
    pub fn with_page_size(mut self, size: impl Into<String>) -> Self {
        self.page_size = size.into();
        self
    }

    /// Set the page margin.
    pub fn with_margin(mut self, margin: impl Into<String>) -> Self {
        self.page_margin = margin.into();
        self
    }

    /// Set the body font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the body font size in points.
    pub fn with_font_size(mut self, size_pt: f32) -> Self {
        self.font_size_pt = size_pt;
        self
    }

    /// Enable or disable inline markdown rendering.
    pub fn with_inline_markdown(mut self, enabled: bool) -> Self {
        self.inline_markdown = enabled;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        let pair = LanguagePair::default();
        Self {
            left_label: lang::label(&pair.source),
            right_label: lang::label(&pair.target),
            document_lang: pair.source,
            page_size: "A4".to_string(),
            page_margin: "2cm".to_string(),
            font_family: r#""Helvetica Neue", Helvetica, Arial, sans-serif"#.to_string(),
            font_size_pt: 11.0,
            inline_markdown: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = RenderOptions::default();
        assert_eq!(options.left_label, "Français");
        assert_eq!(options.right_label, "Español");
        assert_eq!(options.document_lang, "fr");
        assert_eq!(options.page_size, "A4");
        assert_eq!(options.page_margin, "2cm");
        assert_eq!(options.font_size_pt, 11.0);
        assert!(options.inline_markdown);
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::for_languages(&LanguagePair::new("en", "sv"))
            .with_page_size("letter")
            .with_font_size(10.5)
            .with_inline_markdown(false);

        assert_eq!(options.left_label, "English");
        assert_eq!(options.right_label, "SV");
        assert_eq!(options.document_lang, "en");
        assert_eq!(options.page_size, "letter");
        assert_eq!(options.font_size_pt, 10.5);
        assert!(!options.inline_markdown);
    }

    #[test]
    fn test_custom_labels() {
        let options = RenderOptions::new().with_labels("Original", "Translation");
        assert_eq!(options.left_label, "Original");
        assert_eq!(options.right_label, "Translation");
    }
}
