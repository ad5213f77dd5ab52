//! Inline markdown to HTML: links, bold and italic.

use html_escape::{encode_double_quoted_attribute, encode_text};
use regex::Regex;

/// Renders the inline markup of a single block's text as HTML.
///
/// All text is HTML-escaped. Links are recognized first so emphasis markers
/// inside URLs are left alone.
pub struct InlineRenderer {
    link: Regex,
    bold_italic: Regex,
    bold_star: Regex,
    bold_underscore: Regex,
    italic_star: Regex,
}

impl InlineRenderer {
    /// Create a new inline renderer.
    pub fn new() -> Self {
        Self {
            link: Regex::new(r"\[([^\]]+)\]\((https?://[^)]+)\)").unwrap(),
            bold_italic: Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap(),
            bold_star: Regex::new(r"\*\*(.+?)\*\*").unwrap(),
            bold_underscore: Regex::new(r"__(.+?)__").unwrap(),
            italic_star: Regex::new(r"\*(.+?)\*").unwrap(),
        }
    }

    /// Render text with inline markup to HTML.
    ///
    /// Each link is swapped for a placeholder while emphasis runs over the
    /// whole text, so emphasis may wrap a link but never touches its URL.
    pub fn render(&self, text: &str) -> String {
        let text = text.replace(LINK_MARK, "");
        let mut protected = String::with_capacity(text.len());
        let mut links = Vec::new();
        let mut last = 0;

        for caps in self.link.captures_iter(&text) {
            let (Some(whole), Some(label), Some(url)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            protected.push_str(&text[last..whole.start()]);
            protected.push_str(&placeholder(links.len()));
            links.push(format!(
                "<a href=\"{}\">{}</a>",
                encode_double_quoted_attribute(url.as_str()),
                self.emphasize(label.as_str())
            ));
            last = whole.end();
        }
        protected.push_str(&text[last..]);

        let mut output = self.emphasize(&protected);
        for (index, link) in links.iter().enumerate() {
            output = output.replacen(&placeholder(index), link, 1);
        }
        output
    }

    /// Escape text and apply emphasis markers.
    fn emphasize(&self, text: &str) -> String {
        let escaped = encode_text(text);
        let result = self
            .bold_italic
            .replace_all(&escaped, "<strong><em>${1}</em></strong>");
        let result = self.bold_star.replace_all(&result, "<strong>${1}</strong>");
        let result = self
            .bold_underscore
            .replace_all(&result, "<strong>${1}</strong>");
        let result = self.italic_star.replace_all(&result, "<em>${1}</em>");
        italicize_underscores(&result)
    }
}

/// Private-use character bracketing link placeholders; stripped from input.
const LINK_MARK: char = '\u{E000}';

fn placeholder(index: usize) -> String {
    format!("{LINK_MARK}{index}{LINK_MARK}")
}

impl Default for InlineRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape text without interpreting any markup.
pub fn escape(text: &str) -> String {
    encode_text(text).into_owned()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `_text_` becomes `<em>text</em>` only at word boundaries, so
/// `snake_case_name` stays untouched.
fn italicize_underscores(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut output = String::with_capacity(text.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '_' && (i == 0 || !is_word_char(chars[i - 1])) {
            let close = (i + 2..chars.len()).find(|&j| {
                chars[j] == '_' && chars.get(j + 1).map_or(true, |&c| !is_word_char(c))
            });
            if let Some(j) = close {
                output.push_str("<em>");
                output.extend(&chars[i + 1..j]);
                output.push_str("</em>");
                i = j + 1;
                continue;
            }
        }
        output.push(chars[i]);
        i += 1;
    }

    output
}
