//! Two-column HTML page rendering.

use crate::model::{BlockKind, Row, RowModel};

use super::inline::{escape, InlineRenderer};
use super::RenderOptions;

/// Render a row model as a complete HTML page.
pub fn to_html(model: &RowModel, options: &RenderOptions) -> String {
    HtmlRenderer::new(options.clone()).render(model)
}

/// HTML renderer producing a table with one `<tr>` per row.
pub struct HtmlRenderer {
    options: RenderOptions,
    inline: InlineRenderer,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            inline: InlineRenderer::new(),
        }
    }

    /// Render the full page.
    pub fn render(&self, model: &RowModel) -> String {
        let mut output = String::new();

        output.push_str("<!DOCTYPE html>\n");
        output.push_str(&format!(
            "<html lang=\"{}\">\n",
            html_escape::encode_double_quoted_attribute(&self.options.document_lang)
        ));
        output.push_str("<head>\n<meta charset=\"utf-8\">\n");
        self.render_style(&mut output);
        output.push_str("</head>\n<body>\n<table>\n");

        output.push_str("  <thead>\n");
        output.push_str(&format!(
            "    <tr><th>{}</th><th>{}</th></tr>\n",
            escape(&self.options.left_label),
            escape(&self.options.right_label)
        ));
        output.push_str("  </thead>\n  <tbody>\n");

        for row in model {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output.push_str("  </tbody>\n</table>\n</body>\n</html>\n");
        output
    }

    /// Render a single table row.
    pub fn render_row(&self, row: &Row) -> String {
        format!(
            "    <tr class=\"{}\"><td class=\"left\">{}</td><td class=\"right\">{}</td></tr>",
            row.kind,
            self.render_cell(row.left_kind, &row.left_text),
            self.render_cell(row.right_kind, &row.right_text)
        )
    }

    /// Render one cell; a missing block gives an empty cell.
    fn render_cell(&self, kind: Option<BlockKind>, text: &str) -> String {
        let Some(kind) = kind else {
            return String::new();
        };

        let content = if self.options.inline_markdown {
            self.inline.render(text)
        } else {
            escape(text)
        };

        let tag = kind.tag();
        format!("<{tag}>{content}</{tag}>")
    }

    fn render_style(&self, output: &mut String) {
        let options = &self.options;

        output.push_str("<style>\n");
        output.push_str(&format!(
            "  @page {{\n    size: {};\n    margin: {};\n  }}\n",
            options.page_size, options.page_margin
        ));
        output.push_str(&format!(
            "  body {{\n    font-family: {};\n    font-size: {}pt;\n    line-height: 1.4;\n    color: #222;\n  }}\n",
            options.font_family, options.font_size_pt
        ));
        output.push_str(STATIC_STYLE);
        output.push_str("</style>\n");
    }
}

const STATIC_STYLE: &str = "  table {
    width: 100%;
    border-collapse: collapse;
  }
  td {
    vertical-align: top;
    padding: 4pt 8pt;
    width: 50%;
  }
  /* thin vertical separator */
  td.left {
    border-right: 0.5pt solid #ccc;
    padding-right: 12pt;
  }
  td.right {
    padding-left: 12pt;
  }
  tr {
    break-inside: avoid;
  }
  h1, h2 {
    margin: 0;
  }
  td h1 {
    font-size: 16pt;
    margin-top: 12pt;
    margin-bottom: 2pt;
  }
  td h2 {
    font-size: 13pt;
    margin-top: 10pt;
    margin-bottom: 2pt;
  }
  td p {
    margin: 4pt 0;
  }
  thead th {
    font-size: 9pt;
    text-transform: uppercase;
    letter-spacing: 1pt;
    color: #888;
    border-bottom: 1pt solid #ccc;
    padding-bottom: 4pt;
    text-align: left;
  }
";
