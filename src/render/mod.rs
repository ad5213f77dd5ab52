//! Rendering module for turning aligned rows into output formats.

mod html;
mod inline;
mod json;
mod markdown;
mod options;

pub use html::{to_html, HtmlRenderer};
pub use inline::{escape, InlineRenderer};
pub use json::{to_json, JsonFormat};
pub use markdown::to_markdown;
pub use options::RenderOptions;
