//! Document model types for bilingual layout.
//!
//! Blocks are what the parser produces from markdown text; rows are what the
//! aligner produces from two block sequences. Both are immutable once built.

mod block;
mod row;

pub use block::{Block, BlockKind};
pub use row::{BlockCountMismatch, Row, RowModel, RowStats};
