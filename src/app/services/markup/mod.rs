//! Markup handling for the modem status page
//!
//! The page is never built into a DOM. Instead it is read as a flat token
//! stream and table rows are reconstructed on the fly.
//!
//! ## Architecture
//!
//! - [`tokenizer`] - Token types, the [`TokenStream`] seam and an HTML tokenizer
//! - [`row_extractor`] - Row/cell reconstruction with nested-table tracking

pub mod row_extractor;
pub mod tokenizer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use row_extractor::{Row, RowEnd, RowExtractor};
pub use tokenizer::{HtmlTokenizer, Token, TokenStream};
