//! Field normalization for modem table rows
//!
//! Turns one row of raw cell strings into typed values stored positionally
//! into a pre-sized record collection.
//!
//! ## Architecture
//!
//! - [`field_parsers`] - Trimming, unit-suffix stripping and typed parsing
//! - [`columns`] - Column names and per-record field assignment
//! - [`diagnostics`] - Recoverable per-cell failures
//!
//! The first cell of every row is the row's label and is never treated as
//! data: cell `i + 1` lands in record `i`.

pub mod columns;
pub mod diagnostics;
pub mod field_parsers;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use columns::{AssignColumn, Column, DownstreamColumn, UpstreamColumn};
pub use diagnostics::FieldParseError;
pub use field_parsers::FieldError;

use crate::app::models::Section;
use tracing::warn;

/// Assign one row's data cells into `records`, one cell per record
///
/// The caller guarantees `records.len()` equals the number of data cells;
/// surplus cells or records on either side are left untouched. Cells that
/// fail to parse leave their field zeroed, are logged, and are appended to
/// `diagnostics`. Returns the number of failed cells.
pub fn assign_column<R: AssignColumn>(
    section: Section,
    records: &mut [R],
    row: &[String],
    column: R::Column,
    diagnostics: &mut Vec<FieldParseError>,
) -> usize {
    let mut failures = 0;

    let cells = row.iter().skip(1);
    for (channel_index, (record, raw)) in records.iter_mut().zip(cells).enumerate() {
        if let Err(cause) = record.assign(column, raw) {
            let error = FieldParseError {
                section,
                column: column.name(),
                channel_index,
                raw: raw.clone(),
                cause,
            };
            warn!("Field parse error: {}", error);
            diagnostics.push(error);
            failures += 1;
        }
    }

    failures
}
