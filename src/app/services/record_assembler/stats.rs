//! Assembly statistics and result structures
//!
//! This module provides types for tracking what one extraction pass read,
//! and for handing the assembled records on to the encoder.

use crate::app::models::ChannelReport;
use crate::app::services::field_normalizer::FieldParseError;
use serde::Serialize;

/// Assembly result with records, recoverable failures and statistics
#[derive(Debug, Clone)]
pub struct AssemblyResult {
    /// Assembled channel records, read-only from here on
    pub report: ChannelReport,

    /// Cells that failed to parse and were left at their zero value
    pub diagnostics: Vec<FieldParseError>,

    /// Basic assembly statistics
    pub stats: AssemblyStats,
}

impl AssemblyResult {
    /// Whether every cell parsed cleanly
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Simple assembly statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssemblyStats {
    /// Rows read and interpreted as table data
    pub rows_read: usize,

    /// Header and navigation rows skipped
    pub rows_skipped: usize,

    /// Data cells handed to the normalizer
    pub cells_parsed: usize,

    /// Cells that failed to parse
    pub field_errors: usize,

    /// Downstream channels assembled
    pub downstream_channels: usize,

    /// Upstream channels assembled
    pub upstream_channels: usize,
}

impl AssemblyStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Calculate the cell success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.cells_parsed == 0 {
            0.0
        } else {
            let ok = self.cells_parsed.saturating_sub(self.field_errors);
            (ok as f64 / self.cells_parsed as f64) * 100.0
        }
    }
}
