//! Test utilities for field normalization

use crate::app::models::{DownstreamChannel, UpstreamChannel};


/// Build a raw row from a label and cell values
pub fn raw_row(label: &str, cells: &[&str]) -> Vec<String> {
    std::iter::once(label)
        .chain(cells.iter().copied())
        .map(str::to_string)
        .collect()
}

/// Pre-size a downstream collection
pub fn downstream_slots(count: usize) -> Vec<DownstreamChannel> {
    vec![DownstreamChannel::default(); count]
}

/// Pre-size an upstream collection
pub fn upstream_slots(count: usize) -> Vec<UpstreamChannel> {
    vec![UpstreamChannel::default(); count]
}
