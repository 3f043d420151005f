//! Fixed table layout of the modem status page
//!
//! The page carries three tables in a fixed order: downstream channels,
//! upstream channels, and downstream codeword statistics. Each table opens
//! with a header row, followed by one row per measurement.

use crate::app::models::Section;
use crate::app::services::field_normalizer::{Column, DownstreamColumn, UpstreamColumn};

/// What the assembler does with one table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind<C> {
    /// Channel identifiers: sizes a new collection, or is cross-checked
    /// against an existing one
    Identifiers(C),
    /// One measurement per channel, assigned into the collection
    Measure(C),
    /// Alignment-checked and otherwise ignored
    Discard,
}

/// One expected row of a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpec<C: 'static> {
    /// Label the modem prints for the row, used in error messages
    pub name: &'static str,
    pub kind: RowKind<C>,
}

impl<C: Column> RowSpec<C> {
    pub const fn new(name: &'static str, kind: RowKind<C>) -> Self {
        Self { name, kind }
    }
}

/// Expected shape of one table section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout<C: 'static> {
    pub section: Section,
    /// Rows before the first data row (section headers, navigation)
    pub leading_rows: usize,
    pub rows: &'static [RowSpec<C>],
}

/// Expected shape of the whole page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub downstream: SectionLayout<DownstreamColumn>,
    pub upstream: SectionLayout<UpstreamColumn>,
    pub codewords: SectionLayout<DownstreamColumn>,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            downstream: DOWNSTREAM_LAYOUT,
            upstream: UPSTREAM_LAYOUT,
            codewords: CODEWORDS_LAYOUT,
        }
    }
}

pub const DOWNSTREAM_LAYOUT: SectionLayout<DownstreamColumn> = SectionLayout {
    section: Section::Downstream,
    leading_rows: 1,
    rows: &[
        RowSpec::new("Channel ID", RowKind::Identifiers(DownstreamColumn::Id)),
        RowSpec::new("Frequency", RowKind::Measure(DownstreamColumn::Frequency)),
        RowSpec::new("Signal to Noise Ratio", RowKind::Measure(DownstreamColumn::Snr)),
        RowSpec::new(
            "Downstream Modulation",
            RowKind::Measure(DownstreamColumn::Modulation),
        ),
        RowSpec::new("Power Level", RowKind::Measure(DownstreamColumn::PowerLevel)),
    ],
};

pub const UPSTREAM_LAYOUT: SectionLayout<UpstreamColumn> = SectionLayout {
    section: Section::Upstream,
    leading_rows: 1,
    rows: &[
        RowSpec::new("Channel ID", RowKind::Identifiers(UpstreamColumn::Id)),
        RowSpec::new("Frequency", RowKind::Measure(UpstreamColumn::Frequency)),
        RowSpec::new(
            "Ranging Service ID",
            RowKind::Measure(UpstreamColumn::RangingServiceId),
        ),
        RowSpec::new("Symbol Rate", RowKind::Measure(UpstreamColumn::SymbolRate)),
        RowSpec::new("Power Level", RowKind::Measure(UpstreamColumn::PowerLevel)),
        // Upstream modulations are not extracted into the records
        RowSpec::new("Upstream Modulation", RowKind::Discard),
        RowSpec::new("Ranging Status", RowKind::Measure(UpstreamColumn::RangingStatus)),
    ],
};

pub const CODEWORDS_LAYOUT: SectionLayout<DownstreamColumn> = SectionLayout {
    section: Section::Codewords,
    leading_rows: 1,
    rows: &[
        RowSpec::new("Channel ID", RowKind::Identifiers(DownstreamColumn::Id)),
        RowSpec::new(
            "Total Unerrored Codewords",
            RowKind::Measure(DownstreamColumn::Unerrored),
        ),
        RowSpec::new(
            "Total Correctable Codewords",
            RowKind::Measure(DownstreamColumn::Correctable),
        ),
        RowSpec::new(
            "Total Uncorrectable Codewords",
            RowKind::Measure(DownstreamColumn::Uncorrectable),
        ),
    ],
};
