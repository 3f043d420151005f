//! Record assembly over the fixed page layout
//!
//! Drives the row extractor across the downstream, upstream and codeword
//! tables and feeds every row through the field normalizer into
//! positionally-aligned collections.

use super::builder::ChannelTableBuilder;
use super::layout::{PageLayout, RowKind, SectionLayout};
use super::stats::{AssemblyResult, AssemblyStats};
use crate::app::models::{ChannelReport, DownstreamChannel, UpstreamChannel};
use crate::app::services::field_normalizer::{AssignColumn, FieldParseError};
use crate::app::services::markup::{RowExtractor, TokenStream};
use crate::{Error, Result};
use tracing::{debug, info};

/// Accumulated state of one extraction pass
#[derive(Debug, Default)]
struct AssemblyPass {
    diagnostics: Vec<FieldParseError>,
    stats: AssemblyStats,
}

/// Assembles channel records from a status page token stream
///
/// One assembler can run any number of passes; each pass owns its
/// collections and re-derives everything from the stream it is given.
#[derive(Debug, Clone, Default)]
pub struct RecordAssembler {
    layout: PageLayout,
}

impl RecordAssembler {
    /// Create an assembler for the standard page layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one extraction pass over `tokens`
    ///
    /// Stream, alignment and channel-order failures abort the pass; cells
    /// that fail to parse are collected in the result's diagnostics.
    pub fn assemble<S: TokenStream>(&self, tokens: S) -> Result<AssemblyResult> {
        let mut rows = RowExtractor::new(tokens);
        let mut pass = AssemblyPass::default();

        let downstream: ChannelTableBuilder<DownstreamChannel> =
            self.read_section(&mut rows, &self.layout.downstream, None, &mut pass)?;
        info!("Downstream section: {} channels", downstream.len());

        let upstream: ChannelTableBuilder<UpstreamChannel> =
            self.read_section(&mut rows, &self.layout.upstream, None, &mut pass)?;
        info!("Upstream section: {} channels", upstream.len());

        let downstream =
            self.read_section(&mut rows, &self.layout.codewords, Some(downstream), &mut pass)?;
        info!("Codeword section assigned to {} channels", downstream.len());

        let report = ChannelReport {
            downstream: downstream.finish(),
            upstream: upstream.finish(),
        };

        let mut stats = pass.stats;
        stats.field_errors = pass.diagnostics.len();
        stats.downstream_channels = report.downstream.len();
        stats.upstream_channels = report.upstream.len();

        info!(
            "Assembled {} channels from {} rows ({} field errors)",
            report.channel_count(),
            stats.rows_read,
            stats.field_errors
        );

        Ok(AssemblyResult {
            report,
            diagnostics: pass.diagnostics,
            stats,
        })
    }

    /// Read one section into a new collection, or into `existing`
    fn read_section<R, S>(
        &self,
        rows: &mut RowExtractor<S>,
        layout: &SectionLayout<R::Column>,
        existing: Option<ChannelTableBuilder<R>>,
        pass: &mut AssemblyPass,
    ) -> Result<ChannelTableBuilder<R>>
    where
        R: AssignColumn,
        S: TokenStream,
    {
        let section = layout.section;
        debug!("Reading {} section", section);

        rows.skip_rows(layout.leading_rows)?;
        pass.stats.rows_skipped += layout.leading_rows;

        let mut builder = existing;
        for row_layout in layout.rows {
            let row = rows.next_row()?;
            if !row.is_closed() {
                return Err(Error::stream(format!(
                    "document ended inside {} section while reading '{}' row",
                    section, row_layout.name
                )));
            }
            pass.stats.rows_read += 1;
            debug!(
                "{} row '{}' has {} data cells",
                section,
                row_layout.name,
                row.data_cells().len()
            );

            match (row_layout.kind, builder.as_mut()) {
                (RowKind::Identifiers(column), None) => {
                    pass.stats.cells_parsed += row.data_cells().len();
                    builder = Some(ChannelTableBuilder::from_identifier_row(
                        section,
                        &row,
                        column,
                        &mut pass.diagnostics,
                    ));
                }
                (RowKind::Identifiers(column), Some(table)) => {
                    table.cross_check_identifiers(
                        section,
                        row_layout.name,
                        &row,
                        column,
                        &mut pass.diagnostics,
                    )?;
                    pass.stats.cells_parsed += table.len();
                }
                (RowKind::Measure(column), Some(table)) => {
                    table.assign(section, row_layout.name, &row, column, &mut pass.diagnostics)?;
                    pass.stats.cells_parsed += table.len();
                }
                (RowKind::Discard, Some(table)) => {
                    table.check_alignment(section, row_layout.name, &row)?;
                }
                (_, None) => {
                    return Err(Error::configuration(format!(
                        "{} layout reads '{}' before any identifier row",
                        section, row_layout.name
                    )));
                }
            }
        }

        builder.ok_or_else(|| {
            Error::configuration(format!("{} layout has no identifier row", section))
        })
    }
}
