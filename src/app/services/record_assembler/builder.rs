//! Validating builder for one positionally-aligned record collection
//!
//! The collection is sized once, from the identifier row of its first
//! section. Every later row is checked against that size before any cell is
//! assigned, so a short or long row can never shift measurements onto the
//! wrong channel.

use crate::app::models::Section;
use crate::app::services::field_normalizer::field_parsers::parse_unsigned;
use crate::app::services::field_normalizer::{
    AssignColumn, Column, FieldParseError, assign_column,
};
use crate::app::services::markup::Row;
use crate::{Error, Result};
use tracing::{debug, warn};

/// Record collection under construction
#[derive(Debug)]
pub struct ChannelTableBuilder<R> {
    records: Vec<R>,
    /// Whether each record's identifier parsed cleanly
    id_parsed: Vec<bool>,
}

impl<R: AssignColumn> ChannelTableBuilder<R> {
    /// Size the collection from an identifier row and store the identifiers
    pub fn from_identifier_row(
        section: Section,
        row: &Row,
        id_column: R::Column,
        diagnostics: &mut Vec<FieldParseError>,
    ) -> Self {
        let count = row.data_cells().len();
        let mut records: Vec<R> = std::iter::repeat_with(R::default).take(count).collect();

        let errors_before = diagnostics.len();
        assign_column(section, &mut records, &row.cells, id_column, diagnostics);

        let mut id_parsed = vec![true; count];
        for error in &diagnostics[errors_before..] {
            id_parsed[error.channel_index] = false;
        }

        debug!("Sized {} collection to {} channels", section, count);
        Self { records, id_parsed }
    }

    /// Number of channels in the collection
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fail unless `row` has exactly one data cell per channel
    pub fn check_alignment(&self, section: Section, row_name: &str, row: &Row) -> Result<()> {
        let found = row.data_cells().len();
        if found != self.records.len() {
            return Err(Error::alignment(
                section.as_str(),
                row_name,
                self.records.len(),
                found,
            ));
        }
        Ok(())
    }

    /// Alignment-check `row`, then assign its cells into `column`
    ///
    /// Returns the number of cells that failed to parse.
    pub fn assign(
        &mut self,
        section: Section,
        row_name: &str,
        row: &Row,
        column: R::Column,
        diagnostics: &mut Vec<FieldParseError>,
    ) -> Result<usize> {
        self.check_alignment(section, row_name, row)?;
        Ok(assign_column(
            section,
            &mut self.records,
            &row.cells,
            column,
            diagnostics,
        ))
    }

    /// Check a repeated identifier row against the stored identifiers
    ///
    /// Identifiers that fail to parse on either side are reported (or were
    /// already reported) as field errors and are not compared.
    pub fn cross_check_identifiers(
        &self,
        section: Section,
        row_name: &str,
        row: &Row,
        id_column: R::Column,
        diagnostics: &mut Vec<FieldParseError>,
    ) -> Result<()> {
        self.check_alignment(section, row_name, row)?;

        for (index, raw) in row.data_cells().iter().enumerate() {
            match parse_unsigned(raw, None) {
                Ok(found) => {
                    let expected = self.records[index].channel_id();
                    if self.id_parsed[index] && found != expected {
                        return Err(Error::channel_order(section.as_str(), index, expected, found));
                    }
                }
                Err(cause) => {
                    let error = FieldParseError {
                        section,
                        column: id_column.name(),
                        channel_index: index,
                        raw: raw.clone(),
                        cause,
                    };
                    warn!("Field parse error: {}", error);
                    diagnostics.push(error);
                }
            }
        }
        Ok(())
    }

    /// Hand over the finished collection
    pub fn finish(self) -> Vec<R> {
        self.records
    }
}
