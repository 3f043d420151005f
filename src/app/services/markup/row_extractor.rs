//! Table row reconstruction over a markup token stream
//!
//! The extractor is a small automaton: an optional open cell (idle or
//! capturing) crossed with a nesting depth for tables opened inside a cell.
//! Only zero-depth markers delimit cells and rows, so the row-end of an inner
//! table never terminates the outer row.

use super::tokenizer::{Token, TokenStream};
use crate::Result;
use crate::constants::markers;
use tracing::{debug, trace};

/// How a row ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowEnd {
    /// A zero-depth row-end marker was seen
    Closed,
    /// The token stream ended first
    EndOfStream,
}

/// One reconstructed table row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Raw text of each zero-depth cell, in document order
    pub cells: Vec<String>,
    pub end: RowEnd,
}

impl Row {
    /// The leading label cell, if any
    pub fn label(&self) -> Option<&str> {
        self.cells.first().map(|s| s.trim())
    }

    /// Cells after the label
    pub fn data_cells(&self) -> &[String] {
        self.cells.get(1..).unwrap_or(&[])
    }

    /// Whether the row ended at its own row-end marker
    pub fn is_closed(&self) -> bool {
        self.end == RowEnd::Closed
    }
}

/// Pulls rows out of a token stream one at a time
#[derive(Debug)]
pub struct RowExtractor<S> {
    tokens: S,
    rows_read: usize,
}

impl<S: TokenStream> RowExtractor<S> {
    pub fn new(tokens: S) -> Self {
        Self {
            tokens,
            rows_read: 0,
        }
    }

    /// Number of rows produced or skipped so far
    pub fn rows_read(&self) -> usize {
        self.rows_read
    }

    /// Read the next row
    ///
    /// End of stream is a clean end: whatever was collected is returned with
    /// [`RowEnd::EndOfStream`]. Stream errors propagate.
    pub fn next_row(&mut self) -> Result<Row> {
        let mut cells = Vec::new();
        let mut open_cell: Option<String> = None;
        let mut depth: usize = 0;

        loop {
            let Some(token) = self.tokens.next_token()? else {
                cells.extend(open_cell.take());
                self.rows_read += 1;
                trace!("row ended at end of stream with {} cells", cells.len());
                return Ok(Row {
                    cells,
                    end: RowEnd::EndOfStream,
                });
            };

            match token {
                Token::StartTag { name, self_closing } => {
                    if name == markers::TABLE && !self_closing {
                        // Only a table opened inside a cell is nested
                        if depth > 0 || open_cell.is_some() {
                            depth += 1;
                        }
                    } else if depth == 0 && markers::is_cell(&name) {
                        cells.extend(open_cell.replace(String::new()));
                        if self_closing {
                            cells.extend(open_cell.take());
                        }
                    }
                }
                Token::EndTag { name } => {
                    if name == markers::TABLE {
                        depth = depth.saturating_sub(1);
                    } else if depth > 0 {
                        continue;
                    } else if markers::is_cell(&name) {
                        cells.extend(open_cell.take());
                    } else if name == markers::ROW {
                        cells.extend(open_cell.take());
                        self.rows_read += 1;
                        trace!("row closed with {} cells", cells.len());
                        return Ok(Row {
                            cells,
                            end: RowEnd::Closed,
                        });
                    }
                }
                Token::Text(text) => {
                    if depth == 0 {
                        if let Some(cell) = open_cell.as_mut() {
                            cell.push_str(&text);
                        }
                    }
                }
            }
        }
    }

    /// Discard the next row, using the same automaton as [`Self::next_row`]
    pub fn skip_row(&mut self) -> Result<RowEnd> {
        let row = self.next_row()?;
        debug!("skipped row {:?}", row.label());
        Ok(row.end)
    }

    /// Discard `count` rows, stopping early at end of stream
    pub fn skip_rows(&mut self, count: usize) -> Result<RowEnd> {
        for _ in 0..count {
            if self.skip_row()? == RowEnd::EndOfStream {
                return Ok(RowEnd::EndOfStream);
            }
        }
        Ok(RowEnd::Closed)
    }
}
