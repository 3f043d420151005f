//! Line protocol rendering for channel records
//!
//! Each record becomes exactly one line:
//! `<measurement>,<tags> <fields>\n`. Tag and field order is fixed so the
//! same record always encodes to the same bytes.

use crate::app::models::{ChannelReport, DownstreamChannel, UpstreamChannel};
use crate::constants::DIRECTION_DOWN;
use crate::{Error, Result};
use std::io::Write;
use tracing::debug;

/// A record that renders as one line protocol line
pub trait LineProtocol {
    /// Comma-separated `key=value` tags, without the measurement
    fn tags(&self) -> String;

    /// Comma-separated `key=value` fields
    fn fields(&self) -> String;
}

impl LineProtocol for DownstreamChannel {
    fn tags(&self) -> String {
        // frequency sits with the tags; existing ingestion depends on it
        format!(
            "id={},direction={},frequency={}",
            self.id, DIRECTION_DOWN, self.frequency
        )
    }

    fn fields(&self) -> String {
        format!(
            "snr={},mod=\"{}\",plevel={},unerrored={},correctable={},uncorrectable={}",
            self.snr,
            self.modulation,
            self.power_level,
            self.codewords.unerrored,
            self.codewords.correctable,
            self.codewords.uncorrectable
        )
    }
}

impl LineProtocol for UpstreamChannel {
    fn tags(&self) -> String {
        format!(
            "id={},frequency={},ranging_id={}",
            self.id, self.frequency, self.ranging_service_id
        )
    }

    fn fields(&self) -> String {
        // f64 Display is the shortest representation that round-trips
        format!(
            "plevel={},sym_rate={},ranging_ok={}",
            self.power_level,
            self.symbol_rate,
            encode_bool(self.ranging_ok)
        )
    }
}

/// Single-character boolean literal
pub fn encode_bool(value: bool) -> char {
    if value { 't' } else { 'f' }
}

/// Renders channel records under one measurement name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineProtocolEncoder {
    measurement: String,
}

impl LineProtocolEncoder {
    /// Create an encoder for `measurement`
    ///
    /// The name is written verbatim; callers validate it (see
    /// [`crate::config::Config::validate`]).
    pub fn new(measurement: impl Into<String>) -> Self {
        Self {
            measurement: measurement.into(),
        }
    }

    /// Render one record as a newline-terminated line
    pub fn encode<R: LineProtocol>(&self, record: &R) -> String {
        format!("{},{} {}\n", self.measurement, record.tags(), record.fields())
    }

    pub fn encode_downstream(&self, channel: &DownstreamChannel) -> String {
        self.encode(channel)
    }

    pub fn encode_upstream(&self, channel: &UpstreamChannel) -> String {
        self.encode(channel)
    }

    /// Write one record to `sink` with a single write call
    pub fn write_record<R: LineProtocol, W: Write>(&self, record: &R, sink: &mut W) -> Result<()> {
        let line = self.encode(record);
        sink.write_all(line.as_bytes())
            .map_err(|e| Error::io("Failed to write line protocol record", e))
    }

    /// Write every downstream record, then every upstream record
    ///
    /// Returns the number of lines written.
    pub fn write_report<W: Write>(&self, report: &ChannelReport, sink: &mut W) -> Result<usize> {
        for channel in &report.downstream {
            self.write_record(channel, sink)?;
        }
        for channel in &report.upstream {
            self.write_record(channel, sink)?;
        }
        sink.flush()
            .map_err(|e| Error::io("Failed to flush line protocol output", e))?;

        let lines = report.channel_count();
        debug!("Wrote {} line protocol records as '{}'", lines, self.measurement);
        Ok(lines)
    }
}
