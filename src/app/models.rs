//! Core data models for modem channel statistics
//!
//! This module defines the typed records assembled from the modem status page:
//! downstream channels with their codeword counters, upstream channels, and
//! the modulation schemes they report.

use crate::app::services::field_normalizer::FieldError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Modulation scheme reported for a channel
///
/// The modem spells 64/256-QAM both ways round ("64QAM" and "QAM64"); both
/// spellings parse to the same variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modulation {
    /// Unrecognized or missing modulation text
    #[default]
    Unknown,

    /// Quadrature phase-shift keying
    #[serde(rename = "QPSK")]
    Qpsk,

    /// 64-point quadrature amplitude modulation
    #[serde(rename = "QAM64")]
    Qam64,

    /// 256-point quadrature amplitude modulation
    #[serde(rename = "QAM256")]
    Qam256,
}

impl Modulation {
    /// Canonical literal used when rendering this modulation
    pub fn as_str(self) -> &'static str {
        match self {
            Modulation::Unknown => "Unknown",
            Modulation::Qpsk => "QPSK",
            Modulation::Qam64 => "QAM64",
            Modulation::Qam256 => "QAM256",
        }
    }
}

impl FromStr for Modulation {
    type Err = FieldError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "QPSK" => Ok(Modulation::Qpsk),
            "QAM64" | "64QAM" => Ok(Modulation::Qam64),
            "QAM256" | "256QAM" => Ok(Modulation::Qam256),
            other => Err(FieldError::UnknownModulation {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Modulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Table section of the status page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Downstream,
    Upstream,
    Codewords,
}

impl Section {
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Downstream => "downstream",
            Section::Upstream => "upstream",
            Section::Codewords => "codewords",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cumulative forward-error-correction counters for one downstream channel
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodewordStats {
    /// Codewords received without errors
    pub unerrored: u64,

    /// Codewords with errors that FEC corrected
    pub correctable: u64,

    /// Codewords with errors that FEC could not correct
    pub uncorrectable: u64,
}

/// One downstream channel as reported by the modem
///
/// Channels are identified by their position in the downstream table; the
/// `id` is whatever the modem prints and is not guaranteed to be ordered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DownstreamChannel {
    /// Channel identifier
    pub id: u64,

    /// Carrier frequency in Hz
    pub frequency: u64,

    /// Signal-to-noise ratio in dB
    pub snr: i64,

    /// Modulation scheme
    pub modulation: Modulation,

    /// Receive power level in dBmV
    pub power_level: i64,

    /// Codeword counters from the signal stats table
    pub codewords: CodewordStats,
}

/// One upstream channel as reported by the modem
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpstreamChannel {
    /// Channel identifier
    pub id: u64,

    /// Carrier frequency in Hz
    pub frequency: u64,

    /// Ranging service identifier
    pub ranging_service_id: u64,

    /// Symbol rate in Msym/sec
    pub symbol_rate: f64,

    /// Transmit power level in dBmV
    pub power_level: i64,

    /// Modulations in use; left empty by the assembler
    pub modulations: Vec<Modulation>,

    /// Whether ranging completed successfully
    pub ranging_ok: bool,
}

/// All channel records extracted from one page snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelReport {
    pub downstream: Vec<DownstreamChannel>,
    pub upstream: Vec<UpstreamChannel>,
}

impl ChannelReport {
    /// Total number of channel records
    pub fn channel_count(&self) -> usize {
        self.downstream.len() + self.upstream.len()
    }

    /// Whether the page reported no channels at all
    pub fn is_empty(&self) -> bool {
        self.channel_count() == 0
    }
}
