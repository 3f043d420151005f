//! Modem Stats Library
//!
//! Extracts signal-quality measurements from the status page served by a
//! DOCSIS cable modem and renders them as line protocol for time-series
//! ingestion.
//!
//! This library provides tools for:
//! - Tokenizing the modem's HTML page into a markup token stream
//! - Reconstructing table rows from the token stream, skipping nested tables
//! - Normalizing raw cell text into typed channel records
//! - Assembling downstream, upstream and codeword tables into aligned records
//! - Encoding records as line protocol
//!
//! ## Usage
//!
//! ```rust
//! use modem_stats::app::services::markup::HtmlTokenizer;
//! use modem_stats::app::services::record_assembler::RecordAssembler;
//! use modem_stats::app::services::line_protocol::LineProtocolEncoder;
//!
//! # fn example(page: &str) -> modem_stats::Result<()> {
//! let mut tokens = HtmlTokenizer::new(page);
//! let result = RecordAssembler::new().assemble(&mut tokens)?;
//!
//! let encoder = LineProtocolEncoder::new("channel_stats");
//! encoder.write_report(&result.report, &mut std::io::stdout())?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_normalizer;
        pub mod line_protocol;
        pub mod markup;
        pub mod record_assembler;
    }
    pub mod adapters {
        pub mod page_encoding;
        pub mod page_source;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{ChannelReport, CodewordStats, DownstreamChannel, Modulation, UpstreamChannel};
pub use config::Config;

/// Result type alias for modem stats operations
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal error types for extraction, encoding and the surrounding tool
///
/// Recoverable per-cell failures are not represented here; see
/// [`app::services::field_normalizer::FieldParseError`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Token stream failed or ended before the expected layout was read
    #[error("Markup stream error: {message}")]
    Stream { message: String },

    /// A table row disagrees with the channel count set by its sizing row
    #[error(
        "Alignment error in {section} section, row '{row}': expected {expected} data cells, found {found}"
    )]
    Alignment {
        section: String,
        row: String,
        expected: usize,
        found: usize,
    },

    /// A repeated channel identifier row lists channels in a different order
    #[error(
        "Channel order mismatch in {section} section at index {index}: expected channel {expected}, found {found}"
    )]
    ChannelOrder {
        section: String,
        index: usize,
        expected: u64,
        found: u64,
    },

    /// The page could not be obtained from its source
    #[error("Failed to load page from {source_name}: {message}")]
    Fetch {
        source_name: String,
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Report serialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a markup stream error
    pub fn stream(message: impl Into<String>) -> Self {
        Self::Stream {
            message: message.into(),
        }
    }

    /// Create an alignment error
    pub fn alignment(
        section: impl Into<String>,
        row: impl Into<String>,
        expected: usize,
        found: usize,
    ) -> Self {
        Self::Alignment {
            section: section.into(),
            row: row.into(),
            expected,
            found,
        }
    }

    /// Create a channel order error
    pub fn channel_order(
        section: impl Into<String>,
        index: usize,
        expected: u64,
        found: u64,
    ) -> Self {
        Self::ChannelOrder {
            section: section.into(),
            index,
            expected,
            found,
        }
    }

    /// Create a page fetch error
    pub fn fetch(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Fetch {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid TOML configuration: {}", error),
        }
    }
}
