//! Application constants for modem stats
//!
//! This module contains the fixed page layout, unit suffixes, markup markers
//! and configuration defaults used throughout the application.

// =============================================================================
// Page Source Defaults
// =============================================================================

/// Status page served by the modem on its management address
pub const DEFAULT_PAGE_URL: &str = "http://192.168.100.1/cmSignalData.htm";

/// Default request timeout for the page fetch
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default line protocol measurement name
pub const DEFAULT_MEASUREMENT: &str = "channel_stats";

/// Configuration directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "modem-stats";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Environment variable overrides
pub mod env_vars {
    pub const URL: &str = "MODEM_STATS_URL";
    pub const MEASUREMENT: &str = "MODEM_STATS_MEASUREMENT";
    pub const TIMEOUT_SECS: &str = "MODEM_STATS_TIMEOUT_SECS";
}

// =============================================================================
// Markup Markers
// =============================================================================

/// Tag names understood by the row extractor (lower-case, as tokenized)
pub mod markers {
    pub const ROW: &str = "tr";
    pub const TABLE: &str = "table";
    pub const CELL_TAGS: &[&str] = &["td", "th"];

    /// Elements whose raw-text content is discarded
    pub const RAW_TEXT_TAGS: &[&str] = &["script", "style"];

    pub fn is_cell(name: &str) -> bool {
        CELL_TAGS.contains(&name)
    }
}

// =============================================================================
// Unit Suffixes
// =============================================================================

/// Literal unit suffixes appended to cell values by the modem
pub mod units {
    pub const HERTZ: &str = " Hz";
    pub const DECIBEL: &str = " dB";
    pub const DECIBEL_MILLIVOLT: &str = " dBmV";
    pub const MEGASYMBOLS_PER_SEC: &str = " Msym/sec";
}

/// Ranging status literal reported for a calibrated upstream channel
pub const RANGING_SUCCESS: &str = "Success";

/// Non-breaking space the modem pads every value with
pub const NBSP: char = '\u{a0}';

// =============================================================================
// Line Protocol
// =============================================================================

/// Direction tag value for downstream records
pub const DIRECTION_DOWN: &str = "down";

/// Characters that cannot appear unescaped in a measurement name
pub const MEASUREMENT_FORBIDDEN_CHARS: &[char] = &[',', ' ', '"', '\n', '\r'];
