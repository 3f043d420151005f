//! Line protocol encoding for time-series ingestion
//!
//! ## Architecture
//!
//! - [`encoder`] - Per-record tag and field rendering plus the sink writer
//!
//! Downstream records carry `id`, `direction=down` and `frequency` as tags;
//! upstream records carry `id`, `frequency` and `ranging_id`. String fields are
//! double-quoted without escaping, since every string value comes from a
//! closed set of literals.
//!
//! ## Usage
//!
//! ```rust
//! use modem_stats::UpstreamChannel;
//! use modem_stats::app::services::line_protocol::LineProtocolEncoder;
//!
//! let channel = UpstreamChannel {
//!     id: 3,
//!     frequency: 23_700_000,
//!     power_level: 41,
//!     symbol_rate: 4.815,
//!     ..Default::default()
//! };
//!
//! let encoder = LineProtocolEncoder::new("channel_stats");
//! assert_eq!(
//!     encoder.encode_upstream(&channel),
//!     "channel_stats,id=3,frequency=23700000,ranging_id=0 plevel=41,sym_rate=4.815,ranging_ok=f\n"
//! );
//! ```

pub mod encoder;

#[cfg(test)]
pub mod tests;

pub use encoder::{LineProtocol, LineProtocolEncoder, encode_bool};
