//! Record assembly for the modem status page
//!
//! This module owns the sizing and alignment of channel collections across
//! the page's fixed table layout.
//!
//! ## Architecture
//!
//! - [`layout`] - The fixed sequence of sections and rows
//! - [`builder`] - Validating builder for one aligned record collection
//! - [`assembler`] - Orchestration of row extraction and normalization
//! - [`stats`] - Assembly statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use modem_stats::app::services::markup::HtmlTokenizer;
//! use modem_stats::app::services::record_assembler::RecordAssembler;
//!
//! # fn example(page: &str) -> modem_stats::Result<()> {
//! let result = RecordAssembler::new().assemble(HtmlTokenizer::new(page))?;
//!
//! println!("Assembled {} downstream and {} upstream channels",
//!          result.stats.downstream_channels,
//!          result.stats.upstream_channels);
//! # Ok(())
//! # }
//! ```

pub mod assembler;
pub mod builder;
pub mod layout;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use assembler::RecordAssembler;
pub use builder::ChannelTableBuilder;
pub use layout::{PageLayout, RowKind, RowSpec, SectionLayout};
pub use stats::{AssemblyResult, AssemblyStats};
