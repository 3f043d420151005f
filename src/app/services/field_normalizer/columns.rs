//! Per-column assignment into channel records
//!
//! Each table row carries one measurement for every channel. The column enums
//! name those measurements and [`AssignColumn`] stores one parsed cell into
//! the matching record field.

use super::field_parsers::{
    FieldError, parse_float, parse_modulation, parse_ranging_status, parse_signed, parse_unsigned,
};
use crate::app::models::{DownstreamChannel, UpstreamChannel};
use crate::constants::units;
use std::fmt;

/// A named measurement column
pub trait Column: Copy + fmt::Debug + 'static {
    /// Short name used in diagnostics and logs
    fn name(self) -> &'static str;
}

/// A record that can receive one cell per column
pub trait AssignColumn: Default {
    type Column: Column;

    /// Parse `raw` and store it in the field for `column`
    ///
    /// On failure the field is reset to its zero value (or `Unknown` for
    /// modulation) and the cause is returned; other fields are untouched.
    fn assign(&mut self, column: Self::Column, raw: &str) -> Result<(), FieldError>;

    /// The channel identifier currently stored in the record
    fn channel_id(&self) -> u64;
}

/// Measurement columns of the downstream and codeword tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DownstreamColumn {
    Id,
    Frequency,
    Snr,
    Modulation,
    PowerLevel,
    Unerrored,
    Correctable,
    Uncorrectable,
}

impl Column for DownstreamColumn {
    fn name(self) -> &'static str {
        match self {
            DownstreamColumn::Id => "id",
            DownstreamColumn::Frequency => "frequency",
            DownstreamColumn::Snr => "snr",
            DownstreamColumn::Modulation => "modulation",
            DownstreamColumn::PowerLevel => "power_level",
            DownstreamColumn::Unerrored => "unerrored",
            DownstreamColumn::Correctable => "correctable",
            DownstreamColumn::Uncorrectable => "uncorrectable",
        }
    }
}

/// Measurement columns of the upstream table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamColumn {
    Id,
    Frequency,
    RangingServiceId,
    SymbolRate,
    PowerLevel,
    RangingStatus,
}

impl Column for UpstreamColumn {
    fn name(self) -> &'static str {
        match self {
            UpstreamColumn::Id => "id",
            UpstreamColumn::Frequency => "frequency",
            UpstreamColumn::RangingServiceId => "ranging_service_id",
            UpstreamColumn::SymbolRate => "symbol_rate",
            UpstreamColumn::PowerLevel => "power_level",
            UpstreamColumn::RangingStatus => "ranging_status",
        }
    }
}

/// Store a parse outcome, zeroing the slot on failure
fn store<T: Default>(slot: &mut T, parsed: Result<T, FieldError>) -> Result<(), FieldError> {
    match parsed {
        Ok(value) => {
            *slot = value;
            Ok(())
        }
        Err(e) => {
            *slot = T::default();
            Err(e)
        }
    }
}

impl AssignColumn for DownstreamChannel {
    type Column = DownstreamColumn;

    fn assign(&mut self, column: DownstreamColumn, raw: &str) -> Result<(), FieldError> {
        match column {
            DownstreamColumn::Id => store(&mut self.id, parse_unsigned(raw, None)),
            DownstreamColumn::Frequency => {
                store(&mut self.frequency, parse_unsigned(raw, Some(units::HERTZ)))
            }
            DownstreamColumn::Snr => store(&mut self.snr, parse_signed(raw, Some(units::DECIBEL))),
            DownstreamColumn::Modulation => store(&mut self.modulation, parse_modulation(raw)),
            DownstreamColumn::PowerLevel => store(
                &mut self.power_level,
                parse_signed(raw, Some(units::DECIBEL_MILLIVOLT)),
            ),
            DownstreamColumn::Unerrored => {
                store(&mut self.codewords.unerrored, parse_unsigned(raw, None))
            }
            DownstreamColumn::Correctable => {
                store(&mut self.codewords.correctable, parse_unsigned(raw, None))
            }
            DownstreamColumn::Uncorrectable => {
                store(&mut self.codewords.uncorrectable, parse_unsigned(raw, None))
            }
        }
    }

    fn channel_id(&self) -> u64 {
        self.id
    }
}

impl AssignColumn for UpstreamChannel {
    type Column = UpstreamColumn;

    fn assign(&mut self, column: UpstreamColumn, raw: &str) -> Result<(), FieldError> {
        match column {
            UpstreamColumn::Id => store(&mut self.id, parse_unsigned(raw, None)),
            UpstreamColumn::Frequency => {
                store(&mut self.frequency, parse_unsigned(raw, Some(units::HERTZ)))
            }
            UpstreamColumn::RangingServiceId => {
                store(&mut self.ranging_service_id, parse_unsigned(raw, None))
            }
            UpstreamColumn::SymbolRate => store(
                &mut self.symbol_rate,
                parse_float(raw, Some(units::MEGASYMBOLS_PER_SEC)),
            ),
            UpstreamColumn::PowerLevel => store(
                &mut self.power_level,
                parse_signed(raw, Some(units::DECIBEL_MILLIVOLT)),
            ),
            UpstreamColumn::RangingStatus => {
                // Anything but "Success" is a legitimate negative reading
                self.ranging_ok = parse_ranging_status(raw);
                Ok(())
            }
        }
    }

    fn channel_id(&self) -> u64 {
        self.id
    }
}
