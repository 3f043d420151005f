//! Field parsing utilities for modem table cells
//!
//! Every cell is trimmed (the modem pads values with non-breaking spaces),
//! optionally stripped of a literal unit suffix, and parsed as base-10.

use crate::app::models::Modulation;
use crate::constants::RANGING_SUCCESS;
use std::num::{ParseFloatError, ParseIntError};

/// Why a single cell could not be converted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Cell text is not a base-10 integer of the expected signedness
    #[error("invalid integer '{value}': {source}")]
    InvalidInteger {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Cell text is not a decimal number
    #[error("invalid number '{value}': {source}")]
    InvalidFloat {
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// Cell text parsed to NaN or infinity
    #[error("non-finite number '{value}'")]
    NonFinite { value: String },

    /// Cell text is not one of the known modulation literals
    #[error("unknown modulation '{value}'")]
    UnknownModulation { value: String },
}

/// Trim surrounding whitespace, including non-breaking spaces
pub fn clean(raw: &str) -> &str {
    // char::is_whitespace covers U+00A0 and the other Unicode space separators
    raw.trim_matches(char::is_whitespace)
}

/// Trim and drop `suffix` when present; a missing suffix is not an error
pub fn strip_unit<'a>(raw: &'a str, suffix: &str) -> &'a str {
    let cleaned = clean(raw);
    match cleaned.strip_suffix(suffix) {
        Some(value) => clean(value),
        None => cleaned,
    }
}

/// Parse an unsigned integer, optionally carrying a unit suffix
pub fn parse_unsigned(raw: &str, unit: Option<&str>) -> Result<u64, FieldError> {
    let value = cleaned_value(raw, unit);
    value.parse::<u64>().map_err(|source| FieldError::InvalidInteger {
        value: value.to_string(),
        source,
    })
}

/// Parse a signed integer, optionally carrying a unit suffix
pub fn parse_signed(raw: &str, unit: Option<&str>) -> Result<i64, FieldError> {
    let value = cleaned_value(raw, unit);
    value.parse::<i64>().map_err(|source| FieldError::InvalidInteger {
        value: value.to_string(),
        source,
    })
}

/// Parse a finite floating-point number, optionally carrying a unit suffix
pub fn parse_float(raw: &str, unit: Option<&str>) -> Result<f64, FieldError> {
    let value = cleaned_value(raw, unit);
    let parsed = value.parse::<f64>().map_err(|source| FieldError::InvalidFloat {
        value: value.to_string(),
        source,
    })?;

    if parsed.is_finite() {
        Ok(parsed)
    } else {
        Err(FieldError::NonFinite {
            value: value.to_string(),
        })
    }
}

/// Parse a modulation literal
pub fn parse_modulation(raw: &str) -> Result<Modulation, FieldError> {
    clean(raw).parse()
}

/// Interpret a ranging status cell; only the exact "Success" literal is true
pub fn parse_ranging_status(raw: &str) -> bool {
    clean(raw) == RANGING_SUCCESS
}

fn cleaned_value<'a>(raw: &'a str, unit: Option<&str>) -> &'a str {
    match unit {
        Some(suffix) => strip_unit(raw, suffix),
        None => clean(raw),
    }
}
