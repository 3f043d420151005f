//! Recoverable field parse failures
//!
//! A malformed cell never aborts extraction. It is recorded here with enough
//! position information to find it on the page, and the run carries on.

use super::field_parsers::FieldError;
use crate::app::models::Section;
use serde::Serialize;

/// One cell that could not be normalized
#[derive(Debug, Clone, PartialEq, thiserror::Error, Serialize)]
#[error("{section} {column}[{channel_index}]: {cause}")]
pub struct FieldParseError {
    /// Table section the cell belongs to
    pub section: Section,

    /// Measurement column name
    pub column: &'static str,

    /// Positional channel index within the section
    pub channel_index: usize,

    /// Cell text as extracted, before trimming
    pub raw: String,

    /// Underlying parse failure
    #[serde(serialize_with = "serialize_cause")]
    pub cause: FieldError,
}

fn serialize_cause<S: serde::Serializer>(
    cause: &FieldError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(cause)
}
