//! Errors raised when a token that matched a coarse pattern fails strict parsing.

use thiserror::Error;

/// A numeric, date or time token that could not be converted.
///
/// The extraction patterns only hand well-formed tokens to the converters, so
/// seeing one of these usually means garbled text (e.g. `31-02-25`).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("invalid amount token '{0}'")]
    Amount(String),

    #[error("invalid date {day:02}/{month:02}/{year:02}")]
    Date { day: u32, month: u32, year: u32 },

    #[error("invalid time {hour:02}:{minute:02}")]
    Time { hour: u32, minute: u32 },

    #[error("invalid number '{0}' in date or time token")]
    Component(String),
}
