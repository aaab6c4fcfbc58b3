//! Locale converters: two-digit-year dates in civil or Buddhist-era calendars,
//! and thousands-separated decimal amounts.

use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::FormatError;

/// Offset between the Buddhist era and the Gregorian calendar.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// What an amount must look like once thousands separators are gone.
static PLAIN_AMOUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?$").expect("amount pattern compiles"));

/// Calendar system a statement prints its years in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CalendarKind {
    #[serde(rename = "civil")]
    Civil,
    #[serde(rename = "buddhist-era")]
    BuddhistEra,
}

impl CalendarKind {
    /// Four-digit Gregorian year for a two-digit year printed in this calendar.
    ///
    /// Always assumes the 2000s (civil) or the 2500s (Buddhist era).
    pub fn canonical_year(&self, two_digit_year: u32) -> i32 {
        let yy = two_digit_year as i32;
        match self {
            CalendarKind::Civil => 2000 + yy,
            CalendarKind::BuddhistEra => 2500 + yy - BUDDHIST_ERA_OFFSET,
        }
    }
}

/// Parse an amount such as `"1,255.41"` into a decimal.
///
/// Thousands separators are removed first; what remains must be
/// `digits(.digits)?`.
pub fn parse_amount(token: &str) -> Result<Decimal, FormatError> {
    let cleaned = token.trim().replace(',', "");
    if !PLAIN_AMOUNT.is_match(&cleaned) {
        return Err(FormatError::Amount(token.to_string()));
    }

    Decimal::from_str(&cleaned).map_err(|_| FormatError::Amount(token.to_string()))
}

/// Build a canonical date from day, month and a two-digit year.
pub fn convert_date(
    day: u32,
    month: u32,
    two_digit_year: u32,
    calendar: CalendarKind,
) -> Result<NaiveDate, FormatError> {
    let invalid = || FormatError::Date {
        day,
        month,
        year: two_digit_year,
    };
    if two_digit_year > 99 {
        return Err(invalid());
    }
    NaiveDate::from_ymd_opt(calendar.canonical_year(two_digit_year), month, day).ok_or_else(invalid)
}

pub fn parse_time(hour: u32, minute: u32) -> Result<NaiveTime, FormatError> {
    NaiveTime::from_hms_opt(hour, minute, 0).ok_or(FormatError::Time { hour, minute })
}

/// Parse one numeric component of a date or time token ("07", "25").
pub fn parse_component(s: &str) -> Result<u32, FormatError> {
    s.trim()
        .parse()
        .map_err(|_| FormatError::Component(s.to_string()))
}
