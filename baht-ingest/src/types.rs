use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Text attributed to one candidate transaction, bounded by consecutive date anchors.
///
/// Borrows from the normalized statement text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    /// Byte offset of the anchor in the normalized text
    pub offset: usize,
    /// The matched anchor itself, e.g. `01-07-25 08:53`
    pub anchor: &'a str,
    pub day: &'a str,
    pub month: &'a str,
    pub year: &'a str,
    /// Only anchors that embed a time-of-day fill these
    pub hour: Option<&'a str>,
    pub minute: Option<&'a str>,
    /// Everything after the anchor up to the next anchor or end of text
    pub body: &'a str,
}

/// Per-span extraction output, consumed by the balance reconciler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTransactionCandidate {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub description: String,
    pub amount: Decimal,
    /// Running balance after this transaction, when the layout prints one
    pub balance: Option<Decimal>,
    /// True when the description carries an income keyword
    pub income_hint: bool,
}
