//! Kasikorn (K PLUS) statement layout
//!
//! Expected spans after PDF-to-text and whitespace normalization:
//!   01-07-25 08:53 K PLUS 1,255.41 ชำระเงิน 16.00
//!   DATE     TIME  CHANNEL BALANCE DESCRIPTION AMOUNT
//!
//! The running balance comes first and the transaction amount last; any
//! numbers in between are treated as description noise.

use baht_core::{FormatError, parse_amount};

use super::{collapse_whitespace, hour_minute, span_date};
use crate::keywords::KeywordSet;
use crate::profile::StatementPatterns;
use crate::types::{RawTransactionCandidate, Span};

/// Extract a candidate from one Kasikorn span.
///
/// Returns `Ok(None)` when the span carries fewer than two amount tokens.
pub fn parse_kasikorn_span(
    span: &Span<'_>,
    patterns: &StatementPatterns,
    keywords: &KeywordSet<'_>,
) -> Result<Option<RawTransactionCandidate>, FormatError> {
    let tokens: Vec<_> = patterns.amount.find_iter(span.body).collect();
    if tokens.len() < patterns.profile.min_amount_tokens {
        return Ok(None);
    }
    let (Some(first), Some(last)) = (tokens.first(), tokens.last()) else {
        return Ok(None);
    };

    let date = span_date(span, patterns)?;
    let time = match (span.hour, span.minute) {
        (Some(h), Some(m)) => Some(hour_minute(h, m)?),
        _ => None,
    };
    let balance = parse_amount(first.as_str())?;
    let amount = parse_amount(last.as_str())?;

    let mut description = patterns.amount.replace_all(span.body, " ").into_owned();
    for phrase in patterns.profile.channel_phrases {
        description = description.replace(phrase, " ");
    }
    let description = collapse_whitespace(&description);

    Ok(Some(RawTransactionCandidate {
        date,
        time,
        income_hint: keywords.matches(&description),
        description,
        amount,
        balance: Some(balance),
    }))
}
