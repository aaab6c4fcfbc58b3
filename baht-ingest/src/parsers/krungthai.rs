//! Krungthai statement layout (text)
//!
//! Expected spans after PDF-to-text and whitespace normalization:
//!   02/07/68 12:10 รับโอนเงิน PromptPay 500.00 1,500.00
//!   DATE     TIME  DESCRIPTION          AMOUNT BALANCE
//!
//! Years are Buddhist era. The balance column is sometimes empty, in which
//! case the span holds a single amount token.

use baht_core::{FormatError, parse_amount};

use super::{collapse_whitespace, hour_minute, span_date};
use crate::keywords::KeywordSet;
use crate::profile::StatementPatterns;
use crate::types::{RawTransactionCandidate, Span};

/// Extract a candidate from one Krungthai span.
///
/// Returns `Ok(None)` when the span has no amount token.
pub fn parse_krungthai_span(
    span: &Span<'_>,
    patterns: &StatementPatterns,
    keywords: &KeywordSet<'_>,
) -> Result<Option<RawTransactionCandidate>, FormatError> {
    let tokens: Vec<_> = patterns.amount.find_iter(span.body).collect();
    if tokens.len() < patterns.profile.min_amount_tokens {
        return Ok(None);
    }
    let Some(first) = tokens.first() else {
        return Ok(None);
    };

    let date = span_date(span, patterns)?;
    let time = match patterns.time.captures(span.body) {
        Some(caps) => Some(hour_minute(&caps["hour"], &caps["minute"])?),
        None => None,
    };
    let amount = parse_amount(first.as_str())?;
    let balance = match tokens.last() {
        Some(last) if tokens.len() > 1 => Some(parse_amount(last.as_str())?),
        _ => None,
    };

    let lead = &span.body[..first.start()];
    let description = collapse_whitespace(&patterns.time.replace_all(lead, " "));

    Ok(Some(RawTransactionCandidate {
        date,
        time,
        income_hint: keywords.matches(&description),
        description,
        amount,
        balance,
    }))
}
