//! Field extractors: turn spans into transaction candidates per bank layout.

pub mod kasikorn;
pub mod krungthai;

use baht_core::{BankFormat, FormatError, convert_date, parse_time};
use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use crate::keywords::KeywordSet;
use crate::profile::StatementPatterns;
use crate::segment::segment;
use crate::types::{RawTransactionCandidate, Span};

pub use kasikorn::parse_kasikorn_span;
pub use krungthai::parse_krungthai_span;

/// Candidates in source order, plus a note for every span that failed strict parsing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractOutcome {
    pub candidates: Vec<RawTransactionCandidate>,
    pub warnings: Vec<String>,
}

/// Segment the normalized `text` and extract one candidate per accepted span.
///
/// Spans without enough amount tokens are skipped silently; spans whose
/// date, time or amount fails strict parsing are skipped with a warning.
pub fn extract_candidates(
    text: &str,
    patterns: &StatementPatterns,
    extra_income_keywords: &[String],
) -> ExtractOutcome {
    let keywords = KeywordSet::new(patterns.profile.income_keywords, extra_income_keywords);
    let mut out = ExtractOutcome::default();

    for span in segment(text, patterns) {
        let parsed = match patterns.bank() {
            BankFormat::Kasikorn => parse_kasikorn_span(&span, patterns, &keywords),
            BankFormat::Krungthai => parse_krungthai_span(&span, patterns, &keywords),
        };

        match parsed {
            Ok(Some(candidate)) => out.candidates.push(candidate),
            Ok(None) => debug!(offset = span.offset, anchor = span.anchor, "span has no transaction"),
            Err(e) => {
                warn!(offset = span.offset, anchor = span.anchor, error = %e, "skipping span");
                out.warnings.push(format!("skipped span at '{}': {e}", span.anchor));
            }
        }
    }

    out
}

fn span_date(span: &Span<'_>, patterns: &StatementPatterns) -> Result<NaiveDate, FormatError> {
    use baht_core::locale::parse_component;

    convert_date(
        parse_component(span.day)?,
        parse_component(span.month)?,
        parse_component(span.year)?,
        patterns.profile.calendar,
    )
}

fn hour_minute(hour: &str, minute: &str) -> Result<NaiveTime, FormatError> {
    use baht_core::locale::parse_component;

    parse_time(parse_component(hour)?, parse_component(minute)?)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
