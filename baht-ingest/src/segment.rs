//! Line segmenter: splits the normalized text blob into per-transaction spans.
//!
//! Extracted statement text has no reliable line structure, so every date
//! anchor starts a new span and the span runs until the next anchor:
//!
//!   01-07-25 08:53 K PLUS 1,255.41 ชำระเงิน 16.00 02-07-25 12:01 ...
//!   ^ anchor       ^ body ...........................^ next anchor

use tracing::debug;

use crate::profile::StatementPatterns;
use crate::types::Span;

/// Collapse every whitespace run (newlines, page breaks, tabs) into a single space.
pub fn normalize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split `text` into spans at each date anchor, in order of occurrence.
///
/// Text before the first anchor belongs to no span. Spans are never re-sorted
/// by date. Spans containing a header marker phrase of the profile are dropped.
pub fn segment<'a>(text: &'a str, patterns: &StatementPatterns) -> Vec<Span<'a>> {
    let anchors: Vec<_> = patterns.anchor.captures_iter(text).collect();
    let mut spans = Vec::with_capacity(anchors.len());

    for (i, caps) in anchors.iter().enumerate() {
        let Some(anchor) = caps.get(0) else {
            continue;
        };
        let end = anchors
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(text.len());
        let body = &text[anchor.end()..end];

        if let Some(marker) = patterns
            .profile
            .header_markers
            .iter()
            .find(|marker| body.contains(**marker))
        {
            debug!(offset = anchor.start(), marker, "dropping header span");
            continue;
        }

        let group = |name: &str| caps.name(name).map(|m| m.as_str());
        spans.push(Span {
            offset: anchor.start(),
            anchor: anchor.as_str(),
            day: group("day").unwrap_or_default(),
            month: group("month").unwrap_or_default(),
            year: group("year").unwrap_or_default(),
            hour: group("hour"),
            minute: group("minute"),
            body,
        });
    }

    spans
}
