//! Bank-format detection: one upfront decision per statement.

use baht_core::BankFormat;
use regex::Regex;
use tracing::debug;

use crate::error::IngestError;
use crate::keywords::contains_any;
use crate::profile::{FormatProfile, KASIKORN, KRUNGTHAI};

/// Format used when no predicate matches.
pub const DEFAULT_FORMAT: BankFormat = BankFormat::Krungthai;

/// Pick the layout for a normalized statement text.
///
/// Predicates are tried in order:
/// 1. a Kasikorn signature phrase in the preamble
/// 2. a Krungthai signature phrase in the preamble
/// 3. a `DD-MM-YY HH:MM` anchor, which only the Kasikorn layout prints
///
/// and [`DEFAULT_FORMAT`] applies otherwise. The preamble is the text before
/// the first date anchor of either layout: transaction rows routinely name the
/// counterparty bank and must not decide the layout.
pub fn detect_format(text: &str) -> Result<BankFormat, IngestError> {
    let kasikorn_anchor = Regex::new(KASIKORN.anchor_pattern)?;
    let krungthai_anchor = Regex::new(KRUNGTHAI.anchor_pattern)?;
    let preamble = preamble(text, &[&kasikorn_anchor, &krungthai_anchor]);

    let by_signature: [&FormatProfile; 2] = [&KASIKORN, &KRUNGTHAI];
    for profile in by_signature {
        if contains_any(preamble, profile.signatures) {
            debug!(bank = %profile.bank, reason = "signature", "detected bank format");
            return Ok(profile.bank);
        }
    }

    if kasikorn_anchor.is_match(text) {
        debug!(bank = %KASIKORN.bank, reason = "anchor", "detected bank format");
        return Ok(KASIKORN.bank);
    }

    debug!(bank = %DEFAULT_FORMAT, "no bank signature, using default format");
    Ok(DEFAULT_FORMAT)
}

fn preamble<'t>(text: &'t str, anchors: &[&Regex]) -> &'t str {
    let first_row = anchors
        .iter()
        .filter_map(|re| re.find(text))
        .map(|m| m.start())
        .min()
        .unwrap_or(text.len());
    &text[..first_row]
}
