//! Account header extraction (owner, account number, branch, address).

use baht_core::StatementHeader;
use regex::Regex;

use crate::profile::StatementPatterns;

/// Pull header fields out of the normalized text. Missing fields stay `None`.
pub fn extract_header(text: &str, patterns: &StatementPatterns) -> StatementHeader {
    let h = &patterns.header;
    StatementHeader {
        bank: patterns.bank(),
        account_number: first_capture(text, &h.account_number),
        owner_name: first_capture(text, &h.owner_name),
        branch: first_capture(text, &h.branch),
        address: first_capture(text, &h.address),
    }
}

fn first_capture(text: &str, patterns: &[Regex]) -> Option<String> {
    patterns.iter().find_map(|re| {
        let value = re.captures(text)?.name("value")?.as_str().trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}
