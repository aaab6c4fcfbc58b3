//! Statement pipeline: text in, classified transactions and header out.

use baht_core::{BankFormat, StatementResult};
use baht_ingest::{
    ExtractOutcome, IngestError, StatementPatterns, detect_format, extract_candidates,
    extract_header, normalize_text,
};
use thiserror::Error;
use tracing::{debug, info};

use crate::reconcile::reconcile;

#[derive(Debug, Error)]
pub enum StatementError {
    #[error(transparent)]
    Ingest(#[from] IngestError),
}

/// Knobs for [`classify_statement_with`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifyOptions {
    /// Skip detection and use this layout
    pub bank: Option<BankFormat>,
    /// Income keywords added to the layout's built-in list
    pub extra_income_keywords: Vec<String>,
}

/// Parse and classify the full concatenated page text of one statement.
///
/// A statement without recognizable transactions is not an error: the result
/// has an empty transaction list and keeps the normalized text.
pub fn classify_statement(text: &str) -> Result<StatementResult, StatementError> {
    classify_statement_with(text, &ClassifyOptions::default())
}

pub fn classify_statement_with(
    text: &str,
    options: &ClassifyOptions,
) -> Result<StatementResult, StatementError> {
    let normalized = normalize_text(text);
    let bank = match options.bank {
        Some(bank) => bank,
        None => detect_format(&normalized)?,
    };
    let patterns = StatementPatterns::for_format(bank)?;

    let ExtractOutcome {
        candidates,
        warnings,
    } = extract_candidates(&normalized, &patterns, &options.extra_income_keywords);
    debug!(%bank, candidates = candidates.len(), "extracted candidates");

    let transactions: Vec<_> = reconcile(candidates, patterns.profile)
        .into_iter()
        .enumerate()
        .map(|(i, classified)| classified.into_transaction(i + 1))
        .collect();
    let header = extract_header(&normalized, &patterns);

    if transactions.is_empty() {
        info!(%bank, chars = normalized.chars().count(), "no transactions found");
    } else {
        info!(%bank, transactions = transactions.len(), warnings = warnings.len(), "classified statement");
    }

    Ok(StatementResult {
        header,
        transactions,
        raw_text: normalized,
        warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use baht_core::Polarity;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal_macros::dec;

    #[test]
    fn test_single_kasikorn_payment() {
        let result = classify_statement("01-07-25 08:53 K PLUS 1,255.41 ชำระเงิน 16.00").unwrap();

        assert_eq!(result.header.bank, BankFormat::Kasikorn);
        assert_eq!(result.transactions.len(), 1);
        let t = &result.transactions[0];
        assert_eq!(t.id, 1);
        assert_eq!(t.amount, dec!(16.00));
        assert_eq!(t.date, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert_eq!(t.time, Some(NaiveTime::from_hms_opt(8, 53, 0).unwrap()));
        assert_eq!(t.polarity, Polarity::Expense);
        assert!(!t.description.contains("K PLUS"));
        assert!(!t.description.contains("16.00"));
        assert!(!t.description.contains("1,255.41"));
    }

    #[test]
    fn test_no_anchors_keeps_text() {
        let text = "scanned page\n\nwith   nothing useful";
        let result = classify_statement(text).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.raw_text, "scanned page with nothing useful");
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_forced_format_and_extra_keywords() {
        let options = ClassifyOptions {
            bank: Some(BankFormat::Krungthai),
            extra_income_keywords: vec!["salary".to_string()],
        };
        let result = classify_statement_with("01/07/68 ACME SALARY 30,000.00", &options).unwrap();

        assert_eq!(result.header.bank, BankFormat::Krungthai);
        assert_eq!(result.transactions[0].polarity, Polarity::Income);
        assert_eq!(result.transactions[0].amount, dec!(30000.00));
    }

    #[test]
    fn test_bad_span_becomes_warning() {
        let text = "01-07-25 08:53 K PLUS 1,255.41 ชำระเงิน 16.00 31-02-25 09:00 K PLUS 1,239.41 ชำระเงิน 16.00";
        let result = classify_statement(text).unwrap();

        assert_eq!(result.transactions.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("31-02-25 09:00"));
    }
}
