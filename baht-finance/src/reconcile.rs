//! Balance reconciler: decides income vs. expense for each candidate.
//!
//! Running-balance arithmetic is authoritative because layouts do not always
//! label direction. Keywords are only consulted when arithmetic is unavailable
//! or inconclusive, and for the first transaction, which has no predecessor.
//! The first transaction is never checked against the next balance.

use baht_core::{Polarity, Transaction};
use baht_ingest::keywords::contains_any;
use baht_ingest::{FormatProfile, RawTransactionCandidate, ReconcileRule};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// What decided a transaction's polarity
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClassificationBasis {
    /// First transaction: keyword hint or opening income phrase
    #[serde(rename = "opening-keyword")]
    OpeningKeyword,
    /// Sign of the balance change against the previous transaction
    #[serde(rename = "balance-delta")]
    BalanceDelta,
    /// `prev ± amount` reproduced the printed balance
    #[serde(rename = "balance-reconstruction")]
    BalanceReconstruction,
    /// Balance missing or inconclusive
    #[serde(rename = "keyword-fallback")]
    KeywordFallback,
}

/// A candidate with its polarity decided
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classified {
    pub candidate: RawTransactionCandidate,
    pub polarity: Polarity,
    pub basis: ClassificationBasis,
}

impl Classified {
    pub fn into_transaction(self, id: usize) -> Transaction {
        Transaction {
            id,
            date: self.candidate.date,
            time: self.candidate.time,
            description: self.candidate.description,
            amount: self.candidate.amount,
            polarity: self.polarity,
        }
    }
}

/// Classify candidates in order, pairing each with its predecessor.
pub fn reconcile(
    candidates: Vec<RawTransactionCandidate>,
    profile: &FormatProfile,
) -> Vec<Classified> {
    let decisions: Vec<_> = std::iter::once(None)
        .chain(candidates.iter().map(Some))
        .zip(&candidates)
        .map(|(prev, current)| classify(prev, current, profile))
        .collect();

    candidates
        .into_iter()
        .zip(decisions)
        .map(|(candidate, (polarity, basis))| Classified {
            candidate,
            polarity,
            basis,
        })
        .collect()
}

/// Decide polarity for `current` given the transaction printed just before it.
pub fn classify(
    prev: Option<&RawTransactionCandidate>,
    current: &RawTransactionCandidate,
    profile: &FormatProfile,
) -> (Polarity, ClassificationBasis) {
    let Some(prev) = prev else {
        let income = current.income_hint
            || contains_any(&current.description, profile.opening_income_phrases);
        return (
            Polarity::from_income_flag(income),
            ClassificationBasis::OpeningKeyword,
        );
    };

    let fallback = (
        Polarity::from_income_flag(current.income_hint),
        ClassificationBasis::KeywordFallback,
    );
    let (Some(prev_balance), Some(balance)) = (prev.balance, current.balance) else {
        return fallback;
    };

    match profile.reconcile {
        ReconcileRule::BalanceDelta { threshold } => match balance.checked_sub(prev_balance) {
            Some(delta) => (
                Polarity::from_income_flag(delta > threshold),
                ClassificationBasis::BalanceDelta,
            ),
            None => fallback,
        },
        ReconcileRule::BalanceReconstruction { tolerance } => {
            let within = |rebuilt: Option<Decimal>| {
                rebuilt
                    .and_then(|r| r.checked_sub(balance))
                    .is_some_and(|diff| diff.abs() < tolerance)
            };
            if within(prev_balance.checked_add(current.amount)) {
                (Polarity::Income, ClassificationBasis::BalanceReconstruction)
            } else if within(prev_balance.checked_sub(current.amount)) {
                (Polarity::Expense, ClassificationBasis::BalanceReconstruction)
            } else {
                fallback
            }
        }
    }
}
