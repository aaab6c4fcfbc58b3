//! Statement totals for a quick overview of a classified statement.

use baht_core::{Polarity, Transaction};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementSummary {
    pub income_count: usize,
    pub expense_count: usize,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// `total_income - total_expense`
    pub net_change: Decimal,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

impl StatementSummary {
    pub fn from_transactions(txns: &[Transaction]) -> Self {
        let (income, expense): (Vec<&Transaction>, Vec<&Transaction>) =
            txns.iter().partition(|t| t.polarity == Polarity::Income);

        let total_income: Decimal = income.iter().map(|t| t.amount).sum();
        let total_expense: Decimal = expense.iter().map(|t| t.amount).sum();

        Self {
            income_count: income.len(),
            expense_count: expense.len(),
            total_income,
            total_expense,
            net_change: total_income - total_expense,
            // source order is not verified to be chronological
            first_date: txns.iter().map(|t| t.date).min(),
            last_date: txns.iter().map(|t| t.date).max(),
        }
    }
}
