//! Statement output types handed to the presentation layer

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Statement layouts the parser understands
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum BankFormat {
    /// K PLUS style: `DD-MM-YY HH:MM` anchors, civil years, balance before amount
    #[serde(rename = "kasikorn")]
    Kasikorn,
    /// Passbook style: `DD/MM/YY` anchors, Buddhist-era years, amount before balance
    #[serde(rename = "krungthai")]
    Krungthai,
}

impl BankFormat {
    pub const ALL: [BankFormat; 2] = [BankFormat::Kasikorn, BankFormat::Krungthai];

    pub fn as_str(&self) -> &'static str {
        match self {
            BankFormat::Kasikorn => "kasikorn",
            BankFormat::Krungthai => "krungthai",
        }
    }
}

impl fmt::Display for BankFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BankFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kasikorn" | "kbank" | "a" => Ok(BankFormat::Kasikorn),
            "krungthai" | "ktb" | "b" => Ok(BankFormat::Krungthai),
            other => Err(format!("unknown bank format: {other}")),
        }
    }
}

/// Direction of a transaction. Amounts are never negative; this carries the sign.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Polarity {
    #[serde(rename = "income")]
    Income,
    #[serde(rename = "expense")]
    Expense,
}

impl Polarity {
    pub fn from_income_flag(is_income: bool) -> Self {
        if is_income {
            Polarity::Income
        } else {
            Polarity::Expense
        }
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Polarity::Income)
    }
}

/// A classified transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sequential per statement, starting at 1
    pub id: usize,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub description: String,
    /// Always non-negative
    pub amount: Decimal,
    pub polarity: Polarity,
}

impl Transaction {
    /// Amount with the polarity applied (income positive, expense negative)
    pub fn signed_amount(&self) -> Decimal {
        match self.polarity {
            Polarity::Income => self.amount,
            Polarity::Expense => -self.amount,
        }
    }
}

/// Account metadata. Every field except `bank` may be missing from the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementHeader {
    pub bank: BankFormat,
    pub account_number: Option<String>,
    pub owner_name: Option<String>,
    pub branch: Option<String>,
    pub address: Option<String>,
}

impl StatementHeader {
    pub fn new(bank: BankFormat) -> Self {
        Self {
            bank,
            account_number: None,
            owner_name: None,
            branch: None,
            address: None,
        }
    }
}

/// Everything recovered from one statement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementResult {
    #[serde(flatten)]
    pub header: StatementHeader,
    /// In source order, assumed oldest first
    pub transactions: Vec<Transaction>,
    /// Normalized text, kept so an empty result can be diagnosed
    pub raw_text: String,
    /// Spans skipped because a token failed strict parsing
    #[serde(default)]
    pub warnings: Vec<String>,
}

impl StatementResult {
    /// True when no transaction was recovered
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}
