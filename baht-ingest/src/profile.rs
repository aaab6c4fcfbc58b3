//! Per-bank layout configuration.
//!
//! Everything that differs between the two statement layouts lives here as
//! plain data, so the segmenter, extractors and reconciler stay format-agnostic.

use baht_core::{BankFormat, CalendarKind};
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::IngestError;

/// Amount token: digit groups with optional thousands commas and exactly two decimals.
pub const AMOUNT_PATTERN: &str = r"\d+(?:,\d{3})*\.\d{2}";

/// Free-standing `HH:MM` time-of-day.
pub const TIME_PATTERN: &str = r"\b(?P<hour>[01]\d|2[0-3]):(?P<minute>[0-5]\d)\b";

/// How running balances decide polarity for a transaction with a predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileRule {
    /// `balance[i] - balance[i-1] > threshold` means income.
    BalanceDelta { threshold: Decimal },
    /// Rebuild `balance[i]` as `prev ± amount`; the side within `tolerance` wins.
    BalanceReconstruction { tolerance: Decimal },
}

/// Ordered capture patterns per header field. Each pattern has a `value` group.
#[derive(Debug, Clone, Copy)]
pub struct HeaderPatterns {
    pub owner_name: &'static [&'static str],
    pub account_number: &'static [&'static str],
    pub branch: &'static [&'static str],
    pub address: &'static [&'static str],
}

#[derive(Debug, Clone, Copy)]
pub struct FormatProfile {
    pub bank: BankFormat,
    /// Phrases that identify the bank anywhere in the text
    pub signatures: &'static [&'static str],
    pub calendar: CalendarKind,
    /// Date anchor with `day`, `month`, `year` and optionally `hour`, `minute` groups
    pub anchor_pattern: &'static str,
    /// Spans with fewer amount tokens are not transactions
    pub min_amount_tokens: usize,
    /// Channel names stripped from descriptions
    pub channel_phrases: &'static [&'static str],
    /// Spans containing any of these are account-header boilerplate
    pub header_markers: &'static [&'static str],
    pub income_keywords: &'static [&'static str],
    /// Extra income phrases checked only for the first transaction
    pub opening_income_phrases: &'static [&'static str],
    pub header: HeaderPatterns,
    pub reconcile: ReconcileRule,
}

pub static KASIKORN: FormatProfile = FormatProfile {
    bank: BankFormat::Kasikorn,
    signatures: &["KASIKORNBANK", "ธนาคารกสิกรไทย", "K PLUS"],
    calendar: CalendarKind::Civil,
    anchor_pattern: r"\b(?P<day>\d{2})-(?P<month>\d{2})-(?P<year>\d{2})\s(?P<hour>\d{2}):(?P<minute>\d{2})\b",
    min_amount_tokens: 2,
    channel_phrases: &[
        "EDC/K SHOP/MY PROMPTPAY",
        "K-Cash Connect Plus",
        "Internet/Mobile",
        "Automatic Transfer",
        "K PLUS",
        "K BIZ",
    ],
    header_markers: &[],
    income_keywords: &["ฝากเงิน", "ดอกเบี้ย", "deposit", "interest"],
    opening_income_phrases: &["รับโอนเงิน"],
    header: HeaderPatterns {
        owner_name: &[
            r"ชื่อบัญชี\s*(?:Account Name)?\s*:?\s*(?P<value>.+?)\s+(?:เลขที่บัญชี|Account Number)",
            r"Account Name\s*:?\s*(?P<value>.+?)\s+(?:Account Number|เลขที่บัญชี)",
        ],
        account_number: &[
            r"(?:เลขที่บัญชี|Account Number)\s*:?\s*(?P<value>\d{3}-\d-\d{5}-\d)",
            r"(?:เลขที่บัญชี|Account Number)\s*:?\s*(?P<value>[\dXx][\dXx-]{8,}[\dXx])",
        ],
        branch: &[r"(?:สาขา|Branch)\s*:?\s*(?P<value>.+?)\s+(?:ที่อยู่|Address|รอบระหว่างวันที่|Period)"],
        address: &[r"(?:ที่อยู่|Address)\s*:?\s*(?P<value>.+?)\s+(?:รอบระหว่างวันที่|Period|ยอดยกมา)"],
    },
    reconcile: ReconcileRule::BalanceDelta {
        threshold: Decimal::from_parts(1, 0, 0, false, 2),
    },
};

pub static KRUNGTHAI: FormatProfile = FormatProfile {
    bank: BankFormat::Krungthai,
    signatures: &["Krungthai", "KRUNG THAI", "ธนาคารกรุงไทย"],
    calendar: CalendarKind::BuddhistEra,
    anchor_pattern: r"\b(?P<day>\d{2})/(?P<month>\d{2})/(?P<year>\d{2})\b",
    min_amount_tokens: 1,
    channel_phrases: &[],
    header_markers: &[
        "ชื่อบัญชี",
        "Account Name",
        "เลขที่บัญชี",
        "Account No",
        "รอบระหว่างวันที่",
        "Statement Period",
        "ยอดยกมา",
        "Balance Brought Forward",
    ],
    income_keywords: &["รับโอน", "ฝาก", "เงินเข้า", "ดอกเบี้ย", "deposit", "transfer in", "interest"],
    opening_income_phrases: &[],
    header: HeaderPatterns {
        owner_name: &[r"(?:ชื่อบัญชี|Account Name)\s*:?\s*(?P<value>.+?)\s+(?:เลขที่บัญชี|Account No)"],
        account_number: &[
            r"(?:เลขที่บัญชี|Account No\.?)\s*:?\s*(?P<value>\d{3}-\d-\d{5}-\d)",
            r"(?:เลขที่บัญชี|Account No\.?)\s*:?\s*(?P<value>[\dXx][\dXx-]{8,}[\dXx])",
        ],
        branch: &[
            r"(?:สาขา|Branch)\s*:?\s*(?P<value>.+?)\s+(?:ที่อยู่|Address|รอบระหว่างวันที่|Statement Period)",
        ],
        address: &[
            r"(?:ที่อยู่|Address)\s*:?\s*(?P<value>.+?)\s+(?:รอบระหว่างวันที่|Statement Period|ยอดยกมา)",
        ],
    },
    reconcile: ReconcileRule::BalanceReconstruction {
        tolerance: Decimal::from_parts(5, 0, 0, false, 2),
    },
};

impl FormatProfile {
    pub fn for_format(bank: BankFormat) -> &'static FormatProfile {
        match bank {
            BankFormat::Kasikorn => &KASIKORN,
            BankFormat::Krungthai => &KRUNGTHAI,
        }
    }
}

/// Header field patterns after compilation
#[derive(Debug, Clone)]
pub struct CompiledHeader {
    pub owner_name: Vec<Regex>,
    pub account_number: Vec<Regex>,
    pub branch: Vec<Regex>,
    pub address: Vec<Regex>,
}

/// A profile with its patterns compiled, built once per statement.
#[derive(Debug, Clone)]
pub struct StatementPatterns {
    pub profile: &'static FormatProfile,
    pub anchor: Regex,
    pub amount: Regex,
    pub time: Regex,
    pub header: CompiledHeader,
}

impl StatementPatterns {
    pub fn new(profile: &'static FormatProfile) -> Result<Self, IngestError> {
        Ok(Self {
            profile,
            anchor: Regex::new(profile.anchor_pattern)?,
            amount: Regex::new(AMOUNT_PATTERN)?,
            time: Regex::new(TIME_PATTERN)?,
            header: CompiledHeader {
                owner_name: compile_all(profile.header.owner_name)?,
                account_number: compile_all(profile.header.account_number)?,
                branch: compile_all(profile.header.branch)?,
                address: compile_all(profile.header.address)?,
            },
        })
    }

    pub fn for_format(bank: BankFormat) -> Result<Self, IngestError> {
        Self::new(FormatProfile::for_format(bank))
    }

    pub fn bank(&self) -> BankFormat {
        self.profile.bank
    }
}

fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>, IngestError> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(IngestError::from))
        .collect()
}
