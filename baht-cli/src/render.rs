//! Terminal, JSON and CSV output for classified statements.

use anyhow::{Context, Result, anyhow};
use baht_core::{Polarity, StatementResult};
use baht_finance::StatementSummary;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::PathBuf;

/// One parsed input file
#[derive(Debug, Clone, Serialize)]
pub struct ParsedFile {
    pub file: PathBuf,
    #[serde(flatten)]
    pub result: StatementResult,
    pub summary: StatementSummary,
}

impl ParsedFile {
    pub fn new(file: PathBuf, result: StatementResult) -> Self {
        let summary = StatementSummary::from_transactions(&result.transactions);
        Self {
            file,
            result,
            summary,
        }
    }
}

fn polarity_label(p: Polarity) -> &'static str {
    match p {
        Polarity::Income => "income",
        Polarity::Expense => "expense",
    }
}

pub fn render_table(parsed: &ParsedFile, with_summary: bool) -> String {
    let r = &parsed.result;
    let h = &r.header;
    let mut out = String::new();

    let _ = writeln!(out, "# {} ({})", parsed.file.display(), h.bank);
    for (label, value) in [
        ("Owner", &h.owner_name),
        ("Account", &h.account_number),
        ("Branch", &h.branch),
        ("Address", &h.address),
    ] {
        if let Some(v) = value {
            let _ = writeln!(out, "{label:<8} {v}");
        }
    }
    out.push('\n');

    if r.is_empty() {
        let _ = writeln!(out, "No transactions found. Extracted text:\n");
        let _ = writeln!(out, "{}", r.raw_text);
    } else {
        for t in &r.transactions {
            let time = t
                .time
                .map(|tm| tm.format("%H:%M").to_string())
                .unwrap_or_else(|| "--:--".to_string());
            let _ = writeln!(
                out,
                "{:>4}  {}  {}  {:<7}  {:>14.2}  {}",
                t.id,
                t.date,
                time,
                polarity_label(t.polarity),
                t.amount,
                t.description
            );
        }
    }

    for w in &r.warnings {
        let _ = writeln!(out, "warning: {w}");
    }

    if with_summary && !r.is_empty() {
        let s = &parsed.summary;
        let _ = writeln!(
            out,
            "\nIncome: {} txns, {:.2} | Expense: {} txns, {:.2} | Net: {:.2}",
            s.income_count, s.total_income, s.expense_count, s.total_expense, s.net_change
        );
    }

    out
}

pub fn render_json(parsed: &[ParsedFile]) -> Result<String> {
    serde_json::to_string_pretty(parsed).context("serialize statements")
}

/// One row per transaction, across all files
pub fn render_csv(parsed: &[ParsedFile]) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record([
        "file",
        "bank",
        "id",
        "date",
        "time",
        "polarity",
        "amount",
        "description",
    ])?;

    for p in parsed {
        for t in &p.result.transactions {
            wtr.write_record([
                p.file.display().to_string(),
                p.result.header.bank.to_string(),
                t.id.to_string(),
                t.date.to_string(),
                t.time.map(|tm| tm.format("%H:%M").to_string()).unwrap_or_default(),
                polarity_label(t.polarity).to_string(),
                format!("{:.2}", t.amount),
                t.description.clone(),
            ])?;
        }
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| anyhow!("flush csv: {}", e.error()))?;
    String::from_utf8(bytes).context("csv output is not utf-8")
}
