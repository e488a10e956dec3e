mod chart_text;
mod format;
mod report_text;

use std::io::{self, Write};

use balancebook_core::ledger::{BalanceSummary, LedgerTotals};
use balancebook_core::reports::BalanceReports;
use balancebook_shared::AppError;
use serde::Serialize;
use serde_json::json;

pub use chart_text::ChartListing;

use crate::cli::View;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

impl OutputMode {
    pub fn from_json_flag(json: bool) -> Self {
        if json { Self::Json } else { Self::Text }
    }
}

#[derive(Debug)]
pub enum Success {
    Reports {
        reports: Box<BalanceReports>,
        view: View,
    },
    Checked {
        balance: BalanceSummary,
        totals: LedgerTotals,
    },
    Chart(ChartListing),
}

pub fn print_success(success: &Success, mode: OutputMode, currency: &str) -> io::Result<()> {
    match mode {
        OutputMode::Json => write_stdout_text(&success_json(success)?),
        OutputMode::Text => write_stdout_text(&success_text(success, currency)),
    }
}

pub fn print_failure(error: &AppError, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Json => {
            let body = json!({
                "error": {
                    "code": error.error_code(),
                    "message": error.to_string(),
                }
            });
            write_stdout_text(&pretty(&body)?)
        }
        OutputMode::Text => {
            let mut stderr = io::stderr().lock();
            writeln!(stderr, "error: {error}")?;
            writeln!(stderr, "  code: {}", error.error_code())
        }
    }
}

fn success_text(success: &Success, currency: &str) -> String {
    match success {
        Success::Reports { reports, view } => report_text::render_reports(reports, *view, currency),
        Success::Checked { balance, totals } => {
            let mut lines = report_text::render_header(balance, totals, currency);
            lines.push(String::new());
            lines.push("Balance document is valid.".to_string());
            let mut text = lines.join("\n");
            text.push('\n');
            text
        }
        Success::Chart(listing) => chart_text::render_chart(listing),
    }
}

fn success_json(success: &Success) -> io::Result<String> {
    match success {
        Success::Reports { reports, view } => match view {
            View::All => pretty(reports),
            View::Book => pretty(&reports.recording_book),
            View::Ledger => pretty(&reports.ledger),
            View::Trial => pretty(&reports.trial_balance),
            View::Income => pretty(&reports.statements.income_statement),
            View::Sheet => pretty(&reports.statements.balance_sheet),
        },
        Success::Checked { balance, totals } => pretty(&json!({
            "valid": true,
            "balance": balance,
            "totals": totals,
        })),
        Success::Chart(listing) => pretty(listing),
    }
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> io::Result<String> {
    let mut text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
    text.push('\n');
    Ok(text)
}

fn write_stdout_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    match stdout.write_all(text.as_bytes()).and_then(|()| stdout.flush()) {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use balancebook_core::chart::ChartOfAccounts;

    #[test]
    fn mode_follows_json_flag() {
        assert_eq!(OutputMode::from_json_flag(true), OutputMode::Json);
        assert_eq!(OutputMode::from_json_flag(false), OutputMode::Text);
    }

    #[test]
    fn chart_json_uses_camel_case() {
        let listing = ChartListing::build(&ChartOfAccounts::new([("512", "Bank")]), None);
        let text = success_json(&Success::Chart(listing)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["classes"][0]["accounts"][0]["shortNumber"], "512");
        assert_eq!(value["classes"][0]["class"], 5);
    }
}
