//! Report data types.

use std::fmt;

use balancebook_shared::types::RecordingId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::{BalanceSummary, EntryType, LedgerTotals};

// ===== Recording book =====

/// One line of the recording book (journal).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingBookRow {
    /// Recording the line belongs to.
    pub recording_id: RecordingId,
    /// Date of the recording.
    pub date: NaiveDate,
    /// Account number.
    pub account_number: String,
    /// Account name, empty when the chart has no entry.
    pub account_name: String,
    /// Amount when the line is a debit.
    pub debit: Option<Decimal>,
    /// Amount when the line is a credit.
    pub credit: Option<Decimal>,
}

/// Recording book report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingBook {
    /// Rows in recording order, then line order.
    pub rows: Vec<RecordingBookRow>,
    /// Sum of the debit column.
    pub total_debit: Decimal,
    /// Sum of the credit column.
    pub total_credit: Decimal,
}

// ===== Ledger (T-accounts) =====

/// Which balance closes a T-account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClosingKind {
    /// Credit balance, written on the debit side.
    CreditBalance,
    /// Debit balance, written on the credit side.
    DebitBalance,
}

/// Closing marker of a T-account, e.g. `D.B. 70` on the credit side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosingMarker {
    /// Kind of balance.
    pub kind: ClosingKind,
    /// Closing amount.
    pub amount: Decimal,
}

impl ClosingMarker {
    /// Column the marker is written in.
    #[must_use]
    pub const fn side(&self) -> EntryType {
        match self.kind {
            ClosingKind::CreditBalance => EntryType::Debit,
            ClosingKind::DebitBalance => EntryType::Credit,
        }
    }

    /// Short label, `C.B.` or `D.B.`.
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self.kind {
            ClosingKind::CreditBalance => "C.B.",
            ClosingKind::DebitBalance => "D.B.",
        }
    }
}

impl fmt::Display for ClosingMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.abbreviation(), self.amount)
    }
}

/// A single T-account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerAccount {
    /// Account number.
    pub account_number: String,
    /// Account name, empty when the chart has no entry.
    pub account_name: String,
    /// Debit amounts in entry order.
    pub debit_entries: Vec<Decimal>,
    /// Credit amounts in entry order.
    pub credit_entries: Vec<Decimal>,
    /// Largest debit amount, zero without debits.
    pub max_debit: Decimal,
    /// Largest credit amount, zero without credits.
    pub max_credit: Decimal,
    /// `|max_debit - max_credit|`.
    pub difference: Decimal,
    /// Closing marker, absent when both maxima are equal.
    pub closing: Option<ClosingMarker>,
}

impl LedgerAccount {
    /// Marker written in the debit column, if any.
    #[must_use]
    pub fn debit_marker(&self) -> Option<&ClosingMarker> {
        self.closing.as_ref().filter(|m| m.side() == EntryType::Debit)
    }

    /// Marker written in the credit column, if any.
    #[must_use]
    pub fn credit_marker(&self) -> Option<&ClosingMarker> {
        self.closing.as_ref().filter(|m| m.side() == EntryType::Credit)
    }
}

/// Ledger report: one T-account per account, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerBook {
    /// T-accounts.
    pub accounts: Vec<LedgerAccount>,
}

// ===== Trial balance =====

/// Trial balance row. At most one column is filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceRow {
    /// Account number.
    pub account_number: String,
    /// Account name, empty when the chart has no entry.
    pub account_name: String,
    /// `debit - credit` when debits exceed credits.
    pub debit: Option<Decimal>,
    /// `credit - debit` when credits exceed debits.
    pub credit: Option<Decimal>,
}

/// Trial balance totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceTotals {
    /// Sum of the debit column.
    pub total_debit: Decimal,
    /// Sum of the credit column.
    pub total_credit: Decimal,
    /// Whether both columns are equal.
    pub is_balanced: bool,
}

/// Trial balance report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceReport {
    /// Rows sorted by account number.
    pub rows: Vec<TrialBalanceRow>,
    /// Footer.
    pub totals: TrialBalanceTotals,
}

// ===== Financial statements =====

/// A statement line: one account and its `|debit - credit|`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementLine {
    /// Account number.
    pub account_number: String,
    /// Account name, empty when the chart has no entry.
    pub account_name: String,
    /// Line value.
    pub amount: Decimal,
}

/// A group of statement lines with its total.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementSection {
    /// Lines in order of first appearance.
    pub lines: Vec<StatementLine>,
    /// Section total.
    pub total: Decimal,
}

impl StatementSection {
    /// Appends a line and adds it to the total.
    pub fn push(&mut self, line: StatementLine) {
        self.total = self.total.saturating_add(line.amount);
        self.lines.push(line);
    }

    /// Returns true if the section has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Income statement report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatementReport {
    /// Class 6 accounts.
    pub expenses: StatementSection,
    /// Class 7 accounts.
    pub income: StatementSection,
    /// Income total minus expenses total. Negative for a loss.
    pub profit: Decimal,
}

/// Balance sheet report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheetReport {
    /// Class 2 accounts.
    pub fixed_assets: StatementSection,
    /// Class 5 accounts.
    pub current_assets: StatementSection,
    /// Class 1 accounts except loans (16).
    pub equity: StatementSection,
    /// Profit carried over from the income statement.
    pub profit: Decimal,
    /// Class 4 and 16 accounts with a credit balance.
    pub other_debts: StatementSection,
    /// Fixed plus current assets.
    pub total_assets: Decimal,
    /// Equity plus profit plus other debts.
    pub total_liabilities: Decimal,
    /// `total_assets - total_liabilities`.
    pub discrepancy: Decimal,
    /// Whether both sides are equal.
    pub is_balanced: bool,
}

/// Income statement and balance sheet sharing one profit figure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialStatements {
    /// Income statement.
    pub income_statement: IncomeStatementReport,
    /// Balance sheet.
    pub balance_sheet: BalanceSheetReport,
}

/// Every view of one balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceReports {
    /// The balance the reports were derived from.
    pub balance: BalanceSummary,
    /// Debit and credit totals over all lines.
    pub totals: LedgerTotals,
    /// Recording book.
    pub recording_book: RecordingBook,
    /// Ledger.
    pub ledger: LedgerBook,
    /// Trial balance.
    pub trial_balance: TrialBalanceReport,
    /// Income statement and balance sheet.
    pub statements: FinancialStatements,
}
