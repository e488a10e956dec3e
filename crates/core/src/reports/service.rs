//! Report generation service.
//!
//! Every report is derived from the aggregation on demand. Derivation never
//! fails once the recordings passed aggregation.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::classify::StatementBucket;
use super::types::{
    BalanceReports, BalanceSheetReport, ClosingKind, ClosingMarker, FinancialStatements,
    IncomeStatementReport, LedgerAccount, LedgerBook, RecordingBook, RecordingBookRow,
    StatementLine, StatementSection, TrialBalanceReport, TrialBalanceRow, TrialBalanceTotals,
};
use crate::chart::ChartOfAccounts;
use crate::ledger::{
    Account, Aggregation, AggregationEngine, Balance, BalanceSummary, EntryType, FlatTransaction,
    LedgerError, Recording,
};

/// Service for generating accounting reports.
#[derive(Debug, Clone)]
pub struct ReportService {
    engine: AggregationEngine,
}

impl ReportService {
    /// Creates a report service resolving names against `chart`.
    #[must_use]
    pub fn new(chart: Arc<ChartOfAccounts>) -> Self {
        Self {
            engine: AggregationEngine::new(chart),
        }
    }

    /// Aggregates recordings.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed transaction lines.
    pub fn aggregate(&self, recordings: &[Recording]) -> Result<Aggregation, LedgerError> {
        self.engine.aggregate(recordings)
    }

    /// Generates every report for a balance.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a stored line is malformed.
    pub fn generate_all(&self, balance: &Balance) -> Result<BalanceReports, LedgerError> {
        let aggregation = self.aggregate(&balance.recordings)?;
        let statements = Self::financial_statements(&aggregation.accounts);

        tracing::info!(
            balance_id = %balance.id,
            accounts = aggregation.accounts.len(),
            profit = %statements.income_statement.profit,
            "Generated balance reports"
        );

        Ok(BalanceReports {
            balance: BalanceSummary::from(balance),
            totals: aggregation.totals,
            recording_book: Self::recording_book(&aggregation.transactions),
            ledger: Self::ledger_book(&aggregation.transactions),
            trial_balance: Self::trial_balance(&aggregation.accounts),
            statements,
        })
    }

    /// Generates the recording book from a flattened transaction log.
    #[must_use]
    pub fn recording_book(transactions: &[FlatTransaction]) -> RecordingBook {
        let mut book = RecordingBook::default();

        for tx in transactions {
            let (debit, credit) = match tx.entry_type {
                EntryType::Debit => {
                    book.total_debit = book.total_debit.saturating_add(tx.amount);
                    (Some(tx.amount), None)
                }
                EntryType::Credit => {
                    book.total_credit = book.total_credit.saturating_add(tx.amount);
                    (None, Some(tx.amount))
                }
            };
            book.rows.push(RecordingBookRow {
                recording_id: tx.recording_id,
                date: tx.date,
                account_number: tx.account_number.clone(),
                account_name: tx.account_name.clone(),
                debit,
                credit,
            });
        }

        book
    }

    /// Generates the T-account ledger from a flattened transaction log.
    ///
    /// The closing marker compares the largest single amount on each side,
    /// not the side totals.
    #[must_use]
    pub fn ledger_book(transactions: &[FlatTransaction]) -> LedgerBook {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut accounts: Vec<LedgerAccount> = Vec::new();

        for tx in transactions {
            let position = *index.entry(tx.account_number.as_str()).or_insert_with(|| {
                accounts.push(LedgerAccount {
                    account_number: tx.account_number.clone(),
                    account_name: tx.account_name.clone(),
                    debit_entries: Vec::new(),
                    credit_entries: Vec::new(),
                    max_debit: Decimal::ZERO,
                    max_credit: Decimal::ZERO,
                    difference: Decimal::ZERO,
                    closing: None,
                });
                accounts.len() - 1
            });
            match tx.entry_type {
                EntryType::Debit => accounts[position].debit_entries.push(tx.amount),
                EntryType::Credit => accounts[position].credit_entries.push(tx.amount),
            }
        }

        for account in &mut accounts {
            Self::close_account(account);
        }

        LedgerBook { accounts }
    }

    fn close_account(account: &mut LedgerAccount) {
        account.max_debit = max_or_zero(&account.debit_entries);
        account.max_credit = max_or_zero(&account.credit_entries);
        account.difference = (account.max_debit - account.max_credit).abs();
        account.closing = match account.max_debit.cmp(&account.max_credit) {
            Ordering::Less => Some(ClosingMarker {
                kind: ClosingKind::CreditBalance,
                amount: account.difference,
            }),
            Ordering::Greater => Some(ClosingMarker {
                kind: ClosingKind::DebitBalance,
                amount: account.difference,
            }),
            Ordering::Equal => None,
        };
    }

    /// Generates the trial balance from aggregated accounts.
    ///
    /// Rows are sorted by the numeric value of the account number; numbers
    /// that do not parse come last, in lexicographic order.
    #[must_use]
    pub fn trial_balance(accounts: &[Account]) -> TrialBalanceReport {
        let mut sorted: Vec<&Account> = accounts.iter().collect();
        sorted.sort_by(|a, b| compare_account_numbers(&a.account_number, &b.account_number));

        let rows: Vec<TrialBalanceRow> = sorted
            .into_iter()
            .map(|account| TrialBalanceRow {
                account_number: account.account_number.clone(),
                account_name: account.account_name.clone(),
                debit: (account.debit > account.credit).then(|| account.debit - account.credit),
                credit: (account.credit > account.debit).then(|| account.credit - account.debit),
            })
            .collect();

        let total_debit = saturating_sum(rows.iter().filter_map(|r| r.debit));
        let total_credit = saturating_sum(rows.iter().filter_map(|r| r.credit));

        TrialBalanceReport {
            rows,
            totals: TrialBalanceTotals {
                total_debit,
                total_credit,
                is_balanced: total_debit == total_credit,
            },
        }
    }

    /// Generates the income statement.
    #[must_use]
    pub fn income_statement(accounts: &[Account]) -> IncomeStatementReport {
        let mut report = IncomeStatementReport::default();

        for account in accounts {
            match StatementBucket::of(account) {
                Some(StatementBucket::Expense) => report.expenses.push(statement_line(account)),
                Some(StatementBucket::Income) => report.income.push(statement_line(account)),
                _ => {}
            }
        }

        report.profit = report.income.total.saturating_sub(report.expenses.total);
        report
    }

    /// Generates the balance sheet with the profit of the income statement.
    ///
    /// The `total_assets == total_liabilities` identity is reported through
    /// `is_balanced` and `discrepancy`, never enforced.
    #[must_use]
    pub fn balance_sheet(accounts: &[Account], profit: Decimal) -> BalanceSheetReport {
        let mut fixed_assets = StatementSection::default();
        let mut current_assets = StatementSection::default();
        let mut equity = StatementSection::default();
        let mut other_debts = StatementSection::default();

        for account in accounts {
            let section = match StatementBucket::of(account) {
                Some(StatementBucket::FixedAsset) => &mut fixed_assets,
                Some(StatementBucket::CurrentAsset) => &mut current_assets,
                Some(StatementBucket::Equity) => &mut equity,
                Some(StatementBucket::OtherDebt) => &mut other_debts,
                _ => continue,
            };
            section.push(statement_line(account));
        }

        let total_assets = fixed_assets.total.saturating_add(current_assets.total);
        let total_liabilities = equity
            .total
            .saturating_add(profit)
            .saturating_add(other_debts.total);
        let discrepancy = total_assets.saturating_sub(total_liabilities);

        if !discrepancy.is_zero() {
            tracing::debug!(%total_assets, %total_liabilities, "Balance sheet does not balance");
        }

        BalanceSheetReport {
            fixed_assets,
            current_assets,
            equity,
            profit,
            other_debts,
            total_assets,
            total_liabilities,
            discrepancy,
            is_balanced: discrepancy.is_zero(),
        }
    }

    /// Generates the income statement and the balance sheet from one profit figure.
    #[must_use]
    pub fn financial_statements(accounts: &[Account]) -> FinancialStatements {
        let income_statement = Self::income_statement(accounts);
        let balance_sheet = Self::balance_sheet(accounts, income_statement.profit);
        FinancialStatements {
            income_statement,
            balance_sheet,
        }
    }
}

fn statement_line(account: &Account) -> StatementLine {
    StatementLine {
        account_number: account.account_number.clone(),
        account_name: account.account_name.clone(),
        amount: account.balance(),
    }
}

fn max_or_zero(entries: &[Decimal]) -> Decimal {
    entries.iter().copied().max().unwrap_or(Decimal::ZERO)
}

fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

fn compare_account_numbers(a: &str, b: &str) -> Ordering {
    match (a.parse::<u128>(), b.parse::<u128>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
