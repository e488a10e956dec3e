//! Double-entry aggregation.
//!
//! Flattens a balance's recordings into one transaction log and folds the
//! log into per-account debit and credit totals. Every call is a pure
//! function of its input: no caching, no shared mutable state.

use std::collections::HashMap;
use std::sync::Arc;

use balancebook_shared::types::RecordingId;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;
use super::types::{EntryType, LedgerTotals, Recording};
use super::validation::validate_transactions;
use crate::chart::ChartOfAccounts;

/// One transaction line joined with its recording and account name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlatTransaction {
    /// Recording the line belongs to.
    pub recording_id: RecordingId,
    /// Date of the recording.
    pub date: NaiveDate,
    /// Account number.
    pub account_number: String,
    /// Account name, empty when the chart has no entry.
    pub account_name: String,
    /// Amount, never negative.
    pub amount: Decimal,
    /// Debit or credit.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
}

/// Per-account totals derived from the transaction log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account number.
    pub account_number: String,
    /// Account name, empty when the chart has no entry.
    pub account_name: String,
    /// Sum of debit amounts (zero when there are none).
    pub debit: Decimal,
    /// Sum of credit amounts (zero when there are none).
    pub credit: Decimal,
}

impl Account {
    /// Creates an account with zero totals.
    pub fn new(account_number: impl Into<String>, account_name: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            account_name: account_name.into(),
            debit: Decimal::ZERO,
            credit: Decimal::ZERO,
        }
    }

    /// Adds an amount to the matching side, saturating at the decimal range.
    pub fn post(&mut self, entry_type: EntryType, amount: Decimal) {
        match entry_type {
            EntryType::Debit => self.debit = self.debit.saturating_add(amount),
            EntryType::Credit => self.credit = self.credit.saturating_add(amount),
        }
    }

    /// Debits minus credits.
    #[must_use]
    pub fn net(&self) -> Decimal {
        self.debit.saturating_sub(self.credit)
    }

    /// `|debit - credit|`, the value an account contributes to a statement line.
    #[must_use]
    pub fn balance(&self) -> Decimal {
        self.net().abs()
    }

    /// Returns true if the account number starts with `prefix`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.account_number.starts_with(prefix)
    }
}

/// Output of [`AggregationEngine::aggregate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregation {
    /// Flattened transaction log, recording order then line order.
    pub transactions: Vec<FlatTransaction>,
    /// Per-account totals, in order of first appearance.
    pub accounts: Vec<Account>,
    /// Debit and credit totals over every line.
    pub totals: LedgerTotals,
}

/// Aggregation engine bound to a chart of accounts.
#[derive(Debug, Clone)]
pub struct AggregationEngine {
    chart: Arc<ChartOfAccounts>,
}

impl AggregationEngine {
    /// Creates an engine resolving names against `chart`.
    #[must_use]
    pub fn new(chart: Arc<ChartOfAccounts>) -> Self {
        Self { chart }
    }

    /// Flattens recordings into a transaction log.
    ///
    /// Order is recording order, then line order within a recording.
    #[must_use]
    pub fn flatten(&self, recordings: &[Recording]) -> Vec<FlatTransaction> {
        recordings
            .iter()
            .flat_map(|recording| {
                recording.transactions.iter().map(move |tx| FlatTransaction {
                    recording_id: recording.id,
                    date: recording.date,
                    account_number: tx.account_number.clone(),
                    account_name: self.chart.name_or_placeholder(&tx.account_number).to_string(),
                    amount: tx.amount,
                    entry_type: tx.entry_type,
                })
            })
            .collect()
    }

    /// Folds a transaction log into per-account totals.
    ///
    /// Accounts come out in order of first appearance. Totals are plain
    /// decimal sums, so reordering the log never changes them.
    #[must_use]
    pub fn group_by_account(transactions: &[FlatTransaction]) -> Vec<Account> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut accounts: Vec<Account> = Vec::new();

        for tx in transactions {
            let position = *index.entry(tx.account_number.as_str()).or_insert_with(|| {
                accounts.push(Account::new(&tx.account_number, &tx.account_name));
                accounts.len() - 1
            });
            accounts[position].post(tx.entry_type, tx.amount);
        }

        accounts
    }

    /// Validates, flattens and aggregates a balance's recordings.
    ///
    /// Debit/credit imbalance is reported through `totals.is_balanced` and
    /// logged; it does not fail the call, so stored balances always render.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a negative amount or a blank account number.
    pub fn aggregate(&self, recordings: &[Recording]) -> Result<Aggregation, LedgerError> {
        let totals = validate_transactions(
            recordings
                .iter()
                .flat_map(|recording| recording.transactions.iter()),
        )?;

        if !totals.is_balanced {
            tracing::warn!(
                debit = %totals.debit,
                credit = %totals.credit,
                "Aggregating recordings whose debits and credits differ"
            );
        }

        let transactions = self.flatten(recordings);
        let accounts = Self::group_by_account(&transactions);

        tracing::debug!(
            lines = transactions.len(),
            accounts = accounts.len(),
            "Aggregated recordings"
        );

        Ok(Aggregation {
            transactions,
            accounts,
            totals,
        })
    }
}
