//! Balance service implementation.

use std::sync::Arc;

use balancebook_shared::types::{BalanceId, RecordingId};
use chrono::{NaiveDate, Utc};

use super::store::BalanceStore;
use crate::chart::ChartOfAccounts;
use crate::ledger::{
    Balance, BalanceSummary, CreateBalanceInput, LedgerError, LedgerTotals, Recording,
    validate_create_input,
};
use crate::reports::{BalanceReports, ReportService};

/// A newly stored balance with the totals computed while validating it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedBalance {
    /// The stored balance.
    pub balance: Balance,
    /// Debit and credit totals over every recording.
    pub totals: LedgerTotals,
}

/// Balance service: creation workflow and report access over a store.
pub struct BalanceService<S: BalanceStore> {
    store: Arc<S>,
    reports: ReportService,
}

impl<S: BalanceStore> BalanceService<S> {
    /// Create a new balance service.
    #[must_use]
    pub fn new(store: Arc<S>, chart: Arc<ChartOfAccounts>) -> Self {
        Self {
            store,
            reports: ReportService::new(chart),
        }
    }

    /// Creates a balance dated today unless the input carries a date.
    ///
    /// # Errors
    ///
    /// See [`Self::create_on`].
    pub fn create(&self, input: CreateBalanceInput) -> Result<CreatedBalance, LedgerError> {
        self.create_on(input, Utc::now().date_naive())
    }

    /// Creates a balance, using `today` when the input carries no date.
    ///
    /// The input is validated in full before anything is stored, and the
    /// balance is stored in one call, so a rejected input leaves no trace.
    ///
    /// # Errors
    ///
    /// Returns a validation error (including `UnbalancedBalance`) or a storage error.
    pub fn create_on(
        &self,
        input: CreateBalanceInput,
        today: NaiveDate,
    ) -> Result<CreatedBalance, LedgerError> {
        let totals = validate_create_input(&input).inspect_err(|e| {
            tracing::warn!(error = %e, code = e.error_code(), "Rejected balance");
        })?;

        let balance = Balance {
            id: BalanceId::new(),
            name: input.general_info.name,
            description: input.general_info.description,
            purpose: input.general_info.purpose,
            date: input.date.unwrap_or(today),
            recordings: input
                .recordings
                .into_iter()
                .map(|recording| Recording {
                    id: RecordingId::new(),
                    date: recording.date,
                    recording_type: recording.recording_type,
                    transactions: recording.transactions,
                })
                .collect(),
        };

        self.store.insert(balance.clone())?;

        tracing::info!(
            balance_id = %balance.id,
            recordings = balance.recordings.len(),
            total = %totals.debit,
            "Created balance"
        );

        Ok(CreatedBalance { balance, totals })
    }

    /// Gets a balance by id.
    ///
    /// # Errors
    ///
    /// Returns `BalanceNotFound` if no balance has this id.
    pub fn get_by_id(&self, id: BalanceId) -> Result<Balance, LedgerError> {
        self.store
            .find_by_id(id)?
            .ok_or(LedgerError::BalanceNotFound(id))
    }

    /// Lists balances ordered by date, oldest first.
    ///
    /// # Errors
    ///
    /// Returns a storage error.
    pub fn list(&self) -> Result<Vec<BalanceSummary>, LedgerError> {
        let mut balances = self.store.list()?;
        balances.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(balances)
    }

    /// Derives every report of a stored balance.
    ///
    /// # Errors
    ///
    /// Returns `BalanceNotFound` if no balance has this id.
    pub fn reports(&self, id: BalanceId) -> Result<BalanceReports, LedgerError> {
        let balance = self.get_by_id(id)?;
        self.reports.generate_all(&balance)
    }
}
