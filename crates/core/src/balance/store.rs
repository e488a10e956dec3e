//! Balance persistence seam.

use balancebook_shared::types::BalanceId;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::ledger::{Balance, BalanceSummary, LedgerError};

/// Repository trait for balance persistence.
///
/// Implementations store a balance whole or not at all; a stored balance is
/// never modified.
pub trait BalanceStore: Send + Sync {
    /// Stores a new balance with its recordings.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateBalance` if the id is taken, or `Storage` on backend failure.
    fn insert(&self, balance: Balance) -> Result<(), LedgerError>;

    /// Finds a balance by id.
    ///
    /// # Errors
    ///
    /// Returns `Storage` on backend failure.
    fn find_by_id(&self, id: BalanceId) -> Result<Option<Balance>, LedgerError>;

    /// Lists every stored balance without its recordings.
    ///
    /// # Errors
    ///
    /// Returns `Storage` on backend failure.
    fn list(&self) -> Result<Vec<BalanceSummary>, LedgerError>;
}

/// In-process balance store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryBalanceStore {
    balances: DashMap<BalanceId, Balance>,
}

impl InMemoryBalanceStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored balances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl BalanceStore for InMemoryBalanceStore {
    fn insert(&self, balance: Balance) -> Result<(), LedgerError> {
        match self.balances.entry(balance.id) {
            Entry::Occupied(_) => Err(LedgerError::DuplicateBalance(balance.id)),
            Entry::Vacant(slot) => {
                slot.insert(balance);
                Ok(())
            }
        }
    }

    fn find_by_id(&self, id: BalanceId) -> Result<Option<Balance>, LedgerError> {
        Ok(self.balances.get(&id).map(|entry| entry.value().clone()))
    }

    fn list(&self) -> Result<Vec<BalanceSummary>, LedgerError> {
        Ok(self
            .balances
            .iter()
            .map(|entry| BalanceSummary::from(entry.value()))
            .collect())
    }
}
