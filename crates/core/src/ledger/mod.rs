//! Double-entry bookkeeping logic.
//!
//! This module implements the ledger side of a balance:
//! - Domain types for balances, recordings and transaction lines
//! - Business rule validation for balance creation
//! - Aggregation of recordings into per-account totals
//! - Error types for ledger operations

pub mod aggregation;
pub mod error;
pub mod types;
pub mod validation;

#[cfg(test)]
mod aggregation_props;
#[cfg(test)]
mod validation_props;

pub use aggregation::{Account, Aggregation, AggregationEngine, FlatTransaction};
pub use error::LedgerError;
pub use types::{
    Balance, BalanceSummary, CreateBalanceInput, EntryType, GeneralInfo, LedgerTotals, Recording,
    RecordingInput, RecordingType, Transaction,
};
pub use validation::{validate_create_input, validate_transaction, validate_transactions};
