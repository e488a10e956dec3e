//! Chart of accounts.
//!
//! A read-only lookup from account number to account name, plus the
//! prefix classification used to route accounts into report buckets.

pub mod error;
pub mod resolver;
mod standard;

pub use error::ChartError;
pub use resolver::{AccountClass, ChartEntry, ChartOfAccounts, short_number};
