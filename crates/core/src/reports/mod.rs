//! Accounting report derivation.
//!
//! This module turns aggregated recordings into the views of a balance:
//! - Recording book
//! - Ledger (T-accounts)
//! - Trial balance
//! - Income statement and balance sheet

pub mod classify;
pub mod service;
pub mod types;


pub use classify::StatementBucket;
pub use service::ReportService;
pub use types::*;
