//! Balance lifecycle: creation workflow, lookup and listing.

pub mod service;
pub mod store;

pub use service::{BalanceService, CreatedBalance};
pub use store::{BalanceStore, InMemoryBalanceStore};
