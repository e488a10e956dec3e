//! Core business logic for Balancebook.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and report derivations live here.
//!
//! # Modules
//!
//! - `chart` - Chart of accounts lookup and prefix classification
//! - `ledger` - Double-entry types, validation and aggregation
//! - `reports` - Recording book, ledger, trial balance and financial statements
//! - `balance` - Creation workflow and lookup over a balance store

pub mod balance;
pub mod chart;
pub mod ledger;
pub mod reports;
