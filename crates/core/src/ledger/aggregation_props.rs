//! Property-based tests for double-entry aggregation.
//!
//! Feature: aggregation, Property 2: Order Independence and Idempotence

use std::sync::Arc;

use balancebook_shared::types::RecordingId;
use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::aggregation::{Account, AggregationEngine};
use super::types::{EntryType, Recording, RecordingType, Transaction};
use crate::chart::ChartOfAccounts;

fn engine() -> AggregationEngine {
    AggregationEngine::new(Arc::new(ChartOfAccounts::standard()))
}

fn line() -> impl Strategy<Value = Transaction> {
    (
        prop_oneof![Just(EntryType::Debit), Just(EntryType::Credit)],
        prop_oneof![
            Just("101"),
            Just("164"),
            Just("211"),
            Just("401"),
            Just("512"),
            Just("601"),
            Just("706"),
            Just("999"),
        ],
        (0i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
    )
        .prop_map(|(entry_type, account, amount)| Transaction::new(entry_type, account, amount))
}

/// Wraps every line in its own recording, preserving order.
fn as_recordings(lines: &[Transaction]) -> Vec<Recording> {
    let date = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    lines
        .iter()
        .map(|tx| Recording {
            id: RecordingId::new(),
            date,
            recording_type: RecordingType::Transfer,
            transactions: vec![tx.clone()],
        })
        .collect()
}

/// Accounts keyed by number, dropping first-appearance order.
fn by_number(accounts: Vec<Account>) -> Vec<(String, Decimal, Decimal)> {
    let mut keyed: Vec<_> = accounts
        .into_iter()
        .map(|a| (a.account_number, a.debit, a.credit))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 2: Order Independence and Idempotence
    // =========================================================================

    /// **Property 2.1: Aggregation is order independent**
    ///
    /// *For any* permutation of the transaction lines, the per-account debit
    /// and credit totals SHALL be identical.
    #[test]
    fn prop_aggregation_order_independent(
        (lines, shuffled) in prop::collection::vec(line(), 0..30)
            .prop_flat_map(|lines| (Just(lines.clone()), Just(lines).prop_shuffle())),
    ) {
        let engine = engine();
        let original = engine.aggregate(&as_recordings(&lines)).unwrap();
        let permuted = engine.aggregate(&as_recordings(&shuffled)).unwrap();

        prop_assert_eq!(by_number(original.accounts), by_number(permuted.accounts));
        prop_assert_eq!(original.totals, permuted.totals);
    }

    /// **Property 2.2: Grouping into recordings does not matter**
    ///
    /// *For any* lines, one recording holding them all SHALL aggregate to the
    /// same accounts, in the same order, as one recording per line.
    #[test]
    fn prop_recording_boundaries_irrelevant(lines in prop::collection::vec(line(), 1..30)) {
        let engine = engine();
        let split = engine.aggregate(&as_recordings(&lines)).unwrap();
        let merged = engine
            .aggregate(&[Recording {
                id: RecordingId::new(),
                date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
                recording_type: RecordingType::Invoice,
                transactions: lines,
            }])
            .unwrap();

        prop_assert_eq!(split.accounts, merged.accounts);
    }

    /// **Property 2.3: Aggregation is idempotent**
    ///
    /// *For any* input, aggregating twice SHALL produce identical output.
    #[test]
    fn prop_aggregation_idempotent(lines in prop::collection::vec(line(), 0..30)) {
        let engine = engine();
        let recordings = as_recordings(&lines);
        prop_assert_eq!(
            engine.aggregate(&recordings).unwrap(),
            engine.aggregate(&recordings).unwrap()
        );
    }

    /// **Property 2.4: Account totals add up to the line totals**
    #[test]
    fn prop_account_totals_sum_to_line_totals(lines in prop::collection::vec(line(), 0..30)) {
        let result = engine().aggregate(&as_recordings(&lines)).unwrap();
        let debit: Decimal = result.accounts.iter().map(|a| a.debit).sum();
        let credit: Decimal = result.accounts.iter().map(|a| a.credit).sum();

        prop_assert_eq!(debit, result.totals.debit);
        prop_assert_eq!(credit, result.totals.credit);
        prop_assert_eq!(result.transactions.len(), lines.len());
    }
}
