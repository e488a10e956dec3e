//! Property-based tests for balance creation rules.
//!
//! Feature: balance-creation, Property 1: Balance Invariant

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{
    CreateBalanceInput, EntryType, GeneralInfo, RecordingInput, RecordingType, Transaction,
};
use super::validation::{validate_create_input, validate_transactions};

/// Strategy to generate a non-negative amount with two decimal places.
fn amount() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate a strictly negative amount.
fn negative_amount() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000i64).prop_map(|cents| Decimal::new(-cents, 2))
}

fn account_number() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("101".to_string()),
        Just("164".to_string()),
        Just("401".to_string()),
        Just("512".to_string()),
        Just("601".to_string()),
        Just("706".to_string()),
    ]
}

fn entry_type_strategy() -> impl Strategy<Value = EntryType> {
    prop_oneof![Just(EntryType::Debit), Just(EntryType::Credit)]
}

/// One recording per debit amount, each closed by a single credit line
/// somewhere in the balance. The balance is globally balanced by construction.
fn balanced_input(amounts: &[Decimal], credit_account: &str) -> CreateBalanceInput {
    let date = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let mut recordings: Vec<RecordingInput> = amounts
        .iter()
        .map(|amount| RecordingInput {
            date,
            recording_type: RecordingType::Payment,
            transactions: vec![Transaction::debit("512", *amount)],
        })
        .collect();

    let total: Decimal = amounts.iter().copied().sum();
    recordings.push(RecordingInput {
        date,
        recording_type: RecordingType::Transfer,
        transactions: vec![Transaction::credit(credit_account, total)],
    });

    CreateBalanceInput {
        general_info: GeneralInfo {
            name: "Generated".to_string(),
            ..GeneralInfo::default()
        },
        date: None,
        recordings,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property 1: Balance Invariant
    // =========================================================================

    /// **Property 1.1: Balanced input is accepted**
    ///
    /// *For any* set of recordings whose debits sum to their credits, creation
    /// validation SHALL succeed even when individual recordings are lopsided.
    #[test]
    fn prop_balanced_input_accepted(
        amounts in prop::collection::vec(amount(), 1..10),
        credit_account in account_number(),
    ) {
        let input = balanced_input(&amounts, &credit_account);
        let totals = validate_create_input(&input);
        prop_assert!(totals.is_ok(), "Balanced input rejected: {:?}", totals);

        let totals = totals.unwrap();
        prop_assert_eq!(totals.debit, totals.credit);
        prop_assert!(totals.is_balanced);
    }

    /// **Property 1.2: Any imbalance is rejected**
    ///
    /// *For any* balanced input with one extra non-zero line, creation
    /// validation SHALL fail with the exact debit and credit totals.
    #[test]
    fn prop_unbalanced_input_rejected(
        amounts in prop::collection::vec(amount(), 1..10),
        extra in (1i64..1_000_000i64).prop_map(|cents| Decimal::new(cents, 2)),
        side in entry_type_strategy(),
    ) {
        let mut input = balanced_input(&amounts, "101");
        input.recordings[0].transactions.push(Transaction::new(side, "601", extra));

        let total: Decimal = amounts.iter().copied().sum();
        let (expected_debit, expected_credit) = match side {
            EntryType::Debit => (total + extra, total),
            EntryType::Credit => (total, total + extra),
        };

        match validate_create_input(&input) {
            Err(LedgerError::UnbalancedBalance { debit, credit }) => {
                prop_assert_eq!(debit, expected_debit);
                prop_assert_eq!(credit, expected_credit);
            }
            other => prop_assert!(false, "Expected UnbalancedBalance, got {:?}", other),
        }
    }

    /// **Property 1.3: Negative amounts are rejected**
    ///
    /// *For any* line with a negative amount, validation SHALL fail with
    /// `NegativeAmount` regardless of its side or position.
    #[test]
    fn prop_negative_amount_rejected(
        valid in prop::collection::vec(
            (entry_type_strategy(), account_number(), amount()),
            0..8,
        ),
        position in any::<prop::sample::Index>(),
        side in entry_type_strategy(),
        bad in negative_amount(),
    ) {
        let mut lines: Vec<Transaction> = valid
            .into_iter()
            .map(|(entry_type, account, amount)| Transaction::new(entry_type, account, amount))
            .collect();
        let at = position.index(lines.len() + 1);
        lines.insert(at, Transaction::new(side, "512", bad));

        let result = validate_transactions(&lines);
        prop_assert!(
            matches!(result, Err(LedgerError::NegativeAmount { amount, .. }) if amount == bad),
            "Negative amount should be rejected, got: {:?}",
            result
        );
    }
}
