//! Business rule validation for ledger operations.

use rust_decimal::Decimal;

use super::error::LedgerError;
use super::types::{CreateBalanceInput, EntryType, LedgerTotals, Transaction};

/// Validates the shape of a single transaction line.
///
/// # Errors
///
/// Returns an error if the amount is negative or the account number is blank.
pub fn validate_transaction(tx: &Transaction) -> Result<(), LedgerError> {
    if tx.account_number.trim().is_empty() {
        return Err(LedgerError::EmptyAccountNumber);
    }
    if tx.amount < Decimal::ZERO {
        return Err(LedgerError::NegativeAmount {
            account_number: tx.account_number.clone(),
            amount: tx.amount,
        });
    }
    Ok(())
}

/// Validates every line and returns the debit and credit totals.
///
/// Balance between the two sides is reported in the totals, not enforced.
/// The two totals must also fit together in one decimal: statement sections
/// add account balances from both sides.
///
/// # Errors
///
/// Returns the first shape error found, or `AmountOverflow` when the totals
/// exceed the decimal range.
pub fn validate_transactions<'a>(
    transactions: impl IntoIterator<Item = &'a Transaction>,
) -> Result<LedgerTotals, LedgerError> {
    let mut debit = Decimal::ZERO;
    let mut credit = Decimal::ZERO;

    for tx in transactions {
        validate_transaction(tx)?;
        let side = match tx.entry_type {
            EntryType::Debit => &mut debit,
            EntryType::Credit => &mut credit,
        };
        *side = side.checked_add(tx.amount).ok_or(LedgerError::AmountOverflow)?;
    }

    if debit.checked_add(credit).is_none() {
        return Err(LedgerError::AmountOverflow);
    }

    Ok(LedgerTotals::new(debit, credit))
}

/// Validates a balance creation request.
///
/// Rules, checked in order:
/// 1. The balance has a name
/// 2. Every recording has at least one transaction line
/// 3. Every line has an account number and a non-negative amount
/// 4. Totals stay within the decimal range
/// 5. Total debits equal total credits across all recordings
///
/// # Errors
///
/// Returns the first rule violation.
pub fn validate_create_input(input: &CreateBalanceInput) -> Result<LedgerTotals, LedgerError> {
    if input.general_info.name.trim().is_empty() {
        return Err(LedgerError::EmptyName);
    }

    if let Some(index) = input
        .recordings
        .iter()
        .position(|recording| recording.transactions.is_empty())
    {
        return Err(LedgerError::EmptyRecording { index });
    }

    let totals = validate_transactions(
        input
            .recordings
            .iter()
            .flat_map(|recording| recording.transactions.iter()),
    )?;

    if !totals.is_balanced {
        return Err(LedgerError::UnbalancedBalance {
            debit: totals.debit,
            credit: totals.credit,
        });
    }

    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::{GeneralInfo, RecordingInput, RecordingType};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn make_input(recordings: Vec<Vec<Transaction>>) -> CreateBalanceInput {
        CreateBalanceInput {
            general_info: GeneralInfo {
                name: "Test balance".to_string(),
                ..GeneralInfo::default()
            },
            date: None,
            recordings: recordings
                .into_iter()
                .map(|transactions| RecordingInput {
                    date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    recording_type: RecordingType::Transfer,
                    transactions,
                })
                .collect(),
        }
    }

    #[test]
    fn test_balanced_across_recordings() {
        // Each recording is lopsided, the balance as a whole is not.
        let input = make_input(vec![
            vec![Transaction::debit("512", dec!(100))],
            vec![Transaction::credit("101", dec!(60)), Transaction::credit("164", dec!(40))],
        ]);
        let totals = validate_create_input(&input).unwrap();
        assert_eq!(totals.debit, dec!(100));
        assert!(totals.is_balanced);
    }

    #[test]
    fn test_unbalanced_rejected() {
        let input = make_input(vec![vec![
            Transaction::debit("512", dec!(100)),
            Transaction::credit("101", dec!(99.99)),
        ]]);
        assert!(matches!(
            validate_create_input(&input),
            Err(LedgerError::UnbalancedBalance { debit, credit })
                if debit == dec!(100) && credit == dec!(99.99)
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let input = make_input(vec![vec![
            Transaction::debit("512", dec!(-10)),
            Transaction::credit("101", dec!(-10)),
        ]]);
        assert!(matches!(
            validate_create_input(&input),
            Err(LedgerError::NegativeAmount { .. })
        ));
    }

    #[test]
    fn test_empty_recording_rejected() {
        let input = make_input(vec![
            vec![Transaction::debit("512", dec!(5)), Transaction::credit("101", dec!(5))],
            vec![],
        ]);
        assert!(matches!(
            validate_create_input(&input),
            Err(LedgerError::EmptyRecording { index: 1 })
        ));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut input = make_input(vec![]);
        input.general_info.name = "   ".to_string();
        assert!(matches!(validate_create_input(&input), Err(LedgerError::EmptyName)));
    }

    #[test]
    fn test_empty_balance_is_balanced() {
        let totals = validate_create_input(&make_input(vec![])).unwrap();
        assert_eq!(totals, LedgerTotals::new(Decimal::ZERO, Decimal::ZERO));
    }

    #[test]
    fn test_amount_overflow_rejected() {
        let input = make_input(vec![vec![
            Transaction::debit("512", Decimal::MAX),
            Transaction::debit("512", Decimal::MAX),
            Transaction::credit("101", Decimal::MAX),
            Transaction::credit("101", Decimal::MAX),
        ]]);
        assert!(matches!(
            validate_create_input(&input),
            Err(LedgerError::AmountOverflow)
        ));
    }

    #[test]
    fn test_combined_totals_overflow_rejected() {
        // Each side fits on its own; both sides together do not.
        let input = make_input(vec![vec![
            Transaction::debit("512", Decimal::MAX),
            Transaction::credit("101", Decimal::MAX),
        ]]);
        let err = validate_create_input(&input).unwrap_err();
        assert_eq!(err.error_code(), "AMOUNT_OVERFLOW");
    }

    #[test]
    fn test_zero_amount_allowed() {
        assert!(validate_transaction(&Transaction::debit("512", Decimal::ZERO)).is_ok());
        assert!(matches!(
            validate_transaction(&Transaction::debit(" ", dec!(1))),
            Err(LedgerError::EmptyAccountNumber)
        ));
    }
}
