//! Ledger error types for validation and lookup errors.
//!
//! Unknown account numbers are deliberately absent: a chart miss degrades
//! to an empty account name and never fails an operation.

use balancebook_shared::AppError;
use balancebook_shared::types::BalanceId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    // ========== Validation Errors ==========
    /// Entry amount cannot be negative.
    #[error("Amount for account {account_number} cannot be negative: {amount}")]
    NegativeAmount {
        /// Account number of the offending line.
        account_number: String,
        /// The negative amount.
        amount: Decimal,
    },

    /// Transaction line without an account number.
    #[error("Transaction line has an empty account number")]
    EmptyAccountNumber,

    /// Entry type is neither DEBIT nor CREDIT.
    #[error("Unknown entry type: {0}")]
    UnknownEntryType(String),

    /// Recording type is not one of the supported kinds.
    #[error("Unknown recording type: {0}")]
    UnknownRecordingType(String),

    /// A recording has no transaction lines.
    #[error("Recording #{index} has no transactions")]
    EmptyRecording {
        /// Zero-based position of the recording in the input.
        index: usize,
    },

    /// Total debits differ from total credits across all recordings.
    #[error("Balance is not balanced. Debit: {debit}, Credit: {credit}")]
    UnbalancedBalance {
        /// Total debit amount.
        debit: Decimal,
        /// Total credit amount.
        credit: Decimal,
    },

    /// Debit and credit totals exceed the decimal range.
    #[error("Amounts exceed the supported range")]
    AmountOverflow,

    /// The balance document could not be decoded.
    #[error("Malformed balance document: {0}")]
    MalformedDocument(String),

    /// Balance must have a name.
    #[error("Balance name cannot be empty")]
    EmptyName,

    // ========== Lookup Errors ==========
    /// Balance not found.
    #[error("Balance not found: {0}")]
    BalanceNotFound(BalanceId),

    /// A balance with the same id is already stored.
    #[error("Balance already exists: {0}")]
    DuplicateBalance(BalanceId),

    // ========== Storage Errors ==========
    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(String),
}

impl LedgerError {
    /// Returns the stable error code reported to callers.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::EmptyAccountNumber => "EMPTY_ACCOUNT_NUMBER",
            Self::UnknownEntryType(_) => "UNKNOWN_ENTRY_TYPE",
            Self::UnknownRecordingType(_) => "UNKNOWN_RECORDING_TYPE",
            Self::EmptyRecording { .. } => "EMPTY_RECORDING",
            Self::UnbalancedBalance { .. } => "UNBALANCED_BALANCE",
            Self::AmountOverflow => "AMOUNT_OVERFLOW",
            Self::MalformedDocument(_) => "MALFORMED_DOCUMENT",
            Self::EmptyName => "EMPTY_NAME",
            Self::BalanceNotFound(_) => "BALANCE_NOT_FOUND",
            Self::DuplicateBalance(_) => "DUPLICATE_BALANCE",
            Self::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::BalanceNotFound(_) => Self::NotFound(err.to_string()),
            LedgerError::Storage(_) | LedgerError::DuplicateBalance(_) => {
                Self::Internal(err.to_string())
            }
            _ => Self::Validation {
                code: err.error_code(),
                message: err.to_string(),
            },
        }
    }
}
