//! Prefix rules placing accounts on the financial statements.

use serde::{Deserialize, Serialize};

use crate::ledger::Account;

/// Statement section an account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatementBucket {
    /// Income statement, prefix `6`.
    Expense,
    /// Income statement, prefix `7`.
    Income,
    /// Balance sheet assets, prefix `2`.
    FixedAsset,
    /// Balance sheet assets, prefix `5`.
    CurrentAsset,
    /// Balance sheet liabilities, prefix `1` except `16`.
    Equity,
    /// Balance sheet liabilities, prefix `4` or `16` with a credit balance.
    OtherDebt,
}

impl StatementBucket {
    /// Classifies an account, or returns `None` when it appears on no statement.
    ///
    /// Buckets are mutually exclusive. Loans (`16`) are never equity, and
    /// third-party accounts with a debit balance appear nowhere.
    #[must_use]
    pub fn of(account: &Account) -> Option<Self> {
        let number = account.account_number.as_str();
        if number.starts_with('6') {
            Some(Self::Expense)
        } else if number.starts_with('7') {
            Some(Self::Income)
        } else if number.starts_with('2') {
            Some(Self::FixedAsset)
        } else if number.starts_with('5') {
            Some(Self::CurrentAsset)
        } else if number.starts_with("16") || number.starts_with('4') {
            (account.credit > account.debit).then_some(Self::OtherDebt)
        } else if number.starts_with('1') {
            Some(Self::Equity)
        } else {
            None
        }
    }
}
