//! Ledger domain types.
//!
//! A balance owns its recordings, and each recording owns its transaction
//! lines. Nothing is shared across balances and nothing is mutated after
//! creation.

use balancebook_shared::types::{BalanceId, RecordingId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Entry type: either Debit or Credit.
///
/// The direction of a transaction line lives here; amounts are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum EntryType {
    /// Debit entry.
    Debit,
    /// Credit entry.
    Credit,
}

impl std::fmt::Display for EntryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debit => write!(f, "DEBIT"),
            Self::Credit => write!(f, "CREDIT"),
        }
    }
}

impl std::str::FromStr for EntryType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBIT" => Ok(Self::Debit),
            "CREDIT" => Ok(Self::Credit),
            _ => Err(LedgerError::UnknownEntryType(s.to_string())),
        }
    }
}

impl TryFrom<String> for EntryType {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Recording type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum RecordingType {
    /// Sales or purchase invoice.
    Invoice,
    /// Cash withdrawal.
    Withdrawal,
    /// Transfer between accounts.
    Transfer,
    /// Payment (incoming or outgoing).
    Payment,
}

impl std::fmt::Display for RecordingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invoice => write!(f, "INVOICE"),
            Self::Withdrawal => write!(f, "WITHDRAWAL"),
            Self::Transfer => write!(f, "TRANSFER"),
            Self::Payment => write!(f, "PAYMENT"),
        }
    }
}

impl std::str::FromStr for RecordingType {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "INVOICE" => Ok(Self::Invoice),
            "WITHDRAWAL" => Ok(Self::Withdrawal),
            "TRANSFER" => Ok(Self::Transfer),
            "PAYMENT" => Ok(Self::Payment),
            _ => Err(LedgerError::UnknownRecordingType(s.to_string())),
        }
    }
}

impl TryFrom<String> for RecordingType {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single debit or credit line inside a recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Whether this is a debit or credit.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Account number from the chart of accounts.
    pub account_number: String,
    /// Amount, never negative.
    pub amount: Decimal,
}

impl Transaction {
    /// Creates a transaction line.
    pub fn new(entry_type: EntryType, account_number: impl Into<String>, amount: Decimal) -> Self {
        Self {
            entry_type,
            account_number: account_number.into(),
            amount,
        }
    }

    /// Creates a debit line.
    pub fn debit(account_number: impl Into<String>, amount: Decimal) -> Self {
        Self::new(EntryType::Debit, account_number, amount)
    }

    /// Creates a credit line.
    pub fn credit(account_number: impl Into<String>, amount: Decimal) -> Self {
        Self::new(EntryType::Credit, account_number, amount)
    }
}

/// A dated recording (invoice, transfer, ...) made of transaction lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recording {
    /// Unique identifier for this recording.
    pub id: RecordingId,
    /// Date of the recording.
    pub date: NaiveDate,
    /// Kind of recording.
    #[serde(rename = "type")]
    pub recording_type: RecordingType,
    /// Transaction lines, in entry order.
    pub transactions: Vec<Transaction>,
}

/// A balance: one accounting period and everything recorded in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// Unique identifier.
    pub id: BalanceId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Why the balance was created.
    pub purpose: String,
    /// Date of the balance.
    pub date: NaiveDate,
    /// Recordings, in entry order.
    pub recordings: Vec<Recording>,
}

/// A balance without its recordings, as returned by listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSummary {
    /// Unique identifier.
    pub id: BalanceId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Why the balance was created.
    pub purpose: String,
    /// Date of the balance.
    pub date: NaiveDate,
    /// Number of recordings.
    pub recording_count: usize,
}

impl From<&Balance> for BalanceSummary {
    fn from(balance: &Balance) -> Self {
        Self {
            id: balance.id,
            name: balance.name.clone(),
            description: balance.description.clone(),
            purpose: balance.purpose.clone(),
            date: balance.date,
            recording_count: balance.recordings.len(),
        }
    }
}

/// Descriptive fields entered when creating a balance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralInfo {
    /// Display name.
    pub name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Why the balance is created.
    #[serde(default)]
    pub purpose: String,
}

/// Input for a single recording.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordingInput {
    /// Date of the recording.
    pub date: NaiveDate,
    /// Kind of recording.
    #[serde(rename = "type")]
    pub recording_type: RecordingType,
    /// Transaction lines.
    pub transactions: Vec<Transaction>,
}

/// Input for creating a new balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBalanceInput {
    /// Descriptive fields.
    pub general_info: GeneralInfo,
    /// Balance date. Defaults to the creation date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Recordings to attach.
    pub recordings: Vec<RecordingInput>,
}

impl CreateBalanceInput {
    /// Decodes a balance document.
    ///
    /// Recording and entry types are checked before the typed decode, so an
    /// unrecognised type surfaces as its own error rather than a generic
    /// decoding failure.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRecordingType` or `UnknownEntryType` for a bad
    /// enumerant, and `MalformedDocument` for anything else that does not decode.
    pub fn from_json_str(json: &str) -> Result<Self, LedgerError> {
        let document: serde_json::Value = serde_json::from_str(json)
            .map_err(|err| LedgerError::MalformedDocument(err.to_string()))?;

        let recordings = document
            .get("recordings")
            .and_then(serde_json::Value::as_array)
            .into_iter()
            .flatten();
        for recording in recordings {
            if let Some(kind) = recording.get("type").and_then(serde_json::Value::as_str) {
                kind.parse::<RecordingType>()?;
            }
            let lines = recording
                .get("transactions")
                .and_then(serde_json::Value::as_array)
                .into_iter()
                .flatten();
            for line in lines {
                if let Some(kind) = line.get("type").and_then(serde_json::Value::as_str) {
                    kind.parse::<EntryType>()?;
                }
            }
        }

        serde_json::from_value(document).map_err(|err| LedgerError::MalformedDocument(err.to_string()))
    }
}

/// Debit and credit totals over a set of transaction lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerTotals {
    /// Sum of debit amounts.
    pub debit: Decimal,
    /// Sum of credit amounts.
    pub credit: Decimal,
    /// Whether debits equal credits exactly.
    pub is_balanced: bool,
}

impl LedgerTotals {
    /// Creates totals from debit and credit sums.
    #[must_use]
    pub fn new(debit: Decimal, credit: Decimal) -> Self {
        Self {
            debit,
            credit,
            is_balanced: debit == credit,
        }
    }

    /// Returns debits minus credits.
    #[must_use]
    pub fn difference(&self) -> Decimal {
        self.debit - self.credit
    }
}
