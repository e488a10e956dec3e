//! Account number resolution and prefix classification.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use super::error::ChartError;
use super::standard::STANDARD_CHART;

/// Prefix of the synthetic keys naming each top-level class (`"CLASS 6"`).
const CLASS_KEY_PREFIX: &str = "CLASS ";

/// Top-level account class: the leading digit of an account number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct AccountClass(u8);

impl AccountClass {
    /// Creates a class from a single decimal digit.
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        if digit <= 9 { Some(Self(digit)) } else { None }
    }

    /// Returns the class digit.
    #[must_use]
    pub const fn digit(self) -> u8 {
        self.0
    }

    /// Returns the synthetic chart key naming this class.
    #[must_use]
    pub fn chart_key(self) -> String {
        format!("{CLASS_KEY_PREFIX}{}", self.0)
    }
}

impl std::fmt::Display for AccountClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single chart entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartEntry<'a> {
    /// Account number.
    pub account_number: &'a str,
    /// Account name.
    pub account_name: &'a str,
}

/// Static mapping from account number to account name.
///
/// Loaded once at startup and shared read-only (usually behind an `Arc`).
/// Keys are opaque strings; `"512"` and `"5120"` are distinct accounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartOfAccounts {
    entries: BTreeMap<String, String>,
}

impl ChartOfAccounts {
    /// Builds a chart from `(number, name)` pairs.
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(number, name)| (number.into(), name.into()))
                .collect(),
        }
    }

    /// The built-in general chart of accounts (classes 1 to 7).
    #[must_use]
    pub fn standard() -> Self {
        Self::new(STANDARD_CHART.iter().copied())
    }

    /// Parses a chart from a JSON object of `"number": "name"` pairs.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::Parse` for malformed JSON and
    /// `ChartError::EmptyAccountNumber` for an empty key.
    pub fn from_json_str(json: &str) -> Result<Self, ChartError> {
        let entries: BTreeMap<String, String> = serde_json::from_str(json)?;
        if entries.keys().any(|number| number.trim().is_empty()) {
            return Err(ChartError::EmptyAccountNumber);
        }
        Ok(Self { entries })
    }

    /// Reads and parses a JSON chart file.
    ///
    /// # Errors
    ///
    /// Returns `ChartError::Io` if the file cannot be read, otherwise the
    /// errors of [`ChartOfAccounts::from_json_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ChartError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ChartError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let chart = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), entries = chart.len(), "Loaded chart of accounts");
        Ok(chart)
    }

    /// Number of entries, synthetic class keys included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the chart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the name of an account number.
    #[must_use]
    pub fn resolve(&self, account_number: &str) -> Option<&str> {
        self.entries.get(account_number).map(String::as_str)
    }

    /// Looks up the name of an account number, degrading to an empty name on a miss.
    #[must_use]
    pub fn name_or_placeholder(&self, account_number: &str) -> &str {
        if let Some(name) = self.resolve(account_number) {
            name
        } else {
            tracing::debug!(account_number, "Account number not in chart of accounts");
            ""
        }
    }

    /// Returns the class of an account number (its leading digit).
    #[must_use]
    pub fn class_of(account_number: &str) -> Option<AccountClass> {
        account_number
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .and_then(|d| u8::try_from(d).ok())
            .and_then(AccountClass::from_digit)
    }

    /// Returns the name of a class from its synthetic `"CLASS n"` entry.
    #[must_use]
    pub fn class_name(&self, class: AccountClass) -> Option<&str> {
        self.resolve(&class.chart_key())
    }

    /// Iterates over the real accounts in key order, skipping the synthetic class entries.
    pub fn accounts(&self) -> impl Iterator<Item = ChartEntry<'_>> {
        self.entries
            .iter()
            .filter(|(number, _)| !number.starts_with(CLASS_KEY_PREFIX))
            .map(|(number, name)| ChartEntry {
                account_number: number,
                account_name: name,
            })
    }

    /// Groups the real accounts by class.
    ///
    /// Accounts whose number does not start with a digit are left out.
    #[must_use]
    pub fn by_class(&self) -> BTreeMap<AccountClass, Vec<ChartEntry<'_>>> {
        let mut groups: BTreeMap<AccountClass, Vec<ChartEntry<'_>>> = BTreeMap::new();
        for entry in self.accounts() {
            if let Some(class) = Self::class_of(entry.account_number) {
                groups.entry(class).or_default().push(entry);
            }
        }
        groups
    }
}

/// Short display form of an account number.
///
/// Trailing zeros are dropped while the value stays above 10, so
/// `"10000"` becomes `"10"` and `"512000"` becomes `"512"`. Numbers that are
/// not plain digits are returned unchanged.
#[must_use]
pub fn short_number(account_number: &str) -> String {
    let Ok(mut value) = account_number.parse::<u64>() else {
        return account_number.to_string();
    };
    while value % 10 == 0 && value > 10 {
        value /= 10;
    }
    value.to_string()
}
