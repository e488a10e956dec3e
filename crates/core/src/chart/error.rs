//! Chart loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a chart of accounts.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The chart file could not be read.
    #[error("Failed to read chart file {path}: {source}")]
    Io {
        /// Path of the chart file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The chart document is not a JSON object of strings.
    #[error("Invalid chart document: {0}")]
    Parse(#[from] serde_json::Error),

    /// The chart contains an entry with an empty account number.
    #[error("Chart contains an empty account number")]
    EmptyAccountNumber,
}

impl ChartError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CHART_IO",
            Self::Parse(_) => "CHART_PARSE",
            Self::EmptyAccountNumber => "CHART_EMPTY_ACCOUNT_NUMBER",
        }
    }
}

impl From<ChartError> for balancebook_shared::AppError {
    fn from(err: ChartError) -> Self {
        Self::Configuration(err.to_string())
    }
}
