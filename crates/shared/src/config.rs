//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Chart of accounts configuration.
    #[serde(default)]
    pub chart: ChartConfig,
    /// Report rendering configuration.
    #[serde(default)]
    pub reports: ReportsConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chart of accounts configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChartConfig {
    /// Path to a JSON chart file. The built-in standard chart is used when unset.
    #[serde(default)]
    pub path: Option<String>,
}

/// Report rendering configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportsConfig {
    /// Currency label printed next to amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
        }
    }
}

fn default_currency() -> String {
    "EUR".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Fallback `tracing` filter when `RUST_LOG` is not set.
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
        }
    }
}

fn default_filter() -> String {
    "balancebook=info".to_string()
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("BALANCEBOOK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "BALANCEBOOK__CHART__PATH",
                "BALANCEBOOK__REPORTS__CURRENCY",
                "BALANCEBOOK__LOGGING__FILTER",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert!(config.chart.path.is_none());
                assert_eq!(config.reports.currency, "EUR");
                assert_eq!(config.logging.filter, "balancebook=info");
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("BALANCEBOOK__CHART__PATH", Some("/tmp/chart.json")),
                ("BALANCEBOOK__REPORTS__CURRENCY", Some("USD")),
                ("BALANCEBOOK__LOGGING__FILTER", Some("balancebook=debug")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.chart.path.as_deref(), Some("/tmp/chart.json"));
                assert_eq!(config.reports.currency, "USD");
                assert_eq!(config.logging.filter, "balancebook=debug");
            },
        );
    }
}
