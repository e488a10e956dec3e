use balancebook_core::chart::AccountClass;
use clap::{Parser, Subcommand, ValueEnum};

pub fn parse_class_digit(value: &str) -> Result<AccountClass, String> {
    let digit = match value.as_bytes() {
        [byte] if byte.is_ascii_digit() => byte - b'0',
        _ => return Err("class must be a single digit between 0 and 9".to_string()),
    };
    AccountClass::from_digit(digit).ok_or_else(|| "class must be a single digit".to_string())
}

/// Extended help shown after `balancebook report --help`.
pub const REPORT_AFTER_HELP: &str = "\
Input document:
  <FILE> is a JSON balance document. Use `-` to read stdin.

  {
    \"generalInfo\": {\"name\": \"Q1 2024\", \"description\": \"\", \"purpose\": \"\"},
    \"date\": \"2024-03-31\",
    \"recordings\": [
      {
        \"date\": \"2024-01-15\",
        \"type\": \"INVOICE\",
        \"transactions\": [
          {\"type\": \"DEBIT\", \"accountNumber\": \"411\", \"amount\": \"120.00\"},
          {\"type\": \"CREDIT\", \"accountNumber\": \"706\", \"amount\": \"100.00\"},
          {\"type\": \"CREDIT\", \"accountNumber\": \"44571\", \"amount\": \"20.00\"}
        ]
      }
    ]
  }

  Recording types: INVOICE, WITHDRAWAL, TRANSFER, PAYMENT.
  Amounts are never negative; the side is given by `type`.
  Total debits must equal total credits across all recordings.
";

#[derive(Debug, Parser)]
#[command(
    name = "balancebook",
    version,
    about = "Double-entry reports for a balance document",
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Every report
    All,
    /// Recording book (journal)
    Book,
    /// T-account ledger
    Ledger,
    /// Trial balance
    Trial,
    /// Income statement
    Income,
    /// Balance sheet
    Sheet,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate a balance document and print its reports
    #[command(after_long_help = REPORT_AFTER_HELP)]
    Report {
        /// Path to a balance JSON document (use `-` for stdin)
        file: String,
        /// Which report to print
        #[arg(long, value_enum, default_value_t = View::All)]
        view: View,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// Validate a balance document without printing reports
    Check {
        /// Path to a balance JSON document (use `-` for stdin)
        file: String,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
    /// List the chart of accounts
    Chart {
        /// Only list accounts of this class (leading digit)
        #[arg(long, value_parser = parse_class_digit)]
        class: Option<AccountClass>,
        /// Emit machine-readable JSON output
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    pub fn json(&self) -> bool {
        match self {
            Self::Report { json, .. } | Self::Check { json, .. } | Self::Chart { json, .. } => {
                *json
            }
        }
    }
}

#[cfg(test)]
pub fn parse_from<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_defaults_to_all_views_as_text() {
        let parsed = parse_from(["balancebook", "report", "q1.json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(!cli.command.json());
            match cli.command {
                Commands::Report { file, view, .. } => {
                    assert_eq!(file, "q1.json");
                    assert_eq!(view, View::All);
                }
                other => panic!("unexpected command: {other:?}"),
            }
        }
    }

    #[test]
    fn report_accepts_view_and_json() {
        let parsed = parse_from(["balancebook", "report", "-", "--view", "trial", "--json"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(cli.command.json());
            assert!(matches!(
                cli.command,
                Commands::Report { ref file, view: View::Trial, .. } if file == "-"
            ));
        }
    }

    #[test]
    fn report_rejects_unknown_view() {
        assert!(parse_from(["balancebook", "report", "q1.json", "--view", "cash"]).is_err());
    }

    #[test]
    fn chart_parses_class_digit() {
        let parsed = parse_from(["balancebook", "chart", "--class", "6"]);
        assert!(parsed.is_ok());
        if let Ok(cli) = parsed {
            assert!(matches!(
                cli.command,
                Commands::Chart { class: Some(class), json: false } if class.digit() == 6
            ));
        }
    }

    #[test]
    fn chart_rejects_multi_digit_class() {
        assert!(parse_from(["balancebook", "chart", "--class", "60"]).is_err());
        assert!(parse_from(["balancebook", "chart", "--class", "x"]).is_err());
    }

    #[test]
    fn check_requires_file() {
        assert!(parse_from(["balancebook", "check"]).is_err());
    }
}
