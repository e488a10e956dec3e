use std::io::Read;

use balancebook_core::ledger::CreateBalanceInput;
use balancebook_shared::{AppError, AppResult};

/// Reads a balance document from a path, or from stdin for `-`.
pub fn read_document(path: &str) -> AppResult<CreateBalanceInput> {
    let text = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|err| AppError::Io(format!("stdin: {err}")))?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(|err| AppError::Io(format!("{path}: {err}")))?
    };
    tracing::debug!(path, bytes = text.len(), "Read balance document");
    parse_document(&text)
}

pub fn parse_document(text: &str) -> AppResult<CreateBalanceInput> {
    Ok(CreateBalanceInput::from_json_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_document_with_optional_fields_missing() {
        let input = parse_document(
            r#"{
                "generalInfo": {"name": "Q1"},
                "recordings": [{
                    "date": "2024-02-01",
                    "type": "WITHDRAWAL",
                    "transactions": [
                        {"type": "DEBIT", "accountNumber": "530", "amount": "50"},
                        {"type": "CREDIT", "accountNumber": "512", "amount": "50"}
                    ]
                }]
            }"#,
        );
        assert!(input.is_ok());
        if let Ok(input) = input {
            assert_eq!(input.general_info.description, "");
            assert_eq!(input.recordings[0].date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        }
    }

    #[test]
    fn unknown_entry_type_is_a_validation_error() {
        let result = parse_document(
            r#"{"generalInfo": {"name": "Q1"}, "recordings": [{"date": "2024-02-01", "type": "INVOICE",
                "transactions": [{"type": "REFUND", "accountNumber": "512", "amount": 1}]}]}"#,
        );
        assert!(matches!(
            result,
            Err(AppError::Validation { code: "UNKNOWN_ENTRY_TYPE", .. })
        ));
    }

    #[test]
    fn unknown_recording_type_is_a_validation_error() {
        let result = parse_document(
            r#"{"generalInfo": {"name": "Q1"}, "recordings": [{"date": "2024-02-01", "type": "GIFT",
                "transactions": [{"type": "DEBIT", "accountNumber": "512", "amount": 1}]}]}"#,
        );
        let err = result.unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_RECORDING_TYPE");
        assert!(err.is_client_error());
    }

    #[test]
    fn broken_json_is_a_malformed_document() {
        let err = parse_document("{\"generalInfo\":").unwrap_err();
        assert_eq!(err.error_code(), "MALFORMED_DOCUMENT");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = read_document("/nonexistent/balancebook/q1.json");
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
