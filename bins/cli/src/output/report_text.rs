use balancebook_core::ledger::{BalanceSummary, LedgerTotals};
use balancebook_core::reports::{
    BalanceReports, BalanceSheetReport, IncomeStatementReport, LedgerAccount, LedgerBook,
    RecordingBook, StatementSection, TrialBalanceReport,
};

use super::format::{
    Column, INDENT, amount, key_value_rows, optional_amount, render_table, yes_no,
};
use crate::cli::View;

pub fn render_reports(reports: &BalanceReports, view: View, currency: &str) -> String {
    let mut lines = render_header(&reports.balance, &reports.totals, currency);

    let sections: Vec<Vec<String>> = match view {
        View::All => vec![
            render_recording_book(&reports.recording_book),
            render_ledger(&reports.ledger),
            render_trial_balance(&reports.trial_balance),
            render_income_statement(&reports.statements.income_statement),
            render_balance_sheet(&reports.statements.balance_sheet),
        ],
        View::Book => vec![render_recording_book(&reports.recording_book)],
        View::Ledger => vec![render_ledger(&reports.ledger)],
        View::Trial => vec![render_trial_balance(&reports.trial_balance)],
        View::Income => vec![render_income_statement(&reports.statements.income_statement)],
        View::Sheet => vec![render_balance_sheet(&reports.statements.balance_sheet)],
    };

    for section in sections {
        lines.push(String::new());
        lines.extend(section);
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

pub fn render_header(summary: &BalanceSummary, totals: &LedgerTotals, currency: &str) -> Vec<String> {
    let mut lines = vec![format!("Balance {}", summary.name)];
    let mut entries = vec![
        ("Id", summary.id.to_string()),
        ("Date", summary.date.to_string()),
        ("Recordings", summary.recording_count.to_string()),
        ("Currency", currency.to_string()),
        ("Total debit", amount(totals.debit)),
        ("Total credit", amount(totals.credit)),
        ("Balanced", yes_no(totals.is_balanced).to_string()),
    ];
    if !summary.description.is_empty() {
        entries.insert(1, ("Description", summary.description.clone()));
    }
    if !summary.purpose.is_empty() {
        entries.insert(1, ("Purpose", summary.purpose.clone()));
    }
    lines.extend(key_value_rows(&entries, INDENT));
    lines
}

pub fn render_recording_book(book: &RecordingBook) -> Vec<String> {
    let mut rows: Vec<Vec<String>> = book
        .rows
        .iter()
        .map(|row| {
            vec![
                row.date.to_string(),
                row.account_number.clone(),
                row.account_name.clone(),
                optional_amount(row.debit),
                optional_amount(row.credit),
            ]
        })
        .collect();
    rows.push(vec![
        "Total".to_string(),
        String::new(),
        String::new(),
        amount(book.total_debit),
        amount(book.total_credit),
    ]);

    let mut lines = vec!["Recording book".to_string()];
    lines.extend(render_table(
        &[
            Column::left("Date"),
            Column::left("Account"),
            Column::left("Name"),
            Column::right("Debit"),
            Column::right("Credit"),
        ],
        &rows,
        INDENT,
    ));
    lines
}

pub fn render_ledger(ledger: &LedgerBook) -> Vec<String> {
    let mut lines = vec!["Ledger".to_string()];
    if ledger.accounts.is_empty() {
        lines.push(format!("{}(no accounts)", " ".repeat(INDENT)));
    }
    for account in &ledger.accounts {
        lines.extend(render_t_account(account));
    }
    lines
}

fn render_t_account(account: &LedgerAccount) -> Vec<String> {
    let height = account.debit_entries.len().max(account.credit_entries.len());
    let mut rows: Vec<Vec<String>> = (0..height)
        .map(|index| {
            vec![
                account.debit_entries.get(index).copied().map(amount).unwrap_or_default(),
                account.credit_entries.get(index).copied().map(amount).unwrap_or_default(),
            ]
        })
        .collect();

    if let Some(marker) = &account.closing {
        let label = format!("{} {}", marker.abbreviation(), amount(marker.amount));
        let row = if account.debit_marker().is_some() {
            vec![label, String::new()]
        } else {
            vec![String::new(), label]
        };
        rows.push(row);
    }

    let title = if account.account_name.is_empty() {
        account.account_number.clone()
    } else {
        format!("{}  {}", account.account_number, account.account_name)
    };
    let mut lines = vec![format!("{}{title}", " ".repeat(INDENT))];
    lines.extend(render_table(
        &[Column::right("Debit"), Column::right("Credit")],
        &rows,
        INDENT * 2,
    ));
    lines
}

pub fn render_trial_balance(report: &TrialBalanceReport) -> Vec<String> {
    let mut rows: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|row| {
            vec![
                row.account_number.clone(),
                row.account_name.clone(),
                optional_amount(row.debit),
                optional_amount(row.credit),
            ]
        })
        .collect();
    rows.push(vec![
        "Total".to_string(),
        String::new(),
        amount(report.totals.total_debit),
        amount(report.totals.total_credit),
    ]);

    let mut lines = vec!["Trial balance".to_string()];
    lines.extend(render_table(
        &[
            Column::left("Account"),
            Column::left("Name"),
            Column::right("Debit"),
            Column::right("Credit"),
        ],
        &rows,
        INDENT,
    ));
    lines.push(format!(
        "{}Balanced: {}",
        " ".repeat(INDENT),
        yes_no(report.totals.is_balanced)
    ));
    lines
}

fn section_rows(section: &StatementSection, rows: &mut Vec<Vec<String>>) {
    for line in &section.lines {
        rows.push(vec![
            format!("  {}", line.account_number),
            line.account_name.clone(),
            amount(line.amount),
        ]);
    }
}

fn heading_row(label: &str, value: String) -> Vec<String> {
    vec![label.to_string(), String::new(), value]
}

pub fn render_income_statement(report: &IncomeStatementReport) -> Vec<String> {
    let mut rows = vec![heading_row("Expenses", String::new())];
    section_rows(&report.expenses, &mut rows);
    rows.push(heading_row("Total expenses", amount(report.expenses.total)));
    rows.push(heading_row("Income", String::new()));
    section_rows(&report.income, &mut rows);
    rows.push(heading_row("Total income", amount(report.income.total)));
    rows.push(heading_row("Profit", amount(report.profit)));

    let mut lines = vec!["Income statement".to_string()];
    lines.extend(render_table(
        &[Column::left("Account"), Column::left("Name"), Column::right("Amount")],
        &rows,
        INDENT,
    ));
    lines
}

pub fn render_balance_sheet(report: &BalanceSheetReport) -> Vec<String> {
    let mut rows = vec![heading_row("Fixed assets", String::new())];
    section_rows(&report.fixed_assets, &mut rows);
    rows.push(heading_row("Current assets", String::new()));
    section_rows(&report.current_assets, &mut rows);
    rows.push(heading_row("Total assets", amount(report.total_assets)));
    rows.push(heading_row("Equity", String::new()));
    section_rows(&report.equity, &mut rows);
    rows.push(vec!["  Profit".to_string(), String::new(), amount(report.profit)]);
    rows.push(heading_row("Other debts", String::new()));
    section_rows(&report.other_debts, &mut rows);
    rows.push(heading_row("Total liabilities", amount(report.total_liabilities)));

    let mut lines = vec!["Balance sheet".to_string()];
    lines.extend(render_table(
        &[Column::left("Account"), Column::left("Name"), Column::right("Amount")],
        &rows,
        INDENT,
    ));
    if report.is_balanced {
        lines.push(format!("{}Balanced: yes", " ".repeat(INDENT)));
    } else {
        lines.push(format!(
            "{}Balanced: no (discrepancy {})",
            " ".repeat(INDENT),
            amount(report.discrepancy)
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use balancebook_core::ledger::Account;
    use balancebook_core::reports::{ClosingKind, ClosingMarker, ReportService};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn t_account(debits: Vec<Decimal>, credits: Vec<Decimal>) -> LedgerAccount {
        LedgerAccount {
            account_number: "40000".to_string(),
            account_name: "Suppliers".to_string(),
            debit_entries: debits,
            credit_entries: credits,
            max_debit: dec!(100),
            max_credit: dec!(30),
            difference: dec!(70),
            closing: Some(ClosingMarker {
                kind: ClosingKind::DebitBalance,
                amount: dec!(70),
            }),
        }
    }

    #[test]
    fn t_account_puts_debit_balance_on_credit_side() {
        let lines = render_t_account(&t_account(vec![dec!(100), dec!(40)], vec![dec!(30)]));
        assert_eq!(lines[0], "  40000  Suppliers");
        assert!(lines[1].contains("Debit") && lines[1].contains("Credit"));
        assert!(lines[2].contains("100.00") && lines[2].ends_with("30.00"));
        assert_eq!(lines[3].trim(), "40.00");
        assert!(lines[4].trim_start().starts_with("D.B. 70.00"));
        assert!(lines[4].len() > lines[3].len());
    }

    #[test]
    fn trial_balance_leaves_blank_cells() {
        let report = ReportService::trial_balance(&[
            Account {
                account_number: "60000".to_string(),
                account_name: "Purchases".to_string(),
                debit: dec!(75),
                credit: dec!(0),
            },
        ]);
        let lines = render_trial_balance(&report);
        assert_eq!(lines[0], "Trial balance");
        assert!(lines[2].ends_with("75.00"));
        assert!(lines.last().is_some_and(|l| l.ends_with("Balanced: no")));
    }
}
