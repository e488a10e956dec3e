use balancebook_core::chart::{AccountClass, ChartOfAccounts, short_number};
use serde::Serialize;

use super::format::{Column, INDENT, render_table};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartAccountRow {
    pub account_number: String,
    pub short_number: String,
    pub account_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartClassGroup {
    pub class: u8,
    pub name: String,
    pub accounts: Vec<ChartAccountRow>,
}

/// Chart entries grouped by class, optionally limited to one class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartListing {
    pub classes: Vec<ChartClassGroup>,
}

impl ChartListing {
    pub fn build(chart: &ChartOfAccounts, only: Option<AccountClass>) -> Self {
        let classes = chart
            .by_class()
            .into_iter()
            .filter(|(class, _)| only.is_none_or(|wanted| wanted == *class))
            .map(|(class, entries)| ChartClassGroup {
                class: class.digit(),
                name: chart.class_name(class).unwrap_or_default().to_string(),
                accounts: entries
                    .into_iter()
                    .map(|entry| ChartAccountRow {
                        account_number: entry.account_number.to_string(),
                        short_number: short_number(entry.account_number),
                        account_name: entry.account_name.to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { classes }
    }
}

pub fn render_chart(listing: &ChartListing) -> String {
    let mut lines = Vec::new();
    if listing.classes.is_empty() {
        lines.push("No accounts.".to_string());
    }
    for group in &listing.classes {
        if !lines.is_empty() {
            lines.push(String::new());
        }
        if group.name.is_empty() {
            lines.push(format!("Class {}", group.class));
        } else {
            lines.push(format!("Class {}  {}", group.class, group.name));
        }
        let rows: Vec<Vec<String>> = group
            .accounts
            .iter()
            .map(|row| vec![row.short_number.clone(), row.account_name.clone()])
            .collect();
        lines.extend(render_table(
            &[Column::left("Account"), Column::left("Name")],
            &rows,
            INDENT,
        ));
    }
    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart() -> ChartOfAccounts {
        ChartOfAccounts::new([
            ("CLASS 1", "Capital accounts"),
            ("10000", "Capital"),
            ("16000", "Loans"),
            ("CLASS 6", "Expense accounts"),
            ("60000", "Purchases"),
        ])
    }

    #[test]
    fn listing_groups_by_class_with_short_numbers() {
        let listing = ChartListing::build(&chart(), None);
        assert_eq!(listing.classes.len(), 2);
        assert_eq!(listing.classes[0].name, "Capital accounts");
        assert_eq!(listing.classes[0].accounts[0].short_number, "10");
        assert_eq!(listing.classes[0].accounts[1].short_number, "16");
        assert_eq!(listing.classes[1].accounts[0].account_name, "Purchases");
    }

    #[test]
    fn listing_filters_one_class() {
        let only = AccountClass::from_digit(6);
        let listing = ChartListing::build(&chart(), only);
        assert_eq!(listing.classes.len(), 1);
        assert_eq!(listing.classes[0].class, 6);

        let text = render_chart(&listing);
        assert!(text.starts_with("Class 6  Expense accounts\n"));
        assert!(
            text.lines()
                .any(|line| line.trim_start().starts_with("6 ") && line.ends_with("Purchases"))
        );
    }

    #[test]
    fn listing_of_missing_class_is_empty() {
        let listing = ChartListing::build(&chart(), AccountClass::from_digit(9));
        assert!(listing.classes.is_empty());
        assert_eq!(render_chart(&listing), "No accounts.\n");
    }
}
