use rust_decimal::{Decimal, RoundingStrategy};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

impl<'a> Column<'a> {
    pub const fn left(name: &'a str) -> Self {
        Self {
            name,
            align: Align::Left,
        }
    }

    pub const fn right(name: &'a str) -> Self {
        Self {
            name,
            align: Align::Right,
        }
    }
}

pub const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;

/// Formats an amount with two decimal places.
pub fn amount(value: Decimal) -> String {
    format!(
        "{:.2}",
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Formats an optional amount, leaving the cell blank when absent.
pub fn optional_amount(value: Option<Decimal>) -> String {
    value.map(amount).unwrap_or_default()
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Renders rows under a header line, each column padded to its widest cell.
pub fn render_table(columns: &[Column<'_>], rows: &[Vec<String>], indent: usize) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(column.name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = columns.iter().map(|c| c.name.to_string()).collect();
    let mut lines = vec![render_row(columns, &widths, &header, indent)];
    lines.extend(
        rows.iter()
            .map(|row| render_row(columns, &widths, row, indent)),
    );
    lines
}

fn render_row(columns: &[Column<'_>], widths: &[usize], cells: &[String], indent: usize) -> String {
    let gap = " ".repeat(COLUMN_GAP);
    let rendered: Vec<String> = columns
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(index, (column, width))| {
            let cell = cells.get(index).map_or("", String::as_str);
            match column.align {
                Align::Left => format!("{cell:<width$}"),
                Align::Right => format!("{cell:>width$}"),
            }
        })
        .collect();
    format!("{}{}", " ".repeat(indent), rendered.join(&gap))
        .trim_end()
        .to_string()
}
