//! Fixed-width table rendering of records.

use crate::model::{DATE_FORMAT, Record};

const HEADERS: [&str; 7] = [
    "ID",
    "NAME",
    "SURNAME",
    "PHONE",
    "OFFICE PHONE",
    "LANDLINE PHONE",
    "BIRTH DATE",
];

fn cells(record: &Record) -> [String; 7] {
    [
        record.id.to_string(),
        record.name.clone(),
        record.surname.clone(),
        record.phone.clone(),
        record.office_phone.clone().unwrap_or_default(),
        record.landline_phone.clone().unwrap_or_default(),
        record
            .birth_date
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_default(),
    ]
}

fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    format!("{}{}", value, " ".repeat(width.saturating_sub(len)))
}

/// Renders records with a header row. Columns are sized to their content.
pub fn render(records: &[&Record]) -> String {
    let rows: Vec<[String; 7]> = records.iter().map(|r| cells(r)).collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |values: Vec<&str>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| pad(v, *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_row(HEADERS.to_vec())];
    lines.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(format_row(row.iter().map(String::as_str).collect()));
    }
    lines.join("\n")
}

/// Renders only names, surnames and birth dates.
pub fn render_birthdays(records: &[&Record]) -> String {
    records
        .iter()
        .map(|r| {
            let date = r
                .birth_date
                .map(|d| d.format("%d.%m").to_string())
                .unwrap_or_default();
            format!("{:<6} {}", date, r.full_name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
