//! CSV rendering of the displayed contractor list.
//!
//! Text fields are wrapped in double quotes verbatim. Embedded quotes are
//! not escaped.

use chrono::NaiveDate;
use roster_types::contractor::Contractor;

pub const CSV_HEADER: &str = "Serial No,Name,Contact No,Address,Remarks";

/// Render `records` in the given order: header first, rows joined by `\n`,
/// no trailing newline.
pub fn to_csv<'a>(records: impl IntoIterator<Item = &'a Contractor>) -> String {
    std::iter::once(CSV_HEADER.to_string())
        .chain(records.into_iter().map(csv_row))
        .collect::<Vec<_>>()
        .join("\n")
}

fn csv_row(c: &Contractor) -> String {
    format!(
        "{},\"{}\",\"{}\",\"{}\",\"{}\"",
        c.serial, c.name, c.contact_number, c.address, c.remarks
    )
}

/// `<prefix>_<YYYY-MM-DD>.csv`
pub fn export_file_name(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}_{}.csv", date.format("%Y-%m-%d"))
}
