//! Date display helpers.

use chrono::NaiveDate;

/// Long US-English form, e.g. `January 5, 2024`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Machine-readable form for `<time datetime>`.
#[must_use]
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
