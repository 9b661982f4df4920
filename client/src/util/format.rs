//! Display formatting shared by pages and components.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const MONTH_YEAR: &[BorrowedFormatItem<'_>] = format_description!("[month repr:short] [year]");

/// Year span of an entry: `"2016-2021"`, `"2020"`, or `"2025-Present"`.
#[must_use]
pub fn period_label(start: Date, end: Option<Date>) -> String {
    match end {
        None => format!("{}-Present", start.year()),
        Some(end) if end.year() == start.year() => start.year().to_string(),
        Some(end) => format!("{}-{}", start.year(), end.year()),
    }
}

/// `"Sep 2025"`.
#[must_use]
pub fn month_year(date: Date) -> String {
    date.format(MONTH_YEAR).unwrap_or_default()
}

/// Comma-separated technology list.
#[must_use]
pub fn join_technologies(technologies: &[String]) -> String {
    technologies.join(", ")
}
