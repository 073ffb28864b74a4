//! Merging of the two independently edited month/year sub-controls.
//!
//! A month/year field never exposes day granularity, so its canonical form is
//! always `"{month}/1/{year}"`. The month select and the year input fire
//! separate change events; each merge operation reads the half it does not
//! own from the previously stored scrub value, so editing one half never
//! destroys the other.

use chrono::{Datelike, Local, NaiveDate};

/// Blank means "clear the field". The original month select uses a single
/// space as its empty option, so whitespace counts as blank.
fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn parse_sibling(scrubbed: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(scrubbed.trim(), "%m/%d/%Y").ok()
}

/// The month sub-control changed. Keeps the year of `previous_scrubbed` when
/// it holds a valid canonical date, otherwise the current year.
pub fn apply_month(new_month: &str, previous_scrubbed: &str) -> String {
    apply_month_at(new_month, previous_scrubbed, Local::now().date_naive())
}

/// The year sub-control changed. Keeps the month of `previous_scrubbed` when
/// it holds a valid canonical date, otherwise the current month.
pub fn apply_year(new_year: &str, previous_scrubbed: &str) -> String {
    apply_year_at(new_year, previous_scrubbed, Local::now().date_naive())
}

/// [`apply_month`] with an explicit "today" for the fallback year.
pub fn apply_month_at(new_month: &str, previous_scrubbed: &str, today: NaiveDate) -> String {
    if is_blank(new_month) {
        return String::new();
    }

    let year = parse_sibling(previous_scrubbed)
        .map(|date| date.year())
        .unwrap_or_else(|| today.year());

    format!("{new_month}/1/{year}")
}

/// [`apply_year`] with an explicit "today" for the fallback month.
pub fn apply_year_at(new_year: &str, previous_scrubbed: &str, today: NaiveDate) -> String {
    if is_blank(new_year) {
        return String::new();
    }

    let month = parse_sibling(previous_scrubbed)
        .map(|date| date.month())
        .unwrap_or_else(|| today.month());

    format!("{month}/1/{new_year}")
}
