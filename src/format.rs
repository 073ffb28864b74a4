//! Display formatting for the rendering boundary.
//!
//! The core never builds markup; it only hands the renderer the strings it
//! needs: the formatted initial display value per kind and the option list
//! for the month select. Negative money and int amounts display in
//! accounting parentheses, which round-trip through the `(` rule in
//! [`crate::scrub::scrub_number`].

use crate::value::CanonicalValue;

/// `(value, label)` pairs for the month select. The blank option uses a
/// single space so a cleared select submits blank rather than a month.
pub const MONTH_OPTIONS: [(&str, &str); 13] = [
    (" ", " "),
    ("1", "Jan"),
    ("2", "Feb"),
    ("3", "Mar"),
    ("4", "Apr"),
    ("5", "May"),
    ("6", "Jun"),
    ("7", "Jul"),
    ("8", "Aug"),
    ("9", "Sep"),
    ("10", "Oct"),
    ("11", "Nov"),
    ("12", "Dec"),
];

/// Input placeholder for the year sub-control.
pub const YEAR_PLACEHOLDER: &str = "YYYY";

/// Input placeholder for date fields.
pub const DATE_PLACEHOLDER: &str = "mm/dd/yy";

/// The formatted text initially shown for a server-loaded value.
pub fn initial_display(value: &CanonicalValue) -> String {
    match value {
        CanonicalValue::Percent(number) => number.to_string(),
        CanonicalValue::Money(number) => money(*number),
        CanonicalValue::Int(number) => int(*number),
        CanonicalValue::Date(date) => date.format("%-m/%-d/%y").to_string(),
        // The renderer splits this across the two sub-controls; see
        // `month_seed` and `year_seed`.
        CanonicalValue::MonthYear { .. } => value.to_canonical_string(),
        CanonicalValue::Text(text) => text.clone(),
    }
}

/// `#,##0.00`-style money text: grouped thousands, two decimals, accounting
/// parentheses for negatives.
pub fn money(value: f64) -> String {
    let text = format!("{:.2}", value.abs());
    let (whole, cents) = match text.split_once('.') {
        Some(parts) => parts,
        None => (text.as_str(), "00"),
    };

    let grouped = format!("{}.{}", group_thousands(whole), cents);

    if value < 0.0 {
        format!("({grouped})")
    } else {
        grouped
    }
}

/// Grouped integer text, accounting parentheses for negatives.
pub fn int(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());

    if value < 0 {
        format!("({grouped})")
    } else {
        grouped
    }
}

/// The month select's initially selected value, or the blank option.
pub fn month_seed(value: Option<&CanonicalValue>) -> String {
    match value {
        Some(CanonicalValue::MonthYear { month, .. }) => month.to_string(),
        _ => " ".to_owned(),
    }
}

/// The year input's initial value, or the blank option.
pub fn year_seed(value: Option<&CanonicalValue>) -> String {
    match value {
        Some(CanonicalValue::MonthYear { year, .. }) => year.to_string(),
        _ => " ".to_owned(),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}
