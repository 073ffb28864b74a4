use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// How a raw display string is normalized into its canonical form.
///
/// The serialized names are the wire tags a renderer attaches to each
/// editable control so change events know which rule to apply.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrubKind {
    /// Keep digits, decimal point and minus sign; accounting-style
    /// parentheses mark the value negative.
    #[serde(rename = "number")]
    Number,
    /// Month half of a month/year field; merged with the sibling year.
    #[serde(rename = "monthyear-month")]
    MonthYearMonth,
    /// Year half of a month/year field; merged with the sibling month.
    #[serde(rename = "monthyear-year")]
    MonthYearYear,
    /// No transformation; the display string is already canonical.
    #[default]
    #[serde(rename = "")]
    Identity,
}

impl ScrubKind {
    pub fn as_tag(&self) -> &'static str {
        match self {
            ScrubKind::Number => "number",
            ScrubKind::MonthYearMonth => "monthyear-month",
            ScrubKind::MonthYearYear => "monthyear-year",
            ScrubKind::Identity => "",
        }
    }

    /// Look up a scrub kind from its wire tag. Unknown tags fall back to
    /// [`ScrubKind::Identity`] so unrecognized values pass through untouched.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "number" => ScrubKind::Number,
            "monthyear-month" => ScrubKind::MonthYearMonth,
            "monthyear-year" => ScrubKind::MonthYearYear,
            _ => ScrubKind::Identity,
        }
    }
}

impl Display for ScrubKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// Normalize a raw display string.
///
/// Only [`ScrubKind::Number`] transforms its input here. The month/year kinds
/// need the sibling control's previous scrub value and are handled by
/// [`scrub_with_sibling`]; when passed to this function they behave like
/// [`ScrubKind::Identity`].
pub fn scrub(kind: ScrubKind, raw: &str) -> String {
    match kind {
        ScrubKind::Number => scrub_number(raw),
        _ => raw.to_owned(),
    }
}

/// Full dispatcher used by field edit handlers. `previous_scrubbed` is the
/// value currently stored in the field's scrubbed slot; the month/year rules
/// read the half they do not own from it.
pub fn scrub_with_sibling(kind: ScrubKind, raw: &str, previous_scrubbed: &str) -> String {
    match kind {
        ScrubKind::Number => scrub_number(raw),
        ScrubKind::MonthYearMonth => crate::monthyear::apply_month(raw, previous_scrubbed),
        ScrubKind::MonthYearYear => crate::monthyear::apply_year(raw, previous_scrubbed),
        ScrubKind::Identity => raw.to_owned(),
    }
}

/// Keep only digits `0-9`, `.` and `-`.
///
/// If the raw value contains a `(` the user is assumed to be writing an
/// accounting-style negative like `(12.34)`: when the filtered text parses as
/// a number strictly greater than zero, a leading minus is applied. Repeated
/// `.` or `-` characters survive filtering unvalidated; the result is for
/// string comparison and server-side parsing, not arithmetic.
pub fn scrub_number(raw: &str) -> String {
    let negative = raw.contains('(');

    let filtered: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if negative && filtered.parse::<f64>().map(|n| n > 0.0).unwrap_or(false) {
        return format!("-{filtered}");
    }

    filtered
}
