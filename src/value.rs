use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::ValueError;
use crate::scrub::ScrubKind;

/// The kind of a rich field. Determines the scrub rule applied to edits and
/// the display format of the initial value.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Percent,
    Money,
    Int,
    Date,
    MonthYear,
    Text,
}

impl FieldKind {
    /// The scrub tag wired to the field's main input. Month/year fields have
    /// no main input; their two sub-controls carry
    /// [`ScrubKind::MonthYearMonth`] and [`ScrubKind::MonthYearYear`] and
    /// route through the dedicated edit handlers instead.
    pub fn scrub_kind(&self) -> ScrubKind {
        match self {
            FieldKind::Percent | FieldKind::Money | FieldKind::Int => ScrubKind::Number,
            FieldKind::Date | FieldKind::MonthYear | FieldKind::Text => ScrubKind::Identity,
        }
    }
}

/// Typed form of a canonical string.
///
/// The wire contract stays string-based: fields compare and submit canonical
/// strings only. This variant exists for the boundary with the server model —
/// typed construction of a field's original value and type-safe display
/// formatting — with [`CanonicalValue::parse`] and
/// [`CanonicalValue::to_canonical_string`] converting at the edge.
#[derive(Clone, Debug, PartialEq)]
pub enum CanonicalValue {
    Percent(f64),
    Money(f64),
    Int(i64),
    Date(NaiveDate),
    MonthYear { month: u32, year: i32 },
    Text(String),
}

impl CanonicalValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            CanonicalValue::Percent(_) => FieldKind::Percent,
            CanonicalValue::Money(_) => FieldKind::Money,
            CanonicalValue::Int(_) => FieldKind::Int,
            CanonicalValue::Date(_) => FieldKind::Date,
            CanonicalValue::MonthYear { .. } => FieldKind::MonthYear,
            CanonicalValue::Text(_) => FieldKind::Text,
        }
    }

    /// Parse a canonical string as typed by `kind`. An empty string is a null
    /// value (`Ok(None)`), matching how absent server values render.
    pub fn parse(kind: FieldKind, canonical: &str) -> Result<Option<Self>, ValueError> {
        if canonical.is_empty() {
            return Ok(None);
        }

        let value = match kind {
            FieldKind::Percent => {
                let number = canonical
                    .parse::<f64>()
                    .map_err(|_| ValueError::InvalidNumber(canonical.to_owned()))?;
                CanonicalValue::Percent(number)
            }
            FieldKind::Money => {
                let number = canonical
                    .parse::<f64>()
                    .map_err(|_| ValueError::InvalidNumber(canonical.to_owned()))?;
                CanonicalValue::Money(number)
            }
            FieldKind::Int => {
                let number = canonical
                    .parse::<i64>()
                    .map_err(|_| ValueError::InvalidInt(canonical.to_owned()))?;
                CanonicalValue::Int(number)
            }
            FieldKind::Date => {
                let date = NaiveDate::parse_from_str(canonical, "%m/%d/%y")
                    .map_err(|_| ValueError::InvalidDate(canonical.to_owned()))?;
                CanonicalValue::Date(date)
            }
            FieldKind::MonthYear => {
                // Day granularity is not exposed; whatever day is present is
                // dropped in favor of the fixed first of the month.
                let date = NaiveDate::parse_from_str(canonical, "%m/%d/%Y")
                    .map_err(|_| ValueError::InvalidMonthYear(canonical.to_owned()))?;
                CanonicalValue::MonthYear {
                    month: date.month(),
                    year: date.year(),
                }
            }
            FieldKind::Text => CanonicalValue::Text(canonical.to_owned()),
        };

        Ok(Some(value))
    }

    /// Serialize back to the canonical string submitted to the server.
    pub fn to_canonical_string(&self) -> String {
        match self {
            CanonicalValue::Percent(number) => number.to_string(),
            CanonicalValue::Money(number) => format!("{number:.2}"),
            CanonicalValue::Int(number) => number.to_string(),
            CanonicalValue::Date(date) => date.format("%-m/%-d/%y").to_string(),
            CanonicalValue::MonthYear { month, year } => format!("{month}/1/{year}"),
            CanonicalValue::Text(text) => text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_parses_empty_canonical_strings_as_null() {
        for kind in [
            FieldKind::Percent,
            FieldKind::Money,
            FieldKind::Int,
            FieldKind::Date,
            FieldKind::MonthYear,
            FieldKind::Text,
        ] {
            assert_eq!(CanonicalValue::parse(kind, ""), Ok(None));
        }
    }

    #[test]
    fn it_round_trips_canonical_strings() {
        let cases = [
            (FieldKind::Percent, "5"),
            (FieldKind::Percent, "12.5"),
            (FieldKind::Money, "1500.00"),
            (FieldKind::Money, "-250.00"),
            (FieldKind::Int, "1234567"),
            (FieldKind::Date, "6/1/23"),
            (FieldKind::MonthYear, "6/1/2023"),
            (FieldKind::Text, "hello world"),
        ];

        for (kind, canonical) in cases {
            let value = CanonicalValue::parse(kind, canonical).unwrap().unwrap();
            assert_eq!(value.to_canonical_string(), canonical, "kind = {kind:?}");
        }
    }

    #[test]
    fn it_reports_the_offending_text_on_parse_failure() {
        assert_eq!(
            CanonicalValue::parse(FieldKind::Money, "1.2.3"),
            Err(ValueError::InvalidNumber("1.2.3".to_owned()))
        );
        assert_eq!(
            CanonicalValue::parse(FieldKind::Int, "12.5"),
            Err(ValueError::InvalidInt("12.5".to_owned()))
        );
        assert_eq!(
            CanonicalValue::parse(FieldKind::Date, "not a date"),
            Err(ValueError::InvalidDate("not a date".to_owned()))
        );
        assert_eq!(
            CanonicalValue::parse(FieldKind::MonthYear, "13/1/2023"),
            Err(ValueError::InvalidMonthYear("13/1/2023".to_owned()))
        );
    }

    #[test]
    fn it_normalizes_month_year_to_the_first_of_the_month() {
        let value = CanonicalValue::parse(FieldKind::MonthYear, "6/15/2023")
            .unwrap()
            .unwrap();
        assert_eq!(value, CanonicalValue::MonthYear { month: 6, year: 2023 });
        assert_eq!(value.to_canonical_string(), "6/1/2023");
    }

    #[test]
    fn it_maps_kinds_to_scrub_tags() {
        assert_eq!(FieldKind::Percent.scrub_kind(), ScrubKind::Number);
        assert_eq!(FieldKind::Money.scrub_kind(), ScrubKind::Number);
        assert_eq!(FieldKind::Int.scrub_kind(), ScrubKind::Number);
        assert_eq!(FieldKind::Date.scrub_kind(), ScrubKind::Identity);
        assert_eq!(FieldKind::Text.scrub_kind(), ScrubKind::Identity);
    }

    #[test]
    fn it_serializes_kind_wire_names() {
        assert_eq!(
            serde_json::to_string(&FieldKind::MonthYear).unwrap(),
            "\"monthyear\""
        );
        assert_eq!(serde_json::to_string(&FieldKind::Money).unwrap(), "\"money\"");
    }
}
