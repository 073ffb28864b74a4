use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
/// A canonical string could not be interpreted as a typed value.
///
/// Only the boundary parser in [`crate::value`] reports these. Scrubbing and
/// dirty tracking are total over strings and never fail: malformed user input
/// degrades to an empty or filtered string instead.
pub enum ValueError {
    #[error("not a valid number: {0:?}")]
    InvalidNumber(String),

    #[error("not a valid integer: {0:?}")]
    InvalidInt(String),

    #[error("not a valid date: {0:?}")]
    InvalidDate(String),

    #[error("not a valid month/year: {0:?}")]
    InvalidMonthYear(String),
}
