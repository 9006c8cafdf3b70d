//! Error types for fraction arithmetic, record parsing, and report runs.
//!
//! The split mirrors the two-tier failure policy of the report: a
//! [`RecordError`] only ever costs the line it came from, while
//! [`FractionError`] and [`ReportError`] abort the run.

use thiserror::Error;

/// Failures raised by exact fraction arithmetic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FractionError {
    /// A fraction with a zero denominator was handed to an operation.
    #[error("zero denominator")]
    ZeroDenominator,

    /// `gcd(0, 0)` was requested.
    #[error("gcd(0, 0) is undefined")]
    InvalidArithmetic,

    /// Division by a fraction whose numerator is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A decimal was declared with a fractional digit count outside `0..=15`.
    #[error("invalid decimal length {0} (expected 0..=15)")]
    InvalidDecimalLength(i64),

    /// An intermediate result does not fit in a signed 64-bit integer.
    #[error("64-bit overflow in fraction arithmetic")]
    Overflow,
}

/// Why a single data line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The line is not valid UTF-8.
    #[error("line is not valid UTF-8")]
    InvalidEncoding,

    /// The line ended before the named field.
    #[error("missing {0} field")]
    MissingField(&'static str),

    /// A field exceeded its length ceiling.
    #[error("{field} field is {len} characters (limit {max})")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// A time-of-day field is not `HH:MM:SS`.
    #[error("invalid time '{0}' (expected HH:MM:SS)")]
    InvalidTime(String),

    /// A decimal field is not `<integer>.<digits>` with the required digit count.
    #[error("invalid {field} decimal '{text}'")]
    InvalidDecimal { field: &'static str, text: String },
}

/// Fatal errors that stop a report run.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Reading the input or writing the report failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record tripped a fraction arithmetic failure.
    #[error("line {line}: {source}")]
    Arithmetic {
        line: usize,
        #[source]
        source: FractionError,
    },

    /// The `--date-format` value is not 10 characters long.
    #[error("invalid date format '{0}' (must be exactly 10 characters)")]
    InvalidDateFormat(String),
}

/// Convenience alias for fraction arithmetic results.
pub type FractionResult<T> = std::result::Result<T, FractionError>;
