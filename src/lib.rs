//! # flare-report
//!
//! Exact-fraction report generator for solar flare observation logs.
//!
//! Flare logs carry decimal measurements (peak counts, average count
//! rates). This crate converts them to exact fractions, derives the total
//! count over each flare's duration without floating point, and renders a
//! fixed-width report.
//!
//! ## Overview
//!
//! - **Fractions**: canonical `i64` fractions with overflow-checked arithmetic
//! - **Records**: fixed-token lines after a 7-line header, one flare per line
//! - **Single pass**: records are parsed, derived, and written one at a time
//! - **Line-level recovery**: a malformed line is reported and skipped
//!
//! ## Example
//!
//! ```
//! use flare_report::{Fraction, ReportOptions, from_decimal_parts, run};
//!
//! let rate = from_decimal_parts(16, 5_000_000_000, 10).unwrap();
//! assert_eq!(rate, Fraction::new(33, 2).unwrap());
//!
//! let mut input = "header\n".repeat(7);
//! input.push_str("2021213 5-Feb-2002 02:04:56 02:06:34 02:07:14 136.000 16.5000000000 6 8\n");
//!
//! let mut out = Vec::new();
//! let summary = run(input.as_bytes(), &mut out, &ReportOptions::default()).unwrap();
//! assert_eq!(summary.rows_written, 1);
//! ```

pub mod datetime;
pub mod decimal;
pub mod derived;
pub mod error;
pub mod fraction;
pub mod pipeline;
pub mod record;
pub mod report;

pub use datetime::{
    ClockTime, DateFormat, SECONDS_PER_DAY, elapsed_seconds, normalize_date,
    parse_time_to_seconds, reformat_date,
};
pub use decimal::{DecimalParts, from_decimal_parts};
pub use derived::DerivedRecord;
pub use error::{FractionError, FractionResult, RecordError, ReportError};
pub use fraction::{Fraction, canonicalize, gcd};
pub use pipeline::{ReportOptions, RunSummary, run};
pub use record::{FlareRecord, HEADER_LINES, RecordParser, SourceLine, parse_record_line};
pub use report::{FRACTION_WIDTH, assemble_row, center_fraction};
