//! Single-pass report driver.
//!
//! Pulls lines from a [`RecordParser`], converts and derives each good
//! record, and writes one row per record. Malformed lines are logged and
//! skipped; arithmetic failures end the run.

use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::datetime::{DateFormat, normalize_date};
use crate::derived::DerivedRecord;
use crate::error::ReportError;
use crate::record::{HEADER_LINES, RecordParser};
use crate::report::{FORMATTED_DATE_WIDTH, SOURCE_DATE_WIDTH, assemble_row};

/// Required length of a `--date-format` value.
pub const DATE_FORMAT_LEN: usize = 10;

/// Settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// `None` echoes source dates in the wide column.
    pub date_format: Option<DateFormat>,
    pub header_lines: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            date_format: None,
            header_lines: HEADER_LINES,
        }
    }
}

impl ReportOptions {
    /// Options for a `--date-format` argument. The value must be exactly
    /// ten characters; unknown ten-character layouts pass dates through.
    pub fn with_date_format(arg: &str) -> Result<Self, ReportError> {
        if arg.chars().count() != DATE_FORMAT_LEN {
            return Err(ReportError::InvalidDateFormat(arg.to_string()));
        }
        Ok(Self {
            date_format: Some(DateFormat::from_arg(arg)),
            ..Self::default()
        })
    }
}

/// Counts reported at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Data lines seen (well-formed or not).
    pub records_read: usize,
    pub rows_written: usize,
    pub lines_skipped: usize,
}

/// Run the report over `input`, writing rows to `output`.
pub fn run<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    options: &ReportOptions,
) -> Result<RunSummary, ReportError> {
    let mut summary = RunSummary::default();
    let date_width = match options.date_format {
        Some(_) => FORMATTED_DATE_WIDTH,
        None => SOURCE_DATE_WIDTH,
    };

    for line in RecordParser::new(input, options.header_lines) {
        let line = line?;
        summary.records_read += 1;

        let record = match line.parsed {
            Ok(record) => record,
            Err(e) => {
                warn!("line {}: line format error, skipping line ({e})", line.number);
                summary.lines_skipped += 1;
                continue;
            }
        };

        let derived =
            DerivedRecord::from_record(&record).map_err(|source| ReportError::Arithmetic {
                line: line.number,
                source,
            })?;
        debug!(
            "line {}: flare {} duration={}s total={}",
            line.number, record.flare_id, derived.duration_seconds, derived.total_count
        );

        let date = match options.date_format {
            Some(format) => normalize_date(&record.start_date, format),
            None => record.start_date.clone(),
        };
        writeln!(output, "{}", assemble_row(&record, &derived, &date, date_width))?;
        summary.rows_written += 1;
    }

    output.flush()?;
    info!(
        "processed {} records -> {} rows ({} skipped)",
        summary.records_read, summary.rows_written, summary.lines_skipped
    );
    Ok(summary)
}
