//! Flare log records and the line-oriented record parser.
//!
//! A flare log starts with a fixed block of header lines followed by one
//! record per line:
//!
//! ```text
//! <id> <DD-Mon-YYYY> <start HH:MM:SS> <peak> <end> <peak>.<3 digits> <rate>.<10 digits> <detectors...>
//! ```
//!
//! The detector field runs to the end of the line and may contain spaces.

use std::io::{self, BufRead};

use crate::datetime::ClockTime;
use crate::decimal::DecimalParts;
use crate::error::RecordError;

/// Lines discarded at the top of every input stream.
pub const HEADER_LINES: usize = 7;

pub const MAX_ID_LEN: usize = 31;
pub const MAX_DATE_LEN: usize = 31;
pub const MAX_TIME_LEN: usize = 15;
pub const MAX_DETECTORS_LEN: usize = 31;

/// Fractional digits carried by the peak-count field.
pub const PEAK_DIGITS: usize = 3;
/// Fractional digits carried by the average-count-rate field.
pub const RATE_DIGITS: usize = 10;

/// One well-formed flare observation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlareRecord {
    pub flare_id: String,
    /// Start date as written in the source (`DD-Mon-YYYY`).
    pub start_date: String,
    pub start_time: ClockTime,
    pub peak_time: ClockTime,
    pub end_time: ClockTime,
    pub peak: DecimalParts,
    pub average_rate: DecimalParts,
    pub detectors: String,
}

/// Split off the next whitespace-delimited token from `rest`.
fn next_token<'a>(rest: &mut &'a str) -> Option<&'a str> {
    let trimmed = rest.trim_start();
    if trimmed.is_empty() {
        *rest = trimmed;
        return None;
    }
    let end = trimmed
        .find(char::is_whitespace)
        .unwrap_or(trimmed.len());
    let (token, tail) = trimmed.split_at(end);
    *rest = tail;
    Some(token)
}

fn bounded<'a>(token: Option<&'a str>, field: &'static str, max: usize) -> Result<&'a str, RecordError> {
    let token = token.ok_or(RecordError::MissingField(field))?;
    let len = token.chars().count();
    if len > max {
        return Err(RecordError::FieldTooLong { field, len, max });
    }
    Ok(token)
}

fn time_field(token: Option<&str>, field: &'static str) -> Result<ClockTime, RecordError> {
    let token = bounded(token, field, MAX_TIME_LEN)?;
    ClockTime::parse(token).ok_or_else(|| RecordError::InvalidTime(token.to_string()))
}

fn decimal_field(token: Option<&str>, field: &'static str, digits: usize) -> Result<DecimalParts, RecordError> {
    let token = token.ok_or(RecordError::MissingField(field))?;
    DecimalParts::parse(token, digits).ok_or_else(|| RecordError::InvalidDecimal {
        field,
        text: token.to_string(),
    })
}

/// Parse one data line into a [`FlareRecord`].
pub fn parse_record_line(line: &str) -> Result<FlareRecord, RecordError> {
    let mut rest = line;

    let flare_id = bounded(next_token(&mut rest), "flare id", MAX_ID_LEN)?.to_string();
    let start_date = bounded(next_token(&mut rest), "start date", MAX_DATE_LEN)?.to_string();
    let start_time = time_field(next_token(&mut rest), "start time")?;
    let peak_time = time_field(next_token(&mut rest), "peak time")?;
    let end_time = time_field(next_token(&mut rest), "end time")?;
    let peak = decimal_field(next_token(&mut rest), "peak count", PEAK_DIGITS)?;
    let average_rate = decimal_field(next_token(&mut rest), "average rate", RATE_DIGITS)?;

    let tail = rest.trim();
    let detectors = bounded((!tail.is_empty()).then_some(tail), "detectors", MAX_DETECTORS_LEN)?;

    Ok(FlareRecord {
        flare_id,
        start_date,
        start_time,
        peak_time,
        end_time,
        peak,
        average_rate,
        detectors: detectors.to_string(),
    })
}

/// One data line after parsing, tagged with its 1-based physical line number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    pub number: usize,
    pub parsed: Result<FlareRecord, RecordError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    SkippingHeader { remaining: usize },
    ReadingRecords,
}

/// Iterator over the data lines of a flare log.
///
/// The first `header_lines` lines are consumed without inspection. After
/// that, every non-blank line yields a [`SourceLine`]. A malformed line
/// costs only itself; the next call resumes at the following line.
pub struct RecordParser<R> {
    reader: R,
    state: ParserState,
    line_number: usize,
    buf: Vec<u8>,
}

impl<R: BufRead> RecordParser<R> {
    pub fn new(reader: R, header_lines: usize) -> Self {
        let state = if header_lines == 0 {
            ParserState::ReadingRecords
        } else {
            ParserState::SkippingHeader {
                remaining: header_lines,
            }
        };
        Self {
            reader,
            state,
            line_number: 0,
            buf: Vec::new(),
        }
    }

    /// Number of physical lines consumed so far, header included.
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for RecordParser<R> {
    type Item = io::Result<SourceLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
            self.line_number += 1;

            if let ParserState::SkippingHeader { remaining } = &mut self.state {
                *remaining -= 1;
                if *remaining == 0 {
                    self.state = ParserState::ReadingRecords;
                }
                continue;
            }

            let parsed = match std::str::from_utf8(&self.buf) {
                Ok(text) if text.trim().is_empty() => continue,
                Ok(text) => parse_record_line(text),
                Err(_) => Err(RecordError::InvalidEncoding),
            };
            return Some(Ok(SourceLine {
                number: self.line_number,
                parsed,
            }));
        }
    }
}
