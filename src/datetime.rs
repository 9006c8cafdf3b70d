//! Clock-time and date handling for flare records.

use std::fmt;

/// Seconds in one day, used to correct intervals that cross midnight.
pub const SECONDS_PER_DAY: i64 = 86_400;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Output layout for the start-date column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    YearMonthDay,
    /// `MM-DD-YYYY`
    MonthDayYearDash,
    /// `MM/DD/YYYY`
    MonthDayYearSlash,
    /// Echo the source date unchanged.
    #[default]
    PassThrough,
}

impl DateFormat {
    /// Map a layout name to a format. Unrecognized names pass through.
    pub fn from_arg(name: &str) -> Self {
        match name {
            "YYYY-MM-DD" => DateFormat::YearMonthDay,
            "MM-DD-YYYY" => DateFormat::MonthDayYearDash,
            "MM/DD/YYYY" => DateFormat::MonthDayYearSlash,
            _ => DateFormat::PassThrough,
        }
    }
}

/// Parse `HH:MM:SS` into seconds since midnight.
///
/// Only the shape is checked; `25:61:61` is accepted and counted as-is.
pub fn parse_time_to_seconds(s: &str) -> Option<i64> {
    let mut fields = s.splitn(3, ':');
    let mut next = || -> Option<i64> {
        let text = fields.next()?;
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        text.parse().ok()
    };
    let (h, m, sec) = (next()?, next()?, next()?);
    h.checked_mul(3600)?.checked_add(m.checked_mul(60)?)?.checked_add(sec)
}

/// A validated `HH:MM:SS` clock reading that keeps its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockTime {
    text: String,
    seconds: i64,
}

impl ClockTime {
    /// Parse `HH:MM:SS`, keeping the text for display.
    pub fn parse(text: &str) -> Option<Self> {
        let seconds = parse_time_to_seconds(text)?;
        Some(Self {
            text: text.to_string(),
            seconds,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Seconds since midnight.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

/// Seconds from `start` to `end`, wrapping once across midnight.
///
/// Intervals spanning more than one midnight cannot be recovered from
/// clock times alone; the result is still in `0..SECONDS_PER_DAY` for
/// in-range clock values.
pub fn elapsed_seconds(start: i64, end: i64) -> i64 {
    let delta = end - start;
    if delta < 0 { delta + SECONDS_PER_DAY } else { delta }
}

/// Month number (1-12) for a three-letter English abbreviation, or 0.
pub fn month_number(abbrev: &str) -> u32 {
    MONTHS
        .iter()
        .position(|m| *m == abbrev)
        .map_or(0, |i| i as u32 + 1)
}

/// Render a date in `format`. [`DateFormat::PassThrough`] returns `original`.
pub fn reformat_date(
    day: u32,
    month_abbrev: &str,
    year: i32,
    format: DateFormat,
    original: &str,
) -> String {
    let month = month_number(month_abbrev);
    match format {
        DateFormat::YearMonthDay => format!("{year:04}-{month:02}-{day:02}"),
        DateFormat::MonthDayYearDash => format!("{month:02}-{day:02}-{year:04}"),
        DateFormat::MonthDayYearSlash => format!("{month:02}/{day:02}/{year:04}"),
        DateFormat::PassThrough => original.to_string(),
    }
}

/// Split a `DD-Mon-YYYY` date and render it in `format`.
///
/// Input that does not split into numeric day, month text, and numeric
/// year is echoed unchanged.
pub fn normalize_date(input: &str, format: DateFormat) -> String {
    match split_date(input) {
        Some((day, month, year)) => reformat_date(day, month, year, format, input),
        None => input.to_string(),
    }
}

fn split_date(input: &str) -> Option<(u32, &str, i32)> {
    let mut fields = input.splitn(3, '-');
    let day = fields.next()?.parse().ok()?;
    let month = fields.next()?;
    let year = fields.next()?.parse().ok()?;
    Some((day, month, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time_to_seconds("00:00:00"), Some(0));
        assert_eq!(parse_time_to_seconds("01:02:03"), Some(3723));
        assert_eq!(parse_time_to_seconds("23:59:59"), Some(86_399));
    }

    #[test]
    fn test_parse_time_rejects_bad_shape() {
        assert_eq!(parse_time_to_seconds("12:00"), None);
        assert_eq!(parse_time_to_seconds("12:xx:00"), None);
        assert_eq!(parse_time_to_seconds("12::00"), None);
        assert_eq!(parse_time_to_seconds("-1:00:00"), None);
        assert_eq!(parse_time_to_seconds(""), None);
    }

    #[test]
    fn test_elapsed_same_day() {
        assert_eq!(elapsed_seconds(3600, 4200), 600);
        assert_eq!(elapsed_seconds(100, 100), 0);
    }

    #[test]
    fn test_elapsed_wraps_midnight() {
        let start = parse_time_to_seconds("23:50:00").unwrap();
        let end = parse_time_to_seconds("00:10:00").unwrap();
        assert_eq!(elapsed_seconds(start, end), 1200);
    }

    #[test]
    fn test_clock_time_keeps_text() {
        let t = ClockTime::parse("02:04:56").unwrap();
        assert_eq!(t.as_str(), "02:04:56");
        assert_eq!(t.seconds(), 7496);
        assert_eq!(format!("{t:>9}"), " 02:04:56");
        assert!(ClockTime::parse("2:4").is_none());
    }

    #[test]
    fn test_month_lookup() {
        assert_eq!(month_number("Jan"), 1);
        assert_eq!(month_number("Dec"), 12);
        assert_eq!(month_number("jan"), 0);
        assert_eq!(month_number("Foo"), 0);
    }

    #[test]
    fn test_date_format_from_arg() {
        assert_eq!(DateFormat::from_arg("YYYY-MM-DD"), DateFormat::YearMonthDay);
        assert_eq!(DateFormat::from_arg("MM-DD-YYYY"), DateFormat::MonthDayYearDash);
        assert_eq!(DateFormat::from_arg("MM/DD/YYYY"), DateFormat::MonthDayYearSlash);
        assert_eq!(DateFormat::from_arg("DD.MM.YYYY"), DateFormat::PassThrough);
        assert_eq!(DateFormat::from_arg(""), DateFormat::PassThrough);
    }

    #[test]
    fn test_normalize_date_layouts() {
        assert_eq!(normalize_date("5-Feb-2002", DateFormat::YearMonthDay), "2002-02-05");
        assert_eq!(normalize_date("5-Feb-2002", DateFormat::MonthDayYearDash), "02-05-2002");
        assert_eq!(normalize_date("15-Nov-2003", DateFormat::MonthDayYearSlash), "11/15/2003");
        assert_eq!(normalize_date("15-Nov-2003", DateFormat::PassThrough), "15-Nov-2003");
    }

    #[test]
    fn test_normalize_unknown_month() {
        assert_eq!(normalize_date("15-Foo-2003", DateFormat::YearMonthDay), "2003-00-15");
    }

    #[test]
    fn test_normalize_unparseable_date_echoes() {
        assert_eq!(normalize_date("yesterday", DateFormat::YearMonthDay), "yesterday");
        assert_eq!(normalize_date("xx-Feb-2002", DateFormat::YearMonthDay), "xx-Feb-2002");
    }
}
