//! Fixed-width report rendering.

use crate::derived::DerivedRecord;
use crate::fraction::Fraction;
use crate::record::FlareRecord;

/// Width of a centered fraction column.
pub const FRACTION_WIDTH: usize = 39;

pub const ID_WIDTH: usize = 12;
/// Date column width when the date is echoed as written.
pub const SOURCE_DATE_WIDTH: usize = 12;
/// Date column width when the date was reformatted.
pub const FORMATTED_DATE_WIDTH: usize = 11;
pub const TIME_WIDTH: usize = 9;
pub const DURATION_WIDTH: usize = 6;
pub const PEAK_INT_WIDTH: usize = 4;
pub const RATE_INT_WIDTH: usize = 7;
pub const DETECTORS_WIDTH: usize = 12;

/// Render `f` with its slash pinned at column `width / 2`.
///
/// When the numerator or denominator is too long for its half, the padding
/// on that side drops to zero and the result grows past `width`; nothing is
/// truncated.
pub fn center_fraction(f: &Fraction, width: usize) -> String {
    let num = f.numerator().to_string();
    let den = f.denominator().to_string();
    let slash = width / 2;
    let left = slash.saturating_sub(num.len());
    let right = (width - slash).saturating_sub(1 + den.len());
    format!("{:left$}{num}/{den}{:right$}", "", "")
}

/// Assemble one report row.
///
/// `date` is the already-normalized start date and `date_width` its column
/// width ([`SOURCE_DATE_WIDTH`] or [`FORMATTED_DATE_WIDTH`]).
pub fn assemble_row(
    record: &FlareRecord,
    derived: &DerivedRecord,
    date: &str,
    date_width: usize,
) -> String {
    format!(
        "{id:>ID_WIDTH$}{date:>date_width$}{start:>TIME_WIDTH$}{peak_time:>TIME_WIDTH$}{end:>TIME_WIDTH$}\
         {duration:>DURATION_WIDTH$} {peak:PEAK_INT_WIDTH$} ({peak_frac}) {rate:RATE_INT_WIDTH$} ({rate_frac}) ({total_frac}) \
         {detectors:>DETECTORS_WIDTH$}",
        id = record.flare_id,
        start = record.start_time,
        peak_time = record.peak_time,
        end = record.end_time,
        duration = derived.duration_seconds,
        peak = record.peak,
        peak_frac = center_fraction(&derived.peak, FRACTION_WIDTH),
        rate = record.average_rate,
        rate_frac = center_fraction(&derived.average_rate, FRACTION_WIDTH),
        total_frac = center_fraction(&derived.total_count, FRACTION_WIDTH),
        detectors = record.detectors,
    )
}
