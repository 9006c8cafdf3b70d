//! Quantities computed from a parsed flare record.

use crate::datetime::elapsed_seconds;
use crate::error::FractionResult;
use crate::fraction::Fraction;
use crate::record::FlareRecord;

/// Exact values derived from one [`FlareRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedRecord {
    pub peak: Fraction,
    pub average_rate: Fraction,
    /// Seconds from start to end, corrected once for a midnight crossing.
    pub duration_seconds: i64,
    /// `average_rate * duration_seconds`.
    pub total_count: Fraction,
}

impl DerivedRecord {
    pub fn from_record(record: &FlareRecord) -> FractionResult<Self> {
        let peak = record.peak.to_fraction()?;
        let average_rate = record.average_rate.to_fraction()?;

        let duration_seconds =
            elapsed_seconds(record.start_time.seconds(), record.end_time.seconds());

        let total_count = average_rate.multiply(Fraction::from_integer(duration_seconds))?;

        Ok(Self {
            peak,
            average_rate,
            duration_seconds,
            total_count,
        })
    }
}
