//! Run-wide ingestion statistics

use log::info;

/// Accumulator for the two run-wide scalars that fix triangle dimensions:
/// the earliest origin year seen and the greatest development span.
///
/// Both move monotonically during ingestion (the year only down, the span
/// only up). The stats are threaded through the ingestion fold as an
/// explicit value rather than mutated as a side effect of parsing, so the
/// fold stays a pure reduction over records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    earliest_origin_year: Option<i32>,
    greatest_span: usize,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record's years into the statistics.
    pub fn observe(&mut self, origin_year: i32, development_year: i32) {
        if self.earliest_origin_year.is_none_or(|year| origin_year < year) {
            self.earliest_origin_year = Some(origin_year);
            info!("updated earliest origin year to {origin_year}");
        }

        // Span counts development periods inclusive of the origin year; a
        // record with development year before origin year contributes nothing.
        let span = (development_year - origin_year + 1).max(0) as usize;
        if span > self.greatest_span {
            self.greatest_span = span;
            info!("updated greatest span to {span}");
        }
    }

    /// Combine the statistics of two ingestion folds.
    pub fn merge(&mut self, other: RunStats) {
        if let Some(year) = other.earliest_origin_year {
            if self.earliest_origin_year.is_none_or(|current| year < current) {
                self.earliest_origin_year = Some(year);
            }
        }
        self.greatest_span = self.greatest_span.max(other.greatest_span);
    }

    /// Minimum origin year over all observed records, `None` before the
    /// first record.
    pub fn earliest_origin_year(&self) -> Option<i32> {
        self.earliest_origin_year
    }

    /// Maximum of `development_year - origin_year + 1` over all observed
    /// records, 0 before the first record.
    pub fn greatest_span(&self) -> usize {
        self.greatest_span
    }
}
