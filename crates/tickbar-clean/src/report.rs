//! Aggregate drop accounting.

/// Counts collected while sanitizing a batch of raw rows.
///
/// These are progress information, not errors: a batch with many dropped
/// rows still succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CleanReport {
    /// Total rows inspected.
    pub rows_seen: u64,
    /// Rows dropped for field-count or syntax defects.
    pub dropped_malformed: u64,
    /// Rows dropped for non-positive price or volume.
    pub dropped_out_of_range: u64,
}

impl CleanReport {
    /// Total rows dropped for any reason.
    #[must_use]
    pub const fn dropped(&self) -> u64 {
        self.dropped_malformed + self.dropped_out_of_range
    }

    /// Rows that survived cleaning.
    #[must_use]
    pub const fn retained(&self) -> u64 {
        self.rows_seen - self.dropped()
    }

    /// Merges counts from another report into this one.
    pub const fn absorb(&mut self, other: &Self) {
        self.rows_seen += other.rows_seen;
        self.dropped_malformed += other.dropped_malformed;
        self.dropped_out_of_range += other.dropped_out_of_range;
    }
}

impl std::fmt::Display for CleanReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows seen, {} retained ({} malformed, {} out of range)",
            self.rows_seen,
            self.retained(),
            self.dropped_malformed,
            self.dropped_out_of_range
        )
    }
}
