//! Error types for the helios-resample crate.

/// Error type for all fallible operations in the helios-resample crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResampleError {
    /// Returned when the input series is empty.
    #[error("input series is empty")]
    EmptyData,

    /// Returned when values and timestamps have different lengths.
    #[error("values: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Expected length (the timestamp count).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when timestamps are not strictly increasing.
    #[error("timestamps must be strictly increasing: t[{index}] does not advance")]
    NonIncreasingTimestamps {
        /// Index of the first offending timestamp.
        index: usize,
    },

    /// Returned under [`LeadingGap::Error`](crate::LeadingGap) when rows
    /// precede the first defined hourly aggregate and so have no prior
    /// value to fill from.
    #[error(
        "{rows} leading row(s) precede the first defined hourly aggregate (first at t={first_timestamp})"
    )]
    UndefinedAlignment {
        /// Number of rows without a defined aggregate.
        rows: usize,
        /// Timestamp of the first undefined row.
        first_timestamp: i64,
    },
}
