//! Error types for the helios-table crate.

use crate::schema::Column;

/// Error type for all fallible operations in the helios-table crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// Returned when a model requires a column the table does not carry.
    #[error("required column '{column}' is missing from the table")]
    MissingColumn {
        /// The absent column.
        column: Column,
    },

    /// Returned when a column's length does not match the timestamp count.
    #[error("column '{column}': expected {expected} values, got {got}")]
    LengthMismatch {
        /// The offending column.
        column: Column,
        /// Expected length (the timestamp count).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when timestamps are not strictly increasing.
    #[error("timestamps must be strictly increasing: t[{index}] = {current} follows {previous}")]
    NonIncreasingTimestamps {
        /// Index of the first offending timestamp.
        index: usize,
        /// Timestamp at `index - 1`.
        previous: i64,
        /// Timestamp at `index`.
        current: i64,
    },
}
