//! Owned columnar storage keyed by the closed column schema.

use std::collections::BTreeMap;

use crate::error::TableError;
use crate::schema::Column;

/// A time-indexed table of predictor columns.
///
/// Timestamps are Unix epoch seconds and must be strictly increasing,
/// which makes them unique. Every column holds exactly one `f64` per
/// timestamp. The table is read-only once built; evaluation never
/// mutates it.
///
/// An empty table (zero rows) is valid and evaluates to an empty series.
#[derive(Debug, Clone)]
pub struct TimeTable {
    timestamps: Vec<i64>,
    columns: BTreeMap<Column, Vec<f64>>,
}

impl TimeTable {
    /// Creates a table from its time index.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::NonIncreasingTimestamps`] if any timestamp is
    /// not strictly greater than its predecessor.
    pub fn new(timestamps: Vec<i64>) -> Result<Self, TableError> {
        for (i, pair) in timestamps.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(TableError::NonIncreasingTimestamps {
                    index: i + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }
        Ok(Self {
            timestamps,
            columns: BTreeMap::new(),
        })
    }

    /// Adds (or replaces) a column.
    ///
    /// NaN values are accepted: they mark undefined rows and propagate
    /// through model arithmetic instead of being silently coerced.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::LengthMismatch`] if `values` does not have
    /// one entry per timestamp.
    pub fn with_column(mut self, column: Column, values: Vec<f64>) -> Result<Self, TableError> {
        if values.len() != self.timestamps.len() {
            return Err(TableError::LengthMismatch {
                column,
                expected: self.timestamps.len(),
                got: values.len(),
            });
        }
        self.columns.insert(column, values);
        Ok(self)
    }

    /// Returns a column's values.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::MissingColumn`] if the table does not carry
    /// the column.
    pub fn column(&self, column: Column) -> Result<&[f64], TableError> {
        self.columns
            .get(&column)
            .map(Vec::as_slice)
            .ok_or(TableError::MissingColumn { column })
    }

    /// Returns `true` if the table carries the column.
    pub fn has_column(&self, column: Column) -> bool {
        self.columns.contains_key(&column)
    }

    /// Returns the columns present, in canonical order.
    pub fn columns(&self) -> impl Iterator<Item = Column> + '_ {
        self.columns.keys().copied()
    }

    /// Returns the time index.
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}
