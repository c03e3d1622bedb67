//! Time-indexed predictor table shared by all helios separation models.
//!
//! A [`TimeTable`] is an owned columnar store: one strictly increasing
//! vector of Unix-epoch timestamps plus named `f64` columns drawn from the
//! closed [`Column`] schema. Models read columns through
//! [`TimeTable::column()`], which fails early and precisely when a
//! required column is absent.
//!
//! NaN values are valid *contents*: they mark undefined predictor rows and
//! are expected to propagate through model arithmetic rather than being
//! rejected at construction.
//!
//! # Quick start
//!
//! ```
//! use helios_table::{Column, TimeTable};
//!
//! let table = TimeTable::new(vec![0, 600, 1200])?
//!     .with_column(Column::ClearnessIndex, vec![0.3, 0.5, 0.7])?;
//! assert_eq!(table.column(Column::ClearnessIndex)?, &[0.3, 0.5, 0.7]);
//! # Ok::<(), helios_table::TableError>(())
//! ```

mod error;
mod schema;
mod table;

pub use error::TableError;
pub use schema::Column;
pub use table::TimeTable;
