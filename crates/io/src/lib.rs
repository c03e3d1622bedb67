//! # helios-io
//!
//! Parquet boundary for the helios separation models: read predictor
//! tables (a `timestamp` index plus any subset of the canonical
//! `Float64` predictor columns) into [`helios_table::TimeTable`]s, and
//! write kd output next to its time index. Schema mismatches are
//! accumulated and reported together rather than one at a time.

mod error;
mod read;
mod write;

pub use error::IoError;
pub use read::read_table;
pub use write::{Compression, WriterConfig, write_kd};
