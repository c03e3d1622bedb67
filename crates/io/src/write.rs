//! Parquet writing: kd output next to its time index.

use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, Int64Array, RecordBatch};
use arrow::datatypes::{DataType, Field, Schema};
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use helios_table::Column;

use crate::error::IoError;

/// Compression algorithm for Parquet output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Compression {
    /// No compression.
    None,
    /// Snappy compression (fast, moderate ratio).
    #[default]
    Snappy,
    /// Zstd compression (slower, better ratio).
    Zstd,
}

impl Compression {
    /// Converts to the corresponding `parquet::basic::Compression` variant.
    fn to_parquet(self) -> Result<parquet::basic::Compression, IoError> {
        Ok(match self {
            Self::None => parquet::basic::Compression::UNCOMPRESSED,
            Self::Snappy => parquet::basic::Compression::SNAPPY,
            Self::Zstd => {
                let level =
                    parquet::basic::ZstdLevel::try_new(3).map_err(|e| IoError::Parquet {
                        reason: e.to_string(),
                    })?;
                parquet::basic::Compression::ZSTD(level)
            }
        })
    }
}

impl FromStr for Compression {
    type Err = IoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "snappy" => Ok(Self::Snappy),
            "zstd" => Ok(Self::Zstd),
            other => Err(IoError::Validation {
                count: 1,
                details: format!("unknown compression '{other}' (expected none, snappy, or zstd)"),
            }),
        }
    }
}

/// Configuration for writing kd output to Parquet.
#[derive(Debug, Clone)]
pub struct WriterConfig {
    compression: Compression,
    row_group_size: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            compression: Compression::default(),
            row_group_size: 1_000_000,
        }
    }
}

impl WriterConfig {
    /// Sets the compression algorithm.
    pub fn with_compression(mut self, comp: Compression) -> Self {
        self.compression = comp;
        self
    }

    /// Sets the maximum number of rows per row group.
    pub fn with_row_group_size(mut self, size: usize) -> Self {
        self.row_group_size = size;
        self
    }

    /// Validates this configuration.
    fn validate(&self) -> Result<(), IoError> {
        if self.row_group_size == 0 {
            return Err(IoError::Validation {
                count: 1,
                details: "row_group_size must be greater than 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Writes a kd series and its time index to a two-column Parquet file
/// (`timestamp` Int64, `diffuse_fraction` Float64). NaN rows are written
/// as NaN, keeping undefined output observable downstream.
///
/// # Errors
///
/// Returns [`IoError::Validation`] if the configuration is invalid or
/// the series length does not match the time index, or
/// [`IoError::Parquet`] if batch construction or file I/O fails.
pub fn write_kd(
    path: &Path,
    timestamps: &[i64],
    kd: &[f64],
    config: &WriterConfig,
) -> Result<(), IoError> {
    config.validate()?;
    if kd.len() != timestamps.len() {
        return Err(IoError::Validation {
            count: 1,
            details: format!(
                "kd series has {} value(s) for {} timestamp(s)",
                kd.len(),
                timestamps.len()
            ),
        });
    }

    let schema = Schema::new(vec![
        Field::new("timestamp", DataType::Int64, false),
        Field::new(Column::DiffuseFraction.name(), DataType::Float64, false),
    ]);

    let ts_col: ArrayRef = Arc::new(Int64Array::from(timestamps.to_vec()));
    let kd_col: ArrayRef = Arc::new(Float64Array::from(kd.to_vec()));
    let batch = RecordBatch::try_new(Arc::new(schema.clone()), vec![ts_col, kd_col])?;

    let props = WriterProperties::builder()
        .set_compression(config.compression.to_parquet()?)
        .set_max_row_group_size(config.row_group_size)
        .build();

    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema), Some(props))?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(())
}
