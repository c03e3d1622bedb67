//! Parquet reading: predictor tables into [`TimeTable`]s.

use std::path::Path;

use arrow::array::{Array, AsArray, RecordBatch};
use arrow::datatypes::{DataType, Float64Type, Int64Type, Schema};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use helios_table::{Column, TimeTable};

use crate::error::IoError;

/// Name of the mandatory time-index column.
const TIMESTAMP: &str = "timestamp";

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
fn read_batches(path: &Path) -> Result<Vec<RecordBatch>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    let batches: Vec<RecordBatch> =
        reader
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| IoError::Parquet {
                reason: e.to_string(),
            })?;

    Ok(batches)
}

/// Validates a predictor-table schema: an `Int64` `timestamp` column
/// first, then any subset of the canonical predictor columns, each
/// `Float64`. Returns the recognised columns in field order.
///
/// # Errors
///
/// Returns [`IoError::Validation`] with every mismatch accumulated:
/// wrong first column, unknown column names, wrong data types, and
/// duplicated columns.
fn validate_schema(schema: &Schema) -> Result<Vec<Column>, IoError> {
    let mut mismatches: Vec<String> = Vec::new();
    let mut columns: Vec<Column> = Vec::new();

    if schema.fields().is_empty() {
        mismatches.push("file has no columns".to_string());
    } else {
        let first = schema.field(0);
        if first.name() != TIMESTAMP {
            mismatches.push(format!(
                "column 0: expected '{TIMESTAMP}', got '{}'",
                first.name()
            ));
        } else if first.data_type() != &DataType::Int64 {
            mismatches.push(format!(
                "column '{TIMESTAMP}': expected Int64, got {}",
                first.data_type()
            ));
        }
    }

    for field in schema.fields().iter().skip(1) {
        match Column::parse(field.name()) {
            None => {
                mismatches.push(format!("unknown column '{}'", field.name()));
            }
            Some(column) => {
                if field.data_type() != &DataType::Float64 {
                    mismatches.push(format!(
                        "column '{column}': expected Float64, got {}",
                        field.data_type()
                    ));
                } else if columns.contains(&column) {
                    mismatches.push(format!("column '{column}' appears more than once"));
                } else {
                    columns.push(column);
                }
            }
        }
    }

    if !mismatches.is_empty() {
        return Err(IoError::Validation {
            count: mismatches.len(),
            details: mismatches.join("; "),
        });
    }

    Ok(columns)
}

/// Reads a predictor table from a Parquet file.
///
/// The file must carry an `Int64` `timestamp` column (Unix epoch
/// seconds, strictly increasing) followed by any subset of the canonical
/// predictor columns as `Float64`. Null predictor values become NaN, the
/// table's undefined-row marker; null timestamps are rejected.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`], [`IoError::Parquet`],
/// [`IoError::Validation`] for schema mismatches, or
/// [`IoError::Table`] if the time index fails table construction.
pub fn read_table(path: &Path) -> Result<TimeTable, IoError> {
    let batches = read_batches(path)?;

    let Some(first) = batches.first() else {
        return Ok(TimeTable::new(Vec::new())?);
    };
    let columns = validate_schema(first.schema().as_ref())?;

    let mut timestamps: Vec<i64> = Vec::new();
    let mut values: Vec<Vec<f64>> = vec![Vec::new(); columns.len()];

    for batch in &batches {
        let ts_col = batch.column(0).as_primitive::<Int64Type>();
        if ts_col.null_count() > 0 {
            return Err(IoError::Validation {
                count: 1,
                details: format!("column '{TIMESTAMP}' contains nulls"),
            });
        }
        timestamps.extend(ts_col.values().iter().copied());

        for (j, out) in values.iter_mut().enumerate() {
            let col = batch.column(j + 1).as_primitive::<Float64Type>();
            for row in 0..batch.num_rows() {
                out.push(if col.is_null(row) {
                    f64::NAN
                } else {
                    col.value(row)
                });
            }
        }
    }

    let mut table = TimeTable::new(timestamps)?;
    for (column, vals) in columns.into_iter().zip(values) {
        table = table.with_column(column, vals)?;
    }
    Ok(table)
}
