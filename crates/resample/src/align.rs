//! Backward as-of alignment of hourly aggregates onto native timestamps.

use tracing::debug;

use crate::aggregate::HourlySeries;
use crate::error::ResampleError;

/// Policy for native rows that precede the first defined hourly aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadingGap {
    /// Fail the call with [`ResampleError::UndefinedAlignment`].
    Error,
    /// Leave the affected rows NaN so per-row undefined semantics apply.
    Undefined,
}

/// Joins an hourly series backward onto native timestamps.
///
/// Each native row receives the aggregate of the most recent bucket whose
/// start is at or before the row's timestamp. Rows before the first
/// bucket get NaN. Bucket means that are themselves NaN are passed
/// through; [`forward_fill`] closes those gaps afterwards.
pub fn asof_backward(hourly: &HourlySeries, timestamps: &[i64]) -> Vec<f64> {
    let hours = hourly.hours();
    let means = hourly.means();
    let mut out = Vec::with_capacity(timestamps.len());
    let mut idx = 0usize;

    for &ts in timestamps {
        while idx + 1 < hours.len() && hours[idx + 1] <= ts {
            idx += 1;
        }
        if hours.is_empty() || hours[idx] > ts {
            out.push(f64::NAN);
        } else {
            out.push(means[idx]);
        }
    }
    out
}

/// Fills NaN gaps with the last defined value, propagating forward in
/// time. Leading NaNs (no prior defined value) are left untouched.
/// Returns the number of rows filled.
pub fn forward_fill(values: &mut [f64]) -> usize {
    let mut last: Option<f64> = None;
    let mut filled = 0usize;
    for v in values.iter_mut() {
        if v.is_nan() {
            if let Some(fill) = last {
                *v = fill;
                filled += 1;
            }
        } else {
            last = Some(*v);
        }
    }
    filled
}

/// Aggregates a native series to hourly means and aligns them back onto
/// the native timestamps: hourly mean, backward as-of join, forward fill.
///
/// Every native row receives the mean of its enclosing hour (the full
/// bucket, not a running partial mean); rows whose enclosing bucket is
/// undefined inherit the most recent defined bucket.
///
/// # Errors
///
/// Propagates [`hourly_mean`](crate::hourly_mean) validation errors.
/// Under [`LeadingGap::Error`], rows that precede the first defined
/// aggregate fail the call with [`ResampleError::UndefinedAlignment`];
/// under [`LeadingGap::Undefined`] they stay NaN in the output.
pub fn align_hourly(
    timestamps: &[i64],
    values: &[f64],
    leading: LeadingGap,
) -> Result<Vec<f64>, ResampleError> {
    let hourly = crate::aggregate::hourly_mean(timestamps, values)?;
    let mut aligned = asof_backward(&hourly, timestamps);
    let filled = forward_fill(&mut aligned);

    let undefined = aligned.iter().take_while(|v| v.is_nan()).count();
    debug!(
        buckets = hourly.len(),
        filled, undefined, "hourly alignment"
    );

    if undefined > 0 && leading == LeadingGap::Error {
        return Err(ResampleError::UndefinedAlignment {
            rows: undefined,
            first_timestamp: timestamps[0],
        });
    }
    Ok(aligned)
}
