//! Hourly bucket means of a sub-hourly series.

use crate::error::ResampleError;

/// Seconds per hour bucket.
const HOUR: i64 = 3600;

/// An hourly aggregate series: one mean per hour bucket that contains at
/// least one native row.
///
/// Bucket timestamps are the bucket start (hour floor) in epoch seconds,
/// strictly increasing. A bucket whose native rows are all NaN keeps a
/// NaN mean; it still occupies its slot so that alignment can fill over it.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySeries {
    hours: Vec<i64>,
    means: Vec<f64>,
}

impl HourlySeries {
    /// Returns the bucket start timestamps.
    pub fn hours(&self) -> &[i64] {
        &self.hours
    }

    /// Returns the bucket means.
    pub fn means(&self) -> &[f64] {
        &self.means
    }

    /// Returns the number of buckets.
    pub fn len(&self) -> usize {
        self.hours.len()
    }

    /// Returns `true` if there are no buckets.
    pub fn is_empty(&self) -> bool {
        self.hours.is_empty()
    }
}

/// Floors a timestamp to its hour bucket start.
///
/// Uses Euclidean division so pre-epoch timestamps bucket correctly.
fn hour_floor(ts: i64) -> i64 {
    ts.div_euclid(HOUR) * HOUR
}

/// Aggregates a native-resolution series to hourly arithmetic means.
///
/// NaN values are skipped within a bucket (the mean covers the defined
/// rows only); a bucket with no defined rows gets a NaN mean.
///
/// # Errors
///
/// Returns [`ResampleError::EmptyData`] for an empty series,
/// [`ResampleError::LengthMismatch`] if `values` and `timestamps` differ
/// in length, and [`ResampleError::NonIncreasingTimestamps`] if the time
/// index is not strictly increasing.
pub fn hourly_mean(timestamps: &[i64], values: &[f64]) -> Result<HourlySeries, ResampleError> {
    if timestamps.is_empty() {
        return Err(ResampleError::EmptyData);
    }
    if values.len() != timestamps.len() {
        return Err(ResampleError::LengthMismatch {
            expected: timestamps.len(),
            got: values.len(),
        });
    }

    let mut hours: Vec<i64> = Vec::new();
    let mut means: Vec<f64> = Vec::new();
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut current = hour_floor(timestamps[0]);

    for (i, (&ts, &v)) in timestamps.iter().zip(values.iter()).enumerate() {
        if i > 0 && ts <= timestamps[i - 1] {
            return Err(ResampleError::NonIncreasingTimestamps { index: i });
        }
        let bucket = hour_floor(ts);
        if bucket != current {
            hours.push(current);
            means.push(bucket_mean(sum, count));
            sum = 0.0;
            count = 0;
            current = bucket;
        }
        if v.is_finite() {
            sum += v;
            count += 1;
        }
    }
    hours.push(current);
    means.push(bucket_mean(sum, count));

    tracing::debug!(buckets = hours.len(), rows = timestamps.len(), "hourly aggregation");
    Ok(HourlySeries { hours, means })
}

fn bucket_mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}
