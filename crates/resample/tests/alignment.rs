use approx::assert_relative_eq;
use helios_resample::{LeadingGap, ResampleError, align_hourly, hourly_mean};

/// Helper: a 10-minute index of `n` rows starting at `start` seconds.
fn ten_minute_index(start: i64, n: usize) -> Vec<i64> {
    (0..n as i64).map(|i| start + i * 600).collect()
}

#[test]
fn every_row_sees_its_enclosing_hour_mean() {
    // Three full hours of 10-minute data with distinct per-hour values.
    let ts = ten_minute_index(0, 18);
    let vals: Vec<f64> = (0..18).map(|i| (i / 6) as f64 * 10.0 + (i % 6) as f64).collect();

    let aligned = align_hourly(&ts, &vals, LeadingGap::Error).unwrap();

    for (i, &v) in aligned.iter().enumerate() {
        let hour = i / 6;
        let expected: f64 =
            (0..6).map(|j| (hour * 10 + j) as f64).sum::<f64>() / 6.0;
        assert_relative_eq!(v, expected, max_relative = 1e-12);
    }
}

#[test]
fn alignment_is_full_hour_not_running_mean() {
    // The first row of an hour must already see the whole hour's mean,
    // not a partial mean up to its own timestamp.
    let ts = ten_minute_index(0, 6);
    let vals = vec![0.0, 0.0, 0.0, 0.0, 0.0, 6.0];
    let aligned = align_hourly(&ts, &vals, LeadingGap::Error).unwrap();
    assert_relative_eq!(aligned[0], 1.0);
}

#[test]
fn mid_hour_start_uses_floor_bucket() {
    // Data starting at half past still buckets to the hour floor, so the
    // first rows are defined (their own bucket starts at or before them).
    let ts = ten_minute_index(1800, 6);
    let vals = vec![1.0, 2.0, 3.0, 10.0, 20.0, 30.0];
    let aligned = align_hourly(&ts, &vals, LeadingGap::Error).unwrap();
    assert_relative_eq!(aligned[0], 2.0);
    assert_relative_eq!(aligned[1], 2.0);
    assert_relative_eq!(aligned[2], 2.0);
    assert_relative_eq!(aligned[3], 20.0);
}

#[test]
fn undefined_leading_rows_are_reported_not_zeroed() {
    let ts = ten_minute_index(0, 12);
    let mut vals = vec![0.7; 12];
    for v in vals.iter_mut().take(6) {
        *v = f64::NAN;
    }

    let err = align_hourly(&ts, &vals, LeadingGap::Error).unwrap_err();
    match err {
        ResampleError::UndefinedAlignment {
            rows,
            first_timestamp,
        } => {
            assert_eq!(rows, 6);
            assert_eq!(first_timestamp, 0);
        }
        other => panic!("expected UndefinedAlignment, got {other:?}"),
    }

    let aligned = align_hourly(&ts, &vals, LeadingGap::Undefined).unwrap();
    assert!(aligned[..6].iter().all(|v| v.is_nan()));
    assert!(aligned[6..].iter().all(|&v| v == 0.7));
}

#[test]
fn hourly_means_skip_nan_rows() {
    let ts = ten_minute_index(0, 6);
    let vals = vec![1.0, f64::NAN, 3.0, f64::NAN, 5.0, f64::NAN];
    let hourly = hourly_mean(&ts, &vals).unwrap();
    assert_eq!(hourly.len(), 1);
    assert_relative_eq!(hourly.means()[0], 3.0);
}
