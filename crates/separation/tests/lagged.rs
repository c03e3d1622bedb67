use approx::assert_relative_eq;
use helios_separation::{ModelId, evaluate};
use helios_table::{Column, TimeTable};

/// Two hours of 10-minute data; the clearness index differs per hour so
/// the hourly aggregates differ too.
fn two_hour_table(kt_hour0: f64, kt_hour1: f64) -> TimeTable {
    let n = 12;
    let ts: Vec<i64> = (0..n as i64).map(|i| i * 600).collect();
    let kt: Vec<f64> = (0..n)
        .map(|i| if i < 6 { kt_hour0 } else { kt_hour1 })
        .collect();
    TimeTable::new(ts)
        .unwrap()
        .with_column(Column::ClearnessIndex, kt)
        .unwrap()
        .with_column(Column::ApparentSolarTime, vec![11.0; n])
        .unwrap()
        .with_column(Column::SolarAltitude, vec![40.0; n])
        .unwrap()
        .with_column(Column::ClearSkyDeviation, vec![0.08; n])
        .unwrap()
        .with_column(Column::CloudEnhancement, vec![0.01; n])
        .unwrap()
}

/// The Yang form applied by hand with its published constants.
fn yang_by_hand(kt: f64, lag: f64) -> f64 {
    let (c2, b0, b1, b2, b3, b4, b5, b6) = (
        0.0361, -0.5744, 4.3184, -0.0011, 0.0004, -4.7952, 1.4414, -2.8396,
    );
    let z = b0 + b1 * kt + b2 * 11.0 + b3 * 40.0 + b4 * 0.08 + b6 * lag;
    c2 + (1.0 - c2) / (1.0 + z.exp()) + b5 * 0.01
}

#[test]
fn each_row_sees_its_hours_engerer2_mean() {
    let table = two_hour_table(0.3, 0.6);

    // The intermediate series is the public engerer2 model itself.
    let engerer2 = evaluate(ModelId::Engerer2, &table).unwrap();
    let mean_hour0: f64 = engerer2[..6].iter().sum::<f64>() / 6.0;
    let mean_hour1: f64 = engerer2[6..].iter().sum::<f64>() / 6.0;

    let kd = evaluate(ModelId::Yang4, &table).unwrap();
    for (i, &v) in kd.iter().enumerate() {
        let (kt, lag) = if i < 6 {
            (0.3, mean_hour0)
        } else {
            (0.6, mean_hour1)
        };
        assert_relative_eq!(v, yang_by_hand(kt, lag), max_relative = 1e-12);
    }
}

#[test]
fn lag_is_the_full_hour_mean_not_a_running_one() {
    // With varying within-hour inputs, the first row of the hour must
    // already carry the whole hour's mean.
    let n = 6;
    let ts: Vec<i64> = (0..n as i64).map(|i| i * 600).collect();
    let kt: Vec<f64> = (0..n).map(|i| 0.2 + 0.1 * i as f64).collect();
    let table = TimeTable::new(ts)
        .unwrap()
        .with_column(Column::ClearnessIndex, kt.clone())
        .unwrap()
        .with_column(Column::ApparentSolarTime, vec![11.0; n])
        .unwrap()
        .with_column(Column::SolarAltitude, vec![40.0; n])
        .unwrap()
        .with_column(Column::ClearSkyDeviation, vec![0.08; n])
        .unwrap()
        .with_column(Column::CloudEnhancement, vec![0.01; n])
        .unwrap();

    let engerer2 = evaluate(ModelId::Engerer2, &table).unwrap();
    let mean: f64 = engerer2.iter().sum::<f64>() / n as f64;

    let kd = evaluate(ModelId::Yang4, &table).unwrap();
    assert_relative_eq!(kd[0], yang_by_hand(kt[0], mean), max_relative = 1e-12);
    assert_relative_eq!(kd[5], yang_by_hand(kt[5], mean), max_relative = 1e-12);
}

#[test]
fn rows_before_the_first_defined_aggregate_are_undefined() {
    // Hour 0 is entirely NaN: its rows have no aggregate to fill from
    // and come back undefined instead of defaulting to zero. Hour 1 is
    // untouched.
    let table = two_hour_table(f64::NAN, 0.6);
    let kd = evaluate(ModelId::Yang4, &table).unwrap();
    assert!(kd[..6].iter().all(|v| v.is_nan()));
    assert!(kd[6..].iter().all(|v| v.is_finite()));

    // The defined rows match the clean-table result for the same hour.
    let clean = evaluate(ModelId::Yang4, &two_hour_table(0.6, 0.6)).unwrap();
    assert_relative_eq!(kd[6], clean[6], max_relative = 1e-12);
}

#[test]
fn interior_gap_inherits_the_most_recent_hour() {
    // Hour 1 is NaN; its rows fall back to hour 0's aggregate.
    let table = two_hour_table(0.3, f64::NAN);
    let kd = evaluate(ModelId::Yang4, &table).unwrap();
    // Hour-1 rows have NaN predictors, so their output is NaN anyway;
    // hour-0 rows must be clean.
    assert!(kd[..6].iter().all(|v| v.is_finite()));
    assert!(kd[6..].iter().all(|v| v.is_nan()));
}

#[test]
fn empty_table_evaluates_to_empty_series() {
    let table = TimeTable::new(Vec::new())
        .unwrap()
        .with_column(Column::ClearnessIndex, Vec::new())
        .unwrap()
        .with_column(Column::ApparentSolarTime, Vec::new())
        .unwrap()
        .with_column(Column::SolarAltitude, Vec::new())
        .unwrap()
        .with_column(Column::ClearSkyDeviation, Vec::new())
        .unwrap()
        .with_column(Column::CloudEnhancement, Vec::new())
        .unwrap();
    let kd = evaluate(ModelId::Yang4, &table).unwrap();
    assert!(kd.is_empty());
}
