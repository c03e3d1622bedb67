use approx::assert_relative_eq;
use helios_separation::{ModelId, evaluate};
use helios_table::{Column, TimeTable};

/// One row with every Starke predictor; `kt` and `k_csi` drive the
/// branch predicate.
fn starke_row(kt: f64, k_csi: f64) -> TimeTable {
    TimeTable::new(vec![0])
        .unwrap()
        .with_column(Column::ClearnessIndex, vec![kt])
        .unwrap()
        .with_column(Column::ApparentSolarTime, vec![10.0])
        .unwrap()
        .with_column(Column::SolarAltitude, vec![50.0])
        .unwrap()
        .with_column(Column::DailyClearness, vec![0.6])
        .unwrap()
        .with_column(Column::Persistence, vec![0.6])
        .unwrap()
        .with_column(Column::ClearSkyGlobal, vec![820.0])
        .unwrap()
        .with_column(Column::HourlyClearness, vec![kt])
        .unwrap()
        .with_column(Column::ClearSkyIndex, vec![k_csi])
        .unwrap()
}

fn kd_at(model: ModelId, kt: f64, k_csi: f64) -> f64 {
    evaluate(model, &starke_row(kt, k_csi)).unwrap()[0]
}

#[test]
fn ratio_threshold_is_inclusive() {
    // k_csi exactly at 1.05 already selects the enhancement branch: the
    // result matches a clearly-enhanced row and differs from a baseline
    // one. The predicate's ratio test is >=, not >.
    for model in [ModelId::Starke1, ModelId::Starke2] {
        let at_boundary = kd_at(model, 0.70, 1.05);
        let well_above = kd_at(model, 0.70, 1.50);
        let below = kd_at(model, 0.70, 1.04);
        assert_relative_eq!(at_boundary, well_above, max_relative = 1e-14);
        assert!((at_boundary - below).abs() > 1e-6, "{model} did not switch");
    }
}

#[test]
fn clearness_cutoff_is_strict() {
    // kt exactly at the cutoff stays on the baseline branch regardless
    // of the ratio.
    for model in [ModelId::Starke1, ModelId::Starke2] {
        let at_cutoff = kd_at(model, 0.65, 1.20);
        let baseline = kd_at(model, 0.65, 0.90);
        assert_relative_eq!(at_cutoff, baseline, max_relative = 1e-14);
    }
}

#[test]
fn climate_family_uses_the_higher_cutoff() {
    // kt = 0.70 crosses the regional cutoff (0.65) but not the climate
    // one (0.75): the regional models switch, the climate models don't.
    for model in [ModelId::Starke1, ModelId::Starke2] {
        let enhanced = kd_at(model, 0.70, 1.20);
        let baseline = kd_at(model, 0.70, 0.90);
        assert!((enhanced - baseline).abs() > 1e-6, "{model} did not switch");
    }
    for model in [
        ModelId::Starke3A,
        ModelId::Starke3B,
        ModelId::Starke3C,
        ModelId::Starke3D,
        ModelId::Starke3E,
    ] {
        let high_ratio = kd_at(model, 0.70, 1.20);
        let low_ratio = kd_at(model, 0.70, 0.90);
        assert_relative_eq!(high_ratio, low_ratio, max_relative = 1e-14);
    }
}

#[test]
fn climate_family_switches_past_its_cutoff() {
    for model in [
        ModelId::Starke3A,
        ModelId::Starke3B,
        ModelId::Starke3C,
        ModelId::Starke3D,
        ModelId::Starke3E,
    ] {
        let enhanced = kd_at(model, 0.80, 1.05);
        let baseline = kd_at(model, 0.80, 0.90);
        assert!((enhanced - baseline).abs() > 1e-6, "{model} did not switch");
    }
}

#[test]
fn switch_is_per_row() {
    // Mixed rows in one table: each row takes its own branch.
    let table = TimeTable::new(vec![0, 600])
        .unwrap()
        .with_column(Column::ClearnessIndex, vec![0.70, 0.70])
        .unwrap()
        .with_column(Column::ApparentSolarTime, vec![10.0, 10.0])
        .unwrap()
        .with_column(Column::SolarAltitude, vec![50.0, 50.0])
        .unwrap()
        .with_column(Column::DailyClearness, vec![0.6, 0.6])
        .unwrap()
        .with_column(Column::Persistence, vec![0.6, 0.6])
        .unwrap()
        .with_column(Column::ClearSkyGlobal, vec![820.0, 820.0])
        .unwrap()
        .with_column(Column::ClearSkyIndex, vec![1.20, 0.90])
        .unwrap();
    let kd = evaluate(ModelId::Starke1, &table).unwrap();
    assert_relative_eq!(kd[0], kd_at(ModelId::Starke1, 0.70, 1.20), max_relative = 1e-14);
    assert_relative_eq!(kd[1], kd_at(ModelId::Starke1, 0.70, 0.90), max_relative = 1e-14);
}
