//! Starke two-branch evaluators: per-row selection between a baseline
//! and a cloud-enhancement branch.

use helios_table::{Column, TableError, TimeTable};

use crate::closed_form::sigmoid;
use crate::coefficients::{StarkeClimateCoeffs, StarkeCoeffs};

/// Scaling applied to the clear-sky radiation term in the two-branch
/// regional fits (W m^-2 to MJ m^-2 h^-1). The climate family uses the
/// unscaled value.
const GHI_CLEAR_SKY_SCALE: f64 = 277.78;

/// Cloud-enhancement predicate: the clear-sky-index ratio at or above
/// 1.05 together with a clearness index strictly above `kt_cutoff`.
///
/// The switch is hard; a discontinuity in kd at the boundary is the
/// model's defined behaviour. NaN in either predictor compares false
/// and falls to the baseline branch, where the row's own NaN inputs
/// still propagate.
fn enhancement(k_csi: f64, kt: f64, kt_cutoff: f64) -> bool {
    k_csi >= 1.05 && kt > kt_cutoff
}

/// Two-branch regional form (Australia/Brazil fits). Both branches are
/// logistic over `[1, kt, ast, altitude, daily_kt, persistence,
/// ghi_clear_sky/277.78]`; rows satisfying the predicate (cutoff 0.65)
/// take the enhanced branch.
pub(crate) fn eval_starke(table: &TimeTable, c: &StarkeCoeffs) -> Result<Vec<f64>, TableError> {
    let kt = table.column(Column::ClearnessIndex)?;
    let ast = table.column(Column::ApparentSolarTime)?;
    let alt = table.column(Column::SolarAltitude)?;
    let daily = table.column(Column::DailyClearness)?;
    let pers = table.column(Column::Persistence)?;
    let ghi_cs = table.column(Column::ClearSkyGlobal)?;
    let k_csi = table.column(Column::ClearSkyIndex)?;

    let branch = |b: &[f64; 7], i: usize| {
        sigmoid(
            b[0] + b[1] * kt[i]
                + b[2] * ast[i]
                + b[3] * alt[i]
                + b[4] * daily[i]
                + b[5] * pers[i]
                + b[6] * ghi_cs[i] / GHI_CLEAR_SKY_SCALE,
        )
    };

    Ok((0..table.len())
        .map(|i| {
            if enhancement(k_csi[i], kt[i], 0.65) {
                branch(&c.enhanced, i)
            } else {
                branch(&c.baseline, i)
            }
        })
        .collect())
}

/// Climate-specific two-branch form (Köppen major classes). Branches add
/// an hourly-clearness term, use the unscaled clear-sky radiation, and
/// switch at the higher cutoff 0.75.
pub(crate) fn eval_starke_climate(
    table: &TimeTable,
    c: &StarkeClimateCoeffs,
) -> Result<Vec<f64>, TableError> {
    let kt = table.column(Column::ClearnessIndex)?;
    let ast = table.column(Column::ApparentSolarTime)?;
    let alt = table.column(Column::SolarAltitude)?;
    let daily = table.column(Column::DailyClearness)?;
    let pers = table.column(Column::Persistence)?;
    let ghi_cs = table.column(Column::ClearSkyGlobal)?;
    let hourly = table.column(Column::HourlyClearness)?;
    let k_csi = table.column(Column::ClearSkyIndex)?;

    let branch = |b: &[f64; 8], i: usize| {
        sigmoid(
            b[0] + b[1] * kt[i]
                + b[2] * ast[i]
                + b[3] * alt[i]
                + b[4] * daily[i]
                + b[5] * pers[i]
                + b[6] * ghi_cs[i]
                + b[7] * hourly[i],
        )
    };

    Ok((0..table.len())
        .map(|i| {
            if enhancement(k_csi[i], kt[i], 0.75) {
                branch(&c.enhanced, i)
            } else {
                branch(&c.baseline, i)
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::coefficients::{STARKE1, STARKE3_C};

    /// One-row table with every Starke predictor set.
    fn starke_row(kt: f64, k_csi: f64) -> TimeTable {
        TimeTable::new(vec![0])
            .unwrap()
            .with_column(Column::ClearnessIndex, vec![kt])
            .unwrap()
            .with_column(Column::ApparentSolarTime, vec![12.0])
            .unwrap()
            .with_column(Column::SolarAltitude, vec![45.0])
            .unwrap()
            .with_column(Column::DailyClearness, vec![0.5])
            .unwrap()
            .with_column(Column::Persistence, vec![0.5])
            .unwrap()
            .with_column(Column::ClearSkyGlobal, vec![800.0])
            .unwrap()
            .with_column(Column::HourlyClearness, vec![0.6])
            .unwrap()
            .with_column(Column::ClearSkyIndex, vec![k_csi])
            .unwrap()
    }

    fn baseline_value(kt: f64) -> f64 {
        let b = &STARKE1.baseline;
        sigmoid(
            b[0] + b[1] * kt
                + b[2] * 12.0
                + b[3] * 45.0
                + b[4] * 0.5
                + b[5] * 0.5
                + b[6] * 800.0 / GHI_CLEAR_SKY_SCALE,
        )
    }

    fn enhanced_value(kt: f64) -> f64 {
        let b = &STARKE1.enhanced;
        sigmoid(
            b[0] + b[1] * kt
                + b[2] * 12.0
                + b[3] * 45.0
                + b[4] * 0.5
                + b[5] * 0.5
                + b[6] * 800.0 / GHI_CLEAR_SKY_SCALE,
        )
    }

    #[test]
    fn predicate_boundary_is_inclusive_on_the_ratio() {
        // k_csi exactly 1.05 with kt above the cutoff selects enhanced.
        let kd = eval_starke(&starke_row(0.7, 1.05), &STARKE1).unwrap();
        assert_relative_eq!(kd[0], enhanced_value(0.7), max_relative = 1e-14);
    }

    #[test]
    fn predicate_is_strict_on_the_clearness_cutoff() {
        // kt exactly at 0.65 keeps the baseline branch.
        let kd = eval_starke(&starke_row(0.65, 1.10), &STARKE1).unwrap();
        assert_relative_eq!(kd[0], baseline_value(0.65), max_relative = 1e-14);
    }

    #[test]
    fn low_ratio_keeps_baseline() {
        let kd = eval_starke(&starke_row(0.7, 1.0), &STARKE1).unwrap();
        assert_relative_eq!(kd[0], baseline_value(0.7), max_relative = 1e-14);
    }

    #[test]
    fn switch_is_a_hard_discontinuity() {
        let below = eval_starke(&starke_row(0.7, 1.049), &STARKE1).unwrap();
        let at = eval_starke(&starke_row(0.7, 1.05), &STARKE1).unwrap();
        assert!((below[0] - at[0]).abs() > 1e-6);
    }

    #[test]
    fn climate_family_switches_at_higher_cutoff() {
        // kt = 0.7 enhances the regional family but not the climate one.
        let regional = eval_starke(&starke_row(0.7, 1.10), &STARKE1).unwrap();
        assert_relative_eq!(regional[0], enhanced_value(0.7), max_relative = 1e-14);

        let climate = eval_starke_climate(&starke_row(0.7, 1.10), &STARKE3_C).unwrap();
        let b = &STARKE3_C.baseline;
        let expected = sigmoid(
            b[0] + b[1] * 0.7
                + b[2] * 12.0
                + b[3] * 45.0
                + b[4] * 0.5
                + b[5] * 0.5
                + b[6] * 800.0
                + b[7] * 0.6,
        );
        assert_relative_eq!(climate[0], expected, max_relative = 1e-14);
    }

    #[test]
    fn climate_family_enhanced_above_cutoff() {
        let kd = eval_starke_climate(&starke_row(0.8, 1.05), &STARKE3_C).unwrap();
        let b = &STARKE3_C.enhanced;
        let expected = sigmoid(
            b[0] + b[1] * 0.8
                + b[2] * 12.0
                + b[3] * 45.0
                + b[4] * 0.5
                + b[5] * 0.5
                + b[6] * 800.0
                + b[7] * 0.6,
        );
        assert_relative_eq!(kd[0], expected, max_relative = 1e-14);
    }

    #[test]
    fn nan_ratio_falls_to_baseline() {
        let kd = eval_starke(&starke_row(0.7, f64::NAN), &STARKE1).unwrap();
        assert_relative_eq!(kd[0], baseline_value(0.7), max_relative = 1e-14);
    }

    #[test]
    fn branches_stay_in_open_interval() {
        for kt in [0.05, 0.3, 0.65, 0.66, 0.9] {
            for k_csi in [0.8, 1.05, 1.2] {
                let kd = eval_starke(&starke_row(kt, k_csi), &STARKE1).unwrap();
                assert!(kd[0] > 0.0 && kd[0] < 1.0);
            }
        }
    }
}
