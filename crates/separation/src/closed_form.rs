//! Elementwise logistic-form evaluators.

use helios_table::{Column, TableError, TimeTable};

use crate::coefficients::{EngererCoeffs, SigmoidCoeffs, YangCoeffs};

/// `1 / (1 + exp(z))` with undefined and overflowing exponents mapped to
/// NaN. Exponent arguments are deliberately not clamped: a pathological
/// predictor must surface as an undefined row, not a silent 0 or 1.
pub(crate) fn sigmoid(z: f64) -> f64 {
    if !z.is_finite() {
        return f64::NAN;
    }
    let e = z.exp();
    if e.is_infinite() {
        return f64::NAN;
    }
    1.0 / (1.0 + e)
}

/// Pure logistic over `[kt, ast, altitude, daily_kt, persistence]`
/// (the Every and fitted-Boland shape).
pub(crate) fn eval_sigmoid(
    table: &TimeTable,
    c: &SigmoidCoeffs,
) -> Result<Vec<f64>, TableError> {
    let kt = table.column(Column::ClearnessIndex)?;
    let ast = table.column(Column::ApparentSolarTime)?;
    let alt = table.column(Column::SolarAltitude)?;
    let daily = table.column(Column::DailyClearness)?;
    let pers = table.column(Column::Persistence)?;

    Ok((0..table.len())
        .map(|i| {
            let z = c.b0
                + c.b1 * kt[i]
                + c.b2 * ast[i]
                + c.b3 * alt[i]
                + c.b4 * daily[i]
                + c.b5 * pers[i];
            sigmoid(z)
        })
        .collect())
}

/// Engerer form: offset logistic over `[kt, ast, altitude, k_tc]` plus
/// the additive cloud-enhancement term.
pub(crate) fn eval_engerer(
    table: &TimeTable,
    c: &EngererCoeffs,
) -> Result<Vec<f64>, TableError> {
    let kt = table.column(Column::ClearnessIndex)?;
    let ast = table.column(Column::ApparentSolarTime)?;
    let alt = table.column(Column::SolarAltitude)?;
    let ktc = table.column(Column::ClearSkyDeviation)?;
    let kde = table.column(Column::CloudEnhancement)?;

    Ok((0..table.len())
        .map(|i| {
            let z = c.b0 + c.b1 * kt[i] + c.b2 * ast[i] + c.b3 * alt[i] + c.b4 * ktc[i];
            c.c + (1.0 - c.c) * sigmoid(z) + c.b5 * kde[i]
        })
        .collect())
}

/// Yang form: Engerer shape extended with the hourly-lagged Engerer2
/// series, pre-aligned onto the table's timestamps by the caller.
pub(crate) fn eval_yang(
    table: &TimeTable,
    c: &YangCoeffs,
    lagged_hourly: &[f64],
) -> Result<Vec<f64>, TableError> {
    let kt = table.column(Column::ClearnessIndex)?;
    let ast = table.column(Column::ApparentSolarTime)?;
    let alt = table.column(Column::SolarAltitude)?;
    let ktc = table.column(Column::ClearSkyDeviation)?;
    let kde = table.column(Column::CloudEnhancement)?;

    Ok((0..table.len())
        .map(|i| {
            let z = c.b0
                + c.b1 * kt[i]
                + c.b2 * ast[i]
                + c.b3 * alt[i]
                + c.b4 * ktc[i]
                + c.b6 * lagged_hourly[i];
            c.c2 + (1.0 - c.c2) * sigmoid(z) + c.b5 * kde[i]
        })
        .collect())
}
