//! The evaluation entry point: column validation and family dispatch.

use helios_fit::{FitConfig, fit_logistic};
use helios_resample::{LeadingGap, align_hourly};
use helios_table::{Column, TimeTable};
use tracing::{debug, warn};

use crate::blend::{eval_starke, eval_starke_climate};
use crate::closed_form::{eval_engerer, eval_sigmoid, eval_yang};
use crate::coefficients;
use crate::error::SeparationError;
use crate::model::ModelId;
use crate::piecewise::{Hinges, eval_paulescu};
use crate::power::eval_abreu;

/// Evaluates a separation model over a predictor table with the default
/// fit configuration.
///
/// See [`evaluate_with`] for the full contract.
///
/// # Errors
///
/// As for [`evaluate_with`].
pub fn evaluate(model: ModelId, table: &TimeTable) -> Result<Vec<f64>, SeparationError> {
    evaluate_with(model, table, &FitConfig::new())
}

/// Evaluates a separation model over a predictor table, returning one kd
/// value per row in row order.
///
/// Required columns are validated against the model's descriptor before
/// any arithmetic runs, so a missing column fails the call early and
/// precisely. Outputs are not clamped to [0, 1]; a row whose inputs are
/// undefined, or whose exponential overflows, comes back as NaN while
/// the rest of the series stays valid.
///
/// `fit_config` applies only to the calibrated model
/// ([`ModelId::Boland`]), which re-estimates its coefficients against
/// the supplied table on every call; all other models ignore it.
///
/// # Errors
///
/// Returns [`SeparationError::Table`] when a required column is absent,
/// [`SeparationError::Fit`] when the calibrated model cannot be fitted
/// (insufficient data, invalid configuration, or non-convergence with
/// the iteration count and last residual norm), and
/// [`SeparationError::Resample`] when the lagged model's alignment input
/// is invalid.
#[tracing::instrument(skip(table), fields(rows = table.len()))]
pub fn evaluate_with(
    model: ModelId,
    table: &TimeTable,
    fit_config: &FitConfig,
) -> Result<Vec<f64>, SeparationError> {
    for &column in model.required_columns() {
        if !table.has_column(column) {
            return Err(helios_table::TableError::MissingColumn { column }.into());
        }
    }

    let kd = match model {
        ModelId::Boland => eval_boland(table, fit_config)?,
        ModelId::Engerer2 => eval_engerer(table, &coefficients::ENGERER2)?,
        ModelId::Engerer4 => eval_engerer(table, &coefficients::ENGERER4)?,
        ModelId::Yang4 => eval_yang4(table)?,
        ModelId::Starke1 => eval_starke(table, &coefficients::STARKE1)?,
        ModelId::Starke2 => eval_starke(table, &coefficients::STARKE2)?,
        ModelId::Starke3A => eval_starke_climate(table, &coefficients::STARKE3_A)?,
        ModelId::Starke3B => eval_starke_climate(table, &coefficients::STARKE3_B)?,
        ModelId::Starke3C => eval_starke_climate(table, &coefficients::STARKE3_C)?,
        ModelId::Starke3D => eval_starke_climate(table, &coefficients::STARKE3_D)?,
        ModelId::Starke3E => eval_starke_climate(table, &coefficients::STARKE3_E)?,
        ModelId::AbreuTropical => eval_abreu(table, &coefficients::ABREU_A)?,
        ModelId::AbreuDry => eval_abreu(table, &coefficients::ABREU_B)?,
        ModelId::AbreuMildTemperate => eval_abreu(table, &coefficients::ABREU_C)?,
        ModelId::AbreuHighAlbedo => eval_abreu(table, &coefficients::ABREU_HIGH_ALBEDO)?,
        ModelId::Every1 => eval_sigmoid(table, &coefficients::EVERY1)?,
        ModelId::Every2Am => eval_sigmoid(table, &coefficients::EVERY2_AM)?,
        ModelId::Every2Aw => eval_sigmoid(table, &coefficients::EVERY2_AW)?,
        ModelId::Every2Bsh => eval_sigmoid(table, &coefficients::EVERY2_BSH)?,
        ModelId::Every2Bsk => eval_sigmoid(table, &coefficients::EVERY2_BSK)?,
        ModelId::Every2Bwh => eval_sigmoid(table, &coefficients::EVERY2_BWH)?,
        ModelId::Every2Cfa => eval_sigmoid(table, &coefficients::EVERY2_CFA)?,
        ModelId::Every2Cfb => eval_sigmoid(table, &coefficients::EVERY2_CFB)?,
        ModelId::Every2Csa => eval_sigmoid(table, &coefficients::EVERY2_CSA)?,
        ModelId::Every2Csb => eval_sigmoid(table, &coefficients::EVERY2_CSB)?,
        ModelId::Every2Other => eval_sigmoid(table, &coefficients::EVERY2_OTHER)?,
        ModelId::Paulescu => eval_paulescu(table, &coefficients::PAULESCU, Hinges::First)?,
        ModelId::PaulescuFull => eval_paulescu(table, &coefficients::PAULESCU, Hinges::All)?,
    };

    let undefined = kd.iter().filter(|v| v.is_nan()).count();
    if undefined > 0 {
        warn!(undefined, rows = kd.len(), "undefined kd rows in output");
    }
    debug!(rows = kd.len(), "model evaluated");
    Ok(kd)
}

/// Calibrated Boland path: re-fits the six-coefficient logistic against
/// the table's observed diffuse fraction, then applies the fitted curve
/// to the same table. Nothing is cached across calls.
fn eval_boland(table: &TimeTable, config: &FitConfig) -> Result<Vec<f64>, SeparationError> {
    let predictors = [
        table.column(Column::ClearnessIndex)?,
        table.column(Column::ApparentSolarTime)?,
        table.column(Column::SolarAltitude)?,
        table.column(Column::DailyClearness)?,
        table.column(Column::Persistence)?,
    ];
    let observed = table.column(Column::DiffuseFraction)?;

    let fit = fit_logistic(&predictors, observed, config)?;
    debug!(
        iterations = fit.iterations(),
        residual_norm = fit.residual_norm(),
        "boland calibration"
    );
    Ok(fit.predict(&predictors)?)
}

/// Lagged Yang path: evaluates Engerer2 at native resolution, aggregates
/// it to hourly means aligned back onto the native timestamps, then runs
/// the Yang form with the aligned series as an extra predictor.
///
/// Rows preceding the first defined hourly aggregate have no value to
/// fill from; they surface as NaN output rows rather than failing the
/// batch.
fn eval_yang4(table: &TimeTable) -> Result<Vec<f64>, SeparationError> {
    if table.is_empty() {
        return Ok(Vec::new());
    }

    let engerer2 = eval_engerer(table, &coefficients::ENGERER2)?;
    let hourly = align_hourly(table.timestamps(), &engerer2, LeadingGap::Undefined)?;
    Ok(eval_yang(table, &coefficients::YANG4, &hourly)?)
}
