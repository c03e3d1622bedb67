//! Nelder-Mead least-squares search for logistic coefficients.

use argmin::core::{CostFunction, Executor, TerminationReason, TerminationStatus};
use argmin::solver::neldermead::NelderMead;
use tracing::debug;

use crate::config::FitConfig;
use crate::error::FitError;
use crate::fit::{LogisticFit, logistic};

/// Estimates logistic coefficients by minimising the residual sum of
/// squares against an observed target series.
///
/// The model is `y_hat = 1 / (1 + exp(b0 + b1*x1 + ... + bk*xk))` with
/// one column slice per predictor. Rows where any predictor or the
/// target is non-finite are excluded from the objective; they would
/// otherwise make it undefined.
///
/// The initial coefficient vector is all zeros (`y_hat = 0.5`
/// everywhere), with simplex vertices offset by 0.5 along each axis.
/// The search is deterministic: a fixed dataset and configuration always
/// reproduce the same result.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`FitError::EmptyData`] | `target` is empty |
/// | [`FitError::NoPredictors`] | `predictors` is empty |
/// | [`FitError::LengthMismatch`] | a predictor's length differs from the target's |
/// | [`FitError::InsufficientData`] | fewer finite rows than coefficients |
/// | [`FitError::InvalidConfig`] | `config` fails validation |
/// | [`FitError::NonConvergence`] | iteration budget exhausted before tolerance |
/// | [`FitError::Solver`] | the underlying solver fails outright |
#[tracing::instrument(skip_all, fields(rows = target.len(), predictors = predictors.len()))]
pub fn fit_logistic(
    predictors: &[&[f64]],
    target: &[f64],
    config: &FitConfig,
) -> Result<LogisticFit, FitError> {
    config.validate()?;

    if target.is_empty() {
        return Err(FitError::EmptyData);
    }
    if predictors.is_empty() {
        return Err(FitError::NoPredictors);
    }
    for (index, p) in predictors.iter().enumerate() {
        if p.len() != target.len() {
            return Err(FitError::LengthMismatch {
                index,
                expected: target.len(),
                got: p.len(),
            });
        }
    }

    let dim = predictors.len() + 1;

    // Keep only rows that contribute a defined residual.
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut ys: Vec<f64> = Vec::new();
    for i in 0..target.len() {
        if !target[i].is_finite() {
            continue;
        }
        if predictors.iter().any(|p| !p[i].is_finite()) {
            continue;
        }
        rows.push(predictors.iter().map(|p| p[i]).collect());
        ys.push(target[i]);
    }
    if rows.len() < dim {
        return Err(FitError::InsufficientData {
            n: rows.len(),
            min: dim,
        });
    }

    // Simplex around the all-zero initial guess (y_hat = 0.5 everywhere).
    let mut simplex: Vec<Vec<f64>> = Vec::with_capacity(dim + 1);
    simplex.push(vec![0.0; dim]);
    for i in 0..dim {
        let mut vertex = vec![0.0; dim];
        vertex[i] = 0.5;
        simplex.push(vertex);
    }

    let cost = ResidualCost { rows: &rows, ys: &ys };

    let solver = NelderMead::new(simplex)
        .with_sd_tolerance(config.sd_tolerance())
        .map_err(|e| FitError::Solver {
            reason: e.to_string(),
        })?;
    let result = Executor::new(cost, solver)
        .configure(|state| state.max_iters(config.max_iters()))
        .run()
        .map_err(|e| FitError::Solver {
            reason: e.to_string(),
        })?;

    let state = result.state();
    let best = state.best_param.as_ref().ok_or_else(|| FitError::Solver {
        reason: "solver produced no parameters".to_string(),
    })?;

    if matches!(
        state.termination_status,
        TerminationStatus::Terminated(TerminationReason::MaxItersReached)
    ) {
        return Err(FitError::NonConvergence {
            iterations: state.iter,
            residual_norm: state.best_cost.sqrt(),
        });
    }

    debug!(
        iterations = state.iter,
        residual_sum_squares = state.best_cost,
        "fit converged"
    );
    Ok(LogisticFit::new(best.clone(), state.iter, state.best_cost))
}

/// Cost function for argmin: residual sum of squares over the finite rows.
struct ResidualCost<'a> {
    rows: &'a [Vec<f64>],
    ys: &'a [f64],
}

impl CostFunction for ResidualCost<'_> {
    type Param = Vec<f64>;
    type Output = f64;

    fn cost(&self, params: &Self::Param) -> Result<Self::Output, argmin::core::Error> {
        let mut ssr = 0.0;
        for (xs, &y) in self.rows.iter().zip(self.ys.iter()) {
            let mut z = params[0];
            for (j, &x) in xs.iter().enumerate() {
                z += params[j + 1] * x;
            }
            // Saturated predictions are fine inside the objective; the
            // search just moves away from them.
            let y_hat = 1.0 / (1.0 + z.exp());
            let r = y_hat - y;
            ssr += r * r;
        }
        if ssr.is_finite() { Ok(ssr) } else { Ok(f64::MAX) }
    }
}
