//! Paulescu piecewise-linear evaluator.
//!
//! The published source computes only the first hinge term; the two
//! remaining hinge expressions are dead statements (a dropped line
//! continuation). Both renditions are exposed: [`eval_paulescu`] with
//! `Hinges::First` reproduces the source as published, `Hinges::All`
//! sums the full intended form. The registry lists them as distinct
//! models so callers choose explicitly.

use helios_table::{Column, TableError, TimeTable};

use crate::coefficients::PaulescuCoeffs;

/// Which hinge terms enter the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Hinges {
    /// Only the first clearness-index hinge, as published.
    First,
    /// All three hinge terms.
    All,
}

/// Hinge basis `(x - knot) * H(x - knot)`, zero below the knot.
///
/// The step is closed at the knot (`x == knot` contributes zero either
/// way). A NaN `x` compares false and yields zero here; the linear terms
/// still carry the NaN into the row's sum.
fn hinge(x: f64, knot: f64) -> f64 {
    if x >= knot { x - knot } else { 0.0 }
}

/// Piecewise-linear form over `[kt, daily_kt]`:
/// `kd = b0 + b1*kt + b2*daily + b3*hinge(kt, b4)
///       [+ b5*hinge(kt, b6) + b7*hinge(daily, b8)]`.
pub(crate) fn eval_paulescu(
    table: &TimeTable,
    c: &PaulescuCoeffs,
    hinges: Hinges,
) -> Result<Vec<f64>, TableError> {
    let kt = table.column(Column::ClearnessIndex)?;
    let daily = table.column(Column::DailyClearness)?;

    let b = &c.b;
    Ok((0..table.len())
        .map(|i| {
            let mut kd = b[0] + b[1] * kt[i] + b[2] * daily[i] + b[3] * hinge(kt[i], b[4]);
            if hinges == Hinges::All {
                kd += b[5] * hinge(kt[i], b[6]) + b[7] * hinge(daily[i], b[8]);
            }
            kd
        })
        .collect())
}
