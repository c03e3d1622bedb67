//! Abreu power-form evaluator.

use helios_table::{Column, TableError, TimeTable};

use crate::coefficients::AbreuCoeffs;

/// Abreu form: a power law in the centred clearness index,
/// `kd = (1 + (A*(kt-0.5)^2 + B*(kt-0.5) + 1)^(-n))^(-1/n)`.
///
/// At `kt = 0.5` the inner polynomial is exactly 1, so `kd = 2^(-1/n)`
/// for every variant. NaN inputs and NaN-producing powers (a negative
/// polynomial raised to a fractional exponent) propagate per row.
pub(crate) fn eval_abreu(table: &TimeTable, c: &AbreuCoeffs) -> Result<Vec<f64>, TableError> {
    let kt = table.column(Column::ClearnessIndex)?;

    Ok(kt
        .iter()
        .map(|&k| {
            let u = k - 0.5;
            let poly = c.a * u * u + c.b * u + 1.0;
            (1.0 + poly.powf(-c.n)).powf(-1.0 / c.n)
        })
        .collect())
}
