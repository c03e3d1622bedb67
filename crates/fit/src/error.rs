//! Error types for the helios-fit crate.

/// Error type for all fallible operations in the helios-fit crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FitError {
    /// Returned when the target series is empty.
    #[error("target series is empty")]
    EmptyData,

    /// Returned when no predictor columns are supplied.
    #[error("at least one predictor column is required")]
    NoPredictors,

    /// Returned when a predictor's length differs from the target's.
    #[error("predictor {index}: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Zero-based predictor position.
        index: usize,
        /// Expected length (the target length).
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Returned when a fitted model is applied to a different number of
    /// predictor columns than it was calibrated for.
    #[error("fitted for {expected} predictor column(s), got {got}")]
    PredictorCountMismatch {
        /// Predictor count the coefficients were estimated for.
        expected: usize,
        /// Predictor count supplied.
        got: usize,
    },

    /// Returned when too few rows have fully finite predictors and target.
    #[error("insufficient calibration data: {n} usable rows, need at least {min}")]
    InsufficientData {
        /// Number of rows with finite predictors and target.
        n: usize,
        /// Minimum required (one per coefficient).
        min: usize,
    },

    /// Returned when configuration is invalid.
    #[error("invalid fit configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the solver exhausts its iteration budget without
    /// meeting the convergence tolerance.
    #[error("fit did not converge after {iterations} iterations (residual norm {residual_norm:.6e})")]
    NonConvergence {
        /// Iterations consumed.
        iterations: u64,
        /// Residual norm at the last iterate.
        residual_norm: f64,
    },

    /// Returned when the underlying solver fails outright.
    #[error("solver failure: {reason}")]
    Solver {
        /// Description of the underlying failure.
        reason: String,
    },
}
