//! Configuration for the least-squares solver.

use crate::error::FitError;

/// Configuration for the Nelder-Mead least-squares search.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use helios_fit::FitConfig;
///
/// let config = FitConfig::new().with_max_iters(5000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct FitConfig {
    max_iters: u64,
    sd_tolerance: f64,
}

impl FitConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: `max_iters = 2000`, `sd_tolerance = 1e-8`.
    pub fn new() -> Self {
        Self {
            max_iters: 2000,
            sd_tolerance: 1e-8,
        }
    }

    /// Sets the iteration budget.
    pub fn with_max_iters(mut self, n: u64) -> Self {
        self.max_iters = n;
        self
    }

    /// Sets the simplex standard-deviation convergence tolerance.
    pub fn with_sd_tolerance(mut self, tol: f64) -> Self {
        self.sd_tolerance = tol;
        self
    }

    /// Returns the iteration budget.
    pub fn max_iters(&self) -> u64 {
        self.max_iters
    }

    /// Returns the convergence tolerance.
    pub fn sd_tolerance(&self) -> f64 {
        self.sd_tolerance
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), FitError> {
        if self.max_iters == 0 {
            return Err(FitError::InvalidConfig {
                reason: "max_iters must be >= 1".to_string(),
            });
        }
        if !self.sd_tolerance.is_finite() || self.sd_tolerance <= 0.0 {
            return Err(FitError::InvalidConfig {
                reason: format!(
                    "sd_tolerance must be finite and positive, got {}",
                    self.sd_tolerance
                ),
            });
        }
        Ok(())
    }
}

impl Default for FitConfig {
    fn default() -> Self {
        Self::new()
    }
}
