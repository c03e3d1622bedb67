//! Nonlinear least-squares calibration for logistic separation models.
//!
//! Estimates the coefficients of
//! `kd = 1 / (1 + exp(b0 + b1*x1 + ... + bk*xk))`
//! against an observed diffuse-fraction series by minimising the residual
//! sum of squares with a derivative-free Nelder-Mead search.
//!
//! Each call is a fresh, self-contained calibration: nothing is cached,
//! and for a fixed dataset and configuration the result is reproducible
//! (the simplex search has no random component).
//!
//! # Quick start
//!
//! ```ignore
//! use helios_fit::{FitConfig, fit_logistic};
//!
//! let fit = fit_logistic(&[&kt, &ast, &alt, &daily_kt, &persistence],
//!                        &observed_kd, &FitConfig::new())?;
//! let kd = fit.predict(&[&kt, &ast, &alt, &daily_kt, &persistence])?;
//! ```

mod config;
mod error;
mod fit;
mod solve;

pub use config::FitConfig;
pub use error::FitError;
pub use fit::LogisticFit;
pub use solve::fit_logistic;
