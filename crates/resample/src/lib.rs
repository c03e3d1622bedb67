//! Temporal aggregation and alignment for lagged separation models.
//!
//! The Yang model needs the hourly mean of a sub-hourly series joined
//! back onto the native timestamps. This crate provides the three stages
//! and an orchestrating [`align_hourly`] that chains them:
//!
//! ```text
//!  ┌──────────────┐     ┌───────────────────┐     ┌───────────────┐
//!  │  hourly_mean  │────▶│  asof_backward    │────▶│  forward_fill │
//!  │  (bucket mean) │     │  (most recent ≤ t) │     │  (carry last) │
//!  └──────────────┘     └───────────────────┘     └───────────────┘
//! ```
//!
//! Rows preceding the first defined hourly aggregate have nothing to fill
//! from; [`LeadingGap`] selects whether they surface as a hard
//! [`ResampleError::UndefinedAlignment`] or as per-row NaN.

mod aggregate;
mod align;
mod error;

pub use aggregate::{HourlySeries, hourly_mean};
pub use align::{LeadingGap, align_hourly, asof_backward, forward_fill};
pub use error::ResampleError;
