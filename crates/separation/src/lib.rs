//! Diffuse-fraction separation models.
//!
//! Each model maps precomputed predictor columns (clearness index, solar
//! geometry, persistence, clear-sky terms) to the diffuse fraction kd,
//! the share of global horizontal irradiance arriving as diffuse sky
//! radiation. The catalogue covers the published closed-form families
//! (Engerer, Starke, Abreu, Every, Paulescu), the hourly-lagged Yang
//! model, and the per-dataset calibrated Boland model.
//!
//! [`evaluate`] is the single entry point: it validates the table
//! against the model's declared columns, routes to the family evaluator,
//! and returns one kd per input row in input order. Outputs are not
//! clamped to [0, 1]; rows whose inputs are undefined, or whose
//! exponentials overflow, come back as NaN rather than a silently
//! saturated value.
//!
//! # Quick start
//!
//! ```
//! use helios_separation::{ModelId, evaluate};
//! use helios_table::{Column, TimeTable};
//!
//! let table = TimeTable::new(vec![0, 600])?
//!     .with_column(Column::ClearnessIndex, vec![0.3, 0.7])?;
//! let kd = evaluate(ModelId::AbreuTropical, &table)?;
//! assert_eq!(kd.len(), 2);
//! # Ok::<(), helios_separation::SeparationError>(())
//! ```

mod blend;
mod closed_form;
mod coefficients;
mod error;
mod evaluate;
mod model;
mod piecewise;
mod power;

pub use error::SeparationError;
pub use evaluate::{evaluate, evaluate_with};
pub use model::{ModelDescriptor, ModelId};
