//! Error types for the helios-separation crate.

use helios_fit::FitError;
use helios_resample::ResampleError;
use helios_table::TableError;

/// Error type for all fallible operations in the helios-separation crate.
#[derive(Debug, thiserror::Error)]
pub enum SeparationError {
    /// Returned when a model identifier is not in the registry.
    #[error("unknown separation model: '{name}'")]
    UnknownModel {
        /// The unrecognised identifier.
        name: String,
    },

    /// Table/schema error (missing required column, invalid index).
    #[error(transparent)]
    Table(#[from] TableError),

    /// Calibration error from the fitted model.
    #[error(transparent)]
    Fit(#[from] FitError),

    /// Alignment error from the lagged model's resampling step.
    #[error(transparent)]
    Resample(#[from] ResampleError),
}

#[cfg(test)]
mod tests {
    use helios_table::Column;

    use super::*;

    #[test]
    fn display_unknown_model() {
        let e = SeparationError::UnknownModel {
            name: "engerer9".to_string(),
        };
        assert_eq!(e.to_string(), "unknown separation model: 'engerer9'");
    }

    #[test]
    fn from_table_error() {
        let te = TableError::MissingColumn {
            column: Column::SolarAltitude,
        };
        let se: SeparationError = te.into();
        assert!(matches!(se, SeparationError::Table(_)));
        assert_eq!(
            se.to_string(),
            "required column 'solar_altitude' is missing from the table"
        );
    }

    #[test]
    fn from_fit_error() {
        let fe = FitError::EmptyData;
        let se: SeparationError = fe.into();
        assert!(matches!(se, SeparationError::Fit(_)));
    }

    #[test]
    fn from_resample_error() {
        let re = ResampleError::EmptyData;
        let se: SeparationError = re.into();
        assert!(matches!(se, SeparationError::Resample(_)));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<SeparationError>();
    }
}
