//! Error types for contagion_core.
//!
//! Only construction can fail; a built simulation advances and answers
//! queries without errors.

use thiserror::Error;

/// Main error type for building a simulation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// Population counts that cannot describe a running outbreak
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Geometry or disease parameters outside their valid range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for contagion_core operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

impl SimulationError {
    /// Creates a new invalid configuration error.
    #[must_use]
    pub fn invalid_configuration<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Creates a new invalid parameter error.
    #[must_use]
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
