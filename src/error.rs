//! Error types for Corriente operations.
//!
//! Configuration problems are reported when an engine is constructed or
//! reset, never mid-stream. Failures raised by a plugged-in learner during
//! training or prediction propagate to the caller untouched.

use std::fmt;

/// Main error type for Corriente operations.
///
/// # Examples
///
/// ```
/// use corriente::error::CorrienteError;
///
/// let err = CorrienteError::InvalidConfig {
///     param: "ensemble_size".to_string(),
///     value: "0".to_string(),
///     constraint: ">= 1".to_string(),
/// };
/// assert!(err.to_string().contains("ensemble_size"));
/// ```
#[derive(Debug)]
pub enum CorrienteError {
    /// Invalid engine configuration value.
    InvalidConfig {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// Invalid hyperparameter sampling range.
    InvalidRange {
        /// Parameter name
        param: String,
        /// Range minimum
        min: f64,
        /// Range maximum
        max: f64,
        /// Range step
        step: f64,
    },

    /// The template model declares a target kind the ensemble cannot learn.
    UnsupportedTarget {
        /// Capability reported by the template model
        found: String,
    },

    /// Error raised by the underlying learner during train/predict.
    ///
    /// Never retried and never swallowed: a partially applied training step
    /// could leave a model inconsistent, so the stream must stop.
    Model(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for CorrienteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrienteError::InvalidConfig {
                param,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid configuration: {param} = {value}, expected {constraint}"
                )
            }
            CorrienteError::InvalidRange {
                param,
                min,
                max,
                step,
            } => {
                write!(
                    f,
                    "Invalid hyperparameter range for {param}: [{min}, {max}] step {step} (requires step > 0 and max >= min)"
                )
            }
            CorrienteError::UnsupportedTarget { found } => {
                write!(f, "Unsupported target kind: {found}, expected multi-class")
            }
            CorrienteError::Model(msg) => write!(f, "Model failure: {msg}"),
            CorrienteError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CorrienteError {}

impl From<&str> for CorrienteError {
    fn from(msg: &str) -> Self {
        CorrienteError::Other(msg.to_string())
    }
}

impl From<String> for CorrienteError {
    fn from(msg: String) -> Self {
        CorrienteError::Other(msg)
    }
}

impl CorrienteError {
    /// Create a configuration error with descriptive context.
    #[must_use]
    pub fn invalid_config(param: &str, value: impl fmt::Display, constraint: &str) -> Self {
        Self::InvalidConfig {
            param: param.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    /// Create a model failure from any displayable cause.
    #[must_use]
    pub fn model(cause: impl fmt::Display) -> Self {
        Self::Model(cause.to_string())
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, CorrienteError>;
