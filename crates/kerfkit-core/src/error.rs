//! Error types for the core crate.
//!
//! Hard failures only. Advisory warnings about risky but physically possible
//! settings travel separately in [`crate::geometry::ValidationReport`] and are
//! never turned into errors.

use thiserror::Error;

/// Errors that can occur while building parameters or generating patterns.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KerfError {
    /// A value is outside the domain of an operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// One or more hard constraints were violated while building parameters.
    #[error("Invalid parameters:\n{}", format_violations(.violations))]
    InvalidParameters { violations: Vec<String> },

    /// The pattern type name is not one of `straight`, `diamond` or `oval`.
    #[error("Pattern type must be 'straight', 'diamond', or 'oval', got '{0}'")]
    UnknownPatternType(String),

    /// The direction name is not one of `horizontal` or `vertical`.
    #[error("Pattern direction must be 'horizontal' or 'vertical', got '{0}'")]
    UnknownDirection(String),

    /// A standalone formula rejected one of its inputs.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),
}

/// Invalid-argument errors raised by the standalone geometry formulas.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A value that must be strictly positive was zero or negative.
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: String, value: f64 },
}

impl ParameterError {
    pub(crate) fn not_positive(name: &str, value: f64) -> Self {
        Self::NotPositive {
            name: name.to_string(),
            value,
        }
    }
}

fn format_violations(violations: &[String]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias for core operations.
pub type KerfResult<T> = Result<T, KerfError>;

/// Result type alias for the standalone formulas.
pub type ParameterResult<T> = Result<T, ParameterError>;
