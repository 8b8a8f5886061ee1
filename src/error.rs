//! Error types for the SIA velocity solver.

use thiserror::Error;

/// Errors that can occur when validating inputs or computing velocity.
///
/// Every variant is a caller-configuration defect: the kernel never
/// retries and never substitutes defaults. Validation runs to completion
/// before any output is written, so on `Err` the velocity field is
/// untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiaError {
    /// Array sizes are inconsistent across inputs, or an adjacency
    /// index points outside its array.
    #[error("Shape mismatch in {field}: expected {expected}, got {actual}")]
    ShapeMismatch {
        field: String,
        expected: usize,
        actual: usize,
    },

    /// A required field or configuration value is absent.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// A physical parameter or geometric quantity is out of its valid range.
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: String,
        value: f64,
        reason: &'static str,
    },
}

impl SiaError {
    /// Create a shape mismatch error.
    pub fn shape_mismatch(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::ShapeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Create a missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    /// Create an invalid parameter error.
    pub fn invalid(name: impl Into<String>, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            value,
            reason,
        }
    }

    /// Integer status code for hosts that speak error codes.
    ///
    /// Each kind maps to a distinct non-zero value; `0` is reserved for
    /// success (see [`status_code`]).
    pub fn code(&self) -> i32 {
        match self {
            Self::ShapeMismatch { .. } => 1,
            Self::MissingField(_) => 2,
            Self::InvalidParameter { .. } => 3,
        }
    }
}

/// Convert a solver result into an integer status code (`0` = success).
///
/// ```
/// use sia_rs::{SiaError, status_code};
///
/// assert_eq!(status_code(&Ok(())), 0);
/// assert_eq!(status_code(&Err(SiaError::missing("thickness"))), 2);
/// ```
pub fn status_code(result: &Result<(), SiaError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => e.code(),
    }
}
