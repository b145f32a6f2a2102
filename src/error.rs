// src/error.rs
use std::fmt;

/// Custom error types for the gbm-paths library
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Invalid parameter values
    InvalidParameter {
        parameter: String,
        value: f64,
        constraint: String,
    },

    /// Seed derivation wrapped past the representable integer range
    SeedOverflow { base_seed: u64, path_index: u64 },

    /// Price projection produced a non-finite value
    NumericOverflow {
        path_index: usize,
        step: usize,
        value: f64,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidParameter {
                parameter,
                value,
                constraint,
            } => {
                write!(
                    f,
                    "Invalid parameter '{}' = {}: {}",
                    parameter, value, constraint
                )
            }
            SimError::SeedOverflow {
                base_seed,
                path_index,
            } => {
                write!(
                    f,
                    "Seed overflow: base seed {} + path index {} exceeds u64 range; \
                     paths would alias",
                    base_seed, path_index
                )
            }
            SimError::NumericOverflow {
                path_index,
                step,
                value,
            } => {
                write!(
                    f,
                    "Numeric overflow on path {} at step {}: projected price is {}",
                    path_index, step, value
                )
            }
        }
    }
}

impl std::error::Error for SimError {}

/// Result type alias for gbm-paths operations
pub type SimResult<T> = Result<T, SimError>;

/// Validation utilities
pub mod validation {
    use super::{SimError, SimResult};

    /// Validate that a parameter is positive
    pub fn validate_positive(name: &str, value: f64) -> SimResult<()> {
        if value <= 0.0 || !value.is_finite() {
            Err(SimError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be positive (> 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a parameter is non-negative
    pub fn validate_non_negative(name: &str, value: f64) -> SimResult<()> {
        if value < 0.0 || !value.is_finite() {
            Err(SimError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be non-negative (≥ 0)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate that a value is finite and not NaN
    pub fn validate_finite(name: &str, value: f64) -> SimResult<()> {
        if !value.is_finite() {
            Err(SimError::InvalidParameter {
                parameter: name.to_string(),
                value,
                constraint: "must be finite (not NaN or infinite)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate paths count
    pub fn validate_paths(paths: usize) -> SimResult<()> {
        if paths == 0 {
            Err(SimError::InvalidParameter {
                parameter: "paths".to_string(),
                value: paths as f64,
                constraint: "must be greater than 0".to_string(),
            })
        } else if paths > 1_000_000_000 {
            Err(SimError::InvalidParameter {
                parameter: "paths".to_string(),
                value: paths as f64,
                constraint: "exceeds maximum allowed (1 billion)".to_string(),
            })
        } else {
            Ok(())
        }
    }

    /// Validate steps count
    pub fn validate_steps(steps: usize) -> SimResult<()> {
        if steps == 0 {
            Err(SimError::InvalidParameter {
                parameter: "steps".to_string(),
                value: steps as f64,
                constraint: "must be greater than 0".to_string(),
            })
        } else if steps > 100_000 {
            Err(SimError::InvalidParameter {
                parameter: "steps".to_string(),
                value: steps as f64,
                constraint: "exceeds maximum allowed (100,000)".to_string(),
            })
        } else {
            Ok(())
        }
    }
}
