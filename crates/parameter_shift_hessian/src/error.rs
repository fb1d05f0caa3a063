// =============================================================================
// Parameter-Shift Hessian - Error Types
// =============================================================================
// Table of Contents:
//   1. GradientHessianError - Main error enum
//   2. InvalidInputError - Weight parsing and validation errors
// =============================================================================

use quantum_device_abstraction::DeviceError;
use quantum_runtime::error::CircuitError;
use thiserror::Error;

// =============================================================================
// 1. GradientHessianError - Main error enum
// =============================================================================

#[derive(Debug, Error)]
pub enum GradientHessianError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    #[error(
        "Evaluation budget violated: expected exactly {expected} executions, \
         evaluator reports {actual} ({prior} before this computation)"
    )]
    EvaluationBudgetExceeded {
        expected: usize,
        actual: usize,
        prior: usize,
    },

    #[error("Circuit construction failed: {0}")]
    Circuit(#[from] CircuitError),

    #[error("Device error: {0}")]
    Device(#[from] DeviceError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Output serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// =============================================================================
// 2. InvalidInputError - Weight parsing and validation errors
// =============================================================================

#[derive(Debug, Error, PartialEq)]
pub enum InvalidInputError {
    #[error("Expected {expected} weights, got {actual}")]
    WrongWeightCount { expected: usize, actual: usize },

    #[error("Weight {position} is not a number: {token:?}")]
    MalformedWeight { position: usize, token: String },

    #[error("Weight {position} is not finite: {value}")]
    NonFiniteWeight { position: usize, value: f64 },
}

pub type GradientHessianResult<T> = Result<T, GradientHessianError>;
