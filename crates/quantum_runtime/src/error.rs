// =============================================================================
// Parameter-Shift Hessian - Quantum Runtime Error Types
// =============================================================================
// Table of Contents:
//   1. QuantumRuntimeError - Main error enum
//   2. CircuitError - Circuit construction errors
//   3. ExecutionError - Execution-time errors
//   4. MeasurementError - Observable evaluation errors
// =============================================================================
// Purpose: Unified error handling for circuit construction, state-vector
//          execution and expectation-value measurement.
// =============================================================================

use thiserror::Error;

// =============================================================================
// 1. QuantumRuntimeError - Main error enum
// =============================================================================

#[derive(Debug, Error)]
pub enum QuantumRuntimeError {
    #[error("Circuit error: {0}")]
    Circuit(#[from] CircuitError),

    #[error("Execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("Measurement error: {0}")]
    Measurement(#[from] MeasurementError),
}

// =============================================================================
// 2. CircuitError - Circuit construction errors
// =============================================================================

#[derive(Debug, Error)]
pub enum CircuitError {
    #[error("Invalid qubit index {index}: circuit has {total} qubits")]
    InvalidQubitIndex { index: usize, total: usize },

    #[error("Parameter count mismatch: expected {expected}, got {actual}")]
    ParameterCountMismatch { expected: usize, actual: usize },

    #[error("Control and target qubits must be different (qubit {0})")]
    SameControlTarget(usize),
}

// =============================================================================
// 3. ExecutionError - Execution-time errors
// =============================================================================

#[derive(Debug, Error)]
pub enum ExecutionError {
    #[error("Dense state vector too large: {qubits} qubits exceeds maximum {max}")]
    DenseStateTooLarge { qubits: usize, max: usize },
}

// =============================================================================
// 4. MeasurementError - Observable evaluation errors
// =============================================================================

#[derive(Debug, Error)]
pub enum MeasurementError {
    #[error("Observable acts on qubit {index}, but the state has {total} qubits")]
    ObservableOutOfRange { index: usize, total: usize },
}

// =============================================================================
// Result type alias
// =============================================================================

pub type QuantumResult<T> = Result<T, QuantumRuntimeError>;
