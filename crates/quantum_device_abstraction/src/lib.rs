// =============================================================================
// Parameter-Shift Hessian - Quantum Device Abstraction
// =============================================================================
// Table of Contents:
//   1. QuantumDeviceInterface - Core device trait
//   2. DeviceConfiguration - Serializable device settings
//   3. SimulatorDevice - Local state-vector simulator
// =============================================================================
// Purpose: A device executes circuits and counts the executions it has
//          served. Circuits rejected before simulation are not counted.
// =============================================================================

use quantum_runtime::circuit_program::QuantumCircuitStructure;
use quantum_runtime::error::QuantumRuntimeError;
use quantum_runtime::execution::QuantumExecutionEngine;
use quantum_runtime::measurement::ObservableOperatorInterface;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

// =============================================================================
// 1. QuantumDeviceInterface - Core device trait
// =============================================================================

pub trait QuantumDeviceInterface: Send + Sync {
    fn device_id(&self) -> Uuid;
    fn device_name(&self) -> &str;
    fn number_of_quantum_bits(&self) -> usize;

    /// Runs `circuit` once and returns ⟨observable⟩ on the final state.
    fn execute_expectation(
        &self,
        circuit: &QuantumCircuitStructure,
        observable: &dyn ObservableOperatorInterface,
    ) -> Result<f64, DeviceError>;

    fn number_of_executions(&self) -> usize;
    fn reset_execution_count(&self);
}

#[derive(Debug, thiserror::Error)]
pub enum DeviceError {
    #[error("Circuit too large: requires {required} qubits, device has {available}")]
    CircuitTooLarge { required: usize, available: usize },
    #[error("Execution failed: {0}")]
    ExecutionFailed(#[from] QuantumRuntimeError),
}

// =============================================================================
// 2. DeviceConfiguration - Serializable device settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfiguration {
    pub device_name: String,
    pub number_of_quantum_bits: usize,
}

impl Default for DeviceConfiguration {
    fn default() -> Self {
        Self {
            device_name: "default.qubit".to_string(),
            number_of_quantum_bits: 3,
        }
    }
}

// =============================================================================
// 3. SimulatorDevice - Local simulator implementation
// =============================================================================

#[derive(Debug)]
pub struct SimulatorDevice {
    id: Uuid,
    name: String,
    number_of_quantum_bits: usize,
    execution_engine: QuantumExecutionEngine,
    number_of_executions: AtomicUsize,
}

impl SimulatorDevice {
    pub fn new_dense_simulator(name: impl Into<String>, number_of_qubits: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            number_of_quantum_bits: number_of_qubits,
            execution_engine: QuantumExecutionEngine::new(),
            number_of_executions: AtomicUsize::new(0),
        }
    }

    pub fn from_configuration(configuration: &DeviceConfiguration) -> Self {
        Self::new_dense_simulator(
            configuration.device_name.clone(),
            configuration.number_of_quantum_bits,
        )
    }
}

impl QuantumDeviceInterface for SimulatorDevice {
    fn device_id(&self) -> Uuid {
        self.id
    }

    fn device_name(&self) -> &str {
        &self.name
    }

    fn number_of_quantum_bits(&self) -> usize {
        self.number_of_quantum_bits
    }

    fn execute_expectation(
        &self,
        circuit: &QuantumCircuitStructure,
        observable: &dyn ObservableOperatorInterface,
    ) -> Result<f64, DeviceError> {
        if circuit.number_of_quantum_bits() > self.number_of_quantum_bits {
            return Err(DeviceError::CircuitTooLarge {
                required: circuit.number_of_quantum_bits(),
                available: self.number_of_quantum_bits,
            });
        }

        let execution_index = self.number_of_executions.fetch_add(1, Ordering::SeqCst) + 1;
        let expectation = self
            .execution_engine
            .compute_expectation_value(circuit, observable)?;

        tracing::trace!(
            device = %self.name,
            execution_index,
            observable = observable.observable_name(),
            expectation,
            "device execution"
        );
        Ok(expectation)
    }

    fn number_of_executions(&self) -> usize {
        self.number_of_executions.load(Ordering::SeqCst)
    }

    fn reset_execution_count(&self) {
        self.number_of_executions.store(0, Ordering::SeqCst);
    }
}
