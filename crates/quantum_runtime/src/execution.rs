// =============================================================================
// Parameter-Shift Hessian - Execution Engine
// =============================================================================
// Table of Contents:
//   1. QuantumExecutionEngine - Runs circuits on the dense simulator
//   2. Expectation values
// =============================================================================
// Purpose: Executes a circuit from |0…0⟩ on a dense state vector and evaluates
//          observables against the final state.
// =============================================================================

use crate::circuit_program::QuantumCircuitStructure;
use crate::error::{ExecutionError, QuantumResult};
use crate::measurement::ObservableOperatorInterface;
use crate::state_backend::QuantumStateVector;

/// Largest register the dense simulator will allocate.
pub const DEFAULT_MAXIMUM_DENSE_QUBITS: usize = 20;

// =============================================================================
// 1. QuantumExecutionEngine - Main execution coordinator
// =============================================================================

#[derive(Debug, Clone)]
pub struct QuantumExecutionEngine {
    maximum_qubits_for_dense: usize,
}

impl Default for QuantumExecutionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl QuantumExecutionEngine {
    pub fn new() -> Self {
        Self {
            maximum_qubits_for_dense: DEFAULT_MAXIMUM_DENSE_QUBITS,
        }
    }

    pub fn with_max_dense_qubits(mut self, max_qubits: usize) -> Self {
        self.maximum_qubits_for_dense = max_qubits;
        self
    }

    pub fn maximum_qubits_for_dense(&self) -> usize {
        self.maximum_qubits_for_dense
    }

    pub fn execute_statevector(
        &self,
        circuit: &QuantumCircuitStructure,
    ) -> QuantumResult<QuantumStateVector> {
        let qubits = circuit.number_of_quantum_bits();
        if qubits > self.maximum_qubits_for_dense {
            return Err(ExecutionError::DenseStateTooLarge {
                qubits,
                max: self.maximum_qubits_for_dense,
            }
            .into());
        }

        let mut state = QuantumStateVector::zero_state(qubits);
        for gate_instance in circuit.gate_application_instances() {
            gate_instance
                .quantum_gate_interface
                .apply_to_full_state_vector(&mut state);
        }

        tracing::trace!(
            circuit_id = %circuit.id(),
            gates = circuit.gate_count(),
            "executed circuit on dense state vector"
        );
        Ok(state)
    }

    // =========================================================================
    // 2. Expectation values
    // =========================================================================

    pub fn compute_expectation_value(
        &self,
        circuit: &QuantumCircuitStructure,
        observable: &dyn ObservableOperatorInterface,
    ) -> QuantumResult<f64> {
        let state = self.execute_statevector(circuit)?;
        Ok(observable.compute_expectation_value(&state)?)
    }
}
