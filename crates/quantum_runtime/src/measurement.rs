// =============================================================================
// Parameter-Shift Hessian - Measurement Module
// =============================================================================
// Table of Contents:
//   1. ObservableOperatorInterface - Trait for observables
//   2. PauliZObservable - Single-qubit Z
//   3. PauliZProductObservable - Tensor product of Z operators
// =============================================================================
// Purpose: Analytic expectation values of diagonal observables on a dense
//          state vector.
// =============================================================================

use crate::error::MeasurementError;
use crate::state_backend::QuantumStateVector;

// =============================================================================
// 1. ObservableOperatorInterface - Trait for quantum observables
// =============================================================================

pub trait ObservableOperatorInterface: Send + Sync + std::fmt::Debug {
    fn compute_expectation_value(&self, state: &QuantumStateVector)
    -> Result<f64, MeasurementError>;
    fn observable_name(&self) -> &str;
}

fn check_targets(targets: &[usize], state: &QuantumStateVector) -> Result<(), MeasurementError> {
    let total = state.number_of_quantum_bits();
    match targets.iter().find(|&&index| index >= total) {
        Some(&index) => Err(MeasurementError::ObservableOutOfRange { index, total }),
        None => Ok(()),
    }
}

// =============================================================================
// 2. PauliZObservable
// =============================================================================

#[derive(Debug, Clone)]
pub struct PauliZObservable {
    target_qubit: usize,
}

impl PauliZObservable {
    pub fn new(target_qubit: usize) -> Self {
        Self { target_qubit }
    }
}

impl ObservableOperatorInterface for PauliZObservable {
    fn compute_expectation_value(
        &self,
        state: &QuantumStateVector,
    ) -> Result<f64, MeasurementError> {
        check_targets(&[self.target_qubit], state)?;
        Ok(state.expectation_value_pauli_z(self.target_qubit))
    }

    fn observable_name(&self) -> &str {
        "pauli_z_observable"
    }
}

// =============================================================================
// 3. PauliZProductObservable
// =============================================================================

/// ⟨Z_a ⊗ Z_b ⊗ …⟩ over distinct target qubits.
#[derive(Debug, Clone)]
pub struct PauliZProductObservable {
    target_qubits: Vec<usize>,
    name: String,
}

impl PauliZProductObservable {
    pub fn new(target_qubits: impl Into<Vec<usize>>) -> Self {
        let mut target_qubits: Vec<usize> = target_qubits.into();
        target_qubits.sort_unstable();
        target_qubits.dedup();

        let name = target_qubits
            .iter()
            .map(|q| format!("pauli_z({q})"))
            .collect::<Vec<_>>()
            .join(" @ ");

        Self {
            target_qubits,
            name,
        }
    }

    pub fn target_qubits(&self) -> &[usize] {
        &self.target_qubits
    }
}

impl ObservableOperatorInterface for PauliZProductObservable {
    fn compute_expectation_value(
        &self,
        state: &QuantumStateVector,
    ) -> Result<f64, MeasurementError> {
        check_targets(&self.target_qubits, state)?;
        Ok(state.expectation_value_pauli_z_product(&self.target_qubits))
    }

    fn observable_name(&self) -> &str {
        &self.name
    }
}
