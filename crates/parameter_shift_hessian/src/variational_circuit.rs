// =============================================================================
// Parameter-Shift Hessian - Fixed Variational Circuit
// =============================================================================
// Table of Contents:
//   1. Circuit layout
//   2. Observable
// =============================================================================
// Purpose: The five-weight, three-qubit circuit whose derivatives are
//          computed:
//
//   RX(w0)·RX(w1)·RX(w2) → CNOT ring → RY(w3) on 1 → CNOT ring → RX(w4) on 2
//   measured as ⟨Z0 ⊗ Z2⟩, with CNOT ring = CNOT(0,1), CNOT(1,2), CNOT(2,0).
// =============================================================================

use crate::gradient_hessian::NUMBER_OF_WEIGHTS;
use quantum_runtime::circuit_program::{ParameterizedQuantumCircuit, QuantumCircuitStructure};
use quantum_runtime::error::CircuitError;
use quantum_runtime::measurement::PauliZProductObservable;

pub const NUMBER_OF_QUANTUM_BITS: usize = 3;

// =============================================================================
// 1. Circuit layout
// =============================================================================

pub fn build_variational_circuit() -> ParameterizedQuantumCircuit {
    ParameterizedQuantumCircuit::new(NUMBER_OF_QUANTUM_BITS, NUMBER_OF_WEIGHTS, |weights| {
        let mut circuit = QuantumCircuitStructure::new(NUMBER_OF_QUANTUM_BITS);

        for (qubit, &weight) in weights.iter().take(NUMBER_OF_QUANTUM_BITS).enumerate() {
            circuit.apply_rotation_x_gate(qubit, weight)?;
        }
        apply_entangling_ring(&mut circuit)?;
        circuit.apply_rotation_y_gate(1, weights[3])?;
        apply_entangling_ring(&mut circuit)?;
        circuit.apply_rotation_x_gate(2, weights[4])?;

        Ok(circuit)
    })
}

fn apply_entangling_ring(circuit: &mut QuantumCircuitStructure) -> Result<(), CircuitError> {
    for control in 0..NUMBER_OF_QUANTUM_BITS {
        circuit.apply_controlled_not_gate(control, (control + 1) % NUMBER_OF_QUANTUM_BITS)?;
    }
    Ok(())
}

// =============================================================================
// 2. Observable
// =============================================================================

pub fn correlation_observable() -> PauliZProductObservable {
    PauliZProductObservable::new(vec![0, NUMBER_OF_QUANTUM_BITS - 1])
}
