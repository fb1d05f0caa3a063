// =============================================================================
// Parameter-Shift Hessian - Circuit Program IR
// =============================================================================
// Table of Contents:
//   1. QuantumCircuitStructure - Ordered gate list over a fixed register
//   2. GateApplicationInstance - Single gate application
//   3. ParameterizedQuantumCircuit - Variational circuit support
//   4. VariationalCircuitTemplate - Ansatz trait
// =============================================================================
// Purpose: Circuit intermediate representation executed by the runtime.
//          Qubit indices are validated when a gate is appended, so a built
//          circuit can always be applied to a register of its own width.
// =============================================================================

use crate::error::CircuitError;
use crate::gate_operations::{
    ControlledNotGate, QuantumGateInterface, RotationXGate, RotationYGate,
};
use std::sync::Arc;
use uuid::Uuid;

// =============================================================================
// 1. QuantumCircuitStructure - Main circuit container
// =============================================================================

#[derive(Debug, Clone)]
pub struct QuantumCircuitStructure {
    id: Uuid,
    number_of_quantum_bits: usize,
    gate_application_instances: Vec<GateApplicationInstance>,
}

impl QuantumCircuitStructure {
    pub fn new(number_of_quantum_bits: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            number_of_quantum_bits,
            gate_application_instances: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn number_of_quantum_bits(&self) -> usize {
        self.number_of_quantum_bits
    }

    pub fn gate_count(&self) -> usize {
        self.gate_application_instances.len()
    }

    pub fn gate_application_instances(&self) -> &[GateApplicationInstance] {
        &self.gate_application_instances
    }

    pub fn add_gate_application(
        &mut self,
        gate: Arc<dyn QuantumGateInterface>,
    ) -> Result<&mut Self, CircuitError> {
        let target_quantum_bits = gate.target_quantum_bits();
        for &index in &target_quantum_bits {
            if index >= self.number_of_quantum_bits {
                return Err(CircuitError::InvalidQubitIndex {
                    index,
                    total: self.number_of_quantum_bits,
                });
            }
        }

        self.gate_application_instances.push(GateApplicationInstance {
            quantum_gate_interface: gate,
            target_quantum_bits,
        });
        Ok(self)
    }

    pub fn apply_rotation_x_gate(
        &mut self,
        qubit: usize,
        theta: f64,
    ) -> Result<&mut Self, CircuitError> {
        self.add_gate_application(Arc::new(RotationXGate::new(qubit, theta)))
    }

    pub fn apply_rotation_y_gate(
        &mut self,
        qubit: usize,
        theta: f64,
    ) -> Result<&mut Self, CircuitError> {
        self.add_gate_application(Arc::new(RotationYGate::new(qubit, theta)))
    }

    pub fn apply_controlled_not_gate(
        &mut self,
        control: usize,
        target: usize,
    ) -> Result<&mut Self, CircuitError> {
        if control == target {
            return Err(CircuitError::SameControlTarget(control));
        }
        self.add_gate_application(Arc::new(ControlledNotGate::new(control, target)))
    }
}

// =============================================================================
// 2. GateApplicationInstance - Single gate operation
// =============================================================================

#[derive(Debug, Clone)]
pub struct GateApplicationInstance {
    pub quantum_gate_interface: Arc<dyn QuantumGateInterface>,
    pub target_quantum_bits: Vec<usize>,
}

impl GateApplicationInstance {
    pub fn gate_name(&self) -> &str {
        self.quantum_gate_interface.gate_name()
    }

    pub fn target_qubits(&self) -> &[usize] {
        &self.target_quantum_bits
    }
}

// =============================================================================
// 3. ParameterizedQuantumCircuit - Variational circuit
// =============================================================================

type CircuitBuilder =
    dyn Fn(&[f64]) -> Result<QuantumCircuitStructure, CircuitError> + Send + Sync;

pub struct ParameterizedQuantumCircuit {
    number_of_quantum_bits: usize,
    number_of_parameters: usize,
    circuit_builder: Box<CircuitBuilder>,
}

impl ParameterizedQuantumCircuit {
    pub fn new<F>(number_of_quantum_bits: usize, number_of_parameters: usize, builder: F) -> Self
    where
        F: Fn(&[f64]) -> Result<QuantumCircuitStructure, CircuitError> + Send + Sync + 'static,
    {
        Self {
            number_of_quantum_bits,
            number_of_parameters,
            circuit_builder: Box::new(builder),
        }
    }
}

impl std::fmt::Debug for ParameterizedQuantumCircuit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterizedQuantumCircuit")
            .field("number_of_quantum_bits", &self.number_of_quantum_bits)
            .field("number_of_parameters", &self.number_of_parameters)
            .finish()
    }
}

// =============================================================================
// 4. VariationalCircuitTemplate - Ansatz trait
// =============================================================================

pub trait VariationalCircuitTemplate: Send + Sync + std::fmt::Debug {
    fn construct_quantum_circuit(
        &self,
        parameters: &[f64],
    ) -> Result<QuantumCircuitStructure, CircuitError>;
    fn number_of_parameters(&self) -> usize;
    fn number_of_quantum_bits(&self) -> usize;
}

impl VariationalCircuitTemplate for ParameterizedQuantumCircuit {
    fn construct_quantum_circuit(
        &self,
        parameters: &[f64],
    ) -> Result<QuantumCircuitStructure, CircuitError> {
        if parameters.len() != self.number_of_parameters {
            return Err(CircuitError::ParameterCountMismatch {
                expected: self.number_of_parameters,
                actual: parameters.len(),
            });
        }
        (self.circuit_builder)(parameters)
    }

    fn number_of_parameters(&self) -> usize {
        self.number_of_parameters
    }

    fn number_of_quantum_bits(&self) -> usize {
        self.number_of_quantum_bits
    }
}
