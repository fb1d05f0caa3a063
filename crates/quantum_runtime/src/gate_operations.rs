// =============================================================================
// Parameter-Shift Hessian - Gate Operations
// =============================================================================
// Table of Contents:
//   1. QuantumGateInterface - Core trait for all gates
//   2. Single-qubit rotations (RX, RY)
//   3. Two-qubit gates (CNOT)
// =============================================================================
// Purpose: Gate operations applied in place to a dense state vector.
// =============================================================================

use crate::state_backend::QuantumStateVector;
use num_complex::Complex64;

// =============================================================================
// 1. QuantumGateInterface - Core trait for all gates
// =============================================================================

pub trait QuantumGateInterface: Send + Sync + std::fmt::Debug {
    fn apply_to_full_state_vector(&self, state: &mut QuantumStateVector);
    fn gate_name(&self) -> &str;
    fn target_quantum_bits(&self) -> Vec<usize>;
}

// =============================================================================
// 2. Single-qubit rotations
// =============================================================================

#[derive(Debug, Clone)]
pub struct RotationXGate {
    target_qubit: usize,
    theta: f64,
}

impl RotationXGate {
    pub fn new(target_qubit: usize, theta: f64) -> Self {
        Self { target_qubit, theta }
    }
}

impl QuantumGateInterface for RotationXGate {
    fn apply_to_full_state_vector(&self, state: &mut QuantumStateVector) {
        let target_mask = state.qubit_mask(self.target_qubit);

        let cos_half = Complex64::new((self.theta / 2.0).cos(), 0.0);
        let minus_i_sin_half = Complex64::new(0.0, -(self.theta / 2.0).sin());

        for i in 0..state.dimension() {
            if (i & target_mask) == 0 {
                let j = i | target_mask;
                let a = state.amplitude(i);
                let b = state.amplitude(j);
                state.set_amplitude(i, cos_half * a + minus_i_sin_half * b);
                state.set_amplitude(j, minus_i_sin_half * a + cos_half * b);
            }
        }
    }

    fn gate_name(&self) -> &str {
        "rotation_x_gate"
    }

    fn target_quantum_bits(&self) -> Vec<usize> {
        vec![self.target_qubit]
    }
}

#[derive(Debug, Clone)]
pub struct RotationYGate {
    target_qubit: usize,
    theta: f64,
}

impl RotationYGate {
    pub fn new(target_qubit: usize, theta: f64) -> Self {
        Self { target_qubit, theta }
    }
}

impl QuantumGateInterface for RotationYGate {
    fn apply_to_full_state_vector(&self, state: &mut QuantumStateVector) {
        let target_mask = state.qubit_mask(self.target_qubit);

        let cos_half = (self.theta / 2.0).cos();
        let sin_half = (self.theta / 2.0).sin();

        for i in 0..state.dimension() {
            if (i & target_mask) == 0 {
                let j = i | target_mask;
                let a = state.amplitude(i);
                let b = state.amplitude(j);
                state.set_amplitude(i, cos_half * a - sin_half * b);
                state.set_amplitude(j, sin_half * a + cos_half * b);
            }
        }
    }

    fn gate_name(&self) -> &str {
        "rotation_y_gate"
    }

    fn target_quantum_bits(&self) -> Vec<usize> {
        vec![self.target_qubit]
    }
}

// =============================================================================
// 3. Two-qubit gates
// =============================================================================

#[derive(Debug, Clone)]
pub struct ControlledNotGate {
    control_qubit: usize,
    target_qubit: usize,
}

impl ControlledNotGate {
    pub fn new(control_qubit: usize, target_qubit: usize) -> Self {
        Self {
            control_qubit,
            target_qubit,
        }
    }
}

impl QuantumGateInterface for ControlledNotGate {
    fn apply_to_full_state_vector(&self, state: &mut QuantumStateVector) {
        let control_mask = state.qubit_mask(self.control_qubit);
        let target_mask = state.qubit_mask(self.target_qubit);

        for i in 0..state.dimension() {
            if (i & control_mask) != 0 && (i & target_mask) == 0 {
                state.swap_amplitudes(i, i | target_mask);
            }
        }
    }

    fn gate_name(&self) -> &str {
        "controlled_not_gate"
    }

    fn target_quantum_bits(&self) -> Vec<usize> {
        vec![self.control_qubit, self.target_qubit]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_rotation_x_pi_flips_qubit() {
        let mut state = QuantumStateVector::zero_state(1);
        RotationXGate::new(0, PI).apply_to_full_state_vector(&mut state);

        assert!(state.amplitude(0).norm_sqr() < 1e-12);
        assert!((state.amplitude(1).norm_sqr() - 1.0).abs() < 1e-12);
        // RX(π)|0⟩ = -i|1⟩
        assert!((state.amplitude(1).im + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rotation_expectations_follow_cosine() {
        for &theta in &[0.0, 0.3, 1.1, -2.4] {
            let mut state = QuantumStateVector::zero_state(1);
            RotationXGate::new(0, theta).apply_to_full_state_vector(&mut state);
            assert!((state.expectation_value_pauli_z(0) - theta.cos()).abs() < 1e-12);

            let mut state = QuantumStateVector::zero_state(1);
            RotationYGate::new(0, theta).apply_to_full_state_vector(&mut state);
            assert!((state.expectation_value_pauli_z(0) - theta.cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_rotation_y_amplitudes_are_real() {
        let mut state = QuantumStateVector::zero_state(1);
        RotationYGate::new(0, 0.8).apply_to_full_state_vector(&mut state);

        assert!((state.amplitude(0).re - 0.4f64.cos()).abs() < 1e-12);
        assert!((state.amplitude(1).re - 0.4f64.sin()).abs() < 1e-12);
        assert!(state.amplitudes().iter().all(|a| a.im.abs() < 1e-15));
    }

    #[test]
    fn test_cnot_entanglement() {
        let mut state = QuantumStateVector::zero_state(2);
        RotationYGate::new(0, std::f64::consts::FRAC_PI_2).apply_to_full_state_vector(&mut state);
        ControlledNotGate::new(0, 1).apply_to_full_state_vector(&mut state);

        let prob_00 = state.amplitude(0b00).norm_sqr();
        let prob_11 = state.amplitude(0b11).norm_sqr();
        assert!((prob_00 - 0.5).abs() < 1e-10);
        assert!((prob_11 - 0.5).abs() < 1e-10);
        assert!((state.expectation_value_pauli_z_product(&[0, 1]) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_cnot_acts_only_when_control_set() {
        let mut state = QuantumStateVector::zero_state(3);
        ControlledNotGate::new(2, 0).apply_to_full_state_vector(&mut state);
        assert!((state.amplitude(0).re - 1.0).abs() < 1e-12);

        state.swap_amplitudes(0b000, 0b001);
        ControlledNotGate::new(2, 0).apply_to_full_state_vector(&mut state);
        assert!((state.amplitude(0b101).re - 1.0).abs() < 1e-12);
    }
}
