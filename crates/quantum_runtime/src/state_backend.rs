// =============================================================================
// Parameter-Shift Hessian - State Backend
// =============================================================================
// Table of Contents:
//   1. QuantumStateVector - Dense state vector representation
//   2. Pauli-Z expectation values
// =============================================================================
// Purpose: Dense complex state vector for small registers. Qubit 0 is the most
//          significant bit of a basis-state index.
// =============================================================================

use num_complex::Complex64;

// =============================================================================
// 1. QuantumStateVector - Full state vector representation
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct QuantumStateVector {
    amplitudes: Vec<Complex64>,
    number_of_quantum_bits: usize,
}

impl QuantumStateVector {
    pub fn zero_state(number_of_quantum_bits: usize) -> Self {
        let dimension = 1usize << number_of_quantum_bits;
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); dimension];
        amplitudes[0] = Complex64::new(1.0, 0.0);
        Self {
            amplitudes,
            number_of_quantum_bits,
        }
    }

    pub fn number_of_quantum_bits(&self) -> usize {
        self.number_of_quantum_bits
    }

    pub fn dimension(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn amplitude(&self, index: usize) -> Complex64 {
        self.amplitudes[index]
    }

    pub fn set_amplitude(&mut self, index: usize, value: Complex64) {
        self.amplitudes[index] = value;
    }

    pub fn swap_amplitudes(&mut self, i: usize, j: usize) {
        self.amplitudes.swap(i, j);
    }

    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Bit mask selecting `qubit` inside a basis-state index.
    pub fn qubit_mask(&self, qubit: usize) -> usize {
        1usize << (self.number_of_quantum_bits - 1 - qubit)
    }

    pub fn norm_squared(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    pub fn probability_distribution(&self) -> Vec<f64> {
        self.amplitudes.iter().map(|a| a.norm_sqr()).collect()
    }

    // =========================================================================
    // 2. Pauli-Z expectation values
    // =========================================================================

    pub fn expectation_value_pauli_z(&self, qubit: usize) -> f64 {
        self.expectation_value_pauli_z_product(&[qubit])
    }

    /// ⟨Z_a ⊗ Z_b ⊗ …⟩: each basis state contributes its probability with the
    /// sign of the parity of the selected bits. An empty product is the identity.
    pub fn expectation_value_pauli_z_product(&self, qubits: &[usize]) -> f64 {
        let mask = qubits
            .iter()
            .fold(0usize, |acc, &qubit| acc ^ self.qubit_mask(qubit));

        self.amplitudes
            .iter()
            .enumerate()
            .map(|(i, amp)| {
                let prob = amp.norm_sqr();
                if (i & mask).count_ones() % 2 == 0 {
                    prob
                } else {
                    -prob
                }
            })
            .sum()
    }
}
