// =============================================================================
// Parameter-Shift Hessian - Quantum Node
// =============================================================================
// Purpose: Binds a variational circuit and an observable to a device so that
//          one `evaluate` call is exactly one device execution.
// =============================================================================

use crate::error::GradientHessianResult;
use crate::evaluator::{CircuitEvaluator, DifferentiationMethod};
use quantum_device_abstraction::QuantumDeviceInterface;
use quantum_runtime::circuit_program::VariationalCircuitTemplate;
use quantum_runtime::measurement::ObservableOperatorInterface;

pub struct QuantumNode<'device> {
    circuit_template: Box<dyn VariationalCircuitTemplate>,
    observable: Box<dyn ObservableOperatorInterface>,
    device: &'device dyn QuantumDeviceInterface,
    differentiation_method: DifferentiationMethod,
}

impl<'device> QuantumNode<'device> {
    pub fn new(
        circuit_template: impl VariationalCircuitTemplate + 'static,
        observable: impl ObservableOperatorInterface + 'static,
        device: &'device dyn QuantumDeviceInterface,
    ) -> Self {
        Self {
            circuit_template: Box::new(circuit_template),
            observable: Box::new(observable),
            device,
            differentiation_method: DifferentiationMethod::default(),
        }
    }

    pub fn with_differentiation_method(mut self, method: DifferentiationMethod) -> Self {
        self.differentiation_method = method;
        self
    }

    pub fn device(&self) -> &dyn QuantumDeviceInterface {
        self.device
    }
}

impl CircuitEvaluator for QuantumNode<'_> {
    fn evaluate(&self, weights: &[f64]) -> GradientHessianResult<f64> {
        let circuit = self.circuit_template.construct_quantum_circuit(weights)?;
        Ok(self
            .device
            .execute_expectation(&circuit, self.observable.as_ref())?)
    }

    fn number_of_executions(&self) -> usize {
        self.device.number_of_executions()
    }

    fn differentiation_method(&self) -> DifferentiationMethod {
        self.differentiation_method
    }
}

impl std::fmt::Debug for QuantumNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuantumNode")
            .field("circuit_template", &self.circuit_template)
            .field("observable", &self.observable.observable_name())
            .field("device", &self.device.device_name())
            .field("differentiation_method", &self.differentiation_method)
            .finish()
    }
}
