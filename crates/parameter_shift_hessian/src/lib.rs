// =============================================================================
// Parameter-Shift Hessian - Core Library
// =============================================================================
// Table of Contents:
//   1. Module Declarations
//   2. Re-exports
// =============================================================================
// Purpose: Gradient and Hessian of a five-weight variational circuit using
//          the parameter-shift rule, with exactly 51 circuit executions per
//          computation.
// =============================================================================

pub mod configuration;
pub mod error;
pub mod evaluator;
pub mod gradient_hessian;
pub mod input;
pub mod output;
pub mod quantum_node;
pub mod variational_circuit;

pub use configuration::{GradientHessianConfiguration, OutputFormat};
pub use error::{GradientHessianError, GradientHessianResult, InvalidInputError};
pub use evaluator::{CircuitEvaluator, ClosureEvaluator, DifferentiationMethod};
pub use gradient_hessian::{
    EVALUATION_BUDGET, GradientHessian, GradientHessianEvaluator, NUMBER_OF_WEIGHTS,
};
pub use input::parse_weights;
pub use output::GradientHessianReport;
pub use quantum_node::QuantumNode;
pub use variational_circuit::{build_variational_circuit, correlation_observable};
