// =============================================================================
// Parameter-Shift Hessian - Quantum Runtime
// =============================================================================
// Table of Contents:
//   1. Module Declarations
//   2. Prelude Module
// =============================================================================
// Purpose: Quantum runtime layer providing a typed circuit IR, a dense state
//          vector, gate kernels, observables and the execution engine.
// =============================================================================

pub mod circuit_program;
pub mod error;
pub mod execution;
pub mod gate_operations;
pub mod measurement;
pub mod state_backend;

pub mod prelude {
    pub use crate::circuit_program::*;
    pub use crate::error::*;
    pub use crate::execution::*;
    pub use crate::gate_operations::*;
    pub use crate::measurement::*;
    pub use crate::state_backend::*;
}
