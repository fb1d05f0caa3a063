// =============================================================================
// Parameter-Shift Hessian - Circuit Evaluator Interface
// =============================================================================
// Table of Contents:
//   1. DifferentiationMethod - Reported differentiation strategy
//   2. CircuitEvaluator - Weights in, one expectation value out
//   3. ClosureEvaluator - Counting evaluator over a plain function
// =============================================================================
// Purpose: The seam between the derivative stencil and whatever produces
//          expectation values. Every call to `evaluate` is one execution and
//          must be reflected in `number_of_executions`.
// =============================================================================

use crate::error::GradientHessianResult;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// 1. DifferentiationMethod
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DifferentiationMethod {
    Best,
    #[default]
    ParameterShift,
    #[serde(rename = "finite-diff")]
    FiniteDifference,
}

impl DifferentiationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifferentiationMethod::Best => "best",
            DifferentiationMethod::ParameterShift => "parameter-shift",
            DifferentiationMethod::FiniteDifference => "finite-diff",
        }
    }
}

impl fmt::Display for DifferentiationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifferentiationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "best" => Ok(DifferentiationMethod::Best),
            "parameter-shift" => Ok(DifferentiationMethod::ParameterShift),
            "finite-diff" => Ok(DifferentiationMethod::FiniteDifference),
            other => Err(format!(
                "unknown differentiation method {other:?} (expected best, parameter-shift or finite-diff)"
            )),
        }
    }
}

// =============================================================================
// 2. CircuitEvaluator
// =============================================================================

pub trait CircuitEvaluator {
    fn evaluate(&self, weights: &[f64]) -> GradientHessianResult<f64>;

    /// Total executions served so far, including those before the current
    /// computation.
    fn number_of_executions(&self) -> usize;

    fn differentiation_method(&self) -> DifferentiationMethod;
}

// =============================================================================
// 3. ClosureEvaluator
// =============================================================================

/// Wraps a deterministic `Fn(&[f64]) -> f64` and counts its calls.
pub struct ClosureEvaluator<F> {
    function: F,
    number_of_executions: Cell<usize>,
    differentiation_method: DifferentiationMethod,
}

impl<F> ClosureEvaluator<F>
where
    F: Fn(&[f64]) -> f64,
{
    pub fn new(function: F) -> Self {
        Self {
            function,
            number_of_executions: Cell::new(0),
            differentiation_method: DifferentiationMethod::default(),
        }
    }

    pub fn with_differentiation_method(mut self, method: DifferentiationMethod) -> Self {
        self.differentiation_method = method;
        self
    }
}

impl<F> CircuitEvaluator for ClosureEvaluator<F>
where
    F: Fn(&[f64]) -> f64,
{
    fn evaluate(&self, weights: &[f64]) -> GradientHessianResult<f64> {
        self.number_of_executions
            .set(self.number_of_executions.get() + 1);
        Ok((self.function)(weights))
    }

    fn number_of_executions(&self) -> usize {
        self.number_of_executions.get()
    }

    fn differentiation_method(&self) -> DifferentiationMethod {
        self.differentiation_method
    }
}

impl<F> fmt::Debug for ClosureEvaluator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureEvaluator")
            .field("number_of_executions", &self.number_of_executions.get())
            .field("differentiation_method", &self.differentiation_method)
            .finish()
    }
}
