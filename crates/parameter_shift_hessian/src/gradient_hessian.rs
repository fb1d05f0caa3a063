// =============================================================================
// Parameter-Shift Hessian - Gradient and Hessian Stencil
// =============================================================================
// Table of Contents:
//   1. Constants
//   2. GradientHessian - Result container
//   3. GradientHessianEvaluator - 51-execution parameter-shift stencil
// =============================================================================
// Purpose: Exact first and second derivatives of a circuit expectation value
//          from shifted evaluations at ±π/2.
//
//   center            f(w)                                    1 execution
//   diagonal, i       f(w ± s·eᵢ)                             2 per weight
//   off-diagonal, i<j f(w + s(±eᵢ ± eⱼ))                      4 per pair
//
//   ∂ᵢf     = (f(w+s·eᵢ) − f(w−s·eᵢ)) / 2
//   ∂ᵢ∂ᵢf   = (f(w+s·eᵢ) + f(w−s·eᵢ) − 2 f(w)) / 2
//   ∂ᵢ∂ⱼf   = (f₊₊ − f₋₊ − f₊₋ + f₋₋) / 4
// =============================================================================

use crate::error::{GradientHessianError, GradientHessianResult, InvalidInputError};
use crate::evaluator::CircuitEvaluator;
use ndarray::{Array1, Array2};
use std::f64::consts::FRAC_PI_2;

// =============================================================================
// 1. Constants
// =============================================================================

pub const NUMBER_OF_WEIGHTS: usize = 5;

pub const PARAMETER_SHIFT: f64 = FRAC_PI_2;

/// 1 + 2·5 + 4·C(5,2)
pub const EVALUATION_BUDGET: usize =
    1 + 2 * NUMBER_OF_WEIGHTS + 4 * (NUMBER_OF_WEIGHTS * (NUMBER_OF_WEIGHTS - 1) / 2);

// =============================================================================
// 2. GradientHessian - Result container
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct GradientHessian {
    pub gradient: Array1<f64>,
    pub hessian: Array2<f64>,
}

// =============================================================================
// 3. GradientHessianEvaluator
// =============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct GradientHessianEvaluator;

impl GradientHessianEvaluator {
    pub fn new() -> Self {
        Self
    }

    /// Computes the gradient and Hessian at `weights` with exactly
    /// [`EVALUATION_BUDGET`] calls to `evaluator`, which must not have served
    /// any execution before.
    pub fn compute<E>(&self, weights: &[f64], evaluator: &E) -> GradientHessianResult<GradientHessian>
    where
        E: CircuitEvaluator + ?Sized,
    {
        if weights.len() != NUMBER_OF_WEIGHTS {
            return Err(InvalidInputError::WrongWeightCount {
                expected: NUMBER_OF_WEIGHTS,
                actual: weights.len(),
            }
            .into());
        }

        tracing::debug!(?weights, "computing gradient and hessian");
        let prior = evaluator.number_of_executions();

        let mut gradient = Array1::<f64>::zeros(NUMBER_OF_WEIGHTS);
        let mut hessian = Array2::<f64>::zeros((NUMBER_OF_WEIGHTS, NUMBER_OF_WEIGHTS));

        let center = evaluator.evaluate(weights)?;

        for i in 0..NUMBER_OF_WEIGHTS {
            let forward = evaluator.evaluate(&shifted(weights, &[(i, PARAMETER_SHIFT)]))?;
            let backward = evaluator.evaluate(&shifted(weights, &[(i, -PARAMETER_SHIFT)]))?;

            gradient[i] = 0.5 * (forward - backward);
            hessian[[i, i]] = 0.5 * (forward + backward - 2.0 * center);
            tracing::debug!(index = i, value = hessian[[i, i]], "hessian diagonal entry");
        }

        for i in 0..NUMBER_OF_WEIGHTS {
            for j in (i + 1)..NUMBER_OF_WEIGHTS {
                let s = PARAMETER_SHIFT;
                let plus_plus = evaluator.evaluate(&shifted(weights, &[(i, s), (j, s)]))?;
                let minus_plus = evaluator.evaluate(&shifted(weights, &[(i, -s), (j, s)]))?;
                let plus_minus = evaluator.evaluate(&shifted(weights, &[(i, s), (j, -s)]))?;
                let minus_minus = evaluator.evaluate(&shifted(weights, &[(i, -s), (j, -s)]))?;

                hessian[[i, j]] = (plus_plus - minus_plus - plus_minus + minus_minus) / 4.0;
            }
        }

        let actual = evaluator.number_of_executions();
        if prior != 0 || actual != EVALUATION_BUDGET {
            tracing::error!(
                expected = EVALUATION_BUDGET,
                actual,
                prior,
                "evaluation budget violated"
            );
            return Err(GradientHessianError::EvaluationBudgetExceeded {
                expected: EVALUATION_BUDGET,
                actual,
                prior,
            });
        }

        for i in 0..NUMBER_OF_WEIGHTS {
            for j in (i + 1)..NUMBER_OF_WEIGHTS {
                hessian[[j, i]] = hessian[[i, j]];
            }
        }

        Ok(GradientHessian { gradient, hessian })
    }
}

fn shifted(weights: &[f64], shifts: &[(usize, f64)]) -> Vec<f64> {
    let mut perturbed = weights.to_vec();
    for &(index, amount) in shifts {
        perturbed[index] += amount;
    }
    perturbed
}
