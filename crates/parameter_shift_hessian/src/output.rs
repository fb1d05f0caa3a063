// =============================================================================
// Parameter-Shift Hessian - Result Output
// =============================================================================
// Table of Contents:
//   1. GradientHessianReport - Rounded, serializable result
//   2. CSV rendering
//   3. Number formatting
// =============================================================================
// Purpose: Turns a computed gradient and Hessian into the single result line:
//          5 gradient values, 25 row-major Hessian values, the execution count
//          and the differentiation method, comma-separated.
// =============================================================================

use crate::configuration::OutputFormat;
use crate::error::GradientHessianResult;
use crate::evaluator::DifferentiationMethod;
use crate::gradient_hessian::GradientHessian;
use serde::Serialize;

// =============================================================================
// 1. GradientHessianReport
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradientHessianReport {
    pub gradient: Vec<f64>,
    pub hessian: Vec<Vec<f64>>,
    pub number_of_executions: usize,
    pub differentiation_method: DifferentiationMethod,
}

impl GradientHessianReport {
    pub fn new(
        result: &GradientHessian,
        number_of_executions: usize,
        differentiation_method: DifferentiationMethod,
        decimal_places: u32,
    ) -> Self {
        let round = |value: &f64| round_to_decimal_places(*value, decimal_places);
        Self {
            gradient: result.gradient.iter().map(round).collect(),
            hessian: result
                .hessian
                .rows()
                .into_iter()
                .map(|row| row.iter().map(round).collect())
                .collect(),
            number_of_executions,
            differentiation_method,
        }
    }

    pub fn render(&self, format: OutputFormat) -> GradientHessianResult<String> {
        match format {
            OutputFormat::Csv => Ok(self.to_csv_line()),
            OutputFormat::Json => Ok(serde_json::to_string(self)?),
        }
    }

    // =========================================================================
    // 2. CSV rendering
    // =========================================================================

    pub fn to_csv_line(&self) -> String {
        let mut fields: Vec<String> = self
            .gradient
            .iter()
            .chain(self.hessian.iter().flatten())
            .map(|&value| format_float(value))
            .collect();
        fields.push(self.number_of_executions.to_string());
        fields.push(self.differentiation_method.to_string());
        fields.join(",")
    }
}

// =============================================================================
// 3. Number formatting
// =============================================================================

/// Round half to even at `decimal_places`, scaling by a power of ten first.
pub fn round_to_decimal_places(value: f64, decimal_places: u32) -> f64 {
    let scale = 10f64.powi(decimal_places as i32);
    (value * scale).round_ties_even() / scale
}

/// Shortest round-trip representation, keeping `.0` on integral values and
/// writing exponents with a sign and at least two digits (`1e-05`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let text = format!("{value:?}");
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => text,
    }
}
