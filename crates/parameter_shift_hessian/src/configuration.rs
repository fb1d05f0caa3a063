// =============================================================================
// Parameter-Shift Hessian - Configuration
// =============================================================================
// Table of Contents:
//   1. OutputFormat
//   2. GradientHessianConfiguration - TOML-backed settings
// =============================================================================
// Purpose: Settings for the `gradient_hessian` binary. Every field has a
//          default, so an empty or partial TOML document is valid.
//
//   log_level = "warn"
//   decimal_places = 10
//   output_format = "csv"
//   differentiation_method = "parameter-shift"
//
//   [device]
//   device_name = "default.qubit"
//   number_of_quantum_bits = 3
// =============================================================================

use crate::error::{GradientHessianError, GradientHessianResult};
use crate::evaluator::DifferentiationMethod;
use crate::variational_circuit::NUMBER_OF_QUANTUM_BITS;
use quantum_device_abstraction::DeviceConfiguration;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Beyond this an f64 carries no further decimal digits worth printing.
pub const MAXIMUM_DECIMAL_PLACES: u32 = 17;

// =============================================================================
// 1. OutputFormat
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {other:?} (expected csv or json)")),
        }
    }
}

// =============================================================================
// 2. GradientHessianConfiguration
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientHessianConfiguration {
    pub log_level: String,
    pub decimal_places: u32,
    pub output_format: OutputFormat,
    pub differentiation_method: DifferentiationMethod,
    pub device: DeviceConfiguration,
}

impl Default for GradientHessianConfiguration {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            decimal_places: 10,
            output_format: OutputFormat::default(),
            differentiation_method: DifferentiationMethod::default(),
            device: DeviceConfiguration {
                number_of_quantum_bits: NUMBER_OF_QUANTUM_BITS,
                ..DeviceConfiguration::default()
            },
        }
    }
}

impl GradientHessianConfiguration {
    pub fn from_toml_str(text: &str) -> GradientHessianResult<Self> {
        let configuration: Self = toml::from_str(text)
            .map_err(|e| GradientHessianError::Configuration(e.to_string()))?;
        configuration.validate()?;
        Ok(configuration)
    }

    pub fn load(path: &Path) -> GradientHessianResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GradientHessianError::Configuration(format!("cannot read {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> GradientHessianResult<()> {
        if self.decimal_places > MAXIMUM_DECIMAL_PLACES {
            return Err(GradientHessianError::Configuration(format!(
                "decimal_places must be at most {MAXIMUM_DECIMAL_PLACES}, got {}",
                self.decimal_places
            )));
        }
        if self.device.number_of_quantum_bits < NUMBER_OF_QUANTUM_BITS {
            return Err(GradientHessianError::Configuration(format!(
                "device needs at least {NUMBER_OF_QUANTUM_BITS} qubits, got {}",
                self.device.number_of_quantum_bits
            )));
        }
        Ok(())
    }
}
