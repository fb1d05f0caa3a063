// =============================================================================
// Parameter-Shift Hessian - gradient_hessian Binary
// =============================================================================
// Reads five comma-separated weights from stdin and prints the gradient,
// Hessian, execution count and differentiation method as one line on stdout.
// Logs go to stderr.
// =============================================================================

use anyhow::Context;
use clap::Parser;
use parameter_shift_hessian::configuration::{GradientHessianConfiguration, OutputFormat};
use parameter_shift_hessian::evaluator::DifferentiationMethod;
use parameter_shift_hessian::gradient_hessian::GradientHessianEvaluator;
use parameter_shift_hessian::input::parse_weights;
use parameter_shift_hessian::output::GradientHessianReport;
use parameter_shift_hessian::quantum_node::QuantumNode;
use parameter_shift_hessian::variational_circuit::{
    build_variational_circuit, correlation_observable,
};
use quantum_device_abstraction::{QuantumDeviceInterface, SimulatorDevice};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format: csv or json
    #[arg(long)]
    format: Option<OutputFormat>,

    #[arg(long, value_name = "N")]
    decimal_places: Option<u32>,

    /// Method name reported in the output: best, parameter-shift or finite-diff
    #[arg(long)]
    differentiation_method: Option<DifferentiationMethod>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut configuration = match &args.config {
        Some(path) => GradientHessianConfiguration::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => GradientHessianConfiguration::default(),
    };
    if let Some(format) = args.format {
        configuration.output_format = format;
    }
    if let Some(decimal_places) = args.decimal_places {
        configuration.decimal_places = decimal_places;
    }
    if let Some(method) = args.differentiation_method {
        configuration.differentiation_method = method;
    }
    configuration.validate().context("invalid configuration")?;

    init_logging(&configuration.log_level);
    tracing::debug!(?configuration, "starting gradient_hessian");

    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .context("failed to read weights from stdin")?;
    let weights = parse_weights(&text).context("invalid weights on stdin")?;

    let device = SimulatorDevice::from_configuration(&configuration.device);
    let node = QuantumNode::new(build_variational_circuit(), correlation_observable(), &device)
        .with_differentiation_method(configuration.differentiation_method);

    let result = GradientHessianEvaluator::new()
        .compute(&weights, &node)
        .context("gradient and hessian computation failed")?;

    let report = GradientHessianReport::new(
        &result,
        device.number_of_executions(),
        configuration.differentiation_method,
        configuration.decimal_places,
    );
    println!("{}", report.render(configuration.output_format)?);

    Ok(())
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
