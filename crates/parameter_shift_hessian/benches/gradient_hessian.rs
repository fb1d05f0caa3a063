use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use parameter_shift_hessian::{
    ClosureEvaluator, EVALUATION_BUDGET, GradientHessianEvaluator, QuantumNode,
    build_variational_circuit, correlation_observable,
};
use quantum_device_abstraction::{QuantumDeviceInterface, SimulatorDevice};

fn bench_simulated_circuit(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient_hessian");
    group.throughput(Throughput::Elements(EVALUATION_BUDGET as u64));

    for weights in [[0.1, 0.2, 0.1, 0.2, 0.7], [0.5, -1.2, 2.0, 0.3, -0.8]] {
        group.bench_with_input(
            BenchmarkId::new("simulator", format!("{weights:?}")),
            &weights,
            |b, weights| {
                let device = SimulatorDevice::new_dense_simulator("default.qubit", 3);
                let node =
                    QuantumNode::new(build_variational_circuit(), correlation_observable(), &device);
                let evaluator = GradientHessianEvaluator::new();

                b.iter(|| {
                    device.reset_execution_count();
                    evaluator.compute(black_box(weights), &node).unwrap()
                });
            },
        );
    }

    group.finish();
}

fn bench_stencil_only(c: &mut Criterion) {
    let evaluator = GradientHessianEvaluator::new();
    let weights = [0.3, -0.4, 0.9, 1.1, -0.2];

    c.bench_function("stencil_closed_form", |b| {
        b.iter(|| {
            let function =
                ClosureEvaluator::new(|w: &[f64]| w.iter().map(|x| x.cos()).product::<f64>());
            evaluator.compute(black_box(&weights), &function).unwrap()
        });
    });
}

criterion_group!(benches, bench_simulated_circuit, bench_stencil_only);
criterion_main!(benches);
