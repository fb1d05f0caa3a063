// =============================================================================
// Parameter-Shift Hessian - Simulated Circuit Integration Tests
// =============================================================================
// Runs the full computation against the dense simulator and checks it against
// reference values and central finite differences of the circuit itself.
// =============================================================================

use ndarray::{Array2, array};
use parameter_shift_hessian::{
    CircuitEvaluator, DifferentiationMethod, EVALUATION_BUDGET, GradientHessian,
    GradientHessianError, GradientHessianEvaluator, GradientHessianReport, NUMBER_OF_WEIGHTS,
    QuantumNode, build_variational_circuit, correlation_observable, parse_weights,
};
use quantum_device_abstraction::{QuantumDeviceInterface, SimulatorDevice};

const TOLERANCE: f64 = 1e-9;

fn compute_on_simulator(weights: &[f64]) -> (GradientHessian, usize) {
    let device = SimulatorDevice::new_dense_simulator("default.qubit", 3);
    let node = QuantumNode::new(build_variational_circuit(), correlation_observable(), &device);
    let result = GradientHessianEvaluator::new()
        .compute(weights, &node)
        .unwrap();
    (result, device.number_of_executions())
}

fn circuit_value(weights: &[f64]) -> f64 {
    let device = SimulatorDevice::new_dense_simulator("default.qubit", 3);
    QuantumNode::new(build_variational_circuit(), correlation_observable(), &device)
        .evaluate(weights)
        .unwrap()
}

fn assert_close(actual: f64, expected: f64, tolerance: f64, what: &str) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{what}: expected {expected}, got {actual}"
    );
}

fn assert_symmetric(hessian: &Array2<f64>) {
    for i in 0..NUMBER_OF_WEIGHTS {
        for j in 0..NUMBER_OF_WEIGHTS {
            assert_eq!(hessian[[i, j]], hessian[[j, i]]);
        }
    }
}

#[test]
fn test_reference_weights() {
    let weights = [0.1, 0.2, 0.1, 0.2, 0.7];
    assert_close(circuit_value(&weights), 0.6083294911254773, TOLERANCE, "f(w)");

    let (result, executions) = compute_on_simulator(&weights);
    assert_eq!(executions, EVALUATION_BUDGET);
    assert_eq!(executions, 51);

    let expected_gradient = [
        0.0012756024,
        -0.7668909241,
        -0.1890228368,
        -0.0374176229,
        -0.7914937431,
    ];
    let expected_hessian = array![
        [0.012713476, 0.0, 0.012713476, 0.0062927444, 0.0015144486],
        [0.0, -0.6210429671, 0.0769457494, 0.1248084389, -0.6036371367],
        [0.012713476, 0.0769457494, -0.6083294911, -0.6276219392, -0.0725364203],
        [0.0062927444, 0.1248084389, -0.6276219392, 0.1375219149, -0.0444237671],
        [0.0015144486, -0.6036371367, -0.0725364203, -0.0444237671, -0.6083294911],
    ];

    for (i, expected) in expected_gradient.iter().enumerate() {
        assert_close(result.gradient[i], *expected, 1e-9, "gradient");
    }
    for ((i, j), expected) in expected_hessian.indexed_iter() {
        assert_close(result.hessian[[i, j]], *expected, 1e-9, &format!("hessian[{i}][{j}]"));
    }
    assert_symmetric(&result.hessian);
}

#[test]
fn test_second_reference_point() {
    let weights = [0.5, -1.2, 2.0, 0.3, -0.8];
    assert_close(circuit_value(&weights), 0.3299182359499718, TOLERANCE, "f(w)");

    let (result, executions) = compute_on_simulator(&weights);
    assert_eq!(executions, 51);

    let expected_gradient = [
        -0.0924164111,
        -0.3735698609,
        0.2738270238,
        0.4646464884,
        -0.5306294692,
    ];
    let expected_hessian = array![
        [-0.1691671057, 0.0, 0.0422950687, -0.2987571329, 0.0897561678],
        [0.0, -0.1607511302, -0.8162650377, 0.0319673127, -0.1778705029],
        [0.0422950687, -0.8162650377, -0.3299182359, -0.4299441766, -0.7252577973],
        [-0.2987571329, 0.0319673127, -0.4299441766, -0.4349774506, -0.4512714537],
        [0.0897561678, -0.1778705029, -0.7252577973, -0.4512714537, -0.3299182359],
    ];

    for (i, expected) in expected_gradient.iter().enumerate() {
        assert_close(result.gradient[i], *expected, 1e-9, "gradient");
    }
    for ((i, j), expected) in expected_hessian.indexed_iter() {
        assert_close(result.hessian[[i, j]], *expected, 1e-9, &format!("hessian[{i}][{j}]"));
    }
}

#[test]
fn test_zero_weights() {
    let (result, executions) = compute_on_simulator(&[0.0; NUMBER_OF_WEIGHTS]);
    assert_eq!(executions, 51);

    for value in result.gradient.iter() {
        assert_close(*value, 0.0, 1e-12, "gradient");
    }
    let minus_one = [(1, 1), (1, 4), (4, 1), (4, 4), (2, 2)];
    for ((i, j), value) in result.hessian.indexed_iter() {
        let expected = if minus_one.contains(&(i, j)) { -1.0 } else { 0.0 };
        assert_close(*value, expected, 1e-12, &format!("hessian[{i}][{j}]"));
    }
}

#[test]
fn test_matches_central_finite_differences() {
    let weights = [0.3, -0.4, 0.9, 1.1, -0.2];
    let (result, _) = compute_on_simulator(&weights);
    let h = 1e-4;

    let at = |shifts: &[(usize, f64)]| {
        let mut w = weights.to_vec();
        for &(index, amount) in shifts {
            w[index] += amount;
        }
        circuit_value(&w)
    };

    for i in 0..NUMBER_OF_WEIGHTS {
        let derivative = (at(&[(i, h)]) - at(&[(i, -h)])) / (2.0 * h);
        assert_close(result.gradient[i], derivative, 1e-6, "gradient vs finite difference");

        for j in 0..NUMBER_OF_WEIGHTS {
            let second = if i == j {
                (at(&[(i, h)]) - 2.0 * at(&[]) + at(&[(i, -h)])) / (h * h)
            } else {
                (at(&[(i, h), (j, h)]) - at(&[(i, h), (j, -h)]) - at(&[(i, -h), (j, h)])
                    + at(&[(i, -h), (j, -h)]))
                    / (4.0 * h * h)
            };
            assert_close(result.hessian[[i, j]], second, 1e-5, "hessian vs finite difference");
        }
    }
}

#[test]
fn test_reused_device_fails_budget() {
    let device = SimulatorDevice::new_dense_simulator("default.qubit", 3);
    let node = QuantumNode::new(build_variational_circuit(), correlation_observable(), &device);
    let evaluator = GradientHessianEvaluator::new();

    evaluator.compute(&[0.1; NUMBER_OF_WEIGHTS], &node).unwrap();
    let err = evaluator
        .compute(&[0.1; NUMBER_OF_WEIGHTS], &node)
        .unwrap_err();
    assert!(matches!(
        err,
        GradientHessianError::EvaluationBudgetExceeded {
            expected: 51,
            actual: 102,
            prior: 51
        }
    ));

    device.reset_execution_count();
    assert!(evaluator.compute(&[0.1; NUMBER_OF_WEIGHTS], &node).is_ok());
}

#[test]
fn test_end_to_end_csv_line() {
    let weights = parse_weights("0.1,0.2,0.1,0.2,0.7\n").unwrap();
    let device = SimulatorDevice::new_dense_simulator("default.qubit", 3);
    let node = QuantumNode::new(build_variational_circuit(), correlation_observable(), &device);
    let result = GradientHessianEvaluator::new()
        .compute(&weights, &node)
        .unwrap();

    let report = GradientHessianReport::new(
        &result,
        device.number_of_executions(),
        node.differentiation_method(),
        10,
    );
    let line = report.to_csv_line();
    let fields: Vec<&str> = line.split(',').collect();

    assert_eq!(fields.len(), 32);
    assert!(line.ends_with(",51,parameter-shift"));
    assert!(!line.contains('\n'));

    let gradient_1: f64 = fields[1].parse().unwrap();
    assert_close(gradient_1, -0.7668909241, 1e-10, "rounded gradient");
    let hessian_22: f64 = fields[5 + 2 * 5 + 2].parse().unwrap();
    assert_close(hessian_22, -0.6083294911, 1e-10, "rounded hessian");
    assert_eq!(
        report.differentiation_method,
        DifferentiationMethod::ParameterShift
    );
}
