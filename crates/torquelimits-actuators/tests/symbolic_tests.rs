//! The directed and signed modes built as symbolic graphs must reproduce the
//! plain evaluation for every activation sign.

use nalgebra::DVector;
use torquelimits_actuators::prelude::*;
use torquelimits_kinematics::SerialChain;
use torquelimits_scalar::{Bindings, Expr};
use torquelimits_test_helpers::prelude::*;

fn mixed_model() -> Result<BiomechanicalModel<SerialChain>, ActuatorError> {
    let mut model = BiomechanicalModel::new(two_dof_chain());
    model.add_actuator(Actuator::new("shoulder", 0, Direction::Concentric, elbow_gauss3p()))?;
    model.add_actuator(Actuator::new("shoulder", 0, Direction::Eccentric, knee_gauss6p()))?;
    model.add_actuator(Actuator::new("elbow", 1, Direction::Concentric, extensor_sigmoid()))?;
    model.add_actuator(Actuator::new("elbow", 1, Direction::Eccentric, Linear::new(-0.2, 30.0)))?;
    model.close_actuators()?;
    Ok(model)
}

fn symbols(prefix: &str) -> DVector<Expr> {
    DVector::from_vec(vec![
        Expr::var(format!("{prefix}0")),
        Expr::var(format!("{prefix}1")),
    ])
}

fn bind(a: [f64; 2], q: [f64; 2], qd: [f64; 2]) -> Bindings {
    let mut bindings = Bindings::new();
    for (i, ((a, q), qd)) in a.iter().zip(q).zip(qd).enumerate() {
        bindings.bind(format!("a{i}"), *a);
        bindings.bind(format!("q{i}"), q);
        bindings.bind(format!("qd{i}"), qd);
    }
    bindings
}

#[test]
fn test_symbolic_directed_matches_plain_for_all_sign_patterns() -> TestResult {
    let model = mixed_model()?;
    let graph = model.max_torque(&symbols("a"), &symbols("q"), &symbols("qd"))?;
    let signed_graph = model.torque(&symbols("a"), &symbols("q"), &symbols("qd"))?;

    let q = [1.2, 0.8];
    let qd = [0.7, -1.1];
    for a in [[0.5, 0.5], [0.5, -0.5], [-0.5, 0.5], [-0.5, -0.5], [0.0, -1.0]] {
        let bindings = bind(a, q, qd);
        let plain = model.max_torque(
            &DVector::from_vec(a.to_vec()),
            &DVector::from_vec(q.to_vec()),
            &DVector::from_vec(qd.to_vec()),
        )?;
        let signed = model.torque(
            &DVector::from_vec(a.to_vec()),
            &DVector::from_vec(q.to_vec()),
            &DVector::from_vec(qd.to_vec()),
        )?;

        let symbolic: Vec<f64> = graph
            .iter()
            .map(|e| e.evaluate(&bindings))
            .collect::<Result<_, _>>()?;
        let symbolic_signed: Vec<f64> = signed_graph
            .iter()
            .map(|e| e.evaluate(&bindings))
            .collect::<Result<_, _>>()?;

        assert_vector_approx_eq!(plain, symbolic, 1e-9);
        assert_vector_approx_eq!(signed, symbolic_signed, 1e-9);
    }
    Ok(())
}

#[test]
fn test_activation_sign_stays_in_the_graph() -> TestResult {
    let model = mixed_model()?;
    let graph = model.max_torque(&symbols("a"), &symbols("q"), &symbols("qd"))?;
    for (i, component) in graph.iter().enumerate() {
        let variables = component.variables();
        assert!(variables.contains(&format!("a{i}")), "{component}");
        assert!(component.to_string().contains("if_else"));
    }
    Ok(())
}

#[test]
fn test_symbolic_torque_is_differentiable_in_activation() -> TestResult {
    let model = mixed_model()?;
    let signed = model.torque(&symbols("a"), &symbols("q"), &symbols("qd"))?;
    let first = must_some(signed.iter().next(), "two components");
    let slope = first.derivative("a0");

    // d(a * Tmax(a))/da away from the switch is the selected Tmax.
    let bindings = bind([0.5, 0.5], [1.2, 0.8], [0.7, -1.1]);
    let expected: f64 = elbow_gauss3p().max_torque(1.2, 0.7);
    assert_approx_eq!(slope.evaluate(&bindings)?, expected, 1e-9);
    Ok(())
}

#[test]
fn test_unbound_symbol_is_reported() -> TestResult {
    let model = mixed_model()?;
    let graph = model.max_torque(&symbols("a"), &symbols("q"), &symbols("qd"))?;
    let first = must_some(graph.iter().next(), "two components");
    let err = must_err(first.evaluate(&Bindings::new().with("a0", 1.0)));
    assert!(err.to_string().contains("has no bound value"));
    Ok(())
}
