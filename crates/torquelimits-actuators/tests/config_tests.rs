//! Loading actuator sets from YAML and JSON into a model.

use nalgebra::DVector;
use torquelimits_actuators::prelude::*;
use torquelimits_errors::TorqueLimitsError;
use torquelimits_test_helpers::prelude::*;

const ARM: &str = r"
close: true
actuators:
  - joint: shoulder
    dof: 0
    direction: concentric
    kind: constant
    parameters: { tmax: 50 }
  - joint: shoulder
    dof: 0
    direction: -1
    kind: Constant
    parameters: { tmax: 40 }
  - joint: elbow
    dof: 1
    direction: 1
    kind: Gauss-3p
    parameters: { t0: 50, wmax: 800, wc: 200, amin: 0.9, wr: 40, w1: -90, r: 60, qopt: 100 }
  - joint: elbow
    dof: 1
    direction: eccentric
    kind: sigmoid_gauss_3p
    parameters: { theta: 120, lambda: 2, offset: 15, r: 0.9, qopt: 1.2 }
";

#[test]
fn test_yaml_document_builds_a_closed_model() -> TestResult {
    init_test_tracing();
    let mut model = BiomechanicalModel::new(two_dof_chain());
    model.load_actuators(&ActuatorSetConfig::from_yaml_str(ARM)?)?;

    assert!(model.actuators().is_closed());
    assert_eq!(model.actuator(1, Direction::Concentric)?.kind(), CurveKind::Gauss3p);
    assert_eq!(
        model.actuator(1, Direction::Eccentric)?.kind(),
        CurveKind::SigmoidGauss3p
    );

    let activation = DVector::from_vec(vec![1.0, 1.0]);
    let pose = DVector::from_vec(vec![0.3, 100f64.to_radians()]);
    let velocity = DVector::zeros(2);
    let torque = model.torque(&activation, &pose, &velocity)?;
    let elbow: f64 = elbow_gauss3p().max_torque(100f64.to_radians(), 0.0);
    assert_vector_approx_eq!(torque, [50.0, elbow], 1e-9);
    Ok(())
}

#[test]
fn test_open_document_leaves_registry_open() -> TestResult {
    let config = ActuatorSetConfig::from_yaml_str(&ARM.replace("close: true", "close: false"))?;
    let mut model = BiomechanicalModel::new(two_dof_chain());
    model.load_actuators(&config)?;
    assert!(!model.actuators().is_closed());
    assert_eq!(model.actuator_count(), 2);
    model.close_actuators()?;
    Ok(())
}

#[test]
fn test_registry_round_trips_through_yaml_and_json() -> TestResult {
    let mut original = BiomechanicalModel::new(two_dof_chain());
    original.load_actuators(&ActuatorSetConfig::from_yaml_str(ARM)?)?;
    let described = original.actuators().to_config();
    assert!(described.close);

    let mut from_yaml = BiomechanicalModel::new(two_dof_chain());
    from_yaml.load_actuators(&ActuatorSetConfig::from_yaml_str(&described.to_yaml_string()?)?)?;
    assert_eq!(from_yaml.actuators(), original.actuators());

    let mut from_json = BiomechanicalModel::new(two_dof_chain());
    from_json.load_actuators(&ActuatorSetConfig::from_json_str(&described.to_json_string()?)?)?;
    assert_eq!(from_json.actuators(), original.actuators());
    Ok(())
}

#[test]
fn test_invalid_entry_leaves_registry_untouched() -> TestResult {
    let broken = ARM.replace("tmax: 40", "tmax: .nan");
    let config = ActuatorSetConfig::from_yaml_str(&broken)?;
    let mut model = BiomechanicalModel::new(two_dof_chain());

    let err = must_err(model.load_actuators(&config));
    assert!(matches!(err, TorqueLimitsError::Curve(_)));
    assert_eq!(model.actuator_count(), 0);
    assert!(!model.actuators().is_closed());
    Ok(())
}

#[test]
fn test_out_of_range_entry_leaves_registry_untouched() -> TestResult {
    let config = ActuatorSetConfig::from_yaml_str(&ARM.replace("dof: 1", "dof: 4"))?;
    let mut model = BiomechanicalModel::new(two_dof_chain());
    let err = must_err(model.load_actuators(&config));
    assert_eq!(
        err.as_actuator(),
        Some(&ActuatorError::DofOutOfRange { dof: 4, dof_count: 2 })
    );
    assert_eq!(model.actuator_count(), 0);
    for direction in Direction::BOTH {
        assert!(!model.actuators().is_populated(0, direction));
    }
    Ok(())
}

#[test]
fn test_failed_close_leaves_registry_untouched() -> TestResult {
    let mut model = BiomechanicalModel::new(two_dof_chain());
    model.add_actuator(Actuator::new("shoulder", 0, Direction::Concentric, Constant::new(1.0)))?;
    let before = model.actuators().clone();

    let partial = ARM.replace("direction: eccentric", "direction: concentric");
    let err = must_err(model.load_actuators(&ActuatorSetConfig::from_yaml_str(&partial)?));
    assert!(matches!(
        err.as_actuator(),
        Some(ActuatorError::IncompleteRegistry { dof: 1, .. })
    ));
    assert_eq!(model.actuators(), &before);
    assert!(!model.actuators().is_closed());
    Ok(())
}

#[test]
fn test_load_into_closed_registry_is_rejected() -> TestResult {
    let mut model = BiomechanicalModel::new(two_dof_chain());
    model.load_actuators(&ActuatorSetConfig::from_yaml_str(ARM)?)?;
    let before = model.actuators().clone();

    let err = must_err(model.load_actuators(&ActuatorSetConfig::from_yaml_str(ARM)?));
    assert_eq!(err.as_actuator(), Some(&ActuatorError::ClosedRegistry));
    assert_eq!(model.actuators(), &before);
    Ok(())
}

#[test]
fn test_error_messages() -> TestResult {
    let unknown = ActuatorSetConfig::from_yaml_str(&ARM.replace("kind: constant", "kind: Hill"))?;
    insta::assert_snapshot!(
        must_err(unknown.build_all()).to_string(),
        @"Actuator error: Unknown actuator curve kind 'Hill'"
    );

    let missing = ARM.replace("parameters: { tmax: 50 }", "parameters: {}");
    let missing = ActuatorSetConfig::from_yaml_str(&missing)?;
    insta::assert_snapshot!(
        must_err(missing.build_all()).to_string(),
        @"Actuator error: Constant actuator is missing parameter 'tmax'"
    );

    let zero_width = ActuatorSetConfig::from_yaml_str(&ARM.replace("r: 0.9", "r: 0"))?;
    insta::assert_snapshot!(
        must_err(zero_width.build_all()).to_string(),
        @"Curve error: SigmoidGauss3p parameter 'r' is a Gaussian width and must be non-zero"
    );

    let mut model = BiomechanicalModel::new(two_dof_chain());
    let partial = ARM.replace("direction: eccentric", "direction: concentric");
    let partial = ActuatorSetConfig::from_yaml_str(&partial)?;
    insta::assert_snapshot!(
        must_err(model.load_actuators(&partial)).to_string(),
        @"Actuator error: Every dof must have both actuators set before closing: dof 1 lacks its eccentric actuator"
    );
    Ok(())
}

#[test]
fn test_json_file_is_read_by_extension() -> TestResult {
    let described = {
        let mut model = BiomechanicalModel::new(two_dof_chain());
        model.load_actuators(&ActuatorSetConfig::from_yaml_str(ARM)?)?;
        model.actuators().to_config()
    };
    let dir = std::env::temp_dir().join(format!("torquelimits-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let json = dir.join("arm.json");
    let yaml = dir.join("arm.yml");
    std::fs::write(&json, described.to_json_string()?)?;
    std::fs::write(&yaml, described.to_yaml_string()?)?;

    assert_eq!(ActuatorSetConfig::from_path(&json)?, described);
    assert_eq!(ActuatorSetConfig::from_path(&yaml)?, described);

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}
