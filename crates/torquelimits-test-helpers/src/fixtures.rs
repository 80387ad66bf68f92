//! Kinematic chains and curve parameter sets shared across test suites.

use nalgebra::{Isometry3, Vector3};
use torquelimits_curves::{
    Constant, CurveModel, Gauss3p, Gauss6p, Linear, SigmoidGauss3p,
};
use torquelimits_kinematics::{Joint, Segment, SerialChain};

/// Concentric and eccentric constant limits for the two-DoF scenario.
///
/// `(concentric, eccentric)` per DoF.
pub const TWO_DOF_CONSTANT_LIMITS: [(f64, f64); 2] = [(50.0, 40.0), (30.0, 25.0)];

/// Planar chain with `dof` revolute joints about `z`, links 0.3 m apart.
///
/// Segments are named `link0`, `link1`, and so on.
pub fn planar_chain(dof: usize) -> SerialChain {
    let mut chain = SerialChain::new();
    for i in 0..dof {
        let parent = i.checked_sub(1).map(|p| format!("link{p}"));
        let offset = match i {
            0 => Isometry3::identity(),
            _ => Isometry3::translation(0.3, 0.0, 0.0),
        };
        let segment = Segment::new(
            format!("link{i}"),
            parent.as_deref(),
            Joint::revolute(Vector3::z_axis()),
        )
        .with_offset(offset);
        if let Err(e) = chain.add_segment(segment) {
            panic!("planar_chain: {e}");
        }
    }
    chain
}

/// Shoulder-elbow arm with a fixed trunk: two DoF.
pub fn two_dof_chain() -> SerialChain {
    let mut chain = SerialChain::new();
    let segments = [
        Segment::new("trunk", None, Joint::Fixed),
        Segment::new("upper_arm", Some("trunk"), Joint::revolute(Vector3::y_axis()))
            .with_offset(Isometry3::translation(0.0, 0.0, 0.5)),
        Segment::new("forearm", Some("upper_arm"), Joint::revolute(Vector3::y_axis()))
            .with_offset(Isometry3::translation(0.0, 0.0, -0.3)),
        Segment::new("hand", Some("forearm"), Joint::Fixed)
            .with_offset(Isometry3::translation(0.0, 0.0, -0.25)),
    ];
    for segment in segments {
        if let Err(e) = chain.add_segment(segment) {
            panic!("two_dof_chain: {e}");
        }
    }
    chain
}

/// Elbow flexor parameters (degrees, N·m).
pub fn elbow_gauss3p() -> Gauss3p {
    Gauss3p {
        t0: 50.0,
        wmax: 800.0,
        wc: 200.0,
        amin: 0.9,
        wr: 40.0,
        w1: -90.0,
        r: 60.0,
        qopt: 100.0,
    }
}

/// Two-lobe knee curve built on [`elbow_gauss3p`].
pub fn knee_gauss6p() -> Gauss6p {
    Gauss6p {
        base: elbow_gauss3p(),
        r2: 30.0,
        qopt2: 20.0,
    }
}

/// Sigmoid knee extensor (radians, N·m).
pub fn extensor_sigmoid() -> SigmoidGauss3p {
    SigmoidGauss3p {
        theta: 100.0,
        lambda: 2.0,
        offset: 10.0,
        r: 0.8,
        qopt: 1.0,
    }
}

/// One representative curve per family, in `CurveKind::ALL` order.
pub fn all_curve_families() -> Vec<CurveModel> {
    vec![
        Constant::new(35.0).into(),
        Linear::new(0.4, 12.0).into(),
        elbow_gauss3p().into(),
        knee_gauss6p().into(),
        extensor_sigmoid().into(),
    ]
}
