//! Convenience re-exports for building and querying actuator sets.

pub use crate::{
    Actuator, ActuatorConfig, ActuatorError, ActuatorRegistry, ActuatorSetConfig,
    BiomechanicalModel, Direction,
};
pub use torquelimits_curves::{
    Constant, CurveKind, CurveModel, Gauss3p, Gauss6p, Linear, SigmoidGauss3p,
};
pub use torquelimits_kinematics::KinematicModel;
pub use torquelimits_scalar::TorqueScalar;
