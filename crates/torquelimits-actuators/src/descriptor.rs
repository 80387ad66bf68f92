//! A single actuator: one curve bound to one DoF and direction.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};
use torquelimits_curves::{CurveKind, CurveModel};
use torquelimits_errors::ActuatorError;
use torquelimits_scalar::TorqueScalar;

use crate::Direction;

/// Actuator descriptor.
///
/// Immutable once built; the registry stores it by value so cloning a
/// registry clones every descriptor.
///
/// # Example
///
/// ```
/// use nalgebra::DVector;
/// use torquelimits_actuators::{Actuator, Direction};
/// use torquelimits_curves::Constant;
///
/// let actuator = Actuator::new("elbow", 1, Direction::Eccentric, Constant::new(25.0));
/// let pose = DVector::from_vec(vec![0.0, 0.4]);
/// let velocity = DVector::from_vec(vec![0.0, -1.0]);
/// let torque: f64 = actuator.max_torque(&pose, &velocity)?;
/// assert!((torque - 25.0).abs() < 1e-12);
/// # Ok::<(), torquelimits_errors::ActuatorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actuator {
    joint_name: String,
    dof_index: usize,
    direction: Direction,
    model: CurveModel,
}

impl Actuator {
    /// Binds `model` to `dof_index` in `direction`.
    pub fn new(
        joint_name: impl Into<String>,
        dof_index: usize,
        direction: Direction,
        model: impl Into<CurveModel>,
    ) -> Self {
        Self {
            joint_name: joint_name.into(),
            dof_index,
            direction,
            model: model.into(),
        }
    }

    /// Curve family.
    pub fn kind(&self) -> CurveKind {
        self.model.kind()
    }

    /// Contraction direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Target generalized coordinate.
    pub fn dof_index(&self) -> usize {
        self.dof_index
    }

    /// Name of the joint this actuator drives.
    pub fn joint_name(&self) -> &str {
        &self.joint_name
    }

    /// Torque curve.
    pub fn model(&self) -> &CurveModel {
        &self.model
    }

    /// Maximum torque for this actuator's own coordinate of `pose` and
    /// `velocity`.
    ///
    /// # Errors
    ///
    /// [`ActuatorError::DimensionMismatch`] if either vector is too short to
    /// contain [`dof_index`](Self::dof_index).
    pub fn max_torque<S: TorqueScalar>(
        &self,
        pose: &DVector<S>,
        velocity: &DVector<S>,
    ) -> Result<S, ActuatorError> {
        let required = self.dof_index + 1;
        let position = pose
            .get(self.dof_index)
            .cloned()
            .ok_or(ActuatorError::dimension("pose", required, pose.len()))?;
        let speed = velocity
            .get(self.dof_index)
            .cloned()
            .ok_or(ActuatorError::dimension("velocity", required, velocity.len()))?;
        Ok(self.max_torque_at(position, speed))
    }

    /// Maximum torque at a single joint position and velocity.
    #[inline]
    pub fn max_torque_at<S: TorqueScalar>(&self, position: S, velocity: S) -> S {
        self.model.max_torque(position, velocity)
    }
}
