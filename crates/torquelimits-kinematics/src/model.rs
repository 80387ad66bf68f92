//! The collaborator trait.

use core::fmt;

use nalgebra::{DVector, Isometry3};
use serde::{Deserialize, Serialize};
use torquelimits_errors::KinematicsError;

/// Index of a body inside a kinematic model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub usize);

impl BodyId {
    /// Raw index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Minimal view of a rigid-body kinematics engine.
pub trait KinematicModel {
    /// Number of generalized coordinates.
    fn number_of_dof(&self) -> usize;

    /// Looks up a body by name.
    ///
    /// # Errors
    ///
    /// [`KinematicsError::UnknownBody`] when no body has that name.
    fn body_id(&self, name: &str) -> Result<BodyId, KinematicsError>;

    /// World transform of `body` at `pose`.
    ///
    /// With `update_kinematics == false` the transforms computed by the last
    /// updating call are reused and `pose` is ignored.
    ///
    /// # Errors
    ///
    /// - [`KinematicsError::DimensionMismatch`] if `pose` has the wrong length
    /// - [`KinematicsError::KinematicsNotUpdated`] if no transforms are cached
    /// - [`KinematicsError::InvalidBodyId`] if `body` does not exist
    fn global_transform(
        &mut self,
        pose: &DVector<f64>,
        body: BodyId,
        update_kinematics: bool,
    ) -> Result<Isometry3<f64>, KinematicsError>;
}

impl<K: KinematicModel + ?Sized> KinematicModel for Box<K> {
    fn number_of_dof(&self) -> usize {
        (**self).number_of_dof()
    }

    fn body_id(&self, name: &str) -> Result<BodyId, KinematicsError> {
        (**self).body_id(name)
    }

    fn global_transform(
        &mut self,
        pose: &DVector<f64>,
        body: BodyId,
        update_kinematics: bool,
    ) -> Result<Isometry3<f64>, KinematicsError> {
        (**self).global_transform(pose, body, update_kinematics)
    }
}
