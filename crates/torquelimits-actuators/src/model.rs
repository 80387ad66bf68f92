//! A kinematic model composed with the registry it constrains.

use nalgebra::DVector;
use torquelimits_errors::ActuatorError;
use torquelimits_kinematics::KinematicModel;
use torquelimits_scalar::TorqueScalar;

use crate::{Actuator, ActuatorRegistry, Direction};

/// Owns one kinematic model and one actuator registry.
///
/// The registry is never shared: every registry operation goes through this
/// type, which passes its own kinematics in as the DoF-count collaborator.
/// Cloning the model deep-copies both parts.
///
/// # Example
///
/// ```
/// use nalgebra::DVector;
/// use torquelimits_actuators::{Actuator, BiomechanicalModel, Direction};
/// use torquelimits_curves::Constant;
/// use torquelimits_test_helpers::fixtures::two_dof_chain;
///
/// let mut model = BiomechanicalModel::new(two_dof_chain());
/// for (dof, (c, e)) in [(50.0, 40.0), (30.0, 25.0)].into_iter().enumerate() {
///     model.add_actuator(Actuator::new("arm", dof, Direction::Concentric, Constant::new(c)))?;
///     model.add_actuator(Actuator::new("arm", dof, Direction::Eccentric, Constant::new(e)))?;
/// }
/// model.close_actuators()?;
///
/// let activation = DVector::from_vec(vec![1.0, -1.0]);
/// let still = DVector::zeros(2);
/// let torque = model.torque(&activation, &still, &still)?;
/// assert_eq!(torque.as_slice(), &[50.0, -25.0]);
/// # Ok::<(), torquelimits_errors::ActuatorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct BiomechanicalModel<K> {
    kinematics: K,
    actuators: ActuatorRegistry,
}

impl<K: KinematicModel> BiomechanicalModel<K> {
    /// Model with an empty, open registry.
    pub fn new(kinematics: K) -> Self {
        Self {
            kinematics,
            actuators: ActuatorRegistry::new(),
        }
    }

    /// Model around an existing registry.
    ///
    /// # Errors
    ///
    /// [`ActuatorError::DofOutOfRange`] if the registry has slots beyond the
    /// DoF count of `kinematics`.
    pub fn with_registry(
        kinematics: K,
        actuators: ActuatorRegistry,
    ) -> Result<Self, ActuatorError> {
        let dof_count = kinematics.number_of_dof();
        if actuators.count() > dof_count {
            return Err(ActuatorError::DofOutOfRange {
                dof: actuators.count() - 1,
                dof_count,
            });
        }
        Ok(Self {
            kinematics,
            actuators,
        })
    }

    /// Kinematic model.
    pub fn kinematics(&self) -> &K {
        &self.kinematics
    }

    /// Mutable kinematic model, for transform queries that update its cache.
    pub fn kinematics_mut(&mut self) -> &mut K {
        &mut self.kinematics
    }

    /// Actuator registry.
    pub fn actuators(&self) -> &ActuatorRegistry {
        &self.actuators
    }

    pub(crate) fn replace_actuators(&mut self, actuators: ActuatorRegistry) {
        self.actuators = actuators;
    }

    /// Splits the model into its parts.
    pub fn into_parts(self) -> (K, ActuatorRegistry) {
        (self.kinematics, self.actuators)
    }

    /// Number of generalized coordinates.
    pub fn number_of_dof(&self) -> usize {
        self.kinematics.number_of_dof()
    }

    /// See [`ActuatorRegistry::add_actuator`].
    ///
    /// # Errors
    ///
    /// As [`ActuatorRegistry::add_actuator`].
    pub fn add_actuator(&mut self, actuator: Actuator) -> Result<(), ActuatorError> {
        self.actuators.add_actuator(&self.kinematics, actuator)
    }

    /// See [`ActuatorRegistry::close`].
    ///
    /// # Errors
    ///
    /// As [`ActuatorRegistry::close`].
    pub fn close_actuators(&mut self) -> Result<(), ActuatorError> {
        self.actuators.close(&self.kinematics)
    }

    /// See [`ActuatorRegistry::actuator`].
    ///
    /// # Errors
    ///
    /// As [`ActuatorRegistry::actuator`].
    pub fn actuator(&self, dof: usize, direction: Direction) -> Result<&Actuator, ActuatorError> {
        self.actuators.actuator(dof, direction)
    }

    /// See [`ActuatorRegistry::actuator_pair`].
    ///
    /// # Errors
    ///
    /// As [`ActuatorRegistry::actuator_pair`].
    pub fn actuator_pair(&self, dof: usize) -> Result<(&Actuator, &Actuator), ActuatorError> {
        self.actuators.actuator_pair(dof)
    }

    /// See [`ActuatorRegistry::count`].
    pub fn actuator_count(&self) -> usize {
        self.actuators.count()
    }

    /// See [`ActuatorRegistry::max_torque_pair`].
    ///
    /// # Errors
    ///
    /// As [`ActuatorRegistry::max_torque_pair`].
    pub fn max_torque_pair<S: TorqueScalar>(
        &self,
        pose: &DVector<S>,
        velocity: &DVector<S>,
    ) -> Result<(DVector<S>, DVector<S>), ActuatorError> {
        self.actuators.max_torque_pair(pose, velocity)
    }

    /// See [`ActuatorRegistry::max_torque`].
    ///
    /// # Errors
    ///
    /// As [`ActuatorRegistry::max_torque`].
    pub fn max_torque<S: TorqueScalar>(
        &self,
        activation: &DVector<S>,
        pose: &DVector<S>,
        velocity: &DVector<S>,
    ) -> Result<DVector<S>, ActuatorError> {
        self.actuators.max_torque(activation, pose, velocity)
    }

    /// See [`ActuatorRegistry::torque`].
    ///
    /// # Errors
    ///
    /// As [`ActuatorRegistry::torque`].
    pub fn torque<S: TorqueScalar>(
        &self,
        activation: &DVector<S>,
        pose: &DVector<S>,
        velocity: &DVector<S>,
    ) -> Result<DVector<S>, ActuatorError> {
        self.actuators.torque(activation, pose, velocity)
    }
}
