//! Maximum and signed torque evaluation over a closed registry.
//!
//! Every entry point is generic over [`TorqueScalar`]. The activation sign
//! drives two choices, the velocity resigning and the concentric/eccentric
//! selection; both go through `select` so a symbolic scalar records them as
//! graph nodes instead of resolving them at build time.

use nalgebra::DVector;
use torquelimits_errors::ActuatorError;
use torquelimits_scalar::TorqueScalar;

use crate::ActuatorRegistry;

impl ActuatorRegistry {
    /// Concentric and eccentric maximum torques for every DoF.
    ///
    /// The activation plays no part: both bounds are returned, each
    /// evaluated with the unmodified `velocity`.
    ///
    /// # Errors
    ///
    /// - [`ActuatorError::RegistryNotClosed`] before a successful close
    /// - [`ActuatorError::DimensionMismatch`] if a vector length differs from
    ///   the DoF count
    pub fn max_torque_pair<S: TorqueScalar>(
        &self,
        pose: &DVector<S>,
        velocity: &DVector<S>,
    ) -> Result<(DVector<S>, DVector<S>), ActuatorError> {
        self.check_inputs(&[("pose", pose.len()), ("velocity", velocity.len())])?;

        let mut concentric = Vec::with_capacity(self.count());
        let mut eccentric = Vec::with_capacity(self.count());
        for dof in 0..self.count() {
            let (c, e) = self.actuator_pair(dof)?;
            concentric.push(c.max_torque(pose, velocity)?);
            eccentric.push(e.max_torque(pose, velocity)?);
        }
        Ok((DVector::from_vec(concentric), DVector::from_vec(eccentric)))
    }

    /// Maximum torque in the direction each activation asks for.
    ///
    /// For DoF `i`, a negative `activation[i]` negates `velocity[i]` and
    /// selects the eccentric actuator; otherwise the concentric actuator is
    /// evaluated with the velocity as given.
    ///
    /// # Errors
    ///
    /// As [`max_torque_pair`](Self::max_torque_pair), with `activation`
    /// also checked.
    pub fn max_torque<S: TorqueScalar>(
        &self,
        activation: &DVector<S>,
        pose: &DVector<S>,
        velocity: &DVector<S>,
    ) -> Result<DVector<S>, ActuatorError> {
        self.check_inputs(&[
            ("activation", activation.len()),
            ("pose", pose.len()),
            ("velocity", velocity.len()),
        ])?;

        let zero = S::zero();
        let resigned = DVector::from_iterator(
            velocity.len(),
            activation.iter().zip(velocity.iter()).map(|(a, v)| {
                S::select(a.less_than(&zero), -v.clone(), v.clone())
            }),
        );

        let mut directed = Vec::with_capacity(self.count());
        for (dof, a) in activation.iter().enumerate() {
            let (c, e) = self.actuator_pair(dof)?;
            directed.push(S::select(
                a.greater_or_equal(&zero),
                c.max_torque(pose, &resigned)?,
                e.max_torque(pose, &resigned)?,
            ));
        }
        Ok(DVector::from_vec(directed))
    }

    /// Signed generalized torque: the directed maximum scaled by the raw
    /// activation of each DoF.
    ///
    /// # Errors
    ///
    /// As [`max_torque`](Self::max_torque).
    pub fn torque<S: TorqueScalar>(
        &self,
        activation: &DVector<S>,
        pose: &DVector<S>,
        velocity: &DVector<S>,
    ) -> Result<DVector<S>, ActuatorError> {
        let maximum = self.max_torque(activation, pose, velocity)?;
        Ok(DVector::from_iterator(
            maximum.len(),
            maximum
                .iter()
                .zip(activation.iter())
                .map(|(m, a)| m.clone() * a.clone()),
        ))
    }

    fn check_inputs(&self, inputs: &[(&'static str, usize)]) -> Result<(), ActuatorError> {
        if !self.is_closed() {
            return Err(ActuatorError::RegistryNotClosed);
        }
        let expected = self.count();
        for &(what, actual) in inputs {
            if actual != expected {
                return Err(ActuatorError::dimension(what, expected, actual));
            }
        }
        Ok(())
    }
}
