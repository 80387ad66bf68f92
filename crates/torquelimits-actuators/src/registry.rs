//! Per-DoF storage of concentric/eccentric actuator pairs.
//!
//! The registry moves through three states:
//!
//! ```text
//! Empty --add_actuator*--> Populating --close [every pair set]--> Closed
//! ```
//!
//! A failed [`close`](ActuatorRegistry::close) leaves the registry open so
//! the missing actuators can still be added. Once closed it is read-only.

use torquelimits_errors::ActuatorError;
use torquelimits_kinematics::KinematicModel;
use tracing::{debug, info, warn};

use crate::{Actuator, Direction};

/// The two actuators of one DoF.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActuatorSlot {
    concentric: Option<Actuator>,
    eccentric: Option<Actuator>,
}

impl ActuatorSlot {
    /// Actuator for `direction`, if set.
    pub fn get(&self, direction: Direction) -> Option<&Actuator> {
        match direction {
            Direction::Concentric => self.concentric.as_ref(),
            Direction::Eccentric => self.eccentric.as_ref(),
        }
    }

    /// Both actuators when the slot is complete.
    pub fn pair(&self) -> Option<(&Actuator, &Actuator)> {
        Some((self.concentric.as_ref()?, self.eccentric.as_ref()?))
    }

    /// First direction without an actuator.
    pub fn missing(&self) -> Option<Direction> {
        Direction::BOTH
            .into_iter()
            .find(|&direction| self.get(direction).is_none())
    }

    fn set(&mut self, actuator: Actuator) -> Option<Actuator> {
        let half = match actuator.direction() {
            Direction::Concentric => &mut self.concentric,
            Direction::Eccentric => &mut self.eccentric,
        };
        half.replace(actuator)
    }
}

/// Owns every actuator of a model, indexed by DoF.
///
/// `Clone` is a deep copy: the clone shares no descriptor with the original.
///
/// # Example
///
/// ```
/// use torquelimits_actuators::{Actuator, ActuatorRegistry, Direction};
/// use torquelimits_curves::Constant;
/// use torquelimits_test_helpers::fixtures::planar_chain;
///
/// let chain = planar_chain(1);
/// let mut registry = ActuatorRegistry::new();
/// let flexor = Actuator::new("link0", 0, Direction::Concentric, Constant::new(50.0));
/// let extensor = Actuator::new("link0", 0, Direction::Eccentric, Constant::new(40.0));
/// registry.add_actuator(&chain, flexor)?;
/// registry.add_actuator(&chain, extensor)?;
/// registry.close(&chain)?;
///
/// let (concentric, eccentric) = registry.actuator_pair(0)?;
/// assert_eq!(concentric.direction(), Direction::Concentric);
/// assert_eq!(eccentric.direction(), Direction::Eccentric);
/// # Ok::<(), torquelimits_errors::ActuatorError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActuatorRegistry {
    slots: Vec<ActuatorSlot>,
    closed: bool,
}

impl ActuatorRegistry {
    /// Empty, open registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `actuator` in its DoF slot, growing the slot list as needed.
    ///
    /// An actuator already present for the same DoF and direction is
    /// replaced.
    ///
    /// # Errors
    ///
    /// - [`ActuatorError::ClosedRegistry`] after a successful close
    /// - [`ActuatorError::DofOutOfRange`] if the model has no such DoF
    pub fn add_actuator<K: KinematicModel + ?Sized>(
        &mut self,
        model: &K,
        actuator: Actuator,
    ) -> Result<(), ActuatorError> {
        if self.closed {
            return Err(ActuatorError::ClosedRegistry);
        }
        let dof = actuator.dof_index();
        let dof_count = model.number_of_dof();
        if dof >= dof_count {
            return Err(ActuatorError::DofOutOfRange { dof, dof_count });
        }
        if self.slots.len() <= dof {
            self.slots.resize_with(dof + 1, ActuatorSlot::default);
        }
        let count = self.slots.len();
        let slot = self
            .slots
            .get_mut(dof)
            .ok_or(ActuatorError::IndexOutOfRange { index: dof, count })?;

        debug!(
            dof,
            direction = %actuator.direction(),
            kind = %actuator.kind(),
            joint = actuator.joint_name(),
            "actuator added"
        );
        if let Some(previous) = slot.set(actuator) {
            warn!(
                dof,
                direction = %previous.direction(),
                replaced_kind = %previous.kind(),
                "existing actuator replaced"
            );
        }
        Ok(())
    }

    /// Freezes the registry once every DoF of `model` has both actuators.
    ///
    /// Closing an already closed registry succeeds without re-checking.
    ///
    /// # Errors
    ///
    /// - [`ActuatorError::IncompleteRegistry`] naming the first DoF and
    ///   direction without an actuator; the registry stays open
    /// - [`ActuatorError::DofOutOfRange`] if the model now has fewer DoF than
    ///   the registry has slots
    pub fn close<K: KinematicModel + ?Sized>(&mut self, model: &K) -> Result<(), ActuatorError> {
        if self.closed {
            return Ok(());
        }
        let dof_count = model.number_of_dof();
        if let Err(err) = self.check_complete(dof_count) {
            warn!(error = %err, "actuator registry cannot be closed");
            return Err(err);
        }
        self.closed = true;
        info!(dof_count, "actuator registry closed");
        Ok(())
    }

    fn check_complete(&self, dof_count: usize) -> Result<(), ActuatorError> {
        if self.slots.len() > dof_count {
            return Err(ActuatorError::DofOutOfRange {
                dof: self.slots.len() - 1,
                dof_count,
            });
        }
        for dof in 0..dof_count {
            let missing = match self.slots.get(dof) {
                Some(slot) => slot.missing(),
                None => Some(Direction::Concentric),
            };
            if let Some(direction) = missing {
                return Err(ActuatorError::IncompleteRegistry {
                    dof,
                    direction: direction.name(),
                });
            }
        }
        Ok(())
    }

    /// Concentric and eccentric actuators of `dof`.
    ///
    /// # Errors
    ///
    /// - [`ActuatorError::IndexOutOfRange`] if `dof >= count()`
    /// - [`ActuatorError::IncompleteRegistry`] if the open registry lacks one
    ///   of the two actuators
    pub fn actuator_pair(&self, dof: usize) -> Result<(&Actuator, &Actuator), ActuatorError> {
        let slot = self.slot(dof)?;
        match slot.missing() {
            Some(direction) => Err(ActuatorError::IncompleteRegistry {
                dof,
                direction: direction.name(),
            }),
            None => slot.pair().ok_or(ActuatorError::IncompleteRegistry {
                dof,
                direction: Direction::Concentric.name(),
            }),
        }
    }

    /// Actuator of `dof` in `direction`.
    ///
    /// # Errors
    ///
    /// As [`actuator_pair`](Self::actuator_pair).
    pub fn actuator(&self, dof: usize, direction: Direction) -> Result<&Actuator, ActuatorError> {
        self.slot(dof)?
            .get(direction)
            .ok_or(ActuatorError::IncompleteRegistry {
                dof,
                direction: direction.name(),
            })
    }

    fn slot(&self, dof: usize) -> Result<&ActuatorSlot, ActuatorError> {
        self.slots.get(dof).ok_or(ActuatorError::IndexOutOfRange {
            index: dof,
            count: self.slots.len(),
        })
    }

    /// Number of DoF slots, populated or not.
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    /// Whether [`close`](Self::close) has succeeded.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Whether `dof` has an actuator for `direction`.
    pub fn is_populated(&self, dof: usize, direction: Direction) -> bool {
        self.slots
            .get(dof)
            .is_some_and(|slot| slot.get(direction).is_some())
    }

    /// All slots in DoF order.
    pub fn slots(&self) -> &[ActuatorSlot] {
        &self.slots
    }

    /// Every stored actuator, concentric before eccentric within a DoF.
    pub fn iter(&self) -> impl Iterator<Item = &Actuator> {
        self.slots.iter().flat_map(|slot| {
            Direction::BOTH
                .into_iter()
                .filter_map(move |direction| slot.get(direction))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use torquelimits_curves::Constant;
    use torquelimits_kinematics::{BodyId, KinematicsError};

    struct FixedDof(usize);

    impl KinematicModel for FixedDof {
        fn number_of_dof(&self) -> usize {
            self.0
        }

        fn body_id(&self, name: &str) -> Result<BodyId, KinematicsError> {
            Err(KinematicsError::UnknownBody(name.to_string()))
        }

        fn global_transform(
            &mut self,
            _pose: &nalgebra::DVector<f64>,
            _body: BodyId,
            _update_kinematics: bool,
        ) -> Result<nalgebra::Isometry3<f64>, KinematicsError> {
            Err(KinematicsError::KinematicsNotUpdated)
        }
    }

    fn constant(dof: usize, direction: Direction, tmax: f64) -> Actuator {
        Actuator::new(format!("joint{dof}"), dof, direction, Constant::new(tmax))
    }

    #[test]
    fn test_slots_grow_to_highest_dof() -> Result<(), ActuatorError> {
        let model = FixedDof(4);
        let mut registry = ActuatorRegistry::new();
        registry.add_actuator(&model, constant(2, Direction::Eccentric, 1.0))?;
        assert_eq!(registry.count(), 3);
        assert!(registry.is_populated(2, Direction::Eccentric));
        assert!(!registry.is_populated(2, Direction::Concentric));
        assert!(!registry.is_populated(0, Direction::Eccentric));

        registry.add_actuator(&model, constant(0, Direction::Concentric, 1.0))?;
        assert_eq!(registry.count(), 3);
        Ok(())
    }

    #[test]
    fn test_dof_out_of_range() {
        let model = FixedDof(2);
        let mut registry = ActuatorRegistry::new();
        assert_eq!(
            registry.add_actuator(&model, constant(2, Direction::Concentric, 1.0)),
            Err(ActuatorError::DofOutOfRange {
                dof: 2,
                dof_count: 2
            })
        );
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_duplicate_add_replaces() -> Result<(), ActuatorError> {
        let model = FixedDof(1);
        let mut registry = ActuatorRegistry::new();
        registry.add_actuator(&model, constant(0, Direction::Concentric, 10.0))?;
        registry.add_actuator(&model, constant(0, Direction::Concentric, 20.0))?;
        let actuator = registry.actuator(0, Direction::Concentric)?;
        assert_eq!(actuator.model(), &Constant::new(20.0).into());
        assert_eq!(registry.iter().count(), 1);
        Ok(())
    }

    #[test]
    fn test_close_reports_first_missing_slot() -> Result<(), ActuatorError> {
        let model = FixedDof(3);
        let mut registry = ActuatorRegistry::new();
        registry.add_actuator(&model, constant(0, Direction::Concentric, 1.0))?;
        registry.add_actuator(&model, constant(0, Direction::Eccentric, 1.0))?;
        registry.add_actuator(&model, constant(1, Direction::Concentric, 1.0))?;
        assert_eq!(
            registry.close(&model),
            Err(ActuatorError::IncompleteRegistry {
                dof: 1,
                direction: "eccentric"
            })
        );
        registry.add_actuator(&model, constant(1, Direction::Eccentric, 1.0))?;
        assert_eq!(
            registry.close(&model),
            Err(ActuatorError::IncompleteRegistry {
                dof: 2,
                direction: "concentric"
            })
        );
        assert!(!registry.is_closed());
        Ok(())
    }

    #[test]
    fn test_close_is_terminal() -> Result<(), ActuatorError> {
        let model = FixedDof(1);
        let mut registry = ActuatorRegistry::new();
        for direction in Direction::BOTH {
            registry.add_actuator(&model, constant(0, direction, 1.0))?;
        }
        registry.close(&model)?;
        registry.close(&model)?;
        assert!(registry.is_closed());

        let before = registry.clone();
        assert_eq!(
            registry.add_actuator(&model, constant(0, Direction::Concentric, 9.0)),
            Err(ActuatorError::ClosedRegistry)
        );
        assert_eq!(registry, before);
        Ok(())
    }

    #[test]
    fn test_close_after_model_shrank() -> Result<(), ActuatorError> {
        let mut registry = ActuatorRegistry::new();
        registry.add_actuator(&FixedDof(3), constant(2, Direction::Concentric, 1.0))?;
        assert_eq!(
            registry.close(&FixedDof(2)),
            Err(ActuatorError::DofOutOfRange {
                dof: 2,
                dof_count: 2
            })
        );
        Ok(())
    }

    #[test]
    fn test_zero_dof_model_closes_empty() -> Result<(), ActuatorError> {
        let mut registry = ActuatorRegistry::new();
        registry.close(&FixedDof(0))?;
        assert!(registry.is_closed());
        assert_eq!(registry.count(), 0);
        Ok(())
    }

    #[test]
    fn test_query_errors() -> Result<(), ActuatorError> {
        let model = FixedDof(2);
        let mut registry = ActuatorRegistry::new();
        registry.add_actuator(&model, constant(0, Direction::Concentric, 1.0))?;

        assert_eq!(
            registry.actuator_pair(1).map(|_| ()),
            Err(ActuatorError::IndexOutOfRange { index: 1, count: 1 })
        );
        assert_eq!(
            registry.actuator_pair(0).map(|_| ()),
            Err(ActuatorError::IncompleteRegistry {
                dof: 0,
                direction: "eccentric"
            })
        );
        assert!(registry.actuator(0, Direction::Concentric).is_ok());
        Ok(())
    }
}
