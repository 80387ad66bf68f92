//! Per-DoF actuator registry and maximum joint torque evaluation
//!
//! Each degree of freedom of a kinematic model carries two actuators: a
//! concentric one for non-negative activation and an eccentric one for
//! negative activation. The [`ActuatorRegistry`] collects them, checks that
//! every DoF is covered, then answers three queries:
//!
//! - [`max_torque_pair`](ActuatorRegistry::max_torque_pair): both bounds per DoF
//! - [`max_torque`](ActuatorRegistry::max_torque): the bound the activation sign selects
//! - [`torque`](ActuatorRegistry::torque): that bound scaled by the activation
//!
//! # Lifecycle
//!
//! ```text
//! Empty --add_actuator*--> Populating --close--> Closed (read-only)
//! ```
//!
//! Queries fail with `RegistryNotClosed` until the registry is closed, and
//! adds fail with `ClosedRegistry` afterwards. A failed close is recoverable.
//!
//! # Composition
//!
//! The registry does not know its kinematic model. Mutating operations take
//! a [`KinematicModel`](torquelimits_kinematics::KinematicModel) argument
//! for the DoF count, and [`BiomechanicalModel`] pairs one model with one
//! registry so callers do not have to thread it through.
//!
//! # Concurrency
//!
//! A closed registry is immutable, so it is `Sync` and can be evaluated from
//! many threads at once. Population must happen on a single thread before
//! sharing.
//!
//! # Scalars
//!
//! All queries are generic over
//! [`TorqueScalar`](torquelimits_scalar::TorqueScalar), so the same registry
//! produces plain `f64` torques or symbolic expression graphs.

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod descriptor;
pub mod direction;
pub mod evaluator;
pub mod model;
pub mod prelude;
pub mod registry;

pub use config::{ActuatorConfig, ActuatorSetConfig};
pub use descriptor::Actuator;
pub use direction::Direction;
pub use model::BiomechanicalModel;
pub use registry::{ActuatorRegistry, ActuatorSlot};
pub use torquelimits_errors::ActuatorError;
