//! Centralized error types for torque limit evaluation
//!
//! Every crate in the workspace reports failures through the types defined
//! here, so a caller holding a [`TorqueLimitsError`] can classify any failure
//! without knowing which layer raised it.
//!
//! # Architecture
//!
//! - [`actuator`]: registry lifecycle and evaluation preconditions
//! - [`curve`]: explicit torque-curve parameter validation
//! - [`kinematics`]: failures of the kinematic-model collaborator
//! - [`scalar`]: symbolic expression evaluation
//! - [`common`]: the top-level wrapper, categories, and context helpers
//!
//! All of these errors are precondition violations. Nothing in the workspace
//! retries internally; a failed call produces no partial result.
//!
//! # Example
//!
//! ```
//! use torquelimits_errors::prelude::*;
//!
//! fn check_index(index: usize, count: usize) -> Result<usize> {
//!     if index >= count {
//!         return Err(ActuatorError::IndexOutOfRange { index, count }.into());
//!     }
//!     Ok(index)
//! }
//!
//! assert!(check_index(3, 2).is_err());
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod actuator;
pub mod common;
pub mod curve;
pub mod kinematics;
pub mod prelude;
pub mod scalar;

pub use actuator::{ActuatorError, Precondition};
pub use common::{ErrorCategory, ErrorContext, ResultExt, TorqueLimitsError};
pub use curve::CurveError;
pub use kinematics::KinematicsError;
pub use scalar::ScalarError;

/// A specialized `Result` type for workspace operations.
pub type Result<T> = std::result::Result<T, TorqueLimitsError>;

/// A specialized `Result` type for actuator registry and evaluation calls.
pub type ActuatorResult<T = ()> = std::result::Result<T, ActuatorError>;
