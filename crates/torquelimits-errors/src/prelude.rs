//! Prelude module for convenient error handling imports.
//!
//! ```
//! use torquelimits_errors::prelude::*;
//!
//! fn require_closed(closed: bool) -> ActuatorResult {
//!     if !closed {
//!         return Err(ActuatorError::RegistryNotClosed);
//!     }
//!     Ok(())
//! }
//!
//! assert!(require_closed(false).is_err());
//! ```

pub use crate::{
    ActuatorResult, Result,
    actuator::{ActuatorError, Precondition},
    common::{ErrorCategory, ErrorContext, ResultExt, TorqueLimitsError},
    curve::CurveError,
    kinematics::KinematicsError,
    scalar::ScalarError,
};

/// Macro for creating an error context with key/value pairs.
///
/// # Example
///
/// ```
/// use torquelimits_errors::error_context;
///
/// let ctx = error_context!("add_actuator", "dof" => 2, "joint" => "knee");
/// assert!(ctx.to_string().contains("joint: knee"));
/// ```
#[macro_export]
macro_rules! error_context {
    ($operation:expr, $($key:expr => $value:expr),* $(,)?) => {
        $crate::ErrorContext::new($operation)
            $(.with($key, $value.to_string()))*
    };
    ($operation:expr) => {
        $crate::ErrorContext::new($operation)
    };
}
