//! Constant maximum torque.

use serde::{Deserialize, Serialize};

use crate::{CurveError, TorqueScalar, check_finite};

/// Direction-independent constant limit.
///
/// # Example
///
/// ```
/// use torquelimits_curves::Constant;
///
/// let curve = Constant::new(50.0);
/// let torque: f64 = curve.max_torque();
/// assert!((torque - 50.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Constant {
    /// Maximum torque (N·m).
    pub tmax: f64,
}

impl Constant {
    /// Parameter names in declaration order.
    pub const PARAMETERS: &'static [&'static str] = &["tmax"];

    /// Creates a constant curve.
    pub fn new(tmax: f64) -> Self {
        Self { tmax }
    }

    /// Maximum torque; no pose or velocity dependence.
    #[inline]
    pub fn max_torque<S: TorqueScalar>(&self) -> S {
        S::from_f64(self.tmax)
    }

    /// Named parameter values in [`PARAMETERS`](Self::PARAMETERS) order.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("tmax", self.tmax)]
    }

    /// Checks that the limit is finite.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NonFinite`] for NaN or infinite limits.
    pub fn validate(&self) -> Result<(), CurveError> {
        check_finite("Constant", &self.parameters())
    }
}
