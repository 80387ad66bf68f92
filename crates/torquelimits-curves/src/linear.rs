//! Position-dependent affine limit.

use serde::{Deserialize, Serialize};

use crate::{CurveError, TorqueScalar, check_finite, degrees};

/// Limit that varies linearly with the joint position.
///
/// `T(q) = slope * deg(q) + zero`, so `slope` is expressed in N·m per degree
/// and `zero` is the limit at the reference position.
///
/// # Example
///
/// ```
/// use torquelimits_curves::Linear;
///
/// let curve = Linear::new(0.5, 20.0);
/// let torque: f64 = curve.max_torque(10f64.to_radians());
/// assert!((torque - 25.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Linear {
    /// Torque change per degree of joint position (N·m/°).
    pub slope: f64,
    /// Torque at zero joint position (N·m).
    pub zero: f64,
}

impl Linear {
    /// Parameter names in declaration order.
    pub const PARAMETERS: &'static [&'static str] = &["slope", "zero"];

    /// Creates a linear curve.
    pub fn new(slope: f64, zero: f64) -> Self {
        Self { slope, zero }
    }

    /// Maximum torque at `position` (radians); no velocity dependence.
    #[inline]
    pub fn max_torque<S: TorqueScalar>(&self, position: S) -> S {
        degrees(position) * S::from_f64(self.slope) + S::from_f64(self.zero)
    }

    /// Named parameter values in [`PARAMETERS`](Self::PARAMETERS) order.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![("slope", self.slope), ("zero", self.zero)]
    }

    /// Checks that both coefficients are finite.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NonFinite`] naming the first bad coefficient.
    pub fn validate(&self) -> Result<(), CurveError> {
        check_finite("Linear", &self.parameters())
    }
}
