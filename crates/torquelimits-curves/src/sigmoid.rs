//! Sigmoid velocity term with a Gaussian position term.

use serde::{Deserialize, Serialize};

use crate::gauss::{check_width, gaussian};
use crate::{CurveError, TorqueScalar, check_finite};

/// `T = (theta / (1 + exp(lambda * qdot)) + offset) * exp(-(q - qopt)^2 / (2 r^2))`
///
/// Unlike the Gaussian families this curve works in radians throughout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SigmoidGauss3p {
    /// Sigmoid amplitude (N·m).
    pub theta: f64,
    /// Sigmoid steepness (s/rad).
    pub lambda: f64,
    /// Torque offset added to the sigmoid (N·m).
    pub offset: f64,
    /// Gaussian width (rad).
    pub r: f64,
    /// Optimal joint position (rad).
    pub qopt: f64,
}

impl SigmoidGauss3p {
    /// Parameter names in declaration order.
    pub const PARAMETERS: &'static [&'static str] = &["theta", "lambda", "offset", "r", "qopt"];

    /// Maximum torque at `position` (rad) and `velocity` (rad/s).
    pub fn max_torque<S: TorqueScalar>(&self, position: S, velocity: S) -> S {
        let sigmoid = S::from_f64(self.theta)
            / (S::one() + (S::from_f64(self.lambda) * velocity).exp())
            + S::from_f64(self.offset);
        sigmoid * gaussian(position, self.qopt, self.r)
    }

    /// Named parameter values in [`PARAMETERS`](Self::PARAMETERS) order.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("theta", self.theta),
            ("lambda", self.lambda),
            ("offset", self.offset),
            ("r", self.r),
            ("qopt", self.qopt),
        ]
    }

    /// Checks every parameter is finite and the Gaussian width is non-zero.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), CurveError> {
        check_finite("SigmoidGauss3p", &self.parameters())?;
        check_width("SigmoidGauss3p", "r", self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knee_extensor() -> SigmoidGauss3p {
        SigmoidGauss3p {
            theta: 100.0,
            lambda: 2.0,
            offset: 10.0,
            r: 0.8,
            qopt: 1.0,
        }
    }

    #[test]
    fn test_isometric_peak() {
        let curve = knee_extensor();
        // theta / 2 + offset at the optimal angle
        let torque: f64 = curve.max_torque(1.0, 0.0);
        assert!((torque - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_sigmoid_limits() {
        let curve = knee_extensor();
        let slow: f64 = curve.max_torque(1.0, -50.0);
        let fast: f64 = curve.max_torque(1.0, 50.0);
        assert!((slow - 110.0).abs() < 1e-6);
        assert!((fast - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_gaussian_is_symmetric_about_qopt() {
        let curve = knee_extensor();
        let below: f64 = curve.max_torque(0.5, 0.3);
        let above: f64 = curve.max_torque(1.5, 0.3);
        assert!((below - above).abs() < 1e-9);
    }
}
