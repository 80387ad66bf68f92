//! Gaussian position / Hill-type velocity curves.
//!
//! Both families share the velocity term and the differential-activation
//! term; they differ only in the number of Gaussian lobes in the position
//! term. Positions, velocities and every angular parameter are expressed in
//! degrees inside the formulas; callers pass radians.

use serde::{Deserialize, Serialize};

use crate::{CurveError, TorqueScalar, check_finite, degrees};

/// Shape factor of the eccentric branch of the torque-velocity relation.
pub const ECCENTRIC_SHAPE: f64 = 4.3;

/// Eccentric plateau torque as a multiple of the isometric torque `t0`.
pub const ECCENTRIC_PLATEAU_RATIO: f64 = 1.5;

/// Three-parameter Gaussian torque-angle curve with a Hill-type velocity term.
///
/// ```text
/// Tw = C / (wc + v) - Tc                 v >= 0  (concentric)
///    = E / (we - v) + Tmax               v <  0  (eccentric)
/// A  = amin + (1 - amin) / (1 + exp(-(v - wr) / w1))
/// Ta = exp(-(qopt - q)^2 / (2 r^2))
/// T  = Tw * A * Ta
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauss3p {
    /// Peak isometric torque (N·m).
    pub t0: f64,
    /// Maximum contraction velocity (°/s).
    pub wmax: f64,
    /// Hill curvature velocity (°/s).
    pub wc: f64,
    /// Minimum differential activation.
    pub amin: f64,
    /// Velocity at the activation midpoint (°/s).
    pub wr: f64,
    /// Activation sigmoid width (°/s).
    pub w1: f64,
    /// Gaussian width (°).
    pub r: f64,
    /// Optimal joint position (°).
    pub qopt: f64,
}

/// Two-lobe Gaussian torque-angle curve sharing the [`Gauss3p`] velocity term.
///
/// `Ta = exp(-(qopt - q)^2 / (2 r^2)) + exp(-(qopt2 - q)^2 / (2 r2^2))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauss6p {
    /// Velocity, activation and first-lobe parameters.
    #[serde(flatten)]
    pub base: Gauss3p,
    /// Second Gaussian width (°).
    pub r2: f64,
    /// Second optimal joint position (°).
    pub qopt2: f64,
}

impl Gauss3p {
    /// Parameter names in declaration order.
    pub const PARAMETERS: &'static [&'static str] =
        &["t0", "wmax", "wc", "amin", "wr", "w1", "r", "qopt"];

    /// Maximum torque at `position` (rad) and `velocity` (rad/s).
    pub fn max_torque<S: TorqueScalar>(&self, position: S, velocity: S) -> S {
        let position = degrees(position);
        let speed = degrees(velocity);
        let angle = self.lobe(position);
        self.velocity_term(speed.clone()) * self.activation(speed) * angle
    }

    /// Torque-velocity factor in N·m.
    ///
    /// Both branches are always built; the sign of `speed` picks one.
    pub fn velocity_term<S: TorqueScalar>(&self, speed: S) -> S {
        let t0 = S::from_f64(self.t0);
        let wc = S::from_f64(self.wc);
        let wmax = S::from_f64(self.wmax);
        let tmax = S::from_f64(ECCENTRIC_PLATEAU_RATIO * self.t0);

        let tc = t0.clone() * wc.clone() / wmax.clone();
        let c = tc.clone() * (wmax.clone() + wc.clone());
        let we = ((tmax.clone() - t0.clone()) * wmax.clone() * wc.clone())
            / (S::from_f64(ECCENTRIC_SHAPE) * t0.clone() * (wmax + wc.clone()));
        let e = -(tmax.clone() - t0) * we.clone();

        let concentric = c / (wc + speed.clone()) - tc;
        let eccentric = e / (we - speed.clone()) + tmax;
        S::select(
            speed.greater_or_equal(&S::zero()),
            concentric,
            eccentric,
        )
    }

    /// Differential activation factor, dimensionless.
    pub fn activation<S: TorqueScalar>(&self, speed: S) -> S {
        let amin = S::from_f64(self.amin);
        let exponent = -(speed - S::from_f64(self.wr)) / S::from_f64(self.w1);
        amin.clone() + (S::one() - amin) / (S::one() + exponent.exp())
    }

    fn lobe<S: TorqueScalar>(&self, position: S) -> S {
        gaussian(position, self.qopt, self.r)
    }

    /// Named parameter values in [`PARAMETERS`](Self::PARAMETERS) order.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        vec![
            ("t0", self.t0),
            ("wmax", self.wmax),
            ("wc", self.wc),
            ("amin", self.amin),
            ("wr", self.wr),
            ("w1", self.w1),
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
        check_finite("Gauss3p", &self.parameters())?;
        check_width("Gauss3p", "r", self.r)
    }
}

impl Gauss6p {
    /// Parameter names in declaration order.
    pub const PARAMETERS: &'static [&'static str] = &[
        "t0", "wmax", "wc", "amin", "wr", "w1", "r", "qopt", "r2", "qopt2",
    ];

    /// Maximum torque at `position` (rad) and `velocity` (rad/s).
    ///
    /// The velocity denominators are not guarded: with out-of-domain
    /// parameters (for instance `wc + v == 0` on the concentric side) the
    /// result is non-finite.
    pub fn max_torque<S: TorqueScalar>(&self, position: S, velocity: S) -> S {
        let position = degrees(position);
        let speed = degrees(velocity);
        let angle = self.base.lobe(position.clone()) + gaussian(position, self.qopt2, self.r2);
        self.base.velocity_term(speed.clone()) * self.base.activation(speed) * angle
    }

    /// Named parameter values in [`PARAMETERS`](Self::PARAMETERS) order.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        let mut parameters = self.base.parameters();
        parameters.push(("r2", self.r2));
        parameters.push(("qopt2", self.qopt2));
        parameters
    }

    /// Checks every parameter is finite and both Gaussian widths are non-zero.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), CurveError> {
        check_finite("Gauss6p", &self.parameters())?;
        check_width("Gauss6p", "r", self.base.r)?;
        check_width("Gauss6p", "r2", self.r2)
    }
}

/// `exp(-(center - x)^2 / (2 width^2))`.
pub(crate) fn gaussian<S: TorqueScalar>(x: S, center: f64, width: f64) -> S {
    let offset = S::from_f64(center) - x;
    let spread = S::from_f64(2.0 * width * width);
    (-offset.squared() / spread).exp()
}

pub(crate) fn check_width(
    kind: &'static str,
    name: &'static str,
    width: f64,
) -> Result<(), CurveError> {
    if width == 0.0 {
        return Err(CurveError::ZeroWidth { kind, name });
    }
    Ok(())
}
