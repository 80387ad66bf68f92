//! Maximum-torque curve families
//!
//! A curve maps a joint position and velocity to the largest torque an
//! actuator can produce there. Five families are supported:
//!
//! - **Constant**: a single limit, independent of state
//! - **Linear**: an affine function of the joint position
//! - **Gauss3p**: Gaussian position term times a Hill-type velocity term
//! - **Gauss6p**: as Gauss3p with a second Gaussian position lobe
//! - **SigmoidGauss3p**: Gaussian position term times a sigmoid velocity term
//!
//! The families form a closed set, so [`CurveModel`] is an enum and every
//! dispatch is an exhaustive `match`.
//!
//! # Scalar Back-ends
//!
//! All evaluation is generic over [`TorqueScalar`]: the same code runs on
//! `f64` and on symbolic [`Expr`](torquelimits_scalar::Expr) graphs. Branches
//! on the velocity sign go through `select`, never through `if`.
//!
//! # Parameter Domain
//!
//! Evaluation performs no validation. Parameters outside the physical domain
//! (a zero Gaussian width, a velocity denominator reaching zero) produce
//! non-finite output. Call [`CurveModel::validate`] explicitly when loading
//! untrusted parameters.
//!
//! # Example
//!
//! ```
//! use torquelimits_curves::{CurveModel, Gauss3p};
//!
//! let curve = CurveModel::Gauss3p(Gauss3p {
//!     t0: 50.0,
//!     wmax: 800.0,
//!     wc: 200.0,
//!     amin: 0.9,
//!     wr: 40.0,
//!     w1: -90.0,
//!     r: 60.0,
//!     qopt: 100.0,
//! });
//! curve.validate()?;
//!
//! let torque: f64 = curve.max_torque(100f64.to_radians(), 0.0);
//! assert!(torque > 0.0 && torque <= 50.0);
//! # Ok::<(), torquelimits_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod constant;
pub mod curve_model;
pub mod gauss;
pub mod kind;
pub mod linear;
pub mod prelude;
pub mod sigmoid;

pub use constant::Constant;
pub use curve_model::CurveModel;
pub use gauss::{ECCENTRIC_PLATEAU_RATIO, ECCENTRIC_SHAPE, Gauss3p, Gauss6p};
pub use kind::CurveKind;
pub use linear::Linear;
pub use sigmoid::SigmoidGauss3p;
pub use torquelimits_errors::CurveError;
pub use torquelimits_scalar::TorqueScalar;

pub(crate) fn check_finite(
    kind: &'static str,
    parameters: &[(&'static str, f64)],
) -> Result<(), CurveError> {
    for &(name, value) in parameters {
        if !value.is_finite() {
            return Err(CurveError::NonFinite { kind, name, value });
        }
    }
    Ok(())
}

pub(crate) fn degrees<S: TorqueScalar>(radians: S) -> S {
    radians * S::from_f64(180.0 / core::f64::consts::PI)
}
