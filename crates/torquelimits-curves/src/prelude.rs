//! Convenience re-exports for curve construction and evaluation.

pub use crate::{
    Constant, CurveError, CurveKind, CurveModel, Gauss3p, Gauss6p, Linear, SigmoidGauss3p,
    TorqueScalar,
};
