//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use torquelimits_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_err, must_parse, must_some, must_with};
pub use crate::{assert_approx_eq, assert_finite, assert_vector_approx_eq};

#[cfg(feature = "fixtures")]
pub use crate::fixtures::{
    TWO_DOF_CONSTANT_LIMITS, all_curve_families, elbow_gauss3p, extensor_sigmoid, knee_gauss6p,
    planar_chain, two_dof_chain,
};

#[cfg(feature = "tracing")]
pub use crate::init_test_tracing;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;
