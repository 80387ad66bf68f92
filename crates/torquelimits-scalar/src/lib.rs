//! Scalar back-ends for torque limit evaluation
//!
//! Every torque computation in the workspace is written once against the
//! [`TorqueScalar`] trait and instantiated for several number types:
//!
//! - **`f64` / `f32`**: plain floating point, `select` is an ordinary branch
//! - **[`Expr`]**: a symbolic expression graph, `select` builds an `if_else`
//!   node so that data-dependent choices survive into the graph
//!
//! Branch-by-sign logic must never use host-language `if` on a scalar value.
//! Comparisons produce a [`TorqueScalar::Condition`] and the choice is made by
//! [`TorqueScalar::select`], which is what keeps the symbolic graph complete
//! and differentiable.
//!
//! # Example
//!
//! ```
//! use torquelimits_scalar::{Bindings, Expr, TorqueScalar};
//!
//! fn magnitude<S: TorqueScalar>(x: S) -> S {
//!     let negative = x.less_than(&S::zero());
//!     S::select(negative, -x.clone(), x)
//! }
//!
//! assert!((magnitude(-2.5_f64) - 2.5).abs() < 1e-12);
//!
//! let graph = magnitude(Expr::var("x"));
//! let value = graph.evaluate(&Bindings::new().with("x", -4.0))?;
//! assert!((value - 4.0).abs() < 1e-12);
//! # Ok::<(), torquelimits_errors::ScalarError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod plain;
pub mod symbolic;
pub mod traits;

pub use symbolic::{Bindings, Expr};
pub use traits::TorqueScalar;
