//! Kinematic model collaborator
//!
//! The actuator registry never owns a kinematic model. It queries one through
//! [`KinematicModel`] for the number of degrees of freedom, and body-level
//! consumers use the same trait to look up bodies and their world transforms.
//!
//! [`SerialChain`] is a small reference implementation: a tree of named
//! segments, each attached to its parent through a fixed, revolute or
//! prismatic joint. Non-fixed joints consume one generalized coordinate each,
//! in declaration order.
//!
//! # Example
//!
//! ```
//! use nalgebra::{DVector, Isometry3, Vector3};
//! use torquelimits_kinematics::{Joint, KinematicModel, Segment, SerialChain};
//!
//! let mut arm = SerialChain::new();
//! arm.add_segment(Segment::new("upper_arm", None, Joint::revolute(Vector3::z_axis())))?;
//! arm.add_segment(
//!     Segment::new("forearm", Some("upper_arm"), Joint::revolute(Vector3::z_axis()))
//!         .with_offset(Isometry3::translation(0.3, 0.0, 0.0)),
//! )?;
//! assert_eq!(arm.number_of_dof(), 2);
//!
//! let forearm = arm.body_id("forearm")?;
//! let pose = DVector::from_vec(vec![0.0, 0.5]);
//! let transform = arm.global_transform(&pose, forearm, true)?;
//! assert!((transform.translation.vector.x - 0.3).abs() < 1e-12);
//! # Ok::<(), torquelimits_errors::KinematicsError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod chain;
pub mod model;

pub use chain::{Joint, Segment, SerialChain};
pub use model::{BodyId, KinematicModel};
pub use torquelimits_errors::KinematicsError;
