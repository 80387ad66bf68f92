//! Reference tree of rigid segments.

use std::collections::HashMap;

use nalgebra::{DVector, Isometry3, Translation3, UnitQuaternion, UnitVector3};
use torquelimits_errors::KinematicsError;
use tracing::trace;

use crate::model::{BodyId, KinematicModel};

/// How a segment moves relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Joint {
    /// Rigidly attached; consumes no coordinate.
    Fixed,
    /// Rotation about `axis` by the coordinate (rad).
    Revolute {
        /// Rotation axis in the segment frame
        axis: UnitVector3<f64>,
    },
    /// Translation along `axis` by the coordinate (m).
    Prismatic {
        /// Translation axis in the segment frame
        axis: UnitVector3<f64>,
    },
}

impl Joint {
    /// Revolute joint about `axis`.
    pub fn revolute(axis: UnitVector3<f64>) -> Self {
        Joint::Revolute { axis }
    }

    /// Prismatic joint along `axis`.
    pub fn prismatic(axis: UnitVector3<f64>) -> Self {
        Joint::Prismatic { axis }
    }

    /// Number of generalized coordinates this joint consumes.
    pub fn dof(&self) -> usize {
        match self {
            Joint::Fixed => 0,
            Joint::Revolute { .. } | Joint::Prismatic { .. } => 1,
        }
    }

    fn motion(&self, coordinate: f64) -> Isometry3<f64> {
        match self {
            Joint::Fixed => Isometry3::identity(),
            Joint::Revolute { axis } => Isometry3::from_parts(
                Translation3::identity(),
                UnitQuaternion::from_axis_angle(axis, coordinate),
            ),
            Joint::Prismatic { axis } => Isometry3::from_parts(
                Translation3::from(axis.into_inner() * coordinate),
                UnitQuaternion::identity(),
            ),
        }
    }
}

/// A named rigid body and the joint attaching it to its parent.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Unique segment name.
    pub name: String,
    /// Parent segment name; `None` attaches to the world frame.
    pub parent: Option<String>,
    /// Static transform from the parent frame to the joint frame.
    pub offset: Isometry3<f64>,
    /// Joint motion applied after `offset`.
    pub joint: Joint,
}

impl Segment {
    /// Segment with an identity offset.
    pub fn new(name: impl Into<String>, parent: Option<&str>, joint: Joint) -> Self {
        Self {
            name: name.into(),
            parent: parent.map(str::to_string),
            offset: Isometry3::identity(),
            joint,
        }
    }

    /// Replace the static offset.
    pub fn with_offset(mut self, offset: Isometry3<f64>) -> Self {
        self.offset = offset;
        self
    }
}

#[derive(Debug, Clone)]
struct Body {
    segment: Segment,
    parent: Option<usize>,
    /// Index of the first coordinate consumed by the joint, if any.
    coordinate: Option<usize>,
}

/// Tree of segments with forward kinematics and a transform cache.
///
/// Parents must be declared before their children, so bodies are already in
/// topological order and a single forward pass computes every transform.
#[derive(Debug, Clone, Default)]
pub struct SerialChain {
    bodies: Vec<Body>,
    names: HashMap<String, usize>,
    dof: usize,
    cache: Option<Vec<Isometry3<f64>>>,
}

impl SerialChain {
    /// Empty chain with no degrees of freedom.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment and returns its body id.
    ///
    /// Invalidates cached transforms.
    ///
    /// # Errors
    ///
    /// - [`KinematicsError::DuplicateSegment`] if the name is taken
    /// - [`KinematicsError::UnknownParent`] if the parent was not declared
    pub fn add_segment(&mut self, segment: Segment) -> Result<BodyId, KinematicsError> {
        if self.names.contains_key(&segment.name) {
            return Err(KinematicsError::DuplicateSegment(segment.name));
        }
        let parent = match &segment.parent {
            None => None,
            Some(parent) => match self.names.get(parent) {
                Some(&index) => Some(index),
                None => {
                    return Err(KinematicsError::UnknownParent {
                        segment: segment.name,
                        parent: parent.clone(),
                    });
                }
            },
        };

        let coordinate = match segment.joint.dof() {
            0 => None,
            _ => Some(self.dof),
        };
        self.dof += segment.joint.dof();

        let id = self.bodies.len();
        self.names.insert(segment.name.clone(), id);
        self.bodies.push(Body {
            segment,
            parent,
            coordinate,
        });
        self.cache = None;
        Ok(BodyId(id))
    }

    /// Number of segments.
    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    /// Name of a body.
    pub fn body_name(&self, body: BodyId) -> Option<&str> {
        self.bodies.get(body.0).map(|b| b.segment.name.as_str())
    }

    /// Segment names in declaration order.
    pub fn segment_names(&self) -> impl Iterator<Item = &str> {
        self.bodies.iter().map(|b| b.segment.name.as_str())
    }

    /// Whether transforms from a previous update are available.
    pub fn has_cached_kinematics(&self) -> bool {
        self.cache.is_some()
    }

    /// Recomputes every body's world transform at `pose`.
    ///
    /// # Errors
    ///
    /// [`KinematicsError::DimensionMismatch`] if `pose.len()` differs from
    /// the DoF count.
    pub fn update_kinematics(&mut self, pose: &DVector<f64>) -> Result<(), KinematicsError> {
        if pose.len() != self.dof {
            return Err(KinematicsError::DimensionMismatch {
                expected: self.dof,
                actual: pose.len(),
            });
        }

        let mut transforms: Vec<Isometry3<f64>> = Vec::with_capacity(self.bodies.len());
        for body in &self.bodies {
            let base = body
                .parent
                .and_then(|p| transforms.get(p).copied())
                .unwrap_or_else(Isometry3::identity);
            let coordinate = body
                .coordinate
                .and_then(|c| pose.get(c).copied())
                .unwrap_or(0.0);
            transforms.push(base * body.segment.offset * body.segment.joint.motion(coordinate));
        }

        trace!(bodies = transforms.len(), "kinematics updated");
        self.cache = Some(transforms);
        Ok(())
    }
}

impl KinematicModel for SerialChain {
    fn number_of_dof(&self) -> usize {
        self.dof
    }

    fn body_id(&self, name: &str) -> Result<BodyId, KinematicsError> {
        self.names
            .get(name)
            .map(|&index| BodyId(index))
            .ok_or_else(|| KinematicsError::UnknownBody(name.to_string()))
    }

    fn global_transform(
        &mut self,
        pose: &DVector<f64>,
        body: BodyId,
        update_kinematics: bool,
    ) -> Result<Isometry3<f64>, KinematicsError> {
        if update_kinematics {
            self.update_kinematics(pose)?;
        }
        let cache = self
            .cache
            .as_ref()
            .ok_or(KinematicsError::KinematicsNotUpdated)?;
        cache
            .get(body.0)
            .copied()
            .ok_or(KinematicsError::InvalidBodyId {
                id: body.0,
                count: cache.len(),
            })
    }
}
