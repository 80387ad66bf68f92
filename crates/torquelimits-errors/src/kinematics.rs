//! Kinematic-model collaborator errors.

/// Errors reported by a kinematic model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KinematicsError {
    /// No body carries the requested name.
    #[error("No body named '{0}' in the kinematic model")]
    UnknownBody(String),

    /// Body identifier does not address a body of this model.
    #[error("Body id {id} is out of range for {count} bodies")]
    InvalidBodyId {
        /// Requested identifier
        id: usize,
        /// Number of bodies in the model
        count: usize,
    },

    /// Cached transforms were requested before any were computed.
    #[error("Kinematics were never updated; call with update_kinematics = true first")]
    KinematicsNotUpdated,

    /// Pose vector length differs from the DoF count.
    #[error("Pose has {actual} coordinates, expected {expected}")]
    DimensionMismatch {
        /// Expected number of generalized coordinates
        expected: usize,
        /// Number received
        actual: usize,
    },

    /// A segment references a parent that was not declared before it.
    #[error("Segment '{segment}' references unknown parent '{parent}'")]
    UnknownParent {
        /// Segment being declared
        segment: String,
        /// Missing parent name
        parent: String,
    },

    /// Two segments share a name.
    #[error("Segment name '{0}' is already used")]
    DuplicateSegment(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_body_display() {
        let err = KinematicsError::UnknownBody("forearm".to_string());
        assert!(err.to_string().contains("forearm"));
    }

    #[test]
    fn test_invalid_body_id_display() {
        let err = KinematicsError::InvalidBodyId { id: 7, count: 3 };
        assert!(err.to_string().contains("7"));
        assert!(err.to_string().contains("3 bodies"));
    }
}
