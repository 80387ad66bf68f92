//! Actuator registry and torque evaluation errors.
//!
//! Each variant names one violated precondition. The registry never degrades
//! gracefully: a missing or out-of-range actuator means the biomechanical
//! model is structurally invalid, so the call fails as a whole.

use core::fmt;

/// Errors raised by the actuator registry and the torque evaluator.
///
/// # Examples
///
/// ```
/// use torquelimits_errors::{ActuatorError, Precondition};
///
/// let err = ActuatorError::DofOutOfRange { dof: 4, dof_count: 2 };
/// assert_eq!(err.precondition(), Precondition::DofRange);
/// assert!(err.to_string().contains("dof 4"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActuatorError {
    /// Mutation attempted after the registry was closed.
    #[error("Cannot add an actuator after the registry has been closed")]
    ClosedRegistry,

    /// Actuator targets a DoF the kinematic model does not have.
    #[error("Actuator targets dof {dof} but the model only has {dof_count} degrees of freedom")]
    DofOutOfRange {
        /// Requested DoF index
        dof: usize,
        /// DoF count of the kinematic model
        dof_count: usize,
    },

    /// Close attempted while a DoF/direction pair has no actuator.
    #[error("Every dof must have both actuators set before closing: dof {dof} lacks its {direction} actuator")]
    IncompleteRegistry {
        /// First DoF index found without an actuator
        dof: usize,
        /// Missing direction, `"concentric"` or `"eccentric"`
        direction: &'static str,
    },

    /// Query index is beyond the populated slot count.
    #[error("Actuator index {index} is out of range for {count} populated slots")]
    IndexOutOfRange {
        /// Requested slot index
        index: usize,
        /// Number of populated slots
        count: usize,
    },

    /// Torque query issued before the registry was closed.
    #[error("Close the actuator registry before querying torques")]
    RegistryNotClosed,

    /// Curve kind name does not match any known family.
    #[error("Unknown actuator curve kind '{0}'")]
    UnknownCurveKind(String),

    /// Caller-supplied vector has the wrong length.
    #[error("{what} has {actual} components, expected {expected}")]
    DimensionMismatch {
        /// Which input was malformed (`"pose"`, `"velocity"`, `"activation"`)
        what: &'static str,
        /// Expected number of components
        expected: usize,
        /// Number of components received
        actual: usize,
    },

    /// Declarative actuator description lacks a curve parameter.
    #[error("{kind} actuator is missing parameter '{name}'")]
    MissingParameter {
        /// Curve kind being built
        kind: String,
        /// Name of the absent parameter
        name: String,
    },
}

/// The precondition a failed call violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precondition {
    /// The registry had to be open for mutation
    RegistryOpen,
    /// The registry had to be closed for evaluation
    RegistryClosed,
    /// The target DoF had to exist in the kinematic model
    DofRange,
    /// Every DoF had to carry both directions
    DofCoverage,
    /// The query index had to address a populated slot
    IndexRange,
    /// The curve kind had to be one of the known families
    CurveKind,
    /// Input vectors had to match the DoF count
    Dimensions,
    /// Declarative input had to be complete
    Parameters,
}

impl ActuatorError {
    /// Returns the precondition this error reports.
    pub fn precondition(&self) -> Precondition {
        match self {
            ActuatorError::ClosedRegistry => Precondition::RegistryOpen,
            ActuatorError::RegistryNotClosed => Precondition::RegistryClosed,
            ActuatorError::DofOutOfRange { .. } => Precondition::DofRange,
            ActuatorError::IncompleteRegistry { .. } => Precondition::DofCoverage,
            ActuatorError::IndexOutOfRange { .. } => Precondition::IndexRange,
            ActuatorError::UnknownCurveKind(_) => Precondition::CurveKind,
            ActuatorError::DimensionMismatch { .. } => Precondition::Dimensions,
            ActuatorError::MissingParameter { .. } => Precondition::Parameters,
        }
    }

    /// Returns true for errors caused by the registry lifecycle rather than
    /// by caller input.
    pub fn is_lifecycle_error(&self) -> bool {
        matches!(
            self.precondition(),
            Precondition::RegistryOpen | Precondition::RegistryClosed | Precondition::DofCoverage
        )
    }

    /// Create a dimension mismatch error.
    pub fn dimension(what: &'static str, expected: usize, actual: usize) -> Self {
        ActuatorError::DimensionMismatch {
            what,
            expected,
            actual,
        }
    }

    /// Create a missing parameter error.
    pub fn missing_parameter(kind: impl Into<String>, name: impl Into<String>) -> Self {
        ActuatorError::MissingParameter {
            kind: kind.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Precondition::RegistryOpen => "registry-open",
            Precondition::RegistryClosed => "registry-closed",
            Precondition::DofRange => "dof-range",
            Precondition::DofCoverage => "dof-coverage",
            Precondition::IndexRange => "index-range",
            Precondition::CurveKind => "curve-kind",
            Precondition::Dimensions => "dimensions",
            Precondition::Parameters => "parameters",
        };
        f.write_str(name)
    }
}
