//! Top-level error type and utilities shared by every crate.
//!
//! This module provides the wrapper enum that absorbs all sub-errors, along
//! with a coarse classification and a context-attaching extension trait.

use core::fmt;

use crate::{ActuatorError, CurveError, KinematicsError, ScalarError};

/// Top-level error type that can wrap every sub-error of the workspace.
#[derive(Debug, thiserror::Error)]
pub enum TorqueLimitsError {
    /// Registry lifecycle and evaluation errors
    #[error("Actuator error: {0}")]
    Actuator(#[from] ActuatorError),

    /// Curve parameter validation errors
    #[error("Curve error: {0}")]
    Curve(#[from] CurveError),

    /// Kinematic-model errors
    #[error("Kinematics error: {0}")]
    Kinematics(#[from] KinematicsError),

    /// Symbolic evaluation errors
    #[error("Scalar error: {0}")]
    Scalar(#[from] ScalarError),

    /// Malformed configuration documents
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

impl TorqueLimitsError {
    /// Get the error category for classification.
    pub fn category(&self) -> ErrorCategory {
        match self {
            TorqueLimitsError::Actuator(_) => ErrorCategory::Actuator,
            TorqueLimitsError::Curve(_) => ErrorCategory::Curve,
            TorqueLimitsError::Kinematics(_) => ErrorCategory::Kinematics,
            TorqueLimitsError::Scalar(_) => ErrorCategory::Scalar,
            TorqueLimitsError::Config(_) => ErrorCategory::Config,
            TorqueLimitsError::Other(_) => ErrorCategory::Other,
        }
    }

    /// Returns the wrapped actuator error, if any.
    pub fn as_actuator(&self) -> Option<&ActuatorError> {
        match self {
            TorqueLimitsError::Actuator(e) => Some(e),
            _ => None,
        }
    }

    /// Create a configuration error with a message.
    pub fn config(msg: impl Into<String>) -> Self {
        TorqueLimitsError::Config(msg.into())
    }

    /// Create a generic error with a message.
    pub fn other(msg: impl Into<String>) -> Self {
        TorqueLimitsError::Other(msg.into())
    }
}

/// Error category for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ErrorCategory {
    /// Registry lifecycle and evaluation errors
    Actuator = 0,
    /// Curve parameter errors
    Curve = 1,
    /// Kinematic-model errors
    Kinematics = 2,
    /// Symbolic evaluation errors
    Scalar = 3,
    /// Configuration errors
    Config = 4,
    /// Other errors
    Other = 255,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Actuator => write!(f, "Actuator"),
            ErrorCategory::Curve => write!(f, "Curve"),
            ErrorCategory::Kinematics => write!(f, "Kinematics"),
            ErrorCategory::Scalar => write!(f, "Scalar"),
            ErrorCategory::Config => write!(f, "Config"),
            ErrorCategory::Other => write!(f, "Other"),
        }
    }
}

/// Context information for errors.
///
/// Records the operation that failed plus key/value pairs, useful when an
/// error crosses from a library call into user-facing reporting.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// The operation that was being performed
    pub operation: String,
    /// Additional context key-value pairs
    pub context: Vec<(String, String)>,
}

impl ErrorContext {
    /// Create a new error context for an operation.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            context: Vec::new(),
        }
    }

    /// Add a context key-value pair.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operation: {}", self.operation)?;
        for (key, value) in &self.context {
            write!(f, ", {key}: {value}")?;
        }
        Ok(())
    }
}

/// Extension trait for adding context to errors.
///
/// `Config` and `Other` errors keep their variant. Structured errors are
/// rendered into an `Other` message, so match on them before adding context.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, ctx: ErrorContext) -> Result<T, TorqueLimitsError>;

    /// Add context with an operation name.
    fn with_context(self, operation: impl Into<String>) -> Result<T, TorqueLimitsError>;
}

impl<T, E: Into<TorqueLimitsError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, ctx: ErrorContext) -> Result<T, TorqueLimitsError> {
        self.map_err(|e| match e.into() {
            TorqueLimitsError::Config(msg) => TorqueLimitsError::Config(format!("{ctx}: {msg}")),
            TorqueLimitsError::Other(msg) => TorqueLimitsError::Other(format!("{ctx}: {msg}")),
            err => TorqueLimitsError::Other(format!("{ctx}: {err}")),
        })
    }

    fn with_context(self, operation: impl Into<String>) -> Result<T, TorqueLimitsError> {
        self.context(ErrorContext::new(operation))
    }
}
