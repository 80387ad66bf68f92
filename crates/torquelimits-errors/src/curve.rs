//! Torque-curve parameter errors.

/// Error type for explicit curve parameter validation.
///
/// Curve evaluation itself never produces this error: out-of-domain
/// parameters flow through the arithmetic unchanged. Validation runs only
/// when a caller asks for it, typically while loading a configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// A parameter is NaN or infinite.
    #[error("{kind} parameter '{name}' must be finite, got {value}")]
    NonFinite {
        /// Curve kind being validated
        kind: &'static str,
        /// Parameter name
        name: &'static str,
        /// Offending value
        value: f64,
    },

    /// A Gaussian width is zero, which makes the position term undefined.
    #[error("{kind} parameter '{name}' is a Gaussian width and must be non-zero")]
    ZeroWidth {
        /// Curve kind being validated
        kind: &'static str,
        /// Parameter name
        name: &'static str,
    },
}

impl CurveError {
    /// Name of the offending parameter.
    pub fn parameter(&self) -> &'static str {
        match self {
            CurveError::NonFinite { name, .. } | CurveError::ZeroWidth { name, .. } => name,
        }
    }
}
