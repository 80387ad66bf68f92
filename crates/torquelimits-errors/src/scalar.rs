//! Symbolic scalar evaluation errors.

/// Errors raised while evaluating a symbolic expression numerically.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScalarError {
    /// The expression references a variable with no bound value.
    #[error("Variable '{0}' has no bound value")]
    UnboundVariable(String),
}
