//! The generic scalar contract.

use core::fmt::Debug;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Number type a torque curve can be evaluated with.
///
/// Implementations must restrict themselves to arithmetic, `exp`, and
/// comparisons expressed through [`select`](Self::select). Symbolic back-ends
/// rely on never seeing a host-language branch on a scalar value.
pub trait TorqueScalar:
    nalgebra::Scalar
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    /// Result of a comparison between two scalars.
    ///
    /// `bool` for plain numbers, a boolean-valued graph node for symbolic ones.
    type Condition: Clone + Debug;

    /// Lift a plain constant into this scalar type.
    fn from_f64(value: f64) -> Self;

    /// Natural exponential.
    fn exp(self) -> Self;

    /// `self < other`.
    fn less_than(&self, other: &Self) -> Self::Condition;

    /// `self >= other`.
    fn greater_or_equal(&self, other: &Self) -> Self::Condition;

    /// Pick `if_true` when `condition` holds, `if_false` otherwise.
    ///
    /// Both operands are always computed by the caller, so the unselected
    /// branch may hold a non-finite value without affecting the result.
    fn select(condition: Self::Condition, if_true: Self, if_false: Self) -> Self;

    /// Additive identity.
    fn zero() -> Self {
        Self::from_f64(0.0)
    }

    /// Multiplicative identity.
    fn one() -> Self {
        Self::from_f64(1.0)
    }

    /// `self * self`.
    fn squared(self) -> Self {
        self.clone() * self
    }
}
