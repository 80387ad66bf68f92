//! Plain floating-point back-ends.

use crate::traits::TorqueScalar;

impl TorqueScalar for f64 {
    type Condition = bool;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn exp(self) -> Self {
        f64::exp(self)
    }

    #[inline]
    fn less_than(&self, other: &Self) -> bool {
        *self < *other
    }

    #[inline]
    fn greater_or_equal(&self, other: &Self) -> bool {
        *self >= *other
    }

    #[inline]
    fn select(condition: bool, if_true: Self, if_false: Self) -> Self {
        if condition { if_true } else { if_false }
    }
}

impl TorqueScalar for f32 {
    type Condition = bool;

    #[inline]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "single precision back-end narrows every constant by definition"
    )]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn exp(self) -> Self {
        f32::exp(self)
    }

    #[inline]
    fn less_than(&self, other: &Self) -> bool {
        *self < *other
    }

    #[inline]
    fn greater_or_equal(&self, other: &Self) -> bool {
        *self >= *other
    }

    #[inline]
    fn select(condition: bool, if_true: Self, if_false: Self) -> Self {
        if condition { if_true } else { if_false }
    }
}
