//! Tolerance-based assertions for torques and torque vectors.

/// Assert that two floating-point values are within `tolerance`.
///
/// ```rust
/// use torquelimits_test_helpers::assert_approx_eq;
///
/// assert_approx_eq!(50.0_f64, 50.000_01, 1e-3);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr $(,)?) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`",
                left, right, diff, tolerance
            );
        }
    };
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {
        let left = $left;
        let right = $right;
        let tolerance = $tolerance;
        let diff = (left - right).abs();
        if !(diff <= tolerance) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`,\n right: `{:?}`,\n  diff: `{:?}`,\n  tolerance: `{:?}`: {}",
                left, right, diff, tolerance, format_args!($($arg)+)
            );
        }
    };
}

/// Assert that a vector matches a slice of expected components.
///
/// Lengths must agree and every component must be within `tolerance`.
///
/// ```rust
/// use nalgebra::DVector;
/// use torquelimits_test_helpers::assert_vector_approx_eq;
///
/// let torques = DVector::from_vec(vec![50.0, -25.0]);
/// assert_vector_approx_eq!(torques, [50.0_f64, -25.0], 1e-12);
/// ```
#[macro_export]
macro_rules! assert_vector_approx_eq {
    ($actual:expr, $expected:expr, $tolerance:expr $(,)?) => {
        let actual = &$actual;
        let expected = &$expected;
        let tolerance = $tolerance;
        if actual.len() != expected.len() {
            panic!(
                "assertion failed: vector length {} differs from expected {}",
                actual.len(),
                expected.len()
            );
        }
        for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
            let diff = (*a - *e).abs();
            if !(diff <= tolerance) {
                panic!(
                    "assertion failed: component {} differs\n  actual: `{:?}`,\n expected: `{:?}`,\n  tolerance: `{:?}`",
                    i, a, e, tolerance
                );
            }
        }
    };
}

/// Assert that a value is finite.
#[macro_export]
macro_rules! assert_finite {
    ($value:expr $(,)?) => {
        let value = $value;
        if !value.is_finite() {
            panic!("assertion failed: `{:?}` is not finite", value);
        }
    };
}

#[cfg(test)]
mod tests {
    use nalgebra::DVector;

    #[test]
    fn test_approx_eq_within_tolerance() {
        assert_approx_eq!(1.0_f64, 1.0005, 1e-3);
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn test_approx_eq_outside_tolerance() {
        assert_approx_eq!(1.0_f64, 1.1, 1e-3);
    }

    #[test]
    #[should_panic(expected = "left ≈ right")]
    fn test_approx_eq_rejects_nan() {
        assert_approx_eq!(f64::NAN, 1.0, 1e-3);
    }

    #[test]
    fn test_vector_approx_eq() {
        let v = DVector::from_vec(vec![1.0, 2.0]);
        assert_vector_approx_eq!(v, [1.0_f64, 2.0 + 1e-9], 1e-6);
    }

    #[test]
    #[should_panic(expected = "component 1 differs")]
    fn test_vector_approx_eq_reports_component() {
        let v = DVector::from_vec(vec![1.0, 2.0]);
        assert_vector_approx_eq!(v, [1.0_f64, 3.0], 1e-6);
    }

    #[test]
    #[should_panic(expected = "vector length")]
    fn test_vector_approx_eq_length() {
        let v = DVector::from_vec(vec![1.0]);
        assert_vector_approx_eq!(v, [1.0_f64, 3.0], 1e-6);
    }

    #[test]
    fn test_finite() {
        assert_finite!(3.0_f64);
    }
}
