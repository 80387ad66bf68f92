//! Unwrap helpers for test code.
//!
//! The workspace denies `unwrap()` and `expect()`; tests use these instead so
//! a failure reports the error value and the caller's location.

use std::fmt::Debug;
use std::str::FromStr;

/// Unwrap a `Result`, panicking with the error on failure.
///
/// ```rust
/// use torquelimits_test_helpers::must;
///
/// let parsed: Result<f64, std::num::ParseFloatError> = "50.0".parse();
/// assert!((must(parsed) - 50.0).abs() < f64::EPSILON);
/// ```
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must<T, E: Debug>(result: Result<T, E>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must: unexpected Err: {e:?}"),
    }
}

/// Unwrap an `Option`, panicking with `msg` if it is `None`.
///
/// # Panics
///
/// Panics if the option is `None`.
#[track_caller]
pub fn must_some<T>(option: Option<T>, msg: &str) -> T {
    match option {
        Some(v) => v,
        None => panic!("must_some: {msg}"),
    }
}

/// Unwrap a `Result`, prefixing the panic message with `context`.
///
/// # Panics
///
/// Panics if the result is `Err`.
#[track_caller]
pub fn must_with<T, E: Debug>(result: Result<T, E>, context: &str) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("must_with: {context}: {e:?}"),
    }
}

/// Parse a string, panicking on failure.
///
/// # Panics
///
/// Panics if parsing fails.
#[track_caller]
pub fn must_parse<T: FromStr>(s: &str) -> T
where
    T::Err: Debug,
{
    match s.parse() {
        Ok(v) => v,
        Err(e) => panic!("must_parse: failed to parse {s:?}: {e:?}"),
    }
}

/// Unwrap a `Result` that must fail, returning the error.
///
/// # Panics
///
/// Panics if the result is `Ok`.
#[track_caller]
pub fn must_err<T: Debug, E>(result: Result<T, E>) -> E {
    match result {
        Ok(v) => panic!("must_err: expected Err, got Ok({v:?})"),
        Err(e) => e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_must_ok() {
        let result: Result<i32, &str> = Ok(42);
        assert_eq!(must(result), 42);
    }

    #[test]
    #[should_panic(expected = "must: unexpected Err")]
    fn test_must_err_panics() {
        let result: Result<i32, &str> = Err("closed");
        let _ = must(result);
    }

    #[test]
    #[should_panic(expected = "must_some: slot 3")]
    fn test_must_some_none() {
        let _ = must_some(None::<i32>, "slot 3");
    }

    #[test]
    #[should_panic(expected = "must_with: loading: ")]
    fn test_must_with_context() {
        let result: Result<i32, &str> = Err("bad");
        let _ = must_with(result, "loading");
    }

    #[test]
    fn test_must_parse() {
        let value: usize = must_parse("2");
        assert_eq!(value, 2);
    }

    #[test]
    fn test_must_err_returns_error() {
        let result: Result<i32, &str> = Err("closed");
        assert_eq!(must_err(result), "closed");
    }

    #[test]
    #[should_panic(expected = "must_err: expected Err")]
    fn test_must_err_on_ok() {
        let result: Result<i32, &str> = Ok(1);
        let _ = must_err(result);
    }
}
