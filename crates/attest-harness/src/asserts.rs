//! Assertion helpers available to test bodies
//!
//! Every helper returns [`TestResult`] so bodies compose them with `?`.
//! The `message` argument is optional; helpers fall back to a generated
//! description of the mismatch.

use crate::TestResult;
use attest_term::{ensure, TermError};
use std::fmt::Debug;

/// Tolerance used by the approximate comparisons when none is supplied.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// Fail unless `predicate` holds.
pub fn assert_true(predicate: bool, message: Option<&str>) -> TestResult {
    ensure(predicate, Some(message.unwrap_or("unit test failed")))?;
    Ok(())
}

/// Fail unless `predicate` is false.
pub fn assert_false(predicate: bool, message: Option<&str>) -> TestResult {
    ensure(!predicate, Some(message.unwrap_or("unit test failed")))?;
    Ok(())
}

/// Fail unless `actual` equals `expected` exactly.
pub fn assert_equal<T: PartialEq + Debug>(
    actual: T,
    expected: T,
    message: Option<&str>,
) -> TestResult {
    if actual == expected {
        return Ok(());
    }
    let detail = match message {
        Some(text) => text.to_string(),
        None => format!("values not equal: expected {expected:?}, got {actual:?}"),
    };
    Err(TermError::Assertion(detail).into())
}

/// [`assert_approx_eps`] with [`DEFAULT_EPSILON`].
pub fn assert_approx(a: f64, b: f64, message: Option<&str>) -> TestResult {
    assert_approx_eps(a, b, message, DEFAULT_EPSILON)
}

/// Fail unless `|a - b| < epsilon`. Equality at the boundary fails.
///
/// Both operands must be finite and `epsilon` must lie in the open
/// interval (0, 1); anything else is an invalid argument, fatal through
/// the usual boundary.
pub fn assert_approx_eps(a: f64, b: f64, message: Option<&str>, epsilon: f64) -> TestResult {
    check_operands(&[a, b])?;
    check_epsilon(epsilon)?;
    if (a - b).abs() < epsilon {
        return Ok(());
    }
    let detail = match message {
        Some(text) => text.to_string(),
        None => format!("{a} is not approximately {b} (epsilon {epsilon})"),
    };
    Err(TermError::Assertion(detail).into())
}

/// [`assert_array_approx_eps`] with [`DEFAULT_EPSILON`].
pub fn assert_array_approx(a: &[f64], b: &[f64], message: Option<&str>) -> TestResult {
    assert_array_approx_eps(a, b, message, DEFAULT_EPSILON)
}

/// Order-insensitive approximate comparison of two slices.
///
/// Lengths must match; each side is sorted independently before the
/// pairwise comparison, so only the multiset of values matters. Element
/// failures carry the (sorted) index at which the sides diverge.
pub fn assert_array_approx_eps(
    a: &[f64],
    b: &[f64],
    message: Option<&str>,
    epsilon: f64,
) -> TestResult {
    check_operands(a)?;
    check_operands(b)?;
    check_epsilon(epsilon)?;

    let base = message.unwrap_or("arrays differ");
    if a.len() != b.len() {
        return Err(TermError::Assertion(format!(
            "{base}: length mismatch ({} vs {})",
            a.len(),
            b.len()
        ))
        .into());
    }

    let mut left = a.to_vec();
    let mut right = b.to_vec();
    left.sort_by(f64::total_cmp);
    right.sort_by(f64::total_cmp);

    for (index, (x, y)) in left.iter().zip(right.iter()).enumerate() {
        if (x - y).abs() >= epsilon {
            return Err(TermError::Assertion(format!(
                "{base}: values differ at index {index} ({x} vs {y})"
            ))
            .into());
        }
    }
    Ok(())
}

fn check_epsilon(epsilon: f64) -> Result<(), TermError> {
    if epsilon > 0.0 && epsilon < 1.0 {
        Ok(())
    } else {
        Err(TermError::InvalidArgument {
            what: "epsilon",
            detail: format!("{epsilon} is outside (0, 1)"),
        })
    }
}

fn check_operands(values: &[f64]) -> Result<(), TermError> {
    for value in values {
        if !value.is_finite() {
            return Err(TermError::InvalidArgument {
                what: "operand",
                detail: format!("{value} is not a finite number"),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HarnessError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn is_invalid_argument(result: TestResult) -> bool {
        matches!(
            result,
            Err(HarnessError::Term(TermError::InvalidArgument { .. }))
        )
    }

    #[test]
    fn assert_true_passes_and_fails() {
        assert!(assert_true(true, None).is_ok());
        let err = assert_true(false, None).unwrap_err();
        assert_eq!(err.to_string(), "unit test failed");
    }

    #[test]
    fn assert_true_uses_the_caller_message() {
        let err = assert_true(false, Some("five is not six")).unwrap_err();
        assert_eq!(err.to_string(), "five is not six");
    }

    #[test]
    fn assert_false_inverts_the_predicate() {
        assert!(assert_false(false, None).is_ok());
        assert!(assert_false(true, None).is_err());
    }

    #[test]
    fn assert_equal_compares_exactly() {
        assert!(assert_equal(5, 5, None).is_ok());
        assert!(assert_equal("abc", "abc", None).is_ok());

        let err = assert_equal(5, 6, None).unwrap_err();
        assert_eq!(err.to_string(), "values not equal: expected 6, got 5");
    }

    #[rstest]
    #[case(0.1 + 0.2, 0.3, true)]
    #[case(1.0, 1.0, true)]
    #[case(1.0, 1.1, false)]
    #[case(-5.0, 5.0, false)]
    fn assert_approx_default_epsilon(#[case] a: f64, #[case] b: f64, #[case] passes: bool) {
        assert_eq!(assert_approx(a, b, None).is_ok(), passes);
    }

    #[test]
    fn approx_boundary_equality_fails() {
        // |a - b| == epsilon must fail: the comparison is strict.
        assert!(assert_approx_eps(1.5, 1.0, None, 0.5).is_err());
        assert!(assert_approx_eps(1.5, 1.0, None, 0.500001).is_ok());
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(-0.1)]
    #[case(1.5)]
    #[case(f64::NAN)]
    fn out_of_range_epsilon_is_invalid(#[case] epsilon: f64) {
        assert!(is_invalid_argument(assert_approx_eps(1.0, 1.0, None, epsilon)));
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    #[case(f64::NEG_INFINITY, 0.0)]
    fn non_finite_operands_are_invalid(#[case] a: f64, #[case] b: f64) {
        assert!(is_invalid_argument(assert_approx(a, b, None)));
    }

    #[test]
    fn array_comparison_ignores_element_order() {
        assert!(assert_array_approx(&[3.0, 1.0, 2.0], &[1.0, 2.0, 3.0], None).is_ok());
    }

    #[test]
    fn array_length_mismatch_fails_with_a_length_message() {
        let err = assert_array_approx(&[1.0, 2.0], &[1.0, 2.0, 3.0], None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "arrays differ: length mismatch (2 vs 3)"
        );
    }

    #[test]
    fn array_element_mismatch_names_the_index() {
        let err = assert_array_approx(&[1.0, 2.0, 9.0], &[1.0, 2.0, 3.0], None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "arrays differ: values differ at index 2 (9 vs 3)"
        );
    }

    #[test]
    fn array_comparison_is_a_multiset_check() {
        // Same values, different multiplicities: must fail.
        assert!(assert_array_approx(&[1.0, 1.0, 2.0], &[1.0, 2.0, 2.0], None).is_err());
    }

    #[test]
    fn empty_arrays_compare_equal() {
        assert!(assert_array_approx(&[], &[], None).is_ok());
    }

    #[test]
    fn array_comparison_rejects_non_finite_elements() {
        assert!(is_invalid_argument(assert_array_approx(
            &[f64::NAN],
            &[1.0],
            None
        )));
    }
}
