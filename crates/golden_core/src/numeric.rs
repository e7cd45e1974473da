//! Error metrics used by the tolerance checks.

use num_traits::Float;

pub fn abs_error<T: Float>(computed: T, expected: T) -> T {
    (computed - expected).abs()
}

/// Relative deviation of `computed` from `expected`. Falls back to the absolute
/// error when `expected` is zero.
pub fn relative_error<T: Float>(computed: T, expected: T) -> T {
    if expected == T::zero() {
        abs_error(computed, expected)
    } else {
        ((computed - expected) / expected).abs()
    }
}

/// Largest pointwise absolute error between two equally sized slices.
/// A NaN component counts as an infinite error.
pub fn max_abs_error<T: Float>(computed: &[T], expected: &[T]) -> T {
    worst(computed.iter().zip(expected).map(|(&c, &e)| abs_error(c, e)))
}

/// Largest pointwise relative error between two equally sized slices.
/// A NaN component counts as an infinite error.
pub fn max_relative_error<T: Float>(computed: &[T], expected: &[T]) -> T {
    worst(computed.iter().zip(expected).map(|(&c, &e)| relative_error(c, e)))
}

fn worst<T: Float>(errors: impl Iterator<Item = T>) -> T {
    errors
        .map(|e| if e.is_nan() { T::infinity() } else { e })
        .fold(T::zero(), T::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_error_uses_expected_as_scale() {
        assert!((relative_error(1.1_f64, 1.0) - 0.1).abs() < 1e-12);
        assert!((relative_error(-0.9_f64, -1.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn relative_error_against_zero_is_absolute() {
        assert_eq!(relative_error(0.25_f64, 0.0), 0.25);
    }

    #[test]
    fn max_errors_pick_worst_component() {
        let computed = [1.0_f64, 2.5, 3.0];
        let expected = [1.0_f64, 2.0, 3.1];
        assert!((max_abs_error(&computed, &expected) - 0.5).abs() < 1e-12);
        assert!((max_relative_error(&computed, &expected) - 0.25).abs() < 1e-12);
    }

    #[test]
    fn nan_component_is_an_infinite_error() {
        let err = max_abs_error(&[f64::NAN, 1.0], &[0.0, 0.0]);
        assert!(err.is_infinite());
        let err = max_relative_error(&[1.0, f64::NAN], &[1.0, 2.0]);
        assert!(err.is_infinite());
    }
}
