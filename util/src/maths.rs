//! Utility maths functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use num_traits::{Float, FloatConst};

/// Wrap an angle in radians into the range (-pi, pi].
///
/// Any finite input is folded in a single step, so large angles cost the same as small ones. `pi`
/// maps to itself and `-pi` maps to `pi`.
pub fn wrap_pi<T>(angle: T) -> T
where
    T: Float + FloatConst
{
    let pi = T::PI();
    let tau = pi + pi;

    let wrapped = pi - rem_euclid(pi - angle, tau);

    // rem_euclid may round up to exactly tau, which lands on -pi
    if wrapped <= -pi {
        wrapped + tau
    }
    else {
        wrapped
    }
}

/// Calculates the least nonnegative remainder of `lhs (mod rhs)`.
/// 
/// This function is taken from the std library as num is missing it.
///
/// In particular, the return value `r` satisfies `0.0 <= r < rhs.abs()` in
/// most cases. However, due to a floating point round-off error it can
/// result in `r == rhs.abs()`, violating the mathematical definition, if
/// `self` is much smaller than `rhs.abs()` in magnitude and `self < 0.0`.
/// This result is not an element of the function's codomain, but it is the
/// closest floating point number in the real numbers and thus fulfills the
/// property `self == self.div_euclid(rhs) * rhs + self.rem_euclid(rhs)`
/// approximatively.
pub fn rem_euclid<T>(lhs: T, rhs: T) -> T
where
    T: Float
{
    let r = lhs % rhs;
    if r < T::zero() { r + rhs.abs() } else { r }
}

#[cfg(test)]
mod test {
    use super::*;
    use approx::assert_relative_eq;

    const TAU: f64 = std::f64::consts::TAU;
    const PI: f64 = std::f64::consts::PI;

    #[test]
    fn test_wrap_pi() {
        // Exact fold, not just range membership
        assert_relative_eq!(wrap_pi(3.5 * PI), -0.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_pi(-3.5 * PI), 0.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_pi(1.5 * PI), -0.5 * PI, epsilon = 1e-12);
        assert_relative_eq!(wrap_pi(0.25 + 10.0 * TAU), 0.25, epsilon = 1e-9);

        assert_eq!(wrap_pi(0f64), 0f64);
        assert_relative_eq!(wrap_pi(1f64), 1f64, epsilon = 1e-12);
        assert_relative_eq!(wrap_pi(-1f64), -1f64, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_pi_boundaries() {
        assert_eq!(wrap_pi(PI), PI);
        assert_eq!(wrap_pi(-PI), PI);

        // Far outside the principal range the result must still lie in (-pi, pi]
        for &a in [1e6, -1e6, 123456.789, -98765.4321, 3.0 * PI, -3.0 * PI].iter() {
            let w = wrap_pi(a);
            assert!(w > -PI && w <= PI, "wrap_pi({}) = {}", a, w);
        }
    }

    #[test]
    fn test_wrap_pi_f32() {
        let w = wrap_pi(3.5f32 * std::f32::consts::PI);
        assert!((w + 0.5 * std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn test_rem_euclid() {
        assert_eq!(rem_euclid(7f64, 4f64), 3f64);
        assert_eq!(rem_euclid(-1f64, 4f64), 3f64);
        assert_eq!(rem_euclid(-1f64, -4f64), 3f64);
    }
}
