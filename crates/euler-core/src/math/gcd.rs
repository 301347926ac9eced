// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::{
    error::{NumericError, NumericResult},
    math::interval::ClosedInterval,
    num::{ops::OrOverflow, EulerNumeric},
};
use num_traits::PrimInt;

/// Greatest common divisor of two non-negative integers (Euclid).
///
/// `gcd(0, 0)` is zero.
///
/// # Examples
///
/// ```rust
/// # use euler_core::math::gcd::gcd;
/// assert_eq!(gcd(12u32, 18), 6);
/// assert_eq!(gcd(7u32, 0), 7);
/// ```
#[inline]
pub fn gcd<T>(mut a: T, mut b: T) -> T
where
    T: PrimInt,
{
    debug_assert!(
        a >= T::zero() && b >= T::zero(),
        "called `gcd` with a negative operand"
    );

    while b != T::zero() {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// Least common multiple of two non-negative integers.
///
/// Divides before multiplying, so it only fails when the result itself does
/// not fit `T`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::math::gcd::lcm;
/// assert_eq!(lcm(4u32, 6), Ok(12));
/// assert!(lcm(200u8, 3).is_err());
/// ```
pub fn lcm<T>(a: T, b: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    if a.is_zero() || b.is_zero() {
        return Ok(T::zero());
    }
    (a / gcd(a, b))
        .checked_mul_val(b)
        .or_overflow("least common multiple")
}

/// Least common multiple of every integer in `start..=end`.
///
/// This is the smallest positive number evenly divisible by each number of
/// the interval.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `start` is not positive.
/// - [`NumericError::InvalidInterval`] if `start > end`.
/// - [`NumericError::Overflow`] if the multiple does not fit `T`.
///
/// # Examples
///
/// ```rust
/// # use euler_core::math::gcd::lcm_of_range;
/// assert_eq!(lcm_of_range(1u64, 10), Ok(2520));
/// assert_eq!(lcm_of_range(1u64, 20), Ok(232_792_560));
/// ```
pub fn lcm_of_range<T>(start: T, end: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    if start <= T::zero() {
        return Err(NumericError::out_of_domain(
            "start",
            "greater than zero",
            start,
        ));
    }
    ClosedInterval::new(start, end)?
        .iter()
        .try_fold(T::one(), |acc, k| lcm(acc, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_basic() {
        assert_eq!(gcd(0u32, 0), 0);
        assert_eq!(gcd(0u32, 9), 9);
        assert_eq!(gcd(48u32, 180), 12);
        assert_eq!(gcd(17i64, 5), 1);
    }

    #[test]
    fn test_lcm_with_zero() {
        assert_eq!(lcm(0u32, 5), Ok(0));
        assert_eq!(lcm(5u32, 0), Ok(0));
    }

    #[test]
    fn test_lcm_overflow() {
        assert_eq!(
            lcm(255u8, 254),
            Err(NumericError::Overflow("least common multiple"))
        );
    }

    #[test]
    fn test_lcm_of_range_single_value() {
        assert_eq!(lcm_of_range(7u32, 7), Ok(7));
    }

    #[test]
    fn test_lcm_of_range_rejects_bad_bounds() {
        assert!(matches!(
            lcm_of_range(0u32, 5),
            Err(NumericError::OutOfDomain { name: "start", .. })
        ));
        assert!(matches!(
            lcm_of_range(5i32, -5),
            Err(NumericError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn test_lcm_of_range_to_the_end_of_the_type() {
        // lcm(1..=30) = 2329089562800 does not fit u32
        assert!(lcm_of_range(1u32, 30).unwrap_err().is_overflow());
        assert_eq!(lcm_of_range(1u64, 30), Ok(2_329_089_562_800));
    }

    #[test]
    fn test_lcm_of_range_ends_at_type_max() {
        // The loop must stop at `end` without stepping past it.
        assert_eq!(lcm_of_range(u8::MAX, u8::MAX), Ok(u8::MAX));
    }

    proptest::proptest! {
        #[test]
        fn test_gcd_lcm_product(a in 1u64..1_000_000u64, b in 1u64..1_000_000u64) {
            let g = gcd(a, b);
            proptest::prop_assert_eq!(a % g, 0);
            proptest::prop_assert_eq!(b % g, 0);
            proptest::prop_assert_eq!(lcm(a, b).map(|l| l * g), Ok(a * b));
        }
    }
}
