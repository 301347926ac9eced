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

//! Multiples of a divisor set below an exclusive limit.
//!
//! The multiples are materialized as an ordered set first and reduced to a
//! sum afterwards, which keeps the set itself available to callers that need
//! it. Zero is a multiple of every divisor and is always part of the set when
//! the limit is positive.

use euler_core::{
    error::{NumericError, NumericResult},
    num::{ops::checked_sum, EulerNumeric},
};

/// Returns every non-negative integer below `limit` divisible by at least one
/// of `divisors`, in ascending order.
///
/// A non-positive `limit` yields an empty set.
///
/// # Errors
///
/// Returns [`NumericError::OutOfDomain`] if `divisors` is empty or contains a
/// non-positive divisor.
///
/// # Examples
///
/// ```rust
/// # use euler_utils::multiples::multiples_below;
/// assert_eq!(multiples_below(10, &[3, 5]), Ok(vec![0, 3, 5, 6, 9]));
/// assert_eq!(multiples_below(-4, &[3, 5]), Ok(vec![]));
/// ```
pub fn multiples_below<T>(limit: T, divisors: &[T]) -> NumericResult<Vec<T>>
where
    T: EulerNumeric,
{
    if divisors.is_empty() {
        return Err(NumericError::out_of_domain(
            "divisors",
            "non-empty",
            "[]",
        ));
    }
    if let Some(&d) = divisors.iter().find(|&&d| d <= T::zero()) {
        return Err(NumericError::out_of_domain(
            "divisors",
            "greater than zero",
            d,
        ));
    }

    let mut multiples = Vec::new();
    let mut value = T::zero();
    while value < limit {
        if divisors.iter().any(|&d| (value % d).is_zero()) {
            multiples.push(value);
        }
        value = value + T::one();
    }
    Ok(multiples)
}

/// Returns the checked sum of [`multiples_below`].
///
/// # Errors
///
/// Same as [`multiples_below`], plus [`NumericError::Overflow`] if the sum
/// does not fit `T`.
pub fn sum_multiples_below<T>(limit: T, divisors: &[T]) -> NumericResult<T>
where
    T: EulerNumeric,
{
    checked_sum(multiples_below(limit, divisors)?, "sum of multiples")
}

/// Returns the sum of all non-negative integers below `limit` that are
/// divisible by 3 or by 5.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if the sum does not fit `T`.
///
/// # Examples
///
/// ```rust
/// # use euler_utils::multiples::sum_multiples_of_3_or_5_below;
/// assert_eq!(sum_multiples_of_3_or_5_below(10), Ok(23));
/// assert_eq!(sum_multiples_of_3_or_5_below(0), Ok(0));
/// ```
pub fn sum_multiples_of_3_or_5_below<T>(limit: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    sum_multiples_below(limit, &[T::THREE, T::FIVE])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_below_ten() {
        assert_eq!(sum_multiples_of_3_or_5_below(10u32), Ok(23));
    }

    #[test]
    fn test_sum_below_one_thousand() {
        assert_eq!(sum_multiples_of_3_or_5_below(1000u64), Ok(233_168));
        assert_eq!(sum_multiples_of_3_or_5_below(1000i32), Ok(233_168));
    }

    #[test]
    fn test_non_positive_limit_is_empty() {
        assert_eq!(sum_multiples_of_3_or_5_below(0i64), Ok(0));
        assert_eq!(sum_multiples_of_3_or_5_below(-100i64), Ok(0));
        assert_eq!(multiples_below(0u8, &[3, 5]), Ok(vec![]));
    }

    #[test]
    fn test_zero_is_included() {
        assert_eq!(multiples_below(1u32, &[3, 5]), Ok(vec![0]));
        assert_eq!(sum_multiples_of_3_or_5_below(1u32), Ok(0));
    }

    #[test]
    fn test_limit_is_exclusive() {
        assert_eq!(multiples_below(15u32, &[3, 5]), Ok(vec![0, 3, 5, 6, 9, 10, 12]));
    }

    #[test]
    fn test_overlapping_divisors_counted_once() {
        // 15 is divisible by both and must appear once.
        let multiples = multiples_below(16u32, &[3, 5]).unwrap();
        assert_eq!(multiples.iter().filter(|&&m| m == 15).count(), 1);
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            sum_multiples_of_3_or_5_below(100u8),
            Err(NumericError::Overflow("sum of multiples"))
        );
    }

    #[test]
    fn test_rejects_bad_divisors() {
        assert!(matches!(
            multiples_below(10u32, &[]),
            Err(NumericError::OutOfDomain { name: "divisors", .. })
        ));
        assert!(matches!(
            multiples_below(10i32, &[3, 0]),
            Err(NumericError::OutOfDomain { name: "divisors", .. })
        ));
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            sum_multiples_of_3_or_5_below(500u64),
            sum_multiples_of_3_or_5_below(500u64)
        );
    }
}
