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

//! # Series
//!
//! Interval sums, Collatz trajectories, triangle numbers, recurring decimal
//! cycles and prime-generating quadratics.
//!
//! ## Highlights
//!
//! - [`sum_of_squares`] / [`square_of_sum`] over a closed interval, with
//!   [`sum_square_difference`] combining the two.
//! - [`collatz_sequence`]: the full trajectory of a start value down to 1.
//! - [`longest_collatz_below`]: the start value with the longest trajectory,
//!   memoising trajectory lengths of smaller start values.
//! - [`TriangleNumbers`]: 1, 3, 6, 10, ... as a fused iterator.
//! - [`recurring_cycle`]: the repeating digits of a fraction's decimal
//!   expansion, found by long division.
//! - [`quadratic`], [`euler_quadratic`] (`n^2 + n + 41`) and
//!   [`shifted_euler_quadratic`] (`n^2 - 79n + 1601`), with
//!   [`consecutive_quadratic_primes`] counting the primes they produce.

use crate::primes::is_prime;
use euler_core::{
    error::{NumericError, NumericResult},
    math::interval::ClosedInterval,
    num::{
        ops::{checked_sum, OrOverflow},
        EulerNumeric,
    },
};
use rustc_hash::FxHashMap;
use std::iter::FusedIterator;

/// Returns `start^2 + (start + 1)^2 + ... + end^2`.
///
/// # Errors
///
/// - [`NumericError::InvalidInterval`] if `start > end`.
/// - [`NumericError::Overflow`] if a square or the sum does not fit `T`.
///
/// ```rust
/// # use euler_utils::series::sum_of_squares;
/// assert_eq!(sum_of_squares(2u32, 4), Ok(29));
/// ```
pub fn sum_of_squares<T>(start: T, end: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    let squares = ClosedInterval::new(start, end)?
        .iter()
        .map(|v| v.checked_mul_val(v).or_overflow("square"))
        .collect::<NumericResult<Vec<T>>>()?;
    checked_sum(squares, "sum of squares")
}

/// Returns `(start + (start + 1) + ... + end)^2`.
///
/// # Errors
///
/// - [`NumericError::InvalidInterval`] if `start > end`.
/// - [`NumericError::Overflow`] if the sum or its square does not fit `T`.
///
/// ```rust
/// # use euler_utils::series::square_of_sum;
/// assert_eq!(square_of_sum(2u32, 4), Ok(81));
/// ```
pub fn square_of_sum<T>(start: T, end: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    let sum = checked_sum(ClosedInterval::new(start, end)?, "interval sum")?;
    sum.checked_mul_val(sum).or_overflow("square of sum")
}

/// Returns `square_of_sum(start, end) - sum_of_squares(start, end)`.
///
/// # Errors
///
/// Same as [`sum_of_squares`] and [`square_of_sum`].
pub fn sum_square_difference<T>(start: T, end: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    let square = square_of_sum(start, end)?;
    let sum = sum_of_squares(start, end)?;
    square
        .checked_sub_val(sum)
        .or_overflow("sum square difference")
}

/// A Collatz trajectory: `n -> n / 2` for even `n`, `n -> 3n + 1` for odd
/// `n`, until reaching 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollatzSequence<T> {
    terms: Vec<T>,
}

impl<T> CollatzSequence<T>
where
    T: EulerNumeric,
{
    /// Returns the start value.
    #[inline]
    pub fn start(&self) -> T {
        self.terms[0]
    }

    /// Returns every term, from the start value down to 1.
    #[inline]
    pub fn terms(&self) -> &[T] {
        &self.terms
    }

    /// Returns the number of terms, counting the start value and the final 1.
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// A trajectory always contains its start value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Returns the Collatz trajectory of `n`.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `n` is not positive.
/// - [`NumericError::Overflow`] if `3n + 1` does not fit `T` along the way.
///
/// ```rust
/// # use euler_utils::series::collatz_sequence;
/// let seq = collatz_sequence(5u32).unwrap();
/// assert_eq!(seq.terms(), &[5, 16, 8, 4, 2, 1]);
/// ```
pub fn collatz_sequence<T>(n: T) -> NumericResult<CollatzSequence<T>>
where
    T: EulerNumeric,
{
    if n <= T::zero() {
        return Err(NumericError::out_of_domain("n", "greater than zero", n));
    }

    let mut terms = vec![n];
    let mut current = n;
    while current > T::one() {
        current = if (current % T::TWO).is_zero() {
            current / T::TWO
        } else {
            current
                .checked_mul_val(T::THREE)
                .and_then(|v| v.checked_add_val(T::one()))
                .or_overflow("collatz term")?
        };
        terms.push(current);
    }
    Ok(CollatzSequence { terms })
}

/// The start value with the longest Collatz trajectory below a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollatzRecord {
    /// The start value.
    pub start: u64,
    /// The number of terms of its trajectory, including the final 1.
    pub length: u32,
}

/// Returns the start value below `limit` with the longest Collatz
/// trajectory, or `None` if `limit <= 1`. Ties keep the smaller start value.
///
/// Trajectory lengths are memoised for every start value below `limit`, so
/// each trajectory is only followed until it drops to a known value.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if a trajectory leaves the `u64` range.
///
/// ```rust
/// # use euler_utils::series::longest_collatz_below;
/// let record = longest_collatz_below(10).unwrap().unwrap();
/// assert_eq!((record.start, record.length), (9, 20));
/// ```
pub fn longest_collatz_below(limit: usize) -> NumericResult<Option<CollatzRecord>> {
    if limit <= 1 {
        return Ok(None);
    }

    let mut lengths = vec![0u32; limit];
    lengths[1] = 1;
    let mut best = CollatzRecord {
        start: 1,
        length: 1,
    };

    for start in 2..limit {
        let mut current = start as u64;
        let mut steps = 0u32;
        while current >= limit as u64 || lengths[current as usize] == 0 {
            current = if current % 2 == 0 {
                current / 2
            } else {
                current
                    .checked_mul(3)
                    .and_then(|v| v.checked_add(1))
                    .or_overflow("collatz term")?
            };
            steps += 1;
        }

        let length = steps + lengths[current as usize];
        lengths[start] = length;
        if length > best.length {
            best = CollatzRecord {
                start: start as u64,
                length,
            };
        }
    }
    Ok(Some(best))
}

/// The triangle numbers `1, 3, 6, 10, ...`, where the `k`-th term is
/// `1 + 2 + ... + k`. Iteration ends at the last term that fits `T`.
#[derive(Debug, Clone)]
pub struct TriangleNumbers<T> {
    index: T,
    value: Option<T>,
}

impl<T> TriangleNumbers<T>
where
    T: EulerNumeric,
{
    /// Creates the iterator, starting at the first triangle number.
    #[inline]
    pub fn new() -> Self {
        Self {
            index: T::one(),
            value: Some(T::one()),
        }
    }
}

impl<T> Default for TriangleNumbers<T>
where
    T: EulerNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Iterator for TriangleNumbers<T>
where
    T: EulerNumeric,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.value?;
        self.value = match self.index.checked_add_val(T::one()) {
            Some(next_index) => {
                self.index = next_index;
                value.checked_add_val(next_index)
            }
            None => None,
        };
        Some(value)
    }
}

impl<T> FusedIterator for TriangleNumbers<T> where T: EulerNumeric {}

/// Returns the recurring cycle of the decimal expansion of
/// `numerator / denominator`, or an empty vector if the expansion terminates.
///
/// The cycle starts at the first fractional digit that repeats, so
/// `50 / 22 = 2.272727...` yields `[2, 7]` and `1 / 6 = 0.1666...` yields
/// `[6]`.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `denominator <= 0` or `numerator < 0`.
/// - [`NumericError::Overflow`] if `10 * remainder` does not fit `T`.
///
/// ```rust
/// # use euler_utils::series::recurring_cycle;
/// assert_eq!(recurring_cycle(1u32, 7), Ok(vec![1, 4, 2, 8, 5, 7]));
/// assert_eq!(recurring_cycle(1u32, 4), Ok(vec![]));
/// ```
pub fn recurring_cycle<T>(numerator: T, denominator: T) -> NumericResult<Vec<u8>>
where
    T: EulerNumeric,
{
    if denominator <= T::zero() {
        return Err(NumericError::out_of_domain(
            "denominator",
            "positive",
            denominator,
        ));
    }
    if numerator < T::zero() {
        return Err(NumericError::out_of_domain(
            "numerator",
            "non-negative",
            numerator,
        ));
    }

    let mut seen: FxHashMap<T, usize> = FxHashMap::default();
    let mut fraction = Vec::new();
    let mut remainder = numerator % denominator;
    while !remainder.is_zero() {
        if let Some(&start) = seen.get(&remainder) {
            return Ok(fraction.split_off(start));
        }
        seen.insert(remainder, fraction.len());

        let shifted = remainder
            .checked_mul_val(T::TEN)
            .or_overflow("long division remainder")?;
        let digit = (shifted / denominator)
            .to_u8()
            .or_overflow("decimal digit")?;
        fraction.push(digit);
        remainder = shifted % denominator;
    }
    Ok(Vec::new())
}

/// Evaluates `n^2 + a*n + b`.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if a term or the sum does not fit `T`.
///
/// ```rust
/// # use euler_utils::series::quadratic;
/// assert_eq!(quadratic(3i32, -2, 5), Ok(8));
/// ```
pub fn quadratic<T>(n: T, a: T, b: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    let square = n.checked_mul_val(n).or_overflow("quadratic term")?;
    let linear = a.checked_mul_val(n).or_overflow("quadratic term")?;
    checked_sum([square, linear, b], "quadratic value")
}

/// Evaluates Euler's prime-generating polynomial `n^2 + n + 41`, which is
/// prime for `0 <= n <= 39`.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if the value does not fit `T`.
///
/// ```rust
/// # use euler_utils::series::euler_quadratic;
/// assert_eq!(euler_quadratic(0u32), Ok(41));
/// assert_eq!(euler_quadratic(40u32), Ok(1681));
/// ```
pub fn euler_quadratic<T>(n: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    let b = T::from_u8(41).or_overflow("quadratic coefficient")?;
    quadratic(n, T::one(), b)
}

/// Evaluates `n^2 - 79n + 1601`, which is prime for `0 <= n <= 79`.
///
/// The polynomial is positive for every integer `n`, so it is computed as
/// `(n^2 + 1601) - 79n` and works for unsigned `T` as well.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if an intermediate value does not fit
/// `T` (including `1601` itself for 8-bit types).
///
/// ```rust
/// # use euler_utils::series::shifted_euler_quadratic;
/// assert_eq!(shifted_euler_quadratic(0u32), Ok(1601));
/// assert_eq!(shifted_euler_quadratic(40u32), Ok(41));
/// ```
pub fn shifted_euler_quadratic<T>(n: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    let b = T::from_u16(1601).or_overflow("quadratic coefficient")?;
    let a = T::from_u8(79).or_overflow("quadratic coefficient")?;
    let square = n.checked_mul_val(n).or_overflow("quadratic term")?;
    let linear = a.checked_mul_val(n).or_overflow("quadratic term")?;
    square
        .checked_add_val(b)
        .and_then(|v| v.checked_sub_val(linear))
        .or_overflow("quadratic value")
}

/// Returns how many consecutive values of `n`, starting at `n = 0`, make
/// `n^2 + a*n + b` prime.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if a value does not fit `T`.
///
/// ```rust
/// # use euler_utils::series::consecutive_quadratic_primes;
/// assert_eq!(consecutive_quadratic_primes(1i64, 41), Ok(40));
/// assert_eq!(consecutive_quadratic_primes(-79i64, 1601), Ok(80));
/// ```
pub fn consecutive_quadratic_primes<T>(a: T, b: T) -> NumericResult<usize>
where
    T: EulerNumeric,
{
    let mut n = T::zero();
    let mut count = 0;
    while is_prime(quadratic(n, a, b)?) {
        count += 1;
        n = n.checked_add_val(T::one()).or_overflow("quadratic input")?;
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_sums_one_to_ten() {
        assert_eq!(sum_of_squares(1u32, 10), Ok(385));
        assert_eq!(square_of_sum(1u32, 10), Ok(3025));
        assert_eq!(sum_square_difference(1u32, 10), Ok(2640));
    }

    #[test]
    fn test_sum_square_difference_one_to_hundred() {
        assert_eq!(sum_square_difference(1u64, 100), Ok(25_164_150));
    }

    #[test]
    fn test_single_point_interval() {
        assert_eq!(sum_of_squares(7i32, 7), Ok(49));
        assert_eq!(square_of_sum(7i32, 7), Ok(49));
        assert_eq!(sum_square_difference(7i32, 7), Ok(0));
    }

    #[test]
    fn test_negative_interval() {
        assert_eq!(sum_of_squares(-2i32, 2), Ok(10));
        assert_eq!(square_of_sum(-2i32, 2), Ok(0));
    }

    #[test]
    fn test_interval_errors() {
        assert!(matches!(
            sum_of_squares(4u32, 2),
            Err(NumericError::InvalidInterval { .. })
        ));
        assert!(matches!(
            square_of_sum(4u32, 2),
            Err(NumericError::InvalidInterval { .. })
        ));
        assert!(sum_of_squares(1u8, 16).unwrap_err().is_overflow());
        assert!(square_of_sum(1u8, 10).unwrap_err().is_overflow());
    }

    #[test]
    fn test_collatz_sequence() {
        assert_eq!(collatz_sequence(1u32).unwrap().terms(), &[1]);
        let seq = collatz_sequence(13u32).unwrap();
        assert_eq!(seq.terms(), &[13, 40, 20, 10, 5, 16, 8, 4, 2, 1]);
        assert_eq!(seq.start(), 13);
        assert_eq!(seq.len(), 10);
    }

    #[test]
    fn test_collatz_sequence_errors() {
        assert!(collatz_sequence(0u32).is_err());
        assert!(collatz_sequence(-3i32).is_err());
        // 27 climbs to 9232.
        assert!(collatz_sequence(27u8).unwrap_err().is_overflow());
        assert_eq!(collatz_sequence(27u16).unwrap().len(), 112);
    }

    #[test]
    fn test_longest_collatz_trivial_limits() {
        assert_eq!(longest_collatz_below(0), Ok(None));
        assert_eq!(longest_collatz_below(1), Ok(None));
        assert_eq!(
            longest_collatz_below(2),
            Ok(Some(CollatzRecord { start: 1, length: 1 }))
        );
    }

    #[test]
    fn test_longest_collatz_matches_direct_computation() {
        let record = longest_collatz_below(1000).unwrap().unwrap();
        let direct = collatz_sequence(record.start).unwrap();
        assert_eq!(direct.len(), record.length as usize);
        assert_eq!(record.start, 871);
    }

    #[test]
    fn test_longest_collatz_below_one_million() {
        let record = longest_collatz_below(1_000_000).unwrap().unwrap();
        assert_eq!(record.start, 837_799);
        assert_eq!(record.length, 525);
    }

    #[test]
    fn test_triangle_numbers() {
        let first: Vec<u32> = TriangleNumbers::new().take(10).collect();
        assert_eq!(first, vec![1, 3, 6, 10, 15, 21, 28, 36, 45, 55]);
    }

    #[test]
    fn test_triangle_numbers_fuse_at_type_max() {
        // 22nd triangle number is 253, the 23rd (276) does not fit u8.
        let all: Vec<u8> = TriangleNumbers::new().collect();
        assert_eq!(all.len(), 22);
        assert_eq!(all.last(), Some(&253));
    }

    #[test]
    fn test_recurring_cycle_unit_fractions() {
        assert_eq!(recurring_cycle(1u32, 2), Ok(vec![]));
        assert_eq!(recurring_cycle(1u32, 3), Ok(vec![3]));
        assert_eq!(recurring_cycle(1u32, 6), Ok(vec![6]));
        assert_eq!(recurring_cycle(1u32, 7), Ok(vec![1, 4, 2, 8, 5, 7]));
        assert_eq!(recurring_cycle(1u32, 11), Ok(vec![0, 9]));
        assert_eq!(recurring_cycle(1u32, 983).unwrap().len(), 982);
    }

    #[test]
    fn test_recurring_cycle_improper_and_whole_fractions() {
        assert_eq!(recurring_cycle(50i32, 22), Ok(vec![2, 7]));
        assert_eq!(recurring_cycle(0i32, 7), Ok(vec![]));
        assert_eq!(recurring_cycle(14i32, 7), Ok(vec![]));
    }

    #[test]
    fn test_recurring_cycle_rejects_bad_input() {
        assert!(matches!(
            recurring_cycle(1i32, 0),
            Err(NumericError::OutOfDomain {
                name: "denominator",
                ..
            })
        ));
        assert!(recurring_cycle(1i32, -3).is_err());
        assert!(matches!(
            recurring_cycle(-1i32, 3),
            Err(NumericError::OutOfDomain {
                name: "numerator",
                ..
            })
        ));
        // 10 * 26 leaves u8.
        assert!(recurring_cycle(26u8, 27).unwrap_err().is_overflow());
    }

    #[test]
    fn test_euler_quadratics() {
        let first: Vec<u32> = (0..5).map(|n| euler_quadratic(n).unwrap()).collect();
        assert_eq!(first, vec![41, 43, 47, 53, 61]);
        assert!((0u32..40).all(|n| is_prime(euler_quadratic(n).unwrap())));
        assert!(!is_prime(euler_quadratic(40u32).unwrap()));

        assert!((0u32..80).all(|n| is_prime(shifted_euler_quadratic(n).unwrap())));
        assert_eq!(shifted_euler_quadratic(79u32), Ok(1601));
        assert_eq!(shifted_euler_quadratic(80u32), Ok(1681));
        assert!(shifted_euler_quadratic(0u8).unwrap_err().is_overflow());
    }

    #[test]
    fn test_consecutive_quadratic_primes() {
        assert_eq!(consecutive_quadratic_primes(1i64, 41), Ok(40));
        assert_eq!(consecutive_quadratic_primes(-79i64, 1601), Ok(80));
        assert_eq!(consecutive_quadratic_primes(0i64, 4), Ok(0));
        assert_eq!(quadratic(2i8, -3, 1), Ok(-1));
        assert!(quadratic(12i8, 0, 0).unwrap_err().is_overflow());
    }
}
