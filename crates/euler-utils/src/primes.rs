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

//! # Primes
//!
//! Prime factorization and primality utilities.
//!
//! ## Highlights
//!
//! - [`largest_prime_factor`]: strips factors of two, then odd candidates up
//!   to the integer square root of the shrinking remainder.
//! - [`prime_factors`]: the same walk, collecting every factor with its
//!   multiplicity into a `SmallVec` (64-bit values have at most 63 factors,
//!   and typical inputs far fewer).
//! - [`is_prime`]: 6k ± 1 trial division.
//! - [`PrimeSieve`]: Sieve of Eratosthenes over a `FixedBitSet`, backing
//!   [`primes_below`], [`nth_prime`], [`primes_with_digits`] and
//!   [`circular_primes_below`].

use crate::digits::rotations;
use euler_core::{
    error::{NumericError, NumericResult},
    math::root::isqrt,
    num::{ops::OrOverflow, EulerNumeric},
};
use fixedbitset::FixedBitSet;
use smallvec::SmallVec;

/// Inline capacity of [`PrimeFactors`].
const INLINE_FACTORS: usize = 16;

/// Ascending prime factors of a number, with multiplicity.
pub type PrimeFactors<T> = SmallVec<[T; INLINE_FACTORS]>;

/// Returns the largest prime factor of `n`.
///
/// `largest_prime_factor(1)` is 1, although 1 is not prime.
///
/// # Errors
///
/// Returns [`NumericError::OutOfDomain`] if `n` is not positive.
///
/// # Examples
///
/// ```rust
/// # use euler_utils::primes::largest_prime_factor;
/// assert_eq!(largest_prime_factor(13195u32), Ok(29));
/// assert_eq!(largest_prime_factor(8u32), Ok(2));
/// ```
pub fn largest_prime_factor<T>(n: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    if n <= T::zero() {
        return Err(NumericError::out_of_domain("n", "greater than zero", n));
    }

    let mut remainder = n;
    // Last factor divided out; the answer when the remainder collapses to 1.
    let mut largest = T::one();

    while (remainder % T::TWO).is_zero() {
        remainder = remainder / T::TWO;
        largest = T::TWO;
    }

    let mut candidate = T::THREE;
    while candidate <= isqrt(remainder) {
        while (remainder % candidate).is_zero() {
            remainder = remainder / candidate;
            largest = candidate;
        }
        candidate = candidate + T::TWO;
    }

    if remainder > T::one() {
        Ok(remainder)
    } else {
        Ok(largest)
    }
}

/// Returns the prime factors of `n` in ascending order, with multiplicity.
///
/// The factors of 1 are empty.
///
/// # Errors
///
/// Returns [`NumericError::OutOfDomain`] if `n` is not positive.
///
/// ```rust
/// # use euler_utils::primes::prime_factors;
/// assert_eq!(prime_factors(360u32).unwrap().as_slice(), &[2, 2, 2, 3, 3, 5]);
/// ```
pub fn prime_factors<T>(n: T) -> NumericResult<PrimeFactors<T>>
where
    T: EulerNumeric,
{
    if n <= T::zero() {
        return Err(NumericError::out_of_domain("n", "greater than zero", n));
    }

    let mut factors = PrimeFactors::new();
    let mut remainder = n;

    while (remainder % T::TWO).is_zero() {
        remainder = remainder / T::TWO;
        factors.push(T::TWO);
    }

    let mut candidate = T::THREE;
    while candidate <= isqrt(remainder) {
        while (remainder % candidate).is_zero() {
            remainder = remainder / candidate;
            factors.push(candidate);
        }
        candidate = candidate + T::TWO;
    }

    if remainder > T::one() {
        factors.push(remainder);
    }
    Ok(factors)
}

/// Returns `true` if `n` is prime.
///
/// ```rust
/// # use euler_utils::primes::is_prime;
/// assert!(is_prime(104_743u32));
/// assert!(!is_prime(1u32));
/// assert!(!is_prime(-7i32));
/// ```
pub fn is_prime<T>(n: T) -> bool
where
    T: EulerNumeric,
{
    if n <= T::one() {
        return false;
    }
    if n <= T::THREE {
        return true;
    }
    if (n % T::TWO).is_zero() || (n % T::THREE).is_zero() {
        return false;
    }

    let mut i = T::FIVE;
    while i <= n / i {
        if (n % i).is_zero() || (n % (i + T::TWO)).is_zero() {
            return false;
        }
        i = i + T::SIX;
    }
    true
}

/// A Sieve of Eratosthenes answering primality for every value below a limit.
#[derive(Debug, Clone)]
pub struct PrimeSieve {
    /// Bit `i` is set iff `i` is prime.
    primes: FixedBitSet,
}

impl PrimeSieve {
    /// Sieves every integer in `0..limit`.
    pub fn new(limit: usize) -> Self {
        let mut primes = FixedBitSet::with_capacity(limit);
        if limit > 2 {
            primes.insert_range(2..);
        }

        let mut p = 2;
        while p * p < limit {
            if primes.contains(p) {
                let mut multiple = p * p;
                while multiple < limit {
                    primes.set(multiple, false);
                    multiple += p;
                }
            }
            p += 1;
        }
        Self { primes }
    }

    /// Returns the exclusive upper bound of the sieve.
    #[inline]
    pub fn limit(&self) -> usize {
        self.primes.len()
    }

    /// Returns `true` if `n` is prime. Values at or beyond the limit are
    /// reported as not prime.
    #[inline]
    pub fn is_prime(&self, n: usize) -> bool {
        self.primes.contains(n)
    }

    /// Returns the number of primes below the limit.
    #[inline]
    pub fn count(&self) -> usize {
        self.primes.count_ones(..)
    }

    /// Iterates the primes below the limit in ascending order.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.primes.ones()
    }
}

/// Converts a sieve limit to `usize`; non-positive limits become 0.
fn sieve_limit<T>(limit: T) -> NumericResult<usize>
where
    T: EulerNumeric,
{
    if limit <= T::zero() {
        return Ok(0);
    }
    limit.to_usize().ok_or_else(|| {
        NumericError::out_of_domain("limit", "addressable by a sieve", limit)
    })
}

/// Returns every prime below `limit` in ascending order.
///
/// # Errors
///
/// Returns [`NumericError::OutOfDomain`] if `limit` does not fit `usize`.
///
/// ```rust
/// # use euler_utils::primes::primes_below;
/// assert_eq!(primes_below(20u32), Ok(vec![2, 3, 5, 7, 11, 13, 17, 19]));
/// ```
pub fn primes_below<T>(limit: T) -> NumericResult<Vec<T>>
where
    T: EulerNumeric,
{
    let sieve = PrimeSieve::new(sieve_limit(limit)?);
    Ok(sieve.iter().filter_map(T::from_usize).collect())
}

/// Returns the sum of every prime below `limit`.
///
/// # Errors
///
/// Same as [`primes_below`], plus [`NumericError::Overflow`] if the sum does
/// not fit `T`.
pub fn sum_of_primes_below<T>(limit: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    euler_core::num::ops::checked_sum(primes_below(limit)?, "sum of primes")
}

/// Upper bound for the `n`-th prime (Rosser's theorem, `n >= 6`).
fn nth_prime_bound(n: usize) -> usize {
    if n < 6 {
        return 15;
    }
    let n = n as f64;
    (n * (n.ln() + n.ln().ln())).ceil() as usize + 1
}

/// Returns the `n`-th prime, counting from `nth_prime(1) == 2`.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `n` is zero.
/// - [`NumericError::Overflow`] if the prime does not fit `T`.
///
/// ```rust
/// # use euler_utils::primes::nth_prime;
/// assert_eq!(nth_prime::<u32>(6), Ok(13));
/// ```
pub fn nth_prime<T>(n: usize) -> NumericResult<T>
where
    T: EulerNumeric,
{
    if n == 0 {
        return Err(NumericError::out_of_domain("n", "greater than zero", n));
    }
    PrimeSieve::new(nth_prime_bound(n))
        .iter()
        .nth(n - 1)
        .and_then(T::from_usize)
        .or_overflow("n-th prime")
}

/// Returns every prime with exactly `digits` decimal digits.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `digits` is zero.
/// - [`NumericError::Overflow`] if `10^digits` does not fit `T`.
///
/// ```rust
/// # use euler_utils::primes::primes_with_digits;
/// assert_eq!(primes_with_digits::<u32>(1), Ok(vec![2, 3, 5, 7]));
/// ```
pub fn primes_with_digits<T>(digits: u32) -> NumericResult<Vec<T>>
where
    T: EulerNumeric,
{
    if digits == 0 {
        return Err(NumericError::out_of_domain(
            "digits",
            "greater than zero",
            digits,
        ));
    }
    let lower = num_traits::checked_pow(T::TEN, digits as usize - 1)
        .or_overflow("smallest number with the requested digits")?;
    let upper = lower
        .checked_mul_val(T::TEN)
        .or_overflow("largest number with the requested digits")?;

    let mut primes = primes_below(upper)?;
    primes.retain(|&p| p >= lower);
    Ok(primes)
}

/// Returns `true` if every digit rotation of `n` is prime.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if a rotation of a prime `n` does not
/// fit `T`.
///
/// ```rust
/// # use euler_utils::primes::is_circular_prime;
/// assert_eq!(is_circular_prime(197u32), Ok(true));
/// assert_eq!(is_circular_prime(23u32), Ok(false));
/// ```
pub fn is_circular_prime<T>(n: T) -> NumericResult<bool>
where
    T: EulerNumeric,
{
    if !is_prime(n) {
        return Ok(false);
    }
    Ok(rotations(n)?.into_iter().all(is_prime))
}

/// Returns every circular prime below `limit`.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `limit` does not fit `usize`.
/// - [`NumericError::Overflow`] if a rotation of a prime below `limit` does
///   not fit `T`.
///
/// ```rust
/// # use euler_utils::primes::circular_primes_below;
/// assert_eq!(
///     circular_primes_below(100u32),
///     Ok(vec![2, 3, 5, 7, 11, 13, 17, 31, 37, 71, 73, 79, 97])
/// );
/// ```
pub fn circular_primes_below<T>(limit: T) -> NumericResult<Vec<T>>
where
    T: EulerNumeric,
{
    let sieve = PrimeSieve::new(sieve_limit(limit)?);
    let check = |r: T| match r.to_usize() {
        Some(idx) if idx < sieve.limit() => sieve.is_prime(idx),
        _ => is_prime(r),
    };

    let mut circular = Vec::new();
    for p in sieve.iter().filter_map(T::from_usize) {
        if rotations(p)?.into_iter().all(&check) {
            circular.push(p);
        }
    }
    Ok(circular)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_prime_factor_reference_values() {
        assert_eq!(largest_prime_factor(13195u64), Ok(29));
        assert_eq!(largest_prime_factor(600_851_475_143u64), Ok(6857));
        assert_eq!(largest_prime_factor(600_851_475_143i64), Ok(6857));
    }

    #[test]
    fn test_largest_prime_factor_of_one_is_one() {
        assert_eq!(largest_prime_factor(1u32), Ok(1));
    }

    #[test]
    fn test_largest_prime_factor_when_remainder_collapses() {
        assert_eq!(largest_prime_factor(2u32), Ok(2));
        assert_eq!(largest_prime_factor(8u32), Ok(2));
        assert_eq!(largest_prime_factor(1024u32), Ok(2));
        assert_eq!(largest_prime_factor(9u32), Ok(3));
        assert_eq!(largest_prime_factor(27u32), Ok(3));
        assert_eq!(largest_prime_factor(75u32), Ok(5));
    }

    #[test]
    fn test_largest_prime_factor_of_prime_is_itself() {
        assert_eq!(largest_prime_factor(7919u32), Ok(7919));
        assert_eq!(largest_prime_factor(u32::MAX - 4), Ok(u32::MAX - 4));
    }

    #[test]
    fn test_largest_prime_factor_rejects_non_positive() {
        assert!(matches!(
            largest_prime_factor(0i32),
            Err(NumericError::OutOfDomain { name: "n", .. })
        ));
        assert!(matches!(
            largest_prime_factor(-12i32),
            Err(NumericError::OutOfDomain { name: "n", .. })
        ));
        assert!(largest_prime_factor(0u8).is_err());
    }

    #[test]
    fn test_prime_factors() {
        assert!(prime_factors(1u32).unwrap().is_empty());
        assert_eq!(prime_factors(13195u32).unwrap().as_slice(), &[5, 7, 13, 29]);
        assert_eq!(
            prime_factors(600_851_475_143u64).unwrap().as_slice(),
            &[71, 839, 1471, 6857]
        );
        assert_eq!(prime_factors(1u64 << 40).unwrap().len(), 40);
        assert!(prime_factors(0u32).is_err());
    }

    #[test]
    fn test_is_prime_small_values() {
        let primes: Vec<u32> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_is_prime_squares_of_primes() {
        assert!(!is_prime(25u32));
        assert!(!is_prime(49u32));
        assert!(!is_prime(7919u64 * 7919));
    }

    #[test]
    fn test_is_prime_type_extremes() {
        assert!(is_prime(251u8));
        assert!(is_prime(i32::MAX)); // 2^31 - 1 is a Mersenne prime
        assert!(is_prime(1_000_000_007u64));
        assert!(!is_prime(1_000_000_007u64 * 3));
    }

    #[test]
    fn test_sieve_matches_trial_division() {
        let sieve = PrimeSieve::new(10_000);
        for n in 0..10_000usize {
            assert_eq!(sieve.is_prime(n), is_prime(n), "n = {n}");
        }
        assert_eq!(sieve.count(), 1229);
        assert!(!sieve.is_prime(10_007));
    }

    #[test]
    fn test_sieve_tiny_limits() {
        assert_eq!(PrimeSieve::new(0).count(), 0);
        assert_eq!(PrimeSieve::new(2).count(), 0);
        assert_eq!(PrimeSieve::new(3).iter().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn test_primes_below_non_positive() {
        assert_eq!(primes_below(0i32), Ok(vec![]));
        assert_eq!(primes_below(-10i32), Ok(vec![]));
    }

    #[test]
    fn test_sum_of_primes_below() {
        assert_eq!(sum_of_primes_below(10u32), Ok(17));
        assert_eq!(sum_of_primes_below(2_000_000u64), Ok(142_913_828_922));
        assert!(sum_of_primes_below(100u8).unwrap_err().is_overflow());
    }

    #[test]
    fn test_nth_prime() {
        assert_eq!(nth_prime::<u32>(1), Ok(2));
        assert_eq!(nth_prime::<u32>(5), Ok(11));
        assert_eq!(nth_prime::<u32>(10_001), Ok(104_743));
        assert!(nth_prime::<u32>(0).is_err());
        // The 55th prime is 257.
        assert!(nth_prime::<u8>(55).unwrap_err().is_overflow());
    }

    #[test]
    fn test_primes_with_digits() {
        let two_digit = primes_with_digits::<u32>(2).unwrap();
        assert_eq!(two_digit.len(), 21);
        assert_eq!(two_digit.first(), Some(&11));
        assert_eq!(two_digit.last(), Some(&97));
        assert_eq!(primes_with_digits::<u32>(4).unwrap().len(), 1061);
        assert!(primes_with_digits::<u32>(0).is_err());
        assert!(primes_with_digits::<u8>(3).unwrap_err().is_overflow());
    }

    #[test]
    fn test_circular_primes() {
        assert_eq!(is_circular_prime(2u32), Ok(true));
        assert_eq!(is_circular_prime(971u32), Ok(true));
        assert_eq!(is_circular_prime(19u32), Ok(false)); // 91 = 7 * 13
        assert_eq!(is_circular_prime(4u32), Ok(false));
        assert_eq!(circular_primes_below(100u32).unwrap().len(), 13);
    }

    #[test]
    fn test_circular_prime_rotation_overflow_is_reported() {
        // 199 rotates to 991, which does not fit u8.
        assert!(is_circular_prime(199u8).unwrap_err().is_overflow());
        assert_eq!(is_circular_prime(199u16), Ok(true));
        // Non-primes are rejected before any rotation is built.
        assert_eq!(is_circular_prime(200u8), Ok(false));

        assert!(circular_primes_below(200u8).unwrap_err().is_overflow());
        assert_eq!(circular_primes_below(100u8).unwrap().len(), 13);
        let wide = circular_primes_below(200u16).unwrap();
        assert_eq!(&wide[13..], &[113, 131, 197, 199]);
    }

    #[test]
    fn test_circular_primes_below_one_million() {
        assert_eq!(circular_primes_below(1_000_000u32).unwrap().len(), 55);
    }
}
