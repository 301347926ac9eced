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

//! # Divisors
//!
//! Divisor enumeration and the number classes built on divisor sums.
//!
//! ## Highlights
//!
//! - [`divisors`] / [`proper_divisors`]: ascending divisor lists found by
//!   pairing each small divisor `d <= sqrt(n)` with `n / d`.
//! - [`divisor_count`]: the divisor count from the prime factorization,
//!   without enumerating divisors.
//! - [`classify`]: deficient, perfect or abundant by the proper-divisor sum.
//! - [`amicable_partner`], [`amicable_numbers_below`], [`amicable_chain`]:
//!   pairs and longer cycles of proper-divisor sums.
//! - [`proper_divisor_sums`] and [`longest_amicable_chain`]: a sieve-built
//!   table of proper-divisor sums and the cycle search over it.
//!
//! Non-positive numbers have no divisors in this module: the enumerations
//! return empty lists and the sums return zero.

use crate::primes::prime_factors;
use euler_core::{
    error::{NumericError, NumericResult},
    math::interval::ClosedInterval,
    num::{ops::checked_sum, EulerNumeric},
};
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Returns the positive divisors of `n` in ascending order.
///
/// ```rust
/// # use euler_utils::divisors::divisors;
/// assert_eq!(divisors(28u32), vec![1, 2, 4, 7, 14, 28]);
/// assert!(divisors(0u32).is_empty());
/// ```
pub fn divisors<T>(n: T) -> Vec<T>
where
    T: EulerNumeric,
{
    if n <= T::zero() {
        return Vec::new();
    }

    let mut small = Vec::new();
    let mut large = Vec::new();
    let mut d = T::one();
    while d <= n / d {
        if (n % d).is_zero() {
            small.push(d);
            let pair = n / d;
            if pair != d {
                large.push(pair);
            }
        }
        d = d + T::one();
    }
    small.extend(large.into_iter().rev());
    small
}

/// Returns the divisors of `n` smaller than `n`, in ascending order.
///
/// 1 has no proper divisors.
///
/// ```rust
/// # use euler_utils::divisors::proper_divisors;
/// assert_eq!(proper_divisors(220u32), vec![1, 2, 4, 5, 10, 11, 20, 22, 44, 55, 110]);
/// ```
pub fn proper_divisors<T>(n: T) -> Vec<T>
where
    T: EulerNumeric,
{
    let mut all = divisors(n);
    all.pop();
    all
}

/// Returns the sum of the divisors of `n`.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if the sum does not fit `T`.
pub fn sum_of_divisors<T>(n: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    checked_sum(divisors(n), "sum of divisors")
}

/// Returns the sum of the proper divisors of `n`.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if the sum does not fit `T`.
///
/// ```rust
/// # use euler_utils::divisors::sum_of_proper_divisors;
/// assert_eq!(sum_of_proper_divisors(220u32), Ok(284));
/// assert_eq!(sum_of_proper_divisors(284u32), Ok(220));
/// ```
pub fn sum_of_proper_divisors<T>(n: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    checked_sum(proper_divisors(n), "sum of proper divisors")
}

/// Returns the number of positive divisors of `n`.
///
/// # Errors
///
/// Returns [`NumericError::OutOfDomain`] if `n` is not positive.
///
/// ```rust
/// # use euler_utils::divisors::divisor_count;
/// assert_eq!(divisor_count(28u32), Ok(6));
/// ```
pub fn divisor_count<T>(n: T) -> NumericResult<usize>
where
    T: EulerNumeric,
{
    let factors = prime_factors(n)?;
    let mut count = 1;
    let mut run = 0;
    for (i, &p) in factors.iter().enumerate() {
        run += 1;
        if factors.get(i + 1) != Some(&p) {
            count *= run + 1;
            run = 0;
        }
    }
    Ok(count)
}

/// Classification of a positive integer by the sum of its proper divisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Classification {
    /// The proper divisors sum to less than the number.
    Deficient,
    /// The proper divisors sum to exactly the number.
    Perfect,
    /// The proper divisors sum to more than the number.
    Abundant,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::Deficient => write!(f, "deficient"),
            Classification::Perfect => write!(f, "perfect"),
            Classification::Abundant => write!(f, "abundant"),
        }
    }
}

/// Classifies `n` as deficient, perfect or abundant.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `n` is not positive.
/// - [`NumericError::Overflow`] if the divisor sum does not fit `T`.
///
/// ```rust
/// # use euler_utils::divisors::{classify, Classification};
/// assert_eq!(classify(28u32), Ok(Classification::Perfect));
/// assert_eq!(classify(12u32), Ok(Classification::Abundant));
/// ```
pub fn classify<T>(n: T) -> NumericResult<Classification>
where
    T: EulerNumeric,
{
    if n <= T::zero() {
        return Err(NumericError::out_of_domain("n", "greater than zero", n));
    }
    let sum = sum_of_proper_divisors(n)?;
    Ok(match sum.cmp(&n) {
        std::cmp::Ordering::Less => Classification::Deficient,
        std::cmp::Ordering::Equal => Classification::Perfect,
        std::cmp::Ordering::Greater => Classification::Abundant,
    })
}

/// Returns every abundant number below `limit`, ascending.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if a divisor sum does not fit `T`.
pub fn abundant_numbers_below<T>(limit: T) -> NumericResult<Vec<T>>
where
    T: EulerNumeric,
{
    let mut abundant = Vec::new();
    let mut n = T::one();
    while n < limit {
        if classify(n)? == Classification::Abundant {
            abundant.push(n);
        }
        n = n + T::one();
    }
    Ok(abundant)
}

/// Returns the amicable partner of `n`: the `m != n` with
/// `s(n) == m` and `s(m) == n`, where `s` is the proper-divisor sum.
///
/// Perfect numbers are not amicable with themselves.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if a divisor sum does not fit `T`.
///
/// ```rust
/// # use euler_utils::divisors::amicable_partner;
/// assert_eq!(amicable_partner(220u32), Ok(Some(284)));
/// assert_eq!(amicable_partner(221u32), Ok(None));
/// ```
pub fn amicable_partner<T>(n: T) -> NumericResult<Option<T>>
where
    T: EulerNumeric,
{
    if n <= T::zero() {
        return Ok(None);
    }
    let partner = sum_of_proper_divisors(n)?;
    if partner == n || partner.is_zero() {
        return Ok(None);
    }
    if sum_of_proper_divisors(partner)? == n {
        Ok(Some(partner))
    } else {
        Ok(None)
    }
}

/// Returns every number below `limit` that has an amicable partner, ascending.
///
/// A number is listed when it is below `limit`, even if its partner is not.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if a divisor sum does not fit `T`.
pub fn amicable_numbers_below<T>(limit: T) -> NumericResult<Vec<T>>
where
    T: EulerNumeric,
{
    let mut amicable = Vec::new();
    let mut n = T::one();
    while n < limit {
        if amicable_partner(n)?.is_some() {
            amicable.push(n);
        }
        n = n + T::one();
    }
    Ok(amicable)
}

/// A cycle of proper-divisor sums: each member's proper divisors sum to the
/// next member, and the last member's to the first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmicableChain<T> {
    members: Vec<T>,
}

impl<T> AmicableChain<T>
where
    T: EulerNumeric,
{
    /// Returns the members in chain order, starting with the start value.
    #[inline]
    pub fn members(&self) -> &[T] {
        &self.members
    }

    /// Returns the number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// A chain always has at least one member.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns the smallest member.
    #[inline]
    pub fn smallest(&self) -> Option<T> {
        self.members.iter().copied().min()
    }
}

impl<T> fmt::Display for AmicableChain<T>
where
    T: EulerNumeric,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, m) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}

/// Follows proper-divisor sums from `start` and returns the chain if it
/// returns to `start` without any member exceeding `ceiling`.
///
/// A perfect number forms a chain of one member.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if a divisor sum does not fit `T`.
///
/// ```rust
/// # use euler_utils::divisors::amicable_chain;
/// let chain = amicable_chain(12496u32, 1_000_000).unwrap().unwrap();
/// assert_eq!(chain.members(), &[12496, 14288, 15472, 14536, 14264]);
/// ```
pub fn amicable_chain<T>(start: T, ceiling: T) -> NumericResult<Option<AmicableChain<T>>>
where
    T: EulerNumeric,
{
    if start <= T::zero() || start > ceiling {
        return Ok(None);
    }

    let mut members = vec![start];
    let mut seen: FxHashSet<T> = FxHashSet::default();
    seen.insert(start);

    let mut current = sum_of_proper_divisors(start)?;
    loop {
        if current == start {
            return Ok(Some(AmicableChain { members }));
        }
        if current.is_zero() || current > ceiling || !seen.insert(current) {
            // Terminated at 1 -> 0, left the ceiling, or entered a cycle
            // that does not contain `start`.
            return Ok(None);
        }
        members.push(current);
        current = sum_of_proper_divisors(current)?;
    }
}

/// Returns `s(n)` for every `n` in `0..limit`, built by adding each `d` to
/// all of its multiples `2d, 3d, ...`.
pub fn proper_divisor_sums(limit: usize) -> Vec<usize> {
    let mut sums = vec![0usize; limit];
    for d in 1..=limit / 2 {
        for multiple in (2 * d..limit).step_by(d) {
            sums[multiple] += d;
        }
    }
    sums
}

/// Returns the longest amicable chain with no member exceeding `ceiling`.
///
/// Ties keep the chain discovered first, i.e. the one whose smallest
/// member is reached from the smallest start value.
///
/// ```rust
/// # use euler_utils::divisors::longest_amicable_chain;
/// let chain = longest_amicable_chain(20_000).unwrap();
/// assert_eq!(chain.smallest(), Some(12496));
/// ```
pub fn longest_amicable_chain(ceiling: usize) -> Option<AmicableChain<usize>> {
    let sums = proper_divisor_sums(ceiling.saturating_add(1));
    let mut visited = vec![false; sums.len()];
    let mut best: Option<AmicableChain<usize>> = None;

    for start in 1..sums.len() {
        if visited[start] {
            continue;
        }

        let mut path: Vec<usize> = Vec::new();
        let mut position: FxHashMap<usize, usize> = FxHashMap::default();
        let mut current = start;
        while current != 0 && current < sums.len() && !visited[current] {
            position.insert(current, path.len());
            path.push(current);
            visited[current] = true;
            current = sums[current];
        }

        // A cycle closes only if the walk came back onto its own path.
        if let Some(&from) = position.get(&current) {
            let cycle = &path[from..];
            if best.as_ref().map_or(true, |b| cycle.len() > b.len()) {
                best = Some(AmicableChain {
                    members: cycle.to_vec(),
                });
            }
        }
    }
    best
}

/// Returns `true` if `n` is evenly divisible by every integer in
/// `start..=end`.
///
/// Divisors are tried from `end` downwards, where a failure is most likely.
///
/// # Errors
///
/// - [`NumericError::InvalidInterval`] if `start > end`.
/// - [`NumericError::OutOfDomain`] if `n` or `start` is not positive.
///
/// ```rust
/// # use euler_utils::divisors::is_divisible_by_range;
/// assert_eq!(is_divisible_by_range(2520u32, 1, 10), Ok(true));
/// assert_eq!(is_divisible_by_range(2520u32, 1, 11), Ok(false));
/// ```
pub fn is_divisible_by_range<T>(n: T, start: T, end: T) -> NumericResult<bool>
where
    T: EulerNumeric,
{
    let interval = ClosedInterval::new(start, end)?;
    if n <= T::zero() {
        return Err(NumericError::out_of_domain("n", "greater than zero", n));
    }
    if start <= T::zero() {
        return Err(NumericError::out_of_domain(
            "start",
            "greater than zero",
            start,
        ));
    }
    Ok(interval.iter().rev().all(|d| (n % d).is_zero()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisors_reference_values() {
        assert_eq!(divisors(1u32), vec![1]);
        assert_eq!(divisors(2u32), vec![1, 2]);
        assert_eq!(divisors(16u32), vec![1, 2, 4, 8, 16]);
        assert_eq!(
            divisors(1000u32),
            vec![1, 2, 4, 5, 8, 10, 20, 25, 40, 50, 100, 125, 200, 250, 500, 1000]
        );
        assert_eq!(divisors(1001u32), vec![1, 7, 11, 13, 77, 91, 143, 1001]);
        assert_eq!(divisors(1003u32), vec![1, 17, 59, 1003]);
    }

    #[test]
    fn test_divisors_non_positive_are_empty() {
        assert!(divisors(0i32).is_empty());
        assert!(divisors(-12i32).is_empty());
        assert!(proper_divisors(0u32).is_empty());
    }

    #[test]
    fn test_proper_divisors() {
        assert!(proper_divisors(1u32).is_empty());
        assert_eq!(proper_divisors(2u32), vec![1]);
        assert_eq!(proper_divisors(8u32), vec![1, 2, 4]);
        assert_eq!(proper_divisors(15u32), vec![1, 3, 5]);
        assert_eq!(proper_divisors(100u32), vec![1, 2, 4, 5, 10, 20, 25, 50]);
    }

    #[test]
    fn test_divisor_sums() {
        let cases: [(u32, u32, u32); 9] = [
            (0, 0, 0),
            (1, 1, 0),
            (2, 3, 1),
            (8, 15, 7),
            (15, 24, 9),
            (16, 31, 15),
            (100, 217, 117),
            (1000, 2340, 1340),
            (1001, 1344, 343),
        ];
        for (n, all, proper) in cases {
            assert_eq!(sum_of_divisors(n), Ok(all), "sum_of_divisors({n})");
            assert_eq!(sum_of_proper_divisors(n), Ok(proper), "sum_of_proper_divisors({n})");
        }
    }

    #[test]
    fn test_divisor_sum_overflow() {
        // 1 + 2 + 3 + 4 + 6 + 8 + 12 + 16 + 24 + 32 + 48 + 64 + 96 + 192 > 255
        assert!(sum_of_divisors(192u8).unwrap_err().is_overflow());
    }

    #[test]
    fn test_divisor_count() {
        assert_eq!(divisor_count(1u32), Ok(1));
        assert_eq!(divisor_count(28u32), Ok(6));
        assert_eq!(divisor_count(76_576_500u64), Ok(576));
        for n in 1..500u32 {
            assert_eq!(divisor_count(n), Ok(divisors(n).len()), "n = {n}");
        }
        assert!(divisor_count(0u32).is_err());
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(1u32), Ok(Classification::Deficient));
        assert_eq!(classify(6u32), Ok(Classification::Perfect));
        assert_eq!(classify(496u32), Ok(Classification::Perfect));
        assert_eq!(classify(12u32), Ok(Classification::Abundant));
        assert_eq!(classify(13u32), Ok(Classification::Deficient));
        assert!(classify(0u32).is_err());
        assert!(classify(-6i32).is_err());
        assert_eq!(Classification::Abundant.to_string(), "abundant");
    }

    #[test]
    fn test_abundant_numbers_below() {
        assert_eq!(abundant_numbers_below(50u32), Ok(vec![12, 18, 20, 24, 30, 36, 40, 42, 48]));
    }

    #[test]
    fn test_amicable_partner() {
        assert_eq!(amicable_partner(220u32), Ok(Some(284)));
        assert_eq!(amicable_partner(284u32), Ok(Some(220)));
        assert_eq!(amicable_partner(2620u32), Ok(Some(2924)));
        assert_eq!(amicable_partner(79750u32), Ok(Some(88730)));
        assert_eq!(amicable_partner(6u32), Ok(None));
        assert_eq!(amicable_partner(0u32), Ok(None));
        assert_eq!(amicable_partner(1u32), Ok(None));
    }

    #[test]
    fn test_amicable_numbers_below() {
        assert_eq!(amicable_numbers_below(221u32), Ok(vec![220]));
        assert_eq!(
            amicable_numbers_below(10_000u32),
            Ok(vec![220, 284, 1184, 1210, 2620, 2924, 5020, 5564, 6232, 6368])
        );
        assert_eq!(amicable_numbers_below(0u32), Ok(vec![]));
    }

    #[test]
    fn test_amicable_chain_of_pair_and_perfect_number() {
        let pair = amicable_chain(220u32, 1000).unwrap().unwrap();
        assert_eq!(pair.members(), &[220, 284]);
        assert_eq!(pair.to_string(), "220 -> 284");

        let perfect = amicable_chain(28u32, 1000).unwrap().unwrap();
        assert_eq!(perfect.len(), 1);
    }

    #[test]
    fn test_amicable_chain_respects_ceiling() {
        assert_eq!(amicable_chain(220u32, 283), Ok(None));
        assert_eq!(amicable_chain(12496u32, 15000), Ok(None));
    }

    #[test]
    fn test_amicable_chain_none_when_start_not_on_cycle() {
        // 12 -> 16 -> 15 -> 9 -> 4 -> 3 -> 1 -> 0
        assert_eq!(amicable_chain(12u32, 1000), Ok(None));
        // 562 enters the 284/220 pair without returning to itself.
        assert_eq!(amicable_chain(562u32, 1000), Ok(None));
    }

    #[test]
    fn test_proper_divisor_sums_matches_enumeration() {
        let sums = proper_divisor_sums(2000);
        for n in 0..2000usize {
            assert_eq!(Ok(sums[n]), sum_of_proper_divisors(n), "n = {n}");
        }
        assert!(proper_divisor_sums(0).is_empty());
    }

    #[test]
    fn test_longest_amicable_chain_small_ceiling() {
        assert_eq!(longest_amicable_chain(5), None);
        let perfect_only = longest_amicable_chain(100).unwrap();
        assert_eq!(perfect_only.members(), &[6]);
    }

    #[test]
    fn test_longest_amicable_chain_below_one_million() {
        let chain = longest_amicable_chain(1_000_000).unwrap();
        assert_eq!(chain.len(), 28);
        assert_eq!(chain.smallest(), Some(14316));
    }

    #[test]
    fn test_is_divisible_by_range() {
        assert_eq!(is_divisible_by_range(100u32, 1, 2), Ok(true));
        assert_eq!(is_divisible_by_range(100u32, 1, 4), Ok(false));
        assert_eq!(is_divisible_by_range(60u32, 1, 6), Ok(true));
        assert_eq!(is_divisible_by_range(1432u32, 1, 1432), Ok(false));
        assert_eq!(is_divisible_by_range(232_792_560u64, 1, 20), Ok(true));
    }

    #[test]
    fn test_is_divisible_by_range_errors() {
        assert!(matches!(
            is_divisible_by_range(100u32, 3, 2),
            Err(NumericError::InvalidInterval { .. })
        ));
        assert!(matches!(
            is_divisible_by_range(100i32, -5, -6),
            Err(NumericError::InvalidInterval { .. })
        ));
        assert!(matches!(
            is_divisible_by_range(100i32, 0, 5),
            Err(NumericError::OutOfDomain { name: "start", .. })
        ));
        assert!(matches!(
            is_divisible_by_range(0u32, 1, 5),
            Err(NumericError::OutOfDomain { name: "n", .. })
        ));
    }
}
