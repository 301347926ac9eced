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

//! Checked factorials, permutations and combinations, lexicographic
//! permutation enumeration and pairwise sums.

use euler_core::{
    error::{NumericError, NumericResult},
    math::{gcd::gcd, interval::ClosedInterval},
    num::{
        ops::{checked_product, OrOverflow},
        EulerNumeric,
    },
};
use std::iter::FusedIterator;

fn check_non_negative<T>(name: &'static str, value: T) -> NumericResult<()>
where
    T: EulerNumeric,
{
    if value < T::zero() {
        return Err(NumericError::out_of_domain(
            name,
            "greater than or equal to zero",
            value,
        ));
    }
    Ok(())
}

fn check_selection<T>(n: T, k: T) -> NumericResult<()>
where
    T: EulerNumeric,
{
    check_non_negative("n", n)?;
    check_non_negative("k", k)?;
    if k > n {
        return Err(NumericError::out_of_domain(
            "k",
            "less than or equal to n",
            k,
        ));
    }
    Ok(())
}

/// Returns `n!`.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `n` is negative.
/// - [`NumericError::Overflow`] if `n!` does not fit `T`.
///
/// ```rust
/// # use euler_utils::combinatorics::factorial;
/// assert_eq!(factorial(5u32), Ok(120));
/// assert_eq!(factorial(0u32), Ok(1));
/// ```
pub fn factorial<T>(n: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    check_non_negative("n", n)?;
    if n.is_zero() {
        return Ok(T::one());
    }
    checked_product(ClosedInterval::new(T::one(), n)?, "factorial")
}

/// Returns the number of ordered selections of `k` items out of `n`,
/// `n! / (n - k)!`.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `n` or `k` is negative, or `k > n`.
/// - [`NumericError::Overflow`] if the count does not fit `T`.
///
/// ```rust
/// # use euler_utils::combinatorics::permutations;
/// assert_eq!(permutations(10u32, 3), Ok(720));
/// ```
pub fn permutations<T>(n: T, k: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    check_selection(n, k)?;
    let mut count = T::one();
    let mut factor = n;
    let stop = n - k;
    while factor > stop {
        count = count.checked_mul_val(factor).or_overflow("permutations")?;
        factor = factor - T::one();
    }
    Ok(count)
}

/// Returns the binomial coefficient `n choose k`.
///
/// The running product is reduced by the gcd with each divisor before the
/// multiplication, so this only fails when the coefficient itself does not
/// fit `T`.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `n` or `k` is negative, or `k > n`.
/// - [`NumericError::Overflow`] if the coefficient does not fit `T`.
///
/// ```rust
/// # use euler_utils::combinatorics::combinations;
/// assert_eq!(combinations(5u32, 2), Ok(10));
/// assert_eq!(combinations(40u64, 20), Ok(137_846_528_820));
/// ```
pub fn combinations<T>(n: T, k: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    check_selection(n, k)?;
    let k = k.min(n - k);

    let mut count = T::one();
    let mut i = T::one();
    while i <= k {
        // count * (n - k + i) is divisible by i
        let g = gcd(count, i);
        let numerator = (n - k + i) / (i / g);
        count = (count / g)
            .checked_mul_val(numerator)
            .or_overflow("combinations")?;
        i = i + T::one();
    }
    Ok(count)
}

/// Returns the number of monotone lattice paths through a `width` by
/// `height` grid, moving only right and down.
///
/// # Errors
///
/// Same as [`combinations`].
///
/// ```rust
/// # use euler_utils::combinatorics::lattice_paths;
/// assert_eq!(lattice_paths(2u32, 2), Ok(6));
/// ```
pub fn lattice_paths<T>(width: T, height: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    check_non_negative("width", width)?;
    check_non_negative("height", height)?;
    let steps = width.checked_add_val(height).or_overflow("lattice steps")?;
    combinations(steps, width)
}

/// Rearranges `items` into the next lexicographically greater permutation.
///
/// Returns `false` and leaves `items` untouched if they already form the
/// greatest permutation (non-increasing order).
///
/// ```rust
/// # use euler_utils::combinatorics::next_permutation;
/// let mut items = [1, 2, 3];
/// assert!(next_permutation(&mut items));
/// assert_eq!(items, [1, 3, 2]);
/// ```
pub fn next_permutation<E>(items: &mut [E]) -> bool
where
    E: Ord,
{
    if items.len() < 2 {
        return false;
    }

    // Longest non-increasing suffix starts at `pivot + 1`.
    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }
    let pivot = pivot - 1;

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot] {
        successor -= 1;
    }
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}

/// The distinct permutations of a multiset, in lexicographic order.
///
/// Repeated items produce each arrangement once.
#[derive(Debug, Clone)]
pub struct LexicographicPermutations<E> {
    current: Option<Vec<E>>,
}

impl<E> LexicographicPermutations<E>
where
    E: Ord + Clone,
{
    /// Creates the iterator, starting at the sorted arrangement of `items`.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let mut first: Vec<E> = items.into_iter().collect();
        first.sort();
        Self {
            current: Some(first),
        }
    }
}

impl<E> Iterator for LexicographicPermutations<E>
where
    E: Ord + Clone,
{
    type Item = Vec<E>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let mut following = current.clone();
        if next_permutation(&mut following) {
            self.current = Some(following);
        }
        Some(current)
    }
}

impl<E> FusedIterator for LexicographicPermutations<E> where E: Ord + Clone {}

/// Returns every distinct rearrangement of the characters of `s`, in
/// lexicographic order. The empty string has one (empty) arrangement.
///
/// ```rust
/// # use euler_utils::combinatorics::string_permutations;
/// assert_eq!(string_permutations("aba"), vec!["aab", "aba", "baa"]);
/// ```
pub fn string_permutations(s: &str) -> Vec<String> {
    LexicographicPermutations::new(s.chars())
        .map(|chars| chars.into_iter().collect())
        .collect()
}

/// Returns the distinct sums `values[i] + values[j]` (`i <= j`, so a value
/// may be paired with itself) that do not exceed `upper_limit`, ascending.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if a sum falls below the range of `T`.
/// Sums above the range of `T` exceed any limit and are skipped.
///
/// ```rust
/// # use euler_utils::combinatorics::pairwise_sums;
/// assert_eq!(pairwise_sums(&[1u32, 4, 6], 9), Ok(vec![2, 5, 7, 8]));
/// ```
pub fn pairwise_sums<T>(values: &[T], upper_limit: T) -> NumericResult<Vec<T>>
where
    T: EulerNumeric,
{
    let mut sums = Vec::new();
    for (i, &a) in values.iter().enumerate() {
        for &b in &values[i..] {
            match a.checked_add_val(b) {
                Some(sum) if sum <= upper_limit => sums.push(sum),
                Some(_) => {}
                None if a > T::zero() => {}
                None => return Err(NumericError::Overflow("pairwise sum")),
            }
        }
    }
    sums.sort_unstable();
    sums.dedup();
    Ok(sums)
}
