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

//! Decimal digit helpers.
//!
//! Digits are handled as `u8` values in most-significant-first order. The
//! sign of a negative input is ignored by the extraction helpers; functions
//! whose result would depend on it reject negative inputs instead. Digit
//! strings (`"2224"`) are parsed by the series-product helpers.

use crate::combinatorics::LexicographicPermutations;
use euler_core::{
    error::{NumericError, NumericResult},
    num::{
        ops::{checked_product, OrOverflow},
        EulerNumeric,
    },
};
use rustc_hash::FxHashMap;

/// Returns the decimal digits of `|n|`, most significant first.
///
/// ```rust
/// # use euler_utils::digits::digits;
/// assert_eq!(digits(1203u32), vec![1, 2, 0, 3]);
/// assert_eq!(digits(0u32), vec![0]);
/// assert_eq!(digits(-45i32), vec![4, 5]);
/// ```
pub fn digits<T>(n: T) -> Vec<u8>
where
    T: EulerNumeric,
{
    if n.is_zero() {
        return vec![0];
    }

    let mut out = Vec::new();
    let mut rest = n;
    while !rest.is_zero() {
        let r = rest % T::TEN;
        let r = if r < T::zero() { T::zero() - r } else { r };
        // 0..=9 always fits
        out.push(r.to_u8().unwrap_or_default());
        rest = rest / T::TEN;
    }
    out.reverse();
    out
}

/// Assembles an integer from most-significant-first decimal digits.
///
/// An empty slice yields zero.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if a digit is greater than 9.
/// - [`NumericError::Overflow`] if the number does not fit `T`.
pub fn from_digits<T>(digits: &[u8]) -> NumericResult<T>
where
    T: EulerNumeric,
{
    digits.iter().try_fold(T::zero(), |acc, &d| {
        if d > 9 {
            return Err(NumericError::out_of_domain("digit", "at most 9", d));
        }
        let d = T::from_u8(d).or_overflow("decimal digit")?;
        acc.checked_mul_val(T::TEN)
            .and_then(|shifted| shifted.checked_add_val(d))
            .or_overflow("number from digits")
    })
}

/// Returns the number of decimal digits of `|n|`; zero has one digit.
#[inline]
pub fn digit_count<T>(n: T) -> usize
where
    T: EulerNumeric,
{
    let mut count = 1;
    let mut rest = n / T::TEN;
    while !rest.is_zero() {
        count += 1;
        rest = rest / T::TEN;
    }
    count
}

/// Returns the sum of the decimal digits of `|n|`.
#[inline]
pub fn digit_sum<T>(n: T) -> u64
where
    T: EulerNumeric,
{
    digits(n).into_iter().map(u64::from).sum()
}

/// Returns every cyclic left rotation of the digits of `n`, starting with
/// `n` itself. Rotations that move a zero to the front lose it, so the
/// rotations of 101 are `[101, 11, 110]`.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `n` is negative.
/// - [`NumericError::Overflow`] if a rotation does not fit `T`.
///
/// ```rust
/// # use euler_utils::digits::rotations;
/// assert_eq!(rotations(197u32), Ok(vec![197, 971, 719]));
/// ```
pub fn rotations<T>(n: T) -> NumericResult<Vec<T>>
where
    T: EulerNumeric,
{
    if n < T::zero() {
        return Err(NumericError::out_of_domain("n", "non-negative", n));
    }

    let mut ds = digits(n);
    let mut out = Vec::with_capacity(ds.len());
    for _ in 0..ds.len() {
        out.push(from_digits(&ds)?);
        ds.rotate_left(1);
    }
    Ok(out)
}

/// Returns `true` if `a` and `b` consist of the same decimal digits with the
/// same multiplicities.
pub fn is_digit_permutation<T>(a: T, b: T) -> bool
where
    T: EulerNumeric,
{
    let mut counts: FxHashMap<u8, i32> = FxHashMap::default();
    for d in digits(a) {
        *counts.entry(d).or_default() += 1;
    }
    for d in digits(b) {
        *counts.entry(d).or_default() -= 1;
    }
    counts.values().all(|&c| c == 0)
}

/// Returns the decimal digits of `base^exponent`, most significant first.
///
/// Works on a little-endian digit vector, so the result is exact for any
/// exponent. `0^0` is taken as 1.
///
/// ```rust
/// # use euler_utils::digits::power_digits;
/// assert_eq!(power_digits(2, 15), vec![3, 2, 7, 6, 8]);
/// ```
pub fn power_digits(base: u32, exponent: u32) -> Vec<u8> {
    let mut little_endian: Vec<u8> = vec![1];
    for _ in 0..exponent {
        let mut carry: u64 = 0;
        for d in little_endian.iter_mut() {
            let v = u64::from(*d) * u64::from(base) + carry;
            *d = (v % 10) as u8;
            carry = v / 10;
        }
        while carry > 0 {
            little_endian.push((carry % 10) as u8);
            carry /= 10;
        }
    }
    while little_endian.len() > 1 && little_endian.last() == Some(&0) {
        little_endian.pop();
    }
    little_endian.reverse();
    little_endian
}

/// Returns the sum of the decimal digits of `base^exponent`.
///
/// ```rust
/// # use euler_utils::digits::power_digit_sum;
/// assert_eq!(power_digit_sum(2, 15), 26);
/// ```
pub fn power_digit_sum(base: u32, exponent: u32) -> u64 {
    power_digits(base, exponent).into_iter().map(u64::from).sum()
}

/// Returns the distinct numbers formed by rearranging the digits of `n`,
/// ascending. Arrangements with a leading zero are left out, so every result
/// has as many digits as `n`.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `n` is negative.
/// - [`NumericError::Overflow`] if an arrangement does not fit `T`.
///
/// ```rust
/// # use euler_utils::digits::digit_permutations;
/// assert_eq!(digit_permutations(102u32), Ok(vec![102, 120, 201, 210]));
/// ```
pub fn digit_permutations<T>(n: T) -> NumericResult<Vec<T>>
where
    T: EulerNumeric,
{
    if n < T::zero() {
        return Err(NumericError::out_of_domain("n", "non-negative", n));
    }

    let ds = digits(n);
    let width = ds.len();
    LexicographicPermutations::new(ds)
        .filter(|arrangement| width == 1 || arrangement[0] != 0)
        .map(|arrangement| from_digits(&arrangement))
        .collect()
}

/// Parses a string of decimal digits.
fn parse_digit_series(series: &str) -> NumericResult<Vec<u8>> {
    series
        .chars()
        .map(|c| {
            c.to_digit(10)
                .map(|d| d as u8)
                .ok_or_else(|| NumericError::out_of_domain("series", "decimal digits only", c))
        })
        .collect()
}

/// Returns the product of the digits of a decimal digit string.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `series` is empty or contains anything
///   but decimal digits.
/// - [`NumericError::Overflow`] if the product does not fit `u64`.
///
/// ```rust
/// # use euler_utils::digits::digit_series_product;
/// assert_eq!(digit_series_product("2224"), Ok(32));
/// assert_eq!(digit_series_product("2204"), Ok(0));
/// ```
pub fn digit_series_product(series: &str) -> NumericResult<u64> {
    let ds = parse_digit_series(series)?;
    if ds.is_empty() {
        return Err(NumericError::out_of_domain("series", "non-empty", "\"\""));
    }
    checked_product(ds.into_iter().map(u64::from), "digit product")
}

/// Returns the greatest product of `window` adjacent digits of `series`.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `window` is zero or longer than the
///   series, or the series contains anything but decimal digits.
/// - [`NumericError::Overflow`] if a product does not fit `u64`.
///
/// ```rust
/// # use euler_utils::digits::largest_adjacent_digit_product;
/// assert_eq!(largest_adjacent_digit_product("123456789", 3), Ok(504));
/// ```
pub fn largest_adjacent_digit_product(series: &str, window: usize) -> NumericResult<u64> {
    let ds = parse_digit_series(series)?;
    if window == 0 || window > ds.len() {
        return Err(NumericError::out_of_domain(
            "window",
            "between one and the series length",
            window,
        ));
    }

    let mut best = 0;
    for adjacent in ds.windows(window) {
        let product = checked_product(
            adjacent.iter().map(|&d| u64::from(d)),
            "digit product",
        )?;
        best = best.max(product);
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_signed_extremes() {
        assert_eq!(digits(i8::MIN), vec![1, 2, 8]);
        assert_eq!(digits(i8::MAX), vec![1, 2, 7]);
        assert_eq!(digits(u64::MAX).len(), 20);
    }

    #[test]
    fn test_from_digits() {
        assert_eq!(from_digits::<u32>(&[1, 2, 0, 3]), Ok(1203));
        assert_eq!(from_digits::<u32>(&[]), Ok(0));
        assert_eq!(from_digits::<u32>(&[0, 0, 7]), Ok(7));
        assert!(from_digits::<u8>(&[2, 5, 6]).unwrap_err().is_overflow());
        assert!(matches!(
            from_digits::<u8>(&[1, 10]),
            Err(NumericError::OutOfDomain { name: "digit", .. })
        ));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0u32), 1);
        assert_eq!(digit_count(9u32), 1);
        assert_eq!(digit_count(10u32), 2);
        assert_eq!(digit_count(-999i32), 3);
        assert_eq!(digit_count(u128::MAX), 39);
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0u32), 0);
        assert_eq!(digit_sum(9875u32), 29);
        assert_eq!(digit_sum(-9875i32), 29);
    }

    #[test]
    fn test_rotations() {
        assert_eq!(rotations(7u32), Ok(vec![7]));
        assert_eq!(rotations(101u32), Ok(vec![101, 11, 110]));
        assert_eq!(rotations(11u32), Ok(vec![11, 11]));
        assert!(rotations(-12i32).is_err());
    }

    #[test]
    fn test_rotation_overflow() {
        // 215 -> 152 -> 521, which does not fit u8.
        assert!(rotations(215u16).is_ok());
        assert!(rotations(215u8).unwrap_err().is_overflow());
    }

    #[test]
    fn test_is_digit_permutation() {
        assert!(is_digit_permutation(125874u32, 251748));
        assert!(!is_digit_permutation(1123u32, 1223));
        assert!(!is_digit_permutation(12u32, 120));
    }

    #[test]
    fn test_power_digit_sum_two_to_the_thousand() {
        assert_eq!(power_digits(2, 1000).len(), 302);
        assert_eq!(power_digit_sum(2, 1000), 1366);
    }

    #[test]
    fn test_power_digits_degenerate_bases() {
        assert_eq!(power_digits(0, 0), vec![1]);
        assert_eq!(power_digits(0, 5), vec![0]);
        assert_eq!(power_digits(1, 50), vec![1]);
        assert_eq!(power_digits(10, 3), vec![1, 0, 0, 0]);
    }

    #[test]
    fn test_digit_permutations() {
        assert_eq!(digit_permutations(0u32), Ok(vec![0]));
        assert_eq!(digit_permutations(7u32), Ok(vec![7]));
        assert_eq!(digit_permutations(112u32), Ok(vec![112, 121, 211]));
        assert_eq!(digit_permutations(1000u32), Ok(vec![1000]));
        assert_eq!(digit_permutations(1234u32).unwrap().len(), 24);
        assert!(digit_permutations(-12i32).is_err());
    }

    #[test]
    fn test_digit_permutations_overflow() {
        // 152 fits u8, 512 does not.
        assert!(digit_permutations(125u8).unwrap_err().is_overflow());
        assert_eq!(digit_permutations(125u16).unwrap().last(), Some(&521));
    }

    #[test]
    fn test_digit_series_product() {
        assert_eq!(digit_series_product("2224"), Ok(32));
        assert_eq!(digit_series_product("2204"), Ok(0));
        assert_eq!(digit_series_product("9989"), Ok(5832));
        assert_eq!(digit_series_product("0"), Ok(0));
        assert!(digit_series_product("").is_err());
        assert!(matches!(
            digit_series_product("12a4"),
            Err(NumericError::OutOfDomain { name: "series", .. })
        ));
        assert!(digit_series_product(&"9".repeat(21)).unwrap_err().is_overflow());
    }

    #[test]
    fn test_largest_adjacent_digit_product() {
        assert_eq!(largest_adjacent_digit_product("3675356291", 2), Ok(42));
        assert_eq!(largest_adjacent_digit_product("1029", 4), Ok(0));
        assert_eq!(largest_adjacent_digit_product("5", 1), Ok(5));
        assert!(largest_adjacent_digit_product("123", 0).is_err());
        assert!(largest_adjacent_digit_product("123", 4).is_err());
    }
}
