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

use num_traits::PrimInt;

/// Returns the integer square root of `n`: the largest `r` with `r * r <= n`.
///
/// Non-positive inputs yield zero. The search never squares a candidate, so
/// it is exact for every value of every primitive integer type.
///
/// # Examples
///
/// ```rust
/// # use euler_core::math::root::isqrt;
/// assert_eq!(isqrt(0u32), 0);
/// assert_eq!(isqrt(15u32), 3);
/// assert_eq!(isqrt(16u32), 4);
/// assert_eq!(isqrt(u64::MAX), 4_294_967_295);
/// ```
#[inline]
pub fn isqrt<T>(n: T) -> T
where
    T: PrimInt,
{
    if n <= T::one() {
        return n.max(T::zero());
    }

    // Invariant: lo * lo <= n < hi * hi.
    let mut lo = T::one();
    let mut hi = (n >> 1usize) + T::one();

    while hi - lo > T::one() {
        let mid = lo + ((hi - lo) >> 1usize);
        if mid <= n / mid {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Returns `true` if `n` is a perfect square.
#[inline]
pub fn is_perfect_square<T>(n: T) -> bool
where
    T: PrimInt,
{
    if n < T::zero() {
        return false;
    }
    let r = isqrt(n);
    r * r == n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isqrt_small_values() {
        let expected = [0u32, 1, 1, 1, 2, 2, 2, 2, 2, 3, 3];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(isqrt(n as u32), *want, "isqrt({n})");
        }
    }

    #[test]
    fn test_isqrt_negative_is_zero() {
        assert_eq!(isqrt(-1i32), 0);
        assert_eq!(isqrt(i64::MIN), 0);
    }

    #[test]
    fn test_isqrt_type_extremes() {
        assert_eq!(isqrt(u8::MAX), 15);
        assert_eq!(isqrt(i32::MAX), 46_340);
        assert_eq!(isqrt(u64::MAX), 4_294_967_295);
        assert_eq!(isqrt(u128::MAX), u64::MAX as u128);
    }

    #[test]
    fn test_isqrt_large_composite() {
        // 600851475143 = 71 * 839 * 1471 * 6857
        assert_eq!(isqrt(600_851_475_143u64), 775_146);
    }

    #[test]
    fn test_is_perfect_square() {
        assert!(is_perfect_square(0u8));
        assert!(is_perfect_square(144u16));
        assert!(!is_perfect_square(145u16));
        assert!(!is_perfect_square(-4i32));
    }

    proptest::proptest! {
        #[test]
        fn test_isqrt_brackets_input(n in proptest::prelude::any::<u64>()) {
            let r = isqrt(n) as u128;
            let n = n as u128;
            proptest::prop_assert!(r * r <= n);
            proptest::prop_assert!((r + 1) * (r + 1) > n);
        }
    }
}
