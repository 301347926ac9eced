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

//! # Checked Arithmetic
//!
//! By-value checked arithmetic traits for integer primitives, plus the folds
//! the puzzle utilities accumulate through. The traits mirror the intrinsic
//! `checked_*` methods but, unlike `num_traits::CheckedAdd` and friends, take
//! their operands by value, which reads naturally in generic loops.
//!
//! ```rust
//! use euler_core::num::ops::{checked_sum, CheckedAddVal};
//!
//! assert_eq!(200u8.checked_add_val(50), Some(250));
//! assert!(checked_sum([200u8, 100], "byte total").is_err());
//! ```

use crate::error::{NumericError, NumericResult};
use core::ops::{Add, Mul, Sub};

/// A trait for types that support checked addition by value.
///
/// # Examples
///
/// ```rust
/// # use euler_core::num::ops::CheckedAddVal;
/// let a: u8 = 200;
/// assert_eq!(a.checked_add_val(100), None);
/// assert_eq!(a.checked_add_val(50), Some(250));
/// ```
pub trait CheckedAddVal: Sized + Add<Self, Output = Self> {
    /// Performs checked addition by value, returning `None` if overflow occurs.
    fn checked_add_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked subtraction by value.
///
/// # Examples
///
/// ```rust
/// # use euler_core::num::ops::CheckedSubVal;
/// let a: u8 = 50;
/// assert_eq!(a.checked_sub_val(100), None);
/// assert_eq!(a.checked_sub_val(20), Some(30));
/// ```
pub trait CheckedSubVal: Sized + Sub<Self, Output = Self> {
    /// Performs checked subtraction by value, returning `None` if underflow occurs.
    fn checked_sub_val(self, v: Self) -> Option<Self>;
}

/// A trait for types that support checked multiplication by value.
///
/// # Examples
///
/// ```rust
/// # use euler_core::num::ops::CheckedMulVal;
/// let a: u8 = 20;
/// assert_eq!(a.checked_mul_val(10), Some(200));
/// assert_eq!(a.checked_mul_val(20), None);
/// ```
pub trait CheckedMulVal: Sized + Mul<Self, Output = Self> {
    /// Performs checked multiplication by value, returning `None` if overflow occurs.
    fn checked_mul_val(self, v: Self) -> Option<Self>;
}

macro_rules! checked_impl_val {
    ($($t:ty),+ $(,)?) => {
        $(
            impl CheckedAddVal for $t {
                #[inline(always)]
                fn checked_add_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_add(self, v)
                }
            }

            impl CheckedSubVal for $t {
                #[inline(always)]
                fn checked_sub_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_sub(self, v)
                }
            }

            impl CheckedMulVal for $t {
                #[inline(always)]
                fn checked_mul_val(self, v: $t) -> Option<$t> {
                    <$t>::checked_mul(self, v)
                }
            }
        )+
    };
}

checked_impl_val!(u8, u16, u32, u64, usize, u128);
checked_impl_val!(i8, i16, i32, i64, isize, i128);

/// Converts the `None` of a checked operation into [`NumericError::Overflow`].
pub trait OrOverflow<T> {
    /// Returns the contained value, or an overflow error naming `what`.
    fn or_overflow(self, what: &'static str) -> NumericResult<T>;
}

impl<T> OrOverflow<T> for Option<T> {
    #[inline]
    fn or_overflow(self, what: &'static str) -> NumericResult<T> {
        self.ok_or(NumericError::Overflow(what))
    }
}

/// Sums `values` with checked addition.
///
/// Returns zero for an empty input and [`NumericError::Overflow`] naming
/// `what` as soon as a partial sum leaves the range of `T`.
pub fn checked_sum<T, I>(values: I, what: &'static str) -> NumericResult<T>
where
    T: CheckedAddVal + num_traits::Zero,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .try_fold(T::zero(), |acc, v| acc.checked_add_val(v).or_overflow(what))
}

/// Multiplies `values` with checked multiplication.
///
/// Returns one for an empty input.
pub fn checked_product<T, I>(values: I, what: &'static str) -> NumericResult<T>
where
    T: CheckedMulVal + num_traits::One,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .try_fold(T::one(), |acc, v| acc.checked_mul_val(v).or_overflow(what))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_add_val_bounds() {
        assert_eq!(i8::MAX.checked_add_val(1), None);
        assert_eq!(i8::MIN.checked_add_val(-1), None);
        assert_eq!(120i8.checked_add_val(7), Some(127));
        assert_eq!(u128::MAX.checked_add_val(0), Some(u128::MAX));
    }

    #[test]
    fn test_checked_sub_val_bounds() {
        assert_eq!(0u32.checked_sub_val(1), None);
        assert_eq!(0i32.checked_sub_val(1), Some(-1));
    }

    #[test]
    fn test_checked_mul_val_bounds() {
        assert_eq!(16u8.checked_mul_val(16), None);
        assert_eq!(15u8.checked_mul_val(17), Some(255));
        assert_eq!((-128i8).checked_mul_val(-1), None);
    }

    #[test]
    fn test_checked_sum_empty_is_zero() {
        let empty: Vec<u64> = Vec::new();
        assert_eq!(checked_sum(empty, "empty"), Ok(0));
    }

    #[test]
    fn test_checked_sum_overflow_names_operation() {
        let result = checked_sum([100u8, 100, 100], "byte total");
        assert_eq!(result, Err(NumericError::Overflow("byte total")));
    }

    #[test]
    fn test_checked_product() {
        assert_eq!(checked_product([2u32, 3, 7], "product"), Ok(42));
        assert_eq!(checked_product(Vec::<u32>::new(), "product"), Ok(1));
        assert!(checked_product([16u8, 16], "product").is_err());
    }

    #[test]
    fn test_or_overflow() {
        assert_eq!(Some(3).or_overflow("x"), Ok(3));
        assert_eq!(None::<u8>.or_overflow("x"), Err(NumericError::Overflow("x")));
    }
}
