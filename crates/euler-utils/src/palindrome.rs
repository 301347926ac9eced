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

//! Numeric palindromes.
//!
//! A number is a palindrome when its decimal string reads the same in both
//! directions. The string includes the minus sign of a negative number, which
//! ends up trailing once reversed, so no negative number is a palindrome.

use euler_core::{
    error::{NumericError, NumericResult},
    num::{ops::OrOverflow, EulerNumeric},
};
use std::fmt::Display;

/// Returns `true` if the decimal representation of `n` equals its reverse.
///
/// ```rust
/// # use euler_utils::palindrome::is_palindrome;
/// assert!(is_palindrome(121));
/// assert!(!is_palindrome(123));
/// assert!(is_palindrome(7));
/// assert!(!is_palindrome(-121));
/// ```
pub fn is_palindrome<T>(n: T) -> bool
where
    T: Display,
{
    let forward = n.to_string();
    let reversed: String = forward.chars().rev().collect();
    forward == reversed
}

/// Returns the largest palindrome that is the product of two numbers with
/// exactly `digits` decimal digits, or zero if there is none.
///
/// Factors are walked downwards and each row stops as soon as its products
/// can no longer beat the best palindrome found.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] if `digits` is zero.
/// - [`NumericError::Overflow`] if the factors or their products do not fit `T`.
///
/// ```rust
/// # use euler_utils::palindrome::largest_palindrome_product;
/// assert_eq!(largest_palindrome_product::<u32>(2), Ok(9009));
/// ```
pub fn largest_palindrome_product<T>(digits: u32) -> NumericResult<T>
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

    let lowest = num_traits::checked_pow(T::TEN, digits as usize - 1)
        .or_overflow("smallest factor")?;
    let highest = lowest
        .checked_mul_val(T::TEN)
        .or_overflow("largest factor")?
        - T::one();

    let mut best = T::zero();
    let mut i = highest;
    while i >= lowest {
        if i.checked_mul_val(highest).or_overflow("palindrome product")? <= best {
            break;
        }
        let mut j = highest;
        while j >= i {
            let product = i.checked_mul_val(j).or_overflow("palindrome product")?;
            if product <= best {
                break;
            }
            if is_palindrome(product) {
                best = product;
            }
            j = j - T::one();
        }
        i = i - T::one();
    }
    Ok(best)
}
