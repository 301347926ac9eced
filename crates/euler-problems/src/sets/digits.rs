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

use euler_core::error::{NumericError, NumericResult};
use euler_utils::{
    combinatorics::LexicographicPermutations,
    digits::{from_digits, power_digit_sum},
    palindrome::largest_palindrome_product,
};

/// Problem 4: the largest palindrome made from the product of two 3-digit
/// numbers.
pub(crate) fn largest_palindrome_product_3() -> NumericResult<u64> {
    largest_palindrome_product::<u64>(3)
}

/// Problem 16: the digit sum of 2^1000.
pub(crate) fn power_digit_sum_2_1000() -> NumericResult<u64> {
    Ok(power_digit_sum(2, 1_000))
}

const PERMUTATION_INDEX: usize = 999_999;

/// Problem 24: the millionth lexicographic permutation of the digits 0-9,
/// read as a number.
pub(crate) fn millionth_lexicographic_permutation() -> NumericResult<u64> {
    let permutation = LexicographicPermutations::new(0u8..10)
        .nth(PERMUTATION_INDEX)
        .ok_or_else(|| {
            NumericError::out_of_domain("index", "below 10!", PERMUTATION_INDEX)
        })?;
    from_digits(&permutation)
}
