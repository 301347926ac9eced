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

use euler_core::{
    error::NumericResult,
    math::gcd::lcm_of_range,
    num::ops::checked_sum,
};
use euler_utils::divisors::{
    abundant_numbers_below, amicable_numbers_below, longest_amicable_chain,
};

/// Problem 5: the smallest number evenly divisible by each of 1..=20.
pub(crate) fn smallest_multiple() -> NumericResult<u64> {
    lcm_of_range(1u64, 20)
}

/// Problem 21: the sum of the amicable numbers below 10000.
pub(crate) fn amicable_numbers() -> NumericResult<u64> {
    checked_sum(amicable_numbers_below(10_000u64)?, "sum of amicable numbers")
}

/// Every integer above this bound is a sum of two abundant numbers.
const NON_ABUNDANT_BOUND: usize = 28_123;

/// Problem 23: the sum of the positive integers that are not the sum of two
/// abundant numbers.
pub(crate) fn non_abundant_sums() -> NumericResult<u64> {
    let abundant = abundant_numbers_below(NON_ABUNDANT_BOUND + 1)?;
    let mut expressible = vec![false; NON_ABUNDANT_BOUND + 1];

    for (i, &a) in abundant.iter().enumerate() {
        for &b in &abundant[i..] {
            let sum = a + b;
            if sum > NON_ABUNDANT_BOUND {
                break;
            }
            expressible[sum] = true;
        }
    }

    checked_sum(
        expressible
            .iter()
            .enumerate()
            .filter(|&(_, &is_sum)| !is_sum)
            .map(|(n, _)| n as u64),
        "sum of non-abundant sums",
    )
}

/// Problem 95: the smallest member of the longest amicable chain with no
/// element exceeding one million.
pub(crate) fn longest_amicable_chain_member() -> NumericResult<u64> {
    Ok(longest_amicable_chain(1_000_000)
        .and_then(|chain| chain.smallest())
        .map_or(0, |smallest| smallest as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_divisor_solvers() {
        assert_eq!(smallest_multiple(), Ok(232_792_560));
        assert_eq!(amicable_numbers(), Ok(31_626));
    }

    #[test]
    fn test_non_abundant_sums() {
        assert_eq!(non_abundant_sums(), Ok(4_179_871));
    }
}
