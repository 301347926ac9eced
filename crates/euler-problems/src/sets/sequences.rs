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
    combinatorics::lattice_paths,
    divisors::divisor_count,
    fibonacci::sum_even_fibonacci_not_exceeding,
    multiples::sum_multiples_of_3_or_5_below,
    pythagorean::pythagorean_triplet_with_sum,
    series::{
        longest_collatz_below, recurring_cycle, sum_square_difference, TriangleNumbers,
    },
};

/// Problem 1: sum of the multiples of 3 or 5 below 1000.
pub(crate) fn multiples_of_3_or_5() -> NumericResult<u64> {
    sum_multiples_of_3_or_5_below(1_000u64)
}

/// Problem 2: sum of the even Fibonacci terms not exceeding four million.
pub(crate) fn even_fibonacci_numbers() -> NumericResult<u64> {
    sum_even_fibonacci_not_exceeding(4_000_000u64)
}

/// Problem 6: square of the sum minus the sum of the squares of 1..=100.
pub(crate) fn sum_square_difference_to_100() -> NumericResult<u64> {
    sum_square_difference(1u64, 100)
}

const TRIPLET_SUM: u64 = 1_000;

/// Problem 9: the product `abc` of the Pythagorean triplet with
/// `a + b + c = 1000`.
pub(crate) fn special_pythagorean_triplet() -> NumericResult<u64> {
    pythagorean_triplet_with_sum(TRIPLET_SUM)?
        .ok_or_else(|| {
            NumericError::out_of_domain("sum", "the perimeter of a triplet", TRIPLET_SUM)
        })?
        .product()
}

const DIVISOR_THRESHOLD: usize = 500;

/// Problem 12: the first triangle number with over five hundred divisors.
pub(crate) fn highly_divisible_triangle_number() -> NumericResult<u64> {
    for triangle in TriangleNumbers::<u64>::new() {
        if divisor_count(triangle)? > DIVISOR_THRESHOLD {
            return Ok(triangle);
        }
    }
    Err(NumericError::Overflow("triangle number"))
}

/// Problem 14: the start value below one million with the longest Collatz
/// trajectory.
pub(crate) fn longest_collatz_sequence() -> NumericResult<u64> {
    Ok(longest_collatz_below(1_000_000)?.map_or(0, |record| record.start))
}

/// Problem 15: monotone paths through a 20 by 20 grid.
pub(crate) fn lattice_paths_20() -> NumericResult<u64> {
    lattice_paths(20u64, 20)
}

/// Problem 26: the `d < 1000` whose unit fraction `1/d` has the longest
/// recurring cycle. Ties keep the smaller `d`.
pub(crate) fn reciprocal_cycles() -> NumericResult<u64> {
    let mut best = (0, 0);
    for d in 2..1_000u64 {
        let length = recurring_cycle(1, d)?.len();
        if length > best.1 {
            best = (d, length);
        }
    }
    Ok(best.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_solvers() {
        assert_eq!(multiples_of_3_or_5(), Ok(233_168));
        assert_eq!(even_fibonacci_numbers(), Ok(4_613_732));
        assert_eq!(sum_square_difference_to_100(), Ok(25_164_150));
        assert_eq!(lattice_paths_20(), Ok(137_846_528_820));
        assert_eq!(special_pythagorean_triplet(), Ok(31_875_000));
        assert_eq!(reciprocal_cycles(), Ok(983));
    }

    #[test]
    fn test_highly_divisible_triangle_number() {
        assert_eq!(highly_divisible_triangle_number(), Ok(76_576_500));
    }
}
