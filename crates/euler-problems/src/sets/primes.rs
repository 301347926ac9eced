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

use euler_core::error::NumericResult;
use euler_utils::primes::{
    circular_primes_below, largest_prime_factor, nth_prime, sum_of_primes_below,
};

/// Problem 3: the largest prime factor of 600851475143.
pub(crate) fn largest_prime_factor_of_target() -> NumericResult<u64> {
    largest_prime_factor(600_851_475_143u64)
}

/// Problem 7: the 10001st prime.
pub(crate) fn ten_thousand_first_prime() -> NumericResult<u64> {
    nth_prime::<u64>(10_001)
}

/// Problem 10: the sum of all primes below two million.
pub(crate) fn summation_of_primes() -> NumericResult<u64> {
    sum_of_primes_below(2_000_000u64)
}

/// Problem 35: the number of circular primes below one million.
pub(crate) fn circular_primes() -> NumericResult<u64> {
    Ok(circular_primes_below(1_000_000u64)?.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prime_solvers() {
        assert_eq!(largest_prime_factor_of_target(), Ok(6857));
        assert_eq!(ten_thousand_first_prime(), Ok(104_743));
    }
}
