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

//! # Euler Utils
//!
//! Small, independent integer puzzle solvers. Every function is a pure
//! computation generic over primitive integers (`EulerNumeric`), with overflow
//! and out-of-domain arguments reported through `NumericError` rather than
//! wrapped or silently accepted.
//!
//! ## Modules
//!
//! - `multiples`: Multiples of a divisor set below a limit, and their sum
//!   (the classic "multiples of 3 or 5").
//! - `fibonacci`: The 1, 2, 3, 5, ... sequence up to a bound, a seeded
//!   `Fibonacci` iterator and the even-term sum.
//! - `primes`: Largest prime factor, primality, sieving, n-th prime, factor
//!   lists and circular primes.
//! - `palindrome`: Decimal-string palindrome check and the largest palindrome
//!   product of two n-digit numbers.
//! - `divisors`: Divisor enumeration, sums, counts, perfect/abundant
//!   classification, amicable pairs and chains, range divisibility.
//! - `series`: Interval sums of squares, Collatz trajectories, triangle
//!   numbers, recurring decimal cycles and prime-generating quadratics.
//! - `digits`: Decimal digit extraction, rotations, digit permutations,
//!   digit-string products and digit sums of large powers.
//! - `combinatorics`: Checked factorials, permutations and combinations,
//!   lexicographic permutation enumeration and pairwise sums.
//! - `pythagorean`: Pythagorean triplet check and the triplet with a given
//!   sum.
//!
//! ## Usage
//!
//! ```rust
//! use euler_utils::{fibonacci, multiples, palindrome, primes};
//!
//! assert_eq!(multiples::sum_multiples_of_3_or_5_below(1000u64), Ok(233_168));
//! assert_eq!(fibonacci::fibonacci_until(10u32), Ok(vec![1, 2, 3, 5, 8, 13]));
//! assert_eq!(primes::largest_prime_factor(600_851_475_143u64), Ok(6857));
//! assert!(palindrome::is_palindrome(9009));
//! ```

pub mod combinatorics;
pub mod digits;
pub mod divisors;
pub mod fibonacci;
pub mod multiples;
pub mod palindrome;
pub mod primes;
pub mod pythagorean;
pub mod series;
