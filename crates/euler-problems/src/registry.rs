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

//! # Problem Registry
//!
//! The registered problems, sorted by id, and the functions that look them
//! up and run them. Every run is timed and compared against the known answer.

use crate::{
    error::{ProblemError, ProblemResult},
    problem::{Problem, Solution},
    sets::{digits, divisors, primes, sequences},
};
use std::time::Instant;
use tracing::{debug, info, warn};

static PROBLEMS: &[Problem] = &[
    Problem::new(
        1,
        "Multiples of 3 or 5",
        233_168,
        sequences::multiples_of_3_or_5,
    ),
    Problem::new(
        2,
        "Even Fibonacci numbers",
        4_613_732,
        sequences::even_fibonacci_numbers,
    ),
    Problem::new(
        3,
        "Largest prime factor",
        6_857,
        primes::largest_prime_factor_of_target,
    ),
    Problem::new(
        4,
        "Largest palindrome product",
        906_609,
        digits::largest_palindrome_product_3,
    ),
    Problem::new(5, "Smallest multiple", 232_792_560, divisors::smallest_multiple),
    Problem::new(
        6,
        "Sum square difference",
        25_164_150,
        sequences::sum_square_difference_to_100,
    ),
    Problem::new(7, "10001st prime", 104_743, primes::ten_thousand_first_prime),
    Problem::new(
        9,
        "Special Pythagorean triplet",
        31_875_000,
        sequences::special_pythagorean_triplet,
    ),
    Problem::new(
        10,
        "Summation of primes",
        142_913_828_922,
        primes::summation_of_primes,
    ),
    Problem::new(
        12,
        "Highly divisible triangular number",
        76_576_500,
        sequences::highly_divisible_triangle_number,
    ),
    Problem::new(
        14,
        "Longest Collatz sequence",
        837_799,
        sequences::longest_collatz_sequence,
    ),
    Problem::new(
        15,
        "Lattice paths",
        137_846_528_820,
        sequences::lattice_paths_20,
    ),
    Problem::new(16, "Power digit sum", 1_366, digits::power_digit_sum_2_1000),
    Problem::new(21, "Amicable numbers", 31_626, divisors::amicable_numbers),
    Problem::new(
        23,
        "Non-abundant sums",
        4_179_871,
        divisors::non_abundant_sums,
    ),
    Problem::new(
        24,
        "Lexicographic permutations",
        2_783_915_460,
        digits::millionth_lexicographic_permutation,
    ),
    Problem::new(26, "Reciprocal cycles", 983, sequences::reciprocal_cycles),
    Problem::new(35, "Circular primes", 55, primes::circular_primes),
    Problem::new(
        95,
        "Amicable chains",
        14_316,
        divisors::longest_amicable_chain_member,
    ),
];

/// Returns every registered problem, sorted by id.
#[inline]
pub fn registry() -> &'static [Problem] {
    PROBLEMS
}

/// Returns the problem registered under `id`, if any.
pub fn find(id: u32) -> Option<&'static Problem> {
    PROBLEMS
        .binary_search_by_key(&id, |problem| problem.id())
        .ok()
        .map(|index| &PROBLEMS[index])
}

/// Runs `problem`'s solver and times it.
///
/// A wrong answer is not an error: it is reported through
/// [`Solution::is_correct`] and logged as a warning.
///
/// # Errors
///
/// Returns [`ProblemError::Numeric`] if the solver fails.
pub fn run(problem: &Problem) -> ProblemResult<Solution> {
    debug!(id = problem.id(), title = problem.title(), "Solving problem");

    let started = Instant::now();
    let answer = problem.compute().map_err(|source| ProblemError::Numeric {
        id: problem.id(),
        source,
    })?;
    let solution = Solution::new(problem.id(), answer, problem.answer(), started.elapsed());

    if solution.is_correct() {
        info!(
            id = solution.id(),
            answer = solution.answer(),
            elapsed = ?solution.elapsed(),
            "Solved problem"
        );
    } else {
        warn!(
            id = solution.id(),
            answer = solution.answer(),
            expected = solution.expected(),
            "Computed answer does not match the known answer"
        );
    }
    Ok(solution)
}

/// Looks up and runs the problem registered under `id`.
///
/// # Errors
///
/// - [`ProblemError::UnknownProblem`] if no problem has that id.
/// - [`ProblemError::Numeric`] if the solver fails.
pub fn solve(id: u32) -> ProblemResult<Solution> {
    let problem = find(id).ok_or(ProblemError::UnknownProblem(id))?;
    run(problem)
}

/// Runs every registered problem in id order, stopping at the first solver
/// that fails.
///
/// # Errors
///
/// Returns the first [`ProblemError::Numeric`] raised.
pub fn solve_all() -> ProblemResult<Vec<Solution>> {
    PROBLEMS.iter().map(run).collect()
}
