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

//! # Fibonacci Sequences
//!
//! The puzzle variant of the Fibonacci sequence starts from the seeds 1 and 2
//! (1, 2, 3, 5, 8, 13, ...). Two views are offered:
//!
//! - [`fibonacci_until`] materializes the sequence up to a bound. Values are
//!   appended while the last term is still within the bound, so the returned
//!   sequence ends with the first term that exceeds it.
//! - [`Fibonacci`] is a lazy iterator with configurable seeds that fuses
//!   instead of overflowing. Combine it with `take_while` when only the terms
//!   not exceeding a bound are wanted.
//!
//! ```rust
//! use euler_utils::fibonacci::{fibonacci_until, Fibonacci};
//!
//! assert_eq!(fibonacci_until(10u32), Ok(vec![1, 2, 3, 5, 8, 13]));
//! let bounded: Vec<u32> = Fibonacci::<u32>::new().take_while(|&v| v <= 10).collect();
//! assert_eq!(bounded, vec![1, 2, 3, 5, 8]);
//! ```

use euler_core::{
    error::NumericResult,
    num::{
        ops::{checked_sum, OrOverflow},
        EulerNumeric,
    },
};
use std::iter::FusedIterator;

/// Returns the Fibonacci sequence seeded with `[1, 2]`, extended while its
/// last term does not exceed `limit`.
///
/// The seeds are always returned, whatever the limit. The final element is
/// the first term greater than `limit`.
///
/// This differs from a check-before-append loop, which would stop at
/// `[1, 2, 3, 5, 8]` for a limit of 10: the overshooting term is kept.
///
/// # Errors
///
/// Returns [`euler_core::error::NumericError::Overflow`] if the terminating
/// term does not fit `T`.
///
/// # Examples
///
/// ```rust
/// # use euler_utils::fibonacci::fibonacci_until;
/// assert_eq!(fibonacci_until(1u8), Ok(vec![1, 2]));
/// assert_eq!(fibonacci_until(2u8), Ok(vec![1, 2, 3]));
/// assert!(fibonacci_until(u8::MAX).is_err());
/// ```
pub fn fibonacci_until<T>(limit: T) -> NumericResult<Vec<T>>
where
    T: EulerNumeric,
{
    let mut sequence = vec![T::one(), T::TWO];
    let mut previous = T::one();
    let mut last = T::TWO;

    while last <= limit {
        let next = previous.checked_add_val(last).or_overflow("fibonacci term")?;
        sequence.push(next);
        previous = last;
        last = next;
    }
    Ok(sequence)
}

/// Returns the sum of the even-valued terms of the 1, 2, 3, 5, ... sequence
/// that do not exceed `limit`.
///
/// # Examples
///
/// ```rust
/// # use euler_utils::fibonacci::sum_even_fibonacci_not_exceeding;
/// assert_eq!(sum_even_fibonacci_not_exceeding(100u32), Ok(2 + 8 + 34));
/// ```
pub fn sum_even_fibonacci_not_exceeding<T>(limit: T) -> NumericResult<T>
where
    T: EulerNumeric,
{
    checked_sum(
        Fibonacci::<T>::new()
            .take_while(|&v| v <= limit)
            .filter(|&v| (v % T::TWO).is_zero()),
        "sum of even fibonacci terms",
    )
}

/// A lazy Fibonacci iterator.
///
/// Yields the seeds and then the sum of the two preceding terms. Iteration
/// ends (and stays ended) at the last term that fits `T`.
#[derive(Debug, Clone)]
pub struct Fibonacci<T> {
    current: Option<T>,
    next: Option<T>,
}

impl<T> Fibonacci<T>
where
    T: EulerNumeric,
{
    /// Creates the puzzle sequence seeded with 1 and 2.
    #[inline]
    pub fn new() -> Self {
        Self::with_seeds(T::one(), T::TWO)
    }

    /// Creates a sequence starting with `first, second, first + second, ...`.
    ///
    /// ```rust
    /// # use euler_utils::fibonacci::Fibonacci;
    /// let classic: Vec<u8> = Fibonacci::with_seeds(0, 1).take(8).collect();
    /// assert_eq!(classic, vec![0, 1, 1, 2, 3, 5, 8, 13]);
    /// ```
    #[inline]
    pub fn with_seeds(first: T, second: T) -> Self {
        Self {
            current: Some(first),
            next: Some(second),
        }
    }
}

impl<T> Default for Fibonacci<T>
where
    T: EulerNumeric,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Iterator for Fibonacci<T>
where
    T: EulerNumeric,
{
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current?;
        self.current = self.next;
        self.next = self.next.and_then(|n| value.checked_add_val(n));
        Some(value)
    }
}

impl<T> FusedIterator for Fibonacci<T> where T: EulerNumeric {}
