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
use std::time::Duration;

/// Signature of a problem solver.
pub type SolverFn = fn() -> NumericResult<u64>;

/// A registered puzzle: its number, a short title, the known answer and the
/// function computing it.
#[derive(Clone, Copy)]
pub struct Problem {
    id: u32,
    title: &'static str,
    answer: u64,
    solver: SolverFn,
}

impl Problem {
    /// Creates a new registry entry.
    #[inline]
    pub const fn new(id: u32, title: &'static str, answer: u64, solver: SolverFn) -> Self {
        Self {
            id,
            title,
            answer,
            solver,
        }
    }

    /// Returns the problem number.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the short title.
    #[inline]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Returns the known answer.
    #[inline]
    pub fn answer(&self) -> u64 {
        self.answer
    }

    /// Runs the solver without timing it.
    #[inline]
    pub fn compute(&self) -> NumericResult<u64> {
        (self.solver)()
    }
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("answer", &self.answer)
            .finish_non_exhaustive()
    }
}

impl std::fmt::Display for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>4}  {}", self.id, self.title)
    }
}

/// The outcome of running a problem's solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    id: u32,
    answer: u64,
    expected: u64,
    elapsed: Duration,
}

impl Solution {
    #[inline]
    pub(crate) fn new(id: u32, answer: u64, expected: u64, elapsed: Duration) -> Self {
        Self {
            id,
            answer,
            expected,
            elapsed,
        }
    }

    /// Returns the problem number.
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the computed answer.
    #[inline]
    pub fn answer(&self) -> u64 {
        self.answer
    }

    /// Returns the known answer the computation is checked against.
    #[inline]
    pub fn expected(&self) -> u64 {
        self.expected
    }

    /// Returns the wall-clock time the solver took.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns `true` if the computed answer matches the known answer.
    #[inline]
    pub fn is_correct(&self) -> bool {
        self.answer == self.expected
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.is_correct() { "ok" } else { "WRONG" };
        write!(
            f,
            "{:>4}  {:<16} {:<5} ({:.3?})",
            self.id, self.answer, status, self.elapsed
        )
    }
}
