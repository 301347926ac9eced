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

//! Error types for the problem registry

use euler_core::error::NumericError;
use thiserror::Error;

/// Result type for registry operations
pub type ProblemResult<T> = Result<T, ProblemError>;

/// Problem registry error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProblemError {
    /// No problem is registered under the id
    #[error("Unknown problem: {0}")]
    UnknownProblem(u32),

    /// The solver hit a numeric error
    #[error("Problem {id} failed: {source}")]
    Numeric {
        id: u32,
        #[source]
        source: NumericError,
    },
}

impl ProblemError {
    /// Returns the id of the problem the error refers to.
    pub fn problem_id(&self) -> u32 {
        match self {
            Self::UnknownProblem(id) | Self::Numeric { id, .. } => *id,
        }
    }
}
