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

//! # Euler Problems
//!
//! A registry of numbered integer puzzles, each solved with `euler-utils` and
//! paired with its known answer so that every solution can be verified.
//!
//! ## Modules
//!
//! - `error`: `ProblemError`, raised for unknown ids and failed computations.
//! - `problem`: The `Problem` entry and the timed `Solution` it produces.
//! - `registry`: Lookup and execution of registered problems by id.
//!
//! ## Usage
//!
//! ```rust
//! use euler_problems::registry;
//!
//! let solution = registry::solve(1).unwrap();
//! assert_eq!(solution.answer(), 233_168);
//! assert!(solution.is_correct());
//! ```

pub mod error;
pub mod problem;
pub mod registry;
mod sets;
