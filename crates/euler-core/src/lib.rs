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

//! # Euler Core
//!
//! Numeric foundations for the euler puzzle toolkit. This crate gathers the
//! integer-generic building blocks that the puzzle utilities are written
//! against, so each utility can stay generic over primitive integers without
//! repeating per-type code or silently wrapping on overflow.
//!
//! ## Modules
//!
//! - `num`: The `EulerNumeric` trait alias, small associated constants
//!   (`Two`, `Three`, `Five`, `Ten`, ...) and by-value checked arithmetic
//!   traits (`CheckedAddVal`, `CheckedSubVal`, `CheckedMulVal`) plus checked
//!   folding helpers.
//! - `math`: Integer square root, greatest common divisor, least common
//!   multiple (also over a whole range) and the validated `ClosedInterval`.
//! - `error`: `NumericError`, the shared error type for overflow and
//!   out-of-domain arguments.
//!
//! Refer to each module for detailed APIs and examples.

pub mod error;
pub mod math;
pub mod num;
