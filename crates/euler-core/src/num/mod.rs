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

//! # Numeric Foundations
//!
//! Traits and utilities for integer-generic puzzle code. This module
//! consolidates compile-time constants, by-value checked arithmetic and the
//! `EulerNumeric` trait alias that every utility in the toolkit is bounded by.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`Two`, `Three`, `Five`, `Six`,
//!   `Ten`) implemented for all core integer types, so generic code can name
//!   the small literals it divides by without fallible casts.
//! - `ops`: Checked arithmetic traits (by value) for addition, subtraction and
//!   multiplication, plus `checked_sum` / `checked_product` folds and the
//!   `OrOverflow` adapter that turns `Option<T>` into a `NumericResult<T>`.
//!
//! ## Motivation
//!
//! Puzzle answers grow quickly (sums of multiples, Fibonacci terms, products
//! of factors). Funnelling every accumulation through checked operations keeps
//! an overflow visible as an error instead of a wrong answer.

pub mod constants;
pub mod ops;

use constants::{Five, Six, Ten, Three, Two};
use num_traits::{FromPrimitive, PrimInt};
use ops::{CheckedAddVal, CheckedMulVal, CheckedSubVal};
use std::hash::Hash;

/// A trait alias for the integer types the puzzle utilities operate on.
///
/// Covers every primitive integer, signed or unsigned, from `i8`/`u8` up to
/// `i128`/`u128`. Signedness matters for a few utilities: non-positive limits
/// are treated as empty ranges, and negative values are rejected where a
/// positive domain is documented.
pub trait EulerNumeric:
    PrimInt
    + FromPrimitive
    + std::fmt::Debug
    + std::fmt::Display
    + Hash
    + Two
    + Three
    + Five
    + Six
    + Ten
    + CheckedAddVal
    + CheckedSubVal
    + CheckedMulVal
{
}

impl<T> EulerNumeric for T where
    T: PrimInt
        + FromPrimitive
        + std::fmt::Debug
        + std::fmt::Display
        + Hash
        + Two
        + Three
        + Five
        + Six
        + Ten
        + CheckedAddVal
        + CheckedSubVal
        + CheckedMulVal
{
}
