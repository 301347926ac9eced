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

//! # Numeric Errors
//!
//! The error type shared by every fallible puzzle utility. Values that caused
//! the failure are carried as rendered strings so the error stays independent
//! of the integer type the computation ran on.

use thiserror::Error;

/// Result alias for fallible numeric computations.
pub type NumericResult<T> = Result<T, NumericError>;

/// Errors raised by the numeric utilities.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumericError {
    /// An intermediate or final value does not fit the integer type.
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),

    /// An argument lies outside the documented domain of the function.
    #[error("Argument `{name}` must be {expected}, got {value}")]
    OutOfDomain {
        name: &'static str,
        expected: &'static str,
        value: String,
    },

    /// An inclusive interval whose start lies after its end.
    #[error("Interval start must not be greater than interval end ({start} > {end})")]
    InvalidInterval { start: String, end: String },
}

impl NumericError {
    /// Creates an [`NumericError::OutOfDomain`] for the given argument.
    pub fn out_of_domain<V: std::fmt::Display>(
        name: &'static str,
        expected: &'static str,
        value: V,
    ) -> Self {
        Self::OutOfDomain {
            name,
            expected,
            value: value.to_string(),
        }
    }

    /// Creates an [`NumericError::InvalidInterval`] from its bounds.
    pub fn invalid_interval<V: std::fmt::Display>(start: V, end: V) -> Self {
        Self::InvalidInterval {
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Returns `true` if this error reports an overflow.
    #[inline]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_domain_message() {
        let err = NumericError::out_of_domain("n", "greater than zero", -4);
        assert_eq!(
            err.to_string(),
            "Argument `n` must be greater than zero, got -4"
        );
        assert!(!err.is_overflow());
    }

    #[test]
    fn test_invalid_interval_message() {
        let err = NumericError::invalid_interval(3, 2);
        assert_eq!(
            err.to_string(),
            "Interval start must not be greater than interval end (3 > 2)"
        );
    }

    #[test]
    fn test_overflow_message() {
        let err = NumericError::Overflow("fibonacci term");
        assert!(err.is_overflow());
        assert_eq!(
            err.to_string(),
            "Arithmetic overflow while computing fibonacci term"
        );
    }
}
