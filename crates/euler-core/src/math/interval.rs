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

use crate::error::{NumericError, NumericResult};
use num_traits::PrimInt;
use std::iter::FusedIterator;

/// A closed interval `[start, end]` over a primitive integer type.
///
/// The puzzle utilities phrase their ranges inclusively ("every number from
/// 1 to 20"), so the interval keeps both bounds and iterates all the way to
/// `end`, including `T::max_value()`.
///
/// # Invariants
///
/// `start` is always less than or equal to `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosedInterval<T>
where
    T: PrimInt,
{
    start: T,
    end: T,
}

impl<T> ClosedInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::InvalidInterval`] if `start > end`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use euler_core::math::interval::ClosedInterval;
    /// let iv = ClosedInterval::new(2, 4).unwrap();
    /// assert_eq!(iv.iter().collect::<Vec<i32>>(), vec![2, 3, 4]);
    /// assert!(ClosedInterval::new(4, 2).is_err());
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> NumericResult<Self> {
        if start > end {
            return Err(NumericError::invalid_interval(start, end));
        }
        Ok(Self { start, end })
    }
}

impl<T> ClosedInterval<T>
where
    T: PrimInt,
{
    /// Returns the inclusive start bound.
    #[inline]
    pub fn start(&self) -> T {
        self.start
    }

    /// Returns the inclusive end bound.
    #[inline]
    pub fn end(&self) -> T {
        self.end
    }

    /// Returns `true` if `value` lies within the interval.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns an iterator over every integer of the interval in ascending order.
    #[inline]
    pub fn iter(&self) -> ClosedIntervalIterator<T> {
        ClosedIntervalIterator {
            front: self.start,
            back: self.end,
            exhausted: false,
        }
    }
}

impl<T> IntoIterator for ClosedInterval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the integer points of a [`ClosedInterval`].
#[derive(Debug, Clone)]
pub struct ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Iterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::one();
        }
        Some(value)
    }
}

impl<T> DoubleEndedIterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let value = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::one();
        }
        Some(value)
    }
}

impl<T> FusedIterator for ClosedIntervalIterator<T> where T: PrimInt {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_reversed_bounds() {
        assert_eq!(
            ClosedInterval::new(3, 2),
            Err(NumericError::invalid_interval(3, 2))
        );
    }

    #[test]
    fn test_single_point() {
        let iv = ClosedInterval::new(7u8, 7).unwrap();
        assert_eq!(iv.iter().collect::<Vec<_>>(), vec![7]);
        assert!(iv.contains(7));
        assert!(!iv.contains(8));
    }

    #[test]
    fn test_iterates_up_to_type_max() {
        let iv = ClosedInterval::new(253u8, u8::MAX).unwrap();
        assert_eq!(iv.iter().collect::<Vec<_>>(), vec![253, 254, 255]);
    }

    #[test]
    fn test_iterates_down_to_type_min() {
        let iv = ClosedInterval::new(i8::MIN, i8::MIN + 2).unwrap();
        assert_eq!(iv.iter().rev().collect::<Vec<_>>(), vec![-126, -127, -128]);
    }

    #[test]
    fn test_mixed_ends_meet_once() {
        let mut it = ClosedInterval::new(1, 4).unwrap().into_iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }
}
