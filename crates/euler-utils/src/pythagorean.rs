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

//! Pythagorean triplets: `a < b < c` with `a^2 + b^2 = c^2`.

use euler_core::{
    error::{NumericError, NumericResult},
    num::{ops::OrOverflow, EulerNumeric},
};

/// Returns `true` if `a^2 + b^2 == c^2`.
///
/// # Errors
///
/// - [`NumericError::OutOfDomain`] unless `0 < a <= b <= c`.
/// - [`NumericError::Overflow`] if a square or `a^2 + b^2` does not fit `T`.
///
/// ```rust
/// # use euler_utils::pythagorean::is_pythagorean_triplet;
/// assert_eq!(is_pythagorean_triplet(3u32, 4, 5), Ok(true));
/// assert_eq!(is_pythagorean_triplet(3u32, 4, 6), Ok(false));
/// assert!(is_pythagorean_triplet(4u32, 3, 5).is_err());
/// ```
pub fn is_pythagorean_triplet<T>(a: T, b: T, c: T) -> NumericResult<bool>
where
    T: EulerNumeric,
{
    if a <= T::zero() {
        return Err(NumericError::out_of_domain("a", "positive", a));
    }
    if a > b {
        return Err(NumericError::out_of_domain("a", "at most b", a));
    }
    if b > c {
        return Err(NumericError::out_of_domain("b", "at most c", b));
    }

    let square = |v: T| v.checked_mul_val(v).or_overflow("triplet square");
    let legs = square(a)?
        .checked_add_val(square(b)?)
        .or_overflow("sum of squared legs")?;
    Ok(legs == square(c)?)
}

/// A Pythagorean triplet with `a < b < c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PythagoreanTriplet<T> {
    pub a: T,
    pub b: T,
    pub c: T,
}

impl<T> PythagoreanTriplet<T>
where
    T: EulerNumeric,
{
    /// Returns `a + b + c`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Overflow`] if the sum does not fit `T`.
    pub fn sum(&self) -> NumericResult<T> {
        self.a
            .checked_add_val(self.b)
            .and_then(|v| v.checked_add_val(self.c))
            .or_overflow("triplet sum")
    }

    /// Returns `a * b * c`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::Overflow`] if the product does not fit `T`.
    pub fn product(&self) -> NumericResult<T> {
        self.a
            .checked_mul_val(self.b)
            .and_then(|v| v.checked_mul_val(self.c))
            .or_overflow("triplet product")
    }
}

/// Returns the Pythagorean triplet with the smallest `a` whose members add up
/// to `sum`, or `None` if there is none. Non-positive sums have none.
///
/// # Errors
///
/// Returns [`NumericError::Overflow`] if a square does not fit `T`.
///
/// ```rust
/// # use euler_utils::pythagorean::pythagorean_triplet_with_sum;
/// let triplet = pythagorean_triplet_with_sum(12u32).unwrap().unwrap();
/// assert_eq!((triplet.a, triplet.b, triplet.c), (3, 4, 5));
/// assert_eq!(pythagorean_triplet_with_sum(10u32), Ok(None));
/// ```
pub fn pythagorean_triplet_with_sum<T>(sum: T) -> NumericResult<Option<PythagoreanTriplet<T>>>
where
    T: EulerNumeric,
{
    if sum <= T::zero() {
        return Ok(None);
    }

    // a < b < c bounds a below sum / 3.
    let mut a = T::one();
    while a < sum / T::THREE {
        let mut b = a + T::one();
        while b < sum - a - b {
            let c = sum - a - b;
            if is_pythagorean_triplet(a, b, c)? {
                return Ok(Some(PythagoreanTriplet { a, b, c }));
            }
            b = b + T::one();
        }
        a = a + T::one();
    }
    Ok(None)
}
