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

/// A trait for integer types that have a constant representing 2.
pub trait Two {
    /// The constant representing 2 for the implementing type.
    const TWO: Self;
}

/// A trait for integer types that have a constant representing 3.
pub trait Three {
    /// The constant representing 3 for the implementing type.
    const THREE: Self;
}

/// A trait for integer types that have a constant representing 5.
pub trait Five {
    /// The constant representing 5 for the implementing type.
    const FIVE: Self;
}

/// A trait for integer types that have a constant representing 6.
///
/// Used by the 6k ± 1 primality walk.
pub trait Six {
    /// The constant representing 6 for the implementing type.
    const SIX: Self;
}

/// A trait for integer types that have a constant representing 10,
/// the radix of every digit-based utility.
pub trait Ten {
    /// The constant representing 10 for the implementing type.
    const TEN: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr; $($t:ty),+ $(,)?) => {
        $(
            impl $trait_name for $t {
                const $const_name: Self = $value;
            }
        )+
    };
}

macro_rules! impl_small_constants {
    ($($t:ty),+ $(,)?) => {
        impl_const_for!(Two, TWO, 2; $($t),+);
        impl_const_for!(Three, THREE, 3; $($t),+);
        impl_const_for!(Five, FIVE, 5; $($t),+);
        impl_const_for!(Six, SIX, 6; $($t),+);
        impl_const_for!(Ten, TEN, 10; $($t),+);
    };
}

impl_small_constants!(u8, u16, u32, u64, u128, usize);
impl_small_constants!(i8, i16, i32, i64, i128, isize);

#[cfg(test)]
mod tests {
    use super::*;

    fn constants<T: Two + Three + Five + Six + Ten>() -> [T; 5] {
        [T::TWO, T::THREE, T::FIVE, T::SIX, T::TEN]
    }

    #[test]
    fn test_constants_unsigned() {
        assert_eq!(constants::<u8>(), [2, 3, 5, 6, 10]);
        assert_eq!(constants::<u128>(), [2, 3, 5, 6, 10]);
    }

    #[test]
    fn test_constants_signed() {
        assert_eq!(constants::<i8>(), [2, 3, 5, 6, 10]);
        assert_eq!(constants::<isize>(), [2, 3, 5, 6, 10]);
    }
}
