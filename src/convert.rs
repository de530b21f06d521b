// Copyright 2022 Redglyph
//
// Conversions between fixed-point values and integers or real literals

use crate::config::{Fixed32, Fixed64};

macro_rules! impl_convert {
    ($name:ident, $native:ty, $wide:ty) => {
        impl<const WBITS: u32> $name<WBITS> {
            /// Converts an integer, which must fit in `WBITS` bits to be exact.
            ///
            /// The shift is performed on the double-width type (the promotion of
            /// [Widen::widen](crate::Widen::widen), spelled with `as` to stay `const`) and then
            /// truncated to the native width.
            #[inline]
            pub const fn from_int(i: $native) -> Self {
                Self(((i as $wide) << Self::FBITS) as $native)
            }

            /// Integer part, rounded toward negative infinity (arithmetic shift).
            #[inline]
            pub const fn to_int(self) -> $native {
                self.0 >> Self::FBITS
            }

            /// Converts a real literal, rounding `r * ONE` to the nearest integer, with halves
            /// away from zero.
            ///
            /// Meant for constants: when evaluated in a `const` context, no floating-point
            /// operation is left in the binary.
            ///
            /// ```
            /// use fixedptc::Fix32;
            ///
            /// const QUARTER: Fix32 = Fix32::from_real(0.25);
            /// assert_eq!(QUARTER, Fix32::ONE_HALF * Fix32::ONE_HALF);
            /// ```
            #[inline]
            pub const fn from_real(r: f64) -> Self {
                let scaled = r * Self::ONE.0 as f64;
                Self((scaled + if r >= 0.0 { 0.5 } else { -0.5 }) as $native)
            }

            /// Fractional bits of the value, `raw & FMASK`.
            ///
            /// For negative values, this is the distance to the integer below (`to_int`),
            /// not to zero.
            #[inline]
            pub const fn frac_part(self) -> $native {
                self.0 & Self::FMASK
            }
        }
    };
}

impl_convert!(Fixed32, i32, i64);
impl_convert!(Fixed64, i64, i128);
