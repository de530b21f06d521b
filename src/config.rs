// Copyright 2022 Redglyph
//
// Format configuration: representation types and the constants derived from their layout.
//
// The width is selected by the type ([Fixed32] or [Fixed64]) and the whole/fraction split by
// the `WBITS` const parameter, so both are fixed for each instantiation.

/// Default number of fractional digits produced by `Display` when no precision is given.
pub const MAX_DEC: u32 = 5;

/// Highest power of `x` kept in the exponential series.
///
/// Only the reciprocal factorials up to `1/6!` are tabulated, so this cannot be raised.
pub const MAXORDER: usize = 6;

/// Maximum number of fractional digits the formatter will generate, whatever the width.
///
/// Digits beyond the precision of the representation are not meaningful ("bogus" digits).
pub const MAX_FMT_DIGITS: u32 = 15;

/// Default number of whole bits, sign included.
pub const DEFAULT_WBITS: u32 = 14;

macro_rules! define_fixed {
    ($(#[$attr:meta])* $name:ident, $alias:ident, $native:ty, $bits:expr) => {
        $(#[$attr])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        pub struct $name<const WBITS: u32 = DEFAULT_WBITS>(pub(crate) $native);

        #[doc = concat!("[", stringify!($name), "] with the default split of [DEFAULT_WBITS] whole bits.")]
        pub type $alias = $name<DEFAULT_WBITS>;

        impl<const WBITS: u32> $name<WBITS> {
            // ONE and TWO must be positive: at least 3 whole bits, sign included
            const LAYOUT: () = assert!(2 < WBITS && WBITS < $bits, "WBITS must be in 3..BITS");

            /// Width of the representation, in bits
            pub const BITS: u32 = $bits;
            /// Bits of the whole part, sign included
            pub const WBITS: u32 = WBITS;
            /// Bits of the fractional part
            pub const FBITS: u32 = {
                let () = Self::LAYOUT;
                $bits - WBITS
            };
            /// Mask extracting the fractional bits of a raw value
            pub const FMASK: $native = Self::ONE.0.wrapping_sub(1);

            pub const ZERO: Self = Self(0);
            pub const ONE: Self = Self(1 << Self::FBITS);
            pub const ONE_HALF: Self = Self(Self::ONE.0 >> 1);
            pub const TWO: Self = Self(Self::ONE.0 + Self::ONE.0);
            pub const PI: Self = Self::from_real(core::f64::consts::PI);
            pub const TWO_PI: Self = Self::from_real(core::f64::consts::TAU);
            pub const E: Self = Self::from_real(core::f64::consts::E);

            pub const MIN: Self = Self(<$native>::MIN);
            pub const MAX: Self = Self(<$native>::MAX);

            /// Fractional digits written by `Display` when no precision is given.
            pub const MAX_DEC: u32 = MAX_DEC;

            /// Fractional digits selected by [Precision::Default](crate::Precision::Default):
            /// 10 for 64-bit, 4 for 32-bit when `WBITS <= 16`, else 2.
            pub const DEFAULT_DEC: u32 = if $bits == 64 {
                10
            } else if WBITS > 16 {
                2
            } else {
                4
            };

            /// Creates a value from its scaled integer encoding `real * 2^FBITS`.
            #[inline]
            pub const fn from_raw(raw: $native) -> Self {
                Self(raw)
            }

            /// Scaled integer encoding of the value.
            #[inline]
            pub const fn raw(self) -> $native {
                self.0
            }
        }
    };
}

define_fixed!(
    /// Signed 32-bit fixed-point number, holding `raw / 2^(32 - WBITS)`.
    ///
    /// With the default 14 whole bits, the range is about ±8192 with a resolution of 2^-18.
    Fixed32, Fix32, i32, 32
);

define_fixed!(
    /// Signed 64-bit fixed-point number, holding `raw / 2^(64 - WBITS)`.
    ///
    /// Products are computed on 128 bits.
    Fixed64, Fix64, i64, 64
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_constants() {
        assert_eq!(Fix32::FBITS, 18);
        assert_eq!(Fix32::ONE.raw(), 0x4_0000);
        assert_eq!(Fix32::FMASK, 0x3_ffff);
        assert_eq!(Fix32::ONE_HALF.raw(), 0x2_0000);
        assert_eq!(Fix32::TWO.raw(), 0x8_0000);
        assert_eq!(Fix64::FBITS, 50);
        assert_eq!(Fix64::FMASK, (1_i64 << 50) - 1);
        assert_eq!(Fixed32::<24>::FBITS, 8);
    }

    #[test]
    fn named_constants_rounded() {
        // round(pi * 2^18) = 823549.6 -> 823550
        assert_eq!(Fix32::PI.raw(), 823_550);
        assert_eq!(Fix32::TWO_PI.raw(), 1_647_099);
        assert_eq!(Fix32::E.raw(), 712_581);
        assert_eq!(Fixed32::<24>::PI.raw(), 804);
    }

    #[test]
    fn default_digits() {
        assert_eq!(Fixed32::<16>::DEFAULT_DEC, 4);
        assert_eq!(Fixed32::<17>::DEFAULT_DEC, 2);
        assert_eq!(Fix64::DEFAULT_DEC, 10);
        assert_eq!(Fixed64::<40>::DEFAULT_DEC, 10);
        assert_eq!(Fix32::MAX_DEC, MAX_DEC);
        assert_eq!(Fixed64::<40>::MAX_DEC, 5);
    }

    #[test]
    fn narrowest_layout() {
        type Q3 = Fixed32<3>;
        assert_eq!(Q3::FBITS, 29);
        assert!(Q3::ONE_HALF.is_positive());
        assert_eq!(Q3::TWO.raw(), 1 << 30);
        assert_eq!(Q3::from_int(3).to_int(), 3);
        assert_eq!(Fixed64::<3>::TWO.to_int(), 2);
    }
}
