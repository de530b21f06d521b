// Copyright 2022 Redglyph
//
// Floating-point escape hatch, enabled by the `float` feature.
//
// Nothing else in the crate uses these conversions, so the arithmetic core never needs
// floating-point hardware.

use crate::config::{Fixed32, Fixed64};

macro_rules! impl_float {
    ($name:ident) => {
        impl<const WBITS: u32> $name<WBITS> {
            /// Narrowing conversion, `raw * (1 / ONE)`.
            #[inline]
            pub fn to_f32(self) -> f32 {
                self.0 as f32 * (1.0 / Self::ONE.0 as f32)
            }

            /// Conversion to `f64`, exact for [Fixed32]. [Fixed64] keeps 53 significant bits.
            #[inline]
            pub fn to_f64(self) -> f64 {
                self.0 as f64 * (1.0 / Self::ONE.0 as f64)
            }

            /// Same rounding as [from_real](Self::from_real). Out-of-range values saturate.
            #[inline]
            pub fn from_f32(f: f32) -> Self {
                Self::from_real(f as f64)
            }

            /// Same as [from_real](Self::from_real), at run time. Out-of-range values saturate.
            #[inline]
            pub fn from_f64(f: f64) -> Self {
                Self::from_real(f)
            }
        }

        impl<const WBITS: u32> From<$name<WBITS>> for f32 {
            fn from(value: $name<WBITS>) -> f32 {
                value.to_f32()
            }
        }

        impl<const WBITS: u32> From<$name<WBITS>> for f64 {
            fn from(value: $name<WBITS>) -> f64 {
                value.to_f64()
            }
        }
    };
}

impl_float!(Fixed32);
impl_float!(Fixed64);

#[cfg(test)]
mod tests {
    use crate::{Fix32, Fix64};

    #[test]
    fn narrow_to_float() {
        assert_eq!(Fix32::ONE_HALF.to_f32(), 0.5);
        assert_eq!(Fix32::from_int(-3).to_f32(), -3.0);
        assert!((Fix32::PI.to_f32() - core::f32::consts::PI).abs() < 4e-6);
        assert!((Fix64::E.to_f64() - core::f64::consts::E).abs() < 1e-15);
        assert_eq!(f64::from(Fix64::TWO), 2.0);
    }

    #[test]
    fn float_round_trip() {
        for f in [0.0, 1.25, -7.75, 100.0 / 3.0] {
            let x = Fix32::from_f64(f);
            assert!((x.to_f64() - f).abs() <= 0.5 / Fix32::ONE.raw() as f64, "failed for {f}");
        }
        assert_eq!(Fix32::from_f32(-0.5), -Fix32::ONE_HALF);
    }
}
