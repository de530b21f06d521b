// Copyright 2022 Redglyph
//
// Arithmetic core
//
// Addition, subtraction, negation and absolute value work on the raw integers and wrap on
// overflow. Multiplication is the only operation that needs the double-width type.

use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use crate::config::{Fixed32, Fixed64};
use crate::widen::Widen;

macro_rules! impl_arith {
    ($name:ident, $native:ty) => {
        impl<const WBITS: u32> $name<WBITS> {
            /// `a + b`, wrapping on overflow.
            #[inline]
            pub const fn add(self, other: Self) -> Self {
                Self(self.0.wrapping_add(other.0))
            }

            /// `a + b`, clamped to `MIN` or `MAX` on overflow.
            #[inline]
            pub const fn saturating_add(self, other: Self) -> Self {
                Self(self.0.saturating_add(other.0))
            }

            /// `a - b`, wrapping on overflow.
            #[inline]
            pub const fn sub(self, other: Self) -> Self {
                Self(self.0.wrapping_sub(other.0))
            }

            /// `-a`, wrapping on overflow: `-MIN == MIN`.
            #[inline]
            pub const fn neg(self) -> Self {
                Self(self.0.wrapping_neg())
            }

            /// Absolute value.
            ///
            /// `MIN` has no positive counterpart: like the native wrapping absolute value,
            /// `MIN.abs()` is `MIN`, the only negative result.
            #[inline]
            pub const fn abs(self) -> Self {
                Self(self.0.wrapping_abs())
            }

            /// Product `a * b`, truncated toward negative infinity.
            ///
            /// The full product is computed on the double-width type, then shifted back by
            /// `FBITS` and truncated to the native width. The result is exact to within one
            /// unit of the last fractional bit whenever the real product is in range.
            #[inline]
            pub fn mul(self, other: Self) -> Self {
                let product = self.0.widen() * other.0.widen();
                Self(<$native>::narrow(product >> Self::FBITS))
            }

            /// Same as [mul](Self::mul).
            #[inline]
            pub fn xmul(self, other: Self) -> Self {
                self.mul(other)
            }

            /// Whether the value is strictly negative.
            #[inline]
            pub const fn is_negative(self) -> bool {
                self.0 < 0
            }

            /// Whether the value is strictly positive.
            #[inline]
            pub const fn is_positive(self) -> bool {
                self.0 > 0
            }
        }

        impl<const WBITS: u32> Add for $name<WBITS> {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                $name::add(self, rhs)
            }
        }

        impl<const WBITS: u32> Sub for $name<WBITS> {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                $name::sub(self, rhs)
            }
        }

        impl<const WBITS: u32> Mul for $name<WBITS> {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                $name::mul(self, rhs)
            }
        }

        impl<const WBITS: u32> Neg for $name<WBITS> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                $name::neg(self)
            }
        }

        impl<const WBITS: u32> AddAssign for $name<WBITS> {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = $name::add(*self, rhs);
            }
        }

        impl<const WBITS: u32> SubAssign for $name<WBITS> {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = $name::sub(*self, rhs);
            }
        }

        impl<const WBITS: u32> MulAssign for $name<WBITS> {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = $name::mul(*self, rhs);
            }
        }
    };
}

impl_arith!(Fixed32, i32);
impl_arith!(Fixed64, i64);

#[cfg(test)]
mod tests {
    use crate::{Fix32, Fix64, Fixed32};

    #[test]
    fn add_sub_wrap() {
        let a = Fix32::from_real(1.25);
        let b = Fix32::from_real(-3.5);
        assert_eq!(a + b, Fix32::from_real(-2.25));
        assert_eq!(a - b, Fix32::from_real(4.75));
        assert_eq!(Fix32::MAX + Fix32::from_raw(1), Fix32::MIN);
        assert_eq!(Fix32::MIN - Fix32::from_raw(1), Fix32::MAX);
    }

    #[test]
    fn add_saturates() {
        let a = Fix32::from_int(8000);
        assert_eq!(a.saturating_add(a), Fix32::MAX);
        assert_eq!(a.neg().saturating_add(a.neg()), Fix32::MIN);
        assert_eq!(a.saturating_add(Fix32::ONE), Fix32::from_int(8001));
        assert_eq!(Fix64::MAX.saturating_add(Fix64::ONE), Fix64::MAX);
    }

    #[test]
    fn abs_and_neg() {
        assert_eq!(Fix32::from_int(-5).abs(), Fix32::from_int(5));
        assert_eq!(Fix32::from_int(5).abs(), Fix32::from_int(5));
        assert_eq!(Fix32::ZERO.abs(), Fix32::ZERO);
        // documented boundary: MIN stays negative
        assert_eq!(Fix32::MIN.abs(), Fix32::MIN);
        assert_eq!(-Fix32::MIN, Fix32::MIN);
    }

    #[test]
    fn mul_widens() {
        // 100 * 50 = 5000: the raw product needs 2 * 18 + 13 bits
        let a = Fix32::from_int(100);
        let b = Fix32::from_int(50);
        assert_eq!(a * b, Fix32::from_int(5000));
        assert_eq!(Fix32::from_real(-1.5) * Fix32::from_real(2.5), Fix32::from_real(-3.75));
        assert_eq!(Fix64::from_int(-4000) * Fix64::from_int(2), Fix64::from_int(-8000));
        assert_eq!(Fix32::ONE.xmul(Fix32::PI), Fix32::PI);
    }

    #[test]
    fn mul_truncates_toward_negative_infinity() {
        let lsb = Fixed32::<24>::from_raw(1);
        assert_eq!(lsb * Fixed32::<24>::ONE_HALF, Fixed32::<24>::ZERO);
        assert_eq!(-lsb * Fixed32::<24>::ONE_HALF, -lsb);
    }

    #[test]
    fn assign_ops() {
        let mut x = Fix32::ONE;
        x += Fix32::ONE;
        assert_eq!(x, Fix32::TWO);
        x *= Fix32::TWO;
        assert_eq!(x, Fix32::from_int(4));
        x -= Fix32::ONE_HALF;
        assert_eq!(x, Fix32::from_real(3.5));
    }
}
