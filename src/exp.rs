// Copyright 2022 Redglyph
//
// Exponential approximation by the Taylor-Maclaurin series
//
//     e^x = 1 + x + x^2/2! + x^3/3! + ... + x^n/n!,  n <= MAXORDER
//
// The whole part only has WBITS bits, so the powers of x overflow quickly. Instead of widening
// the whole chain, every power and every term goes through an overflow guard: the sign of x^i
// is known in advance (positive for even i, the sign of x for odd i), so a result with the
// opposite sign must have wrapped and is replaced by zero. An overflow which happens not to flip
// the sign goes undetected.

use crate::config::{Fixed32, Fixed64, MAXORDER};

/// Sign that a correct result must have, used by the overflow guards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    /// Zero or positive
    NonNegative,
    /// Zero or negative
    NonPositive,
}

impl Sign {
    /// Expected sign of `base^order`.
    pub const fn of_power(base_negative: bool, order: usize) -> Sign {
        if base_negative && order % 2 == 1 {
            Sign::NonPositive
        } else {
            Sign::NonNegative
        }
    }

    /// Expected sign of the product of a value of sign `negative` by a positive factor.
    pub const fn of_product(negative: bool) -> Sign {
        if negative {
            Sign::NonPositive
        } else {
            Sign::NonNegative
        }
    }

    /// Whether a value which is `negative` or `positive` (or neither, for zero) is compatible.
    pub const fn admits(self, negative: bool, positive: bool) -> bool {
        match self {
            Sign::NonNegative => !negative,
            Sign::NonPositive => !positive,
        }
    }
}

/// Computes `round(ONE / n!)` for `n = 0..=MAXORDER` with integers only.
macro_rules! reciprocal_factorials {
    ($native:ty, $one:expr) => {{
        let mut table = [0 as $native; MAXORDER + 1];
        let mut fact: $native = 1;
        let mut n = 0;
        while n <= MAXORDER {
            if n > 1 {
                fact *= n as $native;
            }
            table[n] = ($one + fact / 2) / fact;
            n += 1;
        }
        table
    }};
}

macro_rules! impl_exp {
    ($name:ident, $native:ty) => {
        impl<const WBITS: u32> $name<WBITS> {
            /// Coefficients `1/i!` of the series, `i = 0..=MAXORDER`
            pub const RECIPROCAL_FACTORIALS: [Self; MAXORDER + 1] = {
                let raw = reciprocal_factorials!($native, Self::ONE.0);
                let mut table = [Self::ZERO; MAXORDER + 1];
                let mut i = 0;
                while i <= MAXORDER {
                    table[i] = Self(raw[i]);
                    i += 1;
                }
                table
            };

            /// Overflow guard: returns the value if its sign is compatible with `expected`,
            /// otherwise zero.
            ///
            /// A sign contradicting the analytical sign can only come from a wrapped
            /// computation. Wrapping that keeps the sign passes through unnoticed.
            pub fn overflow_guard(self, expected: Sign) -> Self {
                if expected.admits(self.is_negative(), self.is_positive()) {
                    self
                } else {
                    tracing::trace!(raw = self.0, ?expected, "overflow guard discarded a value");
                    Self::ZERO
                }
            }

            /// Approximation of `e^x` by the series truncated at `x^MAXORDER`.
            ///
            /// The result is only accurate where the series converges within the representable
            /// range; larger arguments must be range-reduced by the caller. Terms that overflow
            /// are dropped. For `x >= 0` the sum saturates at `MAX`, so the result is at least
            /// `ONE`. For `x < 0`, a sum that wrapped to a negative value is returned as zero, so
            /// the result is never negative.
            ///
            /// ```
            /// use fixedptc::Fix32;
            ///
            /// assert_eq!(Fix32::ZERO.exp(), Fix32::ONE);
            /// assert_eq!(Fix32::ONE.exp().to_int(), 2);
            /// ```
            pub fn exp(self) -> Self {
                self.exp_with_order(MAXORDER)
            }

            /// Approximation of `e^x` by the series truncated at `x^order`.
            ///
            /// `order` is capped at [MAXORDER]; `order == 0` gives `ONE`.
            pub fn exp_with_order(self, order: usize) -> Self {
                let order = order.min(MAXORDER);
                if order == 0 {
                    return Self::ONE;
                }
                let x = self;
                // for x >= 0 all the terms are non-negative, so an overflowing sum saturates
                let saturate = !x.is_negative();
                let accumulate = |sum: Self, term: Self| {
                    if saturate { sum.saturating_add(term) } else { sum.add(term) }
                };
                let mut power = x;
                let mut sum = accumulate(Self::ONE, x);
                for i in 2..=order {
                    // a discarded power zeroes all the powers after it
                    power = power.mul(x).overflow_guard(Sign::of_power(x.is_negative(), i));
                    let term = power
                        .mul(Self::RECIPROCAL_FACTORIALS[i])
                        .overflow_guard(Sign::of_product(power.is_negative()));
                    sum = accumulate(sum, term);
                }
                if saturate && sum == Self::MAX {
                    tracing::trace!(x = x.0, "exponential saturated");
                }
                sum.overflow_guard(Sign::NonNegative)
            }
        }
    };
}

impl_exp!(Fixed32, i32);
impl_exp!(Fixed64, i64);
