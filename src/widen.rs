// Copyright 2022 Redglyph
//
// Double-width integer types
//
// Products and digit extraction need twice the native width. Every promotion and truncation
// goes through [Widen] so that the places where a value changes width stay visible.

/// Integer type with a type twice as wide.
pub trait Widen: Copy {
    /// Integer type of `2 * BITS` bits, with the same signedness
    type Wide: Copy;

    /// Lossless promotion to the double-width type.
    fn widen(self) -> Self::Wide;

    /// Truncation back to the native width: keeps the lowest `BITS` bits, like `as`.
    fn narrow(wide: Self::Wide) -> Self;
}

macro_rules! impl_widen {
    ($($native:ty => $wide:ty),*) => {
        $(
            impl Widen for $native {
                type Wide = $wide;

                #[inline]
                fn widen(self) -> $wide {
                    self as $wide
                }

                #[inline]
                fn narrow(wide: $wide) -> $native {
                    wide as $native
                }
            }
        )*
    };
}

impl_widen!(i32 => i64, u32 => u64, i64 => i128, u64 => u128);
