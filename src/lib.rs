// Copyright 2022 Redglyph
//
// Fixed-point numeric library for environments without (or avoiding) floating-point support,
// such as microcontrollers and kernels.

//! Signed fixed-point numbers stored as scaled integers.
//!
//! [Fixed32] and [Fixed64] hold `raw / 2^FBITS`, where `FBITS = BITS - WBITS` and `WBITS`,
//! the number of whole bits including the sign, is a const parameter (14 by default, see
//! [Fix32] and [Fix64]).
//!
//! ```
//! use fixedptc::{Fix32, Precision};
//!
//! let r = Fix32::from_real(1.5);
//! let area = Fix32::PI * r * r;
//! assert_eq!(area.format(Precision::Digits(2)).as_str(), "7.06");
//! assert_eq!(Fix32::ONE.exp().format(Precision::Default).as_str(), "2.718");
//! ```
//!
//! Addition and subtraction wrap on overflow. Multiplication is computed on twice the
//! native width before being scaled back. The exponential drops the series terms whose sign
//! reveals an overflow (see [Sign] and `overflow_guard`).
//!
//! The floating-point conversions are only available with the `float` feature.

#![cfg_attr(not(any(feature = "std", test)), no_std)]

mod widen;
mod config;
mod convert;
mod arith;
mod exp;
mod format;
mod error;
#[cfg(feature = "float")]
mod float;

pub use crate::config::{Fix32, Fix64, Fixed32, Fixed64, DEFAULT_WBITS, MAXORDER, MAX_DEC, MAX_FMT_DIGITS};
pub use crate::error::{FormatError, Result};
pub use crate::exp::Sign;
pub use crate::format::{FmtBuffer, Precision, FMT_BUFFER_LEN};
pub use crate::widen::Widen;
