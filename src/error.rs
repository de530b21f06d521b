// Copyright 2022 Redglyph
//
// Errors reported by the checked formatting functions.
//
// The arithmetic itself never fails: overflow wraps, or is neutralized by the exponential's
// overflow guards.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    #[error("buffer too small: {needed} bytes needed, {available} available")]
    BufferTooSmall { needed: usize, available: usize },

    #[error("invalid precision {0}: expected -1, -2 or a digit count")]
    InvalidPrecision(i32),
}

pub type Result<T> = core::result::Result<T, FormatError>;
