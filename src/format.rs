// Copyright 2022 Redglyph
//
// Decimal string formatter
//
// The integer part is converted by successive divisions by 10. The fractional bits are
// left-aligned on BITS bits of the double-width unsigned type; each multiplication by 10 then
// pushes the next decimal digit into the upper half, where it is read and masked out.

use core::fmt;
use ilog::IntLog;
use crate::config::{Fixed32, Fixed64, MAX_FMT_DIGITS};
use crate::error::{FormatError, Result};
use crate::widen::Widen;

/// Number of fractional digits to generate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Precision {
    /// Digit count depending on the format, see `DEFAULT_DEC` (`max_dec = -1`)
    #[default]
    Default,
    /// As many digits as the formatter allows, including digits beyond the actual
    /// precision of the format (`max_dec = -2`)
    All,
    /// At most this number of digits, capped at [MAX_FMT_DIGITS]
    Digits(u32),
}

impl Precision {
    /// Maximum number of fractional digits, given the format's default count.
    pub const fn max_digits(self, default: u32) -> u32 {
        match self {
            Precision::Default => default,
            Precision::All => MAX_FMT_DIGITS,
            Precision::Digits(n) if n > MAX_FMT_DIGITS => MAX_FMT_DIGITS,
            Precision::Digits(n) => n,
        }
    }
}

impl TryFrom<i32> for Precision {
    type Error = FormatError;

    /// Converts a C-style `max_dec`: -1, -2 or a non-negative digit count.
    fn try_from(max_dec: i32) -> Result<Self> {
        match max_dec {
            -1 => Ok(Precision::Default),
            -2 => Ok(Precision::All),
            n if n >= 0 => Ok(Precision::Digits(n as u32)),
            n => Err(FormatError::InvalidPrecision(n)),
        }
    }
}

// ---------------------------------------------------------------------------------------------

/// Buffer size that fits any formatted value and its NUL terminator:
/// sign, 19 integer digits, point, [MAX_FMT_DIGITS] fractional digits.
pub const FMT_BUFFER_LEN: usize = 40;

/// Fixed-capacity buffer holding a formatted value, without allocation.
#[derive(Clone, Copy)]
pub struct FmtBuffer {
    bytes: [u8; FMT_BUFFER_LEN],
    len: usize,
}

impl FmtBuffer {
    pub const fn new() -> Self {
        FmtBuffer { bytes: [0; FMT_BUFFER_LEN], len: 0 }
    }

    /// Formatted text, without terminator
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub fn as_str(&self) -> &str {
        // only ASCII digits, '-' and '.' are ever pushed
        unsafe { core::str::from_utf8_unchecked(self.as_bytes()) }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, byte: u8) {
        self.bytes[self.len] = byte;
        self.len += 1;
    }

    fn last(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    fn pop(&mut self) {
        self.len -= 1;
    }

    /// Writes `value` in decimal, most significant digit first, without leading zeros.
    fn push_decimal<U: IntLog + Copy + Into<u64>>(&mut self, value: U) {
        let num_digits = IntLog::checked_log10(value).map_or(1, |log| log + 1);
        let mut v: u64 = value.into();
        let start = self.len;
        self.len += num_digits;
        for pos in (start..self.len).rev() {
            self.bytes[pos] = b'0' + (v % 10) as u8;
            v /= 10;
        }
        debug_assert_eq!(v, 0);
    }
}

impl Default for FmtBuffer {
    fn default() -> Self {
        FmtBuffer::new()
    }
}

impl AsRef<str> for FmtBuffer {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for FmtBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for FmtBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

// ---------------------------------------------------------------------------------------------

macro_rules! impl_format {
    ($name:ident, $unsigned:ty, $bits:expr) => {
        impl<const WBITS: u32> $name<WBITS> {
            /// Converts the value to a decimal string.
            ///
            /// Fractional digits are generated until the remaining fraction is zero or the
            /// precision is reached; the digits are truncated, not rounded. If more than one
            /// digit was generated and the last one is `0`, that single digit is removed.
            /// Only one zero is removed: `1.0001` with 3 digits gives `"1.00"`.
            ///
            /// The decimal point is always present, even without fractional digit.
            ///
            /// ```
            /// use fixedptc::{Fix32, Precision};
            ///
            /// assert_eq!(Fix32::from_real(-2.5).format(Precision::Default).as_str(), "-2.5");
            /// assert_eq!(Fix32::from_int(3).format(Precision::Digits(2)).as_str(), "3.");
            /// ```
            pub fn format(self, precision: Precision) -> FmtBuffer {
                let max_dec = precision.max_digits(Self::DEFAULT_DEC);
                let mut out = FmtBuffer::new();
                if self.is_negative() {
                    out.push(b'-');
                }
                let magnitude: $unsigned = self.0.unsigned_abs();
                out.push_decimal(magnitude >> Self::FBITS);
                out.push(b'.');

                let mask = <$unsigned>::MAX.widen();
                let mut fr = (magnitude & Self::FMASK as $unsigned).widen() << WBITS;
                let mut ndec = 0;
                while fr & mask != 0 && ndec < max_dec {
                    fr = (fr & mask) * 10;
                    out.push(b'0' + (<$unsigned>::narrow(fr >> $bits) % 10) as u8);
                    ndec += 1;
                }
                if ndec > 1 && out.last() == Some(b'0') {
                    out.pop();
                }
                out
            }

            /// Number of bytes [format_into](Self::format_into) writes, terminator included.
            pub fn required_len(self, precision: Precision) -> usize {
                self.format(precision).len() + 1
            }

            /// Writes the decimal string followed by a NUL terminator into `buf`, and returns the
            /// length of the string.
            ///
            /// # Panics
            ///
            /// The caller must provide room for the sign, integer digits, point, fractional
            /// digits and terminator; [FMT_BUFFER_LEN] is always enough. A shorter buffer
            /// panics. See [try_format_into](Self::try_format_into) for a checked version.
            pub fn format_into(self, precision: Precision, buf: &mut [u8]) -> usize {
                let text = self.format(precision);
                let len = text.len();
                buf[..len].copy_from_slice(text.as_bytes());
                buf[len] = 0;
                len
            }

            /// Same as [format_into](Self::format_into), but returns an error if `buf` is too
            /// small, leaving it untouched.
            pub fn try_format_into(self, precision: Precision, buf: &mut [u8]) -> Result<usize> {
                let text = self.format(precision);
                let needed = text.len() + 1;
                if buf.len() < needed {
                    return Err(FormatError::BufferTooSmall { needed, available: buf.len() });
                }
                buf[..text.len()].copy_from_slice(text.as_bytes());
                buf[text.len()] = 0;
                Ok(text.len())
            }

            #[cfg(feature = "std")]
            pub fn to_string_prec(self, precision: Precision) -> String {
                self.format(precision).as_str().to_string()
            }
        }

        impl<const WBITS: u32> fmt::Display for $name<WBITS> {
            /// Formats with `MAX_DEC` fractional digits, or the precision given with `{:.N}`.
            /// Width, fill and alignment are honoured.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let digits = f.precision().map_or(Self::MAX_DEC, |p| p.min(MAX_FMT_DIGITS as usize) as u32);
                let text = self.format(Precision::Digits(digits));
                // the precision is already applied: `pad` would truncate the digits
                let unsigned = text.as_str().trim_start_matches('-');
                f.pad_integral(!self.is_negative(), "", unsigned)
            }
        }

        impl<const WBITS: u32> fmt::Debug for $name<WBITS> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}<{}>({:#x} = {})", stringify!($name), WBITS, self.0, self.format(Precision::All))
            }
        }
    };
}

impl_format!(Fixed32, u32, 32);
impl_format!(Fixed64, u64, 64);
