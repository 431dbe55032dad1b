//! UTF-16 to UTF-8 encoding.
//!
//! Well-formed UTF-16 encodes to the same bytes as `str::as_bytes`. Malformed
//! input never fails:
//! - a high surrogate that is not followed by a low surrogate becomes U+FFFD
//!   (`EF BF BD`) and the unit after it is encoded normally;
//! - a low surrogate with no high surrogate before it is either encoded as a
//!   three-byte sequence or replaced, depending on [`LoneSurrogate`].

use alloc::vec::Vec;
use core::fmt;

use crate::{
    encoding::Encoding,
    options::{EncoderOptions, LoneSurrogate},
};

/// UTF-8 encoding of U+FFFD REPLACEMENT CHARACTER.
pub const REPLACEMENT: [u8; 3] = [0xEF, 0xBF, 0xBD];

const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;

/// Encodes UTF-16 code units into UTF-8 bytes.
///
/// # Examples
///
/// ```rust
/// use textcodec::TextEncoder;
///
/// let encoder = TextEncoder::new();
/// assert_eq!(encoder.encode(&[0xD83D, 0xDE00]), [0xF0, 0x9F, 0x98, 0x80]);
/// assert_eq!(encoder.encode(&[0x41, 0xD800]), [0x41, 0xEF, 0xBF, 0xBD]);
/// assert_eq!(encoder.encode_str("café"), "café".as_bytes());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextEncoder {
    options: EncoderOptions,
}

impl TextEncoder {
    /// Creates a UTF-8 encoder with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a UTF-8 encoder with the given options.
    #[must_use]
    pub fn with_options(options: EncoderOptions) -> Self {
        Self { options }
    }

    /// The encoding this encoder produces. Always UTF-8.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        Encoding::Utf8
    }

    /// The options this encoder was built with.
    #[must_use]
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Encodes a sequence of UTF-16 code units.
    #[must_use]
    pub fn encode(&self, units: &[u16]) -> Vec<u8> {
        encode_with(units, &self.options)
    }

    /// Encodes the UTF-16 form of `text`.
    ///
    /// A `&str` holds no surrogates, so this always equals `text.as_bytes()`.
    #[must_use]
    pub fn encode_str(&self, text: &str) -> Vec<u8> {
        let units: Vec<u16> = text.encode_utf16().collect();
        self.encode(&units)
    }
}

impl fmt::Display for TextEncoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[object TextEncoder]")
    }
}

pub(crate) fn encode_with(units: &[u16], options: &EncoderOptions) -> Vec<u8> {
    // Each unit yields at most three bytes; a pair yields four for two units.
    let mut out = Vec::with_capacity(units.len().saturating_mul(3));
    let mut units = units.iter().copied().peekable();

    while let Some(point) = units.next() {
        let code = match point {
            0xD800..=0xDBFF => match units.peek() {
                Some(&low @ 0xDC00..=0xDFFF) => {
                    units.next();
                    (u32::from(point) - 0xD800) * 0x400 + (u32::from(low) - 0xDC00) + 0x1_0000
                }
                // unpaired high surrogate: the next unit, if any, is encoded on its own
                _ => {
                    out.extend_from_slice(&REPLACEMENT);
                    continue;
                }
            },
            0xDC00..=0xDFFF if options.lone_low_surrogate == LoneSurrogate::Replace => {
                out.extend_from_slice(&REPLACEMENT);
                continue;
            }
            _ => u32::from(point),
        };
        push_code_point(&mut out, code);
    }

    out
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn push_code_point(out: &mut Vec<u8>, code: u32) {
    if code < 0x80 {
        out.push(code as u8);
    } else if code < 0x800 {
        out.extend_from_slice(&[
            ((code >> 6) & 0x1F) as u8 | TAG_TWO_B,
            (code & 0x3F) as u8 | TAG_CONT,
        ]);
    } else if code < 0x1_0000 {
        out.extend_from_slice(&[
            ((code >> 12) & 0x0F) as u8 | TAG_THREE_B,
            ((code >> 6) & 0x3F) as u8 | TAG_CONT,
            (code & 0x3F) as u8 | TAG_CONT,
        ]);
    } else {
        out.extend_from_slice(&[
            ((code >> 18) & 0x07) as u8 | TAG_FOUR_B,
            ((code >> 12) & 0x3F) as u8 | TAG_CONT,
            ((code >> 6) & 0x3F) as u8 | TAG_CONT,
            (code & 0x3F) as u8 | TAG_CONT,
        ]);
    }
}
