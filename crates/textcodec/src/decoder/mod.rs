//! UTF-8 to UTF-16 decoding.
//!
//! The decoder walks the input once, classifying each lead byte by its high
//! bits and folding in the low six bits of the continuation bytes that follow
//! it. It does not validate: continuation bytes are taken on trust, overlong
//! forms and encoded surrogates decode to whatever their bits say, and stray
//! continuation bytes or `11111xxx` lead bytes are skipped without emitting
//! anything. Decoding never fails.
//!
//! Code points above U+FFFF are split into a surrogate pair.

mod pending;

use alloc::{string::String, vec::Vec};
use core::fmt;

use bstr::ByteSlice;

use self::pending::PendingUnits;
use crate::{
    encoding::Encoding,
    error::EncodingError,
    options::{DecoderOptions, TruncatedSequence},
};

/// Decodes UTF-8 bytes into UTF-16 code units.
///
/// # Examples
///
/// ```rust
/// use textcodec::TextDecoder;
///
/// let decoder = TextDecoder::new("utf-8").unwrap();
/// assert_eq!(decoder.decode(b"hi \xF0\x9F\x98\x80"), [0x68, 0x69, 0x20, 0xD83D, 0xDE00]);
/// assert_eq!(decoder.decode_to_string(b"caf\xC3\xA9"), "café");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextDecoder {
    options: DecoderOptions,
}

impl TextDecoder {
    /// Creates a decoder for `label` with default options.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::UnsupportedEncoding`] unless `label` is one of
    /// the accepted UTF-8 labels.
    pub fn new(label: &str) -> Result<Self, EncodingError> {
        Self::with_options(label, DecoderOptions::default())
    }

    /// Creates a decoder for `label` with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::UnsupportedEncoding`] unless `label` is one of
    /// the accepted UTF-8 labels.
    pub fn with_options(label: &str, options: DecoderOptions) -> Result<Self, EncodingError> {
        Encoding::from_label(label)?;
        Ok(Self { options })
    }

    /// The encoding this decoder reads.
    #[must_use]
    pub fn encoding(&self) -> Encoding {
        Encoding::Utf8
    }

    /// The options this decoder was built with.
    #[must_use]
    pub fn options(&self) -> &DecoderOptions {
        &self.options
    }

    /// Decodes `bytes` into UTF-16 code units.
    #[must_use]
    pub fn decode(&self, bytes: &[u8]) -> Vec<u16> {
        decode_with(bytes, &self.options)
    }

    /// Decodes `bytes` and converts the result into a `String`, replacing
    /// unpaired surrogates with U+FFFD.
    #[must_use]
    pub fn decode_to_string(&self, bytes: &[u8]) -> String {
        String::from_utf16_lossy(&self.decode(bytes))
    }
}

impl fmt::Display for TextDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[object TextDecoder]")
    }
}

/// Number of bytes in a sequence started by `lead`, and the payload bits the
/// lead byte contributes. `None` for bytes that cannot start a sequence.
#[inline]
fn classify(lead: u8) -> Option<(usize, u32)> {
    match lead {
        0xC0..=0xDF => Some((2, u32::from(lead & 0x1F))),
        0xE0..=0xEF => Some((3, u32::from(lead & 0x0F))),
        0xF0..=0xF7 => Some((4, u32::from(lead & 0x07))),
        // 10xxxxxx continuation or 11111xxx
        _ => None,
    }
}

pub(crate) fn decode_with(bytes: &[u8], options: &DecoderOptions) -> Vec<u16> {
    let mut out = PendingUnits::for_input(bytes.len(), options.chunk_capacity);

    #[cfg(any(test, feature = "fuzzing"))]
    let bulk_ascii = !options.scalar_only;
    #[cfg(not(any(test, feature = "fuzzing")))]
    let bulk_ascii = true;

    let mut i = 0;
    while let Some(&lead) = bytes.get(i) {
        if lead < 0x80 {
            if bulk_ascii {
                let rest = &bytes[i..];
                let run = rest.find_non_ascii_byte().unwrap_or(rest.len());
                out.extend_ascii(&rest[..run]);
                i += run;
            } else {
                out.push(u16::from(lead));
                i += 1;
            }
            continue;
        }

        let Some((len, lead_bits)) = classify(lead) else {
            i += 1;
            continue;
        };

        let trail = &bytes[i + 1..];
        if trail.len() < len - 1 && options.truncated == TruncatedSequence::Discard {
            break;
        }

        let code = trail
            .iter()
            .copied()
            .chain(core::iter::repeat(0))
            .take(len - 1)
            .fold(lead_bits, |acc, b| (acc << 6) | u32::from(b & 0x3F));
        i += len;

        push_code_point(&mut out, code);
    }

    out.finish()
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn push_code_point(out: &mut PendingUnits, code: u32) {
    if code > 0xFFFF {
        let offset = code - 0x1_0000;
        let high = 0xD800 | ((offset >> 10) & 0x3FF);
        let low = 0xDC00 | (offset & 0x3FF);
        out.push_pair(high as u16, low as u16);
    } else {
        out.push(code as u16);
    }
}
