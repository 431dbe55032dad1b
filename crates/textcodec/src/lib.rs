//! A UTF-8 ⇄ UTF-16 text codec for environments without one.
//!
//! [`TextDecoder`] turns bytes believed to be UTF-8 into UTF-16 code units;
//! [`TextEncoder`] turns UTF-16 code units back into UTF-8 bytes. Both are
//! stateless: every call owns its buffers and nothing is shared between
//! calls, so a single codec value may be used from any number of threads.
//!
//! Neither direction ever fails. The decoder does not validate UTF-8 and
//! degrades malformed input mechanically; the encoder replaces unpaired high
//! surrogates with U+FFFD. The only error in the crate is
//! [`EncodingError::UnsupportedEncoding`], raised when a decoder is built
//! for a label other than one of the UTF-8 aliases.
//!
//! ```rust
//! let units = textcodec::decode("a€😀".as_bytes());
//! assert_eq!(units, [0x61, 0x20AC, 0xD83D, 0xDE00]);
//! assert_eq!(textcodec::encode(&units), "a€😀".as_bytes());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod encoder;
mod encoding;
mod error;
mod options;

#[cfg(test)]
mod tests;

use alloc::vec::Vec;

pub use decoder::TextDecoder;
pub use encoder::{REPLACEMENT, TextEncoder};
pub use encoding::{Encoding, UTF8_LABELS};
pub use error::EncodingError;
pub use options::{
    DEFAULT_CHUNK_CAPACITY, DecoderOptions, EncoderOptions, LoneSurrogate, TruncatedSequence,
};

/// Decodes UTF-8 `bytes` into UTF-16 code units with default options.
///
/// Equivalent to `TextDecoder::default().decode(bytes)`.
#[must_use]
pub fn decode(bytes: &[u8]) -> Vec<u16> {
    decoder::decode_with(bytes, &DecoderOptions::default())
}

/// Encodes UTF-16 code `units` into UTF-8 bytes with default options.
///
/// Equivalent to `TextEncoder::default().encode(units)`.
#[must_use]
pub fn encode(units: &[u16]) -> Vec<u8> {
    encoder::encode_with(units, &EncoderOptions::default())
}
