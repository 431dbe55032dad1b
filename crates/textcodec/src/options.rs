/// Default upper bound, in code units, of the decoder's working buffer.
pub const DEFAULT_CHUNK_CAPACITY: usize = 256 * 256;

/// How the decoder treats a multi-byte sequence cut short by the end of the
/// input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TruncatedSequence {
    /// Consume the bytes that are present and emit nothing for them.
    #[default]
    Discard,
    /// Read every missing continuation byte as zero and emit the resulting
    /// code unit(s). Bit-compatible with decoders that read out-of-range
    /// bytes as zero.
    ///
    /// `[0xC3]` decodes to `[0x00C0]` under this mode.
    ZeroFill,
}

/// How the encoder treats a low surrogate that does not follow a high
/// surrogate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LoneSurrogate {
    /// Encode the surrogate as an ordinary three-byte sequence
    /// (`U+DC00` becomes `ED B0 80`). The output is not strictly valid UTF-8
    /// but decodes back to the same code unit.
    #[default]
    Preserve,
    /// Substitute U+FFFD (`EF BF BD`), the same treatment an unpaired high
    /// surrogate always gets.
    Replace,
}

/// Configuration options for [`TextDecoder`](crate::TextDecoder).
///
/// # Examples
///
/// ```rust
/// use textcodec::{DecoderOptions, TextDecoder, TruncatedSequence};
///
/// let decoder = TextDecoder::with_options(
///     "utf-8",
///     DecoderOptions {
///         truncated: TruncatedSequence::ZeroFill,
///         ..Default::default()
///     },
/// )
/// .unwrap();
/// assert_eq!(decoder.decode(&[0x41, 0xC3]), [0x41, 0xC0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecoderOptions {
    /// Treatment of a multi-byte sequence truncated by the end of the input.
    ///
    /// # Default
    ///
    /// [`TruncatedSequence::Discard`]
    pub truncated: TruncatedSequence,

    /// Upper bound, in code units, of a single working-buffer allocation.
    ///
    /// Decoded units are staged in a buffer of at most this many entries and
    /// moved into a list of finished chunks whenever it fills. The value only
    /// affects allocation sizes, never the decoded output. Values below 2 are
    /// raised to 2 so a surrogate pair always fits.
    ///
    /// # Default
    ///
    /// [`DEFAULT_CHUNK_CAPACITY`] (65 536)
    pub chunk_capacity: usize,

    #[cfg(any(test, feature = "fuzzing"))]
    #[cfg_attr(feature = "serde", serde(skip))]
    /// Decode one byte at a time, skipping the bulk ASCII copy.
    ///
    /// Enabled only in test and fuzzing builds to cross-check the fast path.
    pub scalar_only: bool,
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            truncated: TruncatedSequence::default(),
            chunk_capacity: DEFAULT_CHUNK_CAPACITY,
            #[cfg(any(test, feature = "fuzzing"))]
            scalar_only: false,
        }
    }
}

/// Configuration options for [`TextEncoder`](crate::TextEncoder).
///
/// # Default
///
/// Lone low surrogates are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EncoderOptions {
    /// Treatment of a low surrogate with no preceding high surrogate.
    ///
    /// Unpaired high surrogates are always replaced with U+FFFD.
    ///
    /// # Default
    ///
    /// [`LoneSurrogate::Preserve`]
    pub lone_low_surrogate: LoneSurrogate,
}
