#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textcodec::{
    DecoderOptions, EncoderOptions, LoneSurrogate, TextDecoder, TextEncoder, TruncatedSequence,
};

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    zero_fill: bool,
    replace_lone_low: bool,
    chunk_capacity: u16,
    data: &'a [u8],
}

fn codec(input: Input<'_>) {
    let Input {
        zero_fill,
        replace_lone_low,
        chunk_capacity,
        data,
    } = input;
    let chunk_capacity = usize::from(chunk_capacity);

    let truncated = if zero_fill {
        TruncatedSequence::ZeroFill
    } else {
        TruncatedSequence::Discard
    };
    let lone_low_surrogate = if replace_lone_low {
        LoneSurrogate::Replace
    } else {
        LoneSurrogate::Preserve
    };

    let decoder_with = |chunk_capacity, scalar_only| {
        TextDecoder::with_options(
            "utf-8",
            DecoderOptions {
                truncated,
                chunk_capacity,
                scalar_only,
            },
        )
        .expect("utf-8 is a valid label")
    };

    // The working-buffer size and the bulk ASCII path must never show.
    let reference = decoder_with(usize::MAX, true).decode(data);
    assert_eq!(decoder_with(chunk_capacity, false).decode(data), reference);
    assert_eq!(decoder_with(chunk_capacity, true).decode(data), reference);

    // Valid UTF-8 must decode exactly like std.
    if let Ok(text) = std::str::from_utf8(data) {
        assert_eq!(reference, text.encode_utf16().collect::<Vec<_>>());
    }

    // Reinterpret the bytes as UTF-16LE code units and encode them.
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let encoder = TextEncoder::with_options(EncoderOptions { lone_low_surrogate });
    let encoded = encoder.encode(&units);
    assert!(encoded.len() <= units.len() * 3);

    match lone_low_surrogate {
        // Strict output is exactly what std produces after lossy conversion.
        LoneSurrogate::Replace => {
            assert_eq!(encoded, String::from_utf16_lossy(&units).into_bytes());
        }
        // Well-formed input must survive the round trip untouched.
        LoneSurrogate::Preserve => {
            if String::from_utf16(&units).is_ok() {
                assert_eq!(decoder_with(chunk_capacity, false).decode(&encoded), units);
            }
        }
    }
}

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = Input::arbitrary_take_rest(arbitrary::Unstructured::new(data)) {
        codec(input);
    }
});
