use alloc::vec::Vec;

use quickcheck::QuickCheck;

use super::{arbitrary::Utf8ish, quickcheck_tests};
use crate::{DecoderOptions, TruncatedSequence, decoder::decode_with};

/// Property: the size of the decoder's working buffer never shows in its
/// output, whatever the input and truncation policy.
#[test]
fn chunk_capacity_never_changes_output() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Utf8ish, capacity: u8, truncated: TruncatedSequence) -> bool {
        let one_pass = DecoderOptions {
            truncated,
            chunk_capacity: usize::MAX,
            ..Default::default()
        };
        let chunked = DecoderOptions {
            truncated,
            chunk_capacity: usize::from(capacity),
            ..Default::default()
        };
        decode_with(&bytes.0, &chunked) == decode_with(&bytes.0, &one_pass)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Utf8ish, u8, TruncatedSequence) -> bool);
}

/// Property: the bulk ASCII copy and the byte-at-a-time walk agree on
/// arbitrary bytes.
#[test]
fn bulk_ascii_matches_scalar_walk() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>, capacity: u8, truncated: TruncatedSequence) -> bool {
        let bulk = DecoderOptions {
            truncated,
            chunk_capacity: usize::from(capacity),
            ..Default::default()
        };
        let scalar = DecoderOptions {
            scalar_only: true,
            ..bulk
        };
        decode_with(&bytes, &bulk) == decode_with(&bytes, &scalar)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>, u8, TruncatedSequence) -> bool);
}

/// Property: with truncated tails discarded, UTF-8 never yields more code
/// units than it has bytes.
#[test]
fn discarding_decode_is_never_longer_than_input() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Utf8ish) -> bool {
        decode_with(&bytes.0, &DecoderOptions::default()).len() <= bytes.0.len()
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Utf8ish) -> bool);
}
