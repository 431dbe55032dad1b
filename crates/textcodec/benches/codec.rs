//! Benchmark – `textcodec` decode and encode throughput
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use textcodec::{DecoderOptions, TextDecoder, decode, encode};

/// Produce a *deterministic* payload of exactly `target_len` bytes built by
/// repeating `unit` and padding the remainder with ASCII.
fn make_payload(unit: &str, target_len: usize) -> Vec<u8> {
    let mut s = String::with_capacity(target_len);
    while s.len() + unit.len() <= target_len {
        s.push_str(unit);
    }
    s.extend(std::iter::repeat_n('a', target_len - s.len()));
    debug_assert_eq!(s.len(), target_len);
    s.into_bytes()
}

const PAYLOADS: [(&str, &str); 3] = [
    ("ascii", "the quick brown fox jumps over the lazy dog "),
    ("latin", "ünïcödé façade déjà vu "),
    ("emoji", "😀😁😂🤣😃 "),
];

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for (name, unit) in PAYLOADS {
        let payload = make_payload(unit, 1 << 20);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::new("default", name), &payload, |b, p| {
            b.iter(|| black_box(decode(black_box(p))));
        });

        // Small working buffers: many flushes into the chunk list.
        let chunked = TextDecoder::with_options(
            "utf-8",
            DecoderOptions {
                chunk_capacity: 1_024,
                ..Default::default()
            },
        )
        .expect("utf-8 is a valid label");
        group.bench_with_input(BenchmarkId::new("chunk_1024", name), &payload, |b, p| {
            b.iter(|| black_box(chunked.decode(black_box(p))));
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for (name, unit) in PAYLOADS {
        let payload = make_payload(unit, 1 << 20);
        let units = decode(&payload);
        group.throughput(Throughput::Elements(units.len() as u64));
        group.bench_with_input(BenchmarkId::new("default", name), &units, |b, u| {
            b.iter(|| black_box(encode(black_box(u))));
        });
    }
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! { name = benches; config = criterion(); targets = bench_decode, bench_encode }
criterion_main!(benches);
