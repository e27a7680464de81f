//! Criterion micro-benchmarks for encode, decode, and the container codec.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use gyre_bench::{reference_message, stress_message};
use gyre_cipher::gravity;
use gyre_container::{encode_to_string, parse_envelope, Envelope};
use gyre_core::Strength;

/// Benchmark: encode the 10K reference message at every strength.
fn bench_encode_reference(c: &mut Criterion) {
    let msg = reference_message(42);
    let mut group = c.benchmark_group("encode_10k");
    for strength in Strength::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(strength), &strength, |b, &s| {
            b.iter(|| black_box(gravity::encode(&msg, s).unwrap()));
        });
    }
    group.finish();
}

/// Benchmark: decode the 10K reference ciphertext at extreme strength.
fn bench_decode_reference(c: &mut Criterion) {
    let msg = reference_message(42);
    let encoded = gravity::encode(&msg, Strength::Extreme).unwrap();

    c.bench_function("decode_10k_extreme", |b| {
        b.iter(|| {
            black_box(
                gravity::decode(&encoded.ciphertext, encoded.tiers, Strength::Extreme).unwrap(),
            )
        });
    });
}

/// Benchmark: encode then decode the ~100K stress message.
fn bench_round_trip_stress(c: &mut Criterion) {
    let msg = stress_message(42);

    c.bench_function("round_trip_100k_strong", |b| {
        b.iter(|| {
            let encoded = gravity::encode(&msg, Strength::Strong).unwrap();
            black_box(
                gravity::decode(&encoded.ciphertext, encoded.tiers, Strength::Strong).unwrap(),
            )
        });
    });
}

/// Benchmark: render and parse a 10K container, checksum included.
fn bench_container_codec(c: &mut Criterion) {
    let envelope = Envelope::seal(&reference_message(42), Strength::Extreme).unwrap();
    let text = encode_to_string(&envelope).unwrap();

    c.bench_function("container_write_10k", |b| {
        b.iter(|| black_box(encode_to_string(&envelope).unwrap()));
    });
    c.bench_function("container_parse_10k", |b| {
        b.iter(|| black_box(parse_envelope(&text).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_encode_reference,
    bench_decode_reference,
    bench_round_trip_stress,
    bench_container_codec
);
criterion_main!(benches);
