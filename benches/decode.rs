//! benches/decode.rs
//! Decode latency — dominated by the 32 768-round domain derivation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sesam_crypter::aliases::Kgk64;
use sesam_crypter::{decode, encode_with_password, SecretBuffer};
use std::hint::black_box;
use std::time::Duration;

const KB: usize = 1024;

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");
    group.measurement_time(Duration::from_secs(10));
    group.sample_size(20);

    let password = SecretBuffer::from("benchmark-password");
    let kgk = Kgk64::new([0x33; 64]);

    for &size in &[KB, 256 * KB] {
        let input = vec![0x41u8; size];
        let blob = encode_with_password(&password, &kgk, &input, false).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("size", size), &blob, |b, blob| {
            b.iter(|| black_box(decode(black_box(&password), black_box(blob), false).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode);
criterion_main!(benches);
