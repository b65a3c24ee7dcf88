use cryptal_sha2::Sha256;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sha2::Digest;
use std::hint::black_box;

pub fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha256");

    for len in [64usize, 1024, 16 * 1024] {
        let data = vec![0u8; len];
        group.throughput(Throughput::Bytes(len as u64));

        group.bench_with_input(BenchmarkId::new("cryptal", len), &data, |b, data| {
            b.iter(|| Sha256::hash(black_box(data)))
        });

        group.bench_with_input(BenchmarkId::new("sha2", len), &data, |b, data| {
            b.iter(|| {
                let mut hasher = sha2::Sha256::new();
                hasher.update(black_box(data));
                hasher.finalize()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha256);
criterion_main!(benches);
