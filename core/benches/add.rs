use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use limbadd_core::{add, sum_capacity};
use limbadd_helpers::{limbs_to_biguint, operand_rng, random_limbs};

const SHAPES: [(usize, usize); 6] =
    [(64, 64), (1024, 1024), (65536, 65536), (65536, 64), (65536, 2048), (64, 65536)];

fn bench_add(c: &mut Criterion) {
    let mut rng = operand_rng(Some(0xadd));
    let mut group = c.benchmark_group("add");

    for (left_len, right_len) in SHAPES {
        let left = random_limbs(&mut rng, left_len);
        let right = random_limbs(&mut rng, right_len);
        let id = format!("{left_len}x{right_len}");
        group.throughput(Throughput::Elements(left_len.max(right_len) as u64));

        let mut out = vec![0; sum_capacity(left_len, right_len)];
        group.bench_with_input(BenchmarkId::new("limbadd", &id), &(), |b, _| {
            b.iter(|| add(black_box(&left), black_box(&right), &mut out))
        });

        let (l, r) = (limbs_to_biguint(&left), limbs_to_biguint(&right));
        group.bench_with_input(BenchmarkId::new("num-bigint", &id), &(), |b, _| {
            b.iter(|| black_box(&l) + black_box(&r))
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().significance_level(0.1).sample_size(20);
    targets = bench_add
}
criterion_main!(benches);
