use criterion::{black_box, criterion_group, criterion_main, Criterion};
use detecta_stats::quantile::probit;

fn random_unit(n: usize, seed: u64) -> Vec<f64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 11) as f64 / (1u64 << 53) as f64
        })
        .collect()
}

fn bench_probit(c: &mut Criterion) {
    let mut group = c.benchmark_group("probit");

    let probs = random_unit(100_000, 42);
    group.bench_function("100k_values", |b| {
        b.iter(|| {
            probs
                .iter()
                .map(|&p| probit(black_box(p)))
                .filter(|z| z.is_finite())
                .sum::<f64>()
        })
    });

    // Tail-heavy input exercises the sqrt(-2 ln p) branch.
    let tails: Vec<f64> = probs.iter().map(|p| p * 0.02).collect();
    group.bench_function("100k_lower_tail", |b| {
        b.iter(|| tails.iter().map(|&p| probit(black_box(p))).sum::<f64>())
    });

    group.finish();
}

criterion_group!(benches, bench_probit);
criterion_main!(benches);
