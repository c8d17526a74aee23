use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ieee_specials::{classify32, classify64, CategorySet};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SAMPLES: usize = 4096;

fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let bits64: Vec<u64> = (0..SAMPLES).map(|_| rng.gen()).collect();
    let bits32: Vec<u32> = (0..SAMPLES).map(|_| rng.gen()).collect();

    c.bench_function("classify64", |b| {
        b.iter(|| {
            for &bits in &bits64 {
                black_box(classify64(black_box(bits)));
            }
        })
    });

    c.bench_function("classify32", |b| {
        b.iter(|| {
            for &bits in &bits32 {
                black_box(classify32(black_box(bits)));
            }
        })
    });

    c.bench_function("nan_mask", |b| {
        b.iter(|| {
            bits64
                .iter()
                .filter(|&&bits| CategorySet::NAN.contains(classify64(bits)))
                .count()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
