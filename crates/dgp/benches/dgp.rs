use criterion::{criterion_group, criterion_main, Criterion};
use ndarray_rand::rand::SeedableRng;
use npreg_dgp::{UnivariateFanGijbels1, UnivariateFanGijbels1EU, UnivariateFanGijbels2};
use rand_xoshiro::Xoshiro256Plus;

fn criterion_dgp(c: &mut Criterion) {
    let sizes = [200, 10_000];

    let mut group = c.benchmark_group("dgp");
    group.sample_size(10);
    let rng = Xoshiro256Plus::seed_from_u64(42);
    for size in sizes {
        group.bench_function(format!("fg1-{size}-nobs"), |b| {
            let params = UnivariateFanGijbels1::<f64>::params().nobs(size);
            b.iter(|| {
                std::hint::black_box(params.generate_with_rng(&mut rng.clone()).expect("fg1"))
            });
        });
        group.bench_function(format!("fg2-{size}-nobs"), |b| {
            let params = UnivariateFanGijbels2::<f64>::params().nobs(size);
            b.iter(|| {
                std::hint::black_box(params.generate_with_rng(&mut rng.clone()).expect("fg2"))
            });
        });
        group.bench_function(format!("fg1eu-{size}-nobs"), |b| {
            let params = UnivariateFanGijbels1EU::<f64>::params().nobs(size);
            b.iter(|| {
                std::hint::black_box(params.generate_with_rng(&mut rng.clone()).expect("fg1eu"))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_dgp);
criterion_main!(benches);
