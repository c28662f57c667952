use borepack::entities::CircleSpec;
use borepack::placement;
use borepack::search::{min_bound, pack, processing_order};
use borepack::util::PackConfig;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

criterion_main!(benches);
criterion_group!(benches, search_bench, attempt_bench);

const N_CIRCLES: [usize; 4] = [5, 20, 50, 150];

/// Mix of cable diameters, repeated cyclically
const DIAMETERS: [f64; 5] = [0.64, 0.42, 0.25, 0.25, 0.18];

fn create_circles(n: usize) -> Vec<CircleSpec> {
    (0..n)
        .map(|i| {
            let d = DIAMETERS[i % DIAMETERS.len()];
            CircleSpec::from_diameter(format!("cable_{}", i % DIAMETERS.len()), d)
        })
        .collect()
}

/// Benchmark the complete bore search for a growing number of circles
fn search_bench(c: &mut Criterion) {
    let config = PackConfig::default();
    let mut group = c.benchmark_group("bore_search");
    group.sample_size(10);
    for n in N_CIRCLES {
        let circles = create_circles(n);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| pack(&circles, &config).expect("search exhausted"))
        });
    }
    group.finish();
}

/// Benchmark a single placement attempt in a generous bore (no fast fail)
fn attempt_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement_attempt");
    for n in N_CIRCLES {
        let circles = processing_order(&create_circles(n));
        let trial_radius = 2.0 * min_bound(&circles, 0.1);
        group.bench_function(BenchmarkId::from_parameter(n), |b| {
            b.iter(|| placement::attempt(&circles, trial_radius).expect("placement failed"))
        });
    }
    group.finish();
}
