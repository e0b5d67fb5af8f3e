use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use island_core::{build_edge_mesh, generate_seeded, IslandConfig};

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for size in [32u32, 64, 100, 200] {
        group.bench_with_input(BenchmarkId::new("grid", size), &size, |b, &size| {
            b.iter_batched(
                || IslandConfig {
                    size,
                    seed: Some(0xC0FFEE),
                    ..IslandConfig::default()
                },
                |config| generate_seeded(&config).expect("bench config is valid"),
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_edge_mesh(c: &mut Criterion) {
    let config = IslandConfig {
        size: 200,
        seed: Some(7),
        ..IslandConfig::default()
    };
    let result = generate_seeded(&config).expect("bench config is valid");
    c.bench_function("edge_mesh/200", |b| b.iter(|| build_edge_mesh(&result.grid)));
}

criterion_group!(generate_benches, bench_generate, bench_edge_mesh);
criterion_main!(generate_benches);
