//! Criterion benchmarks for convex decomposition.
//! Focus sizes: n in {8, 16, 32, 64, 128} vertices (random star polygons).
//! Results: by default under target/criterion.

use bayazit::api::{draw_star_radial, DecompCfg, Decomposer, PolygonReplay, RadialCfg, VertexCount};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn star(n: usize, seed: u64) -> bayazit::Polygon {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    let mut index = 0;
    loop {
        if let Some(p) = draw_star_radial(cfg, PolygonReplay { seed, index }) {
            return p;
        }
        index += 1;
    }
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");
    let capped = Decomposer::default();
    let uncapped = Decomposer::new(DecompCfg {
        max_vertices: usize::MAX,
        ..DecompCfg::default()
    })
    .unwrap();
    for &n in &[8usize, 16, 32, 64, 128] {
        group.bench_with_input(BenchmarkId::new("star_cap8", n), &n, |b, &n| {
            b.iter_batched(
                || star(n, 42),
                |p| {
                    let _parts = capped.decompose_polygon(&p).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("star_uncapped", n), &n, |b, &n| {
            b.iter_batched(
                || star(n, 43),
                |p| {
                    let _parts = uncapped.decompose_polygon(&p).unwrap();
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_decompose);
criterion_main!(benches);
