//! Criterion benchmarks for face discovery and queries on square grids.
//! Sizes: n in {8, 32, 64} (n x n cells).

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use facegraph::{Dcel, FaceId, FaceLocator};
use geo::Coord;
use rand::{Rng, SeedableRng, rngs::StdRng};

fn grid(n: usize) -> (Vec<[f64; 2]>, Vec<[usize; 2]>) {
    let index = |x: usize, y: usize| y * (n + 1) + x;
    let mut vertices = Vec::with_capacity((n + 1) * (n + 1));
    let mut edges = Vec::with_capacity(2 * n * (n + 1));
    for y in 0..=n {
        for x in 0..=n {
            vertices.push([x as f64, y as f64]);
            if x < n { edges.push([index(x, y), index(x + 1, y)]) }
            if y < n { edges.push([index(x, y), index(x, y + 1)]) }
        }
    }
    (vertices, edges)
}

fn random_points(n: usize, count: usize, seed: u64) -> Vec<Coord<f64>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Coord { x: rng.random_range(0.0..n as f64), y: rng.random_range(0.0..n as f64) })
        .collect()
}

fn bench_faces(c: &mut Criterion) {
    let mut group = c.benchmark_group("faces");
    for &n in &[8usize, 32, 64] {
        let (vertices, edges) = grid(n);

        group.bench_with_input(BenchmarkId::new("discover", n), &n, |b, _| {
            b.iter(|| Dcel::from_vertices_and_edges(&vertices, &edges).unwrap())
        });

        let dcel = Dcel::from_vertices_and_edges(&vertices, &edges).unwrap();
        let points = random_points(n, 256, 7);

        group.bench_with_input(BenchmarkId::new("locate_scan", n), &n, |b, _| {
            b.iter(|| points.iter().filter_map(|&p| dcel.locate(p)).count())
        });

        let locator = FaceLocator::new(&dcel);
        group.bench_with_input(BenchmarkId::new("locate_rtree", n), &n, |b, _| {
            b.iter(|| points.iter().filter_map(|&p| locator.locate(&dcel, p)).count())
        });

        group.bench_with_input(BenchmarkId::new("neighbor_layers", n), &n, |b, _| {
            b.iter(|| dcel.neighbor_layers(FaceId(0)).len())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_faces);
criterion_main!(benches);
