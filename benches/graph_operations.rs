use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use value_graph::Graph;

fn ring(n: u32) -> Graph<u32> {
    let mut graph: Graph<u32> = (0..n).collect();
    for i in 0..n {
        graph.connect(&i, &((i + 1) % n)).unwrap();
    }
    graph
}

fn random(n: u32, edges: usize, seed: u64) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph: Graph<u32> = (0..n).collect();
    for _ in 0..edges {
        let a = rng.random_range(0..n);
        let b = rng.random_range(0..n);
        graph.connect(&a, &b).unwrap();
    }
    graph
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_path");
    for n in [100u32, 1_000, 10_000] {
        let mut graph = ring(n);
        group.bench_with_input(BenchmarkId::new("ring_opposite", n), &n, |b, &n| {
            b.iter(|| black_box(graph.shortest_path(&0, &(n / 2))))
        });

        let mut graph = random(n, n as usize * 3, 7);
        group.bench_with_input(BenchmarkId::new("random", n), &n, |b, &n| {
            b.iter(|| black_box(graph.shortest_path(&0, &(n - 1))))
        });
    }
    group.finish();

    let graph = random(1_000, 3_000, 11);
    c.bench_function("deep_copy_1000", |b| b.iter(|| black_box(graph.clone())));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
