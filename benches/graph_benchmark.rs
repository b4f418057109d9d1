use criterion::{black_box, criterion_group, criterion_main, Criterion};
use routegraph::{AdjListGraph, AdjMatrixGraph, GraphConfig};

fn labels(n: usize) -> impl Iterator<Item = String> {
    (1..=n).map(|i| format!("v{i}"))
}

fn bench_all_pairs_dijkstra(c: &mut Criterion) {
    let size = 100;
    // Chain plus skip edges: i -> i+1 (1), i -> i+7 (5)
    let mut edges = Vec::new();
    for i in 1..size as i64 {
        edges.push((i, i + 1, 1));
        if i + 7 <= size as i64 {
            edges.push((i, i + 7, 5));
        }
    }

    c.bench_function("matrix_all_pairs_dijkstra_100", |b| {
        let mut graph: AdjMatrixGraph<String> =
            AdjMatrixGraph::from_parts(size as i64, &mut labels(size), edges.clone(), GraphConfig::default())
                .unwrap();
        b.iter(|| {
            graph.find_shortest_path();
            black_box(graph.distance(1, size));
        });
    });
}

fn bench_depth_first_search(c: &mut Criterion) {
    let size = 1000;
    let mut edges = Vec::new();
    for i in 1..size as i64 {
        edges.push((i, i + 1));
        edges.push((i + 1, (i * 31) % size as i64 + 1));
    }
    let graph: AdjListGraph<String> = AdjListGraph::from_parts(size as i64, &mut labels(size), edges).unwrap();

    c.bench_function("list_depth_first_search_1000", |b| {
        b.iter(|| black_box(graph.depth_first_search().unwrap().len()));
    });
}

criterion_group!(benches, bench_all_pairs_dijkstra, bench_depth_first_search);
criterion_main!(benches);
