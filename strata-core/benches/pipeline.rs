use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use strata_core::{analyze, decompose, DiGraph, PipelineOptions};

/// Deterministic pseudo-random edges: a spine of small rings plus
/// forward shortcuts, so the graph has many nontrivial components.
fn build_graph(node_count: u64, fanout: u64) -> DiGraph<u64> {
    let mut graph = DiGraph::new();
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;

    for v in 0..node_count {
        // Rings of 8.
        let ring_start = v - v % 8;
        let next = ring_start + (v + 1 - ring_start) % 8;
        if next < node_count {
            graph.add_edge(v, next);
        }

        for _ in 0..fanout {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let target = v + 1 + state % 64;
            if target < node_count {
                graph.add_edge(v, target);
            }
        }
    }

    graph
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for &size in &[1_000u64, 10_000, 100_000] {
        let graph = build_graph(size, 2);

        group.bench_with_input(BenchmarkId::new("decompose", size), &graph, |b, g| {
            b.iter(|| black_box(decompose(black_box(g))))
        });

        let options = PipelineOptions::default();
        group.bench_with_input(BenchmarkId::new("analyze", size), &graph, |b, g| {
            b.iter(|| black_box(analyze(black_box(g), &options).map(|a| a.order().len())))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
