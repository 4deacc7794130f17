use criterion::{Criterion, black_box, criterion_group, criterion_main};

use aoc_search::{BitSet, DistanceTable, MaxYieldSearch, Objective, bfs_distance};

/// 64x64 open grid, 4-connected.
fn grid_neighbors(&(r, c): &(i32, i32)) -> Vec<(i32, i32)> {
    [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]
        .into_iter()
        .filter(|&(r, c)| (0..64).contains(&r) && (0..64).contains(&c))
        .collect()
}

/// Ring of `n` nodes with a few chords.
fn ring_adjacency(n: usize) -> Vec<Vec<usize>> {
    (0..n)
        .map(|i| {
            let mut next = vec![(i + 1) % n, (i + n - 1) % n];
            if i % 7 == 0 {
                next.push((i + n / 2) % n);
            }
            next
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("bfs_grid_64x64", |b| {
        b.iter(|| bfs_distance(black_box((0, 0)), grid_neighbors, |&p| p == (63, 63)))
    });

    c.bench_function("floyd_warshall_64", |b| {
        let adj = ring_adjacency(64);
        b.iter(|| DistanceTable::from_adjacency(black_box(&adj)))
    });

    c.bench_function("max_yield_15_objectives", |b| {
        let table = DistanceTable::from_adjacency(&ring_adjacency(60));
        let objectives: Vec<Objective> = (0..15)
            .map(|i| Objective { node: i * 4, rate: (i as u64 * 7) % 23 + 1 })
            .collect();
        let search = MaxYieldSearch::new(&table, &objectives);
        b.iter(|| search.run(black_box(0), 30, BitSet::universe(15)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
