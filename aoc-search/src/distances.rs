//! All-pairs shortest distances over a small explicit node set.

use rustc_hash::FxHashMap;

/// Assigns small dense integer ids to opaque string tokens, so graphs parsed
/// from named nodes can index flat tables.
#[derive(Debug, Default)]
pub struct NodeInterner {
    ids: FxHashMap<String, usize>,
}

impl NodeInterner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The id for `name`, allocating the next dense id on first sight.
    pub fn intern(&mut self, name: &str) -> usize {
        let next = self.ids.len();
        *self.ids.entry(name.to_owned()).or_insert(next)
    }

    /// The id previously assigned to `name`, if any.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Exact shortest-path distance between every ordered pair of nodes, where
/// direct edges cost 1. Built once, read-only afterwards; a `None` entry
/// means the pair is unreachable.
#[derive(Debug, Clone)]
pub struct DistanceTable {
    n: usize,
    dist: Vec<Option<u32>>,
}

impl DistanceTable {
    /// Close the adjacency lists under the Floyd–Warshall relaxation:
    /// for every intermediate k, dist(i,j) = min(dist(i,j), dist(i,k) +
    /// dist(k,j)). Unknown distances are infinity and are skipped, never
    /// read as zero. After processing intermediate k, all paths using only
    /// the first k nodes as intermediates are exact.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Self {
        let n = adjacency.len();
        let mut dist = vec![None; n * n];

        for (i, next) in adjacency.iter().enumerate() {
            dist[i * n + i] = Some(0);
            for &j in next {
                dist[i * n + j] = Some(1);
            }
        }

        for k in 0..n {
            for i in 0..n {
                let Some(d_ik) = dist[i * n + k] else { continue };
                for j in 0..n {
                    let Some(d_kj) = dist[k * n + j] else { continue };
                    let via_k = d_ik + d_kj;
                    if dist[i * n + j].is_none_or(|d| d > via_k) {
                        dist[i * n + j] = Some(via_k);
                    }
                }
            }
        }

        Self { n, dist }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Shortest distance from `i` to `j`, or `None` if unreachable.
    pub fn get(&self, i: usize, j: usize) -> Option<u32> {
        self.dist[i * self.n + j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interner_assigns_dense_ids() {
        let mut interner = NodeInterner::new();
        let a = interner.intern("AA");
        let b = interner.intern("BB");
        assert_eq!((a, b), (0, 1));
        assert_eq!(interner.intern("AA"), 0);
        assert_eq!(interner.get("BB"), Some(1));
        assert_eq!(interner.get("CC"), None);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn path_graph_distances() {
        // 0 - 1 - 2 - 3, undirected
        let adjacency = vec![vec![1], vec![0, 2], vec![1, 3], vec![2]];
        let table = DistanceTable::from_adjacency(&adjacency);
        assert_eq!(table.get(0, 0), Some(0));
        assert_eq!(table.get(0, 3), Some(3));
        assert_eq!(table.get(3, 1), Some(2));
    }

    #[test]
    fn disconnected_pairs_stay_unreachable() {
        let adjacency = vec![vec![1], vec![0], vec![]];
        let table = DistanceTable::from_adjacency(&adjacency);
        assert_eq!(table.get(0, 1), Some(1));
        assert_eq!(table.get(0, 2), None);
        assert_eq!(table.get(2, 0), None);
    }

    #[test]
    fn relaxation_finds_shortcuts() {
        // Direct edge 0 -> 3 missing; path through 1 and 2 exists, and a
        // direct edge 1 -> 3 shortcuts it.
        let adjacency = vec![vec![1], vec![2, 3], vec![3], vec![]];
        let table = DistanceTable::from_adjacency(&adjacency);
        assert_eq!(table.get(0, 3), Some(2));
    }
}
