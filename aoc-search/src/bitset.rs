//! Fixed-width flag sets used as memoization-key components.

/// A set of up to 32 boolean flags packed into a `u32`.
///
/// Cheap to copy, hash, and compare, which is what memo tables keyed on
/// "which objectives are already enabled" need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct BitSet(u32);

impl BitSet {
    pub const EMPTY: BitSet = BitSet(0);

    /// The set containing flags `0..n`.
    pub fn universe(n: usize) -> Self {
        debug_assert!(n <= 32);
        if n == 32 { BitSet(u32::MAX) } else { BitSet((1 << n) - 1) }
    }

    pub fn contains(self, flag: usize) -> bool {
        (self.0 >> flag) & 1 == 1
    }

    /// A copy of the set with `flag` added.
    #[must_use]
    pub fn with(self, flag: usize) -> Self {
        BitSet(self.0 | (1 << flag))
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Members of `universe` not in this set.
    #[must_use]
    pub fn complement_in(self, universe: BitSet) -> Self {
        BitSet(universe.0 & !self.0)
    }

    /// Flags present in the set, in ascending order.
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..32).filter(move |&flag| self.contains(flag))
    }

    /// Every subset of the flag universe `0..n`, including the empty set and
    /// the universe itself.
    pub fn subsets(n: usize) -> impl Iterator<Item = BitSet> {
        debug_assert!(n < 32);
        (0u32..(1 << n)).map(BitSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_query() {
        let set = BitSet::EMPTY.with(0).with(5);
        assert!(set.contains(0));
        assert!(set.contains(5));
        assert!(!set.contains(1));
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 5]);
    }

    #[test]
    fn complement_within_universe() {
        let universe = BitSet::universe(4);
        let set = BitSet::EMPTY.with(1).with(3);
        let rest = set.complement_in(universe);
        assert_eq!(rest.iter().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(set.len() + rest.len(), universe.len());
    }

    #[test]
    fn subset_enumeration_is_complete() {
        let subsets: Vec<_> = BitSet::subsets(3).collect();
        assert_eq!(subsets.len(), 8);
        assert_eq!(subsets[0], BitSet::EMPTY);
        assert_eq!(subsets[7], BitSet::universe(3));
    }
}
