//! Search primitives shared by the puzzle solvers.
//!
//! The puzzles mostly reduce to a handful of recurring search patterns over
//! small implicit graphs, and this crate carries those patterns so the day
//! modules only contribute domain rules:
//!
//! - [`bfs_distance`] / [`flood_fill`]: unweighted shortest path and
//!   reachability over implicit graphs, with closure-injected neighbor and
//!   goal functions
//! - [`DistanceTable`]: all-pairs shortest distances over a small explicit
//!   node set (Floyd–Warshall closure)
//! - [`MaxYieldSearch`] / [`branch_and_bound`]: bounded state-space searches
//!   with memoization and branch-and-bound pruning
//! - [`PeriodicSim`] / [`simulate_with_folding`]: cycle detection by state
//!   fingerprinting, fast-forwarding over whole periods
//!
//! Everything here is pure and synchronous; all tables live for a single
//! search invocation. Parallel callers give each worker its own search.

mod bfs;
mod bitset;
mod bounded;
mod cycle;
mod distances;
mod vec2;

pub use bfs::{bfs_distance, flood_fill};
pub use bitset::BitSet;
pub use bounded::{MaxYieldSearch, Objective, branch_and_bound};
pub use cycle::{PeriodicSim, simulate_with_folding};
pub use distances::{DistanceTable, NodeInterner};
pub use vec2::{CARDINAL, COMPASS, Grid, HEADINGS, Vec2, rotate_heading};
