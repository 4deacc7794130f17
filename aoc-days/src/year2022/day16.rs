//! Day 16: Proboscidea Volcanium.

use anyhow::{Context, anyhow};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use aoc_search::{BitSet, DistanceTable, MaxYieldSearch, NodeInterner, Objective};
use rayon::prelude::*;

/// Valve network condensed for searching: all-pairs tunnel distances, the
/// positive-rate valves as objectives, and the starting valve's node id.
pub struct Network {
    distances: DistanceTable,
    objectives: Vec<Objective>,
    start: usize,
}

fn parse_valve(line: &str) -> anyhow::Result<(&str, u64, Vec<&str>)> {
    // "Valve BB has flow rate=13; tunnels lead to valves CC, AA"
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 10 {
        return Err(anyhow!("truncated valve line: {line:?}"));
    }
    let name = tokens[1];
    let rate = tokens[4]
        .strip_prefix("rate=")
        .and_then(|s| s.strip_suffix(';'))
        .ok_or_else(|| anyhow!("bad flow rate in {line:?}"))?
        .parse()
        .with_context(|| format!("bad flow rate in {line:?}"))?;
    let next = tokens[9..]
        .iter()
        .map(|s| s.trim_end_matches(','))
        .collect();
    Ok((name, rate, next))
}

pub struct Day16;

impl InputParser for Day16 {
    type Data<'a> = Network;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        let mut interner = NodeInterner::new();
        let mut rates: Vec<(usize, u64)> = Vec::new();
        let mut edges: Vec<(usize, Vec<usize>)> = Vec::new();

        for line in input.lines().filter(|l| !l.is_empty()) {
            let (name, rate, next) =
                parse_valve(line).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
            let id = interner.intern(name);
            rates.push((id, rate));
            edges.push((id, next.iter().map(|n| interner.intern(n)).collect()));
        }

        let n = interner.len();
        let mut adjacency = vec![Vec::new(); n];
        for (id, next) in edges {
            adjacency[id] = next;
        }

        let objectives = rates
            .iter()
            .filter(|&&(_, rate)| rate > 0)
            .map(|&(node, rate)| Objective { node, rate })
            .collect::<Vec<_>>();
        if objectives.len() > 32 {
            return Err(ParseError::InvalidFormat(format!(
                "too many working valves: {}",
                objectives.len()
            )));
        }

        let start = interner
            .get("AA")
            .ok_or_else(|| ParseError::MissingData("no valve AA".into()))?;

        Ok(Network {
            distances: DistanceTable::from_adjacency(&adjacency),
            objectives,
            start,
        })
    }
}

impl Solver for Day16 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let search = MaxYieldSearch::new(&data.distances, &data.objectives);
        let n = data.objectives.len();

        if part == 1 {
            Ok(search.run(data.start, 30, BitSet::universe(n)).into())
        } else {
            // Split the valves between the two workers every possible way.
            // Subsets missing the last valve enumerate each unordered
            // partition exactly once; each worker searches independently.
            let universe = BitSet::universe(n);
            let best = BitSet::subsets(n.saturating_sub(1))
                .collect::<Vec<_>>()
                .into_par_iter()
                .map(|mine| {
                    let elephant = mine.complement_in(universe);
                    search.run(data.start, 26, mine) + search.run(data.start, 26, elephant)
                })
                .max()
                .unwrap_or(0);
            Ok(best.into())
        }
    }
}
