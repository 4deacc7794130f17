//! Day 19: Not Enough Minerals.

use anyhow::{Context, anyhow};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use aoc_search::branch_and_bound;
use rayon::prelude::*;

const ORE: usize = 0;
const CLAY: usize = 1;
const OBSIDIAN: usize = 2;
const GEODE: usize = 3;

#[derive(Debug, Clone)]
pub struct Blueprint {
    id: u64,
    /// Cost of each robot type, indexed robot then resource.
    robots: [[u32; 4]; 4],
}

impl Blueprint {
    /// Per resource, the largest amount any single robot costs. More robots
    /// than that for a resource can never pay off, since only one robot is
    /// built per minute.
    fn cost_bound(&self) -> [u32; 4] {
        let mut bound = [0; 4];
        for cost in &self.robots {
            for (resource, &amount) in cost.iter().enumerate() {
                bound[resource] = bound[resource].max(amount);
            }
        }
        bound[GEODE] = u32::MAX;
        bound
    }
}

fn ceil_div(x: u32, y: u32) -> u32 {
    x.div_ceil(y)
}

/// Search state: time left plus robot and resource counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct State {
    minutes: u32,
    robots: [u32; 4],
    resources: [u32; 4],
}

fn max_geodes(bp: &Blueprint, init_minutes: u32) -> u64 {
    let cost_bound = bp.cost_bound();
    let init = State {
        minutes: init_minutes,
        robots: [1, 0, 0, 0],
        resources: [0; 4],
    };

    // Banked geodes if we idle out the clock from this state.
    let value =
        |s: &State| u64::from(s.resources[GEODE]) + u64::from(s.robots[GEODE] * s.minutes);

    branch_and_bound(
        init,
        |state: &State, buf: &mut Vec<State>| {
            for (robot_type, cost) in bp.robots.iter().enumerate() {
                if state.robots[robot_type] >= cost_bound[robot_type] {
                    continue;
                }
                // A robot for every required input must already exist.
                if cost
                    .iter()
                    .enumerate()
                    .any(|(resource, &needed)| needed > 0 && state.robots[resource] == 0)
                {
                    continue;
                }

                let wait_time = cost
                    .iter()
                    .enumerate()
                    .filter(|&(resource, &needed)| state.resources[resource] < needed)
                    .map(|(resource, &needed)| {
                        ceil_div(needed - state.resources[resource], state.robots[resource])
                    })
                    .max()
                    .unwrap_or(0);
                if wait_time >= state.minutes {
                    continue;
                }

                let mut resources = [0; 4];
                for resource in 0..4 {
                    resources[resource] = state.resources[resource]
                        + state.robots[resource] * (wait_time + 1)
                        - cost[resource];
                }
                let mut robots = state.robots;
                robots[robot_type] += 1;

                buf.push(State {
                    minutes: state.minutes - wait_time - 1,
                    robots,
                    resources,
                });
            }
        },
        value,
        // Optimistic: a new geode robot every remaining minute.
        |s: &State| value(s) + u64::from((s.minutes + 1) * s.minutes / 2),
    )
}

fn parse_blueprint(line: &str) -> anyhow::Result<Blueprint> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 32 {
        return Err(anyhow!("truncated blueprint: {line:?}"));
    }
    let field = |i: usize| -> anyhow::Result<u32> {
        tokens[i]
            .trim_end_matches(':')
            .parse()
            .with_context(|| format!("bad blueprint field {:?}", tokens[i]))
    };

    let mut robots = [[0; 4]; 4];
    robots[ORE][ORE] = field(6)?;
    robots[CLAY][ORE] = field(12)?;
    robots[OBSIDIAN][ORE] = field(18)?;
    robots[OBSIDIAN][CLAY] = field(21)?;
    robots[GEODE][ORE] = field(27)?;
    robots[GEODE][OBSIDIAN] = field(30)?;

    Ok(Blueprint {
        id: u64::from(field(1)?),
        robots,
    })
}

pub struct Day19;

impl InputParser for Day19 {
    type Data<'a> = Vec<Blueprint>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(parse_blueprint)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day19 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        if part == 1 {
            let total: u64 = data
                .par_iter()
                .map(|bp| bp.id * max_geodes(bp, 24))
                .sum();
            Ok(total.into())
        } else {
            let product: u64 = data[..data.len().min(3)]
                .par_iter()
                .map(|bp| max_geodes(bp, 32))
                .product();
            Ok(product.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. Each obsidian robot costs 3 ore and 14 clay. Each geode robot costs 2 ore and 7 obsidian.
        Blueprint 2: Each ore robot costs 2 ore. Each clay robot costs 3 ore. Each obsidian robot costs 3 ore and 8 clay. Each geode robot costs 3 ore and 12 obsidian.
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day19::parse(SAMPLE).unwrap();
        assert_eq!(Day19::solve_part(&mut data, 1).unwrap(), Answer::Int(33));
    }

    #[test]
    fn blueprint_one_best_is_nine() {
        let data = Day19::parse(SAMPLE).unwrap();
        assert_eq!(max_geodes(&data[0], 24), 9);
    }

    #[test]
    fn part2_uses_longer_clock() {
        let data = Day19::parse(SAMPLE).unwrap();
        assert_eq!(max_geodes(&data[0], 32), 56);
    }
}
