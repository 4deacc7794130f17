//! Day 23: Unstable Diffusion.

use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use aoc_search::{COMPASS, Vec2};
use rustc_hash::{FxHashMap, FxHashSet};

const N: Vec2 = Vec2::new(0, -1);
const NE: Vec2 = Vec2::new(1, -1);
const E: Vec2 = Vec2::new(1, 0);
const SE: Vec2 = Vec2::new(1, 1);
const S: Vec2 = Vec2::new(0, 1);
const SW: Vec2 = Vec2::new(-1, 1);
const W: Vec2 = Vec2::new(-1, 0);
const NW: Vec2 = Vec2::new(-1, -1);

/// Checks in proposal order; the first offset of each triple is the move.
const PROPOSAL_ORDER: [[Vec2; 3]; 4] = [
    [N, NW, NE],
    [S, SW, SE],
    [W, NW, SW],
    [E, NE, SE],
];

fn propose(occupied: &FxHashSet<Vec2>, pos: Vec2, first_check: usize) -> Option<Vec2> {
    if COMPASS.iter().all(|&d| !occupied.contains(&(pos + d))) {
        return None;
    }
    (0..PROPOSAL_ORDER.len())
        .map(|i| PROPOSAL_ORDER[(first_check + i) % PROPOSAL_ORDER.len()])
        .find(|check| check.iter().all(|&d| !occupied.contains(&(pos + d))))
        .map(|check| pos + check[0])
}

/// Run the diffusion. Returns the first round in which nobody proposed a
/// move (if reached) and the final elf positions.
fn sim_elves(mut elves: Vec<Vec2>, max_rounds: Option<u32>) -> (u32, Vec<Vec2>) {
    let mut round = 1;
    while max_rounds.is_none_or(|max| round <= max) {
        let first_check = (round as usize - 1) % PROPOSAL_ORDER.len();
        let occupied: FxHashSet<Vec2> = elves.iter().copied().collect();
        let proposals: Vec<Option<Vec2>> = elves
            .iter()
            .map(|&elf| propose(&occupied, elf, first_check))
            .collect();

        let mut counts: FxHashMap<Vec2, u32> = FxHashMap::default();
        for &proposal in proposals.iter().flatten() {
            *counts.entry(proposal).or_insert(0) += 1;
        }
        if counts.is_empty() {
            break;
        }

        for (elf, proposal) in elves.iter_mut().zip(&proposals) {
            if let Some(dest) = proposal {
                if counts[dest] == 1 {
                    *elf = *dest;
                }
            }
        }
        round += 1;
    }
    (round, elves)
}

fn empty_ground(elves: &[Vec2]) -> i64 {
    let min = |f: fn(&Vec2) -> i64| elves.iter().map(f).min().unwrap_or(0);
    let max = |f: fn(&Vec2) -> i64| elves.iter().map(f).max().unwrap_or(0);
    let area = (max(|p| p.x) - min(|p| p.x) + 1) * (max(|p| p.y) - min(|p| p.y) + 1);
    area - elves.len() as i64
}

pub struct Day23;

impl InputParser for Day23 {
    type Data<'a> = Vec<Vec2>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        let elves: Vec<Vec2> = input
            .lines()
            .enumerate()
            .flat_map(|(y, line)| {
                line.chars()
                    .enumerate()
                    .filter(|&(_, c)| c == '#')
                    .map(move |(x, _)| Vec2::new(x as i64, y as i64))
            })
            .collect();
        if elves.is_empty() {
            return Err(ParseError::MissingData("no elves in the grove".into()));
        }
        Ok(elves)
    }
}

impl Solver for Day23 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        if part == 1 {
            let (_, elves) = sim_elves(data.clone(), Some(10));
            Ok(empty_ground(&elves).into())
        } else {
            let (rounds, _) = sim_elves(data.clone(), None);
            Ok(rounds.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        ....#..
        ..###.#
        #...#.#
        .#...##
        #.###..
        ##.#.##
        .#..#..
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day23::parse(SAMPLE).unwrap();
        assert_eq!(Day23::solve_part(&mut data, 1).unwrap(), Answer::Int(110));
    }

    #[test]
    fn part2_sample() {
        let mut data = Day23::parse(SAMPLE).unwrap();
        assert_eq!(Day23::solve_part(&mut data, 2).unwrap(), Answer::Int(20));
    }

    #[test]
    fn lone_elf_never_moves() {
        let (rounds, elves) = sim_elves(vec![Vec2::new(3, 3)], None);
        assert_eq!(rounds, 1);
        assert_eq!(elves, vec![Vec2::new(3, 3)]);
    }

    #[test]
    fn two_elves_split_north_and_south() {
        // Both see a neighbor; both first propose north, which only the top
        // elf can claim uncontested.
        let (_, elves) = sim_elves(vec![Vec2::new(0, 0), Vec2::new(0, 1)], Some(1));
        assert_eq!(elves, vec![Vec2::new(0, -1), Vec2::new(0, 2)]);
    }
}
