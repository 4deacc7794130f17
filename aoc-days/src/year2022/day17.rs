//! Day 17: Pyroclastic Flow.

use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use aoc_search::{PeriodicSim, simulate_with_folding};
use rustc_hash::FxHasher;
use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

const MAP_WIDTH: i64 = 7;
const ROCK_INITIAL_X: i64 = 2;
const ROCK_INITIAL_HEIGHT_OFFSET: u64 = 3;

/// Rock shapes as bottom-up rows of x-bitmasks, cycled in falling order.
const SHAPES: [(&[u8], i64); 5] = [
    (&[0b1111], 4),             // horizontal bar
    (&[0b010, 0b111, 0b010], 3), // plus
    (&[0b111, 0b100, 0b100], 3), // mirrored L
    (&[0b1, 0b1, 0b1, 0b1], 1),  // vertical bar
    (&[0b11, 0b11], 2),          // square
];

/// The chamber. Rows hold one x-bitmask each, bottom row first; everything
/// below `floor_level` has been truncated away as unreachable.
struct Tower {
    rows: Vec<u8>,
    floor_level: u64,
}

impl Tower {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            floor_level: 0,
        }
    }

    fn height(&self) -> u64 {
        self.floor_level + self.rows.len() as u64
    }

    fn collides(&self, shape: &[u8], width: i64, x: i64, y: i64) -> bool {
        if x < 0 || x + width > MAP_WIDTH || y < self.floor_level as i64 {
            return true;
        }
        shape.iter().enumerate().any(|(i, &row)| {
            let rel = (y as u64 + i as u64).saturating_sub(self.floor_level) as usize;
            rel < self.rows.len() && self.rows[rel] & (row << x) != 0
        })
    }

    fn finalize(&mut self, shape: &[u8], x: i64, y: u64) {
        let top = (y - self.floor_level) as usize + shape.len();
        if top > self.rows.len() {
            self.rows.resize(top, 0);
        }
        for (i, &row) in shape.iter().enumerate() {
            self.rows[(y - self.floor_level) as usize + i] |= row << x;
        }
        while self.rows.last() == Some(&0) {
            self.rows.pop();
        }
        self.truncate_unreachable();
    }

    /// Drop rows a falling piece can no longer reach. Reachability floods
    /// from the top row moving left, right, and down through empty cells;
    /// the new floor is the lowest row any column can still be reached at.
    fn truncate_unreachable(&mut self) {
        let len = self.rows.len();
        if len == 0 {
            return;
        }
        let top = len - 1;
        let mut lowest = [top; MAP_WIDTH as usize];
        let mut visited = vec![false; len * MAP_WIDTH as usize];
        let mut queue: VecDeque<(i64, usize)> = (0..MAP_WIDTH).map(|x| (x, top)).collect();

        while let Some((x, rel)) = queue.pop_front() {
            lowest[x as usize] = lowest[x as usize].min(rel);
            let mut push = |nx: i64, nrel: usize| {
                if (0..MAP_WIDTH).contains(&nx)
                    && self.rows[nrel] >> nx & 1 == 0
                    && !std::mem::replace(&mut visited[nrel * MAP_WIDTH as usize + nx as usize], true)
                {
                    queue.push_back((nx, nrel));
                }
            };
            push(x - 1, rel);
            push(x + 1, rel);
            if rel > 0 {
                push(x, rel - 1);
            }
        }

        let effective_floor = *lowest.iter().min().unwrap_or(&0);
        if effective_floor > 0 {
            self.floor_level += effective_floor as u64;
            self.rows.drain(..effective_floor);
        }
    }
}

/// One falling-rock simulation: the chamber plus the cycling shape and jet
/// sequences. A step drops one rock.
struct TowerSim<'a> {
    tower: Tower,
    jets: &'a [u8],
    shape_idx: usize,
    jet_idx: usize,
}

impl<'a> TowerSim<'a> {
    fn new(jets: &'a [u8]) -> Self {
        Self {
            tower: Tower::new(),
            jets,
            shape_idx: 0,
            jet_idx: 0,
        }
    }
}

impl PeriodicSim for TowerSim<'_> {
    fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.shape_idx.hash(&mut hasher);
        self.jet_idx.hash(&mut hasher);
        self.tower.rows.hash(&mut hasher);
        hasher.finish()
    }

    fn metric(&self) -> u64 {
        self.tower.height()
    }

    fn step(&mut self) {
        let (shape, width) = SHAPES[self.shape_idx];
        self.shape_idx = (self.shape_idx + 1) % SHAPES.len();

        let mut x = ROCK_INITIAL_X;
        let mut y = (self.tower.height() + ROCK_INITIAL_HEIGHT_OFFSET) as i64;
        loop {
            let dx = match self.jets[self.jet_idx] {
                b'<' => -1,
                _ => 1,
            };
            self.jet_idx = (self.jet_idx + 1) % self.jets.len();
            if !self.tower.collides(shape, width, x + dx, y) {
                x += dx;
            }
            if self.tower.collides(shape, width, x, y - 1) {
                self.tower.finalize(shape, x, y as u64);
                break;
            }
            y -= 1;
        }
    }

    fn fast_forward(&mut self, periods: u64, metric_delta: u64) {
        // Rows and cycle indices already match the repeated state; only the
        // truncated depth below them grows.
        self.tower.floor_level += periods * metric_delta;
    }
}

pub struct Day17;

impl InputParser for Day17 {
    type Data<'a> = &'a [u8];

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        let jets = input.trim_end().as_bytes();
        if jets.is_empty() {
            return Err(ParseError::MissingData("empty jet pattern".into()));
        }
        if let Some(&bad) = jets.iter().find(|&&b| b != b'<' && b != b'>') {
            return Err(ParseError::InvalidFormat(format!(
                "bad jet character: {:?}",
                bad as char
            )));
        }
        Ok(jets)
    }
}

impl Solver for Day17 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let rocks: u64 = if part == 1 { 2022 } else { 1_000_000_000_000 };
        let mut sim = TowerSim::new(data);
        Ok(simulate_with_folding(&mut sim, rocks).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = ">>><<><>><<<>><>>><<<>>><<<><<<>><>><<>>";

    #[test]
    fn part1_sample() {
        let mut data = Day17::parse(SAMPLE).unwrap();
        assert_eq!(Day17::solve_part(&mut data, 1).unwrap(), Answer::Int(3068));
    }

    #[test]
    fn part2_sample() {
        let mut data = Day17::parse(SAMPLE).unwrap();
        assert_eq!(
            Day17::solve_part(&mut data, 2).unwrap(),
            Answer::Int(1514285714288)
        );
    }

    #[test]
    fn first_rock_lands_flat() {
        let mut sim = TowerSim::new(b">>><<>");
        sim.step();
        assert_eq!(sim.metric(), 1);
    }
}
