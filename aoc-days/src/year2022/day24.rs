//! Day 24: Blizzard Basin.

use anyhow::{anyhow, bail};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use aoc_search::bfs_distance;
use rustc_hash::FxHashSet;

/// The valley, with interior cells indexed from (0, 0) just inside the
/// walls. The start sits on row -1 and the goal on row `rows`.
pub struct Valley {
    rows: i64,
    cols: i64,
    start_col: i64,
    end_col: i64,
    /// Initial blizzard columns per interior row (left- and right-moving).
    left: Vec<FxHashSet<i64>>,
    right: Vec<FxHashSet<i64>>,
    /// Initial blizzard rows per interior column (up- and down-moving).
    up: Vec<FxHashSet<i64>>,
    down: Vec<FxHashSet<i64>>,
}

impl Valley {
    /// Whether any blizzard occupies the interior cell after the given
    /// offsets have elapsed. Blizzards wrap, so we shift the cell back to
    /// where the blizzard started instead of moving every blizzard.
    fn blizzard_at(&self, r: i64, c: i64, h_offset: i64, v_offset: i64) -> bool {
        self.left[r as usize].contains(&(c + h_offset).rem_euclid(self.cols))
            || self.right[r as usize].contains(&(c - h_offset).rem_euclid(self.cols))
            || self.up[c as usize].contains(&(r + v_offset).rem_euclid(self.rows))
            || self.down[c as usize].contains(&(r - v_offset).rem_euclid(self.rows))
    }

    fn is_open(&self, r: i64, c: i64) -> bool {
        if r == -1 {
            return c == self.start_col;
        }
        if r == self.rows {
            return c == self.end_col;
        }
        (0..self.rows).contains(&r) && (0..self.cols).contains(&c)
    }
}

const MOVES: [(i64, i64); 5] = [(0, 0), (1, 0), (-1, 0), (0, 1), (0, -1)];

/// Position, blizzard phase, and the next waypoint still to reach.
type SearchState = (i64, i64, i64, i64, usize);

/// Minutes to visit every waypoint in order, dodging blizzards. The
/// blizzard phase repeats with the interior dimensions, so offsets are
/// tracked modulo them instead of the raw minute.
fn shortest_trip(valley: &Valley, waypoints: &[(i64, i64)]) -> Option<u64> {
    let start: SearchState = (waypoints[0].0, waypoints[0].1, 1, 1, 1);
    bfs_distance(
        start,
        |&(r, c, h_offset, v_offset, dest_idx)| {
            let next_h = (h_offset + 1) % valley.cols;
            let next_v = (v_offset + 1) % valley.rows;
            MOVES
                .iter()
                .filter_map(|&(dr, dc)| {
                    let (nr, nc) = (r + dr, c + dc);
                    if !valley.is_open(nr, nc) {
                        return None;
                    }
                    let interior = (0..valley.rows).contains(&nr);
                    if interior && valley.blizzard_at(nr, nc, h_offset, v_offset) {
                        return None;
                    }
                    let next_dest = if (nr, nc) == waypoints[dest_idx] {
                        dest_idx + 1
                    } else {
                        dest_idx
                    };
                    Some((nr, nc, next_h, next_v, next_dest))
                })
                .collect::<Vec<_>>()
        },
        |&(_, _, _, _, dest_idx)| dest_idx == waypoints.len(),
    )
}

fn parse_valley(input: &str) -> anyhow::Result<Valley> {
    let lines: Vec<&str> = input.lines().filter(|l| !l.is_empty()).collect();
    if lines.len() < 3 {
        bail!("valley too small");
    }
    let rows = lines.len() as i64 - 2;
    let cols = lines[0].len() as i64 - 2;
    let wall_dot = |line: &&str| -> anyhow::Result<i64> {
        line.find('.')
            .map(|i| i as i64 - 1)
            .ok_or_else(|| anyhow!("no opening in wall: {line:?}"))
    };
    let start_col = wall_dot(&lines[0])?;
    let end_col = wall_dot(lines.last().unwrap_or(&""))?;

    let mut left = vec![FxHashSet::default(); rows as usize];
    let mut right = vec![FxHashSet::default(); rows as usize];
    let mut up = vec![FxHashSet::default(); cols as usize];
    let mut down = vec![FxHashSet::default(); cols as usize];
    for (r, line) in lines[1..lines.len() - 1].iter().enumerate() {
        for (c, ch) in line.chars().skip(1).take(cols as usize).enumerate() {
            match ch {
                '<' => {
                    left[r].insert(c as i64);
                }
                '>' => {
                    right[r].insert(c as i64);
                }
                '^' => {
                    up[c].insert(r as i64);
                }
                'v' => {
                    down[c].insert(r as i64);
                }
                '.' | '#' => {}
                _ => bail!("bad valley character: {ch:?}"),
            }
        }
    }

    Ok(Valley {
        rows,
        cols,
        start_col,
        end_col,
        left,
        right,
        up,
        down,
    })
}

pub struct Day24;

impl InputParser for Day24 {
    type Data<'a> = Valley;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        parse_valley(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day24 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let start = (-1, data.start_col);
        let end = (data.rows, data.end_col);
        let waypoints: Vec<(i64, i64)> = if part == 1 {
            vec![start, end]
        } else {
            vec![start, end, start, end]
        };
        shortest_trip(data, &waypoints)
            .map(Answer::from)
            .ok_or_else(|| SolveError::NoSolution("no route through the blizzards".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        #.######
        #>>.<^<#
        #.<..<<#
        #>v.><>#
        #<^v^^>#
        ######.#
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day24::parse(SAMPLE).unwrap();
        assert_eq!(Day24::solve_part(&mut data, 1).unwrap(), Answer::Int(18));
    }

    #[test]
    fn part2_sample() {
        let mut data = Day24::parse(SAMPLE).unwrap();
        assert_eq!(Day24::solve_part(&mut data, 2).unwrap(), Answer::Int(54));
    }

    #[test]
    fn calm_corridor_is_a_straight_walk() {
        let mut data = Day24::parse("#.##\n#..#\n#..#\n##.#").unwrap();
        // Down the two open rows and out: four steps.
        assert_eq!(Day24::solve_part(&mut data, 1).unwrap(), Answer::Int(4));
    }
}
