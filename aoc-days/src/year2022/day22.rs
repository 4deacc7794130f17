//! Day 22: Monkey Map.

use anyhow::{anyhow, bail};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use aoc_search::{HEADINGS, Vec2, rotate_heading};

const RIGHT: usize = 0;
const DOWN: usize = 1;
const LEFT: usize = 2;
const UP: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tile {
    Void,
    Open,
    Wall,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Walk(u32),
    /// Quarter turns clockwise: +1 for R, -1 for L.
    Turn(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct State {
    pos: Vec2,
    heading: usize,
}

/// The board keeps its ragged rows; off-row positions are void.
pub struct Board {
    rows: Vec<Vec<Tile>>,
    /// First occupied x per row.
    leftmost: Vec<i64>,
    /// First and last occupied y per column.
    col_range: Vec<(i64, i64)>,
}

impl Board {
    fn from_rows(rows: Vec<Vec<Tile>>) -> anyhow::Result<Self> {
        let occupied_x = |row: &[Tile]| {
            row.iter()
                .position(|&t| t != Tile::Void)
                .map(|x| x as i64)
        };
        let leftmost = rows
            .iter()
            .map(|row| occupied_x(row).ok_or_else(|| anyhow!("blank board row")))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let col_range = (0..width)
            .map(|x| {
                let occupied = |y: &usize| {
                    rows[*y].get(x).is_some_and(|&t| t != Tile::Void)
                };
                let top = (0..rows.len()).find(occupied);
                let bottom = (0..rows.len()).rev().find(occupied);
                match (top, bottom) {
                    (Some(t), Some(b)) => Ok((t as i64, b as i64)),
                    _ => Err(anyhow!("blank board column")),
                }
            })
            .collect::<anyhow::Result<Vec<_>>>()?;

        Ok(Self {
            rows,
            leftmost,
            col_range,
        })
    }

    fn tile(&self, pos: Vec2) -> Tile {
        if pos.x < 0 || pos.y < 0 {
            return Tile::Void;
        }
        self.rows
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
            .unwrap_or(Tile::Void)
    }

    /// Wrap around to the opposite end of the current row or column.
    fn plane_edge(&self, s: State) -> State {
        let pos = match s.heading {
            RIGHT => Vec2::new(self.leftmost[s.y() as usize], s.y()),
            DOWN => Vec2::new(s.x(), self.col_range[s.x() as usize].0),
            LEFT => Vec2::new(self.rows[s.y() as usize].len() as i64 - 1, s.y()),
            _ => Vec2::new(s.x(), self.col_range[s.x() as usize].1),
        };
        State {
            pos,
            heading: s.heading,
        }
    }

    fn step(&self, s: State, cube: bool) -> State {
        let target = s.pos + HEADINGS[s.heading];
        if self.tile(target) != Tile::Void {
            State {
                pos: target,
                heading: s.heading,
            }
        } else if cube {
            cube_edge(s)
        } else {
            self.plane_edge(s)
        }
    }
}

impl State {
    fn x(&self) -> i64 {
        self.pos.x
    }

    fn y(&self) -> i64 {
        self.pos.y
    }
}

/// Edge stitching for the standard 50x50 net the real input uses:
/// faces at (50..150, 0..50), (50..100, 50..100), (0..100, 100..150),
/// and (0..50, 150..200).
fn cube_edge(s: State) -> State {
    let (x, y) = (s.x(), s.y());
    let (pos, heading) = match s.heading {
        UP => match x {
            0..50 => (Vec2::new(50, 50 + x), RIGHT),
            50..100 => (Vec2::new(0, 100 + x), RIGHT),
            _ => (Vec2::new(x - 100, 199), UP),
        },
        LEFT => match y {
            0..50 => (Vec2::new(0, 149 - y), RIGHT),
            50..100 => (Vec2::new(y - 50, 100), DOWN),
            100..150 => (Vec2::new(50, 149 - y), RIGHT),
            _ => (Vec2::new(y - 100, 0), DOWN),
        },
        DOWN => match x {
            0..50 => (Vec2::new(100 + x, 0), DOWN),
            50..100 => (Vec2::new(49, 100 + x), LEFT),
            _ => (Vec2::new(99, x - 50), LEFT),
        },
        _ => match y {
            0..50 => (Vec2::new(99, 149 - y), LEFT),
            50..100 => (Vec2::new(50 + y, 49), UP),
            100..150 => (Vec2::new(149, 149 - y), LEFT),
            _ => (Vec2::new(y - 100, 149), UP),
        },
    };
    State { pos, heading }
}

fn navigate(board: &Board, moves: &[Move], cube: bool) -> i64 {
    let mut s = State {
        pos: Vec2::new(board.leftmost[0], 0),
        heading: RIGHT,
    };
    for &m in moves {
        match m {
            Move::Turn(quarter_turns) => {
                s.heading = rotate_heading(s.heading, quarter_turns);
            }
            Move::Walk(steps) => {
                for _ in 0..steps {
                    let next = board.step(s, cube);
                    if board.tile(next.pos) == Tile::Wall {
                        break;
                    }
                    s = next;
                }
            }
        }
    }
    1000 * (s.y() + 1) + 4 * (s.x() + 1) + s.heading as i64
}

fn parse_tile(c: char) -> anyhow::Result<Tile> {
    match c {
        ' ' => Ok(Tile::Void),
        '.' => Ok(Tile::Open),
        '#' => Ok(Tile::Wall),
        _ => bail!("bad board character: {c:?}"),
    }
}

fn parse_moves(line: &str) -> anyhow::Result<Vec<Move>> {
    fn flush(moves: &mut Vec<Move>, digits: &mut String) -> anyhow::Result<()> {
        if !digits.is_empty() {
            moves.push(Move::Walk(digits.parse()?));
            digits.clear();
        }
        Ok(())
    }

    let mut moves = Vec::new();
    let mut digits = String::new();
    for c in line.trim().chars() {
        match c {
            '0'..='9' => digits.push(c),
            'R' => {
                flush(&mut moves, &mut digits)?;
                moves.push(Move::Turn(1));
            }
            'L' => {
                flush(&mut moves, &mut digits)?;
                moves.push(Move::Turn(-1));
            }
            _ => bail!("bad path character: {c:?}"),
        }
    }
    flush(&mut moves, &mut digits)?;
    Ok(moves)
}

pub struct Day22;

impl InputParser for Day22 {
    type Data<'a> = (Board, Vec<Move>);

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        let (board_block, path) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("no path after the board".into()))?;

        let rows = board_block
            .lines()
            .map(|line| line.trim_end().chars().map(parse_tile).collect())
            .collect::<anyhow::Result<Vec<Vec<Tile>>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let board =
            Board::from_rows(rows).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        let moves = parse_moves(path).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;

        Ok((board, moves))
    }
}

impl Solver for Day22 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let (board, moves) = data;
        Ok(navigate(board, moves, part != 1).into())
    }
}
