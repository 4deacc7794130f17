//! Day 10: Cathode-Ray Tube.

use anyhow::{Context, anyhow};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};

const CRT_WIDTH: usize = 40;
const CRT_HEIGHT: usize = 6;

#[derive(Debug, Clone, Copy)]
pub enum Instruction {
    Noop,
    Addx(i64),
}

/// The value of register X at the beginning of each cycle.
fn register_states(program: &[Instruction]) -> Vec<i64> {
    let mut states = Vec::new();
    let mut x = 1i64;
    for instruction in program {
        match instruction {
            Instruction::Noop => states.push(x),
            Instruction::Addx(v) => {
                states.push(x);
                states.push(x);
                x += v;
            }
        }
    }
    states.push(x);
    states
}

pub struct Day10;

impl InputParser for Day10 {
    type Data<'a> = Vec<Instruction>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|line| {
                let mut tokens = line.split_whitespace();
                match tokens.next() {
                    Some("noop") => Ok(Instruction::Noop),
                    Some("addx") => {
                        let arg = tokens
                            .next()
                            .ok_or_else(|| anyhow!("addx missing argument"))?;
                        Ok(Instruction::Addx(
                            arg.parse().with_context(|| format!("bad addx: {line:?}"))?,
                        ))
                    }
                    _ => Err(anyhow!("unrecognized instruction: {line:?}")),
                }
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day10 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let states = register_states(data);
        if part == 1 {
            let total: i64 = states
                .iter()
                .enumerate()
                .map(|(i, &x)| (i as i64 + 1, x))
                .filter(|(cycle, _)| (cycle - 20) % 40 == 0)
                .map(|(cycle, x)| cycle * x)
                .sum();
            Ok(total.into())
        } else {
            let mut crt = vec![b'.'; CRT_WIDTH * CRT_HEIGHT];
            for (i, &x) in states.iter().take(CRT_WIDTH * CRT_HEIGHT).enumerate() {
                let col = (i % CRT_WIDTH) as i64;
                if (col - x).abs() <= 1 {
                    crt[i] = b'#';
                }
            }
            let rendered = crt
                .chunks(CRT_WIDTH)
                .map(|row| std::str::from_utf8(row).unwrap_or_default())
                .collect::<Vec<_>>()
                .join("\n");
            Ok(rendered.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        addx 15
        addx -11
        addx 6
        addx -3
        addx 5
        addx -1
        addx -8
        addx 13
        addx 4
        noop
        addx -1
        addx 5
        addx -1
        addx 5
        addx -1
        addx 5
        addx -1
        addx 5
        addx -1
        addx -35
        addx 1
        addx 24
        addx -19
        addx 1
        addx 16
        addx -11
        noop
        noop
        addx 21
        addx -15
        noop
        noop
        addx -3
        addx 9
        addx 1
        addx -3
        addx 8
        addx 1
        addx 5
        noop
        noop
        noop
        noop
        noop
        addx -36
        noop
        addx 1
        addx 7
        noop
        noop
        noop
        addx 2
        addx 6
        noop
        noop
        noop
        noop
        noop
        addx 1
        noop
        noop
        addx 7
        addx 1
        noop
        addx -13
        addx 13
        addx 7
        noop
        addx 1
        addx -33
        noop
        noop
        noop
        addx 2
        noop
        noop
        noop
        addx 8
        noop
        addx -1
        addx 2
        addx 1
        noop
        addx 17
        addx -9
        addx 1
        addx 1
        addx -3
        addx 11
        noop
        noop
        addx 1
        noop
        addx 1
        noop
        noop
        addx -13
        addx -19
        addx 1
        addx 3
        addx 26
        addx -30
        addx 12
        addx -1
        addx 3
        addx 1
        noop
        noop
        noop
        addx -9
        addx 18
        addx 1
        addx 2
        noop
        noop
        addx 9
        noop
        noop
        noop
        addx -1
        addx 2
        addx -37
        addx 1
        addx 3
        noop
        addx 15
        addx -21
        addx 22
        addx -6
        addx 1
        noop
        addx 2
        addx 1
        noop
        addx -10
        noop
        noop
        addx 20
        addx 1
        addx 2
        addx 2
        addx -6
        addx -11
        noop
        noop
        noop
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day10::parse(SAMPLE).unwrap();
        assert_eq!(Day10::solve_part(&mut data, 1).unwrap(), Answer::Int(13140));
    }

    #[test]
    fn part2_sample() {
        let expected = indoc! {"
            ##..##..##..##..##..##..##..##..##..##..
            ###...###...###...###...###...###...###.
            ####....####....####....####....####....
            #####.....#####.....#####.....#####.....
            ######......######......######......####
            #######.......#######.......#######....."};
        let mut data = Day10::parse(SAMPLE).unwrap();
        assert_eq!(
            Day10::solve_part(&mut data, 2).unwrap(),
            Answer::Text(expected.into())
        );
    }
}
