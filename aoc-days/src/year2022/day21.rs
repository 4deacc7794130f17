//! Day 21: Monkey Math.

use anyhow::{Context, anyhow, bail};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use rustc_hash::FxHashMap;

const ROOT: &str = "root";
const HUMAN: &str = "humn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn apply(self, lhs: i64, rhs: i64) -> i64 {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Monkey<'a> {
    Num(i64),
    Op { lhs: &'a str, op: Op, rhs: &'a str },
}

type Troop<'a> = FxHashMap<&'a str, Monkey<'a>>;

fn eval(troop: &Troop<'_>, name: &str) -> anyhow::Result<i64> {
    match troop.get(name).ok_or_else(|| anyhow!("unknown monkey {name:?}"))? {
        Monkey::Num(n) => Ok(*n),
        Monkey::Op { lhs, op, rhs } => Ok(op.apply(eval(troop, lhs)?, eval(troop, rhs)?)),
    }
}

fn depends_on_human(troop: &Troop<'_>, name: &str) -> bool {
    if name == HUMAN {
        return true;
    }
    match troop.get(name) {
        Some(Monkey::Op { lhs, rhs, .. }) => {
            depends_on_human(troop, lhs) || depends_on_human(troop, rhs)
        }
        _ => false,
    }
}

/// Walk from `name` down the branch containing the human, inverting each
/// operation so `name`'s subtree must equal `target`.
fn solve_for_human(troop: &Troop<'_>, name: &str, target: i64) -> anyhow::Result<i64> {
    if name == HUMAN {
        return Ok(target);
    }
    let Some(Monkey::Op { lhs, op, rhs }) = troop.get(name) else {
        bail!("monkey {name:?} cannot depend on the human");
    };
    if depends_on_human(troop, lhs) {
        let rhs = eval(troop, rhs)?;
        let next = match op {
            Op::Add => target - rhs,
            Op::Sub => target + rhs,
            Op::Mul => target / rhs,
            Op::Div => target * rhs,
        };
        solve_for_human(troop, lhs, next)
    } else {
        let lhs = eval(troop, lhs)?;
        let next = match op {
            Op::Add => target - lhs,
            Op::Sub => lhs - target,
            Op::Mul => target / lhs,
            Op::Div => lhs / target,
        };
        solve_for_human(troop, rhs, next)
    }
}

fn required_human_value(troop: &Troop<'_>) -> anyhow::Result<i64> {
    let Some(Monkey::Op { lhs, rhs, .. }) = troop.get(ROOT) else {
        bail!("root monkey must combine two others");
    };
    match (depends_on_human(troop, lhs), depends_on_human(troop, rhs)) {
        (true, false) => solve_for_human(troop, lhs, eval(troop, rhs)?),
        (false, true) => solve_for_human(troop, rhs, eval(troop, lhs)?),
        (true, true) => bail!("human feeds both sides of root"),
        (false, false) => bail!("human feeds neither side of root"),
    }
}

fn parse_monkey(line: &str) -> anyhow::Result<(&str, Monkey<'_>)> {
    let (name, job) = line
        .split_once(": ")
        .ok_or_else(|| anyhow!("bad monkey line: {line:?}"))?;
    let tokens: Vec<&str> = job.split_whitespace().collect();
    let monkey = match tokens[..] {
        [num] => Monkey::Num(num.parse().with_context(|| format!("bad number: {num:?}"))?),
        [lhs, op, rhs] => {
            let op = match op {
                "+" => Op::Add,
                "-" => Op::Sub,
                "*" => Op::Mul,
                "/" => Op::Div,
                _ => bail!("bad operator: {op:?}"),
            };
            Monkey::Op { lhs, op, rhs }
        }
        _ => bail!("bad monkey job: {job:?}"),
    };
    Ok((name, monkey))
}

pub struct Day21;

impl InputParser for Day21 {
    type Data<'a> = Troop<'a>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(parse_monkey)
            .collect::<anyhow::Result<Troop<'_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day21 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let result = if part == 1 {
            eval(data, ROOT)
        } else {
            required_human_value(data)
        };
        result
            .map(Answer::from)
            .map_err(|e| SolveError::Failed(e.into()))
    }
}
