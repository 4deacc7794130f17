//! Day 11: Monkey in the Middle.

use anyhow::{Context, anyhow};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy)]
pub enum Operation {
    Add(u64),
    Mul(u64),
    Square,
}

impl Operation {
    fn apply(self, worry: u64) -> u64 {
        match self {
            Operation::Add(v) => worry + v,
            Operation::Mul(v) => worry * v,
            Operation::Square => worry * worry,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Monkey {
    items: VecDeque<u64>,
    operation: Operation,
    test_divisor: u64,
    true_target: usize,
    false_target: usize,
    inspect_count: u64,
}

fn field_after<'a>(line: &'a str, prefix: &str) -> anyhow::Result<&'a str> {
    line.trim()
        .strip_prefix(prefix)
        .ok_or_else(|| anyhow!("expected {prefix:?} in {line:?}"))
}

fn parse_monkey(block: &str) -> anyhow::Result<Monkey> {
    let mut lines = block.lines();
    let mut next = || lines.next().ok_or_else(|| anyhow!("truncated monkey"));

    next()?; // "Monkey N:"
    let items = field_after(next()?, "Starting items: ")?
        .split(", ")
        .map(|s| s.parse().with_context(|| format!("bad item: {s:?}")))
        .collect::<anyhow::Result<VecDeque<u64>>>()?;

    let op_line = field_after(next()?, "Operation: new = old ")?;
    let operation = match op_line.split_once(' ') {
        Some(("*", "old")) => Operation::Square,
        Some(("*", v)) => Operation::Mul(v.parse().context("bad operand")?),
        Some(("+", v)) => Operation::Add(v.parse().context("bad operand")?),
        _ => return Err(anyhow!("bad operation: {op_line:?}")),
    };

    let test_divisor = field_after(next()?, "Test: divisible by ")?
        .parse()
        .context("bad divisor")?;
    let true_target = field_after(next()?, "If true: throw to monkey ")?
        .parse()
        .context("bad target")?;
    let false_target = field_after(next()?, "If false: throw to monkey ")?
        .parse()
        .context("bad target")?;

    Ok(Monkey {
        items,
        operation,
        test_divisor,
        true_target,
        false_target,
        inspect_count: 0,
    })
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn monkey_business(monkeys: &mut [Monkey], decrease_worry: bool, rounds: u32) -> u64 {
    // Worry only matters modulo each divisor, so folding by the lcm keeps
    // values small without changing any test.
    let lcm = monkeys
        .iter()
        .map(|m| m.test_divisor)
        .fold(1, |acc, d| acc / gcd(acc, d) * d);

    for _ in 0..rounds {
        for i in 0..monkeys.len() {
            while let Some(mut worry) = monkeys[i].items.pop_front() {
                monkeys[i].inspect_count += 1;
                worry = monkeys[i].operation.apply(worry);
                if decrease_worry {
                    worry /= 3;
                }
                worry %= lcm;
                let target = if worry % monkeys[i].test_divisor == 0 {
                    monkeys[i].true_target
                } else {
                    monkeys[i].false_target
                };
                monkeys[target].items.push_back(worry);
            }
        }
    }

    let mut counts: Vec<u64> = monkeys.iter().map(|m| m.inspect_count).collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));
    counts.iter().take(2).product()
}

pub struct Day11;

impl InputParser for Day11 {
    type Data<'a> = Vec<Monkey>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        let monkeys = input
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .map(parse_monkey)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        for monkey in &monkeys {
            if monkey.true_target >= monkeys.len() || monkey.false_target >= monkeys.len() {
                return Err(ParseError::InvalidFormat("throw target out of range".into()));
            }
        }
        Ok(monkeys)
    }
}

impl Solver for Day11 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let mut monkeys = data.clone();
        let business = if part == 1 {
            monkey_business(&mut monkeys, true, 20)
        } else {
            monkey_business(&mut monkeys, false, 10_000)
        };
        Ok(business.into())
    }
}
