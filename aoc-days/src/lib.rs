//! Advent of Code 2022 solutions.
//!
//! Each day lives in its own module under [`year2022`] and implements
//! [`aoc_runner::Solver`]. [`register_all`] wires every solver into a
//! registry builder; the day table below is the single place a new day
//! gets added.

pub mod year2022;

use aoc_runner::{RegistrationError, RegistryBuilder};

/// Register every implemented solver.
pub fn register_all(builder: RegistryBuilder) -> Result<RegistryBuilder, RegistrationError> {
    use year2022::*;

    builder
        .register::<day01::Day01>(2022, 1)?
        .register::<day02::Day02>(2022, 2)?
        .register::<day03::Day03>(2022, 3)?
        .register::<day04::Day04>(2022, 4)?
        .register::<day05::Day05>(2022, 5)?
        .register::<day06::Day06>(2022, 6)?
        .register::<day07::Day07>(2022, 7)?
        .register::<day08::Day08>(2022, 8)?
        .register::<day09::Day09>(2022, 9)?
        .register::<day10::Day10>(2022, 10)?
        .register::<day11::Day11>(2022, 11)?
        .register::<day12::Day12>(2022, 12)?
        .register::<day13::Day13>(2022, 13)?
        .register::<day14::Day14>(2022, 14)?
        .register::<day15::Day15>(2022, 15)?
        .register::<day16::Day16>(2022, 16)?
        .register::<day17::Day17>(2022, 17)?
        .register::<day18::Day18>(2022, 18)?
        .register::<day19::Day19>(2022, 19)?
        .register::<day20::Day20>(2022, 20)?
        .register::<day21::Day21>(2022, 21)?
        .register::<day22::Day22>(2022, 22)?
        .register::<day23::Day23>(2022, 23)?
        .register::<day24::Day24>(2022, 24)?
        .register::<day25::Day25>(2022, 25)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_days_register_cleanly() {
        let registry = register_all(RegistryBuilder::new()).unwrap().build();
        assert_eq!(registry.len(), 25);
        for day in 1..=25 {
            assert!(registry.contains(2022, day), "day {day} missing");
        }
    }
}
