//! Day 6: Tuning Trouble.

use anyhow::anyhow;
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};

/// Sliding-window counter that tracks how many distinct bytes currently
/// have a nonzero count.
struct WindowCounter {
    counts: [u32; 256],
    distinct: usize,
}

impl Default for WindowCounter {
    fn default() -> Self {
        Self {
            counts: [0; 256],
            distinct: 0,
        }
    }
}

impl WindowCounter {
    fn add(&mut self, byte: u8) {
        let slot = &mut self.counts[byte as usize];
        if *slot == 0 {
            self.distinct += 1;
        }
        *slot += 1;
    }

    fn remove(&mut self, byte: u8) {
        let slot = &mut self.counts[byte as usize];
        *slot -= 1;
        if *slot == 0 {
            self.distinct -= 1;
        }
    }
}

/// Position just past the first window of `window_length` distinct bytes.
fn find_marker(signal: &[u8], window_length: usize) -> Option<usize> {
    let mut counter = WindowCounter::default();
    for &byte in signal.iter().take(window_length) {
        counter.add(byte);
    }
    if signal.len() >= window_length && counter.distinct == window_length {
        return Some(window_length);
    }
    for i in window_length..signal.len() {
        counter.add(signal[i]);
        counter.remove(signal[i - window_length]);
        if counter.distinct == window_length {
            return Some(i + 1);
        }
    }
    None
}

pub struct Day06;

impl InputParser for Day06 {
    type Data<'a> = &'a [u8];

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        Ok(input.trim_end().as_bytes())
    }
}

impl Solver for Day06 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        let window = if part == 1 { 4 } else { 14 };
        find_marker(data, window)
            .map(Answer::from)
            .ok_or_else(|| SolveError::NoSolution(anyhow!("no marker position").to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part1_samples() {
        for (signal, expected) in [
            ("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7),
            ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5),
            ("nppdvjthqldpwncqszvftbrmjlhg", 6),
            ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10),
        ] {
            let mut data = Day06::parse(signal).unwrap();
            assert_eq!(
                Day06::solve_part(&mut data, 1).unwrap(),
                Answer::Int(expected),
                "{signal}"
            );
        }
    }

    #[test]
    fn part2_sample() {
        let mut data = Day06::parse("mjqjpqmgbljsphdztnvjfqwrcgsmlb").unwrap();
        assert_eq!(Day06::solve_part(&mut data, 2).unwrap(), Answer::Int(19));
    }

    #[test]
    fn fresh_counter_tracks_distinct_from_zero() {
        let mut counter = WindowCounter::default();
        assert_eq!(counter.distinct, 0);
        counter.add(b'a');
        counter.add(b'a');
        counter.add(b'b');
        assert_eq!(counter.distinct, 2);
        counter.remove(b'a');
        assert_eq!(counter.distinct, 2);
        counter.remove(b'a');
        assert_eq!(counter.distinct, 1);
    }

    #[test]
    fn all_repeats_has_no_marker() {
        let mut data = Day06::parse("aaaaaaaaaa").unwrap();
        assert!(matches!(
            Day06::solve_part(&mut data, 1),
            Err(SolveError::NoSolution(_))
        ));
    }
}
