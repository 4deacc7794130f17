//! Day 13: Distress Signal.

use anyhow::{anyhow, bail};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Int(i64),
    List(Vec<Packet>),
}

impl Packet {
    fn divider(n: i64) -> Packet {
        Packet::List(vec![Packet::List(vec![Packet::Int(n)])])
    }
}

impl Ord for Packet {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Packet::Int(a), Packet::Int(b)) => a.cmp(b),
            (Packet::List(a), Packet::List(b)) => {
                for (l, r) in a.iter().zip(b) {
                    match l.cmp(r) {
                        Ordering::Equal => continue,
                        decided => return decided,
                    }
                }
                a.len().cmp(&b.len())
            }
            // A bare integer compares as a one-element list.
            (Packet::Int(a), Packet::List(_)) => {
                Packet::List(vec![Packet::Int(*a)]).cmp(other)
            }
            (Packet::List(_), Packet::Int(b)) => {
                self.cmp(&Packet::List(vec![Packet::Int(*b)]))
            }
        }
    }
}

impl PartialOrd for Packet {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn parse_packet(s: &str) -> anyhow::Result<Packet> {
    let bytes = s.as_bytes();
    let mut stack: Vec<Vec<Packet>> = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b',' => i += 1,
            b'[' => {
                stack.push(Vec::new());
                i += 1;
            }
            b']' => {
                let last = stack.pop().ok_or_else(|| anyhow!("unbalanced ] in {s:?}"))?;
                match stack.last_mut() {
                    None => {
                        if i + 1 != bytes.len() {
                            bail!("trailing characters in {s:?}");
                        }
                        return Ok(Packet::List(last));
                    }
                    Some(parent) => parent.push(Packet::List(last)),
                }
                i += 1;
            }
            b'0'..=b'9' => {
                let end = bytes[i..]
                    .iter()
                    .position(|b| !b.is_ascii_digit())
                    .map_or(bytes.len(), |j| i + j);
                let value: i64 = s[i..end].parse()?;
                stack
                    .last_mut()
                    .ok_or_else(|| anyhow!("bare integer in {s:?}"))?
                    .push(Packet::Int(value));
                i = end;
            }
            other => bail!("unexpected byte {:?} in {s:?}", other as char),
        }
    }
    bail!("unterminated packet: {s:?}")
}

pub struct Day13;

impl InputParser for Day13 {
    type Data<'a> = Vec<(Packet, Packet)>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .split("\n\n")
            .filter(|block| !block.trim().is_empty())
            .map(|block| {
                let mut lines = block.lines();
                let first = lines.next().ok_or_else(|| anyhow!("missing packet"))?;
                let second = lines.next().ok_or_else(|| anyhow!("missing packet"))?;
                Ok((parse_packet(first)?, parse_packet(second)?))
            })
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day13 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        if part == 1 {
            let total: usize = data
                .iter()
                .enumerate()
                .filter(|(_, (lhs, rhs))| lhs < rhs)
                .map(|(i, _)| i + 1)
                .sum();
            Ok(total.into())
        } else {
            let dividers = [Packet::divider(2), Packet::divider(6)];
            let mut packets: Vec<&Packet> = data
                .iter()
                .flat_map(|(a, b)| [a, b])
                .chain(dividers.iter())
                .collect();
            packets.sort_unstable();
            let key: usize = packets
                .iter()
                .enumerate()
                .filter(|(_, p)| dividers.contains(*p))
                .map(|(i, _)| i + 1)
                .product();
            Ok(key.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        [1,1,3,1,1]
        [1,1,5,1,1]

        [[1],[2,3,4]]
        [[1],[4]]

        [9]
        [[8,7,6]]

        [[4,4],4,4]
        [[4,4],4,4,4]

        [7,7,7,7]
        [7,7,7]

        []
        [3]

        [[[]]]
        [[]]

        [1,[2,[3,[4,[5,6,7]]]],8,9]
        [1,[2,[3,[4,[5,6,0]]]],8,9]
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day13::parse(SAMPLE).unwrap();
        assert_eq!(Day13::solve_part(&mut data, 1).unwrap(), Answer::Int(13));
    }

    #[test]
    fn part2_sample() {
        let mut data = Day13::parse(SAMPLE).unwrap();
        assert_eq!(Day13::solve_part(&mut data, 2).unwrap(), Answer::Int(140));
    }

    #[test]
    fn malformed_packets_are_rejected() {
        assert!(parse_packet("[1,2").is_err());
        assert!(parse_packet("3").is_err());
        assert!(parse_packet("[1]]").is_err());
    }
}
