//! Day 15: Beacon Exclusion Zone.

use anyhow::{anyhow, Context};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use aoc_search::Vec2;
use rustc_hash::FxHashSet;

const TARGET_Y: i64 = 2_000_000;
const SEARCH_BOUND: i64 = 4_000_000;

/// Inclusive integer range on one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RowRange {
    lower: i64,
    upper: i64,
}

impl RowRange {
    fn contains(self, x: i64) -> bool {
        self.lower <= x && x <= self.upper
    }

    /// Ranges merge when no gap of at least one cell separates them.
    fn mergeable(self, other: RowRange) -> bool {
        !(other.upper < self.lower - 1 || self.upper < other.lower - 1)
    }

    fn merge(self, other: RowRange) -> RowRange {
        RowRange {
            lower: self.lower.min(other.lower),
            upper: self.upper.max(other.upper),
        }
    }

    fn num_points(self) -> i64 {
        1 + self.upper - self.lower
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ExclusionZone {
    sensor: Vec2,
    beacon: Vec2,
}

impl ExclusionZone {
    fn radius(self) -> i64 {
        (self.beacon - self.sensor).manhattan()
    }

    /// The x-range this zone excludes on row `y`, if it reaches that row.
    fn intersect_y(self, y: i64) -> Option<RowRange> {
        let remaining = self.radius() - (y - self.sensor.y).abs();
        if remaining < 0 {
            None
        } else {
            Some(RowRange {
                lower: self.sensor.x - remaining,
                upper: self.sensor.x + remaining,
            })
        }
    }
}

fn parse_coordinate(token: Option<&str>) -> anyhow::Result<i64> {
    let token = token.ok_or_else(|| anyhow!("truncated sensor line"))?;
    let digits: &str = token
        .trim_start_matches(|c: char| c != '=')
        .trim_start_matches('=')
        .trim_end_matches([',', ':']);
    digits.parse().with_context(|| format!("bad coordinate: {token:?}"))
}

fn parse_zone(line: &str) -> anyhow::Result<ExclusionZone> {
    // "Sensor at x=2, y=18: closest beacon is at x=-2, y=15"
    let mut tokens = line.split_whitespace();
    let sensor_x = parse_coordinate(tokens.nth(2))?;
    let sensor_y = parse_coordinate(tokens.next())?;
    let beacon_x = parse_coordinate(tokens.nth(4))?;
    let beacon_y = parse_coordinate(tokens.next())?;
    Ok(ExclusionZone {
        sensor: Vec2::new(sensor_x, sensor_y),
        beacon: Vec2::new(beacon_x, beacon_y),
    })
}

/// Union of all excluded x-ranges on row `y`, as disjoint merged ranges.
fn row_projection(zones: &[ExclusionZone], y: i64) -> Vec<RowRange> {
    let mut ranges: Vec<RowRange> = Vec::new();
    for zone in zones {
        let Some(mut new_range) = zone.intersect_y(y) else {
            continue;
        };
        ranges.retain(|&range| {
            if new_range.mergeable(range) {
                new_range = new_range.merge(range);
                false
            } else {
                true
            }
        });
        ranges.push(new_range);
    }
    ranges
}

fn count_excluded(zones: &[ExclusionZone], target_y: i64) -> i64 {
    let ranges = row_projection(zones, target_y);
    let beacons_on_line: FxHashSet<i64> = zones
        .iter()
        .filter(|z| z.beacon.y == target_y)
        .map(|z| z.beacon.x)
        .collect();

    let total_points: i64 = ranges.iter().map(|r| r.num_points()).sum();
    let occupied = beacons_on_line
        .iter()
        .filter(|&&x| ranges.iter().any(|r| r.contains(x)))
        .count() as i64;
    total_points - occupied
}

/// First x in `0..=bound` on row `y` not excluded by any zone, skipping to
/// the end of each covering range instead of stepping cell by cell.
fn uncovered_x_on_row(zones: &[ExclusionZone], y: i64, bound: i64) -> Option<i64> {
    let mut x = 0;
    'scan: while x <= bound {
        for zone in zones {
            if let Some(range) = zone.intersect_y(y) {
                if range.contains(x) {
                    x = range.upper + 1;
                    continue 'scan;
                }
            }
        }
        return Some(x);
    }
    None
}

fn tuning_frequency(zones: &[ExclusionZone], bound: i64) -> i64 {
    for y in 0..=bound {
        if let Some(x) = uncovered_x_on_row(zones, y, bound) {
            return 4_000_000 * x + y;
        }
    }
    -1
}

pub struct Day15;

impl InputParser for Day15 {
    type Data<'a> = Vec<ExclusionZone>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(parse_zone)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

impl Solver for Day15 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        if part == 1 {
            Ok(count_excluded(data, TARGET_Y).into())
        } else {
            Ok(tuning_frequency(data, SEARCH_BOUND).into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        Sensor at x=2, y=18: closest beacon is at x=-2, y=15
        Sensor at x=9, y=16: closest beacon is at x=10, y=16
        Sensor at x=13, y=2: closest beacon is at x=15, y=3
        Sensor at x=12, y=14: closest beacon is at x=10, y=16
        Sensor at x=10, y=20: closest beacon is at x=10, y=16
        Sensor at x=14, y=17: closest beacon is at x=10, y=16
        Sensor at x=8, y=7: closest beacon is at x=2, y=10
        Sensor at x=2, y=0: closest beacon is at x=2, y=10
        Sensor at x=0, y=11: closest beacon is at x=2, y=10
        Sensor at x=20, y=14: closest beacon is at x=25, y=17
        Sensor at x=17, y=20: closest beacon is at x=21, y=22
        Sensor at x=16, y=7: closest beacon is at x=15, y=3
        Sensor at x=14, y=3: closest beacon is at x=15, y=3
        Sensor at x=20, y=1: closest beacon is at x=15, y=3
    "};

    #[test]
    fn part1_sample_at_row_10() {
        let zones = Day15::parse(SAMPLE).unwrap();
        assert_eq!(count_excluded(&zones, 10), 26);
    }

    #[test]
    fn part2_sample_in_20x20() {
        let zones = Day15::parse(SAMPLE).unwrap();
        assert_eq!(tuning_frequency(&zones, 20), 56000011);
    }

    #[test]
    fn no_gap_reports_minus_one() {
        // One huge zone covers the whole 20x20 search area.
        let zones = vec![ExclusionZone {
            sensor: Vec2::new(10, 10),
            beacon: Vec2::new(10, 60),
        }];
        assert_eq!(tuning_frequency(&zones, 20), -1);
    }
}
