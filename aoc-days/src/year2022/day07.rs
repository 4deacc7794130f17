//! Day 7: No Space Left On Device.

use anyhow::{Context, anyhow, bail};
use aoc_runner::{Answer, InputParser, ParseError, SolveError, Solver};
use rustc_hash::FxHashMap;

const TOTAL_DISK_SIZE: u64 = 70_000_000;
const MIN_UNUSED: u64 = 30_000_000;

/// Directory tree flattened into an arena, keyed by index into `dirs`.
struct Arena {
    dirs: Vec<Dir>,
}

struct Dir {
    parent: Option<usize>,
    children: FxHashMap<String, usize>,
    /// Total size including everything below this directory.
    size: u64,
}

impl Arena {
    fn new() -> Self {
        Self {
            dirs: vec![Dir {
                parent: None,
                children: FxHashMap::default(),
                size: 0,
            }],
        }
    }

    fn add_dir(&mut self, parent: usize, name: &str) -> usize {
        if let Some(&existing) = self.dirs[parent].children.get(name) {
            return existing;
        }
        let index = self.dirs.len();
        self.dirs.push(Dir {
            parent: Some(parent),
            children: FxHashMap::default(),
            size: 0,
        });
        self.dirs[parent].children.insert(name.to_owned(), index);
        index
    }

    /// Charge `size` to `dir` and every ancestor.
    fn add_file(&mut self, dir: usize, size: u64) {
        let mut cursor = Some(dir);
        while let Some(index) = cursor {
            self.dirs[index].size += size;
            cursor = self.dirs[index].parent;
        }
    }
}

fn discover_filesystem(input: &str) -> anyhow::Result<Arena> {
    let mut arena = Arena::new();
    let mut cur = 0usize;

    for line in input.lines().filter(|l| !l.is_empty()) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            ["$", "ls"] => {}
            ["$", "cd", "/"] => cur = 0,
            ["$", "cd", ".."] => {
                cur = arena.dirs[cur]
                    .parent
                    .ok_or_else(|| anyhow!("cd .. from root"))?;
            }
            ["$", "cd", name] => cur = arena.add_dir(cur, name),
            ["dir", name] => {
                arena.add_dir(cur, name);
            }
            [size, _name] => {
                let size: u64 = size
                    .parse()
                    .with_context(|| format!("bad file size: {line:?}"))?;
                arena.add_file(cur, size);
            }
            _ => bail!("unrecognized line: {line:?}"),
        }
    }
    Ok(arena)
}

pub struct Day07;

impl InputParser for Day07 {
    /// Recursive size of every directory in the tree, root first.
    type Data<'a> = Vec<u64>;

    fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
        let arena =
            discover_filesystem(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))?;
        Ok(arena.dirs.iter().map(|d| d.size).collect())
    }
}

impl Solver for Day07 {
    const PARTS: u8 = 2;

    fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
        match part {
            1 => Ok(data.iter().filter(|&&s| s <= 100_000).sum::<u64>().into()),
            _ => {
                let total_used = data.first().copied().unwrap_or(0);
                let min_to_free = total_used.saturating_sub(TOTAL_DISK_SIZE - MIN_UNUSED);
                data.iter()
                    .filter(|&&s| s >= min_to_free)
                    .min()
                    .copied()
                    .map(Answer::from)
                    .ok_or_else(|| SolveError::NoSolution("no directory large enough".into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    const SAMPLE: &str = indoc! {"
        $ cd /
        $ ls
        dir a
        14848514 b.txt
        8504156 c.dat
        dir d
        $ cd a
        $ ls
        dir e
        29116 f
        2557 g
        62596 h.lst
        $ cd e
        $ ls
        584 i
        $ cd ..
        $ cd ..
        $ cd d
        $ ls
        4060174 j
        8033020 d.log
        5626152 d.ext
        7214296 k
    "};

    #[test]
    fn part1_sample() {
        let mut data = Day07::parse(SAMPLE).unwrap();
        assert_eq!(Day07::solve_part(&mut data, 1).unwrap(), Answer::Int(95437));
    }

    #[test]
    fn part2_sample() {
        let mut data = Day07::parse(SAMPLE).unwrap();
        assert_eq!(
            Day07::solve_part(&mut data, 2).unwrap(),
            Answer::Int(24933642)
        );
    }
}
