//! Configuration resolution from CLI args

use crate::cli::{Args, ParallelizeBy};
use crate::error::CliError;
use std::path::PathBuf;

/// Resolved runtime configuration
pub struct Config {
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Directory holding puzzle inputs
    pub input_dir: PathBuf,
    /// Explicit input file overriding the store lookup
    pub input_override: Option<PathBuf>,
    /// Number of threads for parallel execution
    pub thread_count: usize,
    /// Parallelization level
    pub parallelize_by: ParallelizeBy,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if args.input.is_some() && (args.year.is_none() || args.day.is_none()) {
            return Err(CliError::Config(
                "--input requires both --year and --day".to_string(),
            ));
        }

        let thread_count = args.threads.unwrap_or_else(num_cpus);

        Ok(Config {
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            input_dir: args.input_dir,
            input_override: args.input,
            thread_count,
            parallelize_by: args.parallelize_by,
            quiet: args.quiet,
        })
    }
}

/// Get number of CPUs
fn num_cpus() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn input_override_requires_year_and_day() {
        let args = Args::parse_from(["aoc", "--input", "puzzle.txt"]);
        assert!(matches!(
            Config::from_args(args),
            Err(CliError::Config(_))
        ));

        let args = Args::parse_from(["aoc", "--input", "puzzle.txt", "-y", "2022", "-d", "5"]);
        let config = Config::from_args(args).unwrap();
        assert_eq!(config.input_override, Some(PathBuf::from("puzzle.txt")));
        assert_eq!(config.year_filter, Some(2022));
        assert_eq!(config.day_filter, Some(5));
    }

    #[test]
    fn defaults_resolve() {
        let config = Config::from_args(Args::parse_from(["aoc"])).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("inputs"));
        assert!(config.input_override.is_none());
        assert_eq!(config.parallelize_by, ParallelizeBy::Day);
        assert!(config.thread_count >= 1);
    }
}
