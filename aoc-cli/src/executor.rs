//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::ExecutorError;
use crate::inputs::InputStore;
use aoc_runner::{Answer, DynSolver, ParseError, Registry, SolverError};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// Result from a single solver execution
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<Answer, SolverError>,
    pub solve_duration: TimeDelta,
    /// Set on the result that paid for parsing the input
    pub parse_duration: Option<TimeDelta>,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    shared: SharedConfig,
    thread_pool: rayon::ThreadPool,
}

/// Everything worker threads need, shared immutably across the pool
struct SharedConfig {
    registry: Registry,
    store: InputStore,
    input_override: Option<PathBuf>,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: Registry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            shared: SharedConfig {
                registry,
                store: InputStore::new(config.input_dir.clone()),
                input_override: config.input_override.clone(),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn input_store(&self) -> &InputStore {
        &self.shared.store
    }

    pub fn has_input_override(&self) -> bool {
        self.shared.input_override.is_some()
    }

    /// Collect work items by filtering from registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let shared = &self.shared;
        shared
            .registry
            .iter_info()
            .filter(|info| shared.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| shared.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.shared.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ExecutorError> {
        let work_items = self.collect_work_items();

        match self.shared.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_solver(&work, &tx, &self.shared) {
                        collected_error = Some(ExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                // Group by year, parallelize years using the thread pool
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Day and Part both fan out across work items; Part additionally
            // splits each item's parts inside run_solver
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ExecutorError> {
        let shared = &self.shared;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_solver(&work, tx, shared).err())
                .reduce_with(|err1, err2| {
                    err1.map(|err1| ExecutorError::combine_opt(err2, err1))
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ExecutorError> {
        let shared = &self.shared;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_solver(&work, tx, shared) {
                            err = Some(ExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(|err1, err2| {
                    err1.map(|err1| ExecutorError::combine_opt(err2, err1))
                })
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Create an error result for a part that could not be solved
fn make_error_result(year: u16, day: u8, part: u8, error: &str) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(SolverError::Parse(ParseError::Other(error.to_string()))),
        solve_duration: TimeDelta::zero(),
        parse_duration: None,
    }
}

/// Run one work item, fanning parts out when part-level parallelism is on
fn run_solver(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    shared: &SharedConfig,
) -> Result<(), ExecutorError> {
    let input = match get_input(work, shared) {
        Ok(input) => input,
        Err(e) => {
            // Send an error result for each part so ordered output and the
            // summary still account for this work item
            let error_msg = e.to_string();
            for part in work.parts.clone() {
                tx.send(make_error_result(work.year, work.day, part, &error_msg))
                    .map_err(|_| ExecutorError::ChannelSend)?;
            }
            return Ok(());
        }
    };

    if matches!(shared.parallelize_by, ParallelizeBy::Part) {
        run_solver_parts_parallel(work, &input, tx, shared)
    } else {
        run_solver_sequential(work, &input, tx, shared)
    }
}

/// Solve parts in parallel, buffering results to emit in part order.
/// Each part re-parses the input since solvers hold mutable parsed data.
fn run_solver_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    shared: &SharedConfig,
) -> Result<(), ExecutorError> {
    let (result_tx, result_rx) = std::sync::mpsc::channel();
    let (year, day) = (work.year, work.day);
    let registry = &shared.registry;

    work.parts
        .clone()
        .into_par_iter()
        .for_each_with(result_tx, |rtx, part| {
            let result = match registry.create(year, day, input) {
                Ok(mut solver) => {
                    let parse = Some(solver.parse_duration());
                    solve_part_timed(year, day, part, &mut *solver, parse)
                }
                Err(e) => make_error_result(year, day, part, &e.to_string()),
            };
            rtx.send(result).ok();
        });

    // Buffer and emit results in part order
    let mut buffer: [Option<SolverResult>; 2] = [None, None];
    let start_part = *work.parts.start();
    let mut next_part = start_part;

    for result in result_rx {
        let idx = (result.part - start_part) as usize;
        if idx < buffer.len() {
            buffer[idx] = Some(result);
        }
        while let Some(result) = buffer
            .get_mut((next_part - start_part) as usize)
            .and_then(Option::take)
        {
            tx.send(result).map_err(|_| ExecutorError::ChannelSend)?;
            next_part += 1;
        }
    }
    Ok(())
}

/// Parse once and solve parts in order, streaming results as they finish
fn run_solver_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    shared: &SharedConfig,
) -> Result<(), ExecutorError> {
    let (year, day) = (work.year, work.day);
    let parts = work.parts.clone();

    let mut solver = match shared.registry.create(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            let error_msg = e.to_string();
            for part in parts {
                tx.send(make_error_result(year, day, part, &error_msg))
                    .map_err(|_| ExecutorError::ChannelSend)?;
            }
            return Ok(());
        }
    };

    let mut parse = Some(solver.parse_duration());
    for part in parts {
        let result = solve_part_timed(year, day, part, &mut *solver, parse.take());
        tx.send(result).map_err(|_| ExecutorError::ChannelSend)?;
    }
    Ok(())
}

/// Read the work item's input, from the override file or the store
fn get_input(work: &WorkItem, shared: &SharedConfig) -> Result<String, ExecutorError> {
    let (year, day) = (work.year, work.day);
    if let Some(path) = &shared.input_override {
        return std::fs::read_to_string(path).map_err(|source| ExecutorError::InputRead {
            year,
            day,
            source,
        });
    }

    shared
        .store
        .get(year, day)
        .map_err(|source| ExecutorError::InputRead { year, day, source })?
        .ok_or_else(|| ExecutorError::MissingInput {
            year,
            day,
            path: shared.store.input_path(year, day),
        })
}

/// Solve a single part, capturing timing
fn solve_part_timed(
    year: u16,
    day: u8,
    part: u8,
    solver: &mut dyn DynSolver,
    parse_duration: Option<TimeDelta>,
) -> SolverResult {
    match solver.solve(part) {
        Ok(solved) => SolverResult {
            year,
            day,
            part,
            solve_duration: solved.duration(),
            answer: Ok(solved.answer),
            parse_duration,
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(e.into()),
            solve_duration: TimeDelta::zero(),
            parse_duration,
        },
    }
}
