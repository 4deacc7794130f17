//! Advent of Code runner framework.
//!
//! A type-safe framework for defining puzzle solvers and running them
//! through a registry keyed by year and day.
//!
//! # Overview
//!
//! This library provides:
//! - Trait-based solver definitions with parsing separated from solving
//! - Borrowed or owned parsed data via a lifetime-carrying associated type
//! - An explicit, build-time-checked registry of solvers
//! - Parse and solve timing on every run
//!
//! # Quick Example
//!
//! ```
//! use aoc_runner::{Answer, InputParser, ParseError, RegistryBuilder, SolveError, Solver};
//!
//! struct Day1;
//!
//! impl InputParser for Day1 {
//!     type Data<'a> = Vec<i64>;
//!
//!     fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
//!         input
//!             .lines()
//!             .map(|l| l.parse().map_err(|_| ParseError::InvalidFormat("bad int".into())))
//!             .collect()
//!     }
//! }
//!
//! impl Solver for Day1 {
//!     const PARTS: u8 = 1;
//!
//!     fn solve_part(data: &mut Self::Data<'_>, _part: u8) -> Result<Answer, SolveError> {
//!         Ok(data.iter().sum::<i64>().into())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register::<Day1>(2022, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create(2022, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer.to_string(), "6");
//! ```

mod answer;
mod error;
mod instance;
mod registry;
mod solver;

pub use answer::Answer;
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    BASE_YEAR, CAPACITY, DAYS_PER_YEAR, FactoryInfo, MAX_YEARS, Registry, RegistryBuilder,
    SolverFactory,
};
pub use solver::{InputParser, Solver, SolverExt};
