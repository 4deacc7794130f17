//! Registry mapping (year, day) to solver factories.

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;

/// Base year for AoC (first year of Advent of Code)
pub const BASE_YEAR: u16 = 2015;
/// Maximum number of years supported (2015-2034)
pub const MAX_YEARS: usize = 20;
/// Days per year in AoC (1-25)
pub const DAYS_PER_YEAR: usize = 25;
/// Total capacity of the flat storage
pub const CAPACITY: usize = MAX_YEARS * DAYS_PER_YEAR;

/// Calculate flat index from year/day, returning None if out of bounds
#[inline]
fn calc_index(year: u16, day: u8) -> Option<usize> {
    if year < BASE_YEAR || year >= BASE_YEAR + MAX_YEARS as u16 {
        return None;
    }
    if day == 0 || day > DAYS_PER_YEAR as u8 {
        return None;
    }
    let y = (year - BASE_YEAR) as usize;
    let d = (day - 1) as usize;
    Some(y * DAYS_PER_YEAR + d)
}

/// Reconstruct year/day from flat index
#[inline]
fn from_index(index: usize) -> (u16, u8) {
    let year = BASE_YEAR + (index / DAYS_PER_YEAR) as u16;
    let day = (index % DAYS_PER_YEAR) as u8 + 1;
    (year, day)
}

/// Thread-safe factory function type for creating solver instances
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Metadata about a registered solver factory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct FactoryEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for constructing a [`Registry`].
///
/// Registration is type-driven: `register::<S>(year, day)` wires up the
/// parse-then-instantiate factory from the solver type itself, so the parts
/// count can never disagree with the implementation. Duplicate and
/// out-of-range registrations are rejected at build time.
///
/// # Example
///
/// ```ignore
/// let registry = RegistryBuilder::new()
///     .register::<Day01>(2022, 1)?
///     .register::<Day02>(2022, 2)?
///     .build();
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<FactoryEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with pre-allocated storage
    pub fn new() -> Self {
        Self {
            entries: (0..CAPACITY).map(|_| None).collect(),
        }
    }

    /// Register a solver type for a specific year and day.
    ///
    /// Returns an error if year/day is out of bounds or already taken.
    pub fn register<S>(mut self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        let index = calc_index(year, day).ok_or(RegistrationError::InvalidYearDay(year, day))?;

        if self.entries[index].is_some() {
            return Err(RegistrationError::Duplicate(year, day));
        }

        let factory: SolverFactory = Box::new(move |input: &str| {
            Ok(Box::new(SolverInstance::<S>::new(year, day, input)?))
        });
        self.entries[index] = Some(FactoryEntry {
            factory,
            parts: S::PARTS,
        });
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> Registry {
        Registry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry for looking up and creating solvers.
///
/// Flat Vec storage with index math gives O(1) lookup across the supported
/// year/day range. Factories are `Send + Sync`, so one registry can be
/// shared across worker threads.
pub struct Registry {
    entries: Vec<Option<FactoryEntry>>,
}

impl Registry {
    /// Create a solver instance by invoking the factory for a specific year/day
    pub fn create<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let index = calc_index(year, day).ok_or(SolverError::InvalidYearDay(year, day))?;

        let entry = self
            .entries
            .get(index)
            .and_then(|e| e.as_ref())
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::Parse)
    }

    /// Get metadata for a specific factory
    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        calc_index(year, day)
            .and_then(|i| self.entries.get(i)?.as_ref())
            .map(|e| FactoryInfo {
                year,
                day,
                parts: e.parts,
            })
    }

    /// Check if a factory exists for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.get_info(year, day).is_some()
    }

    /// Iterate over metadata for all registered factories, in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.entries.iter().enumerate().filter_map(|(i, entry)| {
            entry.as_ref().map(|e| {
                let (year, day) = from_index(i);
                FactoryInfo {
                    year,
                    day,
                    parts: e.parts,
                }
            })
        })
    }

    /// Get the number of registered factories
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|e| e.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer::Answer;
    use crate::error::SolveError;
    use crate::solver::InputParser;

    struct SumSolver;

    impl InputParser for SumSolver {
        type Data<'a> = Vec<i64>;

        fn parse(input: &str) -> Result<Self::Data<'_>, ParseError> {
            input
                .lines()
                .map(|l| {
                    l.parse()
                        .map_err(|_| ParseError::InvalidFormat(format!("bad int: {l}")))
                })
                .collect()
        }
    }

    impl Solver for SumSolver {
        const PARTS: u8 = 2;

        fn solve_part(data: &mut Self::Data<'_>, part: u8) -> Result<Answer, SolveError> {
            match part {
                1 => Ok(data.iter().sum::<i64>().into()),
                _ => Ok(data.iter().max().copied().unwrap_or(0).into()),
            }
        }
    }

    #[test]
    fn register_create_and_solve() {
        let registry = RegistryBuilder::new()
            .register::<SumSolver>(2022, 1)
            .unwrap()
            .build();

        let mut solver = registry.create(2022, 1, "1\n2\n3").unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, Answer::Int(6));
        assert_eq!(solver.solve(2).unwrap().answer, Answer::Int(3));
        assert_eq!(solver.parts(), 2);
        assert_eq!((solver.year(), solver.day()), (2022, 1));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let result = RegistryBuilder::new()
            .register::<SumSolver>(2022, 1)
            .unwrap()
            .register::<SumSolver>(2022, 1);
        assert!(matches!(result, Err(RegistrationError::Duplicate(2022, 1))));
    }

    #[test]
    fn out_of_range_year_day_is_rejected() {
        assert!(matches!(
            RegistryBuilder::new().register::<SumSolver>(2014, 1),
            Err(RegistrationError::InvalidYearDay(2014, 1))
        ));
        assert!(matches!(
            RegistryBuilder::new().register::<SumSolver>(2022, 26),
            Err(RegistrationError::InvalidYearDay(2022, 26))
        ));
        assert!(matches!(
            RegistryBuilder::new().register::<SumSolver>(2022, 0),
            Err(RegistrationError::InvalidYearDay(2022, 0))
        ));
    }

    #[test]
    fn missing_solver_is_not_found() {
        let registry = RegistryBuilder::new().build();
        assert!(matches!(
            registry.create(2022, 1, ""),
            Err(SolverError::NotFound(2022, 1))
        ));
        assert!(!registry.contains(2022, 1));
        assert!(registry.is_empty());
    }

    #[test]
    fn parse_failure_surfaces_as_parse_error() {
        let registry = RegistryBuilder::new()
            .register::<SumSolver>(2022, 1)
            .unwrap()
            .build();
        assert!(matches!(
            registry.create(2022, 1, "not a number"),
            Err(SolverError::Parse(ParseError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn iter_info_yields_sorted_metadata() {
        let registry = RegistryBuilder::new()
            .register::<SumSolver>(2022, 5)
            .unwrap()
            .register::<SumSolver>(2022, 1)
            .unwrap()
            .build();
        let info: Vec<_> = registry.iter_info().map(|i| (i.year, i.day)).collect();
        assert_eq!(info, vec![(2022, 1), (2022, 5)]);
        assert_eq!(registry.len(), 2);
    }
}
