//! Local puzzle input files
//!
//! Inputs live on disk as `{root}/{year}/day{day:02}.txt`; the store never
//! fetches anything, it only resolves and reads those paths.

use std::fs;
use std::io;
use std::path::PathBuf;

/// File-backed store of puzzle inputs
pub struct InputStore {
    root: PathBuf,
}

impl InputStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path where the input for a year/day is expected
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join(year.to_string())
            .join(format!("day{:02}.txt", day))
    }

    /// Check whether the input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).exists()
    }

    /// Read the input, or None if the file does not exist
    pub fn get(&self, year: u16, day: u8) -> io::Result<Option<String>> {
        match fs::read_to_string(self.input_path(year, day)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}
