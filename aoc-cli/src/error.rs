//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_runner::RegistrationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Executor error
    #[error("{0}")]
    Executor(#[from] ExecutorError),
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input file read failed
    #[error("Failed to read input for {year}/{day}: {source}")]
    InputRead {
        year: u16,
        day: u8,
        #[source]
        source: std::io::Error,
    },

    /// Input file does not exist
    #[error("No input file for {year}/{day} (expected {})", path.display())]
    MissingInput { year: u16, day: u8, path: PathBuf },

    /// Channel send error
    #[error("Channel send error")]
    ChannelSend,

    /// Thread pool creation failed
    #[error("Thread pool creation failed: {0}")]
    ThreadPool(String),

    /// Multiple errors collected during parallel execution
    #[error("Multiple errors occurred ({} total)", .0.len())]
    Multiple(Vec<ExecutorError>),
}

impl ExecutorError {
    /// Merge two errors, flattening nested `Multiple` variants.
    pub fn combine(first: ExecutorError, second: ExecutorError) -> ExecutorError {
        let errors = match (first, second) {
            (ExecutorError::Multiple(mut v1), ExecutorError::Multiple(v2)) => {
                v1.extend(v2);
                v1
            }
            (ExecutorError::Multiple(mut v), e) => {
                v.push(e);
                v
            }
            (e, ExecutorError::Multiple(v)) => {
                let mut combined = vec![e];
                combined.extend(v);
                combined
            }
            (a, b) => vec![a, b],
        };
        ExecutorError::Multiple(errors)
    }

    /// Combine an optional accumulated error with a new one
    pub fn combine_opt(existing: Option<ExecutorError>, new: ExecutorError) -> ExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combine_flattens_nested_multiples() {
        let a = ExecutorError::ChannelSend;
        let b = ExecutorError::ThreadPool("pool".into());
        let c = ExecutorError::ChannelSend;

        let ab = ExecutorError::combine(a, b);
        assert!(matches!(&ab, ExecutorError::Multiple(v) if v.len() == 2));

        let abc = ExecutorError::combine(ab, c);
        assert!(matches!(&abc, ExecutorError::Multiple(v) if v.len() == 3));

        let nested = ExecutorError::combine(
            ExecutorError::ChannelSend,
            ExecutorError::Multiple(vec![ExecutorError::ChannelSend]),
        );
        assert!(matches!(&nested, ExecutorError::Multiple(v) if v.len() == 2));
    }
}
