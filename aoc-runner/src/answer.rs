//! Puzzle answer representation.

use std::fmt;

/// The answer to one puzzle part.
///
/// Most parts produce a number; a few render text (letters drawn on a CRT,
/// a balanced-base number). Keeping the distinction lets callers compare
/// numeric answers without string round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Int(i64),
    Text(String),
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Int(n) => write!(f, "{n}"),
            Answer::Text(s) => write!(f, "{s}"),
        }
    }
}

macro_rules! answer_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Answer {
                fn from(n: $ty) -> Self {
                    Answer::Int(n as i64)
                }
            }
        )*
    };
}

answer_from_int!(i64, i32, u32, u64, usize);

impl From<String> for Answer {
    fn from(s: String) -> Self {
        Answer::Text(s)
    }
}

impl From<&str> for Answer {
    fn from(s: &str) -> Self {
        Answer::Text(s.to_owned())
    }
}
