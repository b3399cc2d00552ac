//! Arity validation — check a segment's length before any conversion.

use crate::args::error::ArgsError;

/// How many values an option takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Boolean flag, no value (e.g., `-l`).
    Flag,
    /// Exactly one value (e.g., `-p 8080`).
    Single,
    /// One or more values, no upper bound (e.g., `-g this is a list`).
    List,
}

impl Arity {
    /// Confirm `segment` has a length this arity accepts.
    pub fn validate(self, flag: &str, segment: &[String]) -> Result<(), ArgsError> {
        let len = segment.len();
        match self {
            Arity::Flag if len > 0 => Err(too_many(flag)),
            Arity::Single if len == 0 => Err(insufficient(flag)),
            Arity::Single if len > 1 => Err(too_many(flag)),
            Arity::List if len == 0 => Err(insufficient(flag)),
            _ => Ok(()),
        }
    }
}

fn insufficient(flag: &str) -> ArgsError {
    ArgsError::InsufficientArguments {
        flag: flag.to_string(),
    }
}

fn too_many(flag: &str) -> ArgsError {
    ArgsError::TooManyArguments {
        flag: flag.to_string(),
    }
}
