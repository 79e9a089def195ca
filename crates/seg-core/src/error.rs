//! Model error type.
//!
//! Every failure the model can report is a configuration problem detected
//! before any board state is touched.  `ConfigIssue` names the exact problem
//! so callers (and tests) can match on it; `SegError` is the type that
//! crosses crate boundaries.  Sub-crates wrap `SegError` as one variant of
//! their own enums.

use thiserror::Error;

/// The specific reason a configuration was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigIssue {
    #[error("population fractions {type_a} + {type_b} exceed 1")]
    FractionsExceedOne { type_a: f64, type_b: f64 },

    #[error("population fraction {0} is outside [0, 1]")]
    FractionOutOfRange(f64),

    #[error("satisfaction threshold {0} is outside [0, 1]")]
    ThresholdOutOfRange(f64),

    #[error("side length must be at least 1")]
    ZeroSideLength,

    #[error("type sequence length {got} does not match board size {expected}")]
    SequenceLength { expected: usize, got: usize },

    #[error("unknown agent symbol {0:?}")]
    UnknownSymbol(char),
}

/// The top-level error type for `seg-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SegError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigIssue),
}

/// Shorthand result type for all `seg-*` crates.
pub type SegResult<T> = Result<T, SegError>;
