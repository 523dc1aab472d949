use crate::environment::Action;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvironmentError {
    #[error("grid size must be at least 2, got {0}")]
    InvalidSize(usize),
    #[error("freeze probability must lie in [0, 1], got {0}")]
    InvalidFreezeProbability(f64),
    #[error("cost of {action} must be positive and finite, got {cost}")]
    NonPositiveCost { action: Action, cost: f64 },
    #[error("map row {row} has {found} cells, expected {expected}")]
    RaggedMap {
        row: usize,
        found: usize,
        expected: usize,
    },
    #[error("unknown map symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
    #[error("map must contain exactly one {0:?} cell")]
    MissingOrDuplicate(char),
}
