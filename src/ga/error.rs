//! Error type for the GA.

use thiserror::Error;

/// Errors raised by configuration validation and by the GA operators.
///
/// Every failure surfaces at the operation that detects it; nothing is
/// retried or partially recovered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    #[error("population_size must be at least 1, got {0}")]
    InvalidPopulationSize(usize),

    #[error("parent_count must be in 1..={population}, got {parents}")]
    InvalidParentCount { parents: usize, population: usize },

    #[error("generations must be at least 1")]
    ZeroGenerations,

    #[error("fitness equation must have at least one coefficient")]
    EmptyEquation,

    #[error("population must have at least one row and one gene")]
    EmptyPopulation,

    #[error("invalid gene range [{low}, {high}]: low must be finite and below high")]
    InvalidGeneRange { low: f64, high: f64 },

    #[error("shape mismatch: expected {expected} genes, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    #[error("gene index {index} out of bounds for candidates with {genes} genes")]
    GeneOutOfBounds { index: usize, genes: usize },

    #[error("mutation probability must be within [0, 1], got {0}")]
    InvalidMutationProbability(f64),

    #[error("mutation offset must be finite and positive, got {0}")]
    InvalidMutationOffset(f64),

    #[error("cannot select {requested} parents from {available} candidates")]
    TooManyParents { requested: usize, available: usize },

    #[error("crossover needs at least one parent")]
    EmptyParentPool,
}
