//! Genetic algorithm over real-valued genes with a linear objective.
//!
//! Candidates are fixed-length vectors of `f64` genes, scored against a fixed
//! coefficient vector by `Σ x[i] * w[i]` (maximization). Each generation
//! keeps the best `K` candidates as parents and breeds the remaining `P − K`
//! slots from them.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (equation, population shape, mutation policy)
//! - [`GaRunner`]: Executes the generational loop
//! - [`GaResult`]: Final population, tied best candidates, and fitness history
//! - [`Population`]: P×G gene matrix
//! - [`Equation`]: The fitness coefficients
//!
//! # Operators
//!
//! - [`select_parents`]: Deterministic truncation selection, lowest index wins ties
//! - [`one_point_crossover`]: Split at `G / 2`, parents cycled with wraparound
//! - [`mutate`]: Uniform offset on the genes chosen by a [`Mutation`] policy
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
mod fitness;
mod operators;
mod population;
mod runner;
mod selection;

pub use config::GaConfig;
pub use error::GaError;
pub use fitness::Equation;
pub use operators::{crossover_point, mutate, one_point_crossover, Mutation};
pub use population::Population;
pub use runner::{GaResult, GaRunner, GenerationStats};
pub use selection::{select_indices, select_parents};
