//! Genetic-algorithm search for coefficient vectors that maximize a fixed
//! linear fitness equation.
//!
//! The engine is deliberately small and deterministic apart from its two
//! random steps (initial sampling and mutation):
//!
//! - **Initialization**: genes drawn uniformly from a configurable range
//! - **Evaluation**: dot product of each candidate with the equation
//! - **Selection**: truncation, keeping the best `K` candidates as parents
//! - **Crossover**: one-point, split at the middle gene
//! - **Mutation**: uniform offset on a configurable set of genes
//!
//! ```
//! use ga_decimal::ga::{GaConfig, GaRunner};
//!
//! let result = GaRunner::run(&GaConfig::default().with_seed(1)).unwrap();
//! for candidate in &result.best {
//!     println!("{candidate:?} -> {}", result.best_fitness);
//! }
//! ```

pub mod ga;
pub mod random;
