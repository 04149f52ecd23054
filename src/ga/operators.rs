//! Real-valued genetic operators.
//!
//! # Crossover
//!
//! - [`one_point_crossover`]: deterministic one-point recombination of
//!   consecutive parents, split at `G / 2`.
//!
//! # Mutation
//!
//! - [`mutate`]: adds a uniform random offset to the genes selected by a
//!   [`Mutation`] policy.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::error::GaError;
use super::population::Population;
use rand::distr::{Distribution, Uniform};
use rand::Rng;

// ============================================================================
// Crossover
// ============================================================================

/// Produces `offspring` children from `parents` by one-point crossover.
///
/// The crossover point is `c = G / 2` (integer division). Child `i` copies
/// genes `[0, c)` from parent `i mod K` and genes `[c, G)` from parent
/// `(i + 1) mod K`, so parents are cycled with wraparound and consecutive
/// children share one parent. No randomness is involved.
///
/// # Errors
/// [`GaError::EmptyParentPool`] if `parents` is empty and `offspring > 0`.
///
/// # Examples
///
/// ```
/// use ga_decimal::ga::{one_point_crossover, Population};
///
/// let parents = Population::from_rows(&[[1.0, 1.0, 1.0, 1.0], [2.0, 2.0, 2.0, 2.0]]).unwrap();
/// let children = one_point_crossover(&parents, 3).unwrap();
/// assert_eq!(children.row(0), &[1.0, 1.0, 2.0, 2.0]);
/// assert_eq!(children.row(1), &[2.0, 2.0, 1.0, 1.0]);
/// assert_eq!(children.row(2), &[1.0, 1.0, 2.0, 2.0]);
/// ```
pub fn one_point_crossover(parents: &Population, offspring: usize) -> Result<Population, GaError> {
    let genes = parents.genes();
    let mut children = Population::zeros(offspring, genes);
    if offspring == 0 {
        return Ok(children);
    }

    let k = parents.len();
    if k == 0 {
        return Err(GaError::EmptyParentPool);
    }

    let point = crossover_point(genes);
    for (i, child) in children.rows_mut().enumerate() {
        let head = parents.row(i % k);
        let tail = parents.row((i + 1) % k);
        child[..point].copy_from_slice(&head[..point]);
        child[point..].copy_from_slice(&tail[point..]);
    }

    Ok(children)
}

/// The split index used by [`one_point_crossover`] for `genes` genes.
pub fn crossover_point(genes: usize) -> usize {
    genes / 2
}

// ============================================================================
// Mutation
// ============================================================================

/// Which genes of each offspring receive a random offset.
///
/// The default, `Gene(4)`, perturbs the fifth gene of every offspring and
/// nothing else; it therefore requires candidates with at least five genes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// One offset per offspring, added to this gene index.
    Gene(usize),

    /// One independent offset per offspring for each listed gene index.
    Mask(Vec<usize>),

    /// Each gene of each offspring is perturbed independently with this
    /// probability.
    PerGene(f64),
}

impl Default for Mutation {
    fn default() -> Self {
        Mutation::Gene(4)
    }
}

impl Mutation {
    /// Checks the policy against candidates of `genes` genes.
    pub fn validate(&self, genes: usize) -> Result<(), GaError> {
        match self {
            Mutation::Gene(index) => check_index(*index, genes),
            Mutation::Mask(indices) => indices.iter().try_for_each(|&i| check_index(i, genes)),
            Mutation::PerGene(p) => {
                if (0.0..=1.0).contains(p) {
                    Ok(())
                } else {
                    Err(GaError::InvalidMutationProbability(*p))
                }
            }
        }
    }
}

fn check_index(index: usize, genes: usize) -> Result<(), GaError> {
    if index < genes {
        Ok(())
    } else {
        Err(GaError::GeneOutOfBounds { index, genes })
    }
}

/// Mutates `offspring` in place.
///
/// Every offset is drawn independently and uniformly from
/// `[-max_offset, max_offset]`. Genes the policy does not target are left
/// bit-identical.
///
/// # Errors
/// - [`GaError::GeneOutOfBounds`] / [`GaError::InvalidMutationProbability`]
///   if the policy does not fit the pool
/// - [`GaError::InvalidMutationOffset`] if `max_offset` is not finite and positive
pub fn mutate<R: Rng>(
    offspring: &mut Population,
    policy: &Mutation,
    max_offset: f64,
    rng: &mut R,
) -> Result<(), GaError> {
    policy.validate(offspring.genes())?;
    let offset = offset_distribution(max_offset)?;

    for row in offspring.rows_mut() {
        match policy {
            Mutation::Gene(index) => row[*index] += offset.sample(rng),
            Mutation::Mask(indices) => {
                for &i in indices {
                    row[i] += offset.sample(rng);
                }
            }
            Mutation::PerGene(p) => {
                for gene in row.iter_mut() {
                    if rng.random_bool(*p) {
                        *gene += offset.sample(rng);
                    }
                }
            }
        }
    }

    Ok(())
}

fn offset_distribution(max_offset: f64) -> Result<Uniform<f64>, GaError> {
    if !(max_offset.is_finite() && max_offset > 0.0) {
        return Err(GaError::InvalidMutationOffset(max_offset));
    }
    Uniform::new_inclusive(-max_offset, max_offset)
        .map_err(|_| GaError::InvalidMutationOffset(max_offset))
}

// ============================================================================
// Tests
// ============================================================================
