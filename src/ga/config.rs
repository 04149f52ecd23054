//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of a run: the fitness equation, the
//! population shape, the initial sampling range, the mutation policy, and the
//! number of generations.

use super::error::GaError;
use super::fitness::Equation;
use super::operators::Mutation;

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use ga_decimal::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 8);
/// assert_eq!(config.parent_count, 4);
/// assert_eq!(config.generations, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use ga_decimal::ga::{GaConfig, Mutation};
///
/// let config = GaConfig::default()
///     .with_equation(vec![1.0, 2.0, 3.0, 4.0, 5.0])
///     .with_population_size(20)
///     .with_parent_count(6)
///     .with_mutation(Mutation::PerGene(0.2))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Coefficients of the linear objective; their count fixes the gene count.
    pub equation: Equation,

    /// Number of candidates per generation (P).
    pub population_size: usize,

    /// Number of truncation-selection survivors per generation (K).
    ///
    /// Must satisfy `1 <= parent_count <= population_size`.
    pub parent_count: usize,

    /// Number of generations to run. There is no early stop.
    pub generations: usize,

    /// Inclusive `[low, high]` range for the initial genes.
    pub gene_range: (f64, f64),

    /// Which offspring genes are perturbed each generation.
    pub mutation: Mutation,

    /// Mutation offsets are drawn from `[-mutation_offset, mutation_offset]`.
    pub mutation_offset: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            equation: Equation::default(),
            population_size: 8,
            parent_count: 4,
            generations: 20,
            gene_range: (-4.0, 4.0),
            mutation: Mutation::default(),
            mutation_offset: 1.0,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the fitness equation coefficients.
    ///
    /// An empty vector is kept as-is and rejected by [`validate`](Self::validate).
    pub fn with_equation(mut self, coefficients: Vec<f64>) -> Self {
        self.equation = Equation::from(coefficients);
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the number of parents kept each generation.
    pub fn with_parent_count(mut self, k: usize) -> Self {
        self.parent_count = k;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the initial sampling range.
    pub fn with_gene_range(mut self, low: f64, high: f64) -> Self {
        self.gene_range = (low, high);
        self
    }

    /// Sets the mutation policy.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Sets the mutation offset bound.
    pub fn with_mutation_offset(mut self, offset: f64) -> Self {
        self.mutation_offset = offset;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for a quick run: the original toy setup.
    ///
    /// - Population: 8, Parents: 4, Generations: 20
    /// - Mutation: gene 4 only, offset ±1.0
    pub fn fast() -> Self {
        Self::default()
    }

    /// Preset for a moderate search with mutation spread over every gene.
    ///
    /// - Population: 32, Parents: 8, Generations: 100
    /// - Mutation: each gene with probability 0.2, offset ±1.0
    pub fn balanced() -> Self {
        Self {
            population_size: 32,
            parent_count: 8,
            generations: 100,
            mutation: Mutation::PerGene(0.2),
            ..Self::default()
        }
    }

    /// Preset for a longer search with finer mutation steps.
    ///
    /// - Population: 64, Parents: 16, Generations: 300
    /// - Mutation: each gene with probability 0.1, offset ±0.5
    pub fn quality() -> Self {
        Self {
            population_size: 64,
            parent_count: 16,
            generations: 300,
            mutation: Mutation::PerGene(0.1),
            mutation_offset: 0.5,
            ..Self::default()
        }
    }

    /// Number of genes per candidate (G).
    pub fn genes(&self) -> usize {
        self.equation.len()
    }

    /// Number of offspring bred per generation (P − K).
    pub fn offspring_count(&self) -> usize {
        self.population_size.saturating_sub(self.parent_count)
    }

    /// Validates the configuration.
    ///
    /// Asking for more parents than candidates is rejected here rather than
    /// silently degrading into duplicate parents.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.equation.is_empty() {
            return Err(GaError::EmptyEquation);
        }
        if self.population_size == 0 {
            return Err(GaError::InvalidPopulationSize(self.population_size));
        }
        if self.parent_count == 0 || self.parent_count > self.population_size {
            return Err(GaError::InvalidParentCount {
                parents: self.parent_count,
                population: self.population_size,
            });
        }
        if self.generations == 0 {
            return Err(GaError::ZeroGenerations);
        }
        let (low, high) = self.gene_range;
        if !(low.is_finite() && high.is_finite() && low < high) {
            return Err(GaError::InvalidGeneRange { low, high });
        }
        if !(self.mutation_offset.is_finite() && self.mutation_offset > 0.0) {
            return Err(GaError::InvalidMutationOffset(self.mutation_offset));
        }
        self.mutation.validate(self.genes())
    }
}
