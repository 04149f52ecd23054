//! GA generational loop.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation →
//! reassembly → repeat, for a fixed number of generations.

use super::config::GaConfig;
use super::error::GaError;
use super::operators::{mutate, one_point_crossover};
use super::population::Population;
use super::selection::select_parents;
use crate::random::rng_from_option;
use rand::Rng;

/// Per-generation progress, reported to observers after each generation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// 1-based index of the generation just completed.
    pub generation: usize,

    /// Highest fitness in the population produced by this generation.
    pub best_fitness: f64,

    /// Mean fitness of that population.
    pub mean_fitness: f64,

    /// `(rows, genes)` of that population.
    pub population_shape: (usize, usize),
}

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Every candidate of the final population that attains
    /// [`best_fitness`](Self::best_fitness), in population order.
    ///
    /// If every score is NaN (e.g. a NaN coefficient), all candidates tie
    /// and the whole population is reported.
    pub best: Vec<Vec<f64>>,

    /// Maximum fitness in the final population.
    pub best_fitness: f64,

    /// Maximum fitness in the initial (generation-0) population.
    pub initial_best_fitness: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness of the initial population followed by the best fitness
    /// after each generation (`generations + 1` entries).
    pub fitness_history: Vec<f64>,

    /// The final population.
    pub population: Population,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```
/// use ga_decimal::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&config).unwrap();
/// assert!(result.best_fitness >= result.initial_best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA with an RNG seeded from [`GaConfig::seed`].
    pub fn run(config: &GaConfig) -> Result<GaResult, GaError> {
        let mut rng = rng_from_option(config.seed);
        Self::run_with_rng(config, &mut rng)
    }

    /// Runs the GA drawing all randomness from `rng`; `config.seed` is ignored.
    pub fn run_with_rng<R: Rng>(config: &GaConfig, rng: &mut R) -> Result<GaResult, GaError> {
        Self::run_with_callback(config, rng, |_| {})
    }

    /// Runs the GA and calls `on_generation` after every generation.
    ///
    /// # Errors
    /// Returns the first [`GaError`] from configuration validation. A valid
    /// configuration cannot fail afterwards.
    pub fn run_with_callback<R, F>(
        config: &GaConfig,
        rng: &mut R,
        mut on_generation: F,
    ) -> Result<GaResult, GaError>
    where
        R: Rng,
        F: FnMut(&GenerationStats),
    {
        config.validate()?;

        let equation = &config.equation;
        let genes = config.genes();
        let parent_count = config.parent_count;
        let offspring_count = config.offspring_count();
        let (low, high) = config.gene_range;

        tracing::info!(
            population_size = config.population_size,
            parent_count,
            genes,
            generations = config.generations,
            "starting genetic algorithm"
        );

        // 1. Initialize population
        let mut population = Population::random(config.population_size, genes, low, high, rng)?;

        let initial_best_fitness = max_fitness(&equation.evaluate(&population)?);
        let mut fitness_history = Vec::with_capacity(config.generations + 1);
        fitness_history.push(initial_best_fitness);

        // 2. Generational loop
        for gen in 0..config.generations {
            let fitness = equation.evaluate(&population)?;
            let parents = select_parents(&population, &fitness, parent_count)?;
            let mut offspring = one_point_crossover(&parents, offspring_count)?;
            mutate(&mut offspring, &config.mutation, config.mutation_offset, rng)?;

            population.write_rows(0, &parents)?;
            population.write_rows(parent_count, &offspring)?;

            let scores = equation.evaluate(&population)?;
            let stats = GenerationStats {
                generation: gen + 1,
                best_fitness: max_fitness(&scores),
                mean_fitness: scores.iter().sum::<f64>() / scores.len() as f64,
                population_shape: population.shape(),
            };
            tracing::debug!(
                generation = stats.generation,
                best = stats.best_fitness,
                mean = stats.mean_fitness,
                "generation complete"
            );
            fitness_history.push(stats.best_fitness);
            on_generation(&stats);
        }

        // 3. Report every candidate tied for the final maximum
        let fitness = equation.evaluate(&population)?;
        let best_fitness = max_fitness(&fitness);
        let best = population
            .rows()
            .zip(&fitness)
            .filter(|(_, &score)| ties(score, best_fitness))
            .map(|(row, _)| row.to_vec())
            .collect();

        tracing::info!(
            best_fitness,
            initial_best_fitness,
            "genetic algorithm finished"
        );

        Ok(GaResult {
            best,
            best_fitness,
            initial_best_fitness,
            generations: config.generations,
            fitness_history,
            population,
        })
    }
}

/// Score equality where NaN ties with NaN.
fn ties(score: f64, best: f64) -> bool {
    score == best || (score.is_nan() && best.is_nan())
}

/// Largest non-NaN score, or NaN if every score is NaN.
fn max_fitness(scores: &[f64]) -> f64 {
    scores.iter().copied().fold(f64::NAN, f64::max)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Mutation;
    use crate::random::create_rng;

    #[test]
    fn test_default_run_completes() {
        let config = GaConfig::default().with_seed(42);
        let result = GaRunner::run(&config).unwrap();

        assert_eq!(result.generations, 20);
        assert_eq!(result.population.shape(), (8, 6));
        assert_eq!(result.fitness_history.len(), 21);
        assert!(!result.best.is_empty());
        for candidate in &result.best {
            assert_eq!(candidate.len(), 6);
            assert_eq!(config.equation.score(candidate), result.best_fitness);
        }
    }

    #[test]
    fn test_best_never_regresses() {
        // Parents are copied unmutated into the next population, so the best
        // candidate of one generation always survives into the next.
        let config = GaConfig::default()
            .with_generations(50)
            .with_seed(7);
        let result = GaRunner::run(&config).unwrap();

        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best fitness regressed: {} < {}",
                window[1],
                window[0]
            );
        }
        assert!(result.best_fitness >= result.initial_best_fitness);
        assert_eq!(result.fitness_history[0], result.initial_best_fitness);
        assert_eq!(*result.fitness_history.last().unwrap(), result.best_fitness);
    }

    #[test]
    fn test_seed_reproducible() {
        let config = GaConfig::default().with_seed(123);
        let a = GaRunner::run(&config).unwrap();
        let b = GaRunner::run(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_run_with_rng_matches_seeded_run() {
        let config = GaConfig::default().with_seed(5);
        let seeded = GaRunner::run(&config).unwrap();
        let explicit = GaRunner::run_with_rng(&config, &mut create_rng(5)).unwrap();
        assert_eq!(seeded, explicit);
    }

    #[test]
    fn test_callback_per_generation() {
        let config = GaConfig::default().with_generations(12).with_seed(1);
        let mut seen = Vec::new();
        let result =
            GaRunner::run_with_callback(&config, &mut create_rng(1), |s| seen.push(*s)).unwrap();

        assert_eq!(seen.len(), 12);
        for (i, stats) in seen.iter().enumerate() {
            assert_eq!(stats.generation, i + 1);
            assert!(stats.mean_fitness <= stats.best_fitness + 1e-9);
            assert_eq!(stats.best_fitness, result.fitness_history[i + 1]);
            assert_eq!(stats.population_shape, (8, 6));
        }
    }

    #[test]
    fn test_shape_holds_every_generation() {
        let config = GaConfig::default()
            .with_equation(vec![1.0; 7])
            .with_population_size(11)
            .with_parent_count(3)
            .with_generations(25)
            .with_seed(4);
        let mut shapes = Vec::new();
        GaRunner::run_with_callback(&config, &mut create_rng(4), |s| {
            shapes.push(s.population_shape)
        })
        .unwrap();
        assert_eq!(shapes, vec![(11, 7); 25]);
    }

    #[test]
    fn test_nan_equation_reports_whole_population() {
        let config = GaConfig::default()
            .with_equation(vec![1.0, f64::NAN, 1.0, 1.0, 1.0, 1.0])
            .with_seed(8);
        let result = GaRunner::run(&config).unwrap();
        assert!(result.best_fitness.is_nan());
        assert_eq!(result.best.len(), 8);
        assert_eq!(result.best, result.population.to_rows());
    }

    #[test]
    fn test_improves_on_longer_run() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_parent_count(6)
            .with_generations(200)
            .with_mutation(Mutation::PerGene(0.5))
            .with_seed(42);
        let result = GaRunner::run(&config).unwrap();
        assert!(
            result.best_fitness > result.initial_best_fitness,
            "expected improvement over 200 generations: {} vs {}",
            result.best_fitness,
            result.initial_best_fitness
        );
    }

    #[test]
    fn test_all_parents_no_offspring() {
        // K == P: the population is only re-sorted, never changed.
        let config = GaConfig::default()
            .with_parent_count(8)
            .with_generations(5)
            .with_seed(3);
        let result = GaRunner::run(&config).unwrap();
        assert!(result
            .fitness_history
            .iter()
            .all(|&f| f == result.initial_best_fitness));
        let scores = config.equation.evaluate(&result.population).unwrap();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_ties_report_all_best() {
        // With one parent every offspring is a clone differing only at gene 4.
        let config = GaConfig::default()
            .with_equation(vec![1.0, 1.0, 1.0, 1.0, 0.0])
            .with_population_size(5)
            .with_parent_count(1)
            .with_generations(3)
            .with_mutation(Mutation::Gene(4))
            .with_seed(9);
        let result = GaRunner::run(&config).unwrap();
        // Gene 4 has zero weight, so every clone scores the same.
        assert_eq!(result.best.len(), 5);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GaConfig::default().with_parent_count(10);
        assert!(matches!(
            GaRunner::run(&config),
            Err(GaError::InvalidParentCount { .. })
        ));

        let config = GaConfig::default().with_equation(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            GaRunner::run(&config),
            Err(GaError::GeneOutOfBounds { index: 4, genes: 3 })
        );
    }

    #[test]
    fn test_max_fitness_ignores_nan() {
        assert_eq!(max_fitness(&[1.0, f64::NAN, 3.0]), 3.0);
        assert!(max_fitness(&[f64::NAN]).is_nan());
    }
}
