use anyhow::Context;
use clap::Parser;
use ga_decimal::ga::{GaConfig, GaRunner, Mutation};
use tracing_subscriber::EnvFilter;

/// Evolve a coefficient vector that maximizes a linear fitness equation.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Comma-separated equation coefficients; their count sets the gene count.
    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        default_values_t = [4.0, -2.0, 3.5, 5.0, -11.0, -4.7]
    )]
    equation: Vec<f64>,

    /// Candidates per generation.
    #[arg(long, default_value_t = 8)]
    population_size: usize,

    /// Parents kept per generation.
    #[arg(long, default_value_t = 4)]
    parents: usize,

    /// Number of generations.
    #[arg(long, default_value_t = 20)]
    generations: usize,

    /// Lower bound of the initial gene range.
    #[arg(long, default_value_t = -4.0, allow_hyphen_values = true)]
    low: f64,

    /// Upper bound of the initial gene range.
    #[arg(long, default_value_t = 4.0, allow_hyphen_values = true)]
    high: f64,

    /// Gene index to mutate; repeat to mutate several genes.
    #[arg(long = "mutate-gene", conflicts_with = "mutation_probability")]
    mutate_genes: Vec<usize>,

    /// Mutate every gene independently with this probability.
    #[arg(long)]
    mutation_probability: Option<f64>,

    /// Largest absolute mutation offset.
    #[arg(long, default_value_t = 1.0)]
    mutation_offset: f64,

    /// Random seed.
    #[arg(long)]
    seed: Option<u64>,
}

impl Args {
    fn mutation(&self) -> Mutation {
        match (self.mutation_probability, self.mutate_genes.as_slice()) {
            (Some(p), _) => Mutation::PerGene(p),
            (None, []) => Mutation::default(),
            (None, [gene]) => Mutation::Gene(*gene),
            (None, genes) => Mutation::Mask(genes.to_vec()),
        }
    }

    fn into_config(self) -> GaConfig {
        let mut config = GaConfig::default()
            .with_equation(self.equation.clone())
            .with_population_size(self.population_size)
            .with_parent_count(self.parents)
            .with_generations(self.generations)
            .with_gene_range(self.low, self.high)
            .with_mutation(self.mutation())
            .with_mutation_offset(self.mutation_offset);
        config.seed = self.seed;
        config
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Args::parse().into_config();
    let result = GaRunner::run(&config).context("invalid configuration")?;

    for candidate in &result.best {
        println!("Best solution: {candidate:?}");
        println!("Best solution fitness: {}", result.best_fitness);
    }

    Ok(())
}
