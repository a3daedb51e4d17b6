use clap::Args;

use crate::defaults;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Fixed cylinder volume
    #[arg(long, default_value_t = defaults::VOLUME)]
    pub volume: f64,

    /// Smallest radius considered
    #[arg(long, default_value_t = defaults::MIN_RADIUS)]
    pub min_radius: f64,

    /// Largest radius considered
    #[arg(long, default_value_t = defaults::MAX_RADIUS)]
    pub max_radius: f64,

    /// Population size
    #[arg(short = 'n', long, default_value_t = defaults::POPULATION_SIZE)]
    pub population_size: usize,

    /// Number of generations
    #[arg(short = 'g', long, default_value_t = defaults::GENERATIONS)]
    pub generations: usize,

    /// Per-offspring mutation probability (0.0-1.0)
    #[arg(long, default_value_t = defaults::MUTATION_RATE)]
    pub mutation_rate: f64,

    /// Per-pair crossover probability (0.0-1.0)
    #[arg(long, default_value_t = defaults::CROSSOVER_RATE)]
    pub crossover_rate: f64,

    /// Standard deviation of the Gaussian mutation
    #[arg(long, default_value_t = defaults::MUTATION_STD_DEV)]
    pub mutation_std_dev: f64,

    /// Random seed (default: random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print a progress line every N generations
    ///
    /// The last generation is always reported.
    #[arg(long, default_value_t = defaults::REPORT_EVERY)]
    pub report_every: usize,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Print a single JSON document instead of the text report
    #[arg(long, conflicts_with = "progress")]
    pub json: bool,
}
