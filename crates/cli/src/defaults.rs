//! Shared default values for run configuration.
//! These values are used by the `run` and `analytic` commands (via clap).

// Objective
pub const VOLUME: f64 = 1000.0;

// Search domain (cylinder radius)
pub const MIN_RADIUS: f64 = 0.1;
pub const MAX_RADIUS: f64 = 10.0;

// Execution
pub const POPULATION_SIZE: usize = 50;
pub const GENERATIONS: usize = 100;

// Evolution
pub const MUTATION_RATE: f64 = 0.1;
pub const CROSSOVER_RATE: f64 = 0.8;
pub const MUTATION_STD_DEV: f64 = 0.1;

// Reporting
pub const REPORT_EVERY: usize = 10;
