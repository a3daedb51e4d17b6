//! Builder pattern for creating engines.
//!
//! Provides a fluent API for configuring a run with sensible defaults and
//! eager validation.

use crate::errors::GaError;
use crate::evolution::FitnessEvaluator;
use crate::objective::CylinderArea;
use crate::simulation::{
    Configuration, DomainConfig, Engine, EvolutionConfig, ExecutionConfig, ObjectiveConfig,
};

/// Default cylinder volume used when none is configured.
pub const DEFAULT_FIXED_VOLUME: f64 = 1000.0;

/// Builder for constructing [`Engine`] instances with a fluent API.
///
/// Population size, generation count and bounds are required. Operator rates
/// default to 0.0 (no variation), the volume to 1000 and the seed to random.
///
/// # Examples
///
/// ```
/// use cylevo_sim::simulation::{EngineBuilder, GenerationSummary};
///
/// let mut engine = EngineBuilder::new()
///     .population_size(50)
///     .generations(100)
///     .bounds(0.1, 10.0)
///     .mutation(0.1, 0.1)
///     .crossover_rate(0.8)
///     .seed(42)
///     .build_cylinder()
///     .unwrap();
///
/// let result = engine.run(&mut |_: &GenerationSummary| {}).unwrap();
/// assert!((0.1..=10.0).contains(&result.best_genome));
/// ```
///
/// Any closure can serve as the objective:
///
/// ```
/// use cylevo_sim::simulation::EngineBuilder;
///
/// let engine = EngineBuilder::new()
///     .population_size(20)
///     .generations(10)
///     .bounds(1.0, 5.0)
///     .build(|x: f64| 1.0 / (1.0 + (x - 2.0).powi(2)))
///     .unwrap();
/// assert!(engine.population().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct EngineBuilder {
    // Required parameters
    population_size: Option<usize>,
    generations: Option<usize>,
    bounds: Option<(f64, f64)>,

    // Evolutionary parameters (with defaults)
    mutation_rate: f64,    // Default: 0.0 (no mutation)
    mutation_std_dev: f64, // Default: 0.0
    crossover_rate: f64,   // Default: 0.0 (no crossover)
    fixed_volume: f64,     // Default: 1000.0
    seed: Option<u64>,     // Default: None (random)
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineBuilder {
    /// Create a new engine builder with default values.
    pub fn new() -> Self {
        Self {
            population_size: None,
            generations: None,
            bounds: None,
            mutation_rate: 0.0,
            mutation_std_dev: 0.0,
            crossover_rate: 0.0,
            fixed_volume: DEFAULT_FIXED_VOLUME,
            seed: None,
        }
    }

    /// Set the population size (required).
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Set the number of generations to run (required).
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Set the search domain `[min, max]` (required).
    pub fn bounds(mut self, min: f64, max: f64) -> Self {
        self.bounds = Some((min, max));
        self
    }

    /// Set the mutation probability and perturbation standard deviation.
    pub fn mutation(mut self, rate: f64, std_dev: f64) -> Self {
        self.mutation_rate = rate;
        self.mutation_std_dev = std_dev;
        self
    }

    /// Set the crossover probability (default: 0.0).
    pub fn crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Set the cylinder volume (default: 1000.0).
    pub fn fixed_volume(mut self, volume: f64) -> Self {
        self.fixed_volume = volume;
        self
    }

    /// Set the random seed for reproducibility (default: None = random).
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Assemble and validate the configuration without building an engine.
    pub fn configuration(&self) -> Result<Configuration, GaError> {
        let population_size = self
            .population_size
            .ok_or_else(|| GaError::invalid("population_size", "missing required parameter"))?;
        let total_generations = self
            .generations
            .ok_or_else(|| GaError::invalid("total_generations", "missing required parameter"))?;
        let (min, max) = self
            .bounds
            .ok_or_else(|| GaError::invalid("bounds", "missing required parameter"))?;

        let config = Configuration {
            execution: ExecutionConfig {
                population_size,
                total_generations,
                seed: self.seed,
            },
            evolution: EvolutionConfig {
                mutation_rate: self.mutation_rate,
                mutation_std_dev: self.mutation_std_dev,
                crossover_rate: self.crossover_rate,
            },
            domain: DomainConfig { min, max },
            objective: ObjectiveConfig {
                fixed_volume: self.fixed_volume,
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Build an engine for an arbitrary objective.
    pub fn build<F: FitnessEvaluator>(self, evaluator: F) -> Result<Engine<F>, GaError> {
        Engine::new(self.configuration()?, evaluator)
    }

    /// Build an engine minimizing the surface area of the configured cylinder.
    pub fn build_cylinder(self) -> Result<Engine<CylinderArea>, GaError> {
        Engine::cylinder(self.configuration()?)
    }
}
