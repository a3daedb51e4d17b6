//! Evolution engine for the generational genetic algorithm.
//!
//! This module provides the main loop that orchestrates evaluation,
//! selection, crossover, mutation and replacement across generations.
//!
//! The engine is a small state machine:
//!
//! ```text
//! Uninitialized --step--> Running(0) --step--> Running(1) ... Running(G) --step--> Completed
//! ```
//!
//! The first [`Engine::step`] samples the initial population. Every step
//! scores the current population, builds a mating pool, breeds and mutates
//! the offspring, and replaces the population with them. Once `G` generations
//! have been replaced, one more step scores the final population so the best
//! genome can be extracted, and yields no summary. There is no elitism: only
//! the final population is inspected for the result.

use crate::base::{FitnessVector, GeneBounds};
use crate::errors::GaError;
use crate::evolution::{ArithmeticCrossover, FitnessEvaluator, GaussianMutation, RouletteSelector};
use crate::objective::CylinderArea;
use crate::simulation::{Configuration, GenerationObserver, GenerationSummary, Population, RunResult};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use tracing::{debug, error, info, instrument};

/// Lifecycle of an [`Engine`].
#[derive(Debug, Clone, PartialEq)]
pub enum EngineState {
    /// No population exists yet.
    Uninitialized,
    /// The population of the given generation awaits its transition.
    Running { population: Population },
    /// The final population has been scored.
    Completed {
        population: Population,
        fitness: FitnessVector,
    },
}

/// Main genetic algorithm engine.
#[derive(Debug)]
pub struct Engine<F> {
    /// Run configuration
    config: Configuration,
    /// Search domain
    bounds: GeneBounds,
    selector: RouletteSelector,
    crossover: ArithmeticCrossover,
    mutation: GaussianMutation,
    /// Injected objective
    evaluator: F,
    /// Random number generator (Xoshiro256++)
    rng: Xoshiro256PlusPlus,
    state: EngineState,
}

impl Engine<CylinderArea> {
    /// Create an engine minimizing the surface area of the configured cylinder.
    pub fn cylinder(config: Configuration) -> Result<Self, GaError> {
        let objective = config.cylinder()?;
        Self::new(config, objective)
    }
}

impl<F: FitnessEvaluator> Engine<F> {
    /// Create a new engine.
    ///
    /// The configuration is validated eagerly. When it carries no seed the
    /// RNG is seeded from the thread-local generator.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if any parameter is out of range.
    #[instrument(level = "debug", skip(config, evaluator), fields(seed = ?config.execution.seed))]
    pub fn new(config: Configuration, evaluator: F) -> Result<Self, GaError> {
        config.validate()?;

        let bounds = config.bounds()?;
        let crossover = config.evolution.crossover()?;
        let mutation = config.evolution.mutation()?;

        let rng = if let Some(seed) = config.execution.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        Ok(Self {
            config,
            bounds,
            selector: RouletteSelector::new(),
            crossover,
            mutation,
            evaluator,
            rng,
            state: EngineState::Uninitialized,
        })
    }

    /// Get reference to the run configuration.
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    pub fn bounds(&self) -> &GeneBounds {
        &self.bounds
    }

    pub fn evaluator(&self) -> &F {
        &self.evaluator
    }

    pub fn state(&self) -> &EngineState {
        &self.state
    }

    pub fn is_completed(&self) -> bool {
        matches!(self.state, EngineState::Completed { .. })
    }

    /// Get the current population, if one exists.
    pub fn population(&self) -> Option<&Population> {
        match &self.state {
            EngineState::Uninitialized => None,
            EngineState::Running { population } | EngineState::Completed { population, .. } => {
                Some(population)
            }
        }
    }

    /// Get the current generation number, if the engine is initialized.
    pub fn generation(&self) -> Option<usize> {
        self.population().map(Population::generation)
    }

    /// Sample the initial population.
    fn initialize(&mut self) -> Result<(), GaError> {
        let population = Population::random(
            self.config.execution.population_size,
            &self.bounds,
            &mut self.rng,
        )?;
        debug!(size = population.size(), bounds = %self.bounds, "initialized population");
        self.state = EngineState::Running { population };
        Ok(())
    }

    /// Advance the run by one generation.
    ///
    /// Returns the summary of the generation that was just replaced. The step
    /// after the last generation scores the final population, completes the
    /// run and returns `None`, as does every step after that.
    ///
    /// # Errors
    /// Returns `DegenerateFitness` if the evaluator produces values that make
    /// selection undefined. The engine is left in its previous state.
    #[instrument(level = "debug", skip(self), fields(generation = ?self.generation()))]
    pub fn step(&mut self) -> Result<Option<GenerationSummary>, GaError> {
        if matches!(self.state, EngineState::Uninitialized) {
            self.initialize()?;
        }

        let EngineState::Running { population } = &self.state else {
            return Ok(None);
        };
        let generation = population.generation();

        if generation >= self.config.execution.total_generations {
            let fitness = population.evaluate(&self.evaluator).inspect_err(|e| {
                error!(generation, error = %e, "final evaluation failed");
            })?;
            self.complete(fitness);
            return Ok(None);
        }

        // 1. Score the current population
        let fitness = population.evaluate(&self.evaluator).inspect_err(|e| {
            error!(generation, error = %e, "fitness evaluation failed");
        })?;

        // 2. Fill the mating pool
        let pool = self
            .selector
            .select(population.genomes(), &fitness, &mut self.rng);

        // 3. Breed offspring pairwise
        let mut offspring = self.crossover.recombine(&pool, &self.bounds, &mut self.rng);

        // 4. Mutate every offspring independently
        let mutation_count = self
            .mutation
            .apply(&mut offspring, &self.bounds, &mut self.rng);

        let summary = GenerationSummary::new(generation, &fitness, mutation_count);
        debug!(
            generation,
            max_fitness = summary.max_fitness,
            mean_fitness = summary.mean_fitness,
            mutation_count,
            "generation complete"
        );

        // 5. Replace the population
        let next = population.successor(offspring);
        self.state = EngineState::Running { population: next };

        Ok(Some(summary))
    }

    /// Attach the final fitness to the running population.
    fn complete(&mut self, fitness: FitnessVector) {
        self.state = match std::mem::replace(&mut self.state, EngineState::Uninitialized) {
            EngineState::Running { population } => EngineState::Completed {
                population,
                fitness,
            },
            other => other,
        };
    }

    /// Run to completion, delivering each generation summary to `observer`.
    ///
    /// # Errors
    /// Propagates the first error from [`Engine::step`].
    #[instrument(
        level = "info",
        skip(self, observer),
        fields(
            population_size = self.config.execution.population_size,
            generations = self.config.execution.total_generations,
        )
    )]
    pub fn run<O: GenerationObserver + ?Sized>(
        &mut self,
        observer: &mut O,
    ) -> Result<RunResult, GaError> {
        info!("starting run");

        while let Some(summary) = self.step()? {
            observer.on_generation(&summary);
        }

        let result = self.result()?.ok_or(GaError::EmptyPopulation)?;
        info!(
            best_genome = result.best_genome,
            best_fitness = result.best_fitness,
            "run complete"
        );
        Ok(result)
    }

    /// Best genome of the final population, once the run is completed.
    ///
    /// # Errors
    /// Returns `EmptyPopulation` if the final population has no genomes.
    pub fn result(&self) -> Result<Option<RunResult>, GaError> {
        let EngineState::Completed {
            population,
            fitness,
        } = &self.state
        else {
            return Ok(None);
        };

        let (best_genome, best_fitness) = population.best(fitness)?;
        Ok(Some(RunResult {
            best_genome,
            best_fitness,
        }))
    }
}
