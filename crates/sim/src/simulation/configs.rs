//! Run configuration.
//!
//! This module provides the parameter structures for a genetic algorithm run,
//! grouped by concern: execution settings, evolutionary operator rates, the
//! search domain and the objective.

use crate::base::GeneBounds;
use crate::errors::{GaError, check_probability};
use crate::evolution::{ArithmeticCrossover, GaussianMutation};
use crate::objective::CylinderArea;
use serde::{Deserialize, Serialize};

/// The master configuration struct.
/// Can be deserialized from a file to fully reproduce a run.
///
/// A configuration is immutable for the duration of a run. Call
/// [`Configuration::validate`] (the engine does so on construction) to check
/// every constraint before any generation is evaluated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub execution: ExecutionConfig,
    pub evolution: EvolutionConfig,
    pub domain: DomainConfig,
    pub objective: ObjectiveConfig,
}

/// High-level run parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    /// Number of genomes in every population
    pub population_size: usize,
    /// Number of generations to evolve
    pub total_generations: usize,
    /// Optional RNG seed for reproducibility
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Fixed operator probabilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Per-genome mutation probability
    pub mutation_rate: f64,
    /// Standard deviation of the Gaussian perturbation
    pub mutation_std_dev: f64,
    /// Per-pair crossover probability
    pub crossover_rate: f64,
}

/// Search domain of the scalar genome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    pub min: f64,
    pub max: f64,
}

/// Objective parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveConfig {
    /// Volume of the cylinder whose surface area is minimized
    pub fixed_volume: f64,
}

impl Configuration {
    /// Check every configuration constraint.
    ///
    /// # Errors
    /// Returns the first `InvalidConfiguration` found.
    pub fn validate(&self) -> Result<(), GaError> {
        self.execution.validate()?;
        self.evolution.validate()?;
        self.domain.validate()?;
        self.objective.validate()?;
        Ok(())
    }

    /// Search bounds derived from the domain.
    pub fn bounds(&self) -> Result<GeneBounds, GaError> {
        self.domain.validate()?;
        GeneBounds::new(self.domain.min, self.domain.max)
    }

    /// Cylinder objective for the configured volume.
    pub fn cylinder(&self) -> Result<CylinderArea, GaError> {
        CylinderArea::new(self.objective.fixed_volume)
    }
}

impl ExecutionConfig {
    fn validate(&self) -> Result<(), GaError> {
        if self.population_size == 0 {
            return Err(GaError::invalid(
                "population_size",
                "must be greater than 0",
            ));
        }
        if self.total_generations == 0 {
            return Err(GaError::invalid(
                "total_generations",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl EvolutionConfig {
    fn validate(&self) -> Result<(), GaError> {
        check_probability("mutation_rate", self.mutation_rate)?;
        check_probability("crossover_rate", self.crossover_rate)?;
        if !self.mutation_std_dev.is_finite() || self.mutation_std_dev < 0.0 {
            return Err(GaError::invalid(
                "mutation_std_dev",
                format!("{} (must be finite and >= 0.0)", self.mutation_std_dev),
            ));
        }
        Ok(())
    }

    /// Build the mutation operator.
    pub fn mutation(&self) -> Result<GaussianMutation, GaError> {
        GaussianMutation::new(self.mutation_rate, self.mutation_std_dev)
    }

    /// Build the crossover operator.
    pub fn crossover(&self) -> Result<ArithmeticCrossover, GaError> {
        ArithmeticCrossover::new(self.crossover_rate)
    }
}

impl DomainConfig {
    fn validate(&self) -> Result<(), GaError> {
        if !self.min.is_finite() || self.min <= 0.0 {
            return Err(GaError::invalid(
                "min",
                format!("{} (must be finite and greater than 0.0)", self.min),
            ));
        }
        if !self.max.is_finite() || self.max <= self.min {
            return Err(GaError::invalid(
                "max",
                format!("{} (must be finite and greater than min = {})", self.max, self.min),
            ));
        }
        Ok(())
    }
}

impl ObjectiveConfig {
    fn validate(&self) -> Result<(), GaError> {
        CylinderArea::new(self.fixed_volume).map(|_| ())
    }
}
