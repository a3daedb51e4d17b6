//! Fitness evaluation and parent selection.
//!
//! Fitness decides reproductive success: genomes with a larger share of the
//! population's total fitness are copied into the mating pool more often.
//!
//! ## Roulette Wheel Selection
//! Each genome owns a slice of `[0, 1)` proportional to `fitness_i / total`.
//! A draw lands in exactly one slice, and the genome owning it joins the pool.
//! Sampling is with replacement: a genome may appear several times or not at
//! all. Because of this, selection pressure depends on the ratio between
//! fitness values, not on their ranking.

use crate::base::{FitnessVector, Genome};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// Trait for scoring a single genome.
///
/// Implementors must return a finite, strictly positive value where larger
/// means fitter. The evaluation must be pure: the same genome always gets the
/// same score. Values that break this contract abort the run with
/// `DegenerateFitness`.
///
/// Any `Fn(f64) -> f64` is an evaluator:
///
/// ```rust
/// use cylevo_sim::evolution::FitnessEvaluator;
///
/// let peak = |x: f64| 1.0 / (1.0 + (x - 3.0).powi(2));
/// assert_eq!(peak.evaluate(3.0), 1.0);
/// ```
pub trait FitnessEvaluator {
    /// Calculate the fitness of `genome`.
    fn evaluate(&self, genome: Genome) -> f64;
}

impl<F> FitnessEvaluator for F
where
    F: Fn(Genome) -> f64,
{
    fn evaluate(&self, genome: Genome) -> f64 {
        self(genome)
    }
}

/// Genomes chosen for breeding, in draw order.
#[derive(Debug, Clone, PartialEq)]
pub struct MatingPool(Vec<Genome>);

impl MatingPool {
    pub fn new(genomes: Vec<Genome>) -> Self {
        Self(genomes)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Genome] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<Genome> {
        self.0
    }

    /// Iterate over breeding pairs.
    ///
    /// Pairs are consecutive and non-overlapping: `(pool[0], pool[1])`,
    /// `(pool[2], pool[3])`, ... When the pool has an odd length the last
    /// genome is paired with `pool[0]`.
    pub fn pairs(&self) -> impl Iterator<Item = (Genome, Genome)> + '_ {
        let len = self.0.len();
        (0..len)
            .step_by(2)
            .map(move |i| (self.0[i], self.0[(i + 1) % len]))
    }
}

impl Index<usize> for MatingPool {
    type Output = Genome;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Fitness-proportionate ("roulette wheel") selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouletteSelector;

impl RouletteSelector {
    pub fn new() -> Self {
        Self
    }

    /// Build a mating pool with as many members as `population`.
    ///
    /// `fitness` must be index-aligned with `population`. Every draw consumes
    /// one `f64` in `[0, 1)` from `rng` and selects the first genome whose
    /// cumulative probability is at least the draw. If rounding leaves the
    /// final cumulative probability just below the draw, the last genome is
    /// selected.
    pub fn select<R: Rng + ?Sized>(
        &self,
        population: &[Genome],
        fitness: &FitnessVector,
        rng: &mut R,
    ) -> MatingPool {
        debug_assert_eq!(population.len(), fitness.len());

        let cumulative = fitness.cumulative_probabilities();
        let last = population.len().saturating_sub(1);

        let pool = (0..population.len())
            .map(|_| {
                let draw: f64 = rng.random();
                let index = cumulative
                    .iter()
                    .position(|&c| draw <= c)
                    .unwrap_or(last);
                population[index]
            })
            .collect();

        MatingPool(pool)
    }
}
