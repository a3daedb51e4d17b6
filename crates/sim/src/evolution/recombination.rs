//! Arithmetic crossover between pairs of parents.
//!
//! A child is a random convex combination of its two parents:
//! `child = α·parent1 + (1 − α)·parent2` with `α` drawn uniformly from
//! `[0, 1)`. Children therefore always lie between their parents, and the
//! operator contracts the population towards its mean.

use crate::base::{GeneBounds, Genome};
use crate::errors::{GaError, check_probability};
use crate::evolution::MatingPool;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Arithmetic (blend) crossover applied pairwise over a mating pool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArithmeticCrossover {
    /// Probability that a parent pair is recombined rather than copied
    rate: f64,
}

impl ArithmeticCrossover {
    /// Create a new crossover operator.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `rate` is outside [0.0, 1.0].
    pub fn new(rate: f64) -> Result<Self, GaError> {
        let rate = check_probability("crossover_rate", rate)?;
        Ok(Self { rate })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Produce one child from two parents and clamp it to `bounds`.
    #[inline]
    pub fn blend<R: Rng + ?Sized>(
        &self,
        parent1: Genome,
        parent2: Genome,
        bounds: &GeneBounds,
        rng: &mut R,
    ) -> Genome {
        let alpha: f64 = rng.random();
        bounds.clamp(alpha * parent1 + (1.0 - alpha) * parent2)
    }

    /// Build an offspring population from a mating pool.
    ///
    /// Each pair from [`MatingPool::pairs`] is recombined with probability
    /// `rate` into two children with independent weights, or otherwise
    /// copied forward unchanged. The result has exactly `pool.len()` members:
    /// for an odd pool the wrap-around pair contributes only its first child.
    pub fn recombine<R: Rng + ?Sized>(
        &self,
        pool: &MatingPool,
        bounds: &GeneBounds,
        rng: &mut R,
    ) -> Vec<Genome> {
        let mut offspring = Vec::with_capacity(pool.len() + 1);

        for (parent1, parent2) in pool.pairs() {
            if rng.random::<f64>() < self.rate {
                offspring.push(self.blend(parent1, parent2, bounds, rng));
                offspring.push(self.blend(parent2, parent1, bounds, rng));
            } else {
                offspring.push(parent1);
                offspring.push(parent2);
            }
        }

        offspring.truncate(pool.len());
        offspring
    }
}
