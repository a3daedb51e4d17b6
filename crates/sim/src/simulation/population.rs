//! Population management.
//!
//! This module provides the population container used by the engine: an
//! ordered sequence of scalar genomes with a generation counter.

use crate::base::{FitnessVector, GeneBounds, Genome};
use crate::errors::GaError;
use crate::evolution::FitnessEvaluator;
use rand::Rng;

/// A population of scalar genomes.
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    /// The genomes in this population
    genomes: Vec<Genome>,
    /// Generation counter
    generation: usize,
}

impl Population {
    /// Create a population of generation 0 from existing genomes.
    pub fn new(genomes: Vec<Genome>) -> Self {
        Self {
            genomes,
            generation: 0,
        }
    }

    /// Sample `size` genomes independently and uniformly from `bounds`.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `size` is 0.
    pub fn random<R: Rng + ?Sized>(
        size: usize,
        bounds: &GeneBounds,
        rng: &mut R,
    ) -> Result<Self, GaError> {
        if size == 0 {
            return Err(GaError::invalid(
                "population_size",
                "must be greater than 0",
            ));
        }
        let genomes = (0..size).map(|_| bounds.sample(rng)).collect();
        Ok(Self::new(genomes))
    }

    /// Get the current generation number.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Get the number of genomes in the population.
    pub fn size(&self) -> usize {
        self.genomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genomes.is_empty()
    }

    pub fn genomes(&self) -> &[Genome] {
        &self.genomes
    }

    pub fn get(&self, index: usize) -> Option<Genome> {
        self.genomes.get(index).copied()
    }

    /// Create the population that replaces this one.
    pub fn successor(&self, offspring: Vec<Genome>) -> Self {
        Self {
            genomes: offspring,
            generation: self.generation + 1,
        }
    }

    /// Score every genome.
    ///
    /// # Errors
    /// Returns `DegenerateFitness` tagged with this population's generation if
    /// the evaluator breaks its contract.
    pub fn evaluate<F: FitnessEvaluator + ?Sized>(
        &self,
        evaluator: &F,
    ) -> Result<FitnessVector, GaError> {
        let values = self.genomes.iter().map(|&g| evaluator.evaluate(g)).collect();
        FitnessVector::new(values, self.generation)
    }

    /// Return the fittest genome and its fitness.
    ///
    /// `fitness` must be index-aligned with this population. Ties resolve to
    /// the first occurrence in population order.
    ///
    /// # Errors
    /// Returns `EmptyPopulation` if there are no genomes.
    pub fn best(&self, fitness: &FitnessVector) -> Result<(Genome, f64), GaError> {
        if self.genomes.is_empty() {
            return Err(GaError::EmptyPopulation);
        }
        debug_assert_eq!(self.genomes.len(), fitness.len());
        let index = fitness.argmax().ok_or(GaError::EmptyPopulation)?;
        Ok((self.genomes[index], fitness[index]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_population_new() {
        let pop = Population::new(vec![1.0, 2.0]);
        assert_eq!(pop.size(), 2);
        assert_eq!(pop.generation(), 0);
        assert_eq!(pop.get(1), Some(2.0));
        assert_eq!(pop.get(2), None);
    }

    #[test]
    fn test_population_random() {
        let bounds = GeneBounds::new(0.1, 10.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let pop = Population::random(50, &bounds, &mut rng).unwrap();

        assert_eq!(pop.size(), 50);
        assert!(pop.genomes().iter().all(|&g| bounds.contains(g)));
    }

    #[test]
    fn test_population_random_zero_size() {
        let bounds = GeneBounds::new(0.1, 10.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let err = Population::random(0, &bounds, &mut rng).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn test_successor_increments_generation() {
        let pop = Population::new(vec![1.0, 2.0]);
        let next = pop.successor(vec![3.0, 4.0]);
        assert_eq!(next.generation(), 1);
        assert_eq!(next.genomes(), &[3.0, 4.0]);
        assert_eq!(next.successor(vec![5.0, 6.0]).generation(), 2);
    }

    #[test]
    fn test_evaluate() {
        let pop = Population::new(vec![1.0, 2.0, 3.0]);
        let fitness = pop.evaluate(&|x: f64| x * x).unwrap();
        assert_eq!(fitness.as_slice(), &[1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_evaluate_degenerate_reports_generation() {
        let pop = Population::new(vec![1.0, 2.0]).successor(vec![1.0, 2.0]);
        let err = pop.evaluate(&|_: f64| 0.0).unwrap_err();
        assert!(matches!(err, GaError::DegenerateFitness { generation: 1, .. }));
    }

    #[test]
    fn test_best_first_occurrence() {
        let pop = Population::new(vec![1.0, 2.0, 3.0, 2.0]);
        // Peak at 2.0, which appears twice.
        let fitness = pop.evaluate(&|x: f64| 1.0 / (1.0 + (x - 2.0).abs())).unwrap();
        let (genome, value) = pop.best(&fitness).unwrap();
        assert_eq!(genome, 2.0);
        assert_eq!(value, 1.0);
    }

    #[test]
    fn test_best_empty() {
        let pop = Population::new(Vec::new());
        let fitness = Population::new(vec![1.0]).evaluate(&|_: f64| 1.0).unwrap();
        assert_eq!(pop.best(&fitness), Err(GaError::EmptyPopulation));
    }
}
