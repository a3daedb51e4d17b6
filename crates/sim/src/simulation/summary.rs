//! Per-generation statistics and run results.

use crate::base::{FitnessVector, Genome};
use serde::{Deserialize, Serialize};

/// Statistics of one generation, emitted once when its offspring replace it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Index of the generation, starting at 0
    pub generation: usize,
    /// Highest fitness in the generation's population
    pub max_fitness: f64,
    /// Mean fitness of the generation's population
    pub mean_fitness: f64,
    /// Number of offspring perturbed by mutation while breeding the next generation
    pub mutation_count: usize,
}

impl GenerationSummary {
    pub(crate) fn new(generation: usize, fitness: &FitnessVector, mutation_count: usize) -> Self {
        Self {
            generation,
            max_fitness: fitness.max().unwrap_or(0.0),
            mean_fitness: fitness.mean().unwrap_or(0.0),
            mutation_count,
        }
    }
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Fittest genome of the final population
    pub best_genome: Genome,
    /// Fitness of `best_genome`
    pub best_fitness: f64,
}

/// Receives generation summaries synchronously, in increasing generation order.
///
/// Every `FnMut(&GenerationSummary)` is an observer, so a closure collecting
/// into a `Vec` is enough for most callers:
///
/// ```rust
/// use cylevo_sim::simulation::{GenerationObserver, GenerationSummary};
///
/// let mut seen = Vec::new();
/// let mut observer = |s: &GenerationSummary| seen.push(s.generation);
/// observer.on_generation(&GenerationSummary {
///     generation: 0,
///     max_fitness: 1.0,
///     mean_fitness: 0.5,
///     mutation_count: 2,
/// });
/// assert_eq!(seen, vec![0]);
/// ```
pub trait GenerationObserver {
    fn on_generation(&mut self, summary: &GenerationSummary);
}

impl<F> GenerationObserver for F
where
    F: FnMut(&GenerationSummary),
{
    fn on_generation(&mut self, summary: &GenerationSummary) {
        self(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_from_fitness() {
        let fitness = FitnessVector::new(vec![1.0, 2.0, 6.0], 4).unwrap();
        let summary = GenerationSummary::new(4, &fitness, 3);
        assert_eq!(summary.generation, 4);
        assert_eq!(summary.max_fitness, 6.0);
        assert_eq!(summary.mean_fitness, 3.0);
        assert_eq!(summary.mutation_count, 3);
    }

    #[test]
    fn test_closure_observer() {
        let mut count = 0;
        {
            let mut observer = |_: &GenerationSummary| count += 1;
            let summary = GenerationSummary {
                generation: 0,
                max_fitness: 1.0,
                mean_fitness: 1.0,
                mutation_count: 0,
            };
            observer.on_generation(&summary);
            observer.on_generation(&summary);
        }
        assert_eq!(count, 2);
    }
}
