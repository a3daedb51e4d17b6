//! Evolution module providing selection, recombination, and mutation.
//!
//! This module implements the evolutionary operators of the genetic algorithm:
//! - **Selection**: Fitness evaluation and fitness-proportionate (roulette) sampling
//! - **Recombination**: Arithmetic crossover over adjacent parent pairs
//! - **Mutation**: Additive Gaussian perturbation
//!
//! Every operator takes the random source explicitly and clamps what it
//! creates to the search domain.

pub mod mutation;
pub mod recombination;
pub mod selection;

pub use mutation::GaussianMutation;
pub use recombination::ArithmeticCrossover;
pub use selection::{FitnessEvaluator, MatingPool, RouletteSelector};
