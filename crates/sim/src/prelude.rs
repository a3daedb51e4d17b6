//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types and traits in the cylevo library.
//!
//! # Example
//!
//! ```
//! use cylevo_sim::prelude::*;
//!
//! let bounds = GeneBounds::new(0.1, 10.0).unwrap();
//! assert!(bounds.contains(5.0));
//! ```

pub use crate::base::{FitnessVector, GeneBounds, Genome};
pub use crate::errors::GaError;
pub use crate::evolution::{
    ArithmeticCrossover, FitnessEvaluator, GaussianMutation, MatingPool, RouletteSelector,
};
pub use crate::objective::{CylinderArea, CylinderSolution};
pub use crate::simulation::{
    Configuration, Engine, EngineBuilder, EngineState, GenerationObserver, GenerationSummary,
    Population, RunResult,
};
