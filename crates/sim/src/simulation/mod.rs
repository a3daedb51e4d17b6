//! Evolution engine and population management.
//!
//! This module provides the generational loop and its supporting types.

//! Re-exports
//!
//! The most commonly used types are re-exported here for convenience so
//! consumers can import them from `cylevo_sim::simulation`.
//!
//! - `Engine`: the state machine that runs generations and orchestrates
//!   selection/crossover/mutation.
//! - `Population`: in-memory container for the genomes of one generation.
//! - `EngineBuilder`: fluent builder for constructing `Engine` instances
//!   with sensible defaults and validation.

pub mod builder;
pub mod configs;
pub mod engine;
pub mod population;
pub mod summary;

pub use builder::EngineBuilder;
pub use configs::{Configuration, DomainConfig, EvolutionConfig, ExecutionConfig, ObjectiveConfig};
pub use engine::{Engine, EngineState};
pub use population::Population;
pub use summary::{GenerationObserver, GenerationSummary, RunResult};
