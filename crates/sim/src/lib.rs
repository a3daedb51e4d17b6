//! # Simulation Crate
//!
//! The `sim` crate provides the core logic of the genetic algorithm.
//! It includes modules for the scalar genome and its bounds, the
//! evolutionary operators (selection, crossover, mutation), the cylinder
//! objective, and the generational engine.

pub mod base;
pub mod errors;
pub mod evolution;
pub mod objective;
pub mod simulation;
pub mod prelude;

pub use base::{GeneBounds, Genome};
pub use errors::GaError;
