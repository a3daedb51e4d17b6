//! Base types for the search domain.
//!
//! This module provides the scalar genome, its bounds, and the validated
//! per-generation fitness vector used throughout the cylevo library.

pub mod bounds;
pub mod fitness;

pub use bounds::{GeneBounds, Genome};
pub use fitness::FitnessVector;
