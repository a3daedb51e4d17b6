//! Scalar search domain.
//!
//! Every genome that exists in a population, a mating pool or an offspring
//! set lies inside a [`GeneBounds`]. Variation operators call
//! [`GeneBounds::clamp`] on every value they create.

use crate::errors::GaError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A candidate value under optimization.
pub type Genome = f64;

/// Closed interval `[lower, upper]` that bounds every genome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneBounds {
    lower: f64,
    upper: f64,
}

impl GeneBounds {
    /// Create new bounds.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if either bound is not finite or if
    /// `lower >= upper`.
    pub fn new(lower: f64, upper: f64) -> Result<Self, GaError> {
        if !lower.is_finite() || !upper.is_finite() {
            return Err(GaError::invalid(
                "bounds",
                format!("bounds must be finite, got [{lower}, {upper}]"),
            ));
        }
        if lower >= upper {
            return Err(GaError::invalid(
                "bounds",
                format!("lower bound must be smaller than upper. lower = {lower}, upper = {upper}"),
            ));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// Width of the interval.
    pub fn span(&self) -> f64 {
        self.upper - self.lower
    }

    /// Clamp a value into the interval.
    #[inline]
    pub fn clamp(&self, value: f64) -> Genome {
        value.clamp(self.lower, self.upper)
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        (self.lower..=self.upper).contains(&value)
    }

    /// Draw a genome uniformly from the interval.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Genome {
        rng.random_range(self.lower..=self.upper)
    }
}

impl fmt::Display for GeneBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
