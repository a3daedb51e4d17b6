//! Cylinder surface-area objective.
//!
//! For a closed cylinder of fixed volume `V` and radius `r` the height is
//! `h = V / (π r²)` and the surface area is `S = 2πrh + 2πr²`. Minimizing `S`
//! over `r` has the closed-form solution `r* = (V / 2π)^(1/3)`, `h* = 2r*`.
//!
//! The genetic algorithm maximizes fitness, so the evaluator scores a radius
//! as `1 / S(r)`.

use crate::base::Genome;
use crate::errors::GaError;
use crate::evolution::FitnessEvaluator;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Dimensions of a cylinder with the objective's fixed volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderSolution {
    pub radius: f64,
    pub height: f64,
    pub surface_area: f64,
}

/// Surface area of a closed cylinder with a fixed volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderArea {
    volume: f64,
}

impl CylinderArea {
    /// Create the objective for a cylinder of the given volume.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `volume` is not finite and positive.
    pub fn new(volume: f64) -> Result<Self, GaError> {
        if !volume.is_finite() || volume <= 0.0 {
            return Err(GaError::invalid(
                "fixed_volume",
                format!("{volume} (must be finite and greater than 0.0)"),
            ));
        }
        Ok(Self { volume })
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Height of the cylinder with radius `radius`.
    pub fn height(&self, radius: f64) -> f64 {
        self.volume / (PI * radius * radius)
    }

    /// Total surface area (lateral surface plus both caps).
    pub fn surface_area(&self, radius: f64) -> f64 {
        let lateral = 2.0 * PI * radius * self.height(radius);
        let caps = 2.0 * PI * radius * radius;
        lateral + caps
    }

    pub fn solution(&self, radius: f64) -> CylinderSolution {
        CylinderSolution {
            radius,
            height: self.height(radius),
            surface_area: self.surface_area(radius),
        }
    }

    /// Closed-form minimum-area cylinder.
    pub fn analytic_optimum(&self) -> CylinderSolution {
        let radius = (self.volume / (2.0 * PI)).cbrt();
        CylinderSolution {
            radius,
            height: 2.0 * radius,
            surface_area: self.surface_area(radius),
        }
    }
}

impl FitnessEvaluator for CylinderArea {
    fn evaluate(&self, genome: Genome) -> f64 {
        1.0 / self.surface_area(genome)
    }
}
