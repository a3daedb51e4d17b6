use thiserror::Error;

/// Errors that can occur while configuring or running the genetic algorithm.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// A configuration value is missing, out of range or not finite.
    ///
    /// Raised before any generation runs.
    #[error("Invalid configuration for {field}: {reason}")]
    InvalidConfiguration {
        /// Name of the offending parameter
        field: &'static str,
        /// Human readable description of the violation
        reason: String,
    },

    /// The evaluator produced fitness values that make proportionate
    /// selection undefined (zero, negative, NaN or infinite).
    #[error("Degenerate fitness in generation {generation}: {reason}")]
    DegenerateFitness {
        /// Generation whose population was being scored
        generation: usize,
        /// What was wrong with the values
        reason: String,
    },

    /// An arg-max was requested over an empty population.
    #[error("Population is empty")]
    EmptyPopulation,
}

impl GaError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            field,
            reason: reason.into(),
        }
    }

    pub(crate) fn degenerate(generation: usize, reason: impl Into<String>) -> Self {
        Self::DegenerateFitness {
            generation,
            reason: reason.into(),
        }
    }

    /// Returns true for configuration errors.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration { .. })
    }
}

/// Validate that `value` is a probability in [0.0, 1.0].
pub(crate) fn check_probability(field: &'static str, value: f64) -> Result<f64, GaError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GaError::invalid(
            field,
            format!("{value} (must be between 0.0 and 1.0)"),
        ));
    }
    Ok(value)
}
