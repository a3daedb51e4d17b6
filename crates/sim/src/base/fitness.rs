use crate::errors::GaError;
use std::ops::Index;

/// Fitness scores for one generation, index-aligned with its population.
///
/// A `FitnessVector` can only be built from values that are finite and
/// strictly positive, with a finite, non-zero total. This is what makes
/// fitness-proportionate selection well defined.
#[derive(Debug, Clone, PartialEq)]
pub struct FitnessVector {
    values: Vec<f64>,
    total: f64,
}

impl FitnessVector {
    /// Validate raw fitness values for `generation`.
    ///
    /// # Errors
    /// Returns `DegenerateFitness` if any value is zero, negative, NaN or
    /// infinite, or if the sum of all values is zero or not finite.
    pub fn new(values: Vec<f64>, generation: usize) -> Result<Self, GaError> {
        if let Some((index, value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v <= 0.0)
        {
            return Err(GaError::degenerate(
                generation,
                format!("evaluator returned {value} for genome at index {index}"),
            ));
        }

        let total: f64 = values.iter().sum();
        if !total.is_finite() || total <= 0.0 {
            return Err(GaError::degenerate(
                generation,
                format!("total fitness is {total}"),
            ));
        }

        Ok(Self { values, total })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Sum of all fitness values.
    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().reduce(f64::max)
    }

    pub fn mean(&self) -> Option<f64> {
        if self.values.is_empty() {
            None
        } else {
            Some(self.total / self.values.len() as f64)
        }
    }

    /// Index of the highest score. Ties resolve to the first occurrence.
    pub fn argmax(&self) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &value) in self.values.iter().enumerate() {
            match best {
                Some((_, current)) if value <= current => {}
                _ => best = Some((i, value)),
            }
        }
        best.map(|(i, _)| i)
    }

    /// Cumulative selection probabilities in population order.
    ///
    /// The last entry is 1.0 up to floating point rounding.
    pub fn cumulative_probabilities(&self) -> Vec<f64> {
        self.values
            .iter()
            .scan(0.0, |acc, &f| {
                *acc += f / self.total;
                Some(*acc)
            })
            .collect()
    }
}

impl Index<usize> for FitnessVector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}
