//! Gaussian mutation of scalar genomes.
//!
//! Each offspring is perturbed independently with probability `rate` by
//! adding a sample from `Normal(0, std_dev)`. The result is clamped back into
//! the search domain, so mutation never produces an out-of-bounds genome.
//! Mutation is the only operator that can move the population outside the
//! hull of its parents; crossover alone only contracts it.

use crate::base::{GeneBounds, Genome};
use crate::errors::{GaError, check_probability};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Additive Gaussian mutation with a fixed rate and standard deviation.
#[derive(Debug, Clone, Copy)]
pub struct GaussianMutation {
    /// Per-genome probability of being perturbed
    rate: f64,
    /// Standard deviation of the perturbation
    std_dev: f64,
    normal: Normal<f64>,
}

impl GaussianMutation {
    /// Create a new Gaussian mutation operator.
    ///
    /// # Arguments
    /// * `rate` - Per-genome, per-generation mutation probability in [0.0, 1.0]
    /// * `std_dev` - Standard deviation of the perturbation (>= 0.0).
    ///   A value of 0.0 keeps counting mutations but never moves a genome.
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` if `rate` is not a probability or
    /// `std_dev` is negative or not finite.
    pub fn new(rate: f64, std_dev: f64) -> Result<Self, GaError> {
        let rate = check_probability("mutation_rate", rate)?;
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(GaError::invalid(
                "mutation_std_dev",
                format!("{std_dev} (must be finite and >= 0.0)"),
            ));
        }
        let normal = Normal::new(0.0, std_dev)
            .map_err(|e| GaError::invalid("mutation_std_dev", e.to_string()))?;

        Ok(Self {
            rate,
            std_dev,
            normal,
        })
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Perturb a single genome unconditionally and clamp it to `bounds`.
    #[inline]
    pub fn mutate<R: Rng + ?Sized>(&self, genome: Genome, bounds: &GeneBounds, rng: &mut R) -> Genome {
        bounds.clamp(genome + self.normal.sample(rng))
    }

    /// Apply mutation to every offspring independently.
    ///
    /// Returns the number of genomes that were perturbed.
    pub fn apply<R: Rng + ?Sized>(
        &self,
        offspring: &mut [Genome],
        bounds: &GeneBounds,
        rng: &mut R,
    ) -> usize {
        let mut count = 0;
        for genome in offspring.iter_mut() {
            if rng.random::<f64>() < self.rate {
                *genome = self.mutate(*genome, bounds, rng);
                count += 1;
            }
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn bounds() -> GeneBounds {
        GeneBounds::new(0.1, 10.0).unwrap()
    }

    #[test]
    fn test_mutation_new() {
        let mutation = GaussianMutation::new(0.1, 0.1).unwrap();
        assert_eq!(mutation.rate(), 0.1);
        assert_eq!(mutation.std_dev(), 0.1);
    }

    #[test]
    fn test_mutation_invalid_parameters() {
        assert!(GaussianMutation::new(-0.1, 0.1).is_err());
        assert!(GaussianMutation::new(1.1, 0.1).is_err());
        assert!(GaussianMutation::new(0.1, -1.0).is_err());
        assert!(GaussianMutation::new(0.1, f64::NAN).is_err());
        assert!(GaussianMutation::new(0.1, 0.0).is_ok());
    }

    #[test]
    fn test_apply_zero_rate() {
        let mutation = GaussianMutation::new(0.0, 1.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut offspring = vec![1.0, 2.0, 3.0, 4.0];

        let count = mutation.apply(&mut offspring, &bounds(), &mut rng);

        assert_eq!(count, 0);
        assert_eq!(offspring, vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_apply_full_rate() {
        let mutation = GaussianMutation::new(1.0, 0.5).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let original = vec![1.0, 2.0, 3.0, 4.0];
        let mut offspring = original.clone();

        let count = mutation.apply(&mut offspring, &bounds(), &mut rng);

        assert_eq!(count, 4);
        assert_ne!(offspring, original);
    }

    #[test]
    fn test_apply_zero_std_dev_counts_but_keeps_values() {
        let mutation = GaussianMutation::new(1.0, 0.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut offspring = vec![1.0, 2.0, 3.0];

        let count = mutation.apply(&mut offspring, &bounds(), &mut rng);

        assert_eq!(count, 3);
        assert_eq!(offspring, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_mutate_clamps() {
        let mutation = GaussianMutation::new(1.0, 100.0).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        for _ in 0..1_000 {
            let genome = mutation.mutate(5.0, &bounds(), &mut rng);
            assert!(bounds().contains(genome));
        }
    }

    #[test]
    fn test_apply_rate_statistics() {
        let mutation = GaussianMutation::new(0.1, 0.1).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2024);
        let mut offspring = vec![5.0; 50_000];

        let count = mutation.apply(&mut offspring, &bounds(), &mut rng);
        let observed = count as f64 / offspring.len() as f64;

        assert!((observed - 0.1).abs() < 0.01, "observed rate = {observed}");
    }

    #[test]
    fn test_mutate_perturbation_spread() {
        let mutation = GaussianMutation::new(1.0, 0.1).unwrap();
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(77);
        let n = 20_000;
        let deltas: Vec<f64> = (0..n)
            .map(|_| mutation.mutate(5.0, &bounds(), &mut rng) - 5.0)
            .collect();

        let mean = deltas.iter().sum::<f64>() / n as f64;
        let var = deltas.iter().map(|d| (d - mean).powi(2)).sum::<f64>() / n as f64;

        assert!(mean.abs() < 0.005, "mean = {mean}");
        assert!((var.sqrt() - 0.1).abs() < 0.005, "std = {}", var.sqrt());
    }

    #[test]
    fn test_apply_deterministic() {
        let mutation = GaussianMutation::new(0.5, 0.3).unwrap();
        let mut a = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let mut b = a.clone();

        let mut rng1 = Xoshiro256PlusPlus::seed_from_u64(9);
        let mut rng2 = Xoshiro256PlusPlus::seed_from_u64(9);
        let count_a = mutation.apply(&mut a, &bounds(), &mut rng1);
        let count_b = mutation.apply(&mut b, &bounds(), &mut rng2);

        assert_eq!(count_a, count_b);
        assert_eq!(a, b);
    }
}
