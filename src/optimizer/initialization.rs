use crate::core_types::{Individual, ParameterVector};
use fastrand::Rng;

/// Draws one weight uniformly from `[min, max)`.
#[inline]
fn uniform(rng: &mut Rng, min: f64, max: f64) -> f64 {
    min + (max - min) * rng.f64()
}

/// Each of the four weights is drawn independently.
pub fn random_parameters(rng: &mut Rng, min: f64, max: f64) -> ParameterVector {
    ParameterVector::new(
        uniform(rng, min, max),
        uniform(rng, min, max),
        uniform(rng, min, max),
        uniform(rng, min, max),
    )
}

/// A fresh population of unevaluated individuals.
pub fn random_population(rng: &mut Rng, size: usize, min: f64, max: f64) -> Vec<Individual> {
    (0..size)
        .map(|_| Individual::new(random_parameters(rng, min, max)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_shape_and_bounds() {
        let mut rng = Rng::with_seed(42);
        let pop = random_population(&mut rng, 50, 0.1, 100.0);
        assert_eq!(pop.len(), 50);
        for ind in &pop {
            assert!(!ind.is_evaluated());
            for v in ind.params.to_array() {
                assert!((0.1..100.0).contains(&v), "weight {} out of range", v);
            }
        }
    }

    #[test]
    fn test_seeded_population_is_reproducible() {
        let a = random_population(&mut Rng::with_seed(7), 10, 0.1, 100.0);
        let b = random_population(&mut Rng::with_seed(7), 10, 0.1, 100.0);
        assert_eq!(a, b);
    }
}
