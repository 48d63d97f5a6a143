use super::toolbox::FitnessDirection;
use crate::core_types::Individual;
use fastrand::Rng;

/// Runs `k` tournaments of `tournsize` aspirants drawn with replacement and
/// returns clones of the winners. Ties go to the first aspirant drawn.
pub fn tournament(
    population: &[Individual],
    k: usize,
    tournsize: usize,
    direction: FitnessDirection,
    rng: &mut Rng,
) -> Vec<Individual> {
    if population.is_empty() {
        return Vec::new();
    }

    let score = |ind: &Individual| ind.fitness().unwrap_or(direction.worst());

    (0..k)
        .map(|_| {
            let mut winner = &population[rng.usize(..population.len())];
            for _ in 1..tournsize {
                let aspirant = &population[rng.usize(..population.len())];
                if direction.is_better(score(aspirant), score(winner)) {
                    winner = aspirant;
                }
            }
            winner.clone()
        })
        .collect()
}
