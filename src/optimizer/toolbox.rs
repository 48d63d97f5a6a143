use super::{crossover, mutation, selection};
use crate::config::VariationParams;
use crate::core_types::Individual;
use fastrand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitnessDirection {
    Minimize,
    Maximize,
}

impl FitnessDirection {
    /// Strict comparison: equal scores are never "better".
    pub fn is_better(self, candidate: f64, incumbent: f64) -> bool {
        match self {
            FitnessDirection::Minimize => candidate < incumbent,
            FitnessDirection::Maximize => candidate > incumbent,
        }
    }

    pub fn worst(self) -> f64 {
        match self {
            FitnessDirection::Minimize => f64::INFINITY,
            FitnessDirection::Maximize => f64::NEG_INFINITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    Tournament { size: usize },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Crossover {
    Blend { alpha: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mutation {
    Gaussian { mu: f64, sigma: f64, indpb: f64 },
}

/// The operator set a search runs with, passed in explicitly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Toolbox {
    pub direction: FitnessDirection,
    pub selection: Selection,
    pub crossover: Crossover,
    pub mutation: Mutation,
    /// Probability that a consecutive offspring pair is mated.
    pub cxpb: f64,
    /// Probability that an offspring is mutated.
    pub mutpb: f64,
}

impl Default for Toolbox {
    fn default() -> Self {
        Self::from(&VariationParams::default())
    }
}

impl From<&VariationParams> for Toolbox {
    fn from(v: &VariationParams) -> Self {
        Self {
            direction: FitnessDirection::Minimize,
            selection: Selection::Tournament {
                size: v.tournament_size,
            },
            crossover: Crossover::Blend {
                alpha: v.blend_alpha,
            },
            mutation: Mutation::Gaussian {
                mu: v.mutation_mu,
                sigma: v.mutation_sigma,
                indpb: v.mutation_indpb,
            },
            cxpb: v.cxpb,
            mutpb: v.mutpb,
        }
    }
}

impl Toolbox {
    pub fn select(&self, population: &[Individual], k: usize, rng: &mut Rng) -> Vec<Individual> {
        match self.selection {
            Selection::Tournament { size } => {
                selection::tournament(population, k, size, self.direction, rng)
            }
        }
    }

    pub fn mate(&self, a: &mut Individual, b: &mut Individual, rng: &mut Rng) {
        match self.crossover {
            Crossover::Blend { alpha } => crossover::blend(&mut a.params, &mut b.params, alpha, rng),
        }
        a.invalidate();
        b.invalidate();
    }

    pub fn mutate(&self, ind: &mut Individual, rng: &mut Rng) {
        match self.mutation {
            Mutation::Gaussian { mu, sigma, indpb } => {
                mutation::gaussian(&mut ind.params, mu, sigma, indpb, rng)
            }
        }
        ind.invalidate();
    }

    /// Crossover on consecutive pairs with `cxpb`, then mutation of each
    /// offspring with `mutpb`. Only touched individuals lose their fitness.
    pub fn vary(&self, offspring: &mut [Individual], rng: &mut Rng) {
        for pair in offspring.chunks_exact_mut(2) {
            if rng.f64() < self.cxpb {
                let (left, right) = pair.split_at_mut(1);
                self.mate(&mut left[0], &mut right[0], rng);
            }
        }
        for ind in offspring.iter_mut() {
            if rng.f64() < self.mutpb {
                self.mutate(ind, rng);
            }
        }
    }
}
