use serde::{Deserialize, Serialize};
use std::fmt;
use strum_macros::{Display, EnumIter};

/// One dimension of the hash weight vector.
#[derive(Debug, Clone, Copy, EnumIter, Display, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Weight {
    Vowel,
    Endings,
    Consonant,
    Frequency,
}

impl Weight {
    /// Whether the active hash actually reads this weight.
    ///
    /// Consonant and frequency multipliers ride along in the search space but
    /// have no effect on bucket placement, so they drift freely under mutation.
    pub fn affects_hash(self) -> bool {
        matches!(self, Weight::Vowel | Weight::Endings)
    }
}

/// The four character-class multipliers that parameterize the hash.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterVector {
    pub vowel: f64,
    pub endings: f64,
    pub consonant: f64,
    pub frequency: f64,
}

impl ParameterVector {
    pub const LEN: usize = 4;

    pub fn new(vowel: f64, endings: f64, consonant: f64, frequency: f64) -> Self {
        Self {
            vowel,
            endings,
            consonant,
            frequency,
        }
    }

    pub fn get(&self, weight: Weight) -> f64 {
        match weight {
            Weight::Vowel => self.vowel,
            Weight::Endings => self.endings,
            Weight::Consonant => self.consonant,
            Weight::Frequency => self.frequency,
        }
    }

    pub fn to_array(self) -> [f64; 4] {
        [self.vowel, self.endings, self.consonant, self.frequency]
    }

    pub fn from_array(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }
}

impl Default for ParameterVector {
    /// The hand-tuned weights the hash started out with.
    fn default() -> Self {
        Self::new(2.0, 4.0, 2.0, 2.0)
    }
}

impl fmt::Display for ParameterVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.vowel, self.endings, self.consonant, self.frequency
        )
    }
}

/// A candidate weight vector plus its cached fitness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Individual {
    pub params: ParameterVector,
    fitness: Option<f64>,
}

impl Individual {
    pub fn new(params: ParameterVector) -> Self {
        Self {
            params,
            fitness: None,
        }
    }

    pub fn with_fitness(params: ParameterVector, fitness: f64) -> Self {
        Self {
            params,
            fitness: Some(fitness),
        }
    }

    pub fn fitness(&self) -> Option<f64> {
        self.fitness
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub fn set_fitness(&mut self, value: f64) {
        self.fitness = Some(value);
    }

    /// Drops the cached fitness. Must follow any change to `params`.
    pub fn invalidate(&mut self) {
        self.fitness = None;
    }
}
