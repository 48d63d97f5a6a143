use super::toolbox::FitnessDirection;
use crate::core_types::Individual;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Population fitness summary for one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub gen: usize,
    pub min: f64,
    pub avg: f64,
    /// Population standard deviation (divides by `n`).
    pub std: f64,
    pub max: f64,
}

impl LogRecord {
    /// Summarizes the evaluated members of `population`. `None` if none are evaluated.
    pub fn compile(gen: usize, population: &[Individual]) -> Option<Self> {
        let values: Vec<f64> = population.iter().filter_map(Individual::fitness).collect();
        if values.is_empty() {
            return None;
        }

        let n = values.len() as f64;
        let avg = values.iter().sum::<f64>() / n;
        let var = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / n;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(Self {
            gen,
            min,
            avg,
            std: var.sqrt(),
            max,
        })
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<5}\t{:<10.6}\t{:<10.6}\t{:<10.6}\t{:<10.6}",
            self.gen, self.min, self.avg, self.std, self.max
        )
    }
}

/// Append-only history of per-generation records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Logbook {
    records: Vec<LogRecord>,
}

impl Logbook {
    pub const HEADER: [&'static str; 5] = ["gen", "min", "avg", "std", "max"];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: LogRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn last(&self) -> Option<&LogRecord> {
        self.records.last()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Average of the record before the latest one.
    pub fn previous_avg(&self) -> Option<f64> {
        self.records
            .len()
            .checked_sub(2)
            .map(|i| self.records[i].avg)
    }

    /// Generation a resumed run should start at.
    pub fn next_generation(&self) -> Option<usize> {
        self.last().map(|r| r.gen + 1)
    }

    /// How many of the most recent records moved the average by less than
    /// `threshold` relative to their predecessor. Generation 0 never counts.
    pub fn trailing_stable(&self, threshold: f64) -> usize {
        self.records
            .windows(2)
            .rev()
            .take_while(|w| w[1].gen > 0 && (w[1].avg - w[0].avg).abs() < threshold)
            .count()
    }

    pub fn header_line() -> String {
        Self::HEADER.join("\t")
    }
}

/// Best individuals ever seen, best first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HallOfFame {
    capacity: usize,
    entries: Vec<Individual>,
}

impl HallOfFame {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn entries(&self) -> &[Individual] {
        &self.entries
    }

    pub fn best(&self) -> Option<&Individual> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Admits evaluated members of `population` that beat the current worst
    /// entry (or fill a free slot), skipping exact duplicates.
    pub fn update(&mut self, population: &[Individual], direction: FitnessDirection) {
        if self.capacity == 0 {
            return;
        }
        for ind in population {
            let Some(fit) = ind.fitness() else {
                continue;
            };
            let full = self.entries.len() >= self.capacity;
            let beats_worst = self
                .entries
                .last()
                .and_then(Individual::fitness)
                .map_or(true, |worst| direction.is_better(fit, worst));

            if full && !beats_worst {
                continue;
            }
            if self.entries.iter().any(|e| e.params == ind.params) {
                continue;
            }
            if full {
                self.entries.pop();
            }
            let pos = self
                .entries
                .iter()
                .position(|e| {
                    e.fitness()
                        .map_or(true, |f| direction.is_better(fit, f))
                })
                .unwrap_or(self.entries.len());
            self.entries.insert(pos, ind.clone());
        }
    }
}

impl Default for HallOfFame {
    fn default() -> Self {
        Self::new(1)
    }
}
