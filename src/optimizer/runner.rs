use super::checkpoint::{Checkpoint, CheckpointStore};
use super::initialization::random_population;
use super::stats::{HallOfFame, LogRecord, Logbook};
use super::toolbox::Toolbox;
use crate::config::Config;
use crate::core_types::{Individual, Weight};
use crate::corpus::Evaluate;
use crate::error::{HashTuneError, HtResult};
use rayon::prelude::*;
use strum::IntoEnumIterator;
use tracing::{debug, info, warn};

pub struct SearchOptions {
    pub population_size: usize,
    pub max_generations: usize,
    pub convergence_threshold: f64,
    pub convergence_generations: usize,
    pub init_min: f64,
    pub init_max: f64,
    pub num_threads: usize,
}

impl From<&Config> for SearchOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            population_size: cfg.search.population_size,
            max_generations: cfg.search.max_generations,
            convergence_threshold: cfg.search.convergence_threshold,
            convergence_generations: cfg.search.convergence_generations,
            init_min: cfg.search.init_min,
            init_max: cfg.search.init_max,
            num_threads: cfg.search.worker_threads(),
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Initialized { generation: usize },
    Running { generation: usize },
    Converged { generation: usize },
    MaxGenerationsReached { generation: usize },
}

impl SearchStatus {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            SearchStatus::Converged { .. } | SearchStatus::MaxGenerationsReached { .. }
        )
    }
}

/// What a finished generation looks like, handed to observers.
pub struct GenerationReport<'a> {
    pub generation: usize,
    pub record: &'a LogRecord,
    pub logbook: &'a Logbook,
    pub hall_of_fame: &'a HallOfFame,
    /// Set when this generation ends the search by convergence.
    pub converged: bool,
}

/// Receives every evaluated generation. An error aborts the run.
pub trait GenerationObserver {
    fn on_generation(&mut self, report: &GenerationReport<'_>) -> HtResult<()>;
}

pub struct NoopObserver;

impl GenerationObserver for NoopObserver {
    fn on_generation(&mut self, _report: &GenerationReport<'_>) -> HtResult<()> {
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub status: SearchStatus,
    pub best: Option<Individual>,
    pub generations_logged: usize,
}

/// Generational evolutionary search over hash weights.
///
/// Each generation evaluates the unevaluated members on a worker pool, records
/// statistics, checks convergence and, unless converged, breeds a replacement
/// population and checkpoints it.
pub struct EvolutionarySearch<E: Evaluate> {
    evaluator: E,
    options: SearchOptions,
    toolbox: Toolbox,
    store: Option<CheckpointStore>,
    rng: fastrand::Rng,
    population: Vec<Individual>,
    generation: usize,
    hall_of_fame: HallOfFame,
    logbook: Logbook,
    convergence_count: usize,
    status: SearchStatus,
}

impl<E: Evaluate> EvolutionarySearch<E> {
    pub fn new(evaluator: E, options: SearchOptions, toolbox: Toolbox, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };
        Self {
            evaluator,
            options,
            toolbox,
            store: None,
            rng,
            population: Vec::new(),
            generation: 0,
            hall_of_fame: HallOfFame::new(1),
            logbook: Logbook::new(),
            convergence_count: 0,
            status: SearchStatus::Idle,
        }
    }

    pub fn with_checkpoint_store(mut self, store: CheckpointStore) -> Self {
        self.store = Some(store);
        self
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn population(&self) -> &[Individual] {
        &self.population
    }

    pub fn logbook(&self) -> &Logbook {
        &self.logbook
    }

    pub fn hall_of_fame(&self) -> &HallOfFame {
        &self.hall_of_fame
    }

    pub fn convergence_count(&self) -> usize {
        self.convergence_count
    }

    /// Loads the stored checkpoint when `resume` is set and one is usable,
    /// otherwise seeds a fresh random population at generation 0.
    pub fn initialize(&mut self, resume: bool) {
        let inert: Vec<String> = Weight::iter()
            .filter(|w| !w.affects_hash())
            .map(|w| w.to_string())
            .collect();
        info!(
            "Note: {} multipliers are searched but not read by the active hash",
            inert.join(" and ")
        );

        let restored = if resume {
            self.store.as_ref().and_then(CheckpointStore::load)
        } else {
            None
        };

        match restored {
            Some(cp) => {
                info!(
                    "♻️  Resuming from checkpoint at generation {}",
                    cp.resume_generation()
                );
                self.restore(cp);
            }
            None => {
                self.population = random_population(
                    &mut self.rng,
                    self.options.population_size,
                    self.options.init_min,
                    self.options.init_max,
                );
                self.generation = 0;
                self.hall_of_fame = HallOfFame::new(1);
                self.logbook = Logbook::new();
                self.convergence_count = 0;
                self.status = SearchStatus::Initialized { generation: 0 };
            }
        }
    }

    /// Adopts a checkpoint wholesale, including the random stream.
    pub fn restore(&mut self, checkpoint: Checkpoint) {
        if checkpoint.population.len() != self.options.population_size {
            warn!(
                "Checkpoint population has {} members, configured size is {}",
                checkpoint.population.len(),
                self.options.population_size
            );
        }
        self.generation = checkpoint.resume_generation();
        self.convergence_count = checkpoint
            .logbook
            .trailing_stable(self.options.convergence_threshold);
        self.rng = fastrand::Rng::with_seed(checkpoint.rng_state);
        self.population = checkpoint.population;
        self.hall_of_fame = checkpoint.hall_of_fame;
        self.logbook = checkpoint.logbook;
        self.status = SearchStatus::Initialized {
            generation: self.generation,
        };
    }

    pub fn snapshot(&self) -> Checkpoint {
        Checkpoint {
            population: self.population.clone(),
            generation: self.generation,
            hall_of_fame: self.hall_of_fame.clone(),
            logbook: self.logbook.clone(),
            rng_state: self.rng.get_seed(),
        }
    }

    /// Drives generations until a terminal state on a worker pool that lives
    /// exactly as long as this call. Initializes (resuming) if still idle.
    pub fn run<O: GenerationObserver>(&mut self, observer: &mut O) -> HtResult<SearchOutcome> {
        if self.status == SearchStatus::Idle {
            self.initialize(true);
        }

        let threads = self.options.num_threads.max(1);
        info!("🔥 Spawning {} evaluation workers", threads);

        let status = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("hashtune-eval-{}", i))
            .build_scoped(
                |thread| thread.run(),
                |pool| -> HtResult<SearchStatus> {
                    loop {
                        let status = self.step_in(pool, observer)?;
                        if status.is_terminal() {
                            return Ok(status);
                        }
                    }
                },
            )??;

        Ok(SearchOutcome {
            status,
            best: self.hall_of_fame.best().cloned(),
            generations_logged: self.logbook.len(),
        })
    }

    /// Runs one generation on `pool` and returns the new status.
    pub fn step_in<O: GenerationObserver>(
        &mut self,
        pool: &rayon::ThreadPool,
        observer: &mut O,
    ) -> HtResult<SearchStatus> {
        let gen = match self.status {
            SearchStatus::Idle => {
                return Err(HashTuneError::Config(
                    "search must be initialized before stepping".to_string(),
                ))
            }
            SearchStatus::Initialized { generation } | SearchStatus::Running { generation } => {
                generation
            }
            terminal => return Ok(terminal),
        };

        if gen >= self.options.max_generations {
            self.status = SearchStatus::MaxGenerationsReached { generation: gen };
            return Ok(self.status);
        }

        info!("Starting Generation {}", gen);

        // 1. Evaluate
        self.evaluate_invalid(pool);

        // 2. Hall of fame and statistics
        self.hall_of_fame
            .update(&self.population, self.toolbox.direction);
        let record = LogRecord::compile(gen, &self.population).ok_or_else(|| {
            HashTuneError::Config("population is empty; nothing to evaluate".to_string())
        })?;
        self.logbook.record(record);
        info!("{}", Logbook::header_line());
        info!("{}", record);

        // 3. Convergence
        let stable = gen > 0
            && self
                .logbook
                .previous_avg()
                .is_some_and(|prev| (record.avg - prev).abs() < self.options.convergence_threshold);
        if stable {
            self.convergence_count += 1;
        } else {
            self.convergence_count = 0;
        }
        let converged = self.convergence_count >= self.options.convergence_generations;

        observer.on_generation(&GenerationReport {
            generation: gen,
            record: &record,
            logbook: &self.logbook,
            hall_of_fame: &self.hall_of_fame,
            converged,
        })?;

        if let Some(best) = self.hall_of_fame.best() {
            info!(
                "Hall of Famer: {}, Fitness: {}",
                best.params,
                best.fitness().unwrap_or(f64::NAN)
            );
        }

        if converged {
            info!("Convergence likely reached.");
            self.status = SearchStatus::Converged { generation: gen };
            return Ok(self.status);
        }
        info!(
            "Convergence estimation: {} generations remaining until likely convergence",
            self.options.convergence_generations - self.convergence_count
        );

        // 4. Selection and variation
        let mut offspring = self
            .toolbox
            .select(&self.population, self.population.len(), &mut self.rng);
        self.toolbox.vary(&mut offspring, &mut self.rng);
        self.population = offspring;

        // 5. Checkpoint
        if let Some(store) = &self.store {
            store.save(&self.snapshot())?;
        }

        let next = gen + 1;
        self.generation = next;
        self.status = if next >= self.options.max_generations {
            SearchStatus::MaxGenerationsReached { generation: next }
        } else {
            SearchStatus::Running { generation: next }
        };
        Ok(self.status)
    }

    /// Scores every individual lacking a fitness. Results are matched back by
    /// index, independent of completion order.
    fn evaluate_invalid(&mut self, pool: &rayon::ThreadPool) {
        let pending: Vec<usize> = self
            .population
            .iter()
            .enumerate()
            .filter(|(_, ind)| !ind.is_evaluated())
            .map(|(i, _)| i)
            .collect();
        if pending.is_empty() {
            return;
        }

        let evaluator = &self.evaluator;
        let population = &self.population;
        let scores: Vec<f64> = pool.install(|| {
            pending
                .par_iter()
                .map(|&i| evaluator.evaluate(&population[i].params))
                .collect()
        });

        debug!("Evaluated {} individual(s)", pending.len());
        for (i, score) in pending.into_iter().zip(scores) {
            self.population[i].set_fitness(score);
        }
    }
}
