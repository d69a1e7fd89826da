//! Driving a board through one or more complete runs.
//!
//! [`Experiment`] owns a [`Board`] loaded with a seeded
//! [`BeanBatch`](quincunx_bean::BeanBatch). [`run()`](Experiment::run)
//! steps the board until it reports no more work, applies the configured
//! half trim, and returns a [`RunMetrics`]. Calling `run` again scoops the
//! beans back up first, so every run starts from a loaded board.
//! [`run_all()`](Experiment::run_all) performs every configured run and
//! reports progress as [`RunEvent`]s.
//!
//! # Example
//!
//! ```
//! use quincunx_core::DecisionMode;
//! use quincunx_engine::{Experiment, ExperimentConfig};
//!
//! let config = ExperimentConfig::new(10, 200, DecisionMode::Skill);
//! let mut experiment = Experiment::new(config).unwrap();
//! let metrics = experiment.run(|_| {});
//! assert_eq!(metrics.beans_slotted, 200);
//! assert_eq!(metrics.ticks, 200 + 10 - 1);
//! ```

use quincunx_bean::BeanBatch;
use quincunx_core::BoardSnapshot;
use rand_chacha::ChaCha8Rng;

use crate::board::Board;
use crate::config::{ConfigError, ExperimentConfig};
use crate::metrics::RunMetrics;

/// Progress reported by [`Experiment::run_all`].
#[derive(Clone, Copy, Debug)]
pub enum RunEvent<'a> {
    /// A run is about to start; `snapshot` is the freshly loaded board.
    Started {
        /// Zero-based run index.
        run: usize,
        /// Board state before the first tick.
        snapshot: &'a BoardSnapshot,
    },
    /// The board advanced one productive tick.
    Ticked(&'a BoardSnapshot),
    /// A run finished and its trim, if any, was applied.
    Finished {
        /// Summary of the run.
        metrics: &'a RunMetrics,
        /// Board state after the trim.
        snapshot: &'a BoardSnapshot,
    },
}

/// A configured board plus its bean batch.
#[derive(Debug)]
pub struct Experiment {
    config: ExperimentConfig,
    board: Board<ChaCha8Rng>,
    runs_completed: usize,
    // Set once a run has emptied the backlog; cleared by `repeat`.
    spent: bool,
}

impl Experiment {
    /// Validate `config`, build its beans, and load them into a new board.
    pub fn new(config: ExperimentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let batch = BeanBatch::new(config.slot_count, config.mode, config.seed)?;
        let mut board = Board::new(config.slot_count)?;
        board.reset(batch.build(config.bean_count));

        tracing::info!(
            slot_count = config.slot_count,
            bean_count = config.bean_count,
            mode = %config.mode,
            seed = config.seed,
            runs = config.runs,
            "experiment ready"
        );
        Ok(Self {
            config,
            board,
            runs_completed: 0,
            spent: false,
        })
    }

    /// The validated configuration.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Read-only access to the board.
    pub fn board(&self) -> &Board<ChaCha8Rng> {
        &self.board
    }

    /// Runs finished so far.
    pub fn runs_completed(&self) -> usize {
        self.runs_completed
    }

    /// Scoop all beans back to the backlog for another run.
    ///
    /// Does nothing if the board is already loaded for a run.
    pub fn repeat(&mut self) {
        if self.spent {
            self.board.repeat();
            self.spent = false;
        }
    }

    /// Step the board until it finishes, then apply the configured trim.
    ///
    /// If a previous run left the board finished, the beans are scooped
    /// back up first. `observer` sees a snapshot after every productive
    /// tick.
    pub fn run<F>(&mut self, mut observer: F) -> RunMetrics
    where
        F: FnMut(&BoardSnapshot),
    {
        self.repeat();

        let mut ticks = 0;
        while self.board.advance_step() {
            ticks += 1;
            observer(&self.board.snapshot());
        }
        self.spent = true;
        let beans_trimmed = self
            .config
            .trim
            .map_or(0, |keep| self.board.trim(keep));

        let metrics = RunMetrics {
            run: self.runs_completed,
            ticks,
            beans_slotted: self.board.slotted_count(),
            beans_trimmed,
            average_slot_index: self.board.average_slot_index(),
            slot_counts: self.board.slot_bean_counts(),
        };
        self.runs_completed += 1;

        tracing::info!(
            run = metrics.run,
            ticks = metrics.ticks,
            slotted = metrics.beans_slotted,
            trimmed = metrics.beans_trimmed,
            average = metrics.average_slot_index,
            "run finished"
        );
        metrics
    }

    /// Perform every configured run, reporting each start, tick, and finish.
    pub fn run_all<F>(&mut self, mut observer: F) -> Vec<RunMetrics>
    where
        F: FnMut(RunEvent<'_>),
    {
        let mut results = Vec::new();
        for run in 0..self.config.runs {
            self.repeat();
            observer(RunEvent::Started {
                run,
                snapshot: &self.board.snapshot(),
            });
            let metrics = self.run(|snapshot| observer(RunEvent::Ticked(snapshot)));
            observer(RunEvent::Finished {
                metrics: &metrics,
                snapshot: &self.board.snapshot(),
            });
            results.push(metrics);
        }
        results
    }
}
