//! Experiment configuration, validation, and error types.
//!
//! [`ExperimentConfig`] is the input for constructing an
//! [`Experiment`](crate::Experiment). [`validate()`](ExperimentConfig::validate)
//! checks structural invariants before any beans are built.

use std::error::Error;
use std::fmt;

use quincunx_core::{BoardError, DecisionMode};

use crate::board::Half;

/// Upper bound on [`ExperimentConfig::runs`].
pub const MAX_RUNS: usize = 1 << 20;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected while validating an [`ExperimentConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The board or bean batch could not be constructed.
    Board(BoardError),
    /// `runs` was zero; at least one run is required.
    ZeroRuns,
    /// `runs` exceeded [`MAX_RUNS`].
    TooManyRuns {
        /// The rejected run count.
        value: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Board(e) => write!(f, "board: {e}"),
            Self::ZeroRuns => write!(f, "runs must be at least 1"),
            Self::TooManyRuns { value } => {
                write!(f, "runs must be at most {MAX_RUNS}, got {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Board(e) => Some(e),
            Self::ZeroRuns | Self::TooManyRuns { .. } => None,
        }
    }
}

impl From<BoardError> for ConfigError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

// ── ExperimentConfig ───────────────────────────────────────────────

/// Complete description of a bean-counter experiment.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentConfig {
    /// Rows of pegs, and slots at the bottom. Must be at least 1. Default: 10.
    pub slot_count: usize,
    /// Beans dropped per run. Default: 400.
    pub bean_count: usize,
    /// Decision policy shared by every bean. Default: luck.
    pub mode: DecisionMode,
    /// Master seed for the bean batch. Default: 0.
    pub seed: u64,
    /// Number of runs; runs after the first reuse the same beans via
    /// `repeat`. Default: 1.
    pub runs: usize,
    /// Half trim applied to the slots at the end of each run. Default: none.
    pub trim: Option<Half>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            slot_count: 10,
            bean_count: 400,
            mode: DecisionMode::Luck,
            seed: 0,
            runs: 1,
            trim: None,
        }
    }
}

impl ExperimentConfig {
    /// Configuration with the given machine shape and default everything else.
    pub fn new(slot_count: usize, bean_count: usize, mode: DecisionMode) -> Self {
        Self {
            slot_count,
            bean_count,
            mode,
            ..Self::default()
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.slot_count == 0 {
            return Err(BoardError::InvalidSlotCount {
                value: self.slot_count,
            }
            .into());
        }
        if self.runs == 0 {
            return Err(ConfigError::ZeroRuns);
        }
        if self.runs > MAX_RUNS {
            return Err(ConfigError::TooManyRuns { value: self.runs });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = ExperimentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.slot_count, 10);
        assert_eq!(config.bean_count, 400);
        assert_eq!(config.mode, DecisionMode::Luck);
    }

    #[test]
    fn new_keeps_defaults() {
        let config = ExperimentConfig::new(4, 3, DecisionMode::Skill);
        assert_eq!(config.runs, 1);
        assert_eq!(config.trim, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_slots_rejected() {
        let config = ExperimentConfig::new(0, 3, DecisionMode::Luck);
        assert_eq!(
            config.validate(),
            Err(ConfigError::Board(BoardError::InvalidSlotCount { value: 0 }))
        );
    }

    #[test]
    fn zero_runs_rejected() {
        let config = ExperimentConfig {
            runs: 0,
            ..ExperimentConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroRuns));
    }

    #[test]
    fn run_count_capped() {
        let at_cap = ExperimentConfig {
            runs: MAX_RUNS,
            ..ExperimentConfig::default()
        };
        assert!(at_cap.validate().is_ok());

        let huge = ExperimentConfig {
            runs: usize::MAX,
            ..ExperimentConfig::default()
        };
        assert_eq!(
            huge.validate(),
            Err(ConfigError::TooManyRuns { value: usize::MAX })
        );
    }

    #[test]
    fn zero_beans_allowed() {
        assert!(ExperimentConfig::new(5, 0, DecisionMode::Skill)
            .validate()
            .is_ok());
    }

    #[test]
    fn error_source_chain() {
        let err = ConfigError::from(BoardError::InvalidSlotCount { value: 0 });
        assert!(err.source().is_some());
        assert_eq!(
            err.to_string(),
            "board: slot count must be at least 1, got 0"
        );
        assert!(ConfigError::ZeroRuns.source().is_none());
    }
}
