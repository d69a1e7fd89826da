//! Argument parsing.

use clap::{ArgAction, Parser, ValueEnum};
use quincunx_core::DecisionMode;
use quincunx_engine::{ExperimentConfig, Half};

/// Drop beans through a Galton board and count where they land.
#[derive(Parser, Debug)]
#[command(
    name = "bean-counter",
    version,
    about = "Galton board bean counter",
    after_help = "Examples:\n  bean-counter 10 400 luck\n  bean-counter 20 1000 skill debug"
)]
pub struct Cli {
    /// Number of slots, which is also the number of peg rows.
    #[arg(value_name = "SLOT_COUNT")]
    pub slot_count: usize,

    /// Number of beans to drop.
    #[arg(value_name = "BEAN_COUNT")]
    pub bean_count: usize,

    /// How beans choose a direction at each peg.
    #[arg(value_enum, value_name = "MODE")]
    pub mode: ModeArg,

    /// Trailing `debug` word; same as `--debug`.
    #[arg(value_enum, value_name = "DEBUG")]
    pub debug_word: Option<DebugWord>,

    /// Print the lattice after reset and after every tick.
    #[arg(long)]
    pub debug: bool,

    /// Seed for the bean batch (default: drawn from OS entropy).
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Number of runs; beans are scooped back up between runs.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub runs: usize,

    /// Keep only one half of the slotted beans at the end of each run.
    #[arg(long, value_enum, value_name = "HALF")]
    pub trim: Option<TrimArg>,

    /// Spaces between numbers in the lattice (must be odd).
    #[arg(long, value_name = "N", default_value_t = 3)]
    pub spacing: usize,

    /// Log output (repeat for more).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Decision policy as spelled on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Fair coin flip at every peg.
    Luck,
    /// Go right a fixed number of times, then left.
    Skill,
}

impl From<ModeArg> for DecisionMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Luck => DecisionMode::Luck,
            ModeArg::Skill => DecisionMode::Skill,
        }
    }
}

/// The only word accepted after the mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DebugWord {
    /// Print every frame.
    Debug,
}

/// Half of the beans to keep after a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum TrimArg {
    /// Keep the higher-numbered slots.
    Upper,
    /// Keep the lower-numbered slots.
    Lower,
}

impl From<TrimArg> for Half {
    fn from(arg: TrimArg) -> Self {
        match arg {
            TrimArg::Upper => Half::Upper,
            TrimArg::Lower => Half::Lower,
        }
    }
}

impl Cli {
    /// Whether frames are printed, via `--debug` or the trailing word.
    pub fn debug_enabled(&self) -> bool {
        self.debug || self.debug_word.is_some()
    }

    /// Experiment configuration for these arguments and `seed`.
    pub fn experiment_config(&self, seed: u64) -> ExperimentConfig {
        ExperimentConfig {
            slot_count: self.slot_count,
            bean_count: self.bean_count,
            mode: self.mode.into(),
            seed,
            runs: self.runs,
            trim: self.trim.map(Half::from),
        }
    }
}
