use crate::environment::EnvironmentError;
use std::path::PathBuf;
use thiserror::Error;

/// A broken experiment setup. These abort the sweep before any run starts.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
    #[error("scenario {name:?}: {source}")]
    Scenario {
        name: String,
        source: EnvironmentError,
    },
    #[error("number of runs must be positive")]
    NoRuns,
    #[error("depth limits must be positive")]
    InvalidDepthLimit,
    #[error("depth-limited search needs at least one depth limit")]
    MissingDepthLimits,
    #[error("no algorithms selected")]
    NoAlgorithms,
    #[error("no cost scenarios configured")]
    NoScenarios,
    #[error("scenario {0:?} is defined more than once")]
    DuplicateScenario(String),
    #[error("number of jobs must be positive")]
    NoJobs,
    #[error("seed {seed} with {runs} runs overflows the seed range")]
    SeedOverflow { seed: u64, runs: usize },
}

#[derive(Debug, Error)]
pub enum ExperimentError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to write results: {0}")]
    Csv(#[from] csv::Error),
}
