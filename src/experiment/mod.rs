mod algorithm;
mod config;
mod errors;
mod harness;
mod results_writer;
mod run_result;
mod scenario;

pub use algorithm::Algorithm;
pub use config::ExperimentConfig;
pub use errors::{ConfigError, ExperimentError};
pub use harness::Harness;
pub use results_writer::{read_results, write_results, write_results_to_path};
pub use run_result::{Outcome, RunResult};
pub use scenario::{Scenario, ScenarioName};
