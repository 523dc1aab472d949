//! The sweep over environments, cost scenarios and algorithms. Every
//! algorithm sees the same environments, and every run is isolated so that a
//! failing algorithm is recorded rather than aborting the sweep.

use crate::environment::{GenerationParameters, GridEnvironment};
use crate::experiment::{Algorithm, ConfigError, ExperimentConfig, Outcome, RunResult, Scenario};
use crate::search::{
    search_engines::{SearchOptions, SearchResult},
    validate, SearchStatistics,
};
use itertools::Itertools;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::time::Instant;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct Harness {
    config: ExperimentConfig,
    algorithms: Vec<Algorithm>,
    generation_parameters: GenerationParameters,
    search_options: SearchOptions,
}

impl Harness {
    pub fn new(config: ExperimentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            algorithms: config.algorithms(),
            generation_parameters: config.generation_parameters(),
            search_options: config.search_options(),
            config,
        })
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    pub fn algorithms(&self) -> &[Algorithm] {
        &self.algorithms
    }

    /// Seed of the environment with the given id, counting from 1.
    pub fn environment_seed(&self, environment_id: usize) -> u64 {
        self.config.seed + (environment_id as u64 - 1)
    }

    pub fn generate_environment(
        &self,
        environment_id: usize,
    ) -> Result<GridEnvironment, ConfigError> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.environment_seed(environment_id));
        Ok(GridEnvironment::generate_with(
            &self.generation_parameters,
            &mut rng,
        )?)
    }

    /// Run the whole sweep. Results are ordered by environment, then scenario,
    /// then algorithm, whatever the number of jobs.
    pub fn run(&self) -> Result<Vec<RunResult>, ConfigError> {
        let start_time = Instant::now();
        info!(
            runs = self.config.runs,
            size = self.config.size,
            freeze_probability = self.config.freeze_probability,
            algorithms = self.algorithms.len(),
            scenarios = self.config.scenarios.len(),
            jobs = self.config.jobs,
            "starting sweep"
        );

        let results = if self.config.jobs == 1 {
            let mut results = vec![];
            for environment_id in 1..=self.config.runs {
                results.extend(self.run_environment(environment_id)?);
            }
            results
        } else {
            self.run_parallel()?
        };

        let outcomes = results.iter().map(|result| result.outcome).counts();
        info!(
            results = results.len(),
            successes = outcomes.get(&Outcome::Success).copied().unwrap_or(0),
            structural_failures = outcomes.get(&Outcome::StructuralFailure).copied().unwrap_or(0),
            resource_exhaustions = outcomes.get(&Outcome::ResourceExhaustion).copied().unwrap_or(0),
            errors = outcomes.get(&Outcome::Error).copied().unwrap_or(0),
            duration = %humantime::format_duration(start_time.elapsed()),
            "sweep finished"
        );
        Ok(results)
    }

    /// Workers take environments one at a time and send back all records of
    /// an environment at once.
    fn run_parallel(&self) -> Result<Vec<RunResult>, ConfigError> {
        let next_environment = AtomicUsize::new(1);
        let (sender, receiver) = mpsc::channel();

        std::thread::scope(|scope| {
            for _ in 0..self.config.jobs.min(self.config.runs) {
                let sender = sender.clone();
                let next_environment = &next_environment;
                scope.spawn(move || loop {
                    let environment_id = next_environment.fetch_add(1, Ordering::Relaxed);
                    if environment_id > self.config.runs {
                        break;
                    }
                    let results = self.run_environment(environment_id);
                    if sender.send((environment_id, results)).is_err() {
                        break;
                    }
                });
            }
        });
        drop(sender);

        let mut per_environment: Vec<_> = receiver.into_iter().collect();
        per_environment.sort_by_key(|(environment_id, _)| *environment_id);
        let mut results = vec![];
        for (_, environment_results) in per_environment {
            results.extend(environment_results?);
        }
        Ok(results)
    }

    /// Run every algorithm under every scenario on one environment.
    pub fn run_environment(&self, environment_id: usize) -> Result<Vec<RunResult>, ConfigError> {
        let environment = self.generate_environment(environment_id)?;
        let seed = self.environment_seed(environment_id);
        info!(
            environment_id,
            seed,
            holes = environment.num_holes(),
            "running environment"
        );

        let mut results = Vec::with_capacity(self.config.scenarios.len() * self.algorithms.len());
        for scenario in &self.config.scenarios {
            for algorithm in &self.algorithms {
                let options = algorithm.options(&self.search_options).with_seed(seed);
                let result = record_run(
                    &environment,
                    environment_id,
                    scenario,
                    &algorithm.to_string(),
                    || {
                        let mut engine = algorithm.engine.create(&options);
                        engine.search(&environment, &scenario.costs)
                    },
                );
                results.push(result);
            }
        }
        Ok(results)
    }
}

/// Run one search in isolation and turn whatever it produced into a record.
/// A panic or a plan that does not hold up on the environment is recorded
/// with outcome [`Outcome::Error`].
fn record_run(
    environment: &GridEnvironment,
    environment_id: usize,
    scenario: &Scenario,
    algorithm_name: &str,
    search: impl FnOnce() -> (SearchResult, SearchStatistics),
) -> RunResult {
    let start_time = Instant::now();
    let outcome = catch_unwind(AssertUnwindSafe(search));
    let elapsed_time = start_time.elapsed().as_secs_f64();

    let result = match outcome {
        Err(_) => {
            warn!(
                algorithm = algorithm_name,
                environment_id,
                scenario = %scenario.name,
                "search panicked"
            );
            RunResult::failure(
                algorithm_name,
                environment_id,
                &scenario.name,
                Outcome::Error,
                0,
                elapsed_time,
            )
        }
        Ok((SearchResult::Success(plan), statistics)) => match validate(&plan, environment) {
            Ok(()) => RunResult::success(
                algorithm_name,
                environment_id,
                &scenario.name,
                statistics.expanded_nodes(),
                elapsed_time,
                plan.len(),
                plan.cost(&scenario.costs),
            ),
            Err(error) => {
                warn!(
                    algorithm = algorithm_name,
                    environment_id,
                    scenario = %scenario.name,
                    %error,
                    "invalid plan"
                );
                RunResult::failure(
                    algorithm_name,
                    environment_id,
                    &scenario.name,
                    Outcome::Error,
                    statistics.expanded_nodes(),
                    elapsed_time,
                )
            }
        },
        Ok((result, statistics)) => RunResult::failure(
            algorithm_name,
            environment_id,
            &scenario.name,
            Outcome::from(&result),
            statistics.expanded_nodes(),
            elapsed_time,
        ),
    };
    debug!(
        algorithm = algorithm_name,
        environment_id,
        scenario = %scenario.name,
        outcome = %result.outcome,
        states_expanded = result.states_expanded,
        path_length = result.path_length,
        total_cost = result.total_cost,
    );
    result
}
