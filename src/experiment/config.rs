use crate::environment::{GenerationParameters, Placement, DEFAULT_LIFE_LIMIT};
use crate::experiment::{Algorithm, ConfigError, ExperimentError, Scenario};
use crate::search::search_engines::{SearchEngineName, SearchOptions};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Everything that defines a sweep. Loaded from TOML, with every field
/// optional and defaulting to the reference experiment: 30 environments of
/// 100x100 cells, 92% of them frozen, walks of at most 1000 steps, depth
/// limits 50, 75 and 100, and the uniform and anisotropic cost scenarios.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ExperimentConfig {
    /// Number of environments to generate
    pub runs: usize,
    /// Side length of every environment
    pub size: usize,
    /// Probability that a cell other than the start and goal is frozen
    pub freeze_probability: f64,
    /// Maximum number of steps of a random walk
    pub life_limit: usize,
    /// Maximum number of expansions of a systematic search, unbounded if absent
    pub expansion_limit: Option<usize>,
    pub placement: Placement,
    /// Environment `i` (counting from 1) is generated from seed `seed + i - 1`
    pub seed: u64,
    /// One depth-limited search instance is run per limit
    pub depth_limits: Vec<usize>,
    pub algorithms: Vec<SearchEngineName>,
    pub scenarios: Vec<Scenario>,
    /// Number of worker threads, each handling whole environments
    pub jobs: usize,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            runs: 30,
            size: 100,
            freeze_probability: 0.92,
            life_limit: DEFAULT_LIFE_LIMIT,
            expansion_limit: None,
            placement: Placement::Corners,
            seed: 0,
            depth_limits: vec![50, 75, 100],
            algorithms: SearchEngineName::ALL.to_vec(),
            scenarios: vec![Scenario::uniform(), Scenario::anisotropic()],
            jobs: 1,
        }
    }
}

impl ExperimentConfig {
    pub fn from_path(path: &Path) -> Result<Self, ExperimentError> {
        let text = std::fs::read_to_string(path).map_err(|source| ExperimentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self, ExperimentError> {
        Ok(toml::from_str(text)?)
    }

    /// Seed of the last environment, `None` if it does not fit in a `u64`.
    pub fn last_seed(&self) -> Option<u64> {
        let offset = u64::try_from(self.runs.checked_sub(1)?).ok()?;
        self.seed.checked_add(offset)
    }

    pub fn generation_parameters(&self) -> GenerationParameters {
        GenerationParameters::new(self.size, self.freeze_probability)
            .with_life_limit(self.life_limit)
            .with_placement(self.placement)
    }

    /// Options shared by every run of the sweep.
    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::default()
            .with_life_limit(Some(self.life_limit))
            .with_expansion_limit(self.expansion_limit)
    }

    /// The algorithms of the sweep in report order, with depth-limited search
    /// expanded into one algorithm per depth limit.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        self.algorithms
            .iter()
            .flat_map(|&engine| match engine {
                SearchEngineName::Dls => self
                    .depth_limits
                    .iter()
                    .map(|&limit| Algorithm::depth_limited(limit))
                    .collect(),
                _ => vec![Algorithm::new(engine)],
            })
            .collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.runs == 0 {
            return Err(ConfigError::NoRuns);
        }
        if self.jobs == 0 {
            return Err(ConfigError::NoJobs);
        }
        if self.last_seed().is_none() {
            return Err(ConfigError::SeedOverflow {
                seed: self.seed,
                runs: self.runs,
            });
        }
        self.generation_parameters().validate()?;

        if self.algorithms.is_empty() {
            return Err(ConfigError::NoAlgorithms);
        }
        if self.algorithms.contains(&SearchEngineName::Dls) && self.depth_limits.is_empty() {
            return Err(ConfigError::MissingDepthLimits);
        }
        if self.depth_limits.contains(&0) {
            return Err(ConfigError::InvalidDepthLimit);
        }

        if self.scenarios.is_empty() {
            return Err(ConfigError::NoScenarios);
        }
        let mut names = HashSet::new();
        for scenario in &self.scenarios {
            if !names.insert(scenario.name.as_str()) {
                return Err(ConfigError::DuplicateScenario(scenario.name.clone()));
            }
            scenario
                .costs
                .validate()
                .map_err(|source| ConfigError::Scenario {
                    name: scenario.name.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Action, CostModel, EnvironmentError};

    #[test]
    fn defaults_match_the_reference_experiment() {
        let config = ExperimentConfig::default();
        assert!(config.validate().is_ok());
        let names: Vec<String> = config.algorithms().iter().map(|a| a.to_string()).collect();
        assert_eq!(
            names,
            vec!["RANDOM", "BFS", "DFS", "DLS50", "DLS75", "DLS100", "UCS", "A*"]
        );
    }

    #[test]
    fn empty_toml_gives_defaults() {
        let config = ExperimentConfig::from_toml("").unwrap();
        assert_eq!(config, ExperimentConfig::default());
    }

    #[test]
    fn parses_a_full_config() {
        let text = r#"
            runs = 5
            size = 20
            freeze-probability = 0.8
            life-limit = 200
            expansion-limit = 1000
            placement = "random"
            seed = 42
            depth-limits = [10]
            algorithms = ["bfs", "dls", "astar"]
            jobs = 2

            [[scenarios]]
            name = "steep"
            costs = { up = 5.0, down = 5.0, left = 1.0, right = 2.0 }
        "#;
        let config = ExperimentConfig::from_toml(text).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.runs, 5);
        assert_eq!(config.placement, Placement::Random);
        assert_eq!(config.expansion_limit, Some(1000));
        assert_eq!(config.scenarios.len(), 1);
        assert_eq!(config.scenarios[0].costs.cost(Action::Right), 2.);
        let names: Vec<String> = config.algorithms().iter().map(|a| a.to_string()).collect();
        assert_eq!(names, vec!["BFS", "DLS10", "A*"]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(ExperimentConfig::from_toml("grid-size = 10").is_err());
    }

    #[test]
    fn invalid_configs_are_rejected() {
        let valid = ExperimentConfig::default();

        let config = ExperimentConfig { runs: 0, ..valid.clone() };
        assert_eq!(config.validate(), Err(ConfigError::NoRuns));

        let config = ExperimentConfig { size: 0, ..valid.clone() };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Environment(EnvironmentError::InvalidSize(0)))
        );

        let config = ExperimentConfig {
            depth_limits: vec![50, 0],
            ..valid.clone()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidDepthLimit));

        let config = ExperimentConfig {
            depth_limits: vec![],
            ..valid.clone()
        };
        assert_eq!(config.validate(), Err(ConfigError::MissingDepthLimits));

        let config = ExperimentConfig {
            scenarios: vec![Scenario::new("free", CostModel::axis_weighted(0., 1.))],
            ..valid.clone()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Scenario { ref name, .. }) if name == "free"
        ));

        let config = ExperimentConfig {
            scenarios: vec![Scenario::uniform(), Scenario::uniform()],
            ..valid.clone()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DuplicateScenario("uniform".to_string()))
        );

        let config = ExperimentConfig { jobs: 0, ..valid };
        assert_eq!(config.validate(), Err(ConfigError::NoJobs));
    }

    #[test]
    fn seeds_must_fit_every_environment() {
        let config = ExperimentConfig {
            runs: 1,
            seed: u64::MAX,
            ..ExperimentConfig::default()
        };
        assert_eq!(config.last_seed(), Some(u64::MAX));
        assert!(config.validate().is_ok());

        let config = ExperimentConfig {
            runs: 2,
            seed: u64::MAX,
            ..ExperimentConfig::default()
        };
        assert_eq!(config.last_seed(), None);
        assert_eq!(
            config.validate(),
            Err(ConfigError::SeedOverflow {
                seed: u64::MAX,
                runs: 2
            })
        );

        let config = ExperimentConfig {
            runs: 30,
            seed: u64::MAX - 29,
            ..ExperimentConfig::default()
        };
        assert_eq!(config.last_seed(), Some(u64::MAX));
    }
}
