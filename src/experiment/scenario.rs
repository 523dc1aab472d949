use crate::environment::CostModel;
use serde::{Deserialize, Serialize};

/// A named cost model. Every algorithm of a sweep runs once per scenario on
/// each environment.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Scenario {
    pub name: String,
    pub costs: CostModel,
}

impl Scenario {
    pub fn new(name: impl Into<String>, costs: CostModel) -> Self {
        Self {
            name: name.into(),
            costs,
        }
    }

    pub fn uniform() -> Self {
        Self::new("uniform", CostModel::uniform())
    }

    pub fn anisotropic() -> Self {
        Self::new("anisotropic", CostModel::anisotropic())
    }
}

/// Built-in scenarios, selectable from the command line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum ScenarioName {
    /// Every move costs 1
    #[default]
    Uniform,
    /// Horizontal moves cost 1, vertical moves cost 10
    Anisotropic,
}

impl From<ScenarioName> for Scenario {
    fn from(value: ScenarioName) -> Self {
        match value {
            ScenarioName::Uniform => Scenario::uniform(),
            ScenarioName::Anisotropic => Scenario::anisotropic(),
        }
    }
}
