use crate::search::search_engines::SearchResult;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// How a run ended, distinguishing an environment that cannot be solved by
/// the algorithm from a run that ran out of budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    /// The goal is unreachable, or unreachable within the algorithm's depth
    /// limit, or a random walk was left with no safe move
    StructuralFailure,
    /// The life limit or expansion limit was used up
    ResourceExhaustion,
    /// The run panicked or returned an invalid plan
    Error,
}

impl From<&SearchResult> for Outcome {
    fn from(value: &SearchResult) -> Self {
        match value {
            SearchResult::Success(_) => Outcome::Success,
            SearchResult::ProvablyUnsolvable | SearchResult::IncompleteUnsolvable => {
                Outcome::StructuralFailure
            }
            SearchResult::LifeLimitExceeded => Outcome::ResourceExhaustion,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Outcome::Success => "success",
            Outcome::StructuralFailure => "structural_failure",
            Outcome::ResourceExhaustion => "resource_exhaustion",
            Outcome::Error => "error",
        };
        write!(f, "{}", name)
    }
}

/// One row of the results table, for one (algorithm, environment, scenario)
/// triple.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RunResult {
    pub algorithm_name: String,
    pub environment_id: usize,
    pub scenario_id: String,
    pub success: bool,
    pub outcome: Outcome,
    pub states_expanded: usize,
    /// Wall clock time of the search in seconds
    #[serde(rename = "time")]
    pub elapsed_time: f64,
    /// Number of moves of the plan, 0 unless successful
    pub path_length: usize,
    /// Cost of the plan under the scenario's cost model, 0 unless successful
    pub total_cost: f64,
}

impl RunResult {
    pub fn failure(
        algorithm_name: impl Into<String>,
        environment_id: usize,
        scenario_id: impl Into<String>,
        outcome: Outcome,
        states_expanded: usize,
        elapsed_time: f64,
    ) -> Self {
        debug_assert_ne!(outcome, Outcome::Success);
        Self {
            algorithm_name: algorithm_name.into(),
            environment_id,
            scenario_id: scenario_id.into(),
            success: false,
            outcome,
            states_expanded,
            elapsed_time,
            path_length: 0,
            total_cost: 0.,
        }
    }

    pub fn success(
        algorithm_name: impl Into<String>,
        environment_id: usize,
        scenario_id: impl Into<String>,
        states_expanded: usize,
        elapsed_time: f64,
        path_length: usize,
        total_cost: f64,
    ) -> Self {
        Self {
            algorithm_name: algorithm_name.into(),
            environment_id,
            scenario_id: scenario_id.into(),
            success: true,
            outcome: Outcome::Success,
            states_expanded,
            elapsed_time,
            path_length,
            total_cost,
        }
    }

    /// The same record with the timing zeroed, for comparing sweeps whose
    /// only difference is wall clock time.
    pub fn without_time(&self) -> Self {
        Self {
            elapsed_time: 0.,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Plan;

    #[test]
    fn outcome_of_search_results() {
        assert_eq!(
            Outcome::from(&SearchResult::Success(Plan::empty())),
            Outcome::Success
        );
        assert_eq!(
            Outcome::from(&SearchResult::ProvablyUnsolvable),
            Outcome::StructuralFailure
        );
        assert_eq!(
            Outcome::from(&SearchResult::IncompleteUnsolvable),
            Outcome::StructuralFailure
        );
        assert_eq!(
            Outcome::from(&SearchResult::LifeLimitExceeded),
            Outcome::ResourceExhaustion
        );
    }

    #[test]
    fn failures_have_no_path() {
        let result = RunResult::failure("BFS", 3, "uniform", Outcome::StructuralFailure, 12, 0.5);
        assert!(!result.success);
        assert_eq!(result.path_length, 0);
        assert_eq!(result.total_cost, 0.);
        assert_eq!(result.outcome.to_string(), "structural_failure");
    }
}
