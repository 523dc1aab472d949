//! Uniform cost search

use crate::environment::{CostModel, GridEnvironment};
use crate::search::{
    search_engines::{
        DuplicateDetection, GraphSearch, SearchEngine, SearchResult, TerminationCondition,
    },
    PriorityFrontier, SearchStatistics, ZeroHeuristic,
};

/// Expands the cheapest path first, which makes the first plan found
/// cost-optimal.
#[derive(Debug)]
pub struct UniformCostSearch {
    termination_condition: TerminationCondition,
}

impl UniformCostSearch {
    pub fn new(expansion_limit: Option<usize>) -> Self {
        Self {
            termination_condition: TerminationCondition::new(expansion_limit),
        }
    }
}

impl SearchEngine for UniformCostSearch {
    fn search(
        &mut self,
        environment: &GridEnvironment,
        cost_model: &CostModel,
    ) -> (SearchResult, SearchStatistics) {
        GraphSearch::new(
            PriorityFrontier::new(),
            Box::new(ZeroHeuristic::new()),
            DuplicateDetection::CheaperPath,
            self.termination_condition,
        )
        .run(environment, cost_model)
    }
}
