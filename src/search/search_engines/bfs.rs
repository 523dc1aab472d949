//! Breadth first search

use crate::environment::{CostModel, GridEnvironment};
use crate::search::{
    search_engines::{
        DuplicateDetection, GraphSearch, SearchEngine, SearchResult, TerminationCondition,
    },
    QueueFrontier, SearchStatistics, ZeroHeuristic,
};

/// Expands cells in order of the number of moves from the start, so the
/// first plan found has the fewest moves. Move costs are ignored.
#[derive(Debug)]
pub struct BreadthFirstSearch {
    termination_condition: TerminationCondition,
}

impl BreadthFirstSearch {
    pub fn new(expansion_limit: Option<usize>) -> Self {
        Self {
            termination_condition: TerminationCondition::new(expansion_limit),
        }
    }
}

impl SearchEngine for BreadthFirstSearch {
    fn search(
        &mut self,
        environment: &GridEnvironment,
        cost_model: &CostModel,
    ) -> (SearchResult, SearchStatistics) {
        GraphSearch::new(
            QueueFrontier::new(),
            Box::new(ZeroHeuristic::new()),
            DuplicateDetection::Generated,
            self.termination_condition,
        )
        .run(environment, cost_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn finds_fewest_moves_even_when_costlier() {
        let environment = GridEnvironment::from_rows(DETOUR_MAP).unwrap();
        let mut engine = BreadthFirstSearch::new(None);
        let (result, _) = engine.search(&environment, &CostModel::anisotropic());
        match result {
            SearchResult::Success(plan) => assert_eq!(plan.len(), 8),
            other => panic!("expected a plan, got {:?}", other),
        }
    }
}
