//! Depth first search

use crate::environment::{CostModel, GridEnvironment};
use crate::search::{
    search_engines::{
        DuplicateDetection, GraphSearch, SearchEngine, SearchResult, TerminationCondition,
    },
    SearchStatistics, StackFrontier, ZeroHeuristic,
};

/// Follows the most recently generated cell first. Complete on a finite grid
/// since every cell is expanded at most once, but the plan can be far from
/// shortest.
#[derive(Debug)]
pub struct DepthFirstSearch {
    termination_condition: TerminationCondition,
}

impl DepthFirstSearch {
    pub fn new(expansion_limit: Option<usize>) -> Self {
        Self {
            termination_condition: TerminationCondition::new(expansion_limit),
        }
    }
}

impl SearchEngine for DepthFirstSearch {
    fn search(
        &mut self,
        environment: &GridEnvironment,
        cost_model: &CostModel,
    ) -> (SearchResult, SearchStatistics) {
        GraphSearch::new(
            StackFrontier::new(),
            Box::new(ZeroHeuristic::new()),
            DuplicateDetection::Expanded,
            self.termination_condition,
        )
        .run(environment, cost_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::validate;
    use crate::test_utils::*;

    #[test]
    fn finds_a_valid_plan() {
        let environment = GridEnvironment::from_rows(DETOUR_MAP).unwrap();
        let (result, statistics) =
            DepthFirstSearch::new(None).search(&environment, &CostModel::uniform());
        match result {
            SearchResult::Success(plan) => assert!(validate(&plan, &environment).is_ok()),
            other => panic!("expected a plan, got {:?}", other),
        }
        // DETOUR_MAP has 23 passable cells.
        assert!(statistics.expanded_nodes() <= 23);
    }

    #[test]
    fn exhausts_a_walled_off_map() {
        let environment = GridEnvironment::from_rows(WALLED_OFF_GOAL_MAP).unwrap();
        let (result, statistics) =
            DepthFirstSearch::new(None).search(&environment, &CostModel::uniform());
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        assert_eq!(statistics.expanded_nodes(), 5);
    }
}
