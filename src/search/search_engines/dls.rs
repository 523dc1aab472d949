//! Depth limited search

use crate::environment::{CostModel, GridEnvironment};
use crate::search::{
    search_engines::{
        DuplicateDetection, GraphSearch, SearchEngine, SearchResult, TerminationCondition,
    },
    SearchStatistics, StackFrontier, ZeroHeuristic,
};

/// Depth-first search that never expands a node more than `depth_limit` moves
/// from the start. It fails whenever every plan is longer than the limit,
/// even if one exists. A cell reached again at a smaller depth is expanded
/// again, so the search finds the goal whenever it lies within the limit.
#[derive(Debug)]
pub struct DepthLimitedSearch {
    depth_limit: usize,
    termination_condition: TerminationCondition,
}

impl DepthLimitedSearch {
    pub fn new(depth_limit: usize, expansion_limit: Option<usize>) -> Self {
        Self {
            depth_limit,
            termination_condition: TerminationCondition::new(expansion_limit),
        }
    }
}

impl SearchEngine for DepthLimitedSearch {
    fn search(
        &mut self,
        environment: &GridEnvironment,
        cost_model: &CostModel,
    ) -> (SearchResult, SearchStatistics) {
        GraphSearch::new(
            StackFrontier::new(),
            Box::new(ZeroHeuristic::new()),
            DuplicateDetection::ShallowerDepth,
            self.termination_condition,
        )
        .with_depth_limit(self.depth_limit)
        .run(environment, cost_model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn fails_below_and_succeeds_at_the_shortest_distance() {
        let environment = GridEnvironment::from_rows(OPEN_4X4_MAP).unwrap();
        for limit in 1..6 {
            let (result, _) =
                DepthLimitedSearch::new(limit, None).search(&environment, &CostModel::uniform());
            assert_eq!(result, SearchResult::IncompleteUnsolvable, "limit {}", limit);
        }
        for limit in 6..10 {
            let (result, _) =
                DepthLimitedSearch::new(limit, None).search(&environment, &CostModel::uniform());
            match result {
                SearchResult::Success(plan) => assert!(plan.len() <= limit),
                other => panic!("limit {}: expected a plan, got {:?}", limit, other),
            }
        }
    }

    #[test]
    fn no_cut_off_means_provably_unsolvable() {
        let environment = GridEnvironment::from_rows(WALLED_OFF_GOAL_MAP).unwrap();
        let (result, _) =
            DepthLimitedSearch::new(50, None).search(&environment, &CostModel::uniform());
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
    }
}
