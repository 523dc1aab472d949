//! A* search

use crate::environment::{CostModel, GridEnvironment};
use crate::search::{
    search_engines::{
        DuplicateDetection, GraphSearch, SearchEngine, SearchResult, TerminationCondition,
    },
    HeuristicName, PriorityFrontier, SearchStatistics,
};

/// Best-first search on `g + h`. The heuristic is built from the cost model
/// of every call to [`SearchEngine::search`], so an estimate made for one
/// cost scenario is never used under another.
#[derive(Debug)]
pub struct AStar {
    heuristic_name: HeuristicName,
    termination_condition: TerminationCondition,
}

impl AStar {
    pub fn new(heuristic_name: HeuristicName, expansion_limit: Option<usize>) -> Self {
        Self {
            heuristic_name,
            termination_condition: TerminationCondition::new(expansion_limit),
        }
    }
}

impl SearchEngine for AStar {
    fn search(
        &mut self,
        environment: &GridEnvironment,
        cost_model: &CostModel,
    ) -> (SearchResult, SearchStatistics) {
        GraphSearch::new(
            PriorityFrontier::new(),
            self.heuristic_name.create(cost_model),
            DuplicateDetection::CheaperPath,
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
    fn heuristic_follows_the_scenario() {
        // The same engine instance is reused across scenarios and must stay
        // optimal under each of them.
        let environment = GridEnvironment::from_rows(DETOUR_MAP).unwrap();
        let mut engine = AStar::new(HeuristicName::WeightedManhattan, None);
        for (costs, expected) in [
            (CostModel::uniform(), 8.),
            (CostModel::anisotropic(), DETOUR_MAP_ANISOTROPIC_COST),
            (CostModel::uniform(), 8.),
        ] {
            match engine.search(&environment, &costs).0 {
                SearchResult::Success(plan) => assert_eq!(plan.cost(&costs), expected),
                other => panic!("expected a plan, got {:?}", other),
            }
        }
    }
}
