//! The expansion loop shared by all systematic search engines. An engine is a
//! choice of [`Frontier`], heuristic, duplicate detection and optional depth
//! limit; the loop itself is the same for all of them.

use crate::environment::{Cell, CostModel, GridEnvironment};
use crate::search::{
    search_engines::{SearchResult, TerminationCondition},
    Frontier, Heuristic, HeuristicValue, SearchSpace, SearchStatistics,
};
use std::collections::HashMap;
use tracing::trace;

/// When a cell that was seen before may enter the search again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateDetection {
    /// A cell is generated at most once.
    Generated,
    /// A cell is expanded at most once, but may be on the frontier several
    /// times.
    Expanded,
    /// A cell is expanded again if it is reached at a smaller depth than
    /// before. Needed for completeness under a depth limit.
    ShallowerDepth,
    /// A cell is generated again only when reached by a cheaper path, and
    /// expanded at most once.
    CheaperPath,
}

#[derive(Debug)]
pub struct GraphSearch<F: Frontier> {
    frontier: F,
    heuristic: Box<dyn Heuristic>,
    duplicate_detection: DuplicateDetection,
    depth_limit: Option<usize>,
    termination_condition: TerminationCondition,
}

impl<F: Frontier> GraphSearch<F> {
    pub fn new(
        frontier: F,
        heuristic: Box<dyn Heuristic>,
        duplicate_detection: DuplicateDetection,
        termination_condition: TerminationCondition,
    ) -> Self {
        Self {
            frontier,
            heuristic,
            duplicate_detection,
            depth_limit: None,
            termination_condition,
        }
    }

    pub fn with_depth_limit(self, depth_limit: usize) -> Self {
        Self {
            depth_limit: Some(depth_limit),
            ..self
        }
    }

    /// Whether a node for `cell` popped at `depth` should be expanded, given
    /// the depths at which cells were expanded so far.
    fn should_expand(&self, closed: &HashMap<Cell, usize>, cell: Cell, depth: usize) -> bool {
        match (self.duplicate_detection, closed.get(&cell)) {
            (_, None) => true,
            (DuplicateDetection::ShallowerDepth, Some(&closed_depth)) => depth < closed_depth,
            (_, Some(_)) => false,
        }
    }

    pub fn run(
        &mut self,
        environment: &GridEnvironment,
        cost_model: &CostModel,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let mut search_space = SearchSpace::new();
        // Depth at which each cell was last expanded
        let mut closed: HashMap<Cell, usize> = HashMap::new();
        // Cheapest known cost of reaching each generated cell
        let mut best_g: HashMap<Cell, HeuristicValue> = HashMap::new();
        let mut cut_off = false;

        let start = environment.start();
        let root_h = self.heuristic.evaluate(start, environment);
        let root_id = search_space.insert_root(start, root_h);
        best_g.insert(start, (0.).into());
        self.frontier.clear();
        self.frontier.push(search_space.get_node(root_id));

        while let Some(node_id) = self.frontier.pop() {
            let node = search_space.get_node(node_id);
            let (cell, g_value, depth) = (node.get_cell(), node.get_g(), node.get_depth());

            if !self.should_expand(&closed, cell, depth) {
                statistics.increment_duplicate_nodes();
                continue;
            }
            if let Some(result) = self.termination_condition.should_terminate(&statistics) {
                statistics.finalise_search();
                return (result, statistics);
            }
            search_space.get_node_mut(node_id).close();
            closed.insert(cell, depth);
            statistics.increment_expanded_nodes();

            if environment.is_goal(cell) {
                statistics.finalise_search();
                return (
                    SearchResult::Success(search_space.extract_plan(node_id)),
                    statistics,
                );
            }

            if self.depth_limit.is_some_and(|limit| depth >= limit) {
                statistics.increment_pruned_nodes();
                cut_off = true;
                continue;
            }

            for (action, next) in environment.successors(cell) {
                statistics.increment_generated_nodes(1);
                let child_g = g_value + cost_model.cost(action);
                let is_new = match self.duplicate_detection {
                    DuplicateDetection::Generated => !best_g.contains_key(&next),
                    DuplicateDetection::Expanded => !closed.contains_key(&next),
                    DuplicateDetection::ShallowerDepth => closed
                        .get(&next)
                        .map_or(true, |&closed_depth| depth + 1 < closed_depth),
                    DuplicateDetection::CheaperPath => {
                        !closed.contains_key(&next)
                            && best_g.get(&next).map_or(true, |&g| child_g < g)
                    }
                };
                if !is_new {
                    statistics.increment_duplicate_nodes();
                    continue;
                }

                best_g.insert(next, child_g);
                let child_h = self.heuristic.evaluate(next, environment);
                let child_id = search_space.insert_child(node_id, action, next, child_g, child_h);
                trace!(cell = %next, g = child_g.into_inner(), h = child_h.into_inner());
                self.frontier.push(search_space.get_node(child_id));
            }
        }

        statistics.finalise_search();
        if cut_off {
            (SearchResult::IncompleteUnsolvable, statistics)
        } else {
            (SearchResult::ProvablyUnsolvable, statistics)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::Action;
    use crate::search::{QueueFrontier, StackFrontier, ZeroHeuristic};
    use crate::test_utils::*;

    fn run_with<F: Frontier>(
        frontier: F,
        duplicate_detection: DuplicateDetection,
        map: &[&str],
    ) -> (SearchResult, SearchStatistics) {
        let environment = GridEnvironment::from_rows(map).unwrap();
        GraphSearch::new(
            frontier,
            Box::new(ZeroHeuristic::new()),
            duplicate_detection,
            TerminationCondition::unbounded(),
        )
        .run(&environment, &CostModel::uniform())
    }

    #[test]
    fn walled_off_goal_is_provably_unsolvable() {
        let (result, statistics) =
            run_with(QueueFrontier::new(), DuplicateDetection::Generated, WALLED_OFF_GOAL_MAP);
        assert_eq!(result, SearchResult::ProvablyUnsolvable);
        // Every cell reachable from the start is expanded exactly once.
        assert_eq!(statistics.expanded_nodes(), 5);
    }

    #[test]
    fn expansion_limit_stops_the_search() {
        let environment = GridEnvironment::from_rows(OPEN_4X4_MAP).unwrap();
        let (result, statistics) = GraphSearch::new(
            QueueFrontier::new(),
            Box::new(ZeroHeuristic::new()),
            DuplicateDetection::Generated,
            TerminationCondition::new(Some(3)),
        )
        .run(&environment, &CostModel::uniform());
        assert_eq!(result, SearchResult::LifeLimitExceeded);
        assert_eq!(statistics.expanded_nodes(), 3);
    }

    #[test]
    fn depth_cut_off_is_reported_as_incomplete() {
        let environment = GridEnvironment::from_rows(OPEN_4X4_MAP).unwrap();
        let (result, statistics) = GraphSearch::new(
            StackFrontier::new(),
            Box::new(ZeroHeuristic::new()),
            DuplicateDetection::ShallowerDepth,
            TerminationCondition::unbounded(),
        )
        .with_depth_limit(2)
        .run(&environment, &CostModel::uniform());
        assert_eq!(result, SearchResult::IncompleteUnsolvable);
        assert!(statistics.pruned_nodes() > 0);
    }

    #[test]
    fn goal_check_happens_on_expansion() {
        let (result, statistics) =
            run_with(QueueFrontier::new(), DuplicateDetection::Generated, &["SG", "FF"]);
        assert_eq!(result, SearchResult::Success(crate::search::Plan::new(vec![Action::Right])));
        // The start and the goal are both expanded.
        assert_eq!(statistics.expanded_nodes(), 2);
    }
}
