//! Manhattan distance weighted by move costs. For every row and column that
//! separates a cell from the goal the agent has to make at least one move in
//! the goal's direction, and each such move costs exactly what the cost model
//! says, so the estimate never exceeds the true cost. It is also consistent:
//! a single move changes the estimate by at most the cost of that move.

use crate::environment::{Action, Cell, CostModel, GridEnvironment};
use crate::search::{Heuristic, HeuristicValue};

#[derive(Debug, Clone)]
pub struct WeightedManhattan {
    cost_model: CostModel,
}

impl WeightedManhattan {
    pub fn new(cost_model: CostModel) -> Self {
        Self { cost_model }
    }
}

impl Heuristic for WeightedManhattan {
    fn evaluate(&mut self, cell: Cell, environment: &GridEnvironment) -> HeuristicValue {
        let goal = environment.goal();
        let vertical = if goal.row < cell.row {
            Action::Up
        } else {
            Action::Down
        };
        let horizontal = if goal.col < cell.col {
            Action::Left
        } else {
            Action::Right
        };
        let estimate = self.cost_model.cost(vertical) * cell.row_distance(&goal) as f64
            + self.cost_model.cost(horizontal) * cell.col_distance(&goal) as f64;
        estimate.into()
    }
}
