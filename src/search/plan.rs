//! A plan is a sequence of moves that takes the agent from the start cell to
//! the goal. This module provides the [`Plan`] struct, which represents a plan.

use crate::environment::{Action, CostModel};
use itertools::Itertools;
use std::ops::Deref;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    steps: Vec<Action>,
}

impl Plan {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Action>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Action] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Total cost of executing the plan under `cost_model`.
    pub fn cost(&self, cost_model: &CostModel) -> f64 {
        cost_model.path_cost(&self.steps)
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.steps.iter().join(" "))
    }
}

impl IntoIterator for Plan {
    type Item = Action;
    type IntoIter = std::vec::IntoIter<Action>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl Deref for Plan {
    type Target = [Action];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
