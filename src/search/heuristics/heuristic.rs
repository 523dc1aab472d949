use crate::environment::{Cell, CostModel, GridEnvironment};
use crate::search::heuristics::{WeightedManhattan, ZeroHeuristic};
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the cost of reaching the goal of `environment` from `cell`.
    fn evaluate(&mut self, cell: Cell, environment: &GridEnvironment) -> HeuristicValue;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[default]
    #[clap(help = "Manhattan distance with each axis weighted by the cost of moving along it.")]
    WeightedManhattan,
    #[clap(name = "zero", help = "The zero heuristic.")]
    ZeroHeuristic,
}

impl HeuristicName {
    /// Build the heuristic for one cost scenario. Heuristics that depend on
    /// move costs must be rebuilt whenever the cost model changes.
    pub fn create(&self, cost_model: &CostModel) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::WeightedManhattan => Box::new(WeightedManhattan::new(*cost_model)),
            HeuristicName::ZeroHeuristic => Box::new(ZeroHeuristic::new()),
        }
    }
}
