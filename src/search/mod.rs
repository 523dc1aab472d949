pub mod frontiers;
pub mod heuristics;
mod plan;
pub mod search_engines;
mod search_node;
mod search_space;
mod search_statistics;
mod validate;
mod verbosity;

pub use frontiers::{Frontier, PriorityFrontier, QueueFrontier, StackFrontier};
pub use heuristics::{Heuristic, HeuristicName, HeuristicValue, WeightedManhattan, ZeroHeuristic};
pub use plan::Plan;
pub use search_node::{NodeId, SearchNode, SearchNodeStatus, NO_NODE};
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use validate::{validate, InvalidPlan};
pub use verbosity::Verbosity;
