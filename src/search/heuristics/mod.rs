mod heuristic;
mod weighted_manhattan;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicName, HeuristicValue};
pub use weighted_manhattan::WeightedManhattan;
pub use zero_heuristic::ZeroHeuristic;
