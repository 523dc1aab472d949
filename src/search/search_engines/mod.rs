mod astar;
mod bfs;
mod dfs;
mod dls;
mod graph_search;
mod random_walk;
mod search_engine;
mod termination_condition;
mod ucs;


pub use astar::AStar;
pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use dls::DepthLimitedSearch;
pub use graph_search::{DuplicateDetection, GraphSearch};
pub use random_walk::RandomWalk;
pub use search_engine::{
    SearchEngine, SearchEngineName, SearchOptions, SearchResult, DEFAULT_DEPTH_LIMIT,
};
pub use termination_condition::TerminationCondition;
pub use ucs::UniformCostSearch;
