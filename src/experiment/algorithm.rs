use crate::search::search_engines::{SearchEngineName, SearchOptions};
use std::fmt::Display;

/// One column of the comparison: a search engine plus the parameter that
/// distinguishes its instances, so that depth-limited search with limits 50
/// and 100 count as two algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Algorithm {
    pub engine: SearchEngineName,
    pub depth_limit: Option<usize>,
}

impl Algorithm {
    pub fn new(engine: SearchEngineName) -> Self {
        Self {
            engine,
            depth_limit: None,
        }
    }

    pub fn depth_limited(depth_limit: usize) -> Self {
        Self {
            engine: SearchEngineName::Dls,
            depth_limit: Some(depth_limit),
        }
    }

    /// Options for one run of this algorithm, on top of the sweep-wide ones.
    pub fn options(&self, base: &SearchOptions) -> SearchOptions {
        match self.depth_limit {
            Some(depth_limit) => base.clone().with_depth_limit(depth_limit),
            None => base.clone(),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.engine, self.depth_limit) {
            (SearchEngineName::Random, _) => write!(f, "RANDOM"),
            (SearchEngineName::Bfs, _) => write!(f, "BFS"),
            (SearchEngineName::Dfs, _) => write!(f, "DFS"),
            (SearchEngineName::Dls, Some(depth_limit)) => write!(f, "DLS{}", depth_limit),
            (SearchEngineName::Dls, None) => write!(f, "DLS"),
            (SearchEngineName::Ucs, _) => write!(f, "UCS"),
            (SearchEngineName::AStar, _) => write!(f, "A*"),
        }
    }
}
