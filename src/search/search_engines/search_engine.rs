use crate::environment::{CostModel, GridEnvironment};
use crate::search::{
    search_engines::{
        AStar, BreadthFirstSearch, DepthFirstSearch, DepthLimitedSearch, RandomWalk,
        UniformCostSearch,
    },
    HeuristicName, Plan, SearchStatistics,
};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

pub const DEFAULT_DEPTH_LIMIT: usize = 50;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search was successful
    Success(Plan),
    /// The frontier ran empty, so the goal cannot be reached from the start
    ProvablyUnsolvable,
    /// The search stopped without finding the goal, but the search engine is
    /// incomplete (depth cut-off, or a random walk with no legal move)
    IncompleteUnsolvable,
    /// The search used up its life limit
    LifeLimitExceeded,
}

impl SearchResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }
}

pub trait SearchEngine: Debug {
    /// Search for a plan from the start to the goal of `environment`, paying
    /// move costs according to `cost_model`.
    fn search(
        &mut self,
        environment: &GridEnvironment,
        cost_model: &CostModel,
    ) -> (SearchResult, SearchStatistics);
}

/// Knobs shared by the search engines. Each engine reads only the ones that
/// concern it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOptions {
    /// Depth limit of depth-limited search
    pub depth_limit: usize,
    /// Maximum number of steps of a random walk, overriding the environment's
    /// life limit
    pub life_limit: Option<usize>,
    /// Maximum number of expansions of a systematic search
    pub expansion_limit: Option<usize>,
    /// Seed of the random walk's generator
    pub seed: u64,
    /// Heuristic used by A*
    pub heuristic: HeuristicName,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            depth_limit: DEFAULT_DEPTH_LIMIT,
            life_limit: None,
            expansion_limit: None,
            seed: 0,
            heuristic: HeuristicName::WeightedManhattan,
        }
    }
}

impl SearchOptions {
    pub fn with_depth_limit(self, depth_limit: usize) -> Self {
        Self {
            depth_limit,
            ..self
        }
    }

    pub fn with_life_limit(self, life_limit: Option<usize>) -> Self {
        Self { life_limit, ..self }
    }

    pub fn with_expansion_limit(self, expansion_limit: Option<usize>) -> Self {
        Self {
            expansion_limit,
            ..self
        }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn with_heuristic(self, heuristic: HeuristicName) -> Self {
        Self { heuristic, ..self }
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Random walk without memory, bounded by the life limit.")]
    Random,
    #[clap(help = "Breadth-first search.")]
    Bfs,
    #[clap(help = "Depth-first search.")]
    Dfs,
    #[clap(help = "Depth-limited search, see --depth-limit.")]
    Dls,
    #[clap(help = "Uniform-cost search.")]
    Ucs,
    #[clap(name = "astar", help = "A* search, see --heuristic.")]
    #[serde(rename = "astar")]
    AStar,
}

impl SearchEngineName {
    pub const ALL: [SearchEngineName; 6] = [
        SearchEngineName::Random,
        SearchEngineName::Bfs,
        SearchEngineName::Dfs,
        SearchEngineName::Dls,
        SearchEngineName::Ucs,
        SearchEngineName::AStar,
    ];

    pub fn create(&self, options: &SearchOptions) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Random => Box::new(RandomWalk::new(options.seed, options.life_limit)),
            SearchEngineName::Bfs => Box::new(BreadthFirstSearch::new(options.expansion_limit)),
            SearchEngineName::Dfs => Box::new(DepthFirstSearch::new(options.expansion_limit)),
            SearchEngineName::Dls => Box::new(DepthLimitedSearch::new(
                options.depth_limit,
                options.expansion_limit,
            )),
            SearchEngineName::Ucs => Box::new(UniformCostSearch::new(options.expansion_limit)),
            SearchEngineName::AStar => {
                Box::new(AStar::new(options.heuristic, options.expansion_limit))
            }
        }
    }
}
