//! Random walk baseline. The agent has no memory of where it has been: at
//! every step it picks uniformly among the moves that do not drop it into a
//! hole, bumps into the boundary included, until it reaches the goal or runs
//! out of life.

use crate::environment::{Action, CostModel, GridEnvironment, ACTIONS};
use crate::search::{
    search_engines::{SearchEngine, SearchResult},
    Plan, SearchStatistics,
};
use rand::{seq::SliceRandom, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generator stream used by walks, so that a walk seeded like an environment
/// does not replay the draws that generated its map.
const WALK_STREAM: u64 = 1;

#[derive(Debug)]
pub struct RandomWalk {
    rng: ChaCha8Rng,
    life_limit: Option<usize>,
}

impl RandomWalk {
    /// A walk drawing its moves from a generator seeded with `seed`. The
    /// number of steps is capped by `life_limit` if given, and by the
    /// environment's life limit otherwise.
    pub fn new(seed: u64, life_limit: Option<usize>) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(WALK_STREAM);
        Self { rng, life_limit }
    }
}

impl SearchEngine for RandomWalk {
    fn search(
        &mut self,
        environment: &GridEnvironment,
        _cost_model: &CostModel,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let life_limit = self.life_limit.unwrap_or(environment.life_limit());
        let mut current = environment.start();
        let mut steps = vec![];

        while steps.len() < life_limit {
            statistics.increment_expanded_nodes();
            let safe_moves: Vec<Action> = ACTIONS
                .into_iter()
                .filter(|&action| environment.step(current, action).1)
                .collect();
            statistics.increment_generated_nodes(safe_moves.len());

            let Some(&action) = safe_moves.choose(&mut self.rng) else {
                // Surrounded by holes
                statistics.finalise_search();
                return (SearchResult::IncompleteUnsolvable, statistics);
            };
            current = environment.step(current, action).0;
            steps.push(action);

            if environment.is_goal(current) {
                statistics.finalise_search();
                return (SearchResult::Success(Plan::new(steps)), statistics);
            }
        }

        statistics.finalise_search();
        (SearchResult::LifeLimitExceeded, statistics)
    }
}
