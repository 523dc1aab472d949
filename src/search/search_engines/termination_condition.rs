use crate::search::{search_engines::SearchResult, SearchStatistics};
use tracing::debug;

/// Bounds a systematic search by the number of nodes it may expand. This is
/// the only safeguard a run has; there is no external cancellation.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminationCondition {
    expansion_limit: Option<usize>,
}

impl TerminationCondition {
    pub fn new(expansion_limit: Option<usize>) -> Self {
        Self { expansion_limit }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    pub fn should_terminate(&self, statistics: &SearchStatistics) -> Option<SearchResult> {
        match self.expansion_limit {
            Some(limit) if statistics.expanded_nodes() >= limit => {
                debug!(expansion_limit = limit, "expansion limit reached");
                Some(SearchResult::LifeLimitExceeded)
            }
            _ => None,
        }
    }
}
