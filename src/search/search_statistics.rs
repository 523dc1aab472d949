use std::time::{Duration, Instant};
use tracing::{debug, trace};

#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of nodes expanded, or steps taken by a random walk
    expanded_nodes: usize,
    /// Number of successor nodes generated
    generated_nodes: usize,
    /// Number of generated or popped nodes discarded as duplicates
    duplicate_nodes: usize,
    /// Number of nodes not expanded because they reached the depth limit
    pruned_nodes: usize,
    /// Time when the search started
    search_start_time: Instant,
    /// Time when the last log was printed, used for periodic logging
    last_log_time: Instant,
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchStatistics {
    pub fn new() -> Self {
        trace!("starting search");
        Self {
            expanded_nodes: 0,
            generated_nodes: 0,
            duplicate_nodes: 0,
            pruned_nodes: 0,
            search_start_time: Instant::now(),
            last_log_time: Instant::now(),
        }
    }

    pub fn increment_expanded_nodes(&mut self) {
        self.expanded_nodes += 1;
        self.log_if_needed();
    }

    pub fn increment_generated_nodes(&mut self, num_nodes: usize) {
        self.generated_nodes += num_nodes;
    }

    pub fn increment_duplicate_nodes(&mut self) {
        self.duplicate_nodes += 1;
    }

    pub fn increment_pruned_nodes(&mut self) {
        self.pruned_nodes += 1;
    }

    pub fn expanded_nodes(&self) -> usize {
        self.expanded_nodes
    }

    pub fn generated_nodes(&self) -> usize {
        self.generated_nodes
    }

    pub fn duplicate_nodes(&self) -> usize {
        self.duplicate_nodes
    }

    pub fn pruned_nodes(&self) -> usize {
        self.pruned_nodes
    }

    pub fn elapsed(&self) -> Duration {
        self.search_start_time.elapsed()
    }

    fn log_if_needed(&mut self) {
        if self.last_log_time.elapsed().as_secs() > 10 {
            self.last_log_time = Instant::now();
            self.log();
        }
    }

    fn log(&self) {
        debug!(
            expanded_nodes = self.expanded_nodes,
            generated_nodes = self.generated_nodes,
            duplicate_nodes = self.duplicate_nodes,
            pruned_nodes = self.pruned_nodes,
        );
    }

    pub fn finalise_search(&self) {
        trace!("finalising search");
        self.log();
        trace!(search_duration = self.elapsed().as_secs_f64());
    }
}
