use crate::search::{Frontier, HeuristicValue, NodeId, SearchNode};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

/// Lowest f-value first. Nodes with equal f-values come out in insertion
/// order, so runs with the same seed expand the same nodes.
#[derive(Debug, Default)]
pub struct PriorityFrontier {
    queue: PriorityQueue<NodeId, Reverse<(HeuristicValue, u64)>>,
    insertions: u64,
}

impl PriorityFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for PriorityFrontier {
    fn push(&mut self, node: &SearchNode) {
        self.queue
            .push(node.get_node_id(), Reverse((node.get_f(), self.insertions)));
        self.insertions += 1;
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop().map(|(node_id, _)| node_id)
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
        self.insertions = 0;
    }
}
