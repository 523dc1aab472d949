use crate::search::{Frontier, NodeId, SearchNode};
use std::collections::VecDeque;

/// First in, first out.
#[derive(Debug, Default)]
pub struct QueueFrontier {
    queue: VecDeque<NodeId>,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn push(&mut self, node: &SearchNode) {
        self.queue.push_back(node.get_node_id());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.queue.pop_front()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn clear(&mut self) {
        self.queue.clear();
    }
}
