use crate::search::{Frontier, NodeId, SearchNode};

/// Last in, first out.
#[derive(Debug, Default)]
pub struct StackFrontier {
    stack: Vec<NodeId>,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn push(&mut self, node: &SearchNode) {
        self.stack.push(node.get_node_id());
    }

    fn pop(&mut self) -> Option<NodeId> {
        self.stack.pop()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }

    fn clear(&mut self) {
        self.stack.clear();
    }
}
