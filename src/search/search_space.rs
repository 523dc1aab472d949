use crate::environment::{Action, Cell};
use crate::search::{HeuristicValue, NodeId, Plan, SearchNode, NO_NODE};
use segvec::{Linear, SegVec};

/// A [`SearchSpace`] owns every node created during one search. Nodes are
/// only ever appended and refer to their parent by index, so the whole tree
/// is dropped at once when the search finishes.
#[derive(Debug)]
pub struct SearchSpace {
    nodes: SegVec<SearchNode, Linear>,
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSpace {
    pub fn new() -> Self {
        Self {
            nodes: SegVec::new(),
        }
    }

    pub fn insert_root(&mut self, cell: Cell, h: HeuristicValue) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        self.nodes.push(SearchNode::new_root(node_id, cell, h));
        node_id
    }

    pub fn insert_child(
        &mut self,
        parent_id: NodeId,
        action: Action,
        cell: Cell,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> NodeId {
        let node_id = NodeId::new(self.nodes.len());
        let node = SearchNode::new_child(node_id, self.get_node(parent_id), action, cell, g, h);
        self.nodes.push(node);
        node_id
    }

    /// Walk the parent links from `goal_id` back to the root and return the
    /// actions along the way in execution order.
    pub fn extract_plan(&self, goal_id: NodeId) -> Plan {
        let mut steps = vec![];
        let mut current_node = self.get_node(goal_id);
        while NO_NODE != current_node.get_parent_id() {
            if let Some(action) = current_node.get_action() {
                steps.push(action);
            }
            current_node = self.get_node(current_node.get_parent_id());
        }
        steps.reverse();
        Plan::new(steps)
    }

    #[inline(always)]
    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.id()).expect("Invalid node id")
    }

    #[inline(always)]
    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.id()).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }
}
