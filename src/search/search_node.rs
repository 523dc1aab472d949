use crate::environment::{Action, Cell};
use crate::search::HeuristicValue;
use ordered_float::OrderedFloat;

/// Index of a node in the [`SearchSpace`](crate::search::SearchSpace) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(id: usize) -> Self {
        Self(id)
    }

    pub fn id(&self) -> usize {
        self.0
    }
}

/// Parent id of the root node.
pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// The status of a search node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
}

/// A [`SearchNode`] is one visit of a cell during the search. The same cell
/// may be visited by several nodes when the search allows duplicates on the
/// frontier, each node remembering the path that led to it through its
/// parent.
#[derive(Debug, Clone)]
pub struct SearchNode {
    /// Position of the node in the arena
    node_id: NodeId,
    /// Cell the agent is in
    cell: Cell,
    /// Status of the node
    status: SearchNodeStatus,
    /// F-value of the node, the frontier ordering key for best-first search.
    f: HeuristicValue,
    /// G-value of the node, i.e. the cost of the path to reach this node.
    g: HeuristicValue,
    /// H-value of the node, i.e. the heuristic estimate of the cost to reach
    /// the goal.
    h: HeuristicValue,
    /// Number of moves from the start
    depth: usize,
    /// Action that led to this node, `None` for the root
    action: Option<Action>,
    /// Parent node
    parent_id: NodeId,
}

impl SearchNode {
    /// Create the root node of a search, sitting on the start cell.
    pub fn new_root(node_id: NodeId, cell: Cell, h: HeuristicValue) -> Self {
        Self {
            node_id,
            cell,
            status: SearchNodeStatus::Open,
            f: h,
            g: OrderedFloat(0.),
            h,
            depth: 0,
            action: None,
            parent_id: NO_NODE,
        }
    }

    /// Create a node reached from `parent` by applying `action`.
    pub fn new_child(
        node_id: NodeId,
        parent: &SearchNode,
        action: Action,
        cell: Cell,
        g: HeuristicValue,
        h: HeuristicValue,
    ) -> Self {
        Self {
            node_id,
            cell,
            status: SearchNodeStatus::Open,
            f: g + h,
            g,
            h,
            depth: parent.depth + 1,
            action: Some(action),
            parent_id: parent.node_id,
        }
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_node_id(&self) -> NodeId {
        self.node_id
    }

    pub fn get_cell(&self) -> Cell {
        self.cell
    }

    pub fn get_f(&self) -> HeuristicValue {
        self.f
    }

    pub fn get_g(&self) -> HeuristicValue {
        self.g
    }

    pub fn get_h(&self) -> HeuristicValue {
        self.h
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_action(&self) -> Option<Action> {
        self.action
    }

    pub fn get_parent_id(&self) -> NodeId {
        self.parent_id
    }
}
