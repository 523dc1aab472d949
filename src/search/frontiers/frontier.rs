use crate::search::{NodeId, SearchNode};
use std::fmt::Debug;

/// The open list of a search. A frontier decides the order in which
/// generated nodes are expanded; everything else about the search is shared
/// between engines.
pub trait Frontier: Debug {
    fn push(&mut self, node: &SearchNode);

    fn pop(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&mut self);
}
