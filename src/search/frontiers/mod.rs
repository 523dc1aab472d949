mod frontier;
mod priority;
mod queue;
mod stack;

pub use frontier::Frontier;
pub use priority::PriorityFrontier;
pub use queue::QueueFrontier;
pub use stack::StackFrontier;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{Action, Cell};
    use crate::search::{NodeId, SearchSpace};
    use ordered_float::OrderedFloat;

    /// Root plus three children with f-values 5, 3 and 3, in that order.
    fn sample_space() -> (SearchSpace, Vec<NodeId>) {
        let mut space = SearchSpace::new();
        let root = space.insert_root(Cell::new(0, 0), OrderedFloat(0.));
        let ids = [(Action::Right, 5.), (Action::Down, 3.), (Action::Left, 3.)]
            .into_iter()
            .enumerate()
            .map(|(i, (action, g))| {
                space.insert_child(root, action, Cell::new(1, i), OrderedFloat(g), OrderedFloat(0.))
            })
            .collect();
        (space, ids)
    }

    fn drain(frontier: &mut impl Frontier) -> Vec<NodeId> {
        std::iter::from_fn(|| frontier.pop()).collect()
    }

    #[test]
    fn stack_is_lifo() {
        let (space, ids) = sample_space();
        let mut frontier = StackFrontier::new();
        ids.iter().for_each(|&id| frontier.push(space.get_node(id)));
        assert_eq!(frontier.len(), 3);
        assert_eq!(drain(&mut frontier), vec![ids[2], ids[1], ids[0]]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn queue_is_fifo() {
        let (space, ids) = sample_space();
        let mut frontier = QueueFrontier::new();
        ids.iter().for_each(|&id| frontier.push(space.get_node(id)));
        assert_eq!(drain(&mut frontier), ids);
    }

    #[test]
    fn priority_breaks_ties_by_insertion_order() {
        let (space, ids) = sample_space();
        let mut frontier = PriorityFrontier::new();
        ids.iter().for_each(|&id| frontier.push(space.get_node(id)));
        assert_eq!(drain(&mut frontier), vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn clear_empties_the_frontier() {
        let (space, ids) = sample_space();
        let mut frontier = PriorityFrontier::new();
        frontier.push(space.get_node(ids[0]));
        frontier.clear();
        assert!(frontier.is_empty());
        assert_eq!(frontier.pop(), None);
    }
}
