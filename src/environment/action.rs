//! The four cardinal moves available to the agent.

use crate::environment::Cell;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter, Deserialize, Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Action {
    Up,
    Right,
    Down,
    Left,
}

/// Successor order shared by every engine, so that ties between equally good
/// moves resolve the same way in each of them.
pub const ACTIONS: [Action; 4] = [Action::Up, Action::Right, Action::Down, Action::Left];

impl Action {
    /// Apply the move to `cell` on a `size` x `size` grid. Moving against a
    /// boundary leaves the cell unchanged.
    pub fn apply(&self, cell: Cell, size: usize) -> Cell {
        match self {
            Action::Up => Cell::new(cell.row.saturating_sub(1), cell.col),
            Action::Down => Cell::new((cell.row + 1).min(size - 1), cell.col),
            Action::Left => Cell::new(cell.row, cell.col.saturating_sub(1)),
            Action::Right => Cell::new(cell.row, (cell.col + 1).min(size - 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn action_order_matches_enum_order() {
        assert_eq!(Action::iter().collect::<Vec<_>>(), ACTIONS.to_vec());
    }

    #[test]
    fn moves_are_clipped_at_the_boundary() {
        let corner = Cell::new(0, 0);
        assert_eq!(Action::Up.apply(corner, 4), corner);
        assert_eq!(Action::Left.apply(corner, 4), corner);
        assert_eq!(Action::Down.apply(corner, 4), Cell::new(1, 0));
        assert_eq!(Action::Right.apply(corner, 4), Cell::new(0, 1));

        let far = Cell::new(3, 3);
        assert_eq!(Action::Down.apply(far, 4), far);
        assert_eq!(Action::Right.apply(far, 4), far);
    }

    #[test]
    fn display_uses_uppercase_names() {
        assert_eq!(Action::Up.to_string(), "UP");
        assert_eq!(Action::Left.to_string(), "LEFT");
    }
}
