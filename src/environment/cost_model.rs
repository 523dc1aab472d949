use crate::environment::{Action, EnvironmentError};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// Cost of each of the four moves. The cost depends only on the direction of
/// the move, never on the cell it is made from.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CostModel {
    pub up: f64,
    pub right: f64,
    pub down: f64,
    pub left: f64,
}

impl Default for CostModel {
    fn default() -> Self {
        Self::uniform()
    }
}

impl CostModel {
    /// Every move costs 1.
    pub fn uniform() -> Self {
        Self::axis_weighted(1., 1.)
    }

    /// Horizontal moves cost 1 and vertical moves cost 10.
    pub fn anisotropic() -> Self {
        Self::axis_weighted(1., 10.)
    }

    pub fn axis_weighted(horizontal: f64, vertical: f64) -> Self {
        Self {
            up: vertical,
            right: horizontal,
            down: vertical,
            left: horizontal,
        }
    }

    pub fn cost(&self, action: Action) -> f64 {
        match action {
            Action::Up => self.up,
            Action::Right => self.right,
            Action::Down => self.down,
            Action::Left => self.left,
        }
    }

    pub fn path_cost<'a>(&self, actions: impl IntoIterator<Item = &'a Action>) -> f64 {
        actions.into_iter().map(|&action| self.cost(action)).sum()
    }

    pub fn validate(&self) -> Result<(), EnvironmentError> {
        for action in Action::iter() {
            let cost = self.cost(action);
            if !(cost.is_finite() && cost > 0.) {
                return Err(EnvironmentError::NonPositiveCost { action, cost });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anisotropic_weights_vertical_moves() {
        let costs = CostModel::anisotropic();
        assert_eq!(costs.cost(Action::Left), 1.);
        assert_eq!(costs.cost(Action::Right), 1.);
        assert_eq!(costs.cost(Action::Up), 10.);
        assert_eq!(costs.cost(Action::Down), 10.);
        assert_eq!(
            costs.path_cost(&[Action::Down, Action::Right, Action::Right]),
            12.
        );
    }

    #[test]
    fn validate_rejects_non_positive_costs() {
        assert!(CostModel::uniform().validate().is_ok());

        let mut costs = CostModel::uniform();
        costs.down = 0.;
        assert_eq!(
            costs.validate(),
            Err(EnvironmentError::NonPositiveCost {
                action: Action::Down,
                cost: 0.
            })
        );

        costs.down = f64::NAN;
        assert!(costs.validate().is_err());
    }
}
