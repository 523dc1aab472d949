use crate::environment::{Action, Cell, GridEnvironment};
use crate::search::Plan;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidPlan {
    #[error("step {step}: {action} from {from} falls into the hole at {hole}")]
    FallsIntoHole {
        step: usize,
        action: Action,
        from: Cell,
        hole: Cell,
    },
    #[error("plan does not reach the goal, final cell is {0}")]
    GoalNotReached(Cell),
}

/// Execute `plan` from the start of `environment` and check that it reaches
/// the goal without entering a hole.
pub fn validate(plan: &Plan, environment: &GridEnvironment) -> Result<(), InvalidPlan> {
    let mut current = environment.start();
    for (step, &action) in plan.steps().iter().enumerate() {
        let (next, valid) = environment.step(current, action);
        if !valid {
            return Err(InvalidPlan::FallsIntoHole {
                step,
                action,
                from: current,
                hole: next,
            });
        }
        current = next;
    }

    if !environment.is_goal(current) {
        return Err(InvalidPlan::GoalNotReached(current));
    }

    Ok(())
}
