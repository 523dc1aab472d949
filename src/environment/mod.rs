mod action;
mod cell;
mod cost_model;
mod errors;
mod grid_environment;

pub use action::{Action, ACTIONS};
pub use cell::Cell;
pub use cost_model::CostModel;
pub use errors::EnvironmentError;
pub use grid_environment::{GenerationParameters, GridEnvironment, Placement, DEFAULT_LIFE_LIMIT};
