use crate::environment::{Cell, GridEnvironment};
use crate::search::{Heuristic, HeuristicValue};

#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&mut self, _cell: Cell, _environment: &GridEnvironment) -> HeuristicValue {
        (0.).into()
    }
}
