//! Frozen lake environments. A [`GridEnvironment`] is a square grid of frozen
//! cells and holes with one start and one goal cell. Environments are
//! generated once from a seed and never change afterwards, so every search
//! engine run on the same environment sees the same map.

use crate::environment::{Action, Cell, EnvironmentError, ACTIONS};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const DEFAULT_LIFE_LIMIT: usize = 1000;

/// Where the start and goal cells are placed in a generated environment.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[clap(rename_all = "kebab-case")]
pub enum Placement {
    /// Start in the top left corner, goal in the bottom right corner.
    #[default]
    Corners,
    /// Start and goal are two distinct cells drawn uniformly at random.
    Random,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GenerationParameters {
    pub size: usize,
    pub freeze_probability: f64,
    pub life_limit: usize,
    #[serde(default)]
    pub placement: Placement,
}

impl GenerationParameters {
    pub fn new(size: usize, freeze_probability: f64) -> Self {
        Self {
            size,
            freeze_probability,
            life_limit: DEFAULT_LIFE_LIMIT,
            placement: Placement::Corners,
        }
    }

    pub fn with_life_limit(self, life_limit: usize) -> Self {
        Self { life_limit, ..self }
    }

    pub fn with_placement(self, placement: Placement) -> Self {
        Self { placement, ..self }
    }

    pub fn validate(&self) -> Result<(), EnvironmentError> {
        if self.size < 2 {
            return Err(EnvironmentError::InvalidSize(self.size));
        }
        if !(0. ..=1.).contains(&self.freeze_probability) {
            return Err(EnvironmentError::InvalidFreezeProbability(
                self.freeze_probability,
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridEnvironment {
    size: usize,
    freeze_probability: f64,
    start: Cell,
    goal: Cell,
    /// Row-major passability of every cell, `false` marks a hole.
    passable: Vec<bool>,
    life_limit: usize,
}

impl GridEnvironment {
    /// Generate an environment with the start and goal in opposite corners
    /// and the default life limit.
    pub fn generate(
        size: usize,
        freeze_probability: f64,
        seed: u64,
    ) -> Result<Self, EnvironmentError> {
        let parameters = GenerationParameters::new(size, freeze_probability);
        Self::generate_with(&parameters, &mut ChaCha8Rng::seed_from_u64(seed))
    }

    /// Generate an environment drawing all randomness from `rng`. Every cell
    /// other than the start and goal is frozen with probability
    /// `freeze_probability` and a hole otherwise. There is no guarantee that
    /// the goal is reachable from the start.
    pub fn generate_with(
        parameters: &GenerationParameters,
        rng: &mut impl Rng,
    ) -> Result<Self, EnvironmentError> {
        parameters.validate()?;
        let size = parameters.size;

        let mut passable: Vec<bool> = (0..size * size)
            .map(|_| rng.gen::<f64>() < parameters.freeze_probability)
            .collect();

        let (start, goal) = match parameters.placement {
            Placement::Corners => (Cell::new(0, 0), Cell::new(size - 1, size - 1)),
            Placement::Random => {
                let start = Cell::new(rng.gen_range(0..size), rng.gen_range(0..size));
                let mut goal = Cell::new(rng.gen_range(0..size), rng.gen_range(0..size));
                while goal == start {
                    goal = Cell::new(rng.gen_range(0..size), rng.gen_range(0..size));
                }
                (start, goal)
            }
        };
        passable[start.row * size + start.col] = true;
        passable[goal.row * size + goal.col] = true;

        Ok(Self {
            size,
            freeze_probability: parameters.freeze_probability,
            start,
            goal,
            passable,
            life_limit: parameters.life_limit,
        })
    }

    /// Build an environment from a textual map, one string per row, using
    /// `S` for the start, `G` for the goal, `F` for frozen cells and `H` for
    /// holes. Whitespace inside a row is ignored.
    pub fn from_rows<R: AsRef<str>>(rows: &[R]) -> Result<Self, EnvironmentError> {
        let grid: Vec<Vec<char>> = rows
            .iter()
            .map(|row| row.as_ref().chars().filter(|c| !c.is_whitespace()).collect())
            .collect();
        let size = grid.len();
        if size < 2 {
            return Err(EnvironmentError::InvalidSize(size));
        }

        let mut passable = Vec::with_capacity(size * size);
        let mut starts = vec![];
        let mut goals = vec![];
        for (row, symbols) in grid.iter().enumerate() {
            if symbols.len() != size {
                return Err(EnvironmentError::RaggedMap {
                    row,
                    found: symbols.len(),
                    expected: size,
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                match symbol {
                    'S' => starts.push(Cell::new(row, col)),
                    'G' => goals.push(Cell::new(row, col)),
                    'F' | 'H' => {}
                    _ => return Err(EnvironmentError::UnknownSymbol { symbol, row, col }),
                }
                passable.push(symbol != 'H');
            }
        }

        let start = match starts.as_slice() {
            [start] => *start,
            _ => return Err(EnvironmentError::MissingOrDuplicate('S')),
        };
        let goal = match goals.as_slice() {
            [goal] => *goal,
            _ => return Err(EnvironmentError::MissingOrDuplicate('G')),
        };

        let frozen = passable.iter().filter(|&&p| p).count();
        Ok(Self {
            size,
            freeze_probability: frozen as f64 / passable.len() as f64,
            start,
            goal,
            passable,
            life_limit: DEFAULT_LIFE_LIMIT,
        })
    }

    pub fn with_life_limit(self, life_limit: usize) -> Self {
        Self { life_limit, ..self }
    }

    /// Move one cell in the direction of `action`. Moving against the boundary
    /// keeps the agent in place. The second element is `false` when the
    /// resulting cell is a hole, which ends the episode.
    pub fn step(&self, cell: Cell, action: Action) -> (Cell, bool) {
        let next = action.apply(cell, self.size);
        (next, self.is_passable(next))
    }

    /// Moves from `cell` that change position and do not fall into a hole, in
    /// [`ACTIONS`] order.
    pub fn successors(&self, cell: Cell) -> impl Iterator<Item = (Action, Cell)> + '_ {
        ACTIONS.into_iter().filter_map(move |action| {
            let (next, valid) = self.step(cell, action);
            (valid && next != cell).then_some((action, next))
        })
    }

    pub fn is_goal(&self, cell: Cell) -> bool {
        cell == self.goal
    }

    pub fn is_hole(&self, cell: Cell) -> bool {
        !self.is_passable(cell)
    }

    pub fn is_passable(&self, cell: Cell) -> bool {
        self.contains(cell) && self.passable[cell.row * self.size + cell.col]
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn freeze_probability(&self) -> f64 {
        self.freeze_probability
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn goal(&self) -> Cell {
        self.goal
    }

    pub fn life_limit(&self) -> usize {
        self.life_limit
    }

    pub fn num_holes(&self) -> usize {
        self.passable.iter().filter(|&&p| !p).count()
    }

    fn symbol(&self, cell: Cell) -> char {
        if cell == self.start {
            'S'
        } else if cell == self.goal {
            'G'
        } else if self.is_passable(cell) {
            'F'
        } else {
            'H'
        }
    }
}

impl Display for GridEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = (0..self.size).map(|row| {
            (0..self.size)
                .map(|col| self.symbol(Cell::new(row, col)))
                .join(" ")
        });
        write!(f, "{}", rows.format("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn start_and_goal_are_always_passable() {
        for seed in 0..200 {
            for placement in [Placement::Corners, Placement::Random] {
                let parameters = GenerationParameters::new(8, 0.3).with_placement(placement);
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let env = GridEnvironment::generate_with(&parameters, &mut rng).unwrap();
                assert!(env.is_passable(env.start()));
                assert!(env.is_passable(env.goal()));
                assert_ne!(env.start(), env.goal());
            }
        }
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let a = GridEnvironment::generate(30, 0.8, 7).unwrap();
        let b = GridEnvironment::generate(30, 0.8, 7).unwrap();
        let c = GridEnvironment::generate(30, 0.8, 8).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn corners_placement() {
        let env = GridEnvironment::generate(5, 0.5, 3).unwrap();
        assert_eq!(env.start(), Cell::new(0, 0));
        assert_eq!(env.goal(), Cell::new(4, 4));
        assert_eq!(env.life_limit(), DEFAULT_LIFE_LIMIT);
    }

    #[test]
    fn extreme_probabilities() {
        let frozen = GridEnvironment::generate(10, 1.0, 1).unwrap();
        assert_eq!(frozen.num_holes(), 0);

        let holes = GridEnvironment::generate(10, 0.0, 1).unwrap();
        assert_eq!(holes.num_holes(), 10 * 10 - 2);
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert_eq!(
            GridEnvironment::generate(1, 0.5, 0),
            Err(EnvironmentError::InvalidSize(1))
        );
        assert_eq!(
            GridEnvironment::generate(4, 1.5, 0),
            Err(EnvironmentError::InvalidFreezeProbability(1.5))
        );
    }

    #[test]
    fn step_is_clipped_and_reports_holes() {
        let env = GridEnvironment::from_rows(HOLE_IN_THE_MIDDLE_MAP).unwrap();
        let start = env.start();
        assert_eq!(env.step(start, Action::Up), (start, true));
        assert_eq!(env.step(start, Action::Right), (Cell::new(0, 1), true));
        assert_eq!(env.step(Cell::new(0, 1), Action::Down), (Cell::new(1, 1), false));
        assert!(env.is_hole(Cell::new(1, 1)));
        assert!(env.is_goal(Cell::new(2, 2)));
    }

    #[test]
    fn successors_skip_holes_and_boundary_moves() {
        let env = GridEnvironment::from_rows(HOLE_IN_THE_MIDDLE_MAP).unwrap();
        let successors: Vec<_> = env.successors(Cell::new(0, 1)).collect();
        assert_eq!(
            successors,
            vec![(Action::Right, Cell::new(0, 2)), (Action::Left, Cell::new(0, 0))]
        );
    }

    #[test]
    fn from_rows_round_trips_through_display() {
        let env = GridEnvironment::from_rows(HOLE_IN_THE_MIDDLE_MAP).unwrap();
        assert_eq!(env.to_string(), "S F F\nF H F\nF F G");
        let rendered = env.to_string();
        let rows = rendered.lines().collect_vec();
        let reparsed = GridEnvironment::from_rows(rows.as_slice()).unwrap();
        assert_eq!(reparsed, env);
    }

    #[test]
    fn from_rows_rejects_malformed_maps() {
        assert_eq!(
            GridEnvironment::from_rows(&["SF", "F"]),
            Err(EnvironmentError::RaggedMap {
                row: 1,
                found: 1,
                expected: 2
            })
        );
        assert_eq!(
            GridEnvironment::from_rows(&["SX", "FG"]),
            Err(EnvironmentError::UnknownSymbol {
                symbol: 'X',
                row: 0,
                col: 1
            })
        );
        assert_eq!(
            GridEnvironment::from_rows(&["SF", "FF"]),
            Err(EnvironmentError::MissingOrDuplicate('G'))
        );
        assert_eq!(
            GridEnvironment::from_rows(&["SS", "FG"]),
            Err(EnvironmentError::MissingOrDuplicate('S'))
        );
    }
}
