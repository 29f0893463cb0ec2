use crate::{
    algorithms::{seeded_random, MazeCarver, PathFinder, Route},
    dims::*,
    error::{MazeError, MazeResult},
    grid::{CellState, Grid},
};

/// What maze to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeSpec {
    /// Size of the grid, walls included.
    pub size: Dims,

    /// Seed of the maze.
    ///
    /// Used for deterministic generation, a random one is drawn when missing.
    pub seed: Option<u64>,

    /// Room where carving starts and the solver begins, `(1, 1)` when missing.
    pub start: Option<Dims>,

    /// Room the solver looks for, the bottom right room when missing.
    pub exit: Option<Dims>,
}

impl Default for MazeSpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

impl MazeSpec {
    pub const DEFAULT_SIZE: Dims = Dims(41, 21);

    pub fn new(size: Dims) -> Self {
        Self {
            size,
            seed: None,
            start: None,
            exit: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_start(mut self, start: Dims) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_exit(mut self, exit: Dims) -> Self {
        self.exit = Some(exit);
        self
    }

    pub fn start(&self) -> Dims {
        self.start.unwrap_or(Dims::ONE)
    }

    pub fn exit(&self) -> Dims {
        self.exit.unwrap_or(self.size - 2)
    }

    pub fn validate(&self) -> MazeResult<()> {
        Grid::validate_size(self.size)?;
        let grid = Grid::new_dims(self.size)?;

        let (start, exit) = (self.start(), self.exit());
        for pos in [start, exit] {
            if !grid.is_room(pos) {
                return Err(MazeError::UnreachableEndpoint(pos));
            }
        }

        // a 3x3 maze has a single room, it's both the start and the exit
        if start == exit && grid.rooms().count() > 1 {
            return Err(MazeError::UnreachableEndpoint(exit));
        }

        Ok(())
    }
}

/// Carved grid together with its designated endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid,
    start: Dims,
    exit: Dims,
    seed: u64,
}

impl Maze {
    pub fn generate(spec: &MazeSpec, carver: &dyn MazeCarver) -> MazeResult<Self> {
        spec.validate()?;

        let (mut rng, seed) = seeded_random(spec.seed);
        let (start, exit) = (spec.start(), spec.exit());

        let mut grid = Grid::new_dims(spec.size)?;
        let rooms = carver.carve(&mut grid, start, &mut rng)?;

        grid.set(exit, CellState::Exit)?;
        grid.set(start, CellState::Start)?;

        log::info!(
            "Generated {}x{} maze using {} with seed {}, {} rooms",
            spec.size.0,
            spec.size.1,
            carver.name(),
            seed,
            rooms
        );

        Ok(Maze {
            grid,
            start,
            exit,
            seed,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn exit(&self) -> Dims {
        self.exit
    }

    /// Seed the maze was carved with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn is_solved(&self) -> bool {
        self.grid.count(CellState::Solution) > 0
    }

    /// Solves the maze between its endpoints, replacing any previous solution.
    pub fn solve(&mut self, finder: &PathFinder) -> MazeResult<bool> {
        self.grid.clear_solution();
        finder.solve(&mut self.grid, self.start, self.exit)
    }

    pub fn solve_route(&mut self, finder: &PathFinder) -> MazeResult<Route> {
        self.grid.clear_solution();
        finder.solve_route(&mut self.grid, self.start, self.exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::RecursiveBacktracker;

    #[test]
    fn default_endpoints() {
        let spec = MazeSpec::default();
        assert_eq!(spec.size, Dims(41, 21));
        assert_eq!(spec.start(), Dims(1, 1));
        assert_eq!(spec.exit(), Dims(39, 19));
        assert_eq!(spec.validate(), Ok(()));
    }

    #[test]
    fn validation() {
        assert!(matches!(
            MazeSpec::new(Dims(10, 11)).validate(),
            Err(MazeError::InvalidDimensions { .. })
        ));
        assert_eq!(
            MazeSpec::new(Dims(11, 11)).with_start(Dims(2, 1)).validate(),
            Err(MazeError::UnreachableEndpoint(Dims(2, 1)))
        );
        assert_eq!(
            MazeSpec::new(Dims(11, 11)).with_exit(Dims(11, 11)).validate(),
            Err(MazeError::UnreachableEndpoint(Dims(11, 11)))
        );
        assert_eq!(
            MazeSpec::new(Dims(11, 11)).with_exit(Dims(1, 1)).validate(),
            Err(MazeError::UnreachableEndpoint(Dims(1, 1)))
        );
        assert_eq!(MazeSpec::new(Dims(3, 3)).validate(), Ok(()));
    }

    #[test]
    fn generate_and_solve() {
        let spec = MazeSpec::default().with_seed(99);
        let mut maze = Maze::generate(&spec, &RecursiveBacktracker).unwrap();

        assert_eq!(maze.seed(), 99);
        assert_eq!(maze.grid().get(Dims(1, 1)), Ok(CellState::Start));
        assert_eq!(maze.grid().get(Dims(39, 19)), Ok(CellState::Exit));
        assert!(!maze.is_solved());

        let route = maze.solve_route(&PathFinder::new()).unwrap();
        assert!(maze.is_solved());
        assert_eq!(route.start(), Dims(1, 1));
        assert_eq!(route.exit(), Dims(39, 19));
        assert_eq!(
            maze.grid().count(CellState::Solution),
            route.between().len()
        );

        // solving again gives the same answer
        let marked = maze.grid().clone();
        assert_eq!(maze.solve(&PathFinder::new()), Ok(true));
        assert_eq!(maze.grid(), &marked);
    }

    #[test]
    fn seed_reproduces_maze() {
        let spec = MazeSpec::new(Dims(31, 17)).with_seed(2024);
        let a = Maze::generate(&spec, &RecursiveBacktracker).unwrap();
        let b = Maze::generate(&spec, &RecursiveBacktracker).unwrap();
        assert_eq!(a, b);

        let unseeded = Maze::generate(&MazeSpec::new(Dims(31, 17)), &RecursiveBacktracker).unwrap();
        let replay = Maze::generate(
            &MazeSpec::new(Dims(31, 17)).with_seed(unseeded.seed()),
            &RecursiveBacktracker,
        )
        .unwrap();
        assert_eq!(unseeded, replay);
    }

    #[test]
    fn single_room_maze() {
        let mut maze = Maze::generate(&MazeSpec::new(Dims(3, 3)), &RecursiveBacktracker).unwrap();
        assert_eq!(maze.grid().get(Dims(1, 1)), Ok(CellState::Start));
        let route = maze.solve_route(&PathFinder::new()).unwrap();
        assert_eq!(route.steps(), 0);
    }
}
