//! Perfect maze carving and shortest path solving on an odd sized lattice.
//!
//! ```
//! use mazecore::{Maze, MazeSpec, PathFinder, RecursiveBacktracker};
//!
//! let spec = MazeSpec::default().with_seed(7);
//! let mut maze = Maze::generate(&spec, &RecursiveBacktracker).unwrap();
//! assert!(maze.solve(&PathFinder::new()).unwrap());
//! ```

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod grid;
pub mod maze;
pub mod queue;

pub use algorithms::{MazeCarver, PathFinder, Random, RecursiveBacktracker, Route};
pub use dims::Dims;
pub use error::{MazeError, MazeResult};
pub use grid::{CellState, Direction, Grid};
pub use maze::{Maze, MazeSpec};
