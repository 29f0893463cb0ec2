pub mod cell;
pub use cell::{CellState, Direction};

use std::{fmt, str::FromStr};

use crate::{
    array::Array2D,
    dims::*,
    error::{MazeError, MazeResult},
};

/// Rectangular lattice of cell states.
///
/// Both sides are odd and at least [`Grid::MIN_SIDE`]. Cells with two odd coordinates are rooms,
/// the rest are walls that may be carved away to connect two rooms. The outermost ring is the
/// border and is never carved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<CellState>,
}

impl Grid {
    pub const MIN_SIDE: i32 = 3;

    /// New grid, all walls.
    pub fn new(width: i32, height: i32) -> MazeResult<Self> {
        Self::new_dims(Dims(width, height))
    }

    pub fn new_dims(size: Dims) -> MazeResult<Self> {
        Self::validate_size(size)?;
        let cells = Array2D::new_dims(CellState::Wall, size)
            .ok_or(MazeError::InvalidDimensions {
                width: size.0,
                height: size.1,
            })?;

        Ok(Grid { cells })
    }

    pub fn validate_size(size: Dims) -> MazeResult<()> {
        let valid_side = |side: i32| side >= Self::MIN_SIDE && side % 2 == 1;
        if valid_side(size.0) && valid_side(size.1) {
            Ok(())
        } else {
            log::warn!("Rejected maze size {}", size);
            Err(MazeError::InvalidDimensions {
                width: size.0,
                height: size.1,
            })
        }
    }

    /// Builds a grid from rows listed top to bottom. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<CellState>>) -> MazeResult<Self> {
        let height = rows.len() as i32;
        let width = rows.first().map_or(0, |row| row.len()) as i32;
        if rows.iter().any(|row| row.len() as i32 != width) {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let mut grid = Self::new(width, height)?;
        for (pos, state) in Dims::iter_fill(Dims::ZERO, grid.size()).zip(rows.into_iter().flatten())
        {
            grid.cells[pos] = state;
        }

        Ok(grid)
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn width(&self) -> i32 {
        self.size().0
    }

    pub fn height(&self) -> i32 {
        self.size().1
    }

    /// Number of cells, also the capacity any search over this grid may need.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let Dims(w, h) = self.size();
        0 <= pos.0 && pos.0 < w && 0 <= pos.1 && pos.1 < h
    }

    /// Strictly inside the border.
    pub fn is_interior(&self, pos: Dims) -> bool {
        let Dims(w, h) = self.size();
        0 < pos.0 && pos.0 < w - 1 && 0 < pos.1 && pos.1 < h - 1
    }

    pub fn is_border(&self, pos: Dims) -> bool {
        self.is_in_bounds(pos) && !self.is_interior(pos)
    }

    /// Interior cell with both coordinates odd.
    pub fn is_room(&self, pos: Dims) -> bool {
        self.is_interior(pos) && pos.is_odd()
    }

    pub fn get(&self, pos: Dims) -> MazeResult<CellState> {
        self.cells
            .get(pos)
            .copied()
            .ok_or(MazeError::OutOfBounds(pos))
    }

    pub fn set(&mut self, pos: Dims, state: CellState) -> MazeResult<()> {
        let cell = self
            .cells
            .get_mut(pos)
            .ok_or(MazeError::OutOfBounds(pos))?;
        *cell = state;
        Ok(())
    }

    pub fn count(&self, state: CellState) -> usize {
        self.cells.count(|s| *s == state)
    }

    /// Cells that are anything but a wall.
    pub fn open_count(&self) -> usize {
        self.cells.count(|s| s.is_open())
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    /// Rooms in row-major order.
    pub fn rooms(&self) -> impl Iterator<Item = Dims> + '_ {
        self.iter_pos().filter(move |pos| self.is_room(*pos))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.rows()
    }

    /// In-bounds orthogonal neighbours of `pos`, in the given direction order.
    pub fn neighbors(
        &self,
        pos: Dims,
        order: [Direction; 4],
    ) -> impl Iterator<Item = (Dims, CellState)> + '_ {
        order
            .into_iter()
            .map(move |dir| pos + dir.to_coord())
            .filter_map(move |next| self.cells.get(next).map(|state| (next, *state)))
    }

    /// Number of orthogonally adjacent pairs of open cells.
    pub fn connection_count(&self) -> usize {
        self.iter_pos()
            .filter(|pos| self.cells[*pos].is_open())
            .map(|pos| {
                [Direction::Right, Direction::Down]
                    .into_iter()
                    .filter(|dir| {
                        self.cells
                            .get(pos + dir.to_coord())
                            .is_some_and(|s| s.is_open())
                    })
                    .count()
            })
            .sum()
    }

    /// Turns every solution cell back into a plain path.
    pub fn clear_solution(&mut self) {
        for pos in Dims::iter_fill(Dims::ZERO, self.size()) {
            if self.cells[pos] == CellState::Solution {
                self.cells[pos] = CellState::Path;
            }
        }
    }
}

impl FromStr for Grid {
    type Err = MazeError;

    /// Parses a picture of the grid, one line per row, using the symbols of
    /// [`CellState::symbol`]. Blank lines and surrounding whitespace are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.chars()
                    .map(|c| CellState::from_symbol(c).ok_or(MazeError::InvalidSymbol(c)))
                    .collect::<MazeResult<Vec<_>>>()
            })
            .collect::<MazeResult<Vec<_>>>()?;

        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for state in row {
                write!(f, "{}", state.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
