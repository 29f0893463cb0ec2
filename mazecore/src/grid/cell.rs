use crate::dims::Dims;

/// Persistent state of a single lattice cell.
///
/// Search bookkeeping (visited cells) is never stored here, the path finder keeps it in its own
/// mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Wall,
    Path,
    Start,
    Exit,
    Solution,
}

impl CellState {
    pub fn is_wall(self) -> bool {
        self == CellState::Wall
    }

    pub fn is_open(self) -> bool {
        !self.is_wall()
    }

    /// Cells the path finder is allowed to step onto.
    pub fn is_passable(self) -> bool {
        matches!(self, CellState::Path | CellState::Exit)
    }

    pub fn symbol(self) -> char {
        match self {
            CellState::Wall => '#',
            CellState::Path => '.',
            CellState::Start => 'S',
            CellState::Exit => 'E',
            CellState::Solution => '*',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Some(match symbol {
            '#' => CellState::Wall,
            '.' | ' ' => CellState::Path,
            'S' => CellState::Start,
            'E' => CellState::Exit,
            '*' => CellState::Solution,
            _ => return None,
        })
    }
}

/// Orthogonal step on the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// Down, up, right, left. The path finder explores neighbours in this order by default.
    pub const fn get_in_order() -> [Direction; 4] {
        [
            Direction::Down,
            Direction::Up,
            Direction::Right,
            Direction::Left,
        ]
    }

    pub fn to_coord(self) -> Dims {
        match self {
            Direction::Down => Dims(0, 1),
            Direction::Up => Dims(0, -1),
            Direction::Right => Dims(1, 0),
            Direction::Left => Dims(-1, 0),
        }
    }
}
