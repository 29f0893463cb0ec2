use thiserror::Error;

use crate::dims::Dims;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("invalid maze size {width}x{height}, both sides must be odd and at least 3")]
    InvalidDimensions { width: i32, height: i32 },
    #[error("position {0} is outside of the maze")]
    OutOfBounds(Dims),
    #[error("position {0} is not an open cell of the maze")]
    UnreachableEndpoint(Dims),
    #[error("unknown cell symbol {0:?}")]
    InvalidSymbol(char),
    #[error("queue is full, capacity {capacity}")]
    QueueFull { capacity: usize },
    #[error("queue is empty")]
    QueueEmpty,
    #[error("there is no path from {start} to {exit}")]
    NoPathFound { start: Dims, exit: Dims },
}

impl MazeError {
    /// Whether the error describes a property of the maze rather than a misuse of the api.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, MazeError::NoPathFound { .. })
    }
}

pub type MazeResult<T> = Result<T, MazeError>;
