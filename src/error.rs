use std::{io, path::PathBuf};

use mazecore::MazeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Error reading settings file ({path:?}): {source}")]
    Settings {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}
