use std::path::PathBuf;

use mazecore::{GameError, MazeError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("maze error; {0}")]
    Maze(#[from] MazeError),
    #[error("game error; {0}")]
    Game(#[from] GameError),
    #[error("io error; {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot read settings file {path:?}; {source}")]
    Settings {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("invalid move {0:?}, expected one of n, s, e, w")]
    InvalidMove(char),
    #[error("invalid point {0:?}, expected X,Y")]
    InvalidPoint(String),
    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
    #[error("logger was already installed")]
    Logger(#[from] log::SetLoggerError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
