//! Core of mazegame: a grid of cells with walls, generators carving it into a
//! maze, and travelers walking through it while their trail is tracked.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod game;
pub mod gameboard;
pub mod options;
pub mod path;

pub use algorithms::Algorithm;
pub use dims::Dims;
pub use game::{Game, GameError, PlayerId, Traveler};
pub use gameboard::{Cell, Direction, Maze, MazeDefect, MazeError};
pub use options::MazeOptions;
pub use path::{Path, PathPoint};
