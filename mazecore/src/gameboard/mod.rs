pub mod cell;
pub mod maze;

pub use cell::{Cell, Direction};
pub use maze::{Maze, MazeDefect, MazeError};
