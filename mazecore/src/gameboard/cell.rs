use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dims::Dims;

use self::Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [North, South, East, West];

    pub fn offset(&self) -> Dims {
        match self {
            North => Dims(0, -1),
            South => Dims(0, 1),
            East => Dims(1, 0),
            West => Dims(-1, 0),
        }
    }

    pub fn opposite(&self) -> Direction {
        match self {
            North => South,
            South => North,
            East => West,
            West => East,
        }
    }

    /// Compass letter used by move scripts, case-insensitive.
    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_lowercase() {
            'n' => Some(North),
            's' => Some(South),
            'e' => Some(East),
            'w' => Some(West),
            _ => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            North => 'N',
            South => 'S',
            East => 'E',
            West => 'W',
        }
    }

    fn index(&self) -> usize {
        match self {
            North => 0,
            South => 1,
            East => 2,
            West => 3,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            North => "north",
            South => "south",
            East => "east",
            West => "west",
        };
        f.write_str(name)
    }
}

/// One grid position: four wall flags and a visited flag.
///
/// Cells know only their own position, every neighbor lookup goes through
/// [`Maze`](super::Maze).
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    walls: [bool; 4],
    visited: bool,
    coord: Dims,
}

impl Cell {
    pub fn new(pos: Dims) -> Cell {
        Cell {
            walls: [true; 4],
            visited: false,
            coord: pos,
        }
    }

    /// Only [`Maze::break_wall`](super::Maze::break_wall) may call this,
    /// otherwise the wall pairs get out of sync.
    pub(crate) fn remove_wall(&mut self, dir: Direction) {
        self.walls[dir.index()] = false;
    }

    #[cfg(test)]
    pub(crate) fn set_wall(&mut self, dir: Direction, value: bool) {
        self.walls[dir.index()] = value;
    }

    pub(crate) fn visit(&mut self) {
        self.visited = true;
    }

    pub fn get_wall(&self, dir: Direction) -> bool {
        self.walls[dir.index()]
    }

    pub fn open_directions(&self) -> impl Iterator<Item = Direction> + '_ {
        Direction::ALL.into_iter().filter(|dir| !self.get_wall(*dir))
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn get_coord(&self) -> Dims {
        self.coord
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}
