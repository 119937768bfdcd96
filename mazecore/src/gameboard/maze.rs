use std::collections::VecDeque;

use hashbrown::{HashMap, HashSet};
use thiserror::Error;

use crate::{
    array::Array2D,
    dims::Dims,
    gameboard::cell::{Cell, Direction},
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("invalid maze dimensions {0:?}, both sides must be positive")]
    InvalidDimension(Dims),
    #[error("unknown maze algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Broken post-generation invariant, reported by [`Maze::check`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MazeDefect {
    #[error("wall {direction} of cell {pos:?} doesn't match its neighbor")]
    WallMismatch { pos: Dims, direction: Direction },
    #[error("cell {0:?} was never visited")]
    UnvisitedCell(Dims),
    #[error("cell {0:?} can't be reached")]
    UnreachableCell(Dims),
}

#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: Array2D<Cell>,
}

impl Maze {
    pub fn new(width: i32, height: i32) -> Result<Self, MazeError> {
        Self::new_dims(Dims(width, height))
    }

    pub fn new_dims(size: Dims) -> Result<Self, MazeError> {
        if size.0 <= 0 || size.1 <= 0 {
            return Err(MazeError::InvalidDimension(size));
        }

        let cells = Array2D::from_fn(size.0 as usize, size.1 as usize, Cell::new);
        Ok(Maze { cells })
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

    pub fn cell_count(&self) -> usize {
        self.size().product() as usize
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        let Dims(w, h) = self.size();
        0 <= pos.0 && pos.0 < w && 0 <= pos.1 && pos.1 < h
    }

    pub fn get_cell(&self, pos: Dims) -> Option<&Cell> {
        self.cells.get(pos)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        self.cells.iter_pos()
    }

    pub fn neighbor(&self, pos: Dims, dir: Direction) -> Option<&Cell> {
        if !self.is_in_bounds(pos) {
            return None;
        }
        self.get_cell(pos.neighbor(dir))
    }

    pub fn neighbors(&self, pos: Dims) -> Vec<(Direction, &Cell)> {
        Direction::ALL
            .into_iter()
            .filter_map(|dir| self.neighbor(pos, dir).map(|cell| (dir, cell)))
            .collect()
    }

    /// `true` also for positions outside the maze, there is nothing to pass through.
    pub fn has_wall(&self, pos: Dims, dir: Direction) -> bool {
        self.get_cell(pos).map_or(true, |cell| cell.get_wall(dir))
    }

    /// Clears the wall of `pos` in `dir` and the matching wall of the
    /// neighbor, marking both cells visited.
    ///
    /// Walls on the border have no counterpart, only the cell's own flag is
    /// cleared then.
    pub fn break_wall(&mut self, pos: Dims, dir: Direction) {
        let Some(cell) = self.cells.get_mut(pos) else {
            return;
        };
        cell.remove_wall(dir);
        cell.visit();

        if let Some(neighbor) = self.cells.get_mut(pos.neighbor(dir)) {
            neighbor.remove_wall(dir.opposite());
            neighbor.visit();
        }
    }

    pub(crate) fn mark_visited(&mut self, pos: Dims) {
        if let Some(cell) = self.cells.get_mut(pos) {
            cell.visit();
        }
    }

    pub fn is_visited(&self, pos: Dims) -> bool {
        self.get_cell(pos).is_some_and(Cell::is_visited)
    }

    pub fn unvisited_cells(&self) -> Vec<Dims> {
        self.cells
            .iter()
            .filter(|cell| !cell.is_visited())
            .map(Cell::get_coord)
            .collect()
    }

    /// Directions from `pos` in which the traveler can actually step.
    pub fn open_ways(&self, pos: Dims) -> impl Iterator<Item = Direction> + '_ {
        self.get_cell(pos)
            .into_iter()
            .flat_map(|cell| cell.open_directions())
            .filter(move |dir| self.neighbor(pos, *dir).is_some())
    }

    /// Number of broken walls between two cells of the maze, each pair counted once.
    pub fn passage_count(&self) -> usize {
        self.iter_pos()
            .map(|pos| {
                [Direction::East, Direction::South]
                    .into_iter()
                    .filter(|dir| {
                        self.neighbor(pos, *dir).is_some() && !self.has_wall(pos, *dir)
                    })
                    .count()
            })
            .sum()
    }

    pub fn reachable_from(&self, start: Dims) -> HashSet<Dims> {
        let mut seen = HashSet::new();
        if !self.is_in_bounds(start) {
            return seen;
        }

        let mut queue = VecDeque::from([start]);
        seen.insert(start);
        while let Some(pos) = queue.pop_front() {
            for dir in self.open_ways(pos) {
                let next = pos.neighbor(dir);
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        seen
    }

    pub fn is_connected(&self) -> bool {
        self.reachable_from(Dims::ZERO).len() == self.cell_count()
    }

    /// Connected and without cycles, so exactly one route between any two cells.
    pub fn is_perfect(&self) -> bool {
        self.is_connected() && self.passage_count() == self.cell_count() - 1
    }

    pub fn check(&self) -> Result<(), MazeDefect> {
        for pos in self.iter_pos() {
            for dir in Direction::ALL {
                if let Some(neighbor) = self.neighbor(pos, dir) {
                    if self.has_wall(pos, dir) != neighbor.get_wall(dir.opposite()) {
                        return Err(MazeDefect::WallMismatch { pos, direction: dir });
                    }
                }
            }
        }

        if let Some(&pos) = self.unvisited_cells().first() {
            return Err(MazeDefect::UnvisitedCell(pos));
        }

        let reachable = self.reachable_from(Dims::ZERO);
        match self.iter_pos().find(|pos| !reachable.contains(pos)) {
            Some(pos) => Err(MazeDefect::UnreachableCell(pos)),
            None => Ok(()),
        }
    }

    /// Shortest route from `from` to `to` through broken walls.
    pub fn shortest_path(&self, from: Dims, to: Dims) -> Option<Vec<Direction>> {
        if !self.is_in_bounds(from) || !self.is_in_bounds(to) {
            return None;
        }

        let mut came_from: HashMap<Dims, Direction> = HashMap::new();
        let mut queue = VecDeque::from([from]);
        let mut seen: HashSet<Dims> = [from].into_iter().collect();

        while let Some(pos) = queue.pop_front() {
            if pos == to {
                break;
            }
            for dir in self.open_ways(pos) {
                let next = pos.neighbor(dir);
                if seen.insert(next) {
                    came_from.insert(next, dir);
                    queue.push_back(next);
                }
            }
        }

        if !seen.contains(&to) {
            return None;
        }

        let mut route = Vec::new();
        let mut pos = to;
        while pos != from {
            let dir = came_from[&pos];
            route.push(dir);
            pos = pos.neighbor(dir.opposite());
        }
        route.reverse();

        Some(route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn assert_walls_paired(maze: &Maze) {
        for pos in maze.iter_pos() {
            for dir in Direction::ALL {
                if let Some(neighbor) = maze.neighbor(pos, dir) {
                    assert_eq!(
                        maze.has_wall(pos, dir),
                        neighbor.get_wall(dir.opposite()),
                        "{pos:?} {dir}"
                    );
                }
            }
        }
    }

    #[test]
    fn new_maze_is_closed() {
        let maze = Maze::new(4, 3).unwrap();
        assert_eq!(maze.size(), Dims(4, 3));
        assert_eq!(maze.cell_count(), 12);
        assert_eq!(maze.unvisited_cells().len(), 12);
        assert_eq!(maze.passage_count(), 0);
        for pos in maze.iter_pos() {
            assert!(Direction::ALL.iter().all(|dir| maze.has_wall(pos, *dir)));
        }
    }

    #[test]
    fn invalid_dimensions() {
        assert_eq!(
            Maze::new(0, 3).unwrap_err(),
            MazeError::InvalidDimension(Dims(0, 3))
        );
        assert!(Maze::new(3, -1).is_err());
        assert!(Maze::new(1, 1).is_ok());
    }

    #[test]
    fn get_cell_bounds() {
        let maze = Maze::new(3, 2).unwrap();
        assert_eq!(maze.get_cell(Dims(2, 1)).map(Cell::get_coord), Some(Dims(2, 1)));
        assert!(maze.get_cell(Dims(3, 1)).is_none());
        assert!(maze.get_cell(Dims(0, 2)).is_none());
        assert!(maze.get_cell(Dims(-1, 0)).is_none());
    }

    #[test]
    fn neighbor_none_iff_offset_leaves_grid() {
        let maze = Maze::new(3, 4).unwrap();
        for pos in maze.iter_pos() {
            for dir in Direction::ALL {
                let target = pos.neighbor(dir);
                assert_eq!(
                    maze.neighbor(pos, dir).is_none(),
                    !maze.is_in_bounds(target)
                );
                if let Some(cell) = maze.neighbor(pos, dir) {
                    assert_eq!(cell.get_coord(), target);
                }
            }
        }
    }

    #[test]
    fn neighbors_omit_border() {
        let maze = Maze::new(3, 3).unwrap();
        let corner = maze.neighbors(Dims(0, 0));
        let dirs = corner.iter().map(|(dir, _)| *dir).collect::<Vec<_>>();
        assert_eq!(dirs, vec![South, East]);
        assert_eq!(maze.neighbors(Dims(1, 1)).len(), 4);
    }

    #[test]
    fn break_wall_clears_both_sides() {
        let mut maze = Maze::new(3, 3).unwrap();
        maze.break_wall(Dims(1, 1), North);
        assert!(!maze.has_wall(Dims(1, 1), North));
        assert!(!maze.has_wall(Dims(1, 0), South));
        assert!(maze.is_visited(Dims(1, 1)));
        assert!(maze.is_visited(Dims(1, 0)));
        assert!(!maze.is_visited(Dims(0, 0)));
        assert_eq!(maze.passage_count(), 1);
        assert_walls_paired(&maze);

        maze.break_wall(Dims(1, 0), East);
        maze.break_wall(Dims(2, 2), West);
        assert_walls_paired(&maze);
        assert_eq!(maze.passage_count(), 3);
    }

    #[test]
    fn break_wall_on_border_and_outside() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.break_wall(Dims(0, 0), West);
        assert!(!maze.has_wall(Dims(0, 0), West));
        assert!(maze.is_visited(Dims(0, 0)));
        assert_eq!(maze.passage_count(), 0);
        assert_eq!(maze.open_ways(Dims(0, 0)).count(), 0);

        maze.break_wall(Dims(5, 5), North);
        assert_eq!(maze.unvisited_cells().len(), 3);
    }

    #[test]
    fn open_ways_follow_broken_walls() {
        let mut maze = Maze::new(3, 3).unwrap();
        assert_eq!(maze.open_ways(Dims(1, 1)).count(), 0);

        maze.break_wall(Dims(1, 1), North);
        maze.break_wall(Dims(1, 1), West);
        maze.break_wall(Dims(1, 0), North);
        assert_eq!(maze.open_ways(Dims(1, 1)).collect::<Vec<_>>(), vec![North, West]);
        assert_eq!(maze.open_ways(Dims(1, 0)).collect::<Vec<_>>(), vec![South]);
        assert_eq!(maze.open_ways(Dims(7, 7)).count(), 0);
    }

    #[test]
    fn unvisited_cells_row_major() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.break_wall(Dims(0, 0), East);
        assert_eq!(maze.unvisited_cells(), vec![Dims(0, 1), Dims(1, 1)]);
    }

    #[test]
    fn check_reports_defects() {
        let mut maze = Maze::new(2, 1).unwrap();
        assert_eq!(maze.check(), Err(MazeDefect::UnvisitedCell(Dims(0, 0))));

        maze.mark_visited(Dims(0, 0));
        maze.mark_visited(Dims(1, 0));
        assert_eq!(maze.check(), Err(MazeDefect::UnreachableCell(Dims(1, 0))));

        maze.break_wall(Dims(0, 0), East);
        assert_eq!(maze.check(), Ok(()));
        assert!(maze.is_perfect());

        maze.cells[Dims(1, 0)].set_wall(West, true);
        assert_eq!(
            maze.check(),
            Err(MazeDefect::WallMismatch {
                pos: Dims(0, 0),
                direction: East
            })
        );
    }

    #[test]
    fn shortest_path_follows_passages() {
        let mut maze = Maze::new(3, 2).unwrap();
        maze.break_wall(Dims(0, 0), South);
        maze.break_wall(Dims(0, 1), East);
        maze.break_wall(Dims(1, 1), East);
        maze.break_wall(Dims(2, 1), North);

        assert_eq!(
            maze.shortest_path(Dims(0, 0), Dims(2, 0)),
            Some(vec![South, East, East, North])
        );
        assert_eq!(maze.shortest_path(Dims(1, 1), Dims(1, 1)), Some(vec![]));
        assert_eq!(maze.shortest_path(Dims(0, 0), Dims(1, 0)), None);
        assert_eq!(maze.shortest_path(Dims(0, 0), Dims(9, 9)), None);
    }

    #[test]
    fn cycle_is_not_perfect() {
        let mut maze = Maze::new(2, 2).unwrap();
        maze.break_wall(Dims(0, 0), East);
        maze.break_wall(Dims(1, 0), South);
        maze.break_wall(Dims(1, 1), West);
        assert!(maze.is_perfect());

        maze.break_wall(Dims(0, 1), North);
        assert!(maze.is_connected());
        assert!(!maze.is_perfect());
    }
}
