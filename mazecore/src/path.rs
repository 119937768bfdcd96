use std::hash::{Hash, Hasher};

use hashbrown::HashSet;

use crate::{dims::Dims, gameboard::Direction};

/// A cell and the direction the traveler left it by.
///
/// Identity is the point alone, two entries for the same cell are the same
/// entry no matter the direction.
#[derive(Debug, Clone, Copy)]
pub struct PathPoint {
    pub point: Dims,
    pub direction: Direction,
}

impl PathPoint {
    pub fn new(point: Dims, direction: Direction) -> Self {
        Self { point, direction }
    }

    /// Cell the move out of this point lands on.
    pub fn end(&self) -> Dims {
        self.point.neighbor(self.direction)
    }
}

impl PartialEq for PathPoint {
    fn eq(&self, other: &Self) -> bool {
        self.point == other.point
    }
}

impl Eq for PathPoint {}

impl Hash for PathPoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.point.hash(state);
    }
}

/// Trail of a traveler through the maze.
///
/// [`Path::add`] tells a step forward from a step back onto the previous
/// cell, the latter moves the step into the backtrack set. [`Path::push`] and
/// [`Path::pop`] touch the trail directly, generators use them for walks that
/// aren't travel.
#[derive(Debug, Clone, Default)]
pub struct Path {
    trail: Vec<PathPoint>,
    backtrack: HashSet<PathPoint>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, point: Dims, dir: Direction) {
        let end = point.neighbor(dir);
        let stepping_back = self.trail.last().is_some_and(|last| last.point == end);

        if stepping_back {
            self.trail.pop();
            self.backtrack.insert(PathPoint::new(point, dir));
        } else {
            self.backtrack.remove(&PathPoint::new(end, dir));
            self.trail.push(PathPoint::new(point, dir));
        }
    }

    pub fn push(&mut self, point: Dims, dir: Direction) {
        self.trail.push(PathPoint::new(point, dir));
    }

    pub fn pop(&mut self) -> Option<PathPoint> {
        self.trail.pop()
    }

    pub fn peek(&self) -> Option<&PathPoint> {
        self.trail.last()
    }

    pub fn len(&self) -> usize {
        self.trail.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }

    /// Forward entries, oldest first.
    pub fn trail(&self) -> &[PathPoint] {
        &self.trail
    }

    pub fn backtracked(&self) -> impl Iterator<Item = &PathPoint> {
        self.backtrack.iter()
    }

    pub fn backtrack_len(&self) -> usize {
        self.backtrack.len()
    }

    pub fn is_backtracked(&self, point: Dims) -> bool {
        // direction doesn't take part in the lookup
        self.backtrack
            .contains(&PathPoint::new(point, Direction::North))
    }
}
