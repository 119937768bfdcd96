use rand::seq::SliceRandom;

use super::{random_cell, Maze, MazeGenerator, Random};
use crate::{dims::Dims, gameboard::Direction};

/// Randomized depth-first backtracker, long corridors with few branches.
#[derive(Debug)]
pub struct DepthFirstSearch;

impl MazeGenerator for DepthFirstSearch {
    fn carve(&self, maze: &mut Maze, _goal: Dims, rng: &mut Random) {
        let mut stack = Vec::with_capacity(maze.cell_count());

        let mut current = random_cell(maze, rng);
        maze.mark_visited(current);

        loop {
            let unvisited = maze
                .neighbors(current)
                .into_iter()
                .filter(|(_, cell)| !cell.is_visited())
                .map(|(dir, _)| dir)
                .collect::<Vec<Direction>>();

            match unvisited.choose(rng) {
                Some(&dir) => {
                    maze.break_wall(current, dir);
                    stack.push(current);
                    current = current.neighbor(dir);
                }
                // empty stack means we are back at the start with nothing left
                None => match stack.pop() {
                    Some(previous) => current = previous,
                    None => break,
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;

    #[test]
    fn visits_every_cell() {
        let mut maze = Maze::new(10, 6).unwrap();
        let mut rng = Random::seed_from_u64(3);
        DepthFirstSearch.carve(&mut maze, Dims(9, 5), &mut rng);

        assert!(maze.unvisited_cells().is_empty());
        assert!(maze.is_perfect());
    }
}
