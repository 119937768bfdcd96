use hashbrown::HashSet;
use rand::{seq::SliceRandom, Rng as _};

use super::{random_cell, Maze, MazeGenerator, Random};
use crate::dims::Dims;

/// Randomized Prim's algorithm.
///
/// Grows the maze from a random cell, each step joining a random frontier
/// cell to a random already carved neighbor of it.
#[derive(Debug)]
pub struct RndPrims;

impl RndPrims {
    fn extend_frontier(
        maze: &Maze,
        pos: Dims,
        frontier: &mut Vec<Dims>,
        seen: &mut HashSet<Dims>,
    ) {
        for (_, cell) in maze.neighbors(pos) {
            if !cell.is_visited() && seen.insert(cell.get_coord()) {
                frontier.push(cell.get_coord());
            }
        }
    }
}

impl MazeGenerator for RndPrims {
    fn carve(&self, maze: &mut Maze, _goal: Dims, rng: &mut Random) {
        let mut frontier = Vec::new();
        let mut seen = HashSet::with_capacity(maze.cell_count());

        let start = random_cell(maze, rng);
        maze.mark_visited(start);
        seen.insert(start);
        Self::extend_frontier(maze, start, &mut frontier, &mut seen);

        while !frontier.is_empty() {
            let cell = frontier.swap_remove(rng.gen_range(0..frontier.len()));

            let carved = maze
                .neighbors(cell)
                .into_iter()
                .filter(|(_, neighbor)| neighbor.is_visited())
                .map(|(dir, _)| dir)
                .collect::<Vec<_>>();

            // frontier cells always border the carved part
            if let Some(&dir) = carved.choose(rng) {
                maze.break_wall(cell, dir);
            }

            Self::extend_frontier(maze, cell, &mut frontier, &mut seen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng as _;

    #[test]
    fn visits_every_cell() {
        let mut maze = Maze::new(8, 11).unwrap();
        let mut rng = Random::seed_from_u64(11);
        RndPrims.carve(&mut maze, Dims(7, 10), &mut rng);

        assert!(maze.unvisited_cells().is_empty());
        assert!(maze.is_perfect());
    }

    #[test]
    fn single_row() {
        let mut maze = Maze::new(5, 1).unwrap();
        let mut rng = Random::seed_from_u64(0);
        RndPrims.carve(&mut maze, Dims(4, 0), &mut rng);

        assert_eq!(maze.shortest_path(Dims(0, 0), Dims(4, 0)).map(|p| p.len()), Some(4));
    }
}
