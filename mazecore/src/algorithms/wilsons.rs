use hashbrown::HashSet;
use rand::seq::SliceRandom;

use super::{random_cell, Maze, MazeGenerator, Random};
use crate::{dims::Dims, gameboard::Direction, path::Path};

/// Wilson's algorithm, loop-erased random walks into a growing tree.
///
/// Picks every spanning tree with the same probability.
#[derive(Debug)]
pub struct Wilsons;

impl MazeGenerator for Wilsons {
    fn carve(&self, maze: &mut Maze, goal: Dims, rng: &mut Random) {
        let root = if maze.is_in_bounds(goal) {
            goal
        } else {
            random_cell(maze, rng)
        };
        maze.mark_visited(root);

        let mut walk = Path::new();
        let mut on_walk = HashSet::new();

        loop {
            let unvisited = maze.unvisited_cells();
            let Some(&start) = unvisited.choose(rng) else {
                break;
            };

            let mut current = start;
            on_walk.insert(current);

            while !maze.is_visited(current) {
                let Some(&dir) = Direction::ALL.choose(rng) else {
                    break;
                };
                if maze.neighbor(current, dir).is_none() {
                    continue;
                }

                let next = current.neighbor(dir);
                if on_walk.contains(&next) {
                    // erase the loop, the walk goes on from `next`
                    on_walk.remove(&current);
                    while let Some(step) = walk.pop() {
                        if step.point == next {
                            break;
                        }
                        on_walk.remove(&step.point);
                    }
                } else {
                    walk.push(current, dir);
                    on_walk.insert(next);
                }
                current = next;
            }

            while let Some(step) = walk.pop() {
                maze.break_wall(step.point, step.direction);
            }
            on_walk.clear();
        }
    }
}
