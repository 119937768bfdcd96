mod depth_first_search;
mod rnd_prims;
mod wilsons;

use std::{fmt, str::FromStr};

use rand::{thread_rng, Rng as _, SeedableRng as _};
use serde::{Deserialize, Serialize};

use crate::{
    dims::Dims,
    gameboard::{Maze, MazeError},
};
pub use depth_first_search::DepthFirstSearch;
pub use rnd_prims::RndPrims;
pub use wilsons::Wilsons;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Carves passages into a freshly built maze.
///
/// Implementations may only open walls through [`Maze::break_wall`], and must
/// leave every cell visited and reachable.
pub trait MazeGenerator: fmt::Debug + Sync + Send {
    fn carve(&self, maze: &mut Maze, goal: Dims, rng: &mut Random);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Algorithm {
    #[default]
    DepthFirstSearch,
    Prim,
    Wilson,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::DepthFirstSearch,
        Algorithm::Prim,
        Algorithm::Wilson,
    ];

    pub fn generator(&self) -> &'static dyn MazeGenerator {
        match self {
            Algorithm::DepthFirstSearch => &DepthFirstSearch,
            Algorithm::Prim => &RndPrims,
            Algorithm::Wilson => &Wilsons,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::DepthFirstSearch => "Depth-first Search",
            Algorithm::Prim => "Prim's Algorithm",
            Algorithm::Wilson => "Wilson's Algorithm",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dfs" | "depth-first" | "depthfirstsearch" | "depth_first_search" => {
                Ok(Algorithm::DepthFirstSearch)
            }
            "prim" | "prims" => Ok(Algorithm::Prim),
            "wilson" | "wilsons" => Ok(Algorithm::Wilson),
            _ => Err(MazeError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Seeds the generator rng, drawing a seed when none is given.
///
/// Returns the seed too, so the maze can be generated again.
pub fn new_rng(seed: Option<u64>) -> (Random, u64) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (Random::seed_from_u64(seed), seed)
}

pub fn generate(maze: &mut Maze, goal: Dims, algorithm: Algorithm, rng: &mut Random) {
    log::debug!(
        "generating {}x{} maze using {}",
        maze.width(),
        maze.height(),
        algorithm
    );

    algorithm.generator().carve(maze, goal, rng);

    if let Err(defect) = maze.check() {
        log::warn!("{} left the maze broken: {}", algorithm, defect);
    }
}

pub(crate) fn random_cell(maze: &Maze, rng: &mut Random) -> Dims {
    let Dims(w, h) = maze.size();
    Dims(rng.gen_range(0..w), rng.gen_range(0..h))
}
