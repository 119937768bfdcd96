use std::time::Duration;

use pausable_clock::{PausableClock, PausableInstant};
use thiserror::Error;

use crate::{
    algorithms::{generate, new_rng},
    dims::Dims,
    gameboard::{Direction, Maze, MazeError},
    options::MazeOptions,
    path::Path,
};

pub type PlayerId = usize;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("there is no player {0}")]
    NoSuchPlayer(PlayerId),
}

/// Someone walking through the maze.
pub struct Traveler {
    start: Dims,
    pos: Dims,
    path: Path,
    finished: bool,
    clock: PausableClock,
    started: PausableInstant,
}

impl Traveler {
    pub fn new(start: Dims) -> Self {
        let clock = PausableClock::default();
        let started = clock.now();

        Self {
            start,
            pos: start,
            path: Path::new(),
            finished: false,
            clock,
            started,
        }
    }

    pub fn start(&self) -> Dims {
        self.start
    }

    pub fn position(&self) -> Dims {
        self.pos
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn has_finished(&self) -> bool {
        self.finished
    }

    /// Time spent in the maze, frozen once the goal is reached.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed(&self.clock)
    }

    /// Steps one cell in `dir`.
    ///
    /// Returns `false` and stays put if there is a wall, the maze ends there,
    /// or the traveler already finished.
    pub fn move_in(&mut self, maze: &Maze, dir: Direction) -> bool {
        if self.finished || maze.neighbor(self.pos, dir).is_none() || maze.has_wall(self.pos, dir)
        {
            return false;
        }

        self.path.add(self.pos, dir);
        self.pos += dir.offset();
        true
    }

    /// Whether the traveler stands on `goal`. The first hit latches the
    /// traveler as finished and stops the clock.
    pub fn check_win(&mut self, goal: Dims) -> bool {
        if self.pos != goal {
            return false;
        }

        if !self.finished {
            self.finished = true;
            self.clock.pause();
        }

        true
    }

    pub fn restart(&mut self) {
        self.finished = false;
        self.pos = self.start;
        self.path = Path::new();
        self.clock = PausableClock::default();
        self.started = self.clock.now();
    }

    fn rehome(&mut self, size: Dims) {
        self.start = self.start.clamp_into(size);
        self.restart();
    }
}

/// One maze and everyone walking through it.
pub struct Game {
    options: MazeOptions,
    maze: Maze,
    seed: u64,
    players: Vec<Traveler>,
}

impl Game {
    /// Generates the maze and places the first player on the start.
    pub fn new(options: MazeOptions) -> Result<Self, MazeError> {
        let (maze, seed) = Self::build_maze(&options)?;

        let mut game = Self {
            options,
            maze,
            seed,
            players: Vec::new(),
        };
        game.add_player(None);

        Ok(game)
    }

    fn build_maze(options: &MazeOptions) -> Result<(Maze, u64), MazeError> {
        let mut maze = Maze::new_dims(options.size())?;
        let (mut rng, seed) = new_rng(options.seed());
        log::debug!("maze seed: {}", seed);

        generate(&mut maze, options.goal(), options.algorithm(), &mut rng);

        Ok((maze, seed))
    }

    /// Replaces the maze, every player keeps its start if it still fits.
    pub fn new_maze(&mut self, options: MazeOptions) -> Result<(), MazeError> {
        let (maze, seed) = Self::build_maze(&options)?;

        self.maze = maze;
        self.seed = seed;
        self.options = options;
        for player in self.players.iter_mut() {
            player.rehome(options.size());
        }

        Ok(())
    }

    pub fn add_player(&mut self, start: Option<Dims>) -> PlayerId {
        let start = start
            .unwrap_or(self.options.start())
            .clamp_into(self.maze.size());
        self.players.push(Traveler::new(start));
        self.players.len() - 1
    }

    pub fn get_maze(&self) -> &Maze {
        &self.maze
    }

    pub fn get_options(&self) -> &MazeOptions {
        &self.options
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    pub fn get_start_pos(&self) -> Dims {
        self.options.start()
    }

    pub fn get_goal_pos(&self) -> Dims {
        self.options.goal()
    }

    pub fn players(&self) -> &[Traveler] {
        &self.players
    }

    pub fn get_player(&self, id: PlayerId) -> Result<&Traveler, GameError> {
        self.players.get(id).ok_or(GameError::NoSuchPlayer(id))
    }

    fn get_player_mut(&mut self, id: PlayerId) -> Result<&mut Traveler, GameError> {
        self.players.get_mut(id).ok_or(GameError::NoSuchPlayer(id))
    }

    pub fn move_player(&mut self, id: PlayerId, dir: Direction) -> Result<bool, GameError> {
        let player = self
            .players
            .get_mut(id)
            .ok_or(GameError::NoSuchPlayer(id))?;
        Ok(player.move_in(&self.maze, dir))
    }

    pub fn check_win(&mut self, id: PlayerId) -> Result<bool, GameError> {
        let goal = self.options.goal();
        let player = self.get_player_mut(id)?;

        let already = player.has_finished();
        let won = player.check_win(goal);
        if won && !already {
            log::info!("player {} reached the goal in {:?}", id, player.elapsed());
        }

        Ok(won)
    }

    pub fn restart(&mut self, id: PlayerId) -> Result<(), GameError> {
        self.get_player_mut(id)?.restart();
        Ok(())
    }

    pub fn restart_all(&mut self) {
        self.players.iter_mut().for_each(Traveler::restart);
    }

    pub fn winners(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.has_finished())
            .map(|(id, _)| id)
    }
}
