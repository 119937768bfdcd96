mod error;
mod logging;
mod render;
mod settings;

use std::path::PathBuf;

use clap::Parser;
use mazecore::{Algorithm, Dims, Direction, Game};

use crate::{
    error::{Error, Result},
    settings::Settings,
};

#[derive(Parser, Debug)]
#[clap(version, about, name = "mazegame")]
struct Args {
    #[clap(short = 'W', long, help = "Maze width in cells")]
    width: Option<i32>,
    #[clap(short = 'H', long, help = "Maze height in cells")]
    height: Option<i32>,
    #[clap(short, long, help = "Generator: dfs, prim or wilson")]
    algorithm: Option<Algorithm>,
    #[clap(long, help = "Seed for the generator, random if not set")]
    seed: Option<u64>,
    #[clap(long, value_parser = parse_point, help = "Start cell as X,Y")]
    start: Option<Dims>,
    #[clap(long, value_parser = parse_point, help = "Goal cell as X,Y")]
    goal: Option<Dims>,
    #[clap(short, long, help = "Moves to replay, letters n, s, e and w")]
    moves: Option<String>,
    #[clap(long, action, help = "Print the shortest route from start to goal")]
    solve: bool,
    #[clap(short, long, help = "Path to the settings file")]
    config: Option<PathBuf>,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More logging, repeatable")]
    verbose: u8,
}

impl Args {
    fn settings(&self) -> Settings {
        let mut settings = Settings::new();
        if let Some(width) = self.width {
            settings = settings.set_width(width);
        }
        if let Some(height) = self.height {
            settings = settings.set_height(height);
        }
        if let Some(algorithm) = self.algorithm {
            settings = settings.set_algorithm(algorithm);
        }
        if let Some(seed) = self.seed {
            settings = settings.set_seed(seed);
        }
        if let Some(start) = self.start {
            settings = settings.set_start(start);
        }
        if let Some(goal) = self.goal {
            settings = settings.set_goal(goal);
        }
        settings
    }
}

fn parse_point(value: &str) -> Result<Dims> {
    let invalid = || Error::InvalidPoint(value.to_owned());
    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse().map_err(|_| invalid())?;
    let y = y.trim().parse().map_err(|_| invalid())?;
    Ok(Dims(x, y))
}

fn parse_moves(script: &str) -> Result<Vec<Direction>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Direction::from_char(c).ok_or(Error::InvalidMove(c)))
        .collect()
}

/// Replays `moves` for the first player, checking for a win after each step.
fn play(game: &mut Game, moves: &[Direction]) -> Result<bool> {
    let mut won = game.check_win(0)?;
    for (i, dir) in moves.iter().enumerate() {
        if !game.move_player(0, *dir)? {
            log::debug!("move {} ({}) is blocked", i + 1, dir);
        }
        won = game.check_win(0)?;
    }
    Ok(won)
}

fn run(args: Args) -> Result<()> {
    logging::init(logging::raise(log::LevelFilter::Warn, args.verbose))?;

    let file_settings = match args.config.clone().or_else(Settings::default_path) {
        Some(path) => Settings::load(path)?,
        None => Settings::builtin(),
    };
    let settings = file_settings.merge(args.settings());
    logging::get_logger().set_min_level(logging::raise(settings.get_log_level()?, args.verbose));

    let moves = match &args.moves {
        Some(script) => Some(parse_moves(script)?),
        None => None,
    };

    let options = settings.maze_options()?;
    let mut game = Game::new(options)?;
    log::info!(
        "{} maze of {}x{} cells, seed {}",
        options.algorithm(),
        options.size_x(),
        options.size_y(),
        game.get_seed()
    );

    let won = match &moves {
        Some(moves) => Some(play(&mut game, moves)?),
        None => None,
    };

    let player = game.get_player(0)?;
    print!("{}", render::render(&game, Some(player)));
    println!("seed: {}", game.get_seed());

    if let Some(won) = won {
        println!(
            "moves: {}, trail: {}, backtracked: {}, {}",
            moves.as_ref().map_or(0, Vec::len),
            player.path().len(),
            player.path().backtrack_len(),
            if won { "goal reached" } else { "goal not reached" }
        );
    }

    if args.solve {
        match game
            .get_maze()
            .shortest_path(game.get_start_pos(), game.get_goal_pos())
        {
            Some(route) => println!("route: {}", render::route(&route)),
            None => log::warn!("goal is unreachable from the start"),
        }
    }

    Ok(())
}

fn main() {
    if let Err(err) = run(Args::parse()) {
        eprintln!("mazegame: {}", err);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazecore::MazeOptions;

    #[test]
    fn points() {
        assert_eq!(parse_point("3,4").unwrap(), Dims(3, 4));
        assert_eq!(parse_point(" -1 , 7 ").unwrap(), Dims(-1, 7));
        assert!(matches!(parse_point("3"), Err(Error::InvalidPoint(_))));
        assert!(matches!(parse_point("a,b"), Err(Error::InvalidPoint(_))));
    }

    #[test]
    fn move_scripts() {
        use Direction::*;
        assert_eq!(parse_moves("nE s\tW").unwrap(), vec![North, East, South, West]);
        assert!(parse_moves("   ").unwrap().is_empty());
        assert!(matches!(parse_moves("nnx"), Err(Error::InvalidMove('x'))));
    }

    #[test]
    fn args_override_settings() {
        let args = Args::parse_from([
            "mazegame", "-W", "9", "--algorithm", "wilson", "--goal", "2,3", "-vv",
        ]);
        assert_eq!(args.verbose, 2);

        let file = Settings::new().set_width(4).set_height(6).set_seed(11);
        let options = file.merge(args.settings()).maze_options().unwrap();
        assert_eq!(options.size(), Dims(9, 6));
        assert_eq!(options.algorithm(), Algorithm::Wilson);
        assert_eq!(options.goal(), Dims(2, 3));
        assert_eq!(options.seed(), Some(11));
    }

    #[test]
    fn bad_arguments_are_rejected() {
        assert!(Args::try_parse_from(["mazegame", "--algorithm", "kruskal"]).is_err());
        assert!(Args::try_parse_from(["mazegame", "--start", "1;2"]).is_err());
    }

    #[test]
    fn solved_route_wins() {
        let options = MazeOptions::new(6, 4).unwrap().with_seed(Some(21));
        let mut game = Game::new(options).unwrap();
        let route = game
            .get_maze()
            .shortest_path(game.get_start_pos(), game.get_goal_pos())
            .unwrap();

        assert!(!play(&mut game, &route[..route.len() - 1]).unwrap());
        assert!(play(&mut game, &route[route.len() - 1..]).unwrap());
    }
}
