use mazecore::{Dims, Direction, Game, Maze, Traveler};

const WALL_H: &str = "---";
const OPEN_H: &str = "   ";
const CORNER: char = '+';
const WALL_V: char = '|';

fn mark(game: &Game, player: Option<&Traveler>, pos: Dims) -> char {
    if let Some(player) = player {
        if player.position() == pos {
            return '@';
        }
    }
    if game.get_goal_pos() == pos {
        return 'G';
    }
    if let Some(player) = player {
        if player.path().trail().iter().any(|p| p.point == pos) {
            return '.';
        }
        if player.path().is_backtracked(pos) {
            return 'x';
        }
    }
    if game.get_start_pos() == pos {
        return 'S';
    }
    ' '
}

fn horizontal_line(out: &mut String, maze: &Maze, y: i32, dir: Direction) {
    for x in 0..maze.width() {
        out.push(CORNER);
        out.push_str(if maze.has_wall(Dims(x, y), dir) {
            WALL_H
        } else {
            OPEN_H
        });
    }
    out.push(CORNER);
    out.push('\n');
}

/// Draws the maze as ASCII art, one cell being three characters wide.
///
/// With a `player`, its position (`@`), its trail (`.`) and the cells it
/// backed out of (`x`) are drawn as well.
pub fn render(game: &Game, player: Option<&Traveler>) -> String {
    let maze = game.get_maze();
    let mut out = String::new();

    for y in 0..maze.height() {
        horizontal_line(&mut out, maze, y, Direction::North);

        for x in 0..maze.width() {
            let pos = Dims(x, y);
            out.push(if maze.has_wall(pos, Direction::West) {
                WALL_V
            } else {
                ' '
            });
            out.push(' ');
            out.push(mark(game, player, pos));
            out.push(' ');
        }
        let last = Dims(maze.width() - 1, y);
        out.push(if maze.has_wall(last, Direction::East) {
            WALL_V
        } else {
            ' '
        });
        out.push('\n');
    }
    horizontal_line(&mut out, maze, maze.height() - 1, Direction::South);

    out
}

pub fn route(directions: &[Direction]) -> String {
    directions.iter().map(Direction::to_char).collect()
}
