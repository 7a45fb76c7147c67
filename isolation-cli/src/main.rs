//! Two Kings console front end
//!
//! Drives an isolation-core game over stdin/stdout: renders the board,
//! prompts the current player for a "row col" destination, and replays the
//! prompt on bad input or an illegal move.
//!
//! Usage:
//!   isolation              # standard 8x6 board
//!   isolation 10x8         # custom WIDTHxHEIGHT board

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use isolation_core::{Game, GameConfig, Pos};

/// Parse a "WIDTHxHEIGHT" argument.
fn parse_size(arg: &str) -> Option<(u8, u8)> {
    let (width, height) = arg.split_once('x')?;
    Some((width.trim().parse().ok()?, height.trim().parse().ok()?))
}

/// Parse a "row col" line into a position.
fn parse_move(line: &str) -> Option<Pos> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Pos::new(row, col))
}

fn prompt(game: &Game) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(
        stdout,
        "{} to move (from {}), enter row col: ",
        game.current_player(),
        game.current_player_position()
    )?;
    stdout.flush()
}

fn play(mut game: Game) -> io::Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Two Kings");
    println!("=========");

    loop {
        println!();
        print!("{game}");

        if game.is_terminal() {
            // The player unable to move loses.
            let loser = game.current_player();
            let winner = loser.opponent();
            println!();
            println!("Game over: {loser} cannot move.");
            println!("Winner: {winner}");
            println!("Winner's position: {}", game.position_of(winner));
            return Ok(());
        }

        prompt(&game)?;
        let Some(line) = lines.next() else {
            println!();
            println!("Input closed, game abandoned.");
            return Ok(());
        };
        let line = line?;

        let Some(to) = parse_move(&line) else {
            println!("Enter exactly two numbers, e.g. \"2 1\".");
            continue;
        };
        if !game.make_move(to) {
            println!("Illegal move to {to}, try again.");
        }
    }
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let config = match args.get(1) {
        None => GameConfig::default(),
        Some(arg) => match parse_size(arg) {
            Some((width, height)) => GameConfig::sized(width, height),
            None => {
                eprintln!("usage: isolation [WIDTHxHEIGHT]");
                return ExitCode::from(2);
            }
        },
    };

    let game = match Game::new(config) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
    };

    match play(game) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("8x6"), Some((8, 6)));
        assert_eq!(parse_size("10x8"), Some((10, 8)));
        assert_eq!(parse_size("8"), None);
        assert_eq!(parse_size("x6"), None);
        assert_eq!(parse_size("8x"), None);
        assert_eq!(parse_size("axb"), None);
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("2 1"), Some(Pos::new(2, 1)));
        assert_eq!(parse_move("  0   7 "), Some(Pos::new(0, 7)));
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("2"), None);
        assert_eq!(parse_move("2 1 0"), None);
        assert_eq!(parse_move("a b"), None);
        assert_eq!(parse_move("-1 0"), None);
    }
}
