pub mod board;
pub mod card;
pub mod display;
pub mod engine;
pub mod history;
pub mod rules;

use std::env;
use std::io::{self, BufRead, Write};

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::engine::Game;

/// A parsed console command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Move { source: usize, dest: usize, count: usize },
    Undo,
    Redo,
    New,
    Quit,
}

/// Parse one input line into a command.
///
/// Moves are written as `move <source> <dest> <count>` or simply
/// `<source> <dest> <count>`; slot indices outside 0..=17 are accepted
/// here so the validator can explain the rejection itself.
fn parse_command(line: &str) -> Option<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        ["undo"] => Some(Command::Undo),
        ["redo"] => Some(Command::Redo),
        ["new"] => Some(Command::New),
        ["quit"] | ["exit"] => Some(Command::Quit),
        ["move", source, dest, count] | [source, dest, count] => {
            let source = source.parse::<usize>().ok()?;
            let dest = dest.parse::<usize>().ok()?;
            let count = count.parse::<usize>().ok()?;
            Some(Command::Move { source, dest, count })
        }
        _ => None,
    }
}

/// Entry point for the `seahaven` binary.
///
/// Currently this:
///   - Parses a very small command-line surface:
///       * `--seed=<u64>` → deal a specific reproducible game
///   - Deals a game and runs an interactive console loop reading
///     move/undo/redo/new commands from stdin.
///
/// Example:
///   cargo run -- --seed=12345
pub fn run() {
    println!("seahaven: Seahaven Towers");
    println!();

    // Default: a fresh random deal.
    let mut seed: Option<u64> = None;

    // Very small hand-rolled argument parser.
    for arg in env::args().skip(1) {
        if let Some(rest) = arg.strip_prefix("--seed=") {
            match rest.parse::<u64>() {
                Ok(v) => seed = Some(v),
                Err(_) => eprintln!(
                    "Warning: could not parse seed from '{rest}'; dealing randomly"
                ),
            }
        } else {
            eprintln!("Warning: unrecognized argument '{arg}'; supported: --seed=<u64>");
        }
    }

    let mut game = match seed {
        Some(s) => Game::with_rng(&mut StdRng::seed_from_u64(s)),
        None => Game::new(),
    };

    println!("Moves: 'move <source> <dest> <count>' or just '<source> <dest> <count>'.");
    println!("Other commands: undo, redo, new, quit.");
    println!();

    let stdin = io::stdin();
    loop {
        display::print_board(game.board());
        if game.is_won() {
            println!("All four foundations are complete - you won!");
        }

        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break, // EOF
            Ok(_) => {}
            Err(err) => {
                eprintln!("error reading input: {err}");
                break;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Some(Command::Move { source, dest, count }) => {
                if let Err(reason) = game.try_move(source, dest, count) {
                    println!("Invalid move: {reason}");
                }
            }
            Some(Command::Undo) => {
                if game.has_undo() {
                    game.undo();
                } else {
                    println!("Nothing to undo.");
                }
            }
            Some(Command::Redo) => {
                if game.has_redo() {
                    game.redo();
                } else {
                    println!("Nothing to redo.");
                }
            }
            Some(Command::New) => match seed {
                // A seeded session re-deals the same game for practice.
                Some(s) => game.new_game_with_rng(&mut StdRng::seed_from_u64(s)),
                None => game.new_game(),
            },
            Some(Command::Quit) => break,
            None => println!("Could not parse '{line}'; try 'move 0 11 1', undo, redo, new, quit."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_move_forms() {
        assert_eq!(
            parse_command("move 0 11 1"),
            Some(Command::Move {
                source: 0,
                dest: 11,
                count: 1
            })
        );
        assert_eq!(
            parse_command("4 5 3"),
            Some(Command::Move {
                source: 4,
                dest: 5,
                count: 3
            })
        );
        // Out-of-range slots parse fine; the validator rejects them.
        assert_eq!(
            parse_command("42 99 1"),
            Some(Command::Move {
                source: 42,
                dest: 99,
                count: 1
            })
        );
    }

    #[test]
    fn parses_simple_commands() {
        assert_eq!(parse_command("undo"), Some(Command::Undo));
        assert_eq!(parse_command("redo"), Some(Command::Redo));
        assert_eq!(parse_command("new"), Some(Command::New));
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_command("mv 1 2"), None);
        assert_eq!(parse_command("move one two three"), None);
        assert_eq!(parse_command("0 11"), None);
        assert_eq!(parse_command(""), None);
    }
}
