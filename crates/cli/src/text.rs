//! Line-mode front end.
//!
//! Every square typed at the prompt is delivered to the game as a click on
//! that cell, so selecting and moving work exactly as with the mouse.

use animal_chess_core::{Dispatch, GameError, Side, Square};
use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::{info, warn};

use crate::game::{self, CliGame};
use crate::parse;

const HELP: &str = "\
Commands:
  <square>       click a cell, e.g. b2 (select your piece, then click the target)
  new, n         start a new game
  board, b       print the board
  history, h     list the moves played so far
  help, ?        show this help
  quit, q        leave";

/// Runs the interactive line-mode loop.
pub fn text_loop(first: Side) -> Result<(), String> {
    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    let mut game = game::new_game(first);
    println!("{HELP}\n");

    loop {
        if game.renderer_mut().take_dirty() {
            game::print_board(&game);
            println!();
        }

        match rl.readline("> ") {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(line);

                match line {
                    "quit" | "q" => break,
                    "new" | "n" => {
                        game = game::new_game(first);
                        info!("new game");
                    }
                    "board" | "b" => {
                        game::print_board(&game);
                        println!();
                    }
                    "history" | "h" => print_history(&game),
                    "help" | "?" => println!("{HELP}"),
                    _ => match line.parse::<Square>() {
                        Ok(sq) => click(&mut game, sq),
                        Err(e) => println!("{e}"),
                    },
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(err.to_string()),
        }
    }

    Ok(())
}

/// Plays a click string on a new game and prints the final position.
pub fn replay(clicks: &str, first: Side) -> Result<(), String> {
    let game = play_clicks(clicks, first)?;
    game::print_board(&game);
    print_history(&game);
    Ok(())
}

/// Applies a click string to a new game and returns the resulting game.
fn play_clicks(clicks: &str, first: Side) -> Result<CliGame, String> {
    let squares = parse::parse_click_string(clicks)?;
    let mut game = game::new_game(first);

    for (i, sq) in squares.into_iter().enumerate() {
        let result = game
            .click(sq)
            .map_err(|e| format!("click #{} ({sq}): {e}", i + 1))?;
        if result == Dispatch::Ignored {
            warn!(click = i + 1, square = %sq, "click ignored after the game ended");
        }
    }

    Ok(game)
}

fn click(game: &mut CliGame, sq: Square) {
    match game.click(sq) {
        Ok(Dispatch::Selected(sq)) => println!("Selected {sq}."),
        Ok(Dispatch::Moved(record)) => {
            let sep = if record.killed.is_some() { 'x' } else { '-' };
            print!("{} {} {}{sep}{}", record.side, record.piece, record.from, record.to);
            match record.killed {
                Some(killed) => println!(" ({killed})"),
                None => println!(),
            }
        }
        Ok(Dispatch::Idle) => println!("Select one of your pieces first."),
        Ok(Dispatch::Ignored) | Err(GameError::GameOver) => {
            println!("The game is over. Type 'new' to play again.")
        }
        Err(err) => println!("{err}"),
    }
}

fn print_history(game: &CliGame) {
    if game.history().is_empty() {
        println!("No moves yet.");
        return;
    }

    for record in game.history() {
        let capture = record
            .killed
            .map(|kind| format!(" captures {kind}"))
            .unwrap_or_default();
        println!(
            "  #{:<2} {} {} {} -> {}{capture}",
            record.turn, record.side, record.piece, record.from, record.to
        );
    }
}
