//! Human play in the terminal
//!
//! Shows the board and keyboard after every guess, re-prompts on invalid
//! words, and ends with the share grid.

use super::prompt;
use crate::core::{Game, GameStatus, puzzle_date};
use crate::output::formatters::{Keyboard, empty_row, hint_row};
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

fn write_board<W: Write>(game: &Game<'_>, out: &mut W) -> std::io::Result<()> {
    writeln!(out)?;
    for (word, hint) in game.guesses().iter().zip(game.hints()) {
        writeln!(out, "      {}", hint_row(word, hint))?;
    }
    for _ in game.guesses().len()..game.max_guesses() {
        writeln!(out, "      {}", empty_row())?;
    }
    writeln!(out)?;

    let keyboard = Keyboard::from_history(game.guesses().iter().zip(game.hints()));
    writeln!(out, "{}\n", keyboard.render())
}

/// Play `game` interactively until it ends or input runs out
///
/// Returns the final status; `InProgress` means the player quit early.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn play_game<R: BufRead, W: Write>(game: &mut Game<'_>, input: &mut R, out: &mut W) -> Result<GameStatus> {
    if let Some(puzzle) = game.puzzle() {
        writeln!(out, "\nPlaying Wordle {puzzle} - {}", puzzle_date(puzzle))?;
    }
    write_board(game, out)?;

    while !game.is_finished() {
        let turn = game.guesses().len() + 1;
        let text = format!("Guess {turn} ({} left)", game.remaining_guesses());
        let Some(line) = prompt(input, out, &text)? else {
            writeln!(out)?;
            return Ok(game.status());
        };

        match game.guess(&line) {
            Ok(_) => write_board(game, out)?,
            Err(err) if err.is_validation() => writeln!(out, "{}", err.to_string().red())?,
            Err(err) => return Err(err.into()),
        }
    }

    writeln!(out, "\n{}\n", game.share_grid())?;
    if game.is_won() {
        writeln!(out, "{}", "Congratulations! You won!".green().bold())?;
    } else {
        writeln!(
            out,
            "The word was {}",
            game.solution().to_uppercase().bright_yellow().bold()
        )?;
    }

    Ok(game.status())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::Vocabulary;
    use std::io::Cursor;

    fn vocab() -> Vocabulary {
        Vocabulary::from_strs(&["trace", "crane"], &["slate", "irate"]).unwrap()
    }

    #[test]
    fn plays_to_a_win_skipping_bad_input() {
        let vocab = vocab();
        let mut game = Game::for_puzzle(&vocab, 0).unwrap();
        let mut input = Cursor::new("crane\nzzzzz\nabc\ntrace\n");
        let mut out = Vec::new();

        let status = play_game(&mut game, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(status, GameStatus::Won);
        assert_eq!(game.guesses().len(), 2);
        assert!(text.contains("not in the word list"));
        assert!(text.contains("exactly 5 letters"));
        assert!(text.contains("Wordle 0 2/6"));
        assert!(text.contains("2021-06-19"));
    }

    #[test]
    fn reveals_word_on_loss() {
        let vocab = vocab();
        let mut game = Game::new(&vocab, Word::new("trace").unwrap())
            .unwrap()
            .with_max_guesses(2);
        let mut input = Cursor::new("slate\nirate\n");
        let mut out = Vec::new();

        let status = play_game(&mut game, &mut input, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(status, GameStatus::Lost);
        assert!(text.contains("TRACE"));
        assert!(text.contains("Guess 1 (2 left)"));
        assert!(text.contains("Guess 2 (1 left)"));
        assert_eq!(game.remaining_guesses(), 0);
    }

    #[test]
    fn end_of_input_abandons_game() {
        let vocab = vocab();
        let mut game = Game::for_puzzle(&vocab, 1).unwrap();
        let mut input = Cursor::new("slate\n");
        let mut out = Vec::new();

        let status = play_game(&mut game, &mut input, &mut out).unwrap();
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(game.guesses().len(), 1);
    }
}
