//! Help-me-play mode
//!
//! The solver suggests a guess, the user reports the word they actually
//! played and the hint the real game showed, and the solver narrows its
//! candidates from there.

use super::prompt;
use crate::config::SolverConfig;
use crate::core::{Hint, Word};
use crate::error::WordleError;
use crate::output::formatters::{entropy_bar, hint_row};
use crate::solver::{OutcomeMatrix, Selection, Solver};
use crate::wordlists::Vocabulary;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

const SHOW_CANDIDATES: usize = 10;

fn letters(list: &[u8]) -> String {
    list.iter().map(|&c| char::from(c.to_ascii_uppercase())).collect()
}

fn write_suggestion<W: Write>(solver: &Solver<'_>, selection: &Selection, turn: usize, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(out, "Turn {turn}: {} candidates remaining", solver.candidate_count())?;
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "\nSuggested guess: {}",
        selection.word.to_uppercase().bright_yellow().bold()
    )?;

    if let Some(metrics) = solver.metrics(&selection.word).filter(|_| solver.candidate_count() > 1) {
        writeln!(
            out,
            "   Entropy:         [{}] {:.3} bits",
            entropy_bar(metrics.entropy, 20).green(),
            metrics.entropy
        )?;
        writeln!(out, "   Expected remain: {:.1} candidates", metrics.expected_remaining)?;
        writeln!(out, "   Worst case:      {} candidates", metrics.max_partition)?;
    }

    let constraints = solver.constraints();
    let present = constraints.known_present();
    if !present.is_empty() {
        writeln!(out, "   Letters in:      {}", letters(&present).green())?;
    }
    let absent = constraints.known_absent();
    if !absent.is_empty() {
        writeln!(out, "   Letters out:     {}", letters(&absent).dimmed())?;
    }

    if solver.candidate_count() <= SHOW_CANDIDATES {
        let list: Vec<String> = solver.candidates().iter().map(Word::to_uppercase).collect();
        writeln!(out, "   Candidates:      {}", list.join(", "))?;
    }
    writeln!(out)
}

/// Ask for the word that was played, defaulting to the suggestion
fn read_played<R: BufRead, W: Write>(
    vocab: &Vocabulary,
    suggestion: Word,
    input: &mut R,
    out: &mut W,
) -> Result<Option<Word>> {
    loop {
        let text = format!("Word played [{}]", suggestion.to_uppercase());
        let Some(line) = prompt(input, out, &text)? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(suggestion));
        }

        match Word::new(&line) {
            Ok(word) if vocab.contains(&word) => return Ok(Some(word)),
            Ok(_) => writeln!(out, "{}", format!("'{line}' is not in the word list").red())?,
            Err(err) => writeln!(out, "{}", err.to_string().red())?,
        }
    }
}

/// Ask for the G/Y/B hint the game showed
fn read_hint<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Hint>> {
    loop {
        let Some(line) = prompt(input, out, "Hint (G/Y/B)")? else {
            return Ok(None);
        };
        match line.parse::<Hint>() {
            Ok(hint) => return Ok(Some(hint)),
            Err(err) => writeln!(out, "{}", err.to_string().red())?,
        }
    }
}

/// Run the help-me-play loop
///
/// Returns the number of guesses taken when the user reports a solved hint,
/// or `None` if the guesses ran out, the hints contradict every word, or
/// input ended.
///
/// # Errors
///
/// Returns an error only if reading input or writing output fails.
pub fn run_assist<R: BufRead, W: Write>(
    vocab: &Vocabulary,
    matrix: &OutcomeMatrix,
    config: &SolverConfig,
    input: &mut R,
    out: &mut W,
) -> Result<Option<usize>> {
    writeln!(out, "I'll suggest guesses; tell me what you played and the hint you got.")?;
    writeln!(out, "Hints are five letters: G (green), Y (yellow), B (black).\n")?;

    let mut solver = Solver::new(matrix, config);

    for turn in 1..=config.max_guesses {
        let selection = match solver.next_guess() {
            Ok(selection) => selection,
            Err(WordleError::ExhaustedCandidates) => {
                writeln!(
                    out,
                    "{}",
                    "No words match these hints; check the hints you entered.".red()
                )?;
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        write_suggestion(&solver, &selection, turn, out)?;

        let Some(word) = read_played(vocab, selection.word, input, out)? else {
            return Ok(None);
        };
        let Some(hint) = read_hint(input, out)? else {
            return Ok(None);
        };

        solver.observe(word, hint);
        writeln!(out, "      {}\n", hint_row(&word, &hint))?;

        if hint.is_solved() {
            writeln!(
                out,
                "{}",
                format!("Solved in {turn} {}!", if turn == 1 { "guess" } else { "guesses" })
                    .green()
                    .bold()
            )?;
            return Ok(Some(turn));
        }
    }

    writeln!(out, "{}", "Out of guesses.".red())?;
    Ok(None)
}
