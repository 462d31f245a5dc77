//! Automatic solving of a single game
//!
//! The solver plays a `Game` to completion and the path it took is returned
//! for display or aggregation.

use crate::config::SolverConfig;
use crate::core::{Game, GameRecord, Hint, Word};
use crate::error::WordleError;
use crate::solver::{OutcomeMatrix, Solver};

/// Result of solving a game
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub record: GameRecord,
    pub steps: Vec<GuessStep>,
}

impl SolveResult {
    #[must_use]
    pub const fn success(&self) -> bool {
        self.record.won
    }
}

/// A single guess step in the solution
#[derive(Debug, Clone, PartialEq)]
pub struct GuessStep {
    pub word: Word,
    pub hint: Hint,
    pub candidates_before: usize,
    pub candidates_after: usize,
    pub entropy: Option<f64>,
    pub expected_remaining: Option<f64>,
}

/// Let the solver play `game` until it is won or lost
///
/// # Errors
///
/// Returns `WordleError::ExhaustedCandidates` if no word fits the hints,
/// which leaves `game` unfinished. Any rejected guess is also returned; that
/// only happens when the matrix was built from a different vocabulary.
///
/// # Examples
/// ```
/// use wordle_autoplay::commands::solve_game;
/// use wordle_autoplay::config::SolverConfig;
/// use wordle_autoplay::core::{Game, Word};
/// use wordle_autoplay::solver::OutcomeMatrix;
/// use wordle_autoplay::wordlists::{FrequencyTable, Vocabulary};
///
/// let vocab = Vocabulary::from_strs(&["crane", "trace", "slate"], &[]).unwrap();
/// let matrix = OutcomeMatrix::from_vocabulary(&vocab, &FrequencyTable::new(), 100).unwrap();
/// let mut game = Game::new(&vocab, Word::new("slate").unwrap()).unwrap();
///
/// let result = solve_game(&mut game, &matrix, &SolverConfig::default()).unwrap();
/// assert!(result.success());
/// ```
pub fn solve_game(
    game: &mut Game<'_>,
    matrix: &OutcomeMatrix,
    config: &SolverConfig,
) -> Result<SolveResult, WordleError> {
    let mut solver = Solver::new(matrix, config);
    let mut steps = Vec::with_capacity(game.max_guesses());

    while !game.is_finished() {
        let candidates_before = solver.candidate_count();
        let selection = solver.next_guess()?;

        let (entropy, expected_remaining) = if candidates_before > 1 {
            solver
                .metrics(&selection.word)
                .map_or((selection.entropy, None), |m| {
                    (Some(m.entropy), Some(m.expected_remaining))
                })
        } else {
            (None, None)
        };

        let hint = game.guess(selection.word.text())?;
        solver.observe(selection.word, hint);

        steps.push(GuessStep {
            word: selection.word,
            hint,
            candidates_before,
            candidates_after: solver.candidate_count(),
            entropy,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        record: game.record(),
        steps,
    })
}
