//! Per-game solver state
//!
//! A `Solver` pairs a constraint tracker and a guess selector over a shared,
//! read-only outcome matrix. Each game owns its own solver; many solvers may
//! borrow the same matrix concurrently.

use super::constraints::ConstraintTracker;
use super::entropy::{GuessMetrics, GuessSelector, Selection, calculate_metrics};
use super::matrix::OutcomeMatrix;
use crate::config::SolverConfig;
use crate::core::{Hint, Word};
use crate::error::WordleError;
use log::debug;

/// Main Wordle solver
///
/// Call [`Solver::next_guess`], play the word, then feed the resulting hint
/// back with [`Solver::observe`].
#[derive(Debug, Clone)]
pub struct Solver<'m> {
    selector: GuessSelector<'m>,
    tracker: ConstraintTracker,
    candidates: Vec<usize>,
    guessed: Vec<usize>,
    history: Vec<(Word, Hint)>,
}

impl<'m> Solver<'m> {
    /// Start a fresh game against `matrix`
    ///
    /// Candidates are the matrix's solution words, or every matrix word when
    /// `restrict_to_solutions` is off.
    #[must_use]
    pub fn new(matrix: &'m OutcomeMatrix, config: &SolverConfig) -> Self {
        let candidates = if config.restrict_to_solutions {
            matrix.solution_indices()
        } else {
            (0..matrix.len()).collect()
        };

        Self {
            selector: GuessSelector::new(matrix, config.top_band, config.use_frequency),
            tracker: ConstraintTracker::new(),
            candidates,
            guessed: Vec::new(),
            history: Vec::new(),
        }
    }

    /// Best next guess given everything observed so far
    ///
    /// # Errors
    ///
    /// Returns `WordleError::ExhaustedCandidates` when no word is consistent
    /// with the hints. The game cannot continue after that.
    pub fn next_guess(&self) -> Result<Selection, WordleError> {
        self.selector
            .select(&self.candidates, &self.guessed, self.history.is_empty())
            .ok_or(WordleError::ExhaustedCandidates)
    }

    /// Fold the hint for a played word into the solver state
    ///
    /// The word need not be the suggested one, or even part of the matrix.
    pub fn observe(&mut self, word: Word, hint: Hint) {
        let matrix = self.selector.matrix();
        self.tracker.apply(&word, &hint);

        let before = self.candidates.len();
        match matrix.index_of(&word) {
            Some(guess) => {
                // Matrix lookup is equivalent to the tracker and much cheaper
                let code = hint.code();
                self.candidates.retain(|&c| matrix.code(guess, c) == code);
                if !self.guessed.contains(&guess) {
                    self.guessed.push(guess);
                }
            }
            None => {
                let tracker = &self.tracker;
                self.candidates.retain(|&c| tracker.matches(&matrix.word(c)));
            }
        }

        debug!(
            "{word} {hint}: {} -> {} candidates",
            before,
            self.candidates.len()
        );
        self.history.push((word, hint));
    }

    /// Words still consistent with every observed hint
    #[must_use]
    pub fn candidates(&self) -> Vec<Word> {
        let matrix = self.selector.matrix();
        self.candidates.iter().map(|&c| matrix.word(c)).collect()
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Entropy, expected remaining and worst case for playing `word` now
    #[must_use]
    pub fn metrics(&self, word: &Word) -> Option<GuessMetrics> {
        let matrix = self.selector.matrix();
        matrix
            .index_of(word)
            .map(|guess| calculate_metrics(matrix, guess, &self.candidates))
    }

    #[must_use]
    pub fn history(&self) -> &[(Word, Hint)] {
        &self.history
    }

    /// Letter knowledge gathered from every observed hint
    #[must_use]
    pub const fn constraints(&self) -> &ConstraintTracker {
        &self.tracker
    }
}
