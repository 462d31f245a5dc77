//! Authoritative Wordle game
//!
//! A `Game` holds the hidden solution and is the only thing that turns guesses
//! into hints. It is driven by a human (`play`) or by a solver (`solve`,
//! `auto-play`) through the same `guess` call.

use super::{Hint, WORD_LEN, Word};
use crate::error::{GuessRejection, WordleError};
use crate::wordlists::{FrequencyTable, Vocabulary};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::hash::{Hash, Hasher};
use std::time::{SystemTime, UNIX_EPOCH};

/// Guesses allowed in a standard game
pub const MAX_GUESSES: usize = 6;

/// Days from 1970-01-01 to 2021-06-19, the date of puzzle 0
pub const FIRST_PUZZLE_DAYS_SINCE_EPOCH: u64 = 18_797;

/// Puzzle number published on a given day, `None` before puzzle 0
#[must_use]
pub const fn puzzle_for_days_since_epoch(days: u64) -> Option<usize> {
    if days < FIRST_PUZZLE_DAYS_SINCE_EPOCH {
        None
    } else {
        Some((days - FIRST_PUZZLE_DAYS_SINCE_EPOCH) as usize)
    }
}

/// Puzzle number for today's date (UTC)
#[must_use]
pub fn todays_puzzle() -> Option<usize> {
    let days = SystemTime::now().duration_since(UNIX_EPOCH).ok()?.as_secs() / 86_400;
    puzzle_for_days_since_epoch(days)
}

/// Calendar date (`YYYY-MM-DD`) a puzzle was published
///
/// # Examples
/// ```
/// use wordle_autoplay::core::puzzle_date;
///
/// assert_eq!(puzzle_date(0), "2021-06-19");
/// assert_eq!(puzzle_date(196), "2022-01-01");
/// ```
#[must_use]
pub fn puzzle_date(puzzle: usize) -> String {
    // Civil-from-days over 400-year eras
    let z = FIRST_PUZZLE_DAYS_SINCE_EPOCH as i64 + puzzle as i64 + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + i64::from(month <= 2);
    format!("{year:04}-{month:02}-{day:02}")
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Summary of a finished (or abandoned) game for batch results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub puzzle: Option<usize>,
    pub solution: Word,
    pub won: bool,
    pub guesses: usize,
    pub words: Vec<Word>,
    /// Hints as `G`/`Y`/`B` strings
    pub hints: Vec<String>,
    /// Hints as plot values (1=Black, 2=Yellow, 3=Green)
    pub grid: Vec<[u8; WORD_LEN]>,
}

/// A single game of Wordle
#[derive(Debug, Clone)]
pub struct Game<'v> {
    vocab: &'v Vocabulary,
    solution: Word,
    puzzle: Option<usize>,
    guesses: Vec<Word>,
    hints: Vec<Hint>,
    status: GameStatus,
    max_guesses: usize,
}

impl<'v> Game<'v> {
    /// Start a game with an explicit solution
    ///
    /// # Errors
    ///
    /// Returns `WordleError::UnknownSolution` if the word is not an eligible
    /// solution.
    pub fn new(vocab: &'v Vocabulary, solution: Word) -> Result<Self, WordleError> {
        if !vocab.is_solution(&solution) {
            return Err(WordleError::UnknownSolution(solution));
        }

        Ok(Self {
            vocab,
            solution,
            puzzle: None,
            guesses: Vec::with_capacity(MAX_GUESSES),
            hints: Vec::with_capacity(MAX_GUESSES),
            status: GameStatus::InProgress,
            max_guesses: MAX_GUESSES,
        })
    }

    /// Start the game for puzzle number `index`
    ///
    /// # Errors
    ///
    /// Returns `WordleError::PuzzleOutOfRange` if there is no such puzzle.
    pub fn for_puzzle(vocab: &'v Vocabulary, index: usize) -> Result<Self, WordleError> {
        let solution = vocab.solution(index).ok_or(WordleError::PuzzleOutOfRange {
            index,
            count: vocab.solutions().len(),
        })?;

        let mut game = Self::new(vocab, solution)?;
        game.puzzle = Some(index);
        Ok(game)
    }

    /// Start a game with a solution drawn at random, weighted by frequency
    ///
    /// Solutions without a known frequency are never drawn unless no solution
    /// has one, in which case the draw is uniform.
    ///
    /// # Errors
    ///
    /// Returns `WordleError::NoSolutions` if the vocabulary has no solutions.
    pub fn random<R: Rng + ?Sized>(
        vocab: &'v Vocabulary,
        frequencies: &FrequencyTable,
        rng: &mut R,
    ) -> Result<Self, WordleError> {
        let solutions = vocab.solutions();
        let weights = frequencies.normalized(solutions);
        let indices: Vec<usize> = (0..solutions.len()).collect();

        let index = match indices.choose_weighted(rng, |&i| weights[i]) {
            Ok(&index) => index,
            Err(_) => *indices.choose(rng).ok_or(WordleError::NoSolutions)?,
        };

        Self::new(vocab, solutions[index])
    }

    /// Change the guess limit (default 6)
    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: usize) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Play a word and get its hint
    ///
    /// The input is trimmed and lowercased. A rejected guess changes nothing.
    ///
    /// # Errors
    ///
    /// Returns `WordleError::InvalidGuess` if the game is over, the word is
    /// malformed, not in the vocabulary, or was already guessed.
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::core::{Game, GameStatus, Word};
    /// use wordle_autoplay::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_strs(&["trace"], &["crane"]).unwrap();
    /// let mut game = Game::new(&vocab, Word::new("trace").unwrap()).unwrap();
    ///
    /// assert_eq!(game.guess("CRANE").unwrap().to_string(), "YGGBG");
    /// assert!(game.guess("zzzzz").is_err());
    /// assert!(game.guess("trace").unwrap().is_solved());
    /// assert_eq!(game.status(), GameStatus::Won);
    /// ```
    pub fn guess(&mut self, input: &str) -> Result<Hint, WordleError> {
        let text = input.trim().to_ascii_lowercase();
        let reject = |reason| WordleError::InvalidGuess {
            word: text.clone(),
            reason,
        };

        if self.status.is_finished() {
            return Err(reject(GuessRejection::GameOver));
        }
        if text.chars().count() != WORD_LEN {
            return Err(reject(GuessRejection::WrongLength(text.chars().count())));
        }
        let word = Word::new(&text).map_err(|_| reject(GuessRejection::InvalidCharacters))?;
        if !self.vocab.contains(&word) {
            return Err(reject(GuessRejection::NotInVocabulary));
        }
        if self.guesses.contains(&word) {
            return Err(reject(GuessRejection::AlreadyGuessed));
        }

        let hint = Hint::calculate(&word, &self.solution);
        self.guesses.push(word);
        self.hints.push(hint);

        if hint.is_solved() {
            self.status = GameStatus::Won;
        } else if self.guesses.len() >= self.max_guesses {
            self.status = GameStatus::Lost;
        }

        Ok(hint)
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    /// The hidden solution
    #[must_use]
    pub const fn solution(&self) -> Word {
        self.solution
    }

    #[must_use]
    pub const fn puzzle(&self) -> Option<usize> {
        self.puzzle
    }

    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn hints(&self) -> &[Hint] {
        &self.hints
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses.saturating_sub(self.guesses.len())
    }

    /// Shareable emoji grid, e.g. `Wordle 42 3/6` followed by one row per guess
    ///
    /// Games without a puzzle number are labelled with a short digest of the
    /// solution so the answer is not revealed.
    #[must_use]
    pub fn share_grid(&self) -> String {
        let label = self.puzzle.map_or_else(
            || {
                let mut hasher = FxHasher::default();
                self.solution.hash(&mut hasher);
                format!("({:010x})", hasher.finish() & 0xff_ffff_ffff)
            },
            |n| n.to_string(),
        );
        let score = if self.is_won() {
            self.guesses.len().to_string()
        } else {
            "X".to_string()
        };

        let mut grid = format!("Wordle {label} {score}/{}\n", self.max_guesses);
        for hint in &self.hints {
            let _ = write!(grid, "\n{}", hint.to_emoji());
        }
        grid
    }

    /// Snapshot of the game for batch results
    #[must_use]
    pub fn record(&self) -> GameRecord {
        GameRecord {
            puzzle: self.puzzle,
            solution: self.solution,
            won: self.is_won(),
            guesses: self.guesses.len(),
            words: self.guesses.clone(),
            hints: self.hints.iter().map(ToString::to_string).collect(),
            grid: self.hints.iter().map(|h| h.plot_values()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn vocab() -> Vocabulary {
        Vocabulary::from_strs(
            &["trace", "crane", "slate", "abide"],
            &["irate", "crate", "grate", "plate", "skate", "state", "speed"],
        )
        .unwrap()
    }

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn correct_first_guess_wins() {
        let vocab = vocab();
        let mut game = Game::new(&vocab, w("trace")).unwrap();

        let hint = game.guess("trace").unwrap();
        assert!(hint.is_solved());
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.record().guesses, 1);
    }

    #[test]
    fn sixth_miss_loses_and_blocks_further_guesses() {
        let vocab = vocab();
        let mut game = Game::new(&vocab, w("slate")).unwrap();

        for word in ["irate", "crate", "grate", "plate", "skate"] {
            game.guess(word).unwrap();
            assert_eq!(game.status(), GameStatus::InProgress);
        }
        game.guess("state").unwrap();
        assert_eq!(game.status(), GameStatus::Lost);

        let err = game.guess("slate").unwrap_err();
        assert!(matches!(
            err,
            WordleError::InvalidGuess {
                reason: GuessRejection::GameOver,
                ..
            }
        ));
        assert_eq!(game.guesses().len(), 6);
    }

    #[test]
    fn rejected_guesses_leave_state_unchanged() {
        let vocab = vocab();
        let mut game = Game::new(&vocab, w("trace")).unwrap();
        game.guess("crane").unwrap();

        let cases = [
            ("cran", GuessRejection::WrongLength(4)),
            ("cr4ne", GuessRejection::InvalidCharacters),
            ("zzzzz", GuessRejection::NotInVocabulary),
            ("CRANE", GuessRejection::AlreadyGuessed),
        ];
        for (input, expected) in cases {
            let err = game.guess(input).unwrap_err();
            assert!(err.is_validation());
            assert!(matches!(err, WordleError::InvalidGuess { reason, .. } if reason == expected));
        }

        assert_eq!(game.guesses(), &[w("crane")]);
        assert_eq!(game.hints().len(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn solution_must_be_eligible() {
        let vocab = vocab();
        assert!(matches!(
            Game::new(&vocab, w("irate")),
            Err(WordleError::UnknownSolution(_))
        ));
    }

    #[test]
    fn puzzle_numbers_select_solutions() {
        let vocab = vocab();
        let game = Game::for_puzzle(&vocab, 1).unwrap();
        assert_eq!(game.solution(), w("crane"));
        assert_eq!(game.puzzle(), Some(1));

        assert!(matches!(
            Game::for_puzzle(&vocab, 4),
            Err(WordleError::PuzzleOutOfRange { index: 4, count: 4 })
        ));
    }

    #[test]
    fn random_draws_only_weighted_solutions() {
        let vocab = vocab();
        let frequencies: FrequencyTable = [(w("crane"), 10.0), (w("irate"), 1000.0)].into_iter().collect();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..20 {
            let game = Game::random(&vocab, &frequencies, &mut rng).unwrap();
            assert_eq!(game.solution(), w("crane"));
        }
    }

    #[test]
    fn random_falls_back_to_uniform_and_fails_without_solutions() {
        let vocab = vocab();
        let mut rng = StdRng::seed_from_u64(1);
        let game = Game::random(&vocab, &FrequencyTable::new(), &mut rng).unwrap();
        assert!(vocab.is_solution(&game.solution()));

        let empty = Vocabulary::from_strs(&[], &["crane"]).unwrap();
        assert!(matches!(
            Game::random(&empty, &FrequencyTable::new(), &mut rng),
            Err(WordleError::NoSolutions)
        ));
    }

    #[test]
    fn share_grid_format() {
        let vocab = vocab();
        let mut game = Game::for_puzzle(&vocab, 0).unwrap();
        game.guess("crane").unwrap();
        game.guess("trace").unwrap();

        assert_eq!(game.share_grid(), "Wordle 0 2/6\n\n🟨🟩🟩⬛🟩\n🟩🟩🟩🟩🟩");

        let mut unnumbered = Game::new(&vocab, w("slate")).unwrap().with_max_guesses(1);
        unnumbered.guess("crane").unwrap();
        let grid = unnumbered.share_grid();
        assert!(grid.starts_with("Wordle ("));
        assert!(grid.contains(" X/1\n"));
        assert!(!grid.contains("slate"));
    }

    #[test]
    fn record_carries_plot_values() {
        let vocab = vocab();
        let mut game = Game::new(&vocab, w("abide")).unwrap();
        game.guess("speed").unwrap();

        let record = game.record();
        assert!(!record.won);
        assert_eq!(record.hints, ["BBYBY"]);
        assert_eq!(record.grid, [[1, 1, 2, 1, 2]]);
    }

    #[test]
    fn puzzle_dates() {
        assert_eq!(puzzle_for_days_since_epoch(18_796), None);
        assert_eq!(puzzle_for_days_since_epoch(18_797), Some(0));
        assert_eq!(puzzle_for_days_since_epoch(19_000), Some(203));
        assert_eq!(puzzle_date(0), "2021-06-19");
        assert_eq!(puzzle_date(254), "2022-02-28");
        assert_eq!(puzzle_date(255), "2022-03-01");
        assert!(todays_puzzle().is_some());
    }
}
