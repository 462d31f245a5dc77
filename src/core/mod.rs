//! Core domain types for Wordle
//!
//! Words and hints are pure value types with no knowledge of word lists or
//! solvers. The `Game` state machine sits on top of them and a vocabulary.

mod game;
mod hint;
mod word;

pub use game::{
    FIRST_PUZZLE_DAYS_SINCE_EPOCH, Game, GameRecord, GameStatus, MAX_GUESSES, puzzle_date,
    puzzle_for_days_since_epoch, todays_puzzle,
};
pub use hint::{Hint, Mark, OUTCOME_COUNT};
pub use word::{ALPHABET_LEN, WORD_LEN, Word, WordError};

pub(crate) use word::letter_index;
