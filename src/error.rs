//! Error taxonomy
//!
//! Validation errors reject a single operation and leave state untouched.
//! `ExhaustedCandidates` ends the game it occurs in. Cache errors are fatal
//! for whatever needed the outcome matrix.

use crate::core::{Word, WordError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why a guess was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error("guess must be exactly 5 letters, got {0}")]
    WrongLength(usize),
    #[error("guess must contain only letters")]
    InvalidCharacters,
    #[error("not in the word list")]
    NotInVocabulary,
    #[error("already guessed this game")]
    AlreadyGuessed,
    #[error("the game is already over")]
    GameOver,
}

/// Errors raised by games and solvers
#[derive(Debug, Error)]
pub enum WordleError {
    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error("invalid guess '{word}': {reason}")]
    InvalidGuess {
        word: String,
        reason: GuessRejection,
    },

    #[error("invalid hint '{0}': expected 5 symbols from G, Y, B")]
    InvalidHint(String),

    #[error("puzzle {index} is out of range ({count} solutions available)")]
    PuzzleOutOfRange { index: usize, count: usize },

    #[error("'{0}' is not an eligible solution")]
    UnknownSolution(Word),

    #[error("the word list has no solutions to choose from")]
    NoSolutions,

    #[error("no candidate words remain consistent with the hints")]
    ExhaustedCandidates,

    #[error(transparent)]
    Cache(#[from] CacheError),
}

impl WordleError {
    /// True for errors caused by malformed caller input
    ///
    /// These never change game or solver state, so the caller may retry with
    /// corrected input.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidWord(_)
                | Self::InvalidGuess { .. }
                | Self::InvalidHint(_)
                | Self::PuzzleOutOfRange { .. }
                | Self::UnknownSolution(_)
        )
    }
}

/// Errors raised while loading inputs or building the outcome matrix
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in {origin}: {source}")]
    Json {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed row {line} in {origin}")]
    MalformedRow { origin: String, line: usize },

    #[error("invalid word '{word}' in {origin}: {source}")]
    InvalidWord {
        word: String,
        origin: String,
        #[source]
        source: WordError,
    },

    #[error("failed to decode outcome matrix from {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rmp_serde::decode::Error,
    },

    #[error("failed to encode outcome matrix: {0}")]
    Encode(#[from] rmp_serde::encode::Error),

    #[error("cannot build an outcome matrix from an empty vocabulary")]
    EmptyVocabulary,

    #[error("outcome matrix is inconsistent: {0}")]
    Corrupt(String),
}
