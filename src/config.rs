//! Solver and data configuration
//!
//! Plain values constructed once at startup and passed by reference.

use std::path::PathBuf;

/// Tunables for matrix construction and guess selection
#[derive(Debug, Clone, PartialEq)]
pub struct SolverConfig {
    /// Guesses allowed per game
    pub max_guesses: usize,
    /// Words kept in the outcome matrix snapshot (the matrix holds this many squared cells)
    pub max_vocab_size: usize,
    /// Fraction of the entropy range, measured down from the best guess, treated as a tie
    pub top_band: f64,
    /// Break ties with word frequency
    pub use_frequency: bool,
    /// Only solution words are counted as possible answers
    pub restrict_to_solutions: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_guesses: 6,
            max_vocab_size: 6000,
            top_band: 0.1,
            use_frequency: true,
            restrict_to_solutions: true,
        }
    }
}

/// Locations of input files and persisted artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    /// JSON with `solutions` and `other_valid_words`
    pub words: PathBuf,
    /// Word frequencies (`.json` map or `word,count` CSV)
    pub frequencies: PathBuf,
    /// Persisted outcome matrix
    pub cache: PathBuf,
    /// Batch results written by auto-play
    pub results: PathBuf,
}

impl Default for DataPaths {
    fn default() -> Self {
        Self {
            words: PathBuf::from("data/wordle_words.json"),
            frequencies: PathBuf::from("data/unigram_freq.csv"),
            cache: PathBuf::from("data/outcome_matrix.msgpack"),
            results: PathBuf::from("wordle_results.json"),
        }
    }
}
