//! Wordle Autoplay
//!
//! A Wordle simulator and solver. Guesses are chosen by maximizing the
//! entropy of the hint distribution over a precomputed outcome matrix, with
//! word frequency breaking near-ties.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_autoplay::config::SolverConfig;
//! use wordle_autoplay::core::{Game, Word};
//! use wordle_autoplay::solver::{OutcomeMatrix, Solver};
//! use wordle_autoplay::wordlists::{FrequencyTable, Vocabulary};
//!
//! let vocab = Vocabulary::from_strs(&["crane", "trace", "slate"], &["irate"]).unwrap();
//! let matrix = OutcomeMatrix::from_vocabulary(&vocab, &FrequencyTable::new(), 6000).unwrap();
//!
//! let mut game = Game::new(&vocab, Word::new("trace").unwrap()).unwrap();
//! let mut solver = Solver::new(&matrix, &SolverConfig::default());
//!
//! while !game.is_finished() {
//!     let guess = solver.next_guess().unwrap().word;
//!     let hint = game.guess(guess.text()).unwrap();
//!     solver.observe(guess, hint);
//! }
//! assert!(game.is_won());
//! ```

// Core domain types
pub mod core;

// Errors and configuration
pub mod config;
pub mod error;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{CacheError, GuessRejection, WordleError};
