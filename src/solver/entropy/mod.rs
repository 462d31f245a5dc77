//! Entropy-based guess selection
//!
//! Implements Shannon entropy over outcome-code distributions and the guess
//! selector built on it.

mod calculator;
mod selector;

pub use calculator::{GuessMetrics, calculate_metrics, guess_entropy, outcome_counts, shannon_entropy};
pub use selector::{GuessSelector, Selection};
