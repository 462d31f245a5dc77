//! Wordle solving machinery
//!
//! Bottom up: constraint tracking, the outcome matrix and its persisted
//! cache, entropy-based guess selection, and the per-game `Solver` tying
//! them together.

pub mod cache;
mod constraints;
mod engine;
pub mod entropy;
mod matrix;

pub use constraints::ConstraintTracker;
pub use engine::Solver;
pub use entropy::{GuessMetrics, GuessSelector, Selection};
pub use matrix::{OutcomeMatrix, Snapshot, fingerprint};
