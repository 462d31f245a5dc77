//! Word lists and frequencies
//!
//! The vocabulary and frequency table are immutable values loaded once at
//! startup and shared by reference with games and solvers.

mod frequency;
pub mod loader;
mod vocabulary;

pub use frequency::FrequencyTable;
pub use vocabulary::Vocabulary;
