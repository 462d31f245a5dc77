//! Entropy-based word selection with a frequency tie-break
//!
//! Every unguessed word in the matrix is scored by the entropy of its outcome
//! distribution over the remaining candidates. Words whose entropy lies in the
//! top band of the observed range are treated as equally informative; among
//! those, words that could still be the answer win, then common words.

use super::calculator::guess_entropy;
use crate::core::Word;
use crate::solver::OutcomeMatrix;
use log::debug;
use rayon::prelude::*;
use std::cmp::Ordering;

/// A chosen guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Selection {
    pub word: Word,
    /// Row of the word in the outcome matrix
    pub index: usize,
    /// Entropy in bits, `None` when no scoring was needed
    pub entropy: Option<f64>,
}

/// Picks the next guess from a shared outcome matrix
#[derive(Debug, Clone, Copy)]
pub struct GuessSelector<'m> {
    matrix: &'m OutcomeMatrix,
    top_band: f64,
    use_frequency: bool,
}

#[derive(Debug, Clone, Copy)]
struct Scored {
    index: usize,
    entropy: f64,
    is_candidate: bool,
    frequency: f64,
}

impl<'m> GuessSelector<'m> {
    /// `top_band` is the fraction of the entropy range (0..=1) counted as ties
    #[must_use]
    pub const fn new(matrix: &'m OutcomeMatrix, top_band: f64, use_frequency: bool) -> Self {
        Self {
            matrix,
            top_band,
            use_frequency,
        }
    }

    #[must_use]
    pub const fn matrix(&self) -> &'m OutcomeMatrix {
        self.matrix
    }

    /// Choose the next guess
    ///
    /// On the first turn of a game the matrix's precomputed opening guess is
    /// returned as is, unless a single candidate is already known. Returns
    /// `None` when there are no candidates left.
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::core::Word;
    /// use wordle_autoplay::solver::{GuessSelector, OutcomeMatrix, Snapshot};
    ///
    /// let words: Vec<Word> = ["crane", "trace", "slate"].iter().map(|s| Word::new(s).unwrap()).collect();
    /// let snapshot = Snapshot { words, frequencies: vec![0.5, 0.3, 0.2], is_solution: vec![true; 3] };
    /// let matrix = OutcomeMatrix::build(snapshot).unwrap();
    /// let selector = GuessSelector::new(&matrix, 0.1, true);
    ///
    /// // One candidate left: guess it
    /// assert_eq!(selector.select(&[2], &[0], false).unwrap().word.text(), "slate");
    /// assert!(selector.select(&[], &[0], false).is_none());
    /// ```
    #[must_use]
    pub fn select(&self, candidates: &[usize], guessed: &[usize], first_turn: bool) -> Option<Selection> {
        if candidates.is_empty() {
            return None;
        }

        let opening = self
            .matrix
            .opening_guess()
            .filter(|_| first_turn && candidates.len() > 1)
            .and_then(|word| self.matrix.index_of(&word).map(|index| (word, index)));

        if let Some((word, index)) = opening {
            debug!("using precomputed opening guess {word}");
            return Some(Selection {
                word,
                index,
                entropy: None,
            });
        }

        self.best_guess(candidates, guessed)
    }

    /// Score every unguessed word and pick the best, ignoring any opening guess
    #[must_use]
    pub fn best_guess(&self, candidates: &[usize], guessed: &[usize]) -> Option<Selection> {
        match candidates {
            [] => return None,
            &[only] => {
                return Some(Selection {
                    word: self.matrix.word(only),
                    index: only,
                    entropy: None,
                });
            }
            _ => {}
        }

        let n = self.matrix.len();
        let mut is_candidate = vec![false; n];
        for &c in candidates {
            is_candidate[c] = true;
        }
        let mut is_guessed = vec![false; n];
        for &g in guessed {
            is_guessed[g] = true;
        }

        let scored: Vec<Scored> = (0..n)
            .into_par_iter()
            .filter(|&g| !is_guessed[g])
            .map(|g| Scored {
                index: g,
                entropy: guess_entropy(self.matrix, g, candidates),
                is_candidate: is_candidate[g],
                frequency: self.matrix.frequency(g),
            })
            .collect();

        let max = scored.iter().map(|s| s.entropy).fold(f64::NEG_INFINITY, f64::max);
        let min = scored.iter().map(|s| s.entropy).fold(f64::INFINITY, f64::min);
        let threshold = max - self.top_band.clamp(0.0, 1.0) * (max - min) - 1e-12;

        let best = scored
            .iter()
            .filter(|s| s.entropy >= threshold)
            .max_by(|a, b| self.compare(a, b))?;

        debug!(
            "chose {} ({:.3} bits) from {} guesses over {} candidates, band >= {threshold:.3}",
            self.matrix.word(best.index),
            best.entropy,
            scored.len(),
            candidates.len()
        );

        Some(Selection {
            word: self.matrix.word(best.index),
            index: best.index,
            entropy: Some(best.entropy),
        })
    }

    /// Ordering inside the top band; greater is better
    fn compare(&self, a: &Scored, b: &Scored) -> Ordering {
        let frequency = if self.use_frequency {
            a.frequency.total_cmp(&b.frequency)
        } else {
            Ordering::Equal
        };

        a.is_candidate
            .cmp(&b.is_candidate)
            .then(frequency)
            .then(a.entropy.total_cmp(&b.entropy))
            .then(b.index.cmp(&a.index))
    }
}
