//! Relative word frequencies
//!
//! Weights are only used for ranking and sampling, never for correctness.

use crate::core::Word;
use rustc_hash::FxHashMap;

/// Mapping from word to a non-negative weight in arbitrary units
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable {
    weights: FxHashMap<Word, f64>,
}

impl FrequencyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a weight, replacing any previous one; negative weights clamp to zero
    pub fn insert(&mut self, word: Word, weight: f64) {
        self.weights.insert(word, weight.max(0.0));
    }

    /// Weight of a word, zero if unknown
    #[must_use]
    pub fn weight(&self, word: &Word) -> f64 {
        self.weights.get(word).copied().unwrap_or(0.0)
    }

    /// Weights of `words` divided by their sum
    ///
    /// Falls back to a uniform distribution when every weight is zero.
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::core::Word;
    /// use wordle_autoplay::wordlists::FrequencyTable;
    ///
    /// let crane = Word::new("crane").unwrap();
    /// let slate = Word::new("slate").unwrap();
    /// let table: FrequencyTable = [(crane, 3.0), (slate, 1.0)].into_iter().collect();
    ///
    /// assert_eq!(table.normalized(&[crane, slate]), vec![0.75, 0.25]);
    /// ```
    #[must_use]
    pub fn normalized(&self, words: &[Word]) -> Vec<f64> {
        let raw: Vec<f64> = words.iter().map(|w| self.weight(w)).collect();
        let total: f64 = raw.iter().sum();

        if total > 0.0 {
            raw.into_iter().map(|w| w / total).collect()
        } else if words.is_empty() {
            Vec::new()
        } else {
            vec![1.0 / words.len() as f64; words.len()]
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(Word, f64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (Word, f64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (word, weight) in iter {
            table.insert(word, weight);
        }
        table
    }
}
