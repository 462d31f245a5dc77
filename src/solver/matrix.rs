//! Precomputed outcome codes for every (guess, solution) pair
//!
//! The matrix is square over a vocabulary snapshot: `code(g, s)` is the
//! outcome code of `Hint::calculate(words[g], words[s])`. It is built once,
//! then shared read-only by every game.

use crate::core::{Hint, Word};
use crate::error::CacheError;
use crate::wordlists::{FrequencyTable, Vocabulary};
use log::info;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHasher};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::time::Instant;

/// Words chosen for the matrix, in row/column order
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub words: Vec<Word>,
    /// Frequencies normalized over `words`
    pub frequencies: Vec<f64>,
    pub is_solution: Vec<bool>,
}

impl Snapshot {
    /// Select at most `max_size` words from the vocabulary
    ///
    /// Every solution is kept; remaining slots go to the most frequent other
    /// words. The result is ordered by descending frequency, ties broken
    /// alphabetically.
    #[must_use]
    pub fn select(vocab: &Vocabulary, frequencies: &FrequencyTable, max_size: usize) -> Self {
        let by_frequency = |a: &Word, b: &Word| -> Ordering {
            frequencies
                .weight(b)
                .total_cmp(&frequencies.weight(a))
                .then_with(|| a.cmp(b))
        };

        let mut solutions: Vec<Word> = vocab
            .words()
            .iter()
            .filter(|w| vocab.is_solution(w))
            .copied()
            .collect();
        let mut others: Vec<Word> = vocab
            .words()
            .iter()
            .filter(|w| !vocab.is_solution(w))
            .copied()
            .collect();
        solutions.sort_by(by_frequency);
        others.sort_by(by_frequency);
        others.truncate(max_size.saturating_sub(solutions.len()));

        let mut words = solutions;
        words.extend(others);
        words.sort_by(by_frequency);

        let is_solution = words.iter().map(|w| vocab.is_solution(w)).collect();
        let frequencies = frequencies.normalized(&words);

        Self {
            words,
            frequencies,
            is_solution,
        }
    }
}

/// Square table of outcome codes
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeMatrix {
    words: Vec<Word>,
    frequencies: Vec<f64>,
    is_solution: Vec<bool>,
    codes: Vec<u8>,
    index: FxHashMap<Word, usize>,
    opening_guess: Option<Word>,
    fingerprint: u64,
}

impl OutcomeMatrix {
    /// Compute every outcome code for a snapshot
    ///
    /// Rows are computed in parallel. Cost is quadratic in the snapshot size.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::EmptyVocabulary` for an empty snapshot and
    /// `CacheError::Corrupt` if the parallel arrays differ in length.
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::core::{Hint, Word};
    /// use wordle_autoplay::solver::{OutcomeMatrix, Snapshot};
    ///
    /// let words: Vec<Word> = ["crane", "trace"].iter().map(|s| Word::new(s).unwrap()).collect();
    /// let snapshot = Snapshot { words, frequencies: vec![0.5, 0.5], is_solution: vec![true, true] };
    /// let matrix = OutcomeMatrix::build(snapshot).unwrap();
    ///
    /// assert_eq!(matrix.code(0, 1), "YGGBG".parse::<Hint>().unwrap().code());
    /// assert_eq!(matrix.code(1, 1), Hint::SOLVED.code());
    /// ```
    pub fn build(snapshot: Snapshot) -> Result<Self, CacheError> {
        let Snapshot {
            words,
            frequencies,
            is_solution,
        } = snapshot;

        if words.is_empty() {
            return Err(CacheError::EmptyVocabulary);
        }

        let start = Instant::now();
        let n = words.len();
        let codes: Vec<u8> = words
            .par_iter()
            .flat_map_iter(|guess| words.iter().map(move |solution| Hint::calculate(guess, solution).code()))
            .collect();

        info!(
            "built {n}x{n} outcome matrix in {:.2}s",
            start.elapsed().as_secs_f64()
        );

        Self::from_parts(words, frequencies, is_solution, codes, None)
    }

    /// Snapshot the vocabulary and build the matrix in one step
    ///
    /// # Errors
    ///
    /// See [`OutcomeMatrix::build`].
    pub fn from_vocabulary(
        vocab: &Vocabulary,
        frequencies: &FrequencyTable,
        max_size: usize,
    ) -> Result<Self, CacheError> {
        let fingerprint = fingerprint(vocab, frequencies, max_size);
        let mut matrix = Self::build(Snapshot::select(vocab, frequencies, max_size))?;
        matrix.fingerprint = fingerprint;
        Ok(matrix)
    }

    /// Reassemble a matrix from stored parts, validating shapes
    pub(crate) fn from_parts(
        words: Vec<Word>,
        frequencies: Vec<f64>,
        is_solution: Vec<bool>,
        codes: Vec<u8>,
        opening_guess: Option<Word>,
    ) -> Result<Self, CacheError> {
        let n = words.len();
        if n == 0 {
            return Err(CacheError::EmptyVocabulary);
        }
        if frequencies.len() != n || is_solution.len() != n {
            return Err(CacheError::Corrupt(format!(
                "{n} words but {} frequencies and {} solution flags",
                frequencies.len(),
                is_solution.len()
            )));
        }
        if codes.len() != n * n {
            return Err(CacheError::Corrupt(format!(
                "expected {} codes, found {}",
                n * n,
                codes.len()
            )));
        }

        let index = words.iter().enumerate().map(|(i, &w)| (w, i)).collect();

        Ok(Self {
            words,
            frequencies,
            is_solution,
            codes,
            index,
            opening_guess,
            fingerprint: 0,
        })
    }

    /// Number of words (rows and columns)
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn word(&self, index: usize) -> Word {
        self.words[index]
    }

    #[must_use]
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// Outcome code when `guess` is played against `solution` (both indices)
    #[inline]
    #[must_use]
    pub fn code(&self, guess: usize, solution: usize) -> u8 {
        self.codes[guess * self.words.len() + solution]
    }

    /// All outcome codes for one guess
    #[inline]
    #[must_use]
    pub fn row(&self, guess: usize) -> &[u8] {
        let n = self.words.len();
        &self.codes[guess * n..(guess + 1) * n]
    }

    #[must_use]
    pub fn frequencies(&self) -> &[f64] {
        &self.frequencies
    }

    #[inline]
    #[must_use]
    pub fn frequency(&self, index: usize) -> f64 {
        self.frequencies[index]
    }

    #[inline]
    #[must_use]
    pub fn is_solution(&self, index: usize) -> bool {
        self.is_solution[index]
    }

    /// Indices of solution words
    #[must_use]
    pub fn solution_indices(&self) -> Vec<usize> {
        (0..self.len()).filter(|&i| self.is_solution[i]).collect()
    }

    #[must_use]
    pub const fn opening_guess(&self) -> Option<Word> {
        self.opening_guess
    }

    pub(crate) fn set_opening_guess(&mut self, word: Word) {
        self.opening_guess = Some(word);
    }

    /// Identity of the inputs this matrix was built from
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    pub(crate) fn set_fingerprint(&mut self, fingerprint: u64) {
        self.fingerprint = fingerprint;
    }

    pub(crate) fn codes(&self) -> &[u8] {
        &self.codes
    }

    pub(crate) fn solution_flags(&self) -> &[bool] {
        &self.is_solution
    }
}

/// Hash of everything a snapshot depends on
///
/// Any change to the word list, solution list, frequencies of vocabulary
/// words, or snapshot size changes the fingerprint.
#[must_use]
pub fn fingerprint(vocab: &Vocabulary, frequencies: &FrequencyTable, max_size: usize) -> u64 {
    let mut hasher = FxHasher::default();
    max_size.hash(&mut hasher);
    vocab.solutions().hash(&mut hasher);
    for word in vocab.words() {
        word.hash(&mut hasher);
        frequencies.weight(word).to_bits().hash(&mut hasher);
    }
    hasher.finish()
}
