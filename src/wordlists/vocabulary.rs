//! Legal guesses and eligible solutions

use crate::core::{Word, WordError};
use rustc_hash::{FxHashMap, FxHashSet};

/// Ordered set of legal guesses, with the solution list kept alongside
///
/// Solutions come first in the word order, followed by the other valid
/// words. Every solution is also a legal guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<Word>,
    index: FxHashMap<Word, usize>,
    solutions: Vec<Word>,
    solution_set: FxHashSet<Word>,
}

impl Vocabulary {
    /// Build from the solution list and the extra valid guesses
    ///
    /// Solutions keep their order (puzzle `n` is `solutions[n]`). Duplicate
    /// words are kept once in the guess list.
    #[must_use]
    pub fn new(solutions: Vec<Word>, other_valid_words: Vec<Word>) -> Self {
        let mut words = Vec::with_capacity(solutions.len() + other_valid_words.len());
        let mut index = FxHashMap::default();

        for &word in solutions.iter().chain(&other_valid_words) {
            index.entry(word).or_insert_with(|| {
                words.push(word);
                words.len() - 1
            });
        }

        let solution_set = solutions.iter().copied().collect();

        Self {
            words,
            index,
            solutions,
            solution_set,
        }
    }

    /// Build from string slices, mostly for fixtures
    ///
    /// # Errors
    /// Returns the first `WordError` encountered.
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::wordlists::Vocabulary;
    ///
    /// let vocab = Vocabulary::from_strs(&["crane", "slate"], &["trace"]).unwrap();
    /// assert_eq!(vocab.len(), 3);
    /// assert_eq!(vocab.solutions().len(), 2);
    /// ```
    pub fn from_strs(solutions: &[&str], other_valid_words: &[&str]) -> Result<Self, WordError> {
        let parse = |list: &[&str]| list.iter().map(|s| Word::new(s)).collect::<Result<Vec<_>, _>>();
        Ok(Self::new(parse(solutions)?, parse(other_valid_words)?))
    }

    /// All legal guesses in order
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Eligible solutions in puzzle order
    #[must_use]
    pub fn solutions(&self) -> &[Word] {
        &self.solutions
    }

    /// Solution for a puzzle number
    #[must_use]
    pub fn solution(&self, puzzle: usize) -> Option<Word> {
        self.solutions.get(puzzle).copied()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word)
    }

    #[must_use]
    pub fn is_solution(&self, word: &Word) -> bool {
        self.solution_set.contains(word)
    }

    /// Position of a word in `words()`
    #[must_use]
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.index.get(word).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
