//! Accumulated knowledge from past hints
//!
//! Each applied (guess, hint) pair contributes:
//! - Green at `i`: the solution has that letter at `i`
//! - Yellow or Black at `i`: the solution does not have that letter at `i`
//! - per letter, the number of non-Black marks is a lower bound on its count
//! - per letter, a Black alongside those marks caps the count at exactly that
//!   number (zero marks means the letter is absent)
//!
//! A Black for a letter that is Green or Yellow elsewhere in the same guess
//! therefore means "no more of this letter", never "none of this letter".

use crate::core::{ALPHABET_LEN, Hint, Mark, WORD_LEN, Word, letter_index};

/// Cumulative constraint state for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintTracker {
    required: [Option<u8>; WORD_LEN],
    excluded: [u32; WORD_LEN],
    min_counts: [u8; ALPHABET_LEN],
    max_counts: [u8; ALPHABET_LEN],
    applied: usize,
}

impl Default for ConstraintTracker {
    fn default() -> Self {
        Self::new()
    }
}

const fn bit(letter: u8) -> u32 {
    1 << letter_index(letter)
}

impl ConstraintTracker {
    /// Empty tracker that accepts every word
    #[must_use]
    pub const fn new() -> Self {
        Self {
            required: [None; WORD_LEN],
            excluded: [0; WORD_LEN],
            min_counts: [0; ALPHABET_LEN],
            max_counts: [WORD_LEN as u8; ALPHABET_LEN],
            applied: 0,
        }
    }

    /// Fold one hint into the accumulated constraints
    pub fn apply(&mut self, word: &Word, hint: &Hint) {
        let mut marked = [0u8; ALPHABET_LEN];
        let mut blacked = 0u32;

        for (i, (&letter, &mark)) in word.chars().iter().zip(hint.marks()).enumerate() {
            match mark {
                Mark::Green => {
                    self.required[i] = Some(letter);
                    marked[letter_index(letter)] += 1;
                }
                Mark::Yellow => {
                    self.excluded[i] |= bit(letter);
                    marked[letter_index(letter)] += 1;
                }
                Mark::Black => {
                    self.excluded[i] |= bit(letter);
                    blacked |= bit(letter);
                }
            }
        }

        for (letter, &count) in (b'a'..=b'z').zip(&marked) {
            let idx = letter_index(letter);
            self.min_counts[idx] = self.min_counts[idx].max(count);
            if blacked & bit(letter) != 0 {
                self.max_counts[idx] = self.max_counts[idx].min(count);
            }
        }

        self.applied += 1;
    }

    /// Whether `word` is consistent with every hint applied so far
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let positions_ok = word.chars().iter().enumerate().all(|(i, &c)| {
            self.required[i].map_or(self.excluded[i] & bit(c) == 0, |required| required == c)
        });
        if !positions_ok {
            return false;
        }

        let counts = word.letter_counts();
        counts
            .iter()
            .zip(self.min_counts.iter().zip(&self.max_counts))
            .all(|(&count, (&min, &max))| count >= min && count <= max)
    }

    /// The subsequence of `candidates` consistent with all applied hints
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::core::{Hint, Word};
    /// use wordle_autoplay::solver::ConstraintTracker;
    ///
    /// let words: Vec<Word> = ["crane", "trace", "slate"]
    ///     .iter()
    ///     .map(|s| Word::new(s).unwrap())
    ///     .collect();
    ///
    /// let mut tracker = ConstraintTracker::new();
    /// tracker.apply(&words[0], &"YGGBG".parse::<Hint>().unwrap());
    ///
    /// assert_eq!(tracker.filter(&words), vec![words[1]]);
    /// ```
    pub fn filter<'a, I>(&self, candidates: I) -> Vec<Word>
    where
        I: IntoIterator<Item = &'a Word>,
    {
        candidates
            .into_iter()
            .filter(|w| self.matches(w))
            .copied()
            .collect()
    }

    /// Letters known to appear at least once
    #[must_use]
    pub fn known_present(&self) -> Vec<u8> {
        (b'a'..=b'z')
            .filter(|&c| self.min_counts[letter_index(c)] > 0)
            .collect()
    }

    /// Letters known not to appear anywhere
    #[must_use]
    pub fn known_absent(&self) -> Vec<u8> {
        (b'a'..=b'z')
            .filter(|&c| self.max_counts[letter_index(c)] == 0)
            .collect()
    }

    /// Letter fixed at a position by a Green, if any
    #[must_use]
    pub const fn required_at(&self, position: usize) -> Option<u8> {
        self.required[position]
    }

    /// Number of hints applied
    #[must_use]
    pub const fn applied(&self) -> usize {
        self.applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|s| w(s)).collect()
    }

    fn brute_force(history: &[(Word, Hint)], candidates: &[Word]) -> Vec<Word> {
        candidates
            .iter()
            .filter(|c| history.iter().all(|(g, h)| Hint::calculate(g, c) == *h))
            .copied()
            .collect()
    }

    #[test]
    fn empty_tracker_keeps_everything() {
        let list = words(&["crane", "slate", "speed"]);
        assert_eq!(ConstraintTracker::new().filter(&list), list);
    }

    #[test]
    fn green_fixes_position() {
        let mut tracker = ConstraintTracker::new();
        tracker.apply(&w("crane"), &"BBGBB".parse().unwrap());

        assert_eq!(tracker.required_at(2), Some(b'a'));
        let kept = tracker.filter(&words(&["plaid", "stomp", "chaff"]));
        assert_eq!(kept, words(&["plaid"]));
    }

    #[test]
    fn yellow_requires_letter_elsewhere() {
        let mut tracker = ConstraintTracker::new();
        tracker.apply(&w("crane"), &"BBBBY".parse().unwrap());

        // E present, not at position 4, and C R A N absent
        let kept = tracker.filter(&words(&["eight", "those", "field", "slope"]));
        assert_eq!(kept, words(&["eight", "field"]));
    }

    #[test]
    fn black_duplicate_means_no_more_not_none() {
        // ERROR against REBUS: E yellow, first R yellow, other R black, O and R black
        let guess = w("error");
        let hint = Hint::calculate(&guess, &w("rebus"));
        assert_eq!(hint.to_string(), "YYBBB");

        let mut tracker = ConstraintTracker::new();
        tracker.apply(&guess, &hint);

        assert!(tracker.known_present().contains(&b'r'));
        assert!(!tracker.known_absent().contains(&b'r'));
        assert!(tracker.known_absent().contains(&b'o'));
        assert!(tracker.matches(&w("rebus")));
        // Two Rs are over-represented
        assert!(!tracker.matches(&w("rebar")));
    }

    #[test]
    fn later_present_letter_is_not_absent() {
        let mut tracker = ConstraintTracker::new();
        // SPEED vs ABIDE: second E black, first E yellow
        tracker.apply(&w("speed"), &Hint::calculate(&w("speed"), &w("abide")));

        assert!(tracker.known_present().contains(&b'e'));
        assert!(!tracker.known_absent().contains(&b'e'));
        assert!(tracker.known_absent().contains(&b's'));
        assert!(tracker.matches(&w("abide")));
    }

    #[test]
    fn applying_same_hint_twice_is_idempotent() {
        let list = words(&["crane", "trace", "slate", "react", "caret", "grace"]);
        let hint = Hint::calculate(&w("crane"), &w("trace"));

        let mut once = ConstraintTracker::new();
        once.apply(&w("crane"), &hint);
        let mut twice = once.clone();
        twice.apply(&w("crane"), &hint);

        assert_eq!(once.filter(&list), twice.filter(&list));
        assert_eq!(twice.applied(), 2);
    }

    #[test]
    fn agrees_with_brute_force_on_repeated_letters() {
        let list = words(&["eerie", "geese", "emcee", "there", "three", "sheep", "steep"]);
        let solution = w("three");
        let mut tracker = ConstraintTracker::new();
        let mut history = Vec::new();

        for guess in words(&["geese", "eerie"]) {
            let hint = Hint::calculate(&guess, &solution);
            tracker.apply(&guess, &hint);
            history.push((guess, hint));
            assert_eq!(tracker.filter(&list), brute_force(&history, &list));
        }
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        "[a-f]{5}".prop_map(|s| Word::new(&s).unwrap())
    }

    proptest! {
        #[test]
        fn filter_equals_hint_consistency(
            solution in word_strategy(),
            guesses in prop::collection::vec(word_strategy(), 1..4),
            pool in prop::collection::vec(word_strategy(), 1..40),
        ) {
            let mut tracker = ConstraintTracker::new();
            let mut history = Vec::new();
            let mut previous = pool.len();

            for guess in guesses {
                let hint = Hint::calculate(&guess, &solution);
                tracker.apply(&guess, &hint);
                history.push((guess, hint));

                let kept = tracker.filter(&pool);
                prop_assert_eq!(&kept, &brute_force(&history, &pool));
                prop_assert!(kept.len() <= previous);
                prop_assert!(tracker.matches(&solution));
                previous = kept.len();
            }
        }
    }
}
