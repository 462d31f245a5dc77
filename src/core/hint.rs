//! Wordle feedback calculation and representation
//!
//! A hint is five marks, one per guess position. Each mark is a base-3 digit:
//! - 0 = Black (no more of this letter in the solution)
//! - 1 = Yellow (letter in solution, wrong position)
//! - 2 = Green (letter in correct position)
//!
//! The outcome code packs the digits most significant first, so the first
//! position contributes digit × 3^4 and the code lies in 0..243.

use super::word::{WORD_LEN, Word, letter_index};
use crate::error::WordleError;
use std::fmt;
use std::str::FromStr;

/// Number of distinct hints (3^5)
pub const OUTCOME_COUNT: usize = 243;

/// Feedback for a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Black,
    Yellow,
    Green,
}

impl Mark {
    /// Base-3 digit of this mark
    #[inline]
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Yellow => 1,
            Self::Green => 2,
        }
    }

    #[inline]
    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Green,
            1 => Self::Yellow,
            _ => Self::Black,
        }
    }

    /// Canonical uppercase symbol (`G`, `Y`, `B`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Black => 'B',
            Self::Yellow => 'Y',
            Self::Green => 'G',
        }
    }

    /// Parse a symbol, case-insensitive
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'G' | 'g' => Some(Self::Green),
            'Y' | 'y' => Some(Self::Yellow),
            'B' | 'b' => Some(Self::Black),
            _ => None,
        }
    }

    /// Small-integer form used by plotting collaborators (1=Black, 2=Yellow, 3=Green)
    #[must_use]
    pub const fn plot_value(self) -> u8 {
        self.digit() + 1
    }

    /// Square emoji used in share grids
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Black => '⬛',
            Self::Yellow => '🟨',
            Self::Green => '🟩',
        }
    }
}

/// Feedback for a whole guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hint([Mark; WORD_LEN]);

impl Hint {
    /// All greens
    pub const SOLVED: Self = Self([Mark::Green; WORD_LEN]);

    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Calculate the hint shown when `guess` is played against `solution`
    ///
    /// # Algorithm
    /// 1. Count the letters of the solution
    /// 2. First pass: exact matches are Green and consume one count
    /// 3. Second pass: other positions are Yellow while the letter still has
    ///    count left (consuming one), otherwise Black
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::core::{Hint, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let solution = Word::new("abide").unwrap();
    ///
    /// // Only one E in ABIDE, so only one E can be marked
    /// assert_eq!(Hint::calculate(&guess, &solution).to_string(), "BBYBY");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        let mut marks = [Mark::Black; WORD_LEN];
        let mut available = solution.letter_counts();

        for (i, (&g, &s)) in guess.chars().iter().zip(solution.chars()).enumerate() {
            if g == s {
                marks[i] = Mark::Green;
                available[letter_index(g)] -= 1;
            }
        }

        for (mark, &g) in marks.iter_mut().zip(guess.chars()) {
            if *mark == Mark::Green {
                continue;
            }
            let count = &mut available[letter_index(g)];
            if *count > 0 {
                *mark = Mark::Yellow;
                *count -= 1;
            }
        }

        Self(marks)
    }

    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::SOLVED
    }

    /// Encode as an outcome code in `0..243`
    ///
    /// # Examples
    /// ```
    /// use wordle_autoplay::core::Hint;
    ///
    /// let hint: Hint = "GBBBB".parse().unwrap();
    /// assert_eq!(hint.code(), 162); // 2 × 3^4
    /// assert_eq!(Hint::from_code(162), Some(hint));
    /// ```
    #[inline]
    #[must_use]
    pub fn code(self) -> u8 {
        self.0.iter().fold(0, |acc, mark| acc * 3 + mark.digit())
    }

    /// Decode an outcome code, or `None` if it is out of range
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        if usize::from(code) >= OUTCOME_COUNT {
            return None;
        }

        let mut marks = [Mark::Black; WORD_LEN];
        let mut value = code;
        for mark in marks.iter_mut().rev() {
            *mark = Mark::from_digit(value % 3);
            value /= 3;
        }
        Some(Self(marks))
    }

    /// Per-position plot values (1=Black, 2=Yellow, 3=Green)
    #[must_use]
    pub fn plot_values(self) -> [u8; WORD_LEN] {
        self.0.map(Mark::plot_value)
    }

    /// Render as emoji squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Hint {
    type Err = WordleError;

    /// Parse a 5-symbol string over `G`/`Y`/`B`, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || WordleError::InvalidHint(s.to_string());
        let trimmed = s.trim();

        if trimmed.chars().count() != WORD_LEN {
            return Err(invalid());
        }

        let mut marks = [Mark::Black; WORD_LEN];
        for (mark, symbol) in marks.iter_mut().zip(trimmed.chars()) {
            *mark = Mark::from_symbol(symbol).ok_or_else(invalid)?;
        }
        Ok(Self(marks))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn hint(guess: &str, solution: &str) -> String {
        Hint::calculate(&Word::new(guess).unwrap(), &Word::new(solution).unwrap()).to_string()
    }

    #[test]
    fn all_black_for_disjoint_letters() {
        assert_eq!(hint("abcde", "fghij"), "BBBBB");
    }

    #[test]
    fn same_word_is_solved() {
        let word = Word::new("crane").unwrap();
        assert!(Hint::calculate(&word, &word).is_solved());
        assert_eq!(Hint::SOLVED.code(), 242);
    }

    #[test]
    fn repeated_guess_letter_only_marked_once() {
        // One E in ABIDE: first E is yellow, second is black
        assert_eq!(hint("speed", "abide"), "BBYBY");
    }

    #[test]
    fn green_takes_priority_over_earlier_yellow() {
        // ROBOT vs FLOOR: second O is green, first O still gets the other O
        assert_eq!(hint("robot", "floor"), "YYBGB");
        // ALLOW vs LOYAL: A yellow, both L yellow (LOYAL has two), O yellow, W black
        assert_eq!(hint("allow", "loyal"), "YYYYB");
        // Extra repeats beyond the solution count are black
        assert_eq!(hint("error", "rebus"), "YYBBB");
    }

    #[test]
    fn crane_against_trace() {
        assert_eq!(hint("crane", "trace"), "YGGBG");
        assert_eq!(hint("trace", "trace"), "GGGGG");
    }

    #[test]
    fn code_is_most_significant_first() {
        let first_green: Hint = "GBBBB".parse().unwrap();
        let last_green: Hint = "BBBBG".parse().unwrap();
        assert_eq!(first_green.code(), 162);
        assert_eq!(last_green.code(), 2);
        assert_eq!("BBBBB".parse::<Hint>().unwrap().code(), 0);
    }

    #[test]
    fn from_code_rejects_out_of_range() {
        assert!(Hint::from_code(243).is_none());
        assert!(Hint::from_code(255).is_none());
        assert_eq!(Hint::from_code(242), Some(Hint::SOLVED));
    }

    #[test]
    fn parse_is_case_insensitive_and_prints_uppercase() {
        let hint: Hint = "gybBG".parse().unwrap();
        assert_eq!(hint.to_string(), "GYBBG");
    }

    #[test]
    fn parse_rejects_bad_symbols_and_lengths() {
        for bad in ["GYBB", "GYBBGG", "GXBBG", "", "G-B_G"] {
            assert!(
                matches!(bad.parse::<Hint>(), Err(WordleError::InvalidHint(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn plot_values_and_emoji() {
        let hint: Hint = "BYGBG".parse().unwrap();
        assert_eq!(hint.plot_values(), [1, 2, 3, 1, 3]);
        assert_eq!(hint.to_emoji(), "⬛🟨🟩⬛🟩");
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        // Small alphabet so repeated letters are common
        "[a-e]{5}".prop_map(|s| Word::new(&s).unwrap())
    }

    proptest! {
        #[test]
        fn marked_letters_never_exceed_solution_count(guess in word_strategy(), solution in word_strategy()) {
            let hint = Hint::calculate(&guess, &solution);
            let solution_counts = solution.letter_counts();
            let mut marked = [0u8; 26];
            for (mark, &letter) in hint.marks().iter().zip(guess.chars()) {
                if *mark != Mark::Black {
                    marked[letter_index(letter)] += 1;
                }
            }
            for (m, s) in marked.iter().zip(solution_counts.iter()) {
                prop_assert!(m <= s);
            }
        }

        #[test]
        fn greens_exactly_at_matching_positions(guess in word_strategy(), solution in word_strategy()) {
            let hint = Hint::calculate(&guess, &solution);
            for i in 0..WORD_LEN {
                prop_assert_eq!(hint.marks()[i] == Mark::Green, guess.char_at(i) == solution.char_at(i));
            }
        }

        #[test]
        fn self_hint_is_solved(word in word_strategy()) {
            prop_assert!(Hint::calculate(&word, &word).is_solved());
        }

        #[test]
        fn code_round_trips(code in 0u8..243) {
            let hint = Hint::from_code(code).unwrap();
            prop_assert_eq!(hint.code(), code);
        }
    }
}
