//! Formatting utilities for terminal output

use crate::core::{ALPHABET_LEN, Hint, Mark, Word};
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["qwertyuiop", "asdfghjkl", "zxcvbnm"];

/// A letter on a colored tile; `None` is an unplayed tile
#[must_use]
pub fn tile(letter: char, mark: Option<Mark>) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase());
    match mark {
        Some(Mark::Green) => text.black().on_green().bold(),
        Some(Mark::Yellow) => text.black().on_yellow().bold(),
        Some(Mark::Black) => text.white().on_bright_black(),
        None => text.normal(),
    }
}

/// One guess rendered as colored tiles
#[must_use]
pub fn hint_row(word: &Word, hint: &Hint) -> String {
    word.chars()
        .iter()
        .zip(hint.marks())
        .map(|(&c, &mark)| tile(char::from(c), Some(mark)).to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Placeholder row for a guess not yet made
#[must_use]
pub fn empty_row() -> String {
    vec![" _ "; 5].join(" ")
}

/// Best-known state of every letter across a game's hints
///
/// Green beats Yellow beats Black; letters never guessed have no state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keyboard {
    states: [Option<Mark>; ALPHABET_LEN],
}

impl Keyboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keyboard state after a sequence of guesses
    #[must_use]
    pub fn from_history<'a, I>(history: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Hint)>,
    {
        let mut keyboard = Self::new();
        for (word, hint) in history {
            keyboard.record(word, hint);
        }
        keyboard
    }

    /// Fold one guess into the keyboard
    pub fn record(&mut self, word: &Word, hint: &Hint) {
        for (&c, &mark) in word.chars().iter().zip(hint.marks()) {
            let slot = &mut self.states[usize::from(c - b'a')];
            if slot.is_none_or(|current| mark.digit() > current.digit()) {
                *slot = Some(mark);
            }
        }
    }

    /// State of a lowercase letter
    #[must_use]
    pub fn state(&self, letter: u8) -> Option<Mark> {
        letter
            .checked_sub(b'a')
            .and_then(|i| self.states.get(usize::from(i)).copied().flatten())
    }

    /// QWERTY layout with colored keys, one line per row
    #[must_use]
    pub fn render(&self) -> String {
        KEYBOARD_ROWS
            .iter()
            .enumerate()
            .map(|(indent, row)| {
                let keys: String = row
                    .bytes()
                    .map(|c| tile(char::from(c), self.state(c)).to_string())
                    .collect();
                format!("{}{keys}", " ".repeat(indent * 2))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64).max(0.0) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format entropy as a bar against the largest possible outcome count
#[must_use]
pub fn entropy_bar(entropy: f64, width: usize) -> String {
    // log2(243)
    let max_entropy = 7.925;
    create_progress_bar(entropy, max_entropy, width)
}
