//! Word list and frequency loading
//!
//! Reads the two external inputs: the word-list JSON (`solutions` plus
//! `other_valid_words`) and a frequency table, either a JSON object or a
//! `word,count` CSV such as the Google unigram counts.

use super::{FrequencyTable, Vocabulary};
use crate::core::{WORD_LEN, Word};
use crate::error::CacheError;
use log::{debug, info};
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct WordListFile {
    solutions: Vec<String>,
    #[serde(default)]
    other_valid_words: Vec<String>,
}

fn read(path: &Path) -> Result<String, CacheError> {
    fs::read_to_string(path).map_err(|source| CacheError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a vocabulary from a word-list JSON file
///
/// # Errors
///
/// Returns `CacheError` if the file cannot be read, is not valid JSON, or
/// contains a word that is not 5 ASCII letters.
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vocabulary, CacheError> {
    let path = path.as_ref();
    let vocab = parse_vocabulary(&read(path)?, &path.display().to_string())?;
    info!(
        "loaded {} words ({} solutions) from {}",
        vocab.len(),
        vocab.solutions().len(),
        path.display()
    );
    Ok(vocab)
}

/// Parse word-list JSON
///
/// # Errors
///
/// Returns `CacheError::Json` for malformed JSON and `CacheError::InvalidWord`
/// for any word that is not 5 ASCII letters.
///
/// # Examples
/// ```
/// use wordle_autoplay::wordlists::loader::parse_vocabulary;
///
/// let json = r#"{"solutions": ["crane"], "other_valid_words": ["slate"]}"#;
/// let vocab = parse_vocabulary(json, "inline").unwrap();
/// assert_eq!(vocab.len(), 2);
/// ```
pub fn parse_vocabulary(json: &str, origin: &str) -> Result<Vocabulary, CacheError> {
    let file: WordListFile = serde_json::from_str(json).map_err(|source| CacheError::Json {
        origin: origin.to_string(),
        source,
    })?;

    let parse_all = |list: Vec<String>| {
        list.into_iter()
            .map(|text| {
                Word::new(&text).map_err(|source| CacheError::InvalidWord {
                    word: text.clone(),
                    origin: origin.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()
    };

    let solutions = parse_all(file.solutions)?;
    let others = parse_all(file.other_valid_words)?;
    Ok(Vocabulary::new(solutions, others))
}

/// Load word frequencies, choosing the format from the file extension
///
/// `.json` files hold an object of word to count; anything else is read as CSV.
///
/// # Errors
///
/// Returns `CacheError` if the file cannot be read or is malformed.
pub fn load_frequencies<P: AsRef<Path>>(path: P) -> Result<FrequencyTable, CacheError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let text = read(path)?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let table = if is_json {
        parse_frequency_json(&text, &origin)?
    } else {
        parse_frequency_csv(&text, &origin)?
    };

    info!("loaded {} word frequencies from {origin}", table.len());
    Ok(table)
}

/// Parse a JSON object of word to count, skipping words that are not 5 letters
///
/// # Errors
///
/// Returns `CacheError::Json` if the text is not an object of numbers.
pub fn parse_frequency_json(json: &str, origin: &str) -> Result<FrequencyTable, CacheError> {
    let raw: FxHashMap<String, f64> =
        serde_json::from_str(json).map_err(|source| CacheError::Json {
            origin: origin.to_string(),
            source,
        })?;

    Ok(raw
        .into_iter()
        .filter_map(|(text, count)| Word::new(&text).ok().map(|w| (w, count)))
        .collect())
}

/// Parse `word,count` CSV, skipping an optional header and words that are not 5 letters
///
/// # Errors
///
/// Returns `CacheError::MalformedRow` for a row without a numeric count.
///
/// # Examples
/// ```
/// use wordle_autoplay::core::Word;
/// use wordle_autoplay::wordlists::loader::parse_frequency_csv;
///
/// let csv = "word,count\nthe,23135851162\nabout,1226734006\n";
/// let table = parse_frequency_csv(csv, "inline").unwrap();
/// assert_eq!(table.len(), 1);
/// assert!(table.weight(&Word::new("about").unwrap()) > 0.0);
/// ```
pub fn parse_frequency_csv(text: &str, origin: &str) -> Result<FrequencyTable, CacheError> {
    let mut table = FrequencyTable::new();
    let mut skipped = 0usize;

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let malformed = || CacheError::MalformedRow {
            origin: origin.to_string(),
            line: line_no + 1,
        };
        let (word, count) = line.split_once(',').ok_or_else(malformed)?;
        let Ok(count) = count.trim().parse::<f64>() else {
            if line_no == 0 {
                // header
                continue;
            }
            return Err(malformed());
        };

        if word.trim().len() != WORD_LEN {
            skipped += 1;
            continue;
        }
        match Word::new(word) {
            Ok(word) => table.insert(word, count),
            Err(_) => skipped += 1,
        }
    }

    debug!("skipped {skipped} rows of {origin} that are not 5-letter words");
    Ok(table)
}
