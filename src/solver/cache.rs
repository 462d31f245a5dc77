//! Persisted outcome matrix
//!
//! The matrix and its opening guess are stored as MessagePack next to a
//! fingerprint of the inputs. A fingerprint mismatch means the word list,
//! frequencies or selection settings changed, and the artifact is rebuilt.
//! Writes go to a temporary file that replaces the artifact only once
//! complete.

use super::entropy::GuessSelector;
use super::matrix::{self, OutcomeMatrix};
use crate::config::SolverConfig;
use crate::core::Word;
use crate::error::CacheError;
use crate::wordlists::{FrequencyTable, Vocabulary};
use log::{info, warn};
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::hash::{Hash, Hasher};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct MatrixArtifact {
    version: u32,
    fingerprint: u64,
    words: Vec<Word>,
    frequencies: Vec<f64>,
    is_solution: Vec<bool>,
    codes: Vec<u8>,
    opening_guess: Option<Word>,
}

/// Identity of a persisted matrix: the snapshot inputs plus the selection
/// settings the opening guess was computed with
#[must_use]
pub fn cache_fingerprint(vocab: &Vocabulary, frequencies: &FrequencyTable, config: &SolverConfig) -> u64 {
    let mut hasher = FxHasher::default();
    FORMAT_VERSION.hash(&mut hasher);
    matrix::fingerprint(vocab, frequencies, config.max_vocab_size).hash(&mut hasher);
    config.top_band.to_bits().hash(&mut hasher);
    config.use_frequency.hash(&mut hasher);
    hasher.finish()
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> CacheError + '_ {
    move |source| CacheError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write a matrix to `path`
///
/// # Errors
///
/// Returns `CacheError::Io` or `CacheError::Encode` on failure; an existing
/// file at `path` is left untouched in that case.
pub fn save(matrix: &OutcomeMatrix, path: &Path) -> Result<(), CacheError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error(parent))?;
    }

    let artifact = MatrixArtifact {
        version: FORMAT_VERSION,
        fingerprint: matrix.fingerprint(),
        words: matrix.words().to_vec(),
        frequencies: matrix.frequencies().to_vec(),
        is_solution: matrix.solution_flags().to_vec(),
        codes: matrix.codes().to_vec(),
        opening_guess: matrix.opening_guess(),
    };

    let tmp = temp_path(path);
    let result = (|| -> Result<(), CacheError> {
        let file = File::create(&tmp).map_err(io_error(&tmp))?;
        let mut writer = BufWriter::new(file);
        rmp_serde::encode::write(&mut writer, &artifact)?;
        writer.flush().map_err(io_error(&tmp))?;
        fs::rename(&tmp, path).map_err(io_error(path))
    })();

    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

/// Read a matrix from `path`
///
/// # Errors
///
/// Returns `CacheError::Io` if the file cannot be opened,
/// `CacheError::Decode` if it is not a matrix artifact, and
/// `CacheError::Corrupt` if its parts are inconsistent.
pub fn load(path: &Path) -> Result<OutcomeMatrix, CacheError> {
    let file = File::open(path).map_err(io_error(path))?;
    let artifact: MatrixArtifact =
        rmp_serde::decode::from_read(BufReader::new(file)).map_err(|source| CacheError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    if artifact.version != FORMAT_VERSION {
        return Err(CacheError::Corrupt(format!(
            "format version {} (expected {FORMAT_VERSION})",
            artifact.version
        )));
    }

    let mut matrix = OutcomeMatrix::from_parts(
        artifact.words,
        artifact.frequencies,
        artifact.is_solution,
        artifact.codes,
        artifact.opening_guess,
    )?;
    matrix.set_fingerprint(artifact.fingerprint);
    Ok(matrix)
}

/// Build a matrix and precompute its opening guess
///
/// The opening guess is the selector's choice with every matrix word as
/// both guess and candidate.
///
/// # Errors
///
/// Returns `CacheError::EmptyVocabulary` when there is nothing to build from.
pub fn build(
    vocab: &Vocabulary,
    frequencies: &FrequencyTable,
    config: &SolverConfig,
) -> Result<OutcomeMatrix, CacheError> {
    let mut matrix = OutcomeMatrix::from_vocabulary(vocab, frequencies, config.max_vocab_size)?;

    let start = Instant::now();
    let all: Vec<usize> = (0..matrix.len()).collect();
    let opening = GuessSelector::new(&matrix, config.top_band, config.use_frequency)
        .best_guess(&all, &[])
        .map(|selection| selection.word);
    if let Some(word) = opening {
        info!(
            "opening guess {word} computed in {:.2}s",
            start.elapsed().as_secs_f64()
        );
        matrix.set_opening_guess(word);
    }

    matrix.set_fingerprint(cache_fingerprint(vocab, frequencies, config));
    Ok(matrix)
}

/// Load the persisted matrix if it matches the inputs, otherwise build and persist it
///
/// `force` always rebuilds. A stale or unreadable artifact is replaced.
///
/// # Errors
///
/// Returns `CacheError` if building or writing fails.
pub fn load_or_build(
    path: &Path,
    vocab: &Vocabulary,
    frequencies: &FrequencyTable,
    config: &SolverConfig,
    force: bool,
) -> Result<OutcomeMatrix, CacheError> {
    let expected = cache_fingerprint(vocab, frequencies, config);

    if !force && path.exists() {
        match load(path) {
            Ok(matrix) if matrix.fingerprint() == expected => {
                info!(
                    "loaded {}x{} outcome matrix from {}",
                    matrix.len(),
                    matrix.len(),
                    path.display()
                );
                return Ok(matrix);
            }
            Ok(_) => warn!("outcome matrix at {} is stale, rebuilding", path.display()),
            Err(err) => warn!("ignoring unreadable outcome matrix: {err}"),
        }
    }

    let matrix = build(vocab, frequencies, config)?;
    save(&matrix, path)?;
    info!("saved outcome matrix to {}", path.display());
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

    fn scratch_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wordle_autoplay_cache_{}_{}",
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn inputs() -> (Vocabulary, FrequencyTable) {
        let vocab =
            Vocabulary::from_strs(&["trace", "crane", "slate", "irate"], &["soare", "roate"]).unwrap();
        let frequencies = [("trace", 5.0), ("crane", 9.0), ("slate", 3.0), ("irate", 1.0), ("soare", 0.5)]
            .into_iter()
            .map(|(s, f)| (Word::new(s).unwrap(), f))
            .collect();
        (vocab, frequencies)
    }

    #[test]
    fn round_trip_preserves_matrix() {
        let dir = scratch_dir();
        let path = dir.join("matrix.msgpack");
        let (vocab, frequencies) = inputs();
        let config = SolverConfig::default();

        let built = build(&vocab, &frequencies, &config).unwrap();
        assert!(built.opening_guess().is_some());
        save(&built, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, built);
        assert!(!temp_path(&path).exists());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn load_or_build_reuses_matching_artifact() {
        let dir = scratch_dir();
        let path = dir.join("nested").join("matrix.msgpack");
        let (vocab, frequencies) = inputs();
        let config = SolverConfig::default();

        let first = load_or_build(&path, &vocab, &frequencies, &config, false).unwrap();
        assert!(path.exists());
        let second = load_or_build(&path, &vocab, &frequencies, &config, false).unwrap();
        assert_eq!(first, second);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn changed_inputs_force_rebuild() {
        let dir = scratch_dir();
        let path = dir.join("matrix.msgpack");
        let (vocab, mut frequencies) = inputs();
        let config = SolverConfig::default();

        let first = load_or_build(&path, &vocab, &frequencies, &config, false).unwrap();
        frequencies.insert(Word::new("roate").unwrap(), 100.0);
        let second = load_or_build(&path, &vocab, &frequencies, &config, false).unwrap();

        assert_ne!(first.fingerprint(), second.fingerprint());
        assert_eq!(load(&path).unwrap().fingerprint(), second.fingerprint());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn garbage_file_is_rebuilt() {
        let dir = scratch_dir();
        let path = dir.join("matrix.msgpack");
        fs::write(&path, b"not a matrix").unwrap();
        assert!(load(&path).is_err());

        let (vocab, frequencies) = inputs();
        let matrix = load_or_build(&path, &vocab, &frequencies, &SolverConfig::default(), false).unwrap();
        assert_eq!(matrix.len(), 6);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn selection_settings_change_fingerprint() {
        let (vocab, frequencies) = inputs();
        let config = SolverConfig::default();
        let other = SolverConfig {
            use_frequency: false,
            ..SolverConfig::default()
        };
        assert_ne!(
            cache_fingerprint(&vocab, &frequencies, &config),
            cache_fingerprint(&vocab, &frequencies, &other)
        );
    }
}
