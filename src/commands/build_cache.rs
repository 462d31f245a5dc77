//! Input loading and outcome matrix preparation
//!
//! Every command that needs the solver goes through [`prepare`], so the
//! matrix is loaded from its cache when possible and rebuilt otherwise.

use crate::config::{DataPaths, SolverConfig};
use crate::error::WordleError;
use crate::solver::{OutcomeMatrix, cache};
use crate::wordlists::loader::{load_frequencies, load_vocabulary};
use crate::wordlists::{FrequencyTable, Vocabulary};

/// Word list and frequencies named by `paths`
///
/// # Errors
///
/// Returns `WordleError::Cache` if either file is missing or malformed, and
/// `WordleError::NoSolutions` for a word list without solutions.
pub fn load_inputs(paths: &DataPaths) -> Result<(Vocabulary, FrequencyTable), WordleError> {
    let vocab = load_vocabulary(&paths.words)?;
    if vocab.solutions().is_empty() {
        return Err(WordleError::NoSolutions);
    }
    let frequencies = load_frequencies(&paths.frequencies)?;
    Ok((vocab, frequencies))
}

/// Loaded inputs together with a matching outcome matrix
#[derive(Debug)]
pub struct Prepared {
    pub vocab: Vocabulary,
    pub frequencies: FrequencyTable,
    pub matrix: OutcomeMatrix,
}

/// Load inputs and the persisted matrix, building it if absent or stale
///
/// `force` rebuilds the matrix unconditionally.
///
/// # Errors
///
/// Returns `WordleError::Cache` if inputs cannot be read or the matrix cannot
/// be built or written.
pub fn prepare(paths: &DataPaths, config: &SolverConfig, force: bool) -> Result<Prepared, WordleError> {
    let (vocab, frequencies) = load_inputs(paths)?;
    let matrix = cache::load_or_build(&paths.cache, &vocab, &frequencies, config, force)?;
    Ok(Prepared {
        vocab,
        frequencies,
        matrix,
    })
}
