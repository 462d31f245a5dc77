//! Batch auto-play
//!
//! Plays many puzzles in parallel against one shared outcome matrix and
//! aggregates the results.

use super::solve::solve_game;
use crate::config::SolverConfig;
use crate::core::{Game, GameRecord};
use crate::error::{CacheError, WordleError};
use crate::solver::OutcomeMatrix;
use crate::wordlists::Vocabulary;
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

/// Aggregate results of a batch
#[derive(Debug, Clone, PartialEq)]
pub struct BatchStatistics {
    pub games: usize,
    pub wins: usize,
    pub losses: usize,
    /// Mean guesses over won games
    pub average_guesses: f64,
    /// `distribution[k]` is the number of games won in `k` guesses
    pub distribution: Vec<usize>,
    pub elapsed: Duration,
}

impl BatchStatistics {
    /// Summarise finished games
    #[must_use]
    pub fn from_records(records: &[GameRecord], max_guesses: usize, elapsed: Duration) -> Self {
        let mut distribution = vec![0; max_guesses + 1];
        let mut total_guesses = 0;

        for record in records.iter().filter(|r| r.won) {
            if let Some(slot) = distribution.get_mut(record.guesses) {
                *slot += 1;
            }
            total_guesses += record.guesses;
        }

        let wins = records.iter().filter(|r| r.won).count();
        let average_guesses = if wins > 0 {
            total_guesses as f64 / wins as f64
        } else {
            0.0
        };

        Self {
            games: records.len(),
            wins,
            losses: records.len() - wins,
            average_guesses,
            distribution,
            elapsed,
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64 * 100.0
        }
    }

    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 { self.games as f64 / secs } else { 0.0 }
    }
}

fn progress_bar(len: usize, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len as u64);
    if let Ok(style) =
        ProgressStyle::default_bar().template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {per_sec}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

fn play_one(
    vocab: &Vocabulary,
    matrix: &OutcomeMatrix,
    config: &SolverConfig,
    puzzle: usize,
) -> Result<GameRecord, WordleError> {
    let mut game = Game::for_puzzle(vocab, puzzle)?.with_max_guesses(config.max_guesses);

    match solve_game(&mut game, matrix, config) {
        Ok(result) => Ok(result.record),
        Err(WordleError::ExhaustedCandidates) => {
            warn!("puzzle {puzzle}: no candidates left after {} guesses", game.guesses().len());
            Ok(game.record())
        }
        Err(err) => Err(err),
    }
}

/// Solve every listed puzzle in parallel
///
/// Games share `matrix` read-only and have no other shared state; records
/// come back in the order of `puzzles`. A game whose candidates run out is
/// recorded as lost.
///
/// # Errors
///
/// Returns `WordleError::PuzzleOutOfRange` for an unknown puzzle number.
pub fn auto_play(
    vocab: &Vocabulary,
    matrix: &OutcomeMatrix,
    config: &SolverConfig,
    puzzles: &[usize],
    show_progress: bool,
) -> Result<(Vec<GameRecord>, BatchStatistics), WordleError> {
    info!("auto-playing {} puzzles", puzzles.len());
    let start = Instant::now();
    let pb = progress_bar(puzzles.len(), show_progress);

    let records = puzzles
        .par_iter()
        .map(|&puzzle| {
            let record = play_one(vocab, matrix, config, puzzle);
            pb.inc(1);
            record
        })
        .collect::<Result<Vec<_>, _>>()?;

    pb.finish_and_clear();
    let stats = BatchStatistics::from_records(&records, config.max_guesses, start.elapsed());
    info!(
        "{} of {} won, {:.3} average guesses",
        stats.wins, stats.games, stats.average_guesses
    );

    Ok((records, stats))
}

/// Write batch records as pretty JSON
///
/// # Errors
///
/// Returns `CacheError::Io` or `CacheError::Json` if writing fails.
pub fn save_records(path: &Path, records: &[GameRecord]) -> Result<(), CacheError> {
    let io_error = |source| CacheError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|source| CacheError::Json {
        origin: path.display().to_string(),
        source,
    })?;
    writer.flush().map_err(io_error)
}
