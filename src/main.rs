//! Wordle Autoplay - CLI
//!
//! Play Wordle in the terminal, let the solver play, or have it help with a
//! game played elsewhere.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::info;
use std::io;
use std::path::PathBuf;
use wordle_autoplay::{
    commands::{auto_play, load_inputs, play_game, prepare, run_assist, save_records, solve_game},
    config::{DataPaths, SolverConfig},
    core::{Game, Word, todays_puzzle},
    output::{print_batch_statistics, print_solve_result},
    wordlists::{FrequencyTable, Vocabulary},
};

#[derive(Parser)]
#[command(
    name = "wordle_autoplay",
    about = "Wordle simulator and entropy-maximizing solver",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list JSON with `solutions` and `other_valid_words`
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Word frequencies (`.json` object or `word,count` CSV)
    #[arg(long, global = true)]
    frequencies: Option<PathBuf>,

    /// Persisted outcome matrix
    #[arg(long, global = true)]
    cache: Option<PathBuf>,

    /// Words kept in the outcome matrix
    #[arg(long, global = true)]
    max_vocab: Option<usize>,

    /// Fraction of the entropy range treated as a tie
    #[arg(long, global = true)]
    top_band: Option<f64>,

    /// Guesses allowed per game
    #[arg(long, global = true)]
    max_guesses: Option<usize>,

    /// Ignore word frequency when breaking ties
    #[arg(long, global = true)]
    no_frequency: bool,

    /// Treat every valid word as a possible answer, not just solutions
    #[arg(long, global = true)]
    all_candidates: bool,

    /// Debug logging and per-guess details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game yourself (default)
    Play {
        /// Puzzle number (default: today's)
        #[arg(long, conflicts_with_all = ["random", "answer"])]
        puzzle: Option<usize>,

        /// Random solution, weighted by word frequency
        #[arg(long, conflicts_with = "answer")]
        random: bool,

        /// Explicit solution
        #[arg(long)]
        answer: Option<String>,
    },

    /// Let the solver play one game
    Solve {
        /// Puzzle number (default: today's)
        #[arg(long, conflicts_with = "answer")]
        puzzle: Option<usize>,

        /// Explicit solution
        #[arg(long)]
        answer: Option<String>,
    },

    /// Get suggestions for a game played elsewhere
    Assist,

    /// Solve many puzzles in parallel and report statistics
    AutoPlay {
        /// Number of puzzles (default: all from the starting puzzle)
        #[arg(short = 'n', long)]
        games: Option<usize>,

        /// Worker threads (default: one per core)
        #[arg(short, long)]
        threads: Option<usize>,

        /// First puzzle number
        #[arg(long, default_value_t = 0)]
        puzzle: usize,

        /// Where to write per-game records
        #[arg(long)]
        results: Option<PathBuf>,

        /// Skip writing per-game records
        #[arg(long)]
        no_save: bool,
    },

    /// Build the outcome matrix cache
    BuildCache {
        /// Rebuild even if the cache is current
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    fn paths(&self) -> DataPaths {
        let defaults = DataPaths::default();
        DataPaths {
            words: self.words.clone().unwrap_or(defaults.words),
            frequencies: self.frequencies.clone().unwrap_or(defaults.frequencies),
            cache: self.cache.clone().unwrap_or(defaults.cache),
            results: defaults.results,
        }
    }

    fn solver_config(&self) -> Result<SolverConfig> {
        let defaults = SolverConfig::default();
        let config = SolverConfig {
            max_guesses: self.max_guesses.unwrap_or(defaults.max_guesses),
            max_vocab_size: self.max_vocab.unwrap_or(defaults.max_vocab_size),
            top_band: self.top_band.unwrap_or(defaults.top_band),
            use_frequency: !self.no_frequency,
            restrict_to_solutions: !self.all_candidates,
        };

        if !(0.0..=1.0).contains(&config.top_band) {
            bail!("--top-band must be between 0 and 1, got {}", config.top_band);
        }
        if config.max_guesses == 0 {
            bail!("--max-guesses must be at least 1");
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let paths = cli.paths();
    let config = cli.solver_config()?;
    let command = cli.command.unwrap_or(Commands::Play {
        puzzle: None,
        random: false,
        answer: None,
    });

    match command {
        Commands::Play {
            puzzle,
            random,
            answer,
        } => run_play_command(&paths, &config, puzzle, random, answer.as_deref()),
        Commands::Solve { puzzle, answer } => {
            run_solve_command(&paths, &config, puzzle, answer.as_deref(), cli.verbose)
        }
        Commands::Assist => run_assist_command(&paths, &config),
        Commands::AutoPlay {
            games,
            threads,
            puzzle,
            results,
            no_save,
        } => {
            let results = (!no_save).then(|| results.unwrap_or_else(|| paths.results.clone()));
            run_auto_play_command(&paths, &config, games, threads, puzzle, results)
        }
        Commands::BuildCache { force } => run_build_cache_command(&paths, &config, force),
    }
}

/// Pick the game named by the CLI flags
fn choose_game<'v>(
    vocab: &'v Vocabulary,
    frequencies: &FrequencyTable,
    puzzle: Option<usize>,
    random: bool,
    answer: Option<&str>,
) -> Result<Game<'v>> {
    if let Some(answer) = answer {
        let word = Word::new(answer).with_context(|| format!("invalid answer '{answer}'"))?;
        return Ok(Game::new(vocab, word)?);
    }
    if random {
        return Ok(Game::random(vocab, frequencies, &mut rand::rng())?);
    }

    let puzzle = puzzle
        .or_else(todays_puzzle)
        .context("cannot determine today's puzzle; pass --puzzle")?;
    Game::for_puzzle(vocab, puzzle).with_context(|| format!("cannot start puzzle {puzzle}"))
}

fn run_play_command(
    paths: &DataPaths,
    config: &SolverConfig,
    puzzle: Option<usize>,
    random: bool,
    answer: Option<&str>,
) -> Result<()> {
    let (vocab, frequencies) = load_inputs(paths).context("failed to load word lists")?;
    let mut game =
        choose_game(&vocab, &frequencies, puzzle, random, answer)?.with_max_guesses(config.max_guesses);

    play_game(&mut game, &mut io::stdin().lock(), &mut io::stdout().lock())?;
    Ok(())
}

fn run_solve_command(
    paths: &DataPaths,
    config: &SolverConfig,
    puzzle: Option<usize>,
    answer: Option<&str>,
    verbose: bool,
) -> Result<()> {
    let prepared = prepare(paths, config, false).context("failed to prepare solver")?;
    let mut game = choose_game(&prepared.vocab, &prepared.frequencies, puzzle, false, answer)?
        .with_max_guesses(config.max_guesses);

    let result = solve_game(&mut game, &prepared.matrix, config)?;
    print_solve_result(&result, verbose);
    println!("\n{}", game.share_grid());
    Ok(())
}

fn run_assist_command(paths: &DataPaths, config: &SolverConfig) -> Result<()> {
    let prepared = prepare(paths, config, false).context("failed to prepare solver")?;
    run_assist(
        &prepared.vocab,
        &prepared.matrix,
        config,
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;
    Ok(())
}

fn run_auto_play_command(
    paths: &DataPaths,
    config: &SolverConfig,
    games: Option<usize>,
    threads: Option<usize>,
    start: usize,
    results: Option<PathBuf>,
) -> Result<()> {
    if let Some(threads) = threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure worker threads")?;
    }

    let prepared = prepare(paths, config, false).context("failed to prepare solver")?;
    let total = prepared.vocab.solutions().len();
    if start >= total {
        bail!("puzzle {start} is out of range ({total} solutions available)");
    }
    let end = games.map_or(total, |n| start.saturating_add(n).min(total));
    let puzzles: Vec<usize> = (start..end).collect();

    println!("Playing {} puzzles ({start}..{end})...", puzzles.len());
    let (records, stats) = auto_play(&prepared.vocab, &prepared.matrix, config, &puzzles, true)?;
    print_batch_statistics(&stats);

    if let Some(path) = results {
        save_records(&path, &records)
            .with_context(|| format!("failed to write results to {}", path.display()))?;
        info!("wrote {} records to {}", records.len(), path.display());
        println!("\nResults written to {}", path.display().to_string().bright_white());
    }
    Ok(())
}

fn run_build_cache_command(paths: &DataPaths, config: &SolverConfig, force: bool) -> Result<()> {
    let prepared = prepare(paths, config, force).context("failed to build outcome matrix")?;
    let matrix = &prepared.matrix;

    println!(
        "Outcome matrix: {} words ({} solutions) at {}",
        matrix.len(),
        matrix.solution_indices().len(),
        paths.cache.display()
    );
    if let Some(opening) = matrix.opening_guess() {
        println!("Opening guess:  {}", opening.to_uppercase().bright_yellow().bold());
    }
    Ok(())
}
