//! Command implementations
//!
//! Interactive commands read from any `BufRead` and write to any `Write` so
//! they can be driven by tests as well as a terminal.

pub mod assist;
pub mod auto_play;
pub mod build_cache;
pub mod play;
pub mod solve;

pub use assist::run_assist;
pub use auto_play::{BatchStatistics, auto_play, save_records};
pub use build_cache::{Prepared, load_inputs, prepare};
pub use play::play_game;
pub use solve::{GuessStep, SolveResult, solve_game};

use std::io::{self, BufRead, Write};

/// Print a prompt and read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, text: &str) -> io::Result<Option<String>> {
    write!(out, "{text}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
