//! Display functions for command results

use super::formatters::{create_progress_bar, hint_row};
use crate::commands::{BatchStatistics, SolveResult};
use colored::Colorize;

/// Print the result of solving a game
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let record = &result.record;

    println!("\n{}", "─".repeat(60).cyan());
    match record.puzzle {
        Some(puzzle) => println!(
            "Solving Wordle {puzzle}: {}",
            record.solution.to_uppercase().bright_yellow().bold()
        ),
        None => println!("Solving: {}", record.solution.to_uppercase().bright_yellow().bold()),
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!("\nTurn {}: {}  {}", i + 1, hint_row(&step.word, &step.hint), step.hint.to_emoji());

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if let Some(entropy) = step.entropy {
                println!("  Entropy:    {entropy:.3} bits");
                if let Some(expected) = step.expected_remaining {
                    println!("  Expected:   {expected:.1} candidates");
                }

                // Information actually gained
                if step.candidates_after > 0 {
                    let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                    println!(
                        "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                        reduction.log2()
                    );
                }
            }
        }
    }

    println!();
    if result.success() {
        println!(
            "{}",
            format!("Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("Failed to solve in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print aggregate statistics of an auto-play batch
pub fn print_batch_statistics(stats: &BatchStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "AUTO-PLAY RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games);
    println!(
        "   Won:              {} {}",
        stats.wins,
        format!("({:.1}%)", stats.win_rate()).green()
    );
    if stats.losses > 0 {
        println!("   Lost:             {}", stats.losses.to_string().red());
    }
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );
    println!("   Time taken:       {:.2}s", stats.elapsed.as_secs_f64());
    println!("   Games/second:     {:.1}", stats.games_per_second());

    println!("\n{}", "Distribution:".bright_cyan().bold());
    let max_count = stats.distribution.iter().copied().max().unwrap_or(0);
    for (guesses, &count) in stats.distribution.iter().enumerate().skip(1) {
        let pct = if stats.games > 0 {
            count as f64 / stats.games as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guesses}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
    if stats.losses > 0 {
        println!("   X: {:>46} ", stats.losses.to_string().red());
    }
}
