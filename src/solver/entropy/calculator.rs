//! Shannon entropy of outcome distributions
//!
//! Given a guess row of the outcome matrix and the current candidate columns,
//! computes the expected information gain of the guess.

use crate::core::OUTCOME_COUNT;
use crate::solver::OutcomeMatrix;

/// Comprehensive metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Histogram of outcome codes produced by `guess` across `candidates`
#[must_use]
pub fn outcome_counts(matrix: &OutcomeMatrix, guess: usize, candidates: &[usize]) -> [u32; OUTCOME_COUNT] {
    let row = matrix.row(guess);
    let mut counts = [0u32; OUTCOME_COUNT];
    for &candidate in candidates {
        counts[usize::from(row[candidate])] += 1;
    }
    counts
}

/// Calculate Shannon entropy from an outcome histogram
///
/// H = -Σ p * log₂(p)
///
/// # Properties
/// - Returns 0.0 for certain outcome (one code with p=1)
/// - Maximized for uniform distribution
/// - Always in range [0, log₂(n)] for n distinct codes
///
/// # Examples
/// ```
/// use wordle_autoplay::solver::entropy::shannon_entropy;
///
/// let uniform = [25, 25, 25, 25];
/// assert!((shannon_entropy(&uniform) - 2.0).abs() < 0.001); // log2(4) = 2 bits
/// ```
#[must_use]
pub fn shannon_entropy(counts: &[u32]) -> f64 {
    let total: f64 = counts.iter().map(|&c| f64::from(c)).sum();

    if total == 0.0 {
        return 0.0;
    }

    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = f64::from(count) / total;
            -p * p.log2()
        })
        .sum()
}

/// Entropy of `guess` over the candidate columns
#[inline]
#[must_use]
pub fn guess_entropy(matrix: &OutcomeMatrix, guess: usize, candidates: &[usize]) -> f64 {
    shannon_entropy(&outcome_counts(matrix, guess, candidates))
}

/// Calculate comprehensive metrics for a guess
///
/// Returns entropy, expected remaining candidates, and max partition size.
#[must_use]
pub fn calculate_metrics(matrix: &OutcomeMatrix, guess: usize, candidates: &[usize]) -> GuessMetrics {
    if candidates.is_empty() {
        return GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        };
    }

    let counts = outcome_counts(matrix, guess, candidates);
    let total = candidates.len() as f64;

    // Σ p * |partition|
    let expected_remaining = counts
        .iter()
        .map(|&c| {
            let size = f64::from(c);
            size * size / total
        })
        .sum();

    GuessMetrics {
        entropy: shannon_entropy(&counts),
        expected_remaining,
        max_partition: counts.iter().max().copied().unwrap_or(0) as usize,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::solver::Snapshot;

    fn matrix(list: &[&str]) -> OutcomeMatrix {
        let words: Vec<Word> = list.iter().map(|s| Word::new(s).unwrap()).collect();
        let n = words.len();
        OutcomeMatrix::build(Snapshot {
            words,
            frequencies: vec![1.0 / n as f64; n],
            is_solution: vec![true; n],
        })
        .unwrap()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        // 4 outcomes, each appears once = log2(4) = 2 bits
        let entropy = shannon_entropy(&[1, 1, 1, 1]);
        assert!((entropy - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let entropy = shannon_entropy(&[0, 10, 0]);
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_skewed_distribution() {
        assert!(shannon_entropy(&[25, 25, 25, 25]) > shannon_entropy(&[97, 1, 1, 1]));
    }

    #[test]
    fn shannon_entropy_bounds() {
        let entropy = shannon_entropy(&[10, 20, 30]);
        assert!(entropy >= 0.0);
        assert!(entropy <= 3f64.log2());
    }

    #[test]
    fn shannon_entropy_empty() {
        assert!(shannon_entropy(&[0; OUTCOME_COUNT]).abs() < f64::EPSILON);
    }

    #[test]
    fn distinct_outcomes_give_log2_n_bits() {
        // CRANE splits these four into four different hints
        let m = matrix(&["crane", "slate", "irate", "trace", "raise"]);
        let crane = m.index_of(&Word::new("crane").unwrap()).unwrap();
        let candidates: Vec<usize> = ["slate", "irate", "trace", "raise"]
            .iter()
            .map(|s| m.index_of(&Word::new(s).unwrap()).unwrap())
            .collect();

        let counts = outcome_counts(&m, crane, &candidates);
        assert_eq!(counts.iter().sum::<u32>(), 4);
        let distinct = counts.iter().filter(|&&c| c > 0).count();
        assert!((guess_entropy(&m, crane, &candidates) - (distinct as f64).log2()).abs() < 1e-9);
    }

    #[test]
    fn repeated_letter_guess_gains_nothing_on_identical_outcomes() {
        let m = matrix(&["zzzzz", "slate", "irate", "grate"]);
        let candidates = [1, 2, 3];
        // ZZZZZ is all Black against every candidate
        assert!(guess_entropy(&m, 0, &candidates).abs() < f64::EPSILON);
        assert_eq!(calculate_metrics(&m, 0, &candidates).max_partition, 3);
    }

    #[test]
    fn metrics_for_perfect_split() {
        let m = matrix(&["crane", "trace"]);
        let metrics = calculate_metrics(&m, 0, &[0, 1]);

        assert!((metrics.entropy - 1.0).abs() < 1e-9);
        assert!((metrics.expected_remaining - 1.0).abs() < 1e-9);
        assert_eq!(metrics.max_partition, 1);
    }

    #[test]
    fn metrics_on_empty_candidates() {
        let m = matrix(&["crane"]);
        let metrics = calculate_metrics(&m, 0, &[]);
        assert_eq!(metrics.max_partition, 0);
        assert!(metrics.entropy.abs() < f64::EPSILON);
    }
}
