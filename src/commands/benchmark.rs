//! Benchmark command
//!
//! Runs the solve simulation over many corpus words in parallel. Each target
//! gets its own `GameSession`; the corpus is shared read-only.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::corpus::Corpus;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    /// Guesses over solved games only
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Solved games by number of guesses
    pub distribution: BTreeMap<usize, usize>,
    pub failures: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Pick benchmark targets: the first `count` corpus words, or a random sample
pub fn select_targets<'a, R: Rng + ?Sized>(
    corpus: &'a Corpus,
    length: Option<usize>,
    count: usize,
    rng: Option<&mut R>,
) -> Vec<&'a Word> {
    let pool: Vec<&Word> = match length {
        Some(length) => corpus.words_of_length(length).iter().collect(),
        None => corpus.iter().collect(),
    };

    match rng {
        Some(rng) => pool.choose_multiple(rng, count).copied().collect(),
        None => pool.into_iter().take(count).collect(),
    }
}

fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

/// Solve every target in parallel and aggregate the guess counts
///
/// `first_guess` is used as the opening guess for targets of the same length.
pub fn run_benchmark(
    corpus: &Corpus,
    targets: &[&Word],
    first_guess: Option<&str>,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();
    let pb = progress_bar(targets.len(), show_progress);

    let outcomes: Vec<(String, Option<usize>)> = targets
        .par_iter()
        .map(|target| {
            let opening = first_guess
                .filter(|guess| Word::new(*guess).is_ok_and(|w| w.len() == target.len()))
                .map(str::to_string);
            let config = SolveConfig::new(target.text().to_string()).with_first_guess(opening);
            let guesses = match solve_word(&config, corpus, None) {
                Ok(result) if result.success => Some(result.guesses.len()),
                Ok(_) => None,
                Err(err) => {
                    log::warn!("Could not simulate {target}: {err}");
                    None
                }
            };
            pb.inc(1);
            (target.text().to_string(), guesses)
        })
        .collect();
    pb.finish_with_message("Complete!");

    let mut distribution = BTreeMap::new();
    let mut failures = Vec::new();
    for (word, guesses) in outcomes {
        match guesses {
            Some(count) => *distribution.entry(count).or_insert(0) += 1,
            None => failures.push(word),
        }
    }

    let solved: usize = distribution.values().sum();
    let total_guesses: usize = distribution.iter().map(|(count, words)| count * words).sum();
    let duration = start.elapsed();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        total_guesses,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        failures,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}
