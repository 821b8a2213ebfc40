//! Display functions for command results

use super::formatters::{candidate_lines, create_progress_bar};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::core::{Jamo, Word, jamo_string};
use crate::corpus::{CorpusStatistics, LoadReport};
use colored::Colorize;
use std::collections::BTreeMap;

/// Print the result of a solve simulation
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.secret.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word,
            step.pattern.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved after {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print a word's decomposition
pub fn print_analysis_result(result: &AnalysisResult) {
    let analysis = &result.analysis;
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORD ANALYSIS:".bright_cyan().bold(),
        analysis.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Jamo:      {} ({})", analysis.jamo_string(), analysis.len());
    for syllable in &analysis.syllables {
        let mut line = format!("   {}  →  {}", syllable.syllable, jamo_string(&syllable.jamo));
        for (_, kind, atoms) in &syllable.expansions {
            line.push_str(&format!("   [{}: {}]", kind.label(), jamo_string(atoms)));
        }
        println!("{line}");
    }

    let playable = if analysis.playable {
        "yes".green()
    } else {
        "no (outside the accepted jamo range)".red()
    };
    println!("\n   Playable:  {playable}");

    match (result.frequency, result.rank) {
        (Some(frequency), Some(rank)) => println!(
            "   Corpus:    frequency {frequency}, rank {rank} of {} {}-jamo words",
            result.same_length,
            analysis.len()
        ),
        _ => println!("   Corpus:    {}", "not in word list".bright_black()),
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved);
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guesses, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guesses}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failures.is_empty() {
        println!(
            "\n❌ {} {}",
            "Not solved:".red().bold(),
            result.failures.join(", ")
        );
    }
}

/// Print corpus statistics
pub fn print_statistics(
    stats: &CorpusStatistics,
    report: &LoadReport,
    positions: Option<(usize, &[BTreeMap<Jamo, usize>])>,
) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CORPUS STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Total words:  {}", stats.total.to_string().bright_yellow().bold());
    println!("   Load:         {report}");
    println!();
    for (&length, &count) in &stats.by_length {
        let pct = if stats.total == 0 {
            0.0
        } else {
            count as f64 / stats.total as f64 * 100.0
        };
        let bar = create_progress_bar(pct, 100.0, 30);
        println!("   {length} jamo: {} {count:6} ({pct:5.1}%)", bar.green());
    }

    if let Some((length, positions)) = positions {
        print_position_frequency(length, positions);
    }
}

/// Most common jamo per position, highest count first
fn print_position_frequency(length: usize, positions: &[BTreeMap<Jamo, usize>]) {
    println!("\n{} ({length} jamo)", "Jamo by position".bright_cyan().bold());
    if positions.is_empty() {
        println!("   {}", "no words of this length".bright_black());
        return;
    }
    for (position, counts) in positions.iter().enumerate() {
        let mut ranked: Vec<_> = counts.iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(a.1).then(a.0.cmp(b.0)));
        let line = ranked
            .into_iter()
            .take(8)
            .map(|(jamo, count)| format!("{}{count}", jamo.to_string().bright_yellow()))
            .collect::<Vec<_>>()
            .join(" ");
        println!("   {:>2}: {line}", position + 1);
    }
}

/// Print starting-word suggestions for one length
pub fn print_starters(length: usize, words: &[&Word]) {
    println!("\n{} ({length} jamo)", "Starting words".bright_cyan().bold());
    if words.is_empty() {
        println!("   {}", "none".bright_black());
        return;
    }
    for line in candidate_lines(words, words.len()) {
        println!("{line}");
    }
}
