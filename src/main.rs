//! Hongdle Helper - CLI
//!
//! Korean Wordle solver aid with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hongdle::{
    commands::{
        SolveConfig, analyze, export_corpus, run_benchmark, run_simple, select_targets,
        solve_word,
    },
    config::GameConfig,
    corpus::{Corpus, LoadReport, loader::load_corpus, starting_words},
    output::{
        print_analysis_result, print_benchmark_result, print_solve_result, print_starters,
        print_statistics,
    },
    session::GameSession,
};
use rand::rngs::ThreadRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "hongdle",
    about = "Korean Wordle (Hongdle) helper: jamo decomposition and constraint filtering",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Primary word list (`word frequency` per line); embedded list by default
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Word list searched when the primary one has no candidate
    #[arg(long, global = true)]
    fallback: Option<PathBuf>,

    /// Shortest accepted word, in jamo
    #[arg(long, global = true)]
    min_jamo: Option<usize>,

    /// Longest accepted word, in jamo
    #[arg(long, global = true)]
    max_jamo: Option<usize>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-oriented, no TUI)
    Simple,

    /// Show how a word decomposes into jamo
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Simulate a game against a known secret word
    Solve {
        /// The secret word
        secret: String,

        /// Opening guess (default: most frequent candidate)
        #[arg(short, long)]
        first: Option<String>,

        /// Show candidate counts per turn
        #[arg(long)]
        details: bool,
    },

    /// Suggest opening words with no repeated jamo
    Starters {
        /// Word length in jamo; repeatable (default: every length)
        #[arg(short, long)]
        length: Vec<usize>,

        /// Suggestions per length
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,
    },

    /// Corpus statistics
    Stats {
        /// Also show jamo frequency by position for this length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Export the corpus as JSON
    Export {
        /// Output file
        path: PathBuf,

        /// Only words of this jamo length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Solve many corpus words in parallel
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Sample targets at random instead of taking the most frequent
        #[arg(short, long)]
        random: bool,

        /// Only words of this jamo length
        #[arg(short, long)]
        length: Option<usize>,

        /// Opening guess for targets of the same length
        #[arg(short, long)]
        first: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Config file values overridden by command-line flags
fn resolve_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(cli.config.as_deref())
        .with_context(|| format!("Failed to load config {:?}", cli.config))?;

    if let Some(min) = cli.min_jamo {
        config.min_jamo = min;
    }
    if let Some(max) = cli.max_jamo {
        config.max_jamo = max;
    }
    if cli.wordlist.is_some() {
        config.wordlist.clone_from(&cli.wordlist);
    }
    if cli.fallback.is_some() {
        config.fallback_wordlist.clone_from(&cli.fallback);
    }
    config.validate()?;
    Ok(config)
}

fn load_corpora(config: &GameConfig) -> Result<(Corpus, LoadReport, Option<Corpus>)> {
    let (primary, report) = load_corpus(config.wordlist.as_deref(), config.jamo_range())
        .context("Failed to load word list")?;

    let fallback = match &config.fallback_wordlist {
        Some(path) => {
            let (corpus, _) = load_corpus(Some(path.as_path()), config.jamo_range())
                .context("Failed to load fallback word list")?;
            Some(corpus)
        }
        None => None,
    };

    Ok((primary, report, fallback))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = resolve_config(&cli)?;
    let (corpus, report, fallback) = load_corpora(&config)?;

    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&corpus, fallback.as_ref(), config.display_limit),
        Commands::Simple => run_simple_command(&corpus, fallback.as_ref(), config.display_limit),
        Commands::Analyze { word } => {
            let result = analyze(&word, &corpus)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Solve {
            secret,
            first,
            details,
        } => {
            let solve_config = SolveConfig::new(secret).with_first_guess(first);
            let result = solve_word(&solve_config, &corpus, fallback.as_ref())?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Starters { length, limit } => {
            run_starters_command(&corpus, &length, limit);
            Ok(())
        }
        Commands::Stats { length } => {
            let positions =
                length.map(|length| (length, corpus.jamo_frequency_by_position(length)));
            print_statistics(
                &corpus.statistics(),
                &report,
                positions.as_ref().map(|(length, counts)| (*length, counts.as_slice())),
            );
            Ok(())
        }
        Commands::Export { path, length } => run_export_command(&corpus, &path, length),
        Commands::Benchmark {
            count,
            random,
            length,
            first,
        } => {
            run_benchmark_command(&corpus, count, random, length, first.as_deref());
            Ok(())
        }
    }
}

fn session<'a>(corpus: &'a Corpus, fallback: Option<&'a Corpus>) -> GameSession<'a> {
    let session = GameSession::new(corpus);
    match fallback {
        Some(fallback) => session.with_fallback(fallback),
        None => session,
    }
}

fn run_play_command(corpus: &Corpus, fallback: Option<&Corpus>, display_limit: usize) -> Result<()> {
    use hongdle::interactive::{App, run_tui};

    let app = App::new(session(corpus, fallback), display_limit);
    run_tui(app)
}

fn run_simple_command(
    corpus: &Corpus,
    fallback: Option<&Corpus>,
    display_limit: usize,
) -> Result<()> {
    let mut session = session(corpus, fallback);
    run_simple(&mut session, display_limit)
}

fn run_starters_command(corpus: &Corpus, lengths: &[usize], limit: usize) {
    let lengths: Vec<usize> = if lengths.is_empty() {
        corpus.lengths().collect()
    } else {
        lengths.to_vec()
    };

    for length in lengths {
        print_starters(length, &starting_words(corpus, length, limit));
    }
}

fn run_export_command(corpus: &Corpus, path: &Path, length: Option<usize>) -> Result<()> {
    let written = export_corpus(corpus, path, length)?;
    println!("Exported {written} words to {}", path.display());
    Ok(())
}

fn run_benchmark_command(
    corpus: &Corpus,
    count: usize,
    random: bool,
    length: Option<usize>,
    first_guess: Option<&str>,
) {
    let targets = if random {
        select_targets(corpus, length, count, Some(&mut rand::rng()))
    } else {
        select_targets::<ThreadRng>(corpus, length, count, None)
    };

    match first_guess {
        Some(word) => println!(
            "Running benchmark on {} words with first guess {word}...",
            targets.len()
        ),
        None => println!("Running benchmark on {} words...", targets.len()),
    }

    let result = run_benchmark(corpus, &targets, first_guess, true);
    print_benchmark_result(&result);
}
