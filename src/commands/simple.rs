//! Simple interactive CLI mode
//!
//! Line-oriented loop for playing alongside any Hongdle board: type the word
//! you guessed and the colors you got, and the remaining candidates are listed.

use crate::output::formatters::{candidate_lines, turn_tiles};
use crate::session::{CandidateSource, Candidates, GameSession, SessionState};
use anyhow::Result;
use std::io::{BufRead, Write};

/// One line of user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Guess { word: &'a str, pattern: &'a str },
    Undo,
    New,
    Summary,
    Help,
    Quit,
    Blank,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    /// Parse `word pattern` or a keyword
    ///
    /// # Examples
    /// ```
    /// use hongdle::commands::simple::Command;
    ///
    /// assert_eq!(
    ///     Command::parse("국군 YBBBBY"),
    ///     Command::Guess { word: "국군", pattern: "YBBBBY" }
    /// );
    /// assert_eq!(Command::parse(" undo "), Command::Undo);
    /// ```
    #[must_use]
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (None, _, _) => Self::Blank,
            (Some(word), Some(pattern), None) => Self::Guess { word, pattern },
            (Some(keyword), None, None) => match keyword.to_lowercase().as_str() {
                "undo" | "u" => Self::Undo,
                "new" | "n" | "reset" => Self::New,
                "summary" | "s" => Self::Summary,
                "help" | "h" | "?" => Self::Help,
                "quit" | "q" | "exit" => Self::Quit,
                _ => Self::Unknown(line),
            },
            _ => Self::Unknown(line),
        }
    }
}

const HELP: &str = "\
Enter the word you guessed and its feedback, e.g. `국군 YBBBBY`
  G/🟩 green (right jamo, right place)
  Y/🟨 yellow (right jamo, wrong place)
  B/⬛ black (no further occurrence)
Commands: undo, new, summary, help, quit";

/// Run the interactive loop on stdin/stdout
///
/// # Errors
/// Returns an error on terminal I/O failure.
pub fn run_simple(session: &mut GameSession<'_>, display_limit: usize) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_simple_with(session, display_limit, stdin.lock(), stdout.lock())
}

/// Run the interactive loop on any line source and sink
///
/// # Errors
/// Returns an error if reading or writing fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    session: &mut GameSession<'_>,
    display_limit: usize,
    input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Hongdle Helper - Simple Mode                 ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "{HELP}\n")?;

    let mut lines = input.lines();
    loop {
        write!(out, "turn {}> ", session.turns().len() + 1)?;
        out.flush()?;
        let Some(line) = lines.next().transpose()? else {
            break;
        };

        match Command::parse(&line) {
            Command::Blank => {}
            Command::Quit => break,
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Summary => writeln!(out, "{}", session.summary())?,
            Command::New => {
                session.reset();
                writeln!(out, "🔄 New game started")?;
            }
            Command::Undo => match session.undo() {
                Ok(candidates) => {
                    writeln!(out, "✓ Undone, back to turn {}", session.turns().len() + 1)?;
                    if session.state() != SessionState::Empty {
                        write_candidates(&mut out, &candidates, display_limit)?;
                    }
                }
                Err(err) => writeln!(out, "❌ {err}")?,
            },
            Command::Guess { word, pattern } => match session.add_turn_str(word, pattern) {
                Ok(candidates) => {
                    if let Some(turn) = session.turns().last() {
                        writeln!(out, "{}", turn_tiles(turn))?;
                    }
                    write_candidates(&mut out, &candidates, display_limit)?;
                    write_state(&mut out, session.state())?;
                }
                Err(err) => writeln!(out, "❌ {err}")?,
            },
            Command::Unknown(text) => {
                writeln!(out, "❌ Unrecognized input `{text}`; type `help` for usage")?;
            }
        }
    }

    writeln!(out, "\n👋 Thanks for playing!")?;
    Ok(())
}

fn write_candidates<W: Write>(out: &mut W, candidates: &Candidates<'_>, limit: usize) -> Result<()> {
    let source = match candidates.source() {
        CandidateSource::Primary => "",
        CandidateSource::Fallback => " (from fallback list)",
    };
    writeln!(out, "{} candidates{source}", candidates.len())?;
    for line in candidate_lines(candidates.words(), limit) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn write_state<W: Write>(out: &mut W, state: SessionState) -> Result<()> {
    match state {
        SessionState::Solved => writeln!(out, "🎉 Solved! Type `new` to play again")?,
        SessionState::Exhausted => writeln!(
            out,
            "No word fits this feedback. Type `undo` to fix a turn or `new` to start over"
        )?,
        SessionState::Empty | SessionState::Active => {}
    }
    Ok(())
}
