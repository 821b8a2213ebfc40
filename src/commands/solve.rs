//! Solve simulation
//!
//! Plays a game against a known secret word: every guess is scored with
//! [`Pattern::score`] and fed to a [`GameSession`], and the next guess is
//! always the most frequent remaining candidate.

use crate::core::{Pattern, Word};
use crate::corpus::Corpus;
use crate::error::SessionError;
use crate::session::{GameSession, SessionState};

/// Default number of guesses allowed per game
pub const DEFAULT_MAX_GUESSES: usize = 6;

/// Configuration for solving a word
pub struct SolveConfig {
    pub secret: String,
    /// Opening guess; the most frequent word of the right length when `None`
    pub first_guess: Option<String>,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            first_guess: None,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }

    #[must_use]
    pub fn with_first_guess(mut self, first_guess: Option<String>) -> Self {
        self.first_guess = first_guess;
        self
    }
}

/// Result of solving a word
#[derive(Debug, Clone)]
pub struct SolveResult {
    pub secret: String,
    pub success: bool,
    pub guesses: Vec<GuessStep>,
}

/// A single guess in the solution path
#[derive(Debug, Clone)]
pub struct GuessStep {
    pub word: String,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Simulate a game against `config.secret`
///
/// The secret does not have to be in the corpus, but then the game can only
/// end in failure.
///
/// # Errors
/// - `SessionError::Word` if the secret or first guess is not Hangul
/// - `SessionError::WordLengthMismatch` if the first guess length differs from
///   the secret's
pub fn solve_word(
    config: &SolveConfig,
    corpus: &Corpus,
    fallback: Option<&Corpus>,
) -> Result<SolveResult, SessionError> {
    let secret = Word::new(config.secret.as_str())?;
    let first_guess = config
        .first_guess
        .as_deref()
        .map(Word::new)
        .transpose()?;
    if let Some(first) = &first_guess
        && first.len() != secret.len()
    {
        return Err(SessionError::WordLengthMismatch {
            expected: secret.len(),
            actual: first.len(),
        });
    }

    let mut session = GameSession::new(corpus);
    if let Some(fallback) = fallback {
        session = session.with_fallback(fallback);
    }

    let mut guesses = Vec::new();
    let mut success = false;

    for _ in 0..config.max_guesses {
        let state = session.state();
        let (candidates_before, guess) = if state == SessionState::Empty {
            let pool = corpus.words_of_length(secret.len());
            (pool.len(), first_guess.as_ref().or_else(|| pool.first()))
        } else {
            let candidates = session.candidates();
            (candidates.len(), candidates.first())
        };
        let Some(guess) = guess else {
            break;
        };

        let pattern = Pattern::score(guess.jamo(), secret.jamo());
        let candidates_after = if state.is_over() {
            // The sole remaining candidate is being played
            candidates_before
        } else {
            session.add_turn(guess.text(), pattern.clone())?.len()
        };
        log::debug!("Guessed {guess} for {secret}: {pattern}, {candidates_after} left");

        let solved = pattern.is_perfect();
        guesses.push(GuessStep {
            word: guess.text().to_string(),
            pattern,
            candidates_before,
            candidates_after,
        });

        if solved {
            success = true;
            break;
        }
        if state.is_over() || session.state() == SessionState::Exhausted {
            break;
        }
    }

    Ok(SolveResult {
        secret: config.secret.clone(),
        success,
        guesses,
    })
}
