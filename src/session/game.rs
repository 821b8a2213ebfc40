//! Game session: turn history, constraints and candidate narrowing
//!
//! A session borrows its corpora read-only, so many sessions can share one
//! corpus while each owns its turns and constraint set. Every operation
//! either succeeds completely or leaves the session as it was.

use super::SessionState;
use crate::constraints::ConstraintSet;
use crate::core::{Pattern, Turn, Word};
use crate::corpus::Corpus;
use crate::error::SessionError;
use std::fmt;

/// Which corpus the current candidates were drawn from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CandidateSource {
    #[default]
    Primary,
    /// The primary corpus had no match and the fallback corpus was searched
    Fallback,
}

/// Candidate words in corpus order (frequency descending)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates<'a> {
    words: Vec<&'a Word>,
    source: CandidateSource,
}

impl<'a> Candidates<'a> {
    #[must_use]
    pub fn words(&self) -> &[&'a Word] {
        &self.words
    }

    #[must_use]
    pub const fn source(&self) -> CandidateSource {
        self.source
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Most frequent candidate
    #[must_use]
    pub fn first(&self) -> Option<&'a Word> {
        self.words.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Word> + '_ {
        self.words.iter().copied()
    }

    /// Candidate texts, for display and comparisons
    #[must_use]
    pub fn texts(&self) -> Vec<&'a str> {
        self.words.iter().map(|word| word.text()).collect()
    }
}

/// One game against an unknown secret word
#[derive(Debug, Clone)]
pub struct GameSession<'a> {
    primary: &'a Corpus,
    fallback: Option<&'a Corpus>,
    turns: Vec<Turn>,
    constraints: ConstraintSet,
    word_length: Option<usize>,
    state: SessionState,
}

impl<'a> GameSession<'a> {
    #[must_use]
    pub fn new(primary: &'a Corpus) -> Self {
        Self {
            primary,
            fallback: None,
            turns: Vec::new(),
            constraints: ConstraintSet::new(),
            word_length: None,
            state: SessionState::Empty,
        }
    }

    /// Search `fallback` whenever the primary corpus has no candidate
    #[must_use]
    pub fn with_fallback(mut self, fallback: &'a Corpus) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Record a scored guess and narrow the candidates
    ///
    /// The first turn fixes the session's word length. The turn is validated
    /// and merged into a new constraint set before anything is committed.
    ///
    /// # Errors
    /// - `SessionError::GameOver` when the session is solved or exhausted
    /// - `SessionError::Word` when the guess is not Hangul
    /// - `SessionError::LengthMismatch` when the pattern does not cover every jamo
    /// - `SessionError::WordLengthMismatch` when the guess length differs from
    ///   the session's
    /// - `SessionError::Constraint` when the turn contradicts earlier turns
    ///
    /// # Examples
    /// ```
    /// use hongdle::corpus::CorpusBuilder;
    /// use hongdle::session::{GameSession, SessionState};
    ///
    /// let mut builder = CorpusBuilder::default();
    /// for (word, frequency) in [("군인", 20), ("국어", 10), ("구름", 5)] {
    ///     builder.insert(word, frequency);
    /// }
    /// let corpus = builder.build();
    ///
    /// let mut session = GameSession::new(&corpus);
    /// let candidates = session.add_turn("국군", "GGBBBG".parse().unwrap()).unwrap();
    /// assert_eq!(candidates.texts(), ["군인"]);
    /// assert_eq!(session.state(), SessionState::Solved);
    /// ```
    pub fn add_turn(&mut self, word: &str, pattern: Pattern) -> Result<Candidates<'a>, SessionError> {
        if self.state.is_over() {
            return Err(SessionError::GameOver { state: self.state });
        }

        let turn = Turn::new(self.turns.len() + 1, word, pattern)?;
        if let Some(expected) = self.word_length
            && expected != turn.jamo().len()
        {
            return Err(SessionError::WordLengthMismatch {
                expected,
                actual: turn.jamo().len(),
            });
        }

        let constraints = self.constraints.merge(&turn).map_err(|err| {
            log::warn!("Rejected turn {turn}: {err}");
            err
        })?;

        log::debug!("Applied turn {turn}");
        self.word_length = Some(turn.jamo().len());
        self.constraints = constraints;
        self.turns.push(turn);

        let candidates = self.candidates();
        self.transition(SessionState::from_candidate_count(candidates.len()));
        Ok(candidates)
    }

    /// Parse a pattern in G/Y/B or emoji notation, then [`add_turn`](Self::add_turn)
    ///
    /// # Errors
    /// `SessionError::Pattern` for an unreadable pattern, otherwise as `add_turn`.
    pub fn add_turn_str(&mut self, word: &str, pattern: &str) -> Result<Candidates<'a>, SessionError> {
        self.add_turn(word, pattern.parse()?)
    }

    /// Remove the last turn and rebuild the constraints from the rest
    ///
    /// # Errors
    /// Returns `SessionError::NothingToUndo` when there are no turns.
    pub fn undo(&mut self) -> Result<Candidates<'a>, SessionError> {
        let Some(removed) = self.turns.pop() else {
            return Err(SessionError::NothingToUndo);
        };

        // Every remaining turn merged cleanly before, in this same order
        let constraints = match ConstraintSet::from_turns(&self.turns) {
            Ok(constraints) => constraints,
            Err(err) => {
                self.turns.push(removed);
                return Err(err.into());
            }
        };
        log::debug!("Undid turn {removed}");
        self.constraints = constraints;

        if self.turns.is_empty() {
            self.word_length = None;
            self.transition(SessionState::Empty);
            return Ok(Candidates::default());
        }

        let candidates = self.candidates();
        self.transition(SessionState::from_candidate_count(candidates.len()));
        Ok(candidates)
    }

    /// Start over with no turns
    pub fn reset(&mut self) {
        self.turns.clear();
        self.constraints = ConstraintSet::new();
        self.word_length = None;
        self.transition(SessionState::Empty);
    }

    /// Words consistent with every turn so far, most frequent first
    ///
    /// Empty before the first turn. The fallback corpus is only searched when
    /// the primary corpus yields nothing.
    #[must_use]
    pub fn candidates(&self) -> Candidates<'a> {
        let Some(length) = self.word_length else {
            return Candidates::default();
        };

        let words = self.filter(self.primary, length);
        if !words.is_empty() {
            return Candidates {
                words,
                source: CandidateSource::Primary,
            };
        }

        match self.fallback {
            Some(fallback) => {
                let words = self.filter(fallback, length);
                log::info!("No primary candidates, fallback corpus has {}", words.len());
                Candidates {
                    words,
                    source: CandidateSource::Fallback,
                }
            }
            None => Candidates::default(),
        }
    }

    fn filter(&self, corpus: &'a Corpus, length: usize) -> Vec<&'a Word> {
        corpus
            .words_of_length(length)
            .iter()
            .filter(|word| self.constraints.matches(word.jamo()))
            .collect()
    }

    fn transition(&mut self, next: SessionState) {
        if next != self.state {
            log::info!("Session {} -> {next}", self.state);
            self.state = next;
        }
    }

    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// Jamo count fixed by the first turn
    #[must_use]
    pub const fn word_length(&self) -> Option<usize> {
        self.word_length
    }

    #[must_use]
    pub const fn primary(&self) -> &'a Corpus {
        self.primary
    }

    #[must_use]
    pub const fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Human-readable turn history and accumulated constraints
    #[must_use]
    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for GameSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "State: {}", self.state)?;
        if let Some(length) = self.word_length {
            writeln!(f, "Word length: {length} jamo")?;
        }

        if self.turns.is_empty() {
            return writeln!(f, "No turns yet");
        }

        writeln!(f, "Turns:")?;
        for turn in &self.turns {
            writeln!(f, "  {turn}")?;
        }
        writeln!(f, "{}", self.constraints)?;

        let candidates = self.candidates();
        write!(f, "Candidates: {}", candidates.len())?;
        if candidates.source() == CandidateSource::Fallback {
            write!(f, " (fallback)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::CorpusBuilder;
    use crate::error::ConstraintError;

    fn corpus(entries: &[(&str, u64)]) -> Corpus {
        let mut builder = CorpusBuilder::default();
        for &(word, frequency) in entries {
            builder.insert(word, frequency);
        }
        builder.build()
    }

    /// Six-jamo words only
    fn six_jamo() -> Corpus {
        corpus(&[
            ("문제", 7730),
            ("경제", 4320),
            ("방법", 3000),
            ("여행", 2900),
            ("국군", 2150),
            ("군인", 2110),
        ])
    }

    #[test]
    fn new_session_is_empty() {
        let corpus = six_jamo();
        let session = GameSession::new(&corpus);
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.candidates().is_empty());
        assert_eq!(session.word_length(), None);
        assert!(session.summary().contains("No turns yet"));
    }

    #[test]
    fn first_turn_fixes_word_length() {
        let corpus = six_jamo();
        let mut session = GameSession::new(&corpus);
        session.add_turn_str("국군", "BBBBBB").unwrap();
        assert_eq!(session.word_length(), Some(6));

        let result = session.add_turn_str("사람", "BBBBB");
        assert_eq!(
            result,
            Err(SessionError::WordLengthMismatch {
                expected: 6,
                actual: 5
            })
        );
        assert_eq!(session.turns().len(), 1);
    }

    #[test]
    fn invalid_input_leaves_session_unchanged() {
        let corpus = six_jamo();
        let mut session = GameSession::new(&corpus);

        assert!(matches!(
            session.add_turn_str("문제", "BBBBB"),
            Err(SessionError::LengthMismatch { .. })
        ));
        assert!(matches!(
            session.add_turn_str("문제", "BBBBBX"),
            Err(SessionError::Pattern(_))
        ));
        assert!(matches!(
            session.add_turn_str("문제!", "BBBBBB"),
            Err(SessionError::Word(_))
        ));
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.turns().is_empty());
        assert_eq!(session.word_length(), None);
    }

    #[test]
    fn narrowing_to_several_stays_active() {
        let corpus = six_jamo();
        let mut session = GameSession::new(&corpus);
        // No ㄱ, ㅜ or ㄴ
        let candidates = session.add_turn_str("국군", "BBBBBB").unwrap();
        assert_eq!(candidates.texts(), ["방법", "여행"]);
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn narrowing_to_one_solves() {
        let corpus = six_jamo();
        let mut session = GameSession::new(&corpus);
        // 국군 scored against 군인
        let candidates = session.add_turn_str("국군", "GGBBBG").unwrap();
        assert_eq!(candidates.texts(), ["군인"]);
        assert_eq!(session.state(), SessionState::Solved);
    }

    #[test]
    fn narrowing_to_zero_exhausts() {
        let corpus = six_jamo();
        let mut session = GameSession::new(&corpus);
        // ㅜ second with no ㄱ or ㄴ: nothing in this corpus
        let candidates = session.add_turn_str("국군", "BGBBBB").unwrap();
        assert!(candidates.is_empty());
        assert_eq!(session.state(), SessionState::Exhausted);
    }

    #[test]
    fn game_over_rejects_turns_until_undo() {
        let corpus = six_jamo();
        let mut session = GameSession::new(&corpus);
        session.add_turn_str("국군", "BGBBBB").unwrap();

        assert_eq!(
            session.add_turn_str("문제", "BBBBBB"),
            Err(SessionError::GameOver {
                state: SessionState::Exhausted
            })
        );

        session.undo().unwrap();
        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.add_turn_str("문제", "BBBBBB").is_ok());
    }

    #[test]
    fn undo_on_empty_session() {
        let corpus = six_jamo();
        let mut session = GameSession::new(&corpus);
        assert_eq!(session.undo(), Err(SessionError::NothingToUndo));
    }

    #[test]
    fn undo_restores_previous_turn_state() {
        let corpus = six_jamo();
        let mut session = GameSession::new(&corpus);
        let first = session.add_turn_str("국군", "BBBBBB").unwrap();
        let constraints = session.constraints().clone();

        // 군인 scored against 방법
        let second = session.add_turn_str("군인", "BBBYBB").unwrap();
        assert_eq!(second.texts(), ["방법"]);
        assert_eq!(session.state(), SessionState::Solved);

        let undone = session.undo().unwrap();
        assert_eq!(undone, first);
        assert_eq!(session.constraints(), &constraints);
        assert_eq!(session.state(), SessionState::Active);
        assert_eq!(session.turns().len(), 1);
    }

    #[test]
    fn contradictory_turn_is_rejected() {
        let corpus = six_jamo();
        let mut session = GameSession::new(&corpus);
        session.add_turn_str("국군", "BBBBBB").unwrap();
        let before = session.constraints().clone();

        // ㄱ was proven absent, now yellow
        let result = session.add_turn_str("군인", "YBBBBB");
        assert_eq!(
            result,
            Err(SessionError::Constraint(ConstraintError::PresenceConflict {
                jamo: crate::core::Jamo::G
            }))
        );
        assert_eq!(session.constraints(), &before);
        assert_eq!(session.turns().len(), 1);
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn reset_clears_everything() {
        let corpus = six_jamo();
        let mut session = GameSession::new(&corpus);
        session.add_turn_str("국군", "GGBBBG").unwrap();
        session.reset();

        assert_eq!(session.state(), SessionState::Empty);
        assert!(session.turns().is_empty());
        assert!(session.constraints().is_empty());
        assert!(session.candidates().is_empty());
    }

    #[test]
    fn fallback_used_only_when_primary_is_empty() {
        let primary = corpus(&[("문제", 7730)]);
        let fallback = corpus(&[("군인", 2110), ("방법", 3000), ("여행", 2900)]);
        let mut session = GameSession::new(&primary).with_fallback(&fallback);
        assert!(session.has_fallback());

        // ㅜ absent rules out 문제
        let candidates = session.add_turn_str("국군", "BBBBBB").unwrap();
        assert_eq!(candidates.source(), CandidateSource::Fallback);
        assert_eq!(candidates.texts(), ["방법", "여행"]);
        assert_eq!(session.state(), SessionState::Active);
    }

    #[test]
    fn primary_preferred_over_fallback() {
        let primary = corpus(&[("문제", 7730)]);
        let fallback = corpus(&[("여행", 2900)]);
        let mut session = GameSession::new(&primary).with_fallback(&fallback);

        // 국군 scored against 문제
        let candidates = session.add_turn_str("국군", "BGBBBY").unwrap();
        assert_eq!(candidates.source(), CandidateSource::Primary);
        assert_eq!(candidates.texts(), ["문제"]);
    }

    #[test]
    fn summary_lists_turns_and_constraints() {
        let corpus = six_jamo();
        let mut session = GameSession::new(&corpus);
        session.add_turn_str("국군", "BBBBBB").unwrap();
        let summary = session.summary();

        assert!(summary.contains("State: active"));
        assert!(summary.contains("Word length: 6 jamo"));
        assert!(summary.contains("1: 국군 → BBBBBB"));
        assert!(summary.contains("Absent:       ㄱ ㄴ ㅜ"));
        assert!(summary.ends_with("Candidates: 2"));
        assert_eq!(format!("{session}"), summary);
    }

    #[test]
    fn summary_of_new_session() {
        let corpus = six_jamo();
        let session = GameSession::new(&corpus);
        assert_eq!(session.summary(), "State: empty\nNo turns yet\n");
    }
}
