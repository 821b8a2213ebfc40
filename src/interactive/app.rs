//! TUI application state and logic

use crate::core::{Feedback, Turn, Word, decompose};
use crate::corpus::starting_words;
use crate::session::{Candidates, GameSession, SessionState};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;
const MAX_WORD_CHARS: usize = 8;

/// Application state
pub struct App<'a> {
    pub session: GameSession<'a>,
    pub candidates: Candidates<'a>,
    pub history: Vec<HistoryEntry>,
    pub input_mode: InputMode,
    pub word_buffer: String,
    /// Guess waiting for its feedback colors
    pub pending_word: Option<PendingWord>,
    pub pattern_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub display_limit: usize,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Typing the guessed word
    Word,
    /// Typing G/Y/B for each jamo of the pending word
    Feedback,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct PendingWord {
    pub text: String,
    pub jamo_count: usize,
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub turn: Turn,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(session: GameSession<'a>, display_limit: usize) -> Self {
        Self {
            session,
            candidates: Candidates::default(),
            history: Vec::new(),
            input_mode: InputMode::Word,
            word_buffer: String::new(),
            pending_word: None,
            pattern_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Type the word you guessed, then its colors.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "TAB fills in the suggested word".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            display_limit,
            should_quit: false,
        }
    }

    /// Word to play next: a starter before the first turn, then the most
    /// frequent candidate
    #[must_use]
    pub fn suggestion(&self) -> Option<&'a Word> {
        if self.session.turns().is_empty() {
            let corpus = self.session.primary();
            return corpus
                .lengths()
                .find_map(|length| starting_words(corpus, length, 1).first().copied());
        }
        self.candidates.first()
    }

    /// Words of the session's length in the primary corpus
    #[must_use]
    pub fn pool_size(&self) -> usize {
        self.session
            .word_length()
            .map_or(0, |length| self.session.primary().words_of_length(length).len())
    }

    pub fn submit_word(&mut self) {
        let text = self.word_buffer.trim().to_string();
        let jamo_count = match decompose(&text) {
            Ok(jamo) => jamo.len(),
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
                return;
            }
        };

        if let Some(expected) = self.session.word_length()
            && expected != jamo_count
        {
            self.add_message(
                &format!("This game uses {expected}-jamo words, {text} has {jamo_count}"),
                MessageStyle::Error,
            );
            return;
        }

        self.add_message(
            &format!("Enter the colors for {text} ({jamo_count} jamo)"),
            MessageStyle::Info,
        );
        self.pending_word = Some(PendingWord { text, jamo_count });
        self.pattern_buffer.clear();
        self.input_mode = InputMode::Feedback;
    }

    pub fn submit_feedback(&mut self) {
        let Some(pending) = self.pending_word.clone() else {
            self.input_mode = InputMode::Word;
            return;
        };

        let candidates_before = if self.session.turns().is_empty() {
            self.session.primary().words_of_length(pending.jamo_count).len()
        } else {
            self.candidates.len()
        };

        match self.session.add_turn_str(&pending.text, &self.pattern_buffer) {
            Ok(candidates) => {
                let candidates_after = candidates.len();
                self.candidates = candidates;
                if let Some(turn) = self.session.turns().last() {
                    self.history.push(HistoryEntry {
                        turn: turn.clone(),
                        candidates_before,
                        candidates_after,
                    });
                }
                self.pending_word = None;
                self.pattern_buffer.clear();
                self.word_buffer.clear();
                self.after_turn(candidates_after);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn after_turn(&mut self, remaining: usize) {
        match self.session.state() {
            SessionState::Solved => {
                self.stats.total_games += 1;
                self.stats.games_won += 1;
                self.input_mode = InputMode::GameOver;
                let answer = self.candidates.first().map_or("?", Word::text);
                let celebration = match self.history.len() {
                    1 => format!("🎯 {answer} on the first try!"),
                    2..=3 => format!("🔥 {answer} in {} turns!", self.history.len()),
                    turns => format!("🎉 {answer} after {turns} turns"),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new game or 'q' to quit", MessageStyle::Info);
            }
            SessionState::Exhausted => {
                self.stats.total_games += 1;
                self.input_mode = InputMode::GameOver;
                self.add_message(
                    "No word fits this feedback. Press 'u' to undo the last turn",
                    MessageStyle::Error,
                );
            }
            SessionState::Empty | SessionState::Active => {
                self.input_mode = InputMode::Word;
                self.add_message(&format!("{remaining} candidates remaining"), MessageStyle::Info);
            }
        }
    }

    pub fn undo_last(&mut self) {
        match self.session.undo() {
            Ok(candidates) => {
                self.candidates = candidates;
                self.history.pop();
                self.pending_word = None;
                self.pattern_buffer.clear();
                self.input_mode = if self.session.state().is_over() {
                    InputMode::GameOver
                } else {
                    InputMode::Word
                };
                self.add_message("Undone!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn new_game(&mut self) {
        self.session.reset();
        self.candidates = Candidates::default();
        self.history.clear();
        self.word_buffer.clear();
        self.pending_word = None;
        self.pattern_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Word;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn use_suggestion(&mut self) {
        match self.suggestion() {
            Some(word) => self.word_buffer = word.text().to_string(),
            None => self.add_message("No suggestion available", MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match (key.code, ctrl) {
            (KeyCode::Char('c'), true) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Char('u'), true) => {
                self.undo_last();
                return;
            }
            (KeyCode::Char('n'), true) => {
                self.new_game();
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                KeyCode::Char('u') => self.undo_last(),
                _ => {}
            },
            InputMode::Word => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.use_suggestion(),
                KeyCode::Char(c) => {
                    if !c.is_control() && self.word_buffer.chars().count() < MAX_WORD_CHARS {
                        self.word_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.word_buffer.pop();
                }
                KeyCode::Enter => self.submit_word(),
                _ => {}
            },
            InputMode::Feedback => match key.code {
                KeyCode::Esc => {
                    self.pending_word = None;
                    self.pattern_buffer.clear();
                    self.input_mode = InputMode::Word;
                    self.add_message("Cancelled feedback entry", MessageStyle::Info);
                }
                KeyCode::Char(c) => {
                    let limit = self.pending_word.as_ref().map_or(0, |p| p.jamo_count);
                    if let Some(feedback) = Feedback::from_symbol(c)
                        && self.pattern_buffer.chars().count() < limit
                    {
                        self.pattern_buffer.push(feedback.letter());
                    }
                }
                KeyCode::Backspace => {
                    self.pattern_buffer.pop();
                }
                KeyCode::Enter => self.submit_feedback(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("TUI loop failed: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Windows reports both press and release
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::corpus::loader::load_corpus;

    fn seed() -> Corpus {
        load_corpus(None, 5..=7).unwrap().0
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn suggestion_before_first_turn_is_a_starter() {
        let corpus = seed();
        let mut app = App::new(GameSession::new(&corpus), 10);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.word_buffer, "시간");
    }

    #[test]
    fn word_then_feedback_narrows_candidates() {
        let corpus = seed();
        let mut app = App::new(GameSession::new(&corpus), 10);

        type_text(&mut app, "사람");
        assert_eq!(app.input_mode, InputMode::Feedback);
        type_text(&mut app, "gbbgb");

        assert_eq!(app.input_mode, InputMode::Word);
        assert_eq!(app.candidates.len(), 3);
        assert_eq!(app.history.len(), 1);
        assert_eq!(app.history[0].candidates_before, 74);
        assert_eq!(app.history[0].candidates_after, 3);
    }

    #[test]
    fn feedback_input_is_capped_at_jamo_count() {
        let corpus = seed();
        let mut app = App::new(GameSession::new(&corpus), 10);
        type_text(&mut app, "사람");
        for c in "gbbgbggx".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.pattern_buffer, "GBBGB");
    }

    #[test]
    fn wrong_length_word_is_rejected() {
        let corpus = seed();
        let mut app = App::new(GameSession::new(&corpus), 10);
        type_text(&mut app, "사람");
        type_text(&mut app, "gbbgb");

        type_text(&mut app, "문제");
        assert_eq!(app.input_mode, InputMode::Word);
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains("5-jamo"));
    }

    #[test]
    fn solving_then_undo_and_new_game() {
        let corpus = seed();
        let mut app = App::new(GameSession::new(&corpus), 10);
        type_text(&mut app, "문제");
        type_text(&mut app, "BGGBBY");

        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.candidates.texts(), ["군인"]);

        press(&mut app, KeyCode::Char('u'));
        assert_eq!(app.input_mode, InputMode::Word);
        assert!(app.history.is_empty());
        assert!(app.candidates.is_empty());

        type_text(&mut app, "문제");
        type_text(&mut app, "BGGBBY");
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.session.state(), SessionState::Empty);
        assert!(app.history.is_empty());
    }

    #[test]
    fn escape_cancels_feedback_then_quits() {
        let corpus = seed();
        let mut app = App::new(GameSession::new(&corpus), 10);
        type_text(&mut app, "사람");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Word);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn invalid_word_reports_error() {
        let corpus = seed();
        let mut app = App::new(GameSession::new(&corpus), 10);
        type_text(&mut app, "abc");
        assert_eq!(app.input_mode, InputMode::Word);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }
}
