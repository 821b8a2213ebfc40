//! TUI rendering with ratatui
//!
//! Board of colored jamo tiles, candidate list and search progress.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, Jamo, decompose};
use crate::session::{CandidateSource, SessionState};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 HONGDLE HELPER - Interactive Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_board(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
}

fn tile(jamo: Jamo, feedback: Option<Feedback>) -> Span<'static> {
    let style = match feedback {
        Some(Feedback::Green) => Style::default().fg(Color::Black).bg(Color::Green),
        Some(Feedback::Yellow) => Style::default().fg(Color::Black).bg(Color::Yellow),
        Some(Feedback::Black) => Style::default().fg(Color::White).bg(Color::DarkGray),
        None => Style::default().fg(Color::White),
    };
    Span::styled(format!(" {jamo} "), style.add_modifier(Modifier::BOLD))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = app
        .history
        .iter()
        .map(|entry| {
            let mut spans = vec![Span::raw(format!("{:<6}", entry.turn.word()))];
            spans.extend(
                entry
                    .turn
                    .scored()
                    .map(|(_, jamo, feedback)| tile(jamo, Some(feedback))),
            );
            spans.push(Span::styled(
                format!("  {} → {}", entry.candidates_before, entry.candidates_after),
                Style::default().fg(Color::DarkGray),
            ));
            Line::from(spans)
        })
        .collect();

    // Row being scored, colored as far as the feedback typed so far
    if let Some(pending) = &app.pending_word
        && let Ok(jamo) = decompose(&pending.text)
    {
        let typed: Vec<Feedback> = app
            .pattern_buffer
            .chars()
            .filter_map(Feedback::from_symbol)
            .collect();
        let mut spans = vec![Span::raw(format!("{:<6}", pending.text))];
        spans.extend(
            jamo.iter()
                .enumerate()
                .map(|(i, &j)| tile(j, typed.get(i).copied())),
        );
        lines.push(Line::from(spans));
    }

    if lines.is_empty() {
        lines.push(Line::from("No turns yet"));
    }

    let board = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Board ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(board, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let content: Vec<Line> = if app.session.state() == SessionState::Empty {
        match app.suggestion() {
            Some(word) => vec![
                Line::from("Suggested opener:"),
                Line::from(Span::styled(
                    format!("  {}  {}", word.text(), word.jamo_string()),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
            ],
            None => vec![Line::from("Corpus is empty")],
        }
    } else if app.candidates.is_empty() {
        vec![Line::from(Span::styled(
            "No candidates remain",
            Style::default().fg(Color::Red),
        ))]
    } else {
        let mut lines: Vec<Line> = app
            .candidates
            .iter()
            .take(app.display_limit)
            .enumerate()
            .map(|(i, word)| {
                let style = if i == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                Line::from(vec![
                    Span::styled(format!("{:>3}. {:<6}", i + 1, word.text()), style),
                    Span::styled(
                        format!(" {:<10} {}", word.jamo_string(), word.frequency()),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            })
            .collect();
        if app.candidates.len() > app.display_limit {
            lines.push(Line::from(format!(
                "     … and {} more",
                app.candidates.len() - app.display_limit
            )));
        }
        lines
    };

    let title = match app.candidates.source() {
        CandidateSource::Primary => " Candidates ".to_string(),
        CandidateSource::Fallback => " Candidates (fallback list) ".to_string(),
    };
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search space gauge
            Constraint::Min(8),    // Constraints
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_constraints(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let pool = app.pool_size();
    let remaining = app.candidates.len();
    let progress_pct = if pool == 0 {
        0
    } else {
        ((pool - remaining.min(pool)) * 100 / pool) as u16
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{remaining}/{pool} words remain"));

    f.render_widget(gauge, area);
}

fn render_constraints(f: &mut Frame, app: &App, area: Rect) {
    let constraints = app.session.constraints();
    let text = if constraints.is_empty() {
        "No constraints yet".to_string()
    } else {
        constraints.to_string()
    };

    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .title(" Constraints ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | n: new game  u: undo  q: quit ",
            "",
            Color::Green,
        ),
        InputMode::Word => (
            " Word you guessed | TAB: suggestion  Enter: next ",
            app.word_buffer.as_str(),
            Color::Cyan,
        ),
        InputMode::Feedback => (
            " Colors (G=green Y=yellow B=black) | ESC: back ",
            app.pattern_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(20),
            Constraint::Percentage(30),
        ])
        .split(area);

    let state_text = format!("State: {}", app.session.state());
    f.render_widget(
        Paragraph::new(state_text).alignment(Alignment::Center),
        chunks[0],
    );

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let length_text = app
        .session
        .word_length()
        .map_or_else(|| "Length: -".to_string(), |len| format!("Length: {len} jamo"));
    f.render_widget(
        Paragraph::new(length_text).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("Ctrl+U: Undo | Ctrl+N: New | Ctrl+C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
