//! Formatting utilities for terminal output

use crate::core::{Feedback, Jamo, Turn, Word};
use colored::{ColoredString, Colorize};

/// One jamo as a colored tile
#[must_use]
pub fn jamo_tile(jamo: Jamo, feedback: Feedback) -> ColoredString {
    let tile = format!(" {jamo} ");
    match feedback {
        Feedback::Green => tile.black().on_green(),
        Feedback::Yellow => tile.black().on_yellow(),
        Feedback::Black => tile.white().on_bright_black(),
    }
}

/// A turn rendered as colored jamo tiles
#[must_use]
pub fn turn_tiles(turn: &Turn) -> String {
    turn.scored()
        .map(|(_, jamo, feedback)| jamo_tile(jamo, feedback).to_string())
        .collect()
}

/// Candidates as numbered lines, at most `limit` of them
///
/// A trailing line reports how many were left out.
#[must_use]
pub fn candidate_lines(candidates: &[&Word], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = candidates
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, word)| {
            format!(
                "{:>3}. {}  {}  ({})",
                i + 1,
                word.text(),
                word.jamo_string(),
                word.frequency()
            )
        })
        .collect();

    if candidates.len() > limit {
        lines.push(format!("     … and {} more", candidates.len() - limit));
    }
    lines
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_lines_respect_limit() {
        let words: Vec<Word> = [("사람", 50), ("시간", 40), ("사회", 30)]
            .into_iter()
            .map(|(text, frequency)| Word::with_frequency(text, frequency).unwrap())
            .collect();
        let refs: Vec<&Word> = words.iter().collect();

        let lines = candidate_lines(&refs, 2);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "  1. 사람  ㅅㅏㄹㅏㅁ  (50)");
        assert!(lines[2].contains("1 more"));

        assert_eq!(candidate_lines(&refs, 10).len(), 3);
    }

    #[test]
    fn turn_tiles_contain_every_jamo() {
        let turn = Turn::new(1, "국군", "YBBBBY".parse().unwrap()).unwrap();
        let tiles = turn_tiles(&turn);
        assert_eq!(tiles.matches('ㄱ').count(), 3);
        assert_eq!(tiles.matches('ㅜ').count(), 2);
        assert_eq!(tiles.matches('ㄴ').count(), 1);
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
