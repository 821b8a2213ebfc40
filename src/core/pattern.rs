//! Hongdle feedback symbols and patterns
//!
//! A pattern holds one feedback symbol per jamo position of a guess:
//! - Green: jamo in the secret word at this position
//! - Yellow: jamo in the secret word, at another position
//! - Black: no further occurrence of this jamo (see the count rules in
//!   `constraints`)

use super::Jamo;
use crate::error::PatternError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single jamo position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Green,
    Yellow,
    Black,
}

impl Feedback {
    /// Parse one feedback symbol
    ///
    /// Accepts G/g/🟩, Y/y/🟨 and B/b/⬛/⬜.
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Green),
            'Y' | 'y' | '🟨' => Some(Self::Yellow),
            'B' | 'b' | '⬛' | '⬜' => Some(Self::Black),
            _ => None,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Green => 'G',
            Self::Yellow => 'Y',
            Self::Black => 'B',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Green => '🟩',
            Self::Yellow => '🟨',
            Self::Black => '⬛',
        }
    }
}

/// Feedback pattern for a whole guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern(Vec<Feedback>);

impl Pattern {
    #[must_use]
    pub const fn new(symbols: Vec<Feedback>) -> Self {
        Self(symbols)
    }

    /// All-green pattern of the given length
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![Feedback::Green; len])
    }

    #[inline]
    #[must_use]
    pub fn symbols(&self) -> &[Feedback] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|&f| f == Feedback::Green)
    }

    #[must_use]
    pub fn count(&self, feedback: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == feedback).count()
    }

    /// Score `guess` against `answer` jamo by jamo
    ///
    /// Uses the two-pass rule: greens first, then yellows drawn from the
    /// occurrences of the answer not already matched. Both sequences must have
    /// the same length; extra positions on either side are ignored.
    ///
    /// # Examples
    /// ```
    /// use hongdle::core::{Pattern, Word};
    ///
    /// let guess = Word::new("국군").unwrap();
    /// let answer = Word::new("군인").unwrap();
    /// let pattern = Pattern::score(guess.jamo(), answer.jamo());
    /// assert_eq!(pattern.to_string(), "GGBBBG");
    /// ```
    #[must_use]
    pub fn score(guess: &[Jamo], answer: &[Jamo]) -> Self {
        let len = guess.len().min(answer.len());
        let mut result = vec![Feedback::Black; len];
        let mut answer_available: FxHashMap<Jamo, usize> = FxHashMap::default();
        for &jamo in &answer[..len] {
            *answer_available.entry(jamo).or_insert(0) += 1;
        }

        // First pass: greens
        // Allow: index needed to read guess[i], answer[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if guess[i] == answer[i] {
                result[i] = Feedback::Green;
                if let Some(count) = answer_available.get_mut(&guess[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: yellows from what is left
        #[allow(clippy::needless_range_loop)]
        for i in 0..len {
            if result[i] == Feedback::Black
                && let Some(count) = answer_available.get_mut(&guess[i])
                && *count > 0
            {
                result[i] = Feedback::Yellow;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Pattern as emoji squares, e.g. "🟩🟨⬛"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.emoji()).collect()
    }
}

/// Emoji presentation selector that pasted squares often carry
const VARIATION_SELECTOR: char = '\u{FE0F}';

impl FromStr for Pattern {
    type Err = PatternError;

    /// Parse a pattern like "GYBBBY" or "🟩🟨⬛"
    ///
    /// Surrounding whitespace and emoji variation selectors are ignored; any
    /// other symbol outside G/Y/B (or their emoji) is rejected with its
    /// position.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .trim()
            .chars()
            .filter(|&ch| ch != VARIATION_SELECTOR)
            .collect();
        if symbols.is_empty() {
            return Err(PatternError::Empty);
        }

        symbols
            .into_iter()
            .enumerate()
            .map(|(position, symbol)| {
                Feedback::from_symbol(symbol)
                    .ok_or(PatternError::InvalidSymbol { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for feedback in &self.0 {
            write!(f, "{}", feedback.letter())?;
        }
        Ok(())
    }
}
