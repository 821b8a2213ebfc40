//! Session lifecycle states

use std::fmt;

/// Where a game session is in its lifecycle
///
/// `Empty` until the first turn, `Active` while several candidates remain,
/// then `Solved` (one candidate) or `Exhausted` (none).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SessionState {
    #[default]
    Empty,
    Active,
    Solved,
    Exhausted,
}

impl SessionState {
    /// State implied by the candidate count after at least one turn
    #[must_use]
    pub const fn from_candidate_count(count: usize) -> Self {
        match count {
            0 => Self::Exhausted,
            1 => Self::Solved,
            _ => Self::Active,
        }
    }

    /// True once no further turn can be added without undo or reset
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Solved | Self::Exhausted)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Empty => "empty",
            Self::Active => "active",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        };
        f.write_str(name)
    }
}
