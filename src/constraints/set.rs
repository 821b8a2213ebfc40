//! Cumulative constraint set
//!
//! A `ConstraintSet` is a value: merging a turn produces a new set and leaves
//! the old one untouched, so a contradictory turn can be rejected without any
//! rollback. Constraints only tighten across merges; undo is done by replaying
//! the surviving turns into an empty set.

use super::tally::{CountInference, tally_turn};
use crate::core::{Feedback, Jamo, Turn};
use crate::error::ConstraintError;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Everything the accumulated feedback says about the secret word
///
/// Invariant: no jamo is both in `pure_black` and in `yellow_required`,
/// `exact_count` or the green positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    green: BTreeMap<usize, Jamo>,
    black_at_position: BTreeMap<usize, BTreeSet<Jamo>>,
    pure_black: BTreeSet<Jamo>,
    yellow_required: BTreeSet<Jamo>,
    yellow_excluded_positions: BTreeMap<Jamo, BTreeSet<usize>>,
    exact_count: BTreeMap<Jamo, usize>,
    /// Largest Black-free lower bound seen per jamo, kept so a later exact
    /// count can be checked against it
    at_least: BTreeMap<Jamo, usize>,
}

impl ConstraintSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a set by replaying turns in order from empty
    ///
    /// # Errors
    /// Returns the first `ConstraintError` raised by any turn.
    pub fn from_turns<'a>(turns: impl IntoIterator<Item = &'a Turn>) -> Result<Self, ConstraintError> {
        turns
            .into_iter()
            .try_fold(Self::new(), |set, turn| set.merge(turn))
    }

    /// Merge one turn, returning the tightened set
    ///
    /// Positional pass: Green pins the jamo, Yellow marks it required and
    /// excluded from that position, Black excludes it from that position.
    /// Count pass: each distinct jamo's tally is turned into an exact count,
    /// a lower bound, or total absence.
    ///
    /// # Errors
    /// Returns `ConstraintError` when the turn contradicts what is already
    /// known (a different exact count, a jamo both absent and present, or two
    /// green jamo at one position). `self` is unchanged in that case.
    pub fn merge(&self, turn: &Turn) -> Result<Self, ConstraintError> {
        let mut next = self.clone();

        for (position, jamo, feedback) in turn.scored() {
            match feedback {
                Feedback::Green => next.pin_green(position, jamo)?,
                Feedback::Yellow => {
                    next.yellow_required.insert(jamo);
                    next.yellow_excluded_positions
                        .entry(jamo)
                        .or_default()
                        .insert(position);
                }
                Feedback::Black => {
                    next.black_at_position
                        .entry(position)
                        .or_default()
                        .insert(jamo);
                }
            }
        }

        for (jamo, tally) in tally_turn(turn) {
            match tally.infer() {
                Some(CountInference::Exact(count)) => next.record_exact(jamo, count)?,
                Some(CountInference::AtLeast(count)) => next.raise_lower_bound(jamo, count),
                Some(CountInference::Absent) => {
                    next.pure_black.insert(jamo);
                }
                None => {}
            }
        }

        next.check_counts()?;
        next.check_presence()?;
        Ok(next)
    }

    /// Merge a turn in place; on error `self` is left as it was
    ///
    /// # Errors
    /// Same as [`ConstraintSet::merge`].
    pub fn apply(&mut self, turn: &Turn) -> Result<(), ConstraintError> {
        *self = self.merge(turn)?;
        Ok(())
    }

    fn pin_green(&mut self, position: usize, jamo: Jamo) -> Result<(), ConstraintError> {
        match self.green.insert(position, jamo) {
            Some(recorded) if recorded != jamo => Err(ConstraintError::GreenConflict {
                position,
                recorded,
                implied: jamo,
            }),
            _ => Ok(()),
        }
    }

    fn record_exact(&mut self, jamo: Jamo, count: usize) -> Result<(), ConstraintError> {
        match self.exact_count.get(&jamo) {
            Some(&recorded) if recorded != count => Err(ConstraintError::ExactCountConflict {
                jamo,
                recorded,
                implied: count,
            }),
            Some(_) => Ok(()),
            None => {
                log::debug!("{jamo}: exactly {count}");
                self.exact_count.insert(jamo, count);
                Ok(())
            }
        }
    }

    /// A lower bound never changes a resolved count, but may contradict it
    fn raise_lower_bound(&mut self, jamo: Jamo, at_least: usize) {
        let bound = self.at_least.entry(jamo).or_default();
        *bound = (*bound).max(at_least);
    }

    /// Every exact count covers its jamo's lower bound and green positions,
    /// whichever turn arrived first
    fn check_counts(&self) -> Result<(), ConstraintError> {
        for (&jamo, &recorded) in &self.exact_count {
            let greens = self.green.values().filter(|&&green| green == jamo).count();
            let lower = self.at_least.get(&jamo).copied().unwrap_or(0).max(greens);
            if lower > recorded {
                return Err(ConstraintError::ExactCountConflict {
                    jamo,
                    recorded,
                    implied: lower,
                });
            }
        }
        Ok(())
    }

    fn check_presence(&self) -> Result<(), ConstraintError> {
        let present = self
            .yellow_required
            .iter()
            .chain(self.exact_count.keys())
            .chain(self.green.values());

        for &jamo in present {
            if self.pure_black.contains(&jamo) {
                return Err(ConstraintError::PresenceConflict { jamo });
            }
        }
        Ok(())
    }

    /// Check a candidate jamo sequence against every constraint
    ///
    /// Pure: evaluating twice gives the same answer and never mutates the set.
    #[must_use]
    pub fn matches(&self, jamo: &[Jamo]) -> bool {
        // 1. Confirmed positions
        let greens_hold = self
            .green
            .iter()
            .all(|(&position, &expected)| jamo.get(position) == Some(&expected));
        if !greens_hold {
            return false;
        }

        // 2. Position-specific exclusions
        let blacks_hold = self.black_at_position.iter().all(|(&position, excluded)| {
            jamo.get(position)
                .is_none_or(|candidate| !excluded.contains(candidate))
        });
        if !blacks_hold {
            return false;
        }

        // 3. Totally absent jamo
        if jamo.iter().any(|candidate| self.pure_black.contains(candidate)) {
            return false;
        }

        // 4. Required jamo
        if !self.yellow_required.iter().all(|required| jamo.contains(required)) {
            return false;
        }

        // 5. Required jamo kept off the positions where they were yellow
        let yellows_hold = self
            .yellow_excluded_positions
            .iter()
            .all(|(&required, positions)| {
                positions
                    .iter()
                    .all(|&position| jamo.get(position) != Some(&required))
            });
        if !yellows_hold {
            return false;
        }

        // 6. Resolved counts
        self.exact_count.iter().all(|(&target, &count)| {
            jamo.iter().filter(|&&candidate| candidate == target).count() == count
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    #[must_use]
    pub const fn green(&self) -> &BTreeMap<usize, Jamo> {
        &self.green
    }

    #[must_use]
    pub const fn black_at_position(&self) -> &BTreeMap<usize, BTreeSet<Jamo>> {
        &self.black_at_position
    }

    #[must_use]
    pub const fn pure_black(&self) -> &BTreeSet<Jamo> {
        &self.pure_black
    }

    #[must_use]
    pub const fn yellow_required(&self) -> &BTreeSet<Jamo> {
        &self.yellow_required
    }

    #[must_use]
    pub const fn yellow_excluded_positions(&self) -> &BTreeMap<Jamo, BTreeSet<usize>> {
        &self.yellow_excluded_positions
    }

    #[must_use]
    pub const fn exact_count(&self) -> &BTreeMap<Jamo, usize> {
        &self.exact_count
    }
}

fn join<T: fmt::Display>(items: impl IntoIterator<Item = T>, sep: &str) -> String {
    items
        .into_iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(sep)
}

impl fmt::Display for ConstraintSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let green = join(
            self.green.iter().map(|(pos, jamo)| format!("{pos}={jamo}")),
            ", ",
        );
        let required = join(&self.yellow_required, " ");
        let not_at = join(
            self.yellow_excluded_positions
                .iter()
                .map(|(jamo, positions)| format!("{jamo}∉[{}]", join(positions, ","))),
            " ",
        );
        let black_at = join(
            self.black_at_position
                .iter()
                .map(|(pos, jamo)| format!("{pos}:[{}]", join(jamo, ","))),
            " ",
        );
        let absent = join(&self.pure_black, " ");
        let exact = join(
            self.exact_count
                .iter()
                .map(|(jamo, count)| format!("{jamo}×{count}")),
            " ",
        );

        writeln!(f, "Green:        {green}")?;
        writeln!(f, "Required:     {required}")?;
        writeln!(f, "Not at:       {not_at}")?;
        writeln!(f, "Black at:     {black_at}")?;
        writeln!(f, "Absent:       {absent}")?;
        write!(f, "Exact counts: {exact}")
    }
}
