//! Per-turn jamo tallies and the count inference rule
//!
//! Within one turn, the Green/Yellow/Black counts of a jamo determine what the
//! turn says about that jamo's total occurrences in the secret word:
//!
//! | Green+Yellow | Black | Inference                      |
//! |--------------|-------|--------------------------------|
//! | n > 0        | > 0   | exactly n                      |
//! | n > 0        | 0     | at least n                     |
//! | 0            | > 0   | absent                         |
//!
//! A Black symbol on its own only excludes the jamo from that position.

use crate::core::{Feedback, Jamo, Turn};
use std::collections::BTreeMap;

/// Feedback counts of one jamo within one turn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JamoTally {
    pub green: usize,
    pub yellow: usize,
    pub black: usize,
}

/// What a single turn proves about a jamo's total count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountInference {
    /// The secret contains this jamo exactly n times
    Exact(usize),
    /// The secret contains this jamo at least n times
    AtLeast(usize),
    /// The secret never contains this jamo
    Absent,
}

impl JamoTally {
    fn record(&mut self, feedback: Feedback) {
        match feedback {
            Feedback::Green => self.green += 1,
            Feedback::Yellow => self.yellow += 1,
            Feedback::Black => self.black += 1,
        }
    }

    /// Occurrences confirmed present by this turn
    #[must_use]
    pub const fn present(&self) -> usize {
        self.green + self.yellow
    }

    /// Apply the count rule
    ///
    /// # Examples
    /// ```
    /// use hongdle::constraints::{CountInference, JamoTally};
    ///
    /// let tally = JamoTally { green: 0, yellow: 1, black: 2 };
    /// assert_eq!(tally.infer(), Some(CountInference::Exact(1)));
    /// ```
    #[must_use]
    pub const fn infer(&self) -> Option<CountInference> {
        match (self.present(), self.black) {
            (0, 0) => None,
            (0, _) => Some(CountInference::Absent),
            (n, 0) => Some(CountInference::AtLeast(n)),
            (n, _) => Some(CountInference::Exact(n)),
        }
    }
}

/// Tally every distinct jamo of a turn, ordered by jamo
#[must_use]
pub fn tally_turn(turn: &Turn) -> BTreeMap<Jamo, JamoTally> {
    let mut tallies: BTreeMap<Jamo, JamoTally> = BTreeMap::new();
    for (_, jamo, feedback) in turn.scored() {
        tallies.entry(jamo).or_default().record(feedback);
    }
    tallies
}
