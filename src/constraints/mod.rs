//! Constraint accumulation over scored turns
//!
//! Each turn is folded into a [`ConstraintSet`] in two passes: a positional
//! pass over every symbol, then a count pass over every distinct jamo. The
//! resulting set filters candidate words with [`ConstraintSet::matches`].

mod set;
mod tally;

pub use set::ConstraintSet;
pub use tally::{CountInference, JamoTally, tally_turn};
