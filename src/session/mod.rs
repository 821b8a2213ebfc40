//! Game sessions over a shared read-only corpus

mod game;
mod state;

pub use game::{CandidateSource, Candidates, GameSession};
pub use state::SessionState;
