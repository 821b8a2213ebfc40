//! Hongdle Helper
//!
//! A solver aid for Hongdle, the Korean Wordle played on decomposed jamo.
//! Words are split into atomic jamo, each scored guess is folded into a
//! cumulative constraint set, and the corpus is filtered down to the words
//! still consistent with every turn.
//!
//! # Quick Start
//!
//! ```rust
//! use hongdle::corpus::CorpusBuilder;
//! use hongdle::session::GameSession;
//!
//! let mut builder = CorpusBuilder::default();
//! builder.insert("군인", 2110);
//! builder.insert("방법", 3000);
//! builder.insert("여행", 2900);
//! let corpus = builder.build();
//!
//! let mut session = GameSession::new(&corpus);
//! let candidates = session.add_turn_str("국군", "BBBBBB").unwrap();
//! assert_eq!(candidates.texts(), ["방법", "여행"]);
//! ```

// Jamo, words, patterns and turns
pub mod core;

// Cumulative constraint set
pub mod constraints;

// Word corpus store and loader
pub mod corpus;

// Game session state machine
pub mod session;

pub mod config;
pub mod error;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
