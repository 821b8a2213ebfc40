//! Interactive TUI interface

mod app;
mod rendering;

pub use app::{
    App, HistoryEntry, InputMode, Message, MessageStyle, PendingWord, Statistics, run_tui,
};
