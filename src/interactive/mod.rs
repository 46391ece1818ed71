//! Interactive TUI interface
//!
//! Terminal board for entering clues and viewing suggestions.

mod app;
mod rendering;

pub use app::{App, run_tui};
