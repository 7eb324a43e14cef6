//! # Views
//!
//! Terminal output for the character list, the detail panel and episodes.

pub mod ansi_escape_codes;
pub mod renderer;

pub use renderer::TerminalRenderer;
