//! # Controllers
//!
//! Map command-line and interactive input onto view model operations.

pub mod app_controller;
pub mod browse_command;

pub use app_controller::AppController;
pub use browse_command::{BrowseCommand, HELP_TEXT};
