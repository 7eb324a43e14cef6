//! # Portaline - Rick and Morty Character Explorer
//!
//! A terminal client for the public Rick and Morty REST API: paginated
//! character lists with search, character details with recent episodes,
//! and episode lookups by id or reference URL.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   render    ┌──────────────┐   fetch    ┌────────────┐   HTTP   ┌───────────┐
//! │    Views    │◄────────────│  ViewModels  │───────────►│ Repository │─────────►│ ApiClient │
//! └─────────────┘             └──────────────┘            └────────────┘          └───────────┘
//!                                    ▲                          │
//!                                    │ commands                 │ adapter
//!                             ┌──────────────┐            ┌────────────┐
//!                             │  Controller  │            │   Models   │
//!                             └──────────────┘            └────────────┘
//! ```

pub mod api;
pub mod cmd_args;
pub mod config;
pub mod controllers;
pub mod models;
pub mod repository;
pub mod view_models;
pub mod views;

pub use api::{ApiClient, ApiError};
pub use cmd_args::CommandLineArgs;
pub use config::{ApiProfile, IniProfileStore};
pub use controllers::AppController;
pub use repository::{CharacterRepository, EpisodeErrorPolicy, HttpCharacterRepository};
