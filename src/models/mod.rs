//! # Domain Models
//!
//! Internal representation of characters, episodes and pagination, decoupled
//! from the upstream wire format.

pub mod character;
pub mod episode;
pub mod pagination;
pub mod summary;

pub use character::{
    is_character_gender, is_character_status, status_color, Character, CharacterStatus, Gender,
    InvalidLiteral, LocationRef, StatusColor,
};
pub use episode::{format_episode_code, Episode};
pub use pagination::{CharacterFilters, CharacterPage, PaginationInfo};
pub use summary::{
    create_character_summary, create_episode_summary, CharacterDetails, CharacterSummary,
    EpisodeSummary,
};
