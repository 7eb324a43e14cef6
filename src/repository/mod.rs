//! # Character Repository
//!
//! The single gateway through which the rest of the application fetches
//! domain objects. Implementations wrap network calls, adapt wire records and
//! map failures to [`RepositoryError`].

mod error;
mod http;

pub use error::RepositoryError;
pub use http::HttpCharacterRepository;

use crate::models::{Character, CharacterFilters, CharacterPage, Episode};
use async_trait::async_trait;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Upper bound of ids sent in one batch episode request. Extra ids are dropped.
pub const MAX_BATCH_EPISODES: usize = 10;

static EPISODE_ID_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/(\d+)$").unwrap());

#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// One page of characters matching `filters`.
    ///
    /// A not-found answer yields an empty page rather than an error.
    async fn get_characters(&self, filters: &CharacterFilters) -> Result<CharacterPage>;

    async fn get_character_by_id(&self, id: u32) -> Result<Character>;

    /// Episodes referenced by `urls`, fetched in at most one request.
    ///
    /// Failures are handled according to the repository's [`EpisodeErrorPolicy`].
    async fn get_episodes(&self, urls: &[String]) -> Result<Vec<Episode>>;

    async fn get_episode_by_id(&self, id: u32) -> Result<Episode>;
}

/// What a batch episode fetch does when the upstream call fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EpisodeErrorPolicy {
    /// Log and return an empty list
    #[default]
    Degrade,
    /// Propagate the error
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown episode error policy '{0}' (expected 'degrade' or 'fail')")]
pub struct InvalidEpisodeErrorPolicy(pub String);

impl FromStr for EpisodeErrorPolicy {
    type Err = InvalidEpisodeErrorPolicy;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "degrade" => Ok(Self::Degrade),
            "fail" => Ok(Self::Fail),
            _ => Err(InvalidEpisodeErrorPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for EpisodeErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degrade => f.write_str("degrade"),
            Self::Fail => f.write_str("fail"),
        }
    }
}

/// Numeric id from the trailing path segment of an episode reference URL
pub fn parse_episode_id(url: &str) -> Option<u32> {
    EPISODE_ID_PATTERN
        .captures(url)
        .and_then(|caps| caps[1].parse().ok())
}

/// Ids of all parseable URLs, in input order
pub fn parse_episode_ids(urls: &[String]) -> Vec<u32> {
    urls.iter().filter_map(|url| parse_episode_id(url)).collect()
}
