//! Derived projections of characters and episodes.
//!
//! These are pure functions of the domain records and carry no lifecycle of
//! their own.

use crate::models::{Character, CharacterStatus, Episode};
use serde::Serialize;

/// Compact view of a character for list rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterSummary {
    pub id: u32,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    pub image: String,
    pub episode_count: usize,
}

impl From<&Character> for CharacterSummary {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id,
            name: character.name.clone(),
            status: character.status,
            species: character.species.clone(),
            image: character.image.clone(),
            episode_count: character.episode.len(),
        }
    }
}

/// Compact view of an episode
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EpisodeSummary {
    pub id: u32,
    pub name: String,
    pub episode: String,
    pub air_date: String,
    pub character_count: usize,
}

impl From<&Episode> for EpisodeSummary {
    fn from(episode: &Episode) -> Self {
        Self {
            id: episode.id,
            name: episode.name.clone(),
            episode: episode.episode.clone(),
            air_date: episode.air_date.clone(),
            character_count: episode.characters.len(),
        }
    }
}

/// A character together with what was learned from its fetched episodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterDetails {
    #[serde(flatten)]
    pub character: Character,
    pub first_seen: String,
    pub last_known_location: String,
    pub episode_names: Vec<String>,
}

impl CharacterDetails {
    pub fn new(character: &Character, episodes: &[Episode]) -> Self {
        let episode_names: Vec<String> = episodes.iter().map(|e| e.name.clone()).collect();
        let first_seen = episode_names
            .first()
            .cloned()
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            character: character.clone(),
            first_seen,
            last_known_location: character.location.name.clone(),
            episode_names,
        }
    }
}

pub fn create_character_summary(character: &Character) -> CharacterSummary {
    CharacterSummary::from(character)
}

pub fn create_episode_summary(episode: &Episode) -> EpisodeSummary {
    EpisodeSummary::from(episode)
}
