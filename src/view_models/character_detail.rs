//! Selected character and its most recent episodes

use crate::models::{Character, CharacterDetails, Episode};
use crate::repository::CharacterRepository;
use std::sync::Arc;

/// Episodes shown for a selected character
pub const MODAL_EPISODE_LIMIT: usize = 5;

pub struct CharacterDetailViewModel {
    repository: Arc<dyn CharacterRepository>,
    character: Option<Character>,
    episodes: Vec<Episode>,
    loading_episodes: bool,
}

impl CharacterDetailViewModel {
    pub fn new(repository: Arc<dyn CharacterRepository>) -> Self {
        Self {
            repository,
            character: None,
            episodes: Vec::new(),
            loading_episodes: false,
        }
    }

    pub fn character(&self) -> Option<&Character> {
        self.character.as_ref()
    }

    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    pub fn is_loading_episodes(&self) -> bool {
        self.loading_episodes
    }

    pub fn is_open(&self) -> bool {
        self.character.is_some()
    }

    /// Select a character; its episodes are pending until `load_episodes`
    pub fn select(&mut self, character: Character) {
        tracing::debug!("Selected character {} ({})", character.id, character.name);
        self.loading_episodes = !character.episode.is_empty();
        self.character = Some(character);
        self.episodes.clear();
    }

    pub fn close(&mut self) {
        self.character = None;
        self.episodes.clear();
        self.loading_episodes = false;
    }

    /// Fetch the first `MODAL_EPISODE_LIMIT` episodes of the selected character.
    ///
    /// Failures leave the episode list empty.
    pub async fn load_episodes(&mut self) {
        let Some(character) = &self.character else {
            return;
        };
        let urls: Vec<String> = character
            .episode
            .iter()
            .take(MODAL_EPISODE_LIMIT)
            .cloned()
            .collect();

        self.loading_episodes = true;
        self.episodes = match self.repository.get_episodes(&urls).await {
            Ok(episodes) => episodes,
            Err(e) => {
                tracing::warn!("Error fetching episodes: {e}");
                Vec::new()
            }
        };
        self.loading_episodes = false;
    }

    /// Select a character and load its episodes
    pub async fn open(&mut self, character: Character) {
        self.select(character);
        self.load_episodes().await;
    }

    pub fn details(&self) -> Option<CharacterDetails> {
        self.character
            .as_ref()
            .map(|character| CharacterDetails::new(character, &self.episodes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_models::test_support::{character, FakeRepository};

    #[tokio::test]
    async fn open_fetches_only_first_five_episodes() {
        let repo = Arc::new(FakeRepository::default());
        let mut vm = CharacterDetailViewModel::new(repo.clone());

        let rick = character(1, "Rick Sanchez");
        assert_eq!(rick.episode.len(), 7);
        vm.open(rick.clone()).await;

        let requests = repo.episode_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0], rick.episode[..5].to_vec());
        assert_eq!(vm.episodes().len(), 5);
        assert!(!vm.is_loading_episodes());
    }

    #[tokio::test]
    async fn select_marks_episodes_pending() {
        let repo = Arc::new(FakeRepository::default());
        let mut vm = CharacterDetailViewModel::new(repo);

        vm.select(character(1, "Rick Sanchez"));
        assert!(vm.is_open());
        assert!(vm.is_loading_episodes());
        assert!(vm.episodes().is_empty());
    }

    #[tokio::test]
    async fn failed_episode_fetch_shows_nothing() {
        let repo = Arc::new(FakeRepository::default());
        repo.fail_episodes(true);
        let mut vm = CharacterDetailViewModel::new(repo);

        vm.open(character(2, "Morty Smith")).await;
        assert!(vm.episodes().is_empty());
        assert!(!vm.is_loading_episodes());

        let details = vm.details().unwrap();
        assert_eq!(details.first_seen, "Unknown");
    }

    #[tokio::test]
    async fn details_reflect_loaded_episodes() {
        let repo = Arc::new(FakeRepository::default());
        let mut vm = CharacterDetailViewModel::new(repo);

        vm.open(character(1, "Rick Sanchez")).await;
        let details = vm.details().unwrap();
        assert_eq!(details.first_seen, "Episode 1");
        assert_eq!(details.last_known_location, "Citadel of Ricks");
        assert_eq!(details.episode_names.len(), 5);

        vm.close();
        assert!(!vm.is_open());
        assert!(vm.details().is_none());
    }
}
