//! # HTTP Repository
//!
//! `CharacterRepository` backed by the upstream REST API.

use crate::api::adapter::{to_domain, to_episode_domain, to_pagination};
use crate::api::dto::{ApiListResponse, CharacterApiData, EpisodeApiData, OneOrMany};
use crate::api::ApiClient;
use crate::config::ApiProfile;
use crate::models::{Character, CharacterFilters, CharacterPage, Episode};
use crate::repository::{
    parse_episode_ids, CharacterRepository, EpisodeErrorPolicy, RepositoryError, Result,
    MAX_BATCH_EPISODES,
};
use async_trait::async_trait;

pub struct HttpCharacterRepository {
    api: ApiClient,
    episode_errors: EpisodeErrorPolicy,
}

impl HttpCharacterRepository {
    /// Create a repository from a connection profile
    pub fn new(profile: &ApiProfile) -> crate::api::Result<Self> {
        let api = ApiClient::new(profile)?;
        tracing::info!("Repository ready for {}", api.base_url());
        Ok(Self::with_api_client(api, profile.episode_errors()))
    }

    pub fn with_api_client(api: ApiClient, episode_errors: EpisodeErrorPolicy) -> Self {
        Self {
            api,
            episode_errors,
        }
    }

    pub fn episode_errors(&self) -> EpisodeErrorPolicy {
        self.episode_errors
    }

    async fn fetch_episode_batch(&self, ids: &[u32]) -> Result<Vec<Episode>> {
        let batch = &ids[..ids.len().min(MAX_BATCH_EPISODES)];
        if batch.len() < ids.len() {
            tracing::debug!(
                "Requested {} episodes, fetching only the first {}",
                ids.len(),
                batch.len()
            );
        }

        let joined = batch
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        let response: OneOrMany<EpisodeApiData> = self
            .api
            .get(&format!("/episode/{joined}"), &[])
            .await
            .map_err(RepositoryError::Episodes)?;

        Ok(response
            .into_vec()
            .into_iter()
            .map(to_episode_domain)
            .collect())
    }
}

#[async_trait]
impl CharacterRepository for HttpCharacterRepository {
    async fn get_characters(&self, filters: &CharacterFilters) -> Result<CharacterPage> {
        let params = filters.to_query_params();

        match self
            .api
            .get::<ApiListResponse<CharacterApiData>>("/character", &params)
            .await
        {
            Ok(response) => Ok(CharacterPage {
                info: to_pagination(response.info),
                results: response.results.into_iter().map(to_domain).collect(),
            }),
            Err(e) if e.is_not_found() => {
                tracing::debug!("No characters match {:?}", params);
                Ok(CharacterPage::empty())
            }
            Err(e) => {
                tracing::error!("Character list request failed: {e}");
                Err(RepositoryError::Characters(e))
            }
        }
    }

    async fn get_character_by_id(&self, id: u32) -> Result<Character> {
        self.api
            .get::<CharacterApiData>(&format!("/character/{id}"), &[])
            .await
            .map(to_domain)
            .map_err(|source| RepositoryError::Character { id, source })
    }

    async fn get_episodes(&self, urls: &[String]) -> Result<Vec<Episode>> {
        let ids = parse_episode_ids(urls);

        let result = match ids.as_slice() {
            [] => return Ok(Vec::new()),
            [id] => self.get_episode_by_id(*id).await.map(|episode| vec![episode]),
            _ => self.fetch_episode_batch(&ids).await,
        };

        match (result, self.episode_errors) {
            (Ok(episodes), _) => Ok(episodes),
            (Err(e), EpisodeErrorPolicy::Degrade) => {
                tracing::warn!("Error fetching episodes: {e}");
                Ok(Vec::new())
            }
            (Err(e), EpisodeErrorPolicy::Fail) => Err(e),
        }
    }

    async fn get_episode_by_id(&self, id: u32) -> Result<Episode> {
        self.api
            .get::<EpisodeApiData>(&format!("/episode/{id}"), &[])
            .await
            .map(to_episode_domain)
            .map_err(|source| RepositoryError::Episode { id, source })
    }
}
