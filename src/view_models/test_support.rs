//! In-memory repository for view model tests

use crate::api::ApiError;
use crate::models::{
    Character, CharacterFilters, CharacterPage, CharacterStatus, Episode, Gender, LocationRef,
    PaginationInfo,
};
use crate::repository::{parse_episode_ids, CharacterRepository, RepositoryError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

pub const TOTAL_PAGES: u32 = 3;

pub fn character(id: u32, name: &str) -> Character {
    Character {
        id,
        name: name.to_string(),
        status: CharacterStatus::Alive,
        species: "Human".to_string(),
        character_type: String::new(),
        gender: Gender::Male,
        origin: LocationRef {
            name: "Earth (C-137)".to_string(),
            url: "https://rickandmortyapi.com/api/location/1".to_string(),
        },
        location: LocationRef {
            name: "Citadel of Ricks".to_string(),
            url: "https://rickandmortyapi.com/api/location/3".to_string(),
        },
        image: format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        episode: (1..=7)
            .map(|n| format!("https://rickandmortyapi.com/api/episode/{n}"))
            .collect(),
        url: format!("https://rickandmortyapi.com/api/character/{id}"),
        created: "2017-11-04T18:48:46.250Z".to_string(),
    }
}

pub fn episode(id: u32) -> Episode {
    Episode {
        id,
        name: format!("Episode {id}"),
        air_date: "December 2, 2013".to_string(),
        episode: format!("S01E{id:02}"),
        characters: vec!["https://rickandmortyapi.com/api/character/1".to_string()],
        url: format!("https://rickandmortyapi.com/api/episode/{id}"),
        created: "2017-11-10T12:56:33.798Z".to_string(),
    }
}

pub fn page_of(results: Vec<Character>, pages: u32, has_next: bool, has_prev: bool) -> CharacterPage {
    CharacterPage {
        info: PaginationInfo {
            count: results.len() as u32 * pages,
            pages,
            next: has_next.then(|| "https://rickandmortyapi.com/api/character?page=next".into()),
            prev: has_prev.then(|| "https://rickandmortyapi.com/api/character?page=prev".into()),
        },
        results,
    }
}

fn server_error() -> ApiError {
    ApiError::Api {
        status_code: 500,
        message: "boom".to_string(),
    }
}

#[derive(Default)]
struct FakeState {
    requested_pages: Vec<Option<u32>>,
    episode_requests: Vec<Vec<String>>,
    fail_characters: bool,
    fail_episodes: bool,
    delays: HashMap<u32, Duration>,
}

/// Serves `TOTAL_PAGES` pages of two characters each
#[derive(Default)]
pub struct FakeRepository {
    state: Mutex<FakeState>,
}

impl FakeRepository {
    pub fn fail_characters(&self, fail: bool) {
        self.state.lock().unwrap().fail_characters = fail;
    }

    pub fn fail_episodes(&self, fail: bool) {
        self.state.lock().unwrap().fail_episodes = fail;
    }

    pub fn delay_page(&self, page: u32, delay: Duration) {
        self.state.lock().unwrap().delays.insert(page, delay);
    }

    pub fn requested_pages(&self) -> Vec<Option<u32>> {
        self.state.lock().unwrap().requested_pages.clone()
    }

    pub fn episode_requests(&self) -> Vec<Vec<String>> {
        self.state.lock().unwrap().episode_requests.clone()
    }
}

#[async_trait]
impl CharacterRepository for FakeRepository {
    async fn get_characters(&self, filters: &CharacterFilters) -> Result<CharacterPage> {
        let page = filters.page.unwrap_or(1);
        let (delay, fail) = {
            let mut state = self.state.lock().unwrap();
            state.requested_pages.push(filters.page);
            (state.delays.get(&page).copied(), state.fail_characters)
        };
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if fail {
            return Err(RepositoryError::Characters(server_error()));
        }

        let first = (page - 1) * 2 + 1;
        let results = vec![
            character(first, &format!("Character {first}")),
            character(first + 1, &format!("Character {}", first + 1)),
        ];
        Ok(page_of(results, TOTAL_PAGES, page < TOTAL_PAGES, page > 1))
    }

    async fn get_character_by_id(&self, id: u32) -> Result<Character> {
        if id == 404 {
            return Err(RepositoryError::Character {
                id,
                source: ApiError::Api {
                    status_code: 404,
                    message: "Character not found".to_string(),
                },
            });
        }
        Ok(character(id, &format!("Character {id}")))
    }

    async fn get_episodes(&self, urls: &[String]) -> Result<Vec<Episode>> {
        let fail = {
            let mut state = self.state.lock().unwrap();
            state.episode_requests.push(urls.to_vec());
            state.fail_episodes
        };
        if fail {
            return Err(RepositoryError::Episodes(server_error()));
        }
        Ok(parse_episode_ids(urls).into_iter().map(episode).collect())
    }

    async fn get_episode_by_id(&self, id: u32) -> Result<Episode> {
        Ok(episode(id))
    }
}
