//! Shared fixtures for the integration tests: a mock upstream API and
//! payloads shaped like the real one.

#![allow(dead_code)]

use portaline::{ApiClient, EpisodeErrorPolicy, HttpCharacterRepository};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn character_json(id: u32, name: &str, status: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "status": status,
        "species": "Human",
        "type": "",
        "gender": "Male",
        "origin": {"name": "Earth (C-137)", "url": "https://rickandmortyapi.com/api/location/1"},
        "location": {"name": "Citadel of Ricks", "url": "https://rickandmortyapi.com/api/location/3"},
        "image": format!("https://rickandmortyapi.com/api/character/avatar/{id}.jpeg"),
        "episode": (1..=3)
            .map(|n| format!("https://rickandmortyapi.com/api/episode/{n}"))
            .collect::<Vec<_>>(),
        "url": format!("https://rickandmortyapi.com/api/character/{id}"),
        "created": "2017-11-04T18:48:46.250Z"
    })
}

pub fn episode_json(id: u32) -> Value {
    json!({
        "id": id,
        "name": format!("Episode {id}"),
        "air_date": "December 2, 2013",
        "episode": format!("S01E{id:02}"),
        "characters": ["https://rickandmortyapi.com/api/character/1"],
        "url": format!("https://rickandmortyapi.com/api/episode/{id}"),
        "created": "2017-11-10T12:56:33.798Z"
    })
}

pub fn page_json(results: Vec<Value>, page: u32, pages: u32) -> Value {
    let link = |p: u32| format!("https://rickandmortyapi.com/api/character?page={p}");
    json!({
        "info": {
            "count": results.len() as u32 * pages,
            "pages": pages,
            "next": (page < pages).then(|| link(page + 1)),
            "prev": (page > 1).then(|| link(page - 1)),
        },
        "results": results,
    })
}

pub fn episode_urls(ids: impl IntoIterator<Item = u32>) -> Vec<String> {
    ids.into_iter()
        .map(|id| format!("https://rickandmortyapi.com/api/episode/{id}"))
        .collect()
}

pub fn repository(server: &MockServer, policy: EpisodeErrorPolicy) -> HttpCharacterRepository {
    let api = ApiClient::with_client(reqwest::Client::new(), &server.uri())
        .expect("mock server URI should be valid");
    HttpCharacterRepository::with_api_client(api, policy)
}

/// Mount a GET handler answering `body` with status 200
pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
