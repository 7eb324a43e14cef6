//! Wire-format records, exactly as the upstream API returns them.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct LocationApiData {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterApiData {
    pub id: u32,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type", default)]
    pub character_type: String,
    pub gender: String,
    pub origin: LocationApiData,
    pub location: LocationApiData,
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
    pub url: String,
    pub created: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpisodeApiData {
    pub id: u32,
    pub name: String,
    pub air_date: String,
    pub episode: String,
    #[serde(default)]
    pub characters: Vec<String>,
    pub url: String,
    pub created: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaginationApiData {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Envelope of list endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct ApiListResponse<T> {
    pub info: PaginationApiData,
    pub results: Vec<T>,
}

/// Batch endpoints answer with an object for one id and an array otherwise.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }
}
