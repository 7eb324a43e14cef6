use crate::api::ApiError;
use thiserror::Error;

/// Domain-level failures surfaced by a `CharacterRepository`
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Error fetching characters")]
    Characters(#[source] ApiError),

    #[error("Error fetching character with id {id}")]
    Character {
        id: u32,
        #[source]
        source: ApiError,
    },

    #[error("Error fetching episode with id {id}")]
    Episode {
        id: u32,
        #[source]
        source: ApiError,
    },

    #[error("Error fetching episodes")]
    Episodes(#[source] ApiError),
}
