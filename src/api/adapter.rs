//! Conversion from wire records to domain records.
//!
//! Pure and total. Status and gender strings are checked against their closed
//! sets; anything else is downgraded to `unknown` and logged.

use crate::api::dto::{CharacterApiData, EpisodeApiData, LocationApiData, PaginationApiData};
use crate::models::{Character, CharacterStatus, Episode, Gender, LocationRef, PaginationInfo};

pub fn to_domain(raw: CharacterApiData) -> Character {
    let status = raw.status.parse().unwrap_or_else(|_| {
        tracing::warn!(
            "Character {} has unrecognized status '{}', using 'unknown'",
            raw.id,
            raw.status
        );
        CharacterStatus::Unknown
    });
    let gender = raw.gender.parse().unwrap_or_else(|_| {
        tracing::warn!(
            "Character {} has unrecognized gender '{}', using 'unknown'",
            raw.id,
            raw.gender
        );
        Gender::Unknown
    });

    Character {
        id: raw.id,
        name: raw.name,
        status,
        species: raw.species,
        character_type: raw.character_type,
        gender,
        origin: to_location(raw.origin),
        location: to_location(raw.location),
        image: raw.image,
        episode: raw.episode,
        url: raw.url,
        created: raw.created,
    }
}

pub fn to_episode_domain(raw: EpisodeApiData) -> Episode {
    Episode {
        id: raw.id,
        name: raw.name,
        air_date: raw.air_date,
        episode: raw.episode,
        characters: raw.characters,
        url: raw.url,
        created: raw.created,
    }
}

pub fn to_pagination(raw: PaginationApiData) -> PaginationInfo {
    PaginationInfo {
        count: raw.count,
        pages: raw.pages,
        next: raw.next,
        prev: raw.prev,
    }
}

fn to_location(raw: LocationApiData) -> LocationRef {
    LocationRef {
        name: raw.name,
        url: raw.url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_character(status: &str, gender: &str) -> CharacterApiData {
        CharacterApiData {
            id: 2,
            name: "Morty Smith".into(),
            status: status.into(),
            species: "Human".into(),
            character_type: String::new(),
            gender: gender.into(),
            origin: LocationApiData {
                name: "unknown".into(),
                url: String::new(),
            },
            location: LocationApiData {
                name: "Citadel of Ricks".into(),
                url: "https://rickandmortyapi.com/api/location/3".into(),
            },
            image: "https://rickandmortyapi.com/api/character/avatar/2.jpeg".into(),
            episode: vec!["https://rickandmortyapi.com/api/episode/1".into()],
            url: "https://rickandmortyapi.com/api/character/2".into(),
            created: "2017-11-04T18:50:21.651Z".into(),
        }
    }

    #[test]
    fn valid_literals_pass_through_unchanged() {
        let character = to_domain(raw_character("Alive", "Male"));
        assert_eq!(character.status.as_str(), "Alive");
        assert_eq!(character.gender.as_str(), "Male");
    }

    #[test]
    fn copies_every_field() {
        let character = to_domain(raw_character("Dead", "Female"));
        assert_eq!(character.id, 2);
        assert_eq!(character.name, "Morty Smith");
        assert_eq!(character.status, CharacterStatus::Dead);
        assert_eq!(character.gender, Gender::Female);
        assert_eq!(character.origin.name, "unknown");
        assert_eq!(character.origin.url, "");
        assert_eq!(character.location.name, "Citadel of Ricks");
        assert_eq!(character.episode.len(), 1);
        assert_eq!(character.created, "2017-11-04T18:50:21.651Z");
    }

    #[test]
    fn unrecognized_status_is_downgraded() {
        let character = to_domain(raw_character("Zombie", "Male"));
        assert_eq!(character.status, CharacterStatus::Unknown);
        assert_eq!(character.gender, Gender::Male);
    }

    #[test]
    fn unrecognized_gender_is_downgraded() {
        let character = to_domain(raw_character("Alive", "male"));
        assert_eq!(character.gender, Gender::Unknown);
    }

    #[test]
    fn episode_is_copied_verbatim() {
        let episode = to_episode_domain(EpisodeApiData {
            id: 28,
            name: "The Ricklantis Mixup".into(),
            air_date: "September 10, 2017".into(),
            episode: "S03E07".into(),
            characters: vec!["https://rickandmortyapi.com/api/character/1".into()],
            url: "https://rickandmortyapi.com/api/episode/28".into(),
            created: "2017-11-10T12:56:36.618Z".into(),
        });
        assert_eq!(episode.id, 28);
        assert_eq!(episode.episode, "S03E07");
        assert_eq!(episode.characters.len(), 1);
    }
}
