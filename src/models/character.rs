//! Character domain model
//!
//! Adapted character records, the closed status/gender enumerations with their
//! type guards, and the status color markers used by the views.

use crate::views::ansi_escape_codes::{FG_BRIGHT_BLACK, FG_GREEN, FG_RED};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Life status of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CharacterStatus {
    Alive,
    Dead,
    #[serde(rename = "unknown")]
    Unknown,
}

impl CharacterStatus {
    pub const ALL: [CharacterStatus; 3] = [Self::Alive, Self::Dead, Self::Unknown];

    /// The exact literal used by the upstream API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alive => "Alive",
            Self::Dead => "Dead",
            Self::Unknown => "unknown",
        }
    }
}

/// Gender of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gender {
    Female,
    Male,
    Genderless,
    #[serde(rename = "unknown")]
    Unknown,
}

impl Gender {
    pub const ALL: [Gender; 4] = [Self::Female, Self::Male, Self::Genderless, Self::Unknown];

    /// The exact literal used by the upstream API
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Genderless => "Genderless",
            Self::Unknown => "unknown",
        }
    }
}

/// Error returned when a string is not a member of a closed enumeration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} '{value}'")]
pub struct InvalidLiteral {
    pub kind: &'static str,
    pub value: String,
}

impl FromStr for CharacterStatus {
    type Err = InvalidLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| InvalidLiteral {
                kind: "status",
                value: s.to_string(),
            })
    }
}

impl FromStr for Gender {
    type Err = InvalidLiteral;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gender| gender.as_str() == s)
            .ok_or_else(|| InvalidLiteral {
                kind: "gender",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for CharacterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Type guard for status literals. Case-sensitive.
pub fn is_character_status(status: &str) -> bool {
    status.parse::<CharacterStatus>().is_ok()
}

/// Type guard for gender literals. Case-sensitive.
pub fn is_character_gender(gender: &str) -> bool {
    gender.parse::<Gender>().is_ok()
}

/// Named reference to an origin or a location. The URL may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LocationRef {
    pub name: String,
    pub url: String,
}

/// A character as seen by the rest of the application
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub id: u32,
    pub name: String,
    pub status: CharacterStatus,
    pub species: String,
    #[serde(rename = "type")]
    pub character_type: String,
    pub gender: Gender,
    pub origin: LocationRef,
    pub location: LocationRef,
    pub image: String,
    /// Episode reference URLs, in upstream order
    pub episode: Vec<String>,
    pub url: String,
    pub created: String,
}

/// Visual marker for a character status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Green,
    Red,
    Gray,
}

impl StatusColor {
    /// Utility class pair used by the web front end
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Green => "text-green-600 bg-green-100",
            Self::Red => "text-red-600 bg-red-100",
            Self::Gray => "text-gray-600 bg-gray-100",
        }
    }

    /// Foreground escape sequence for terminals
    pub fn ansi(&self) -> &'static str {
        match self {
            Self::Green => FG_GREEN,
            Self::Red => FG_RED,
            Self::Gray => FG_BRIGHT_BLACK,
        }
    }
}

pub fn status_color(status: CharacterStatus) -> StatusColor {
    match status {
        CharacterStatus::Alive => StatusColor::Green,
        CharacterStatus::Dead => StatusColor::Red,
        CharacterStatus::Unknown => StatusColor::Gray,
    }
}
