//! Pagination metadata, list responses and list filters

use crate::models::{Character, CharacterStatus, Gender};
use serde::Serialize;

/// Pagination block of a list response
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct PaginationInfo {
    pub count: u32,
    pub pages: u32,
    pub next: Option<String>,
    pub prev: Option<String>,
}

impl PaginationInfo {
    /// Zeroed pagination used for "nothing found"
    pub fn empty() -> Self {
        Self::default()
    }
}

/// One page of characters
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CharacterPage {
    pub info: PaginationInfo,
    pub results: Vec<Character>,
}

impl CharacterPage {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Optional filters for the character list. `None` means unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharacterFilters {
    pub name: Option<String>,
    pub status: Option<CharacterStatus>,
    pub species: Option<String>,
    pub character_type: Option<String>,
    pub gender: Option<Gender>,
    /// 1-based page number
    pub page: Option<u32>,
}

impl CharacterFilters {
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Query parameters for `GET /character`.
    ///
    /// Unset fields are omitted, and so are empty strings and page 0: an empty
    /// value is never put on the wire.
    pub fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        push_text(&mut params, "name", self.name.as_deref());
        if let Some(status) = self.status {
            params.push(("status", status.as_str().to_string()));
        }
        push_text(&mut params, "species", self.species.as_deref());
        push_text(&mut params, "type", self.character_type.as_deref());
        if let Some(gender) = self.gender {
            params.push(("gender", gender.as_str().to_string()));
        }
        if let Some(page) = self.page.filter(|page| *page > 0) {
            params.push(("page", page.to_string()));
        }

        params
    }
}

fn push_text(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.push((key, value.to_string()));
    }
}
