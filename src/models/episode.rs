//! Episode domain model and episode-code formatting

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static EPISODE_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"S(\d+)E(\d+)").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Episode {
    pub id: u32,
    pub name: String,
    /// Free-form, never parsed
    pub air_date: String,
    /// Code in the form `S01E05`
    pub episode: String,
    /// Character reference URLs, in upstream order
    pub characters: Vec<String>,
    pub url: String,
    pub created: String,
}

/// Turn `S01E05` into `Season 01, Episode 05`.
///
/// Season and episode numbers are padded to at least two digits. A code that
/// does not contain `S<digits>E<digits>` is returned unchanged.
pub fn format_episode_code(code: &str) -> String {
    match EPISODE_CODE_PATTERN.captures(code) {
        Some(caps) => format!("Season {:0>2}, Episode {:0>2}", &caps[1], &caps[2]),
        None => code.to_string(),
    }
}
