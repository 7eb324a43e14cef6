//! Configuration constants, connection profiles and the INI profile store
//!
//! Profiles live in an INI file, one section per profile name:
//!
//! ```ini
//! [default]
//! base_url = https://rickandmortyapi.com/api
//! timeout = 10
//! episode_errors = degrade
//! ```

use crate::repository::EpisodeErrorPolicy;
use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;
use std::time::Duration;

/// Default profile file path for portaline
pub const DEFAULT_PROFILE_PATH: &str = "~/.portaline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "PORTALINE_PROFILE_PATH";

/// Environment variable holding a tracing filter directive, e.g. `portaline=debug`
pub const LOG_LEVEL_ENV_VAR: &str = "PORTALINE_LOG_LEVEL";

/// Public Rick and Morty API
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// Connection settings for the upstream API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiProfile {
    base_url: String,
    timeout: Duration,
    user_agent: String,
    episode_errors: EpisodeErrorPolicy,
}

impl Default for ApiProfile {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("portaline/{}", env!("CARGO_PKG_VERSION")),
            episode_errors: EpisodeErrorPolicy::default(),
        }
    }
}

impl ApiProfile {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    pub fn episode_errors(&self) -> EpisodeErrorPolicy {
        self.episode_errors
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_episode_errors(mut self, policy: EpisodeErrorPolicy) -> Self {
        self.episode_errors = policy;
        self
    }
}

/// Reads named profiles from an INI file
pub struct IniProfileStore {
    path: String,
}

impl IniProfileStore {
    /// `path` may start with `~`
    pub fn new(path: &str) -> Self {
        Self {
            path: shellexpand::tilde(path).into_owned(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Look up a profile by section name.
    ///
    /// Returns `Ok(None)` when the file or the section does not exist.
    pub fn get_profile(&self, name: &str) -> Result<Option<ApiProfile>> {
        if !Path::new(&self.path).exists() {
            tracing::debug!("Profile file '{}' does not exist", self.path);
            return Ok(None);
        }

        let ini = Ini::load_from_file(&self.path)
            .with_context(|| format!("Failed to read profile file '{}'", self.path))?;
        Self::profile_from_ini(&ini, name)
    }

    fn profile_from_ini(ini: &Ini, name: &str) -> Result<Option<ApiProfile>> {
        let Some(section) = ini.section(Some(name)) else {
            return Ok(None);
        };

        let mut profile = ApiProfile::default();
        if let Some(base_url) = section.get("base_url") {
            profile.base_url = base_url.trim().to_string();
        }
        if let Some(timeout) = section.get("timeout") {
            let secs: u64 = timeout
                .trim()
                .parse()
                .with_context(|| format!("Invalid timeout '{timeout}' in profile '{name}'"))?;
            profile.timeout = Duration::from_secs(secs);
        }
        if let Some(user_agent) = section.get("user_agent") {
            profile.user_agent = user_agent.trim().to_string();
        }
        if let Some(policy) = section.get("episode_errors") {
            profile.episode_errors = policy
                .trim()
                .parse()
                .with_context(|| format!("Invalid episode_errors in profile '{name}'"))?;
        }

        Ok(Some(profile))
    }
}
