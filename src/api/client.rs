//! # API Client
//!
//! Thin wrapper around a reqwest `Client` bound to one API base URL.

use crate::api::error::ApiError;
use crate::config::ApiProfile;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from a connection profile
    pub fn new(profile: &ApiProfile) -> crate::api::Result<Self> {
        tracing::debug!(
            "Creating API client for {} (timeout {:?})",
            profile.base_url(),
            profile.timeout()
        );
        let client = Client::builder()
            .timeout(profile.timeout())
            .user_agent(profile.user_agent())
            .build()?;
        Self::with_client(client, profile.base_url())
    }

    /// Create an ApiClient with an existing reqwest Client.
    pub fn with_client(client: Client, base_url: &str) -> crate::api::Result<Self> {
        Url::parse(base_url).map_err(|e| ApiError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET `path` relative to the base URL and decode the JSON body
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> crate::api::Result<T> {
        let url = self.url(path);
        tracing::debug!("GET {} {:?}", url, query);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::api::Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::debug!("Upstream answered {}", status);
            return Err(ApiError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        let deserializer = &mut serde_json::Deserializer::from_str(&body);
        serde_path_to_error::deserialize(deserializer).map_err(|e| ApiError::Json {
            path: e.path().to_string(),
            source: e.into_inner(),
        })
    }
}
