//! Retrieval API client with local-fallback degradation
//!
//! On load: health-check the API, then fetch all characters as the active
//! working set. Any failure along that path (network error, timeout,
//! non-2xx status, `success: false` envelope) marks the API unhealthy,
//! installs the bundled dataset instead, and records a non-fatal advisory
//! message. Search and lookup degrade to the bundled set while unhealthy.

use sdx_common::api::{Envelope, HealthResponse};
use sdx_common::{Character, Error, Result};
use std::time::Duration;
use tracing::{info, warn};

use crate::fallback::bundled_characters;

/// Default API base URL
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:3001";

/// Bounded request timeout; expiry counts as a fetch failure
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the character retrieval API
pub struct CharacterClient {
    http: reqwest::Client,
    base_url: String,
    healthy: bool,
    characters: Vec<Character>,
    advisory: Option<String>,
}

impl CharacterClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| Error::Internal(format!("HTTP client construction failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
            healthy: false,
            characters: Vec::new(),
            advisory: None,
        })
    }

    /// Load the working set: health check, then fetch-all, with fallback
    pub async fn load(&mut self) {
        match self.load_from_api().await {
            Ok(characters) => {
                info!("Loaded {} characters from API", characters.len());
                self.healthy = true;
                self.characters = characters;
                self.advisory = None;
            }
            Err(e) => {
                warn!("Failed to load characters from API: {}", e);
                self.healthy = false;
                self.characters = bundled_characters().to_vec();
                self.advisory =
                    Some("Failed to connect to API. Using local data as fallback.".to_string());
            }
        }
    }

    /// Repeat the load sequence; a refresh supersedes any earlier state
    pub async fn refresh(&mut self) {
        self.load().await;
    }

    /// Active working set (API data when healthy, bundled otherwise)
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn api_healthy(&self) -> bool {
        self.healthy
    }

    /// Non-fatal advisory set when running on fallback data
    pub fn advisory(&self) -> Option<&str> {
        self.advisory.as_deref()
    }

    /// Search by name; API substring match when healthy, local otherwise
    pub async fn search(&self, query: &str) -> Result<Vec<Character>> {
        if !self.healthy {
            return Ok(local_search(query));
        }

        let url = format!("{}/api/characters/name/{}", self.base_url, query);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        // Not-found is an empty result, not an error
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }

        let envelope: Envelope<Character> = response
            .json()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        match envelope.data {
            Some(character) if envelope.success => Ok(vec![character]),
            _ => Ok(Vec::new()),
        }
    }

    /// Look up one character by id; local lookup when unhealthy
    pub async fn get_by_id(&self, id: &str) -> Result<Option<Character>> {
        if !self.healthy {
            return Ok(bundled_characters().iter().find(|c| c.id == id).cloned());
        }

        let url = format!("{}/api/characters/{}", self.base_url, id);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let envelope: Envelope<Character> = response
            .json()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        Ok(envelope.data.filter(|_| envelope.success))
    }

    async fn load_from_api(&self) -> Result<Vec<Character>> {
        self.health_check().await?;

        let url = format!("{}/api/characters", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Upstream(format!(
                "Fetch failed with status {}",
                response.status()
            )));
        }

        let envelope: Envelope<Vec<Character>> = response
            .json()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        if !envelope.success {
            return Err(Error::Upstream(
                envelope
                    .message
                    .unwrap_or_else(|| "API reported failure".to_string()),
            ));
        }

        Ok(envelope.data.unwrap_or_default())
    }

    async fn health_check(&self) -> Result<()> {
        let url = format!("{}/api/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Upstream("API health check failed".to_string()));
        }

        let health: HealthResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(e.to_string()))?;

        if !health.success {
            return Err(Error::Upstream("API reported unhealthy".to_string()));
        }

        Ok(())
    }
}

/// Substring search over the bundled set: name, full name, and aliases
fn local_search(query: &str) -> Vec<Character> {
    let needle = query.to_lowercase();
    bundled_characters()
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.basic_info
                    .full_name
                    .as_deref()
                    .is_some_and(|n| n.to_lowercase().contains(&needle))
                || c.basic_info
                    .aliases
                    .iter()
                    .any(|a| a.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_search_matches_name_substring() {
        let results = local_search("uzumaki");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Naruto Uzumaki");
    }

    #[test]
    fn local_search_matches_aliases() {
        let results = local_search("seventh hokage");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "naruto_uzumaki");
    }

    #[test]
    fn local_search_misses_return_empty() {
        assert!(local_search("madara").is_empty());
    }

    #[tokio::test]
    async fn unreachable_api_falls_back_to_bundled_data() {
        // Reserved TEST-NET-1 address; connection fails fast with the
        // bounded timeout
        let mut client = CharacterClient::new("http://192.0.2.1:9").unwrap();
        client.load().await;

        assert!(!client.api_healthy());
        assert_eq!(client.characters().len(), bundled_characters().len());
        assert!(client.advisory().is_some());
    }

    #[tokio::test]
    async fn unhealthy_client_searches_locally() {
        let mut client = CharacterClient::new("http://192.0.2.1:9").unwrap();
        client.load().await;

        let results = client.search("lee").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "rock_lee");

        let found = client.get_by_id("tenten").await.unwrap();
        assert!(found.is_some());
        assert!(client.get_by_id("nobody").await.unwrap().is_none());
    }
}
