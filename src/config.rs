use crate::error::Result;
use crate::store::{ProfileStore, API_URL_SLOT};
use std::env;

/// Where the catalog lives: a remote service when an endpoint is configured,
/// the local profile store otherwise. Every component consults this switch
/// and nothing else, so the two modes stay behaviorally symmetric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendConfig {
    endpoint: Option<String>,
}

impl BackendConfig {
    /// Offline simulation mode.
    pub fn offline() -> Self {
        BackendConfig { endpoint: None }
    }

    /// Live mode against `endpoint`. Blank input means offline; an endpoint
    /// that is all whitespace cannot be fetched. Trailing slashes are
    /// dropped so path building stays uniform.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        let trimmed = endpoint.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            BackendConfig { endpoint: None }
        } else {
            BackendConfig {
                endpoint: Some(trimmed.to_string()),
            }
        }
    }

    /// Configuration from `MARQUEE_API_URL`; offline when unset.
    pub fn from_env() -> Self {
        match env::var("MARQUEE_API_URL") {
            Ok(url) => BackendConfig::with_endpoint(url),
            Err(_) => BackendConfig::offline(),
        }
    }

    /// Restore the endpoint persisted in the profile store.
    pub async fn load(store: &dyn ProfileStore) -> Result<Self> {
        Ok(match store.get(API_URL_SLOT).await? {
            Some(url) => BackendConfig::with_endpoint(url),
            None => BackendConfig::offline(),
        })
    }

    /// Persist (or clear) the endpoint so the next start reuses it.
    pub async fn persist(&self, store: &dyn ProfileStore) -> Result<()> {
        match &self.endpoint {
            Some(url) => store.put(API_URL_SLOT, url).await,
            None => store.remove(API_URL_SLOT).await,
        }
    }

    pub fn is_live(&self) -> bool {
        self.endpoint.is_some()
    }

    pub fn base_endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}
