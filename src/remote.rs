use crate::entry::{CatalogEntry, EntryId};
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Operations the remote catalog service offers.
#[async_trait]
pub trait RemoteCatalogApi: Send + Sync {
    async fn fetch_entries(&self) -> Result<Vec<CatalogEntry>>;
    async fn create_entry(&self, entry: &CatalogEntry, token: &str) -> Result<CatalogEntry>;
    async fn replace_entry(
        &self,
        id: &EntryId,
        entry: &CatalogEntry,
        token: &str,
    ) -> Result<CatalogEntry>;
    async fn delete_entry(&self, id: &EntryId, token: &str) -> Result<()>;
    async fn login(&self, email: &str, password: &str) -> Result<String>;
}

/// HTTP client for the catalog service.
#[derive(Debug, Clone)]
pub struct RemoteCatalogClient {
    client: Client,
    base: String,
}

impl RemoteCatalogClient {
    pub fn new(base_endpoint: &str) -> Result<Self> {
        let user_agent = format!("marquee/{}", env!("CARGO_PKG_VERSION"));
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .user_agent(user_agent)
            .build()?;
        Ok(RemoteCatalogClient {
            client,
            base: base_endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn entries_url(&self) -> String {
        format!("{}/movies", self.base)
    }

    fn entry_url(&self, id: &EntryId) -> String {
        format!(
            "{}/movies/{}",
            self.base,
            urlencoding::encode(&id.to_string())
        )
    }

    async fn decode<T: DeserializeOwned>(res: reqwest::Response) -> Result<T> {
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            return Err(CatalogError::Status {
                status,
                detail: text,
            });
        }
        Ok(serde_json::from_str(&text)?)
    }

    async fn check(res: reqwest::Response) -> Result<()> {
        let status = res.status();
        if !status.is_success() {
            let detail = res.text().await.unwrap_or_default();
            return Err(CatalogError::Status { status, detail });
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteCatalogApi for RemoteCatalogClient {
    async fn fetch_entries(&self) -> Result<Vec<CatalogEntry>> {
        let res = self.client.get(self.entries_url()).send().await?;
        Self::decode(res).await
    }

    async fn create_entry(&self, entry: &CatalogEntry, token: &str) -> Result<CatalogEntry> {
        let res = self
            .client
            .post(self.entries_url())
            .bearer_auth(token)
            .json(entry)
            .send()
            .await?;
        Self::decode(res).await
    }

    async fn replace_entry(
        &self,
        id: &EntryId,
        entry: &CatalogEntry,
        token: &str,
    ) -> Result<CatalogEntry> {
        let res = self
            .client
            .put(self.entry_url(id))
            .bearer_auth(token)
            .json(entry)
            .send()
            .await?;
        Self::decode(res).await
    }

    async fn delete_entry(&self, id: &EntryId, token: &str) -> Result<()> {
        let res = self
            .client
            .delete(self.entry_url(id))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(res).await
    }

    async fn login(&self, email: &str, password: &str) -> Result<String> {
        #[derive(Deserialize)]
        struct LoginResponse {
            token: String,
        }

        let res = self
            .client
            .post(format!("{}/auth/login", self.base))
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;
        let status = res.status();
        let text = res.text().await?;
        if !status.is_success() {
            // Transport problems stay Transport; only an actual rejection
            // collapses to the generic credentials message.
            debug!("Login rejected with status {}", status);
            return Err(CatalogError::InvalidCredentials);
        }
        let data: LoginResponse = serde_json::from_str(&text)?;
        Ok(data.token)
    }
}
