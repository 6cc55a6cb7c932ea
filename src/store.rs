use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

/// Configured endpoint URL slot.
pub const API_URL_SLOT: &str = "marquee_api_url";
/// Bearer token slot.
pub const TOKEN_SLOT: &str = "marquee_token";
/// Serialized offline catalog slot.
pub const CATALOG_SLOT: &str = "marquee_catalog";

/// String-keyed durable storage for the viewer profile: the configured
/// endpoint, the bearer token and the offline catalog.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get(&self, slot: &str) -> Result<Option<String>>;
    async fn put(&self, slot: &str, value: &str) -> Result<()>;
    async fn remove(&self, slot: &str) -> Result<()>;
}

/// Profile slots persisted as one JSON object on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    slots: Mutex<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, creating it on first write. A file that
    /// exists but does not parse fails here rather than reading as empty,
    /// so a damaged profile is visible at startup instead of quietly lost.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let slots: HashMap<String, String> = match fs::read_to_string(&path).await {
            Ok(text) => serde_json::from_str(&text)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(CatalogError::Store(e)),
        };
        debug!("Opened profile store at {} ({} slots)", path.display(), slots.len());
        Ok(JsonFileStore {
            path,
            slots: Mutex::new(slots),
        })
    }

    /// Open the store at the platform default location.
    pub async fn open_default() -> Result<Self> {
        let dir = dirs::data_local_dir()
            .ok_or(CatalogError::NotConfigured("platform data directory"))?
            .join("marquee");
        fs::create_dir_all(&dir).await?;
        Self::open(dir.join("profile.json")).await
    }

    // Write-through via a sibling temp file so a crash mid-write leaves the
    // previous profile intact.
    async fn flush(&self, slots: &HashMap<String, String>) -> Result<()> {
        let text = serde_json::to_string_pretty(slots)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, text).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl ProfileStore for JsonFileStore {
    async fn get(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.lock().await.get(slot).cloned())
    }

    // Mutations stage a copy and commit it only after the flush lands, so
    // the cache never holds state the file does not.
    async fn put(&self, slot: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().await;
        let mut next = slots.clone();
        next.insert(slot.to_string(), value.to_string());
        self.flush(&next).await?;
        *slots = next;
        Ok(())
    }

    async fn remove(&self, slot: &str) -> Result<()> {
        let mut slots = self.slots.lock().await;
        if !slots.contains_key(slot) {
            return Ok(());
        }
        let mut next = slots.clone();
        next.remove(slot);
        self.flush(&next).await?;
        *slots = next;
        Ok(())
    }
}

/// In-memory store backing the ephemeral simulation profile and the test
/// suite. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get(&self, slot: &str) -> Result<Option<String>> {
        Ok(self.slots.lock().await.get(slot).cloned())
    }

    async fn put(&self, slot: &str, value: &str) -> Result<()> {
        self.slots
            .lock()
            .await
            .insert(slot.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, slot: &str) -> Result<()> {
        self.slots.lock().await.remove(slot);
        Ok(())
    }
}
