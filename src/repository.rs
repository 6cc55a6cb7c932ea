use crate::config::BackendConfig;
use crate::entry::{CatalogEntry, EntryId, SaveMode};
use crate::error::{CatalogError, Result};
use crate::remote::{RemoteCatalogApi, RemoteCatalogClient};
use crate::seed;
use crate::session::{self, AuthSession, SessionManager};
use crate::store::{ProfileStore, CATALOG_SLOT};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

const READ_RETRY_ATTEMPTS: u32 = 2; // first try included
const READ_RETRY_DELAY: Duration = Duration::from_millis(250);

#[derive(Clone)]
enum Backend {
    Live(Arc<dyn RemoteCatalogApi>),
    Offline(Arc<dyn ProfileStore>),
}

/// Dual-mode CRUD facade over the catalog.
///
/// Which backend is active is decided once, from [`BackendConfig`], and
/// never re-examined per call; everything downstream behaves identically in
/// both modes apart from where the bytes go. Cheap to clone.
#[derive(Clone)]
pub struct CatalogRepository {
    backend: Backend,
    session: SessionManager,
    // Serializes offline read-modify-write; the slot update is not atomic.
    local_write: Arc<Mutex<()>>,
}

impl CatalogRepository {
    /// Repository against whichever backend `config` selects, with the
    /// session and the offline catalog living in `store`.
    pub fn new(
        config: &BackendConfig,
        store: Arc<dyn ProfileStore>,
        session: SessionManager,
    ) -> Result<Self> {
        let backend = match config.base_endpoint() {
            Some(base) => {
                info!("Catalog backend: live at {}", base);
                Backend::Live(Arc::new(RemoteCatalogClient::new(base)?))
            }
            None => {
                info!("Catalog backend: offline simulation");
                Backend::Offline(store)
            }
        };
        Ok(CatalogRepository {
            backend,
            session,
            local_write: Arc::new(Mutex::new(())),
        })
    }

    /// Live repository over a caller-supplied remote client.
    pub fn with_remote(remote: Arc<dyn RemoteCatalogApi>, session: SessionManager) -> Self {
        CatalogRepository {
            backend: Backend::Live(remote),
            session,
            local_write: Arc::new(Mutex::new(())),
        }
    }

    /// Offline repository over `store`.
    pub fn offline(store: Arc<dyn ProfileStore>, session: SessionManager) -> Self {
        CatalogRepository {
            backend: Backend::Offline(store),
            session,
            local_write: Arc::new(Mutex::new(())),
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self.backend, Backend::Live(_))
    }

    /// Every catalog entry, newest offline content first.
    ///
    /// Reads never fail: any transport, status or decode problem degrades
    /// to an empty catalog, so a backend blip never blanks the screen. Live
    /// transport failures get one short retry before giving up.
    pub async fn list_all(&self) -> Vec<CatalogEntry> {
        match &self.backend {
            Backend::Live(remote) => {
                let mut attempt = 0;
                loop {
                    attempt += 1;
                    match remote.fetch_entries().await {
                        Ok(entries) => return entries,
                        Err(e) if e.is_transport() && attempt < READ_RETRY_ATTEMPTS => {
                            debug!("Catalog fetch attempt {} failed, retrying: {}", attempt, e);
                            tokio::time::sleep(READ_RETRY_DELAY).await;
                        }
                        Err(e) => {
                            warn!("Catalog fetch failed, serving empty catalog: {}", e);
                            return Vec::new();
                        }
                    }
                }
            }
            Backend::Offline(store) => match Self::read_local(store).await {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("Offline catalog unreadable, serving empty catalog: {}", e);
                    Vec::new()
                }
            },
        }
    }

    /// Create or replace an entry on the active backend and return the
    /// canonical record. Write failures propagate; the caller must know
    /// when an edit did not stick. Merging the returned record into any
    /// in-memory view is the caller's job (`catalog::merge_saved`).
    pub async fn save(&self, entry: CatalogEntry) -> Result<CatalogEntry> {
        match &self.backend {
            Backend::Live(remote) => {
                let token = self.require_token().await?;
                match entry.save_mode() {
                    SaveMode::Replace(id) => {
                        info!("Replacing entry {} on backend", id);
                        remote.replace_entry(id, &entry, &token).await
                    }
                    SaveMode::Create => {
                        info!("Creating entry on backend");
                        remote.create_entry(&entry, &token).await
                    }
                }
            }
            Backend::Offline(store) => {
                let _guard = self.local_write.lock().await;
                let mut entry = entry;
                let mut catalog = Self::read_local(store).await?;
                let id = match entry.id.clone() {
                    Some(id) => id,
                    None => {
                        let id = EntryId::mint();
                        entry.id = Some(id.clone());
                        id
                    }
                };
                match catalog.iter_mut().find(|e| e.id.as_ref() == Some(&id)) {
                    Some(slot) => *slot = entry.clone(),
                    None => catalog.insert(0, entry.clone()),
                }
                Self::write_local(store, &catalog).await?;
                info!("Saved entry {} to offline catalog", id);
                Ok(entry)
            }
        }
    }

    /// Delete an entry on the active backend. Offline, an unknown id is a
    /// no-op; live, the backend's verdict propagates either way.
    pub async fn remove(&self, id: &EntryId) -> Result<()> {
        match &self.backend {
            Backend::Live(remote) => {
                let token = self.require_token().await?;
                remote.delete_entry(id, &token).await?;
                info!("Deleted entry {} on backend", id);
                Ok(())
            }
            Backend::Offline(store) => {
                let _guard = self.local_write.lock().await;
                let mut catalog = Self::read_local(store).await?;
                catalog.retain(|e| e.id.as_ref() != Some(id));
                Self::write_local(store, &catalog).await?;
                info!("Deleted entry {} from offline catalog", id);
                Ok(())
            }
        }
    }

    /// Authenticate and open a session. Live mode asks the backend;
    /// offline mode simulates issuance. The token is persisted so
    /// mutations after a restart still carry it.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession> {
        let auth = match &self.backend {
            Backend::Live(remote) => {
                let token = remote.login(email, password).await?;
                AuthSession {
                    email: email.to_string(),
                    token,
                }
            }
            Backend::Offline(_) => session::simulated_login(email, password)?,
        };
        self.session.open(&auth).await?;
        Ok(auth)
    }

    /// End the current session. Safe to call with none open.
    pub async fn logout(&self) -> Result<()> {
        self.session.close().await
    }

    /// First-load catalog.
    ///
    /// An offline profile whose catalog comes back empty is populated with
    /// the built-in sample catalog; once data exists, later loads return it
    /// untouched. Live mode never seeds.
    pub async fn bootstrap(&self) -> Result<Vec<CatalogEntry>> {
        let Backend::Offline(store) = &self.backend else {
            return Ok(self.list_all().await);
        };
        let _guard = self.local_write.lock().await;
        let entries = match Self::read_local(store).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Offline catalog unreadable at bootstrap, reseeding: {}", e);
                Vec::new()
            }
        };
        if !entries.is_empty() {
            return Ok(entries);
        }
        let seeded = seed::sample_catalog();
        Self::write_local(store, &seeded).await?;
        info!("Seeded offline catalog with {} entries", seeded.len());
        Ok(seeded)
    }

    async fn require_token(&self) -> Result<String> {
        self.session
            .bearer_token()
            .await?
            .ok_or(CatalogError::NotConfigured("bearer token"))
    }

    async fn read_local(store: &Arc<dyn ProfileStore>) -> Result<Vec<CatalogEntry>> {
        match store.get(CATALOG_SLOT).await? {
            Some(text) => Ok(serde_json::from_str(&text)?),
            None => Ok(Vec::new()),
        }
    }

    async fn write_local(store: &Arc<dyn ProfileStore>, catalog: &[CatalogEntry]) -> Result<()> {
        let text = serde_json::to_string(catalog)?;
        store.put(CATALOG_SLOT, &text).await
    }
}
