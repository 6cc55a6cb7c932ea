use chrono::{Datelike, Local, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

/// Identifiers longer than this are treated as backend-issued.
const SHORT_ID_MAX_LEN: usize = 10;

// Timestamp-seeded so minted ids sort after everything already issued;
// the counter keeps rapid saves from colliding on the same millisecond.
static NEXT_ENTRY_ID: Lazy<AtomicI64> =
    Lazy::new(|| AtomicI64::new(Utc::now().timestamp_millis()));

/// Catalog entry identifier.
///
/// Two provenances exist on the wire: numbers minted by this client when an
/// entry is first saved offline, and opaque strings issued by the remote
/// backend. Which kind an entry carries decides create-vs-replace dispatch
/// in [`CatalogEntry::save_mode`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Num(i64),
    Text(String),
}

impl EntryId {
    /// Mint a fresh client-side identifier.
    pub fn mint() -> Self {
        EntryId::Num(NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// True for identifiers issued by the remote backend: long opaque
    /// strings. Anything numeric or short is client-minted.
    pub fn is_issued(&self) -> bool {
        match self {
            EntryId::Num(_) => false,
            EntryId::Text(s) => s.len() > SHORT_ID_MAX_LEN,
        }
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Num(n) => write!(f, "{n}"),
            EntryId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Movie,
    Series,
}

/// One catalog title. Mirrors the backend's JSON shape; every metadata
/// field is optional so partially filled records round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<EntryId>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub views: Option<String>,
    /// Present for series. The core never looks inside a season.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub seasons: Vec<serde_json::Value>,
}

impl CatalogEntry {
    /// Hero artwork, falling back to the poster when no dedicated hero
    /// asset exists.
    pub fn hero(&self) -> Option<&str> {
        self.hero_image.as_deref().or(self.image.as_deref())
    }

    /// Create-vs-replace dispatch for a save: only an entry that already
    /// carries a backend-issued identifier is a replace.
    pub fn save_mode(&self) -> SaveMode<'_> {
        match &self.id {
            Some(id) if id.is_issued() => SaveMode::Replace(id),
            _ => SaveMode::Create,
        }
    }

    /// Prefilled draft for the metadata editor.
    pub fn draft(kind: EntryKind) -> Self {
        CatalogEntry {
            kind,
            rating: Some("New".to_string()),
            year: Some(Local::now().year()),
            category: Some("New Releases".to_string()),
            status: Some("ready".to_string()),
            views: Some("0".to_string()),
            ..CatalogEntry::default()
        }
    }
}

/// How a save reaches the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveMode<'a> {
    Create,
    Replace(&'a EntryId),
}
