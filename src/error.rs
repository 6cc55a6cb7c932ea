use thiserror::Error;

/// Failure classes surfaced by the catalog layer.
///
/// Reads never carry these to the caller; `list_all` degrades to an empty
/// catalog instead. Writes, deletes and authentication propagate them, since
/// the caller has to know when an edit or login did not stick.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response from the catalog backend.
    #[error("{status} -> {detail}")]
    Status {
        status: reqwest::StatusCode,
        detail: String,
    },

    #[error("JSON parse failed: {0}")]
    Decode(#[from] serde_json::Error),

    /// Live login rejected. Callers show this message verbatim.
    #[error("Invalid Credentials")]
    InvalidCredentials,

    #[error("{0}")]
    Validation(String),

    /// The operation needs a piece of configuration that is absent.
    #[error("{0} not configured")]
    NotConfigured(&'static str),

    #[error("profile store: {0}")]
    Store(#[from] std::io::Error),
}

impl CatalogError {
    /// Unreachable backend or non-success status. These are the only
    /// failures a bounded read retry is allowed to absorb.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            CatalogError::Transport(_) | CatalogError::Status { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
