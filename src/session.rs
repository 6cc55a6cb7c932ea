use crate::error::{CatalogError, Result};
use crate::store::{ProfileStore, TOKEN_SLOT};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

const MIN_PASSWORD_CHARS: usize = 6;

/// An authenticated viewer: the bearer token plus the email that earned it.
/// Only the token is durable; a session restored after restart has the
/// token and nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub email: String,
    pub token: String,
}

/// Owns the token slot of the profile store. Mutating repository calls read
/// the token fresh through here at call time; login and logout are the only
/// writers. At most one session exists at a time.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<dyn ProfileStore>,
}

impl SessionManager {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        SessionManager { store }
    }

    /// Current bearer token, if a session is open.
    pub async fn bearer_token(&self) -> Result<Option<String>> {
        self.store.get(TOKEN_SLOT).await
    }

    /// Record a session obtained from either backend.
    pub async fn open(&self, session: &AuthSession) -> Result<()> {
        self.store.put(TOKEN_SLOT, &session.token).await?;
        info!("Session opened for {}", session.email);
        Ok(())
    }

    /// Drop the stored token. Safe to call with no session open.
    pub async fn close(&self) -> Result<()> {
        self.store.remove(TOKEN_SLOT).await?;
        info!("Session closed");
        Ok(())
    }
}

/// Simulation-mode login. Any password of six or more characters earns a
/// synthetic timestamp token; this is a stand-in for the live auth flow,
/// not authentication.
pub fn simulated_login(email: &str, password: &str) -> Result<AuthSession> {
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err(CatalogError::Validation("Password too short".to_string()));
    }
    Ok(AuthSession {
        email: email.to_string(),
        token: format!("mock-jwt-token-{}", Utc::now().timestamp_millis()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_passwords_are_rejected() {
        let err = simulated_login("viewer@example.net", "12345").unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(err.to_string(), "Password too short");
    }

    #[test]
    fn six_characters_earn_a_token() {
        let session = simulated_login("viewer@example.net", "123456").expect("login");
        assert_eq!(session.email, "viewer@example.net");
        assert!(session.token.starts_with("mock-jwt-token-"));
    }
}
