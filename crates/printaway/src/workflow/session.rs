//! Persisted staff session and route guards.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::api::{extract_auth_token, ApiClient};
use crate::error::Result;
use crate::schema::{AuthResult, AuthUser};
use crate::services;

/// File-backed store for the session cookie, so a staff login survives
/// process restarts. The file holds the raw cookie pair.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user's config directory, next to the client config.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("printaway").join("session"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the saved cookie, if any. A missing file is simply "no
    /// session"; a file that does not hold the auth cookie, or any other
    /// read failure, is logged and treated the same.
    pub fn load(&self) -> Option<String> {
        match fs::read_to_string(&self.path) {
            Ok(cookie) => {
                let cookie = cookie.trim().to_string();
                if extract_auth_token(&cookie).is_some() {
                    Some(cookie)
                } else {
                    None
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => {
                warn!("Failed to read session file: {}", e);
                None
            }
        }
    }

    pub fn save(&self, cookie: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, cookie)?;
        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    /// Removes the saved session. Nothing to remove is fine.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// A client variant carrying the saved session cookie, when one exists.
    pub fn client_with_session(&self, client: &ApiClient) -> ApiClient {
        match self.load() {
            Some(cookie) => client.with_cookie_header(cookie),
            None => client.clone(),
        }
    }
}

/// Validates the session and yields the user, or `None` when the caller
/// must log in first.
pub async fn guard_admin(client: &ApiClient) -> Option<AuthUser> {
    match services::validate_session(client).await {
        AuthResult {
            success: true,
            user: Some(user),
        } => Some(user),
        _ => None,
    }
}

/// As [`guard_admin`], but additionally requires the superadmin role.
pub async fn guard_superadmin(client: &ApiClient) -> Option<AuthUser> {
    guard_admin(client)
        .await
        .filter(|user| user.role.is_superadmin())
}

/// Logs out and clears the stored session. The local session is cleared
/// even when the backend call fails, so the caller is never stuck
/// half-logged-in.
pub async fn logout(client: &ApiClient, store: &SessionStore) -> Result<()> {
    services::logout(client).await;
    store.clear()
}
