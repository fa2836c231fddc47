pub mod admins;
pub mod auth;
pub mod jobs;
pub mod order;
pub mod status;

use anyhow::{bail, Result};
use printaway::workflow::{guard_admin, guard_superadmin, SessionStore};
use printaway::{ApiClient, AuthUser};

/// Attaches the saved session and verifies it is still valid. Commands
/// behind this guard never reach the backend unauthenticated.
pub async fn require_admin(
    client: &ApiClient,
    store: &SessionStore,
) -> Result<(ApiClient, AuthUser)> {
    let client = store.client_with_session(client);
    match guard_admin(&client).await {
        Some(user) => Ok((client, user)),
        None => bail!("You are not logged in. Run `printaway login` first."),
    }
}

/// As [`require_admin`], but superadmin-only.
pub async fn require_superadmin(
    client: &ApiClient,
    store: &SessionStore,
) -> Result<(ApiClient, AuthUser)> {
    let client = store.client_with_session(client);
    match guard_superadmin(&client).await {
        Some(user) => Ok((client, user)),
        None => bail!("This command requires a superadmin session."),
    }
}
