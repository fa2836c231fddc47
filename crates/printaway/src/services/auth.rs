//! Staff authentication: login, logout, session validation.

use reqwest::header::SET_COOKIE;
use secrecy::ExposeSecret;
use serde_json::json;
use tracing::{debug, error, warn};

use crate::api::{extract_error_message, ApiClient, ApiResult, AUTH_COOKIE_NAME};
use crate::schema::{AuthResult, AuthUser, LoginForm};

/// Result of a login attempt. On success the backend sets the session
/// cookie; we also surface it for callers that persist sessions themselves.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub success: bool,
    pub user: Option<AuthUser>,
    pub error: Option<String>,
    pub session_cookie: Option<String>,
}

impl LoginResult {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            user: None,
            error: Some(message.into()),
            session_cookie: None,
        }
    }
}

/// Pulls the session cookie pair out of the login response headers.
fn session_cookie_from(response: &reqwest::Response) -> Option<String> {
    for value in response.headers().get_all(SET_COOKIE) {
        if let Ok(raw) = value.to_str() {
            if raw.starts_with(AUTH_COOKIE_NAME) {
                let pair = raw.split(';').next().unwrap_or(raw);
                return Some(pair.trim().to_string());
            }
        }
    }
    None
}

/// Attempts to log in. Wrong credentials produce a failed [`LoginResult`],
/// not an error; only building the request can fail upstream.
pub async fn login(client: &ApiClient, form: &LoginForm) -> ApiResult<LoginResult> {
    let body = json!({
        "username": form.username,
        "password": form.password.expose_secret(),
    });

    let response = match client.post("/api/adminauth/login").json(&body).send().await {
        Ok(response) => response,
        Err(e) => {
            warn!("Login request failed: {}", e);
            return Ok(LoginResult::failure("Network error"));
        }
    };

    if !response.status().is_success() {
        let text = response.text().await.unwrap_or_default();
        return Ok(LoginResult::failure(extract_error_message(
            &text,
            "Login failed",
        )));
    }

    let session_cookie = session_cookie_from(&response);
    let user = response.json::<AuthUser>().await.ok();
    debug!(
        username = %form.username,
        "Login succeeded"
    );

    Ok(LoginResult {
        success: true,
        user,
        error: None,
        session_cookie,
    })
}

/// Ends the session server-side. A backend failure is logged and swallowed;
/// the caller clears its local session either way.
pub async fn logout(client: &ApiClient) {
    match ApiClient::send(client.post("/api/adminauth/logout")).await {
        Ok(_) => debug!("Logged out"),
        Err(e) => error!("Logout request failed: {}", e),
    }
}

/// Checks whether the current session cookie is still valid. Never errors:
/// any failure means "not authenticated".
pub async fn validate_session(client: &ApiClient) -> AuthResult {
    match client.get_json::<AuthUser>("/api/adminauth/validate-user").await {
        Ok(user) => AuthResult::authenticated(user),
        Err(e) => {
            debug!("Session validation failed: {}", e);
            AuthResult::unauthenticated()
        }
    }
}
