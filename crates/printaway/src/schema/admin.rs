//! Staff account and session types.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a staff account. Superadmin additionally manages other admins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdminRole {
    Admin,
    Superadmin,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Admin => "Admin",
            AdminRole::Superadmin => "Superadmin",
        }
    }

    pub fn is_superadmin(&self) -> bool {
        matches!(self, AdminRole::Superadmin)
    }
}

impl Default for AdminRole {
    fn default() -> Self {
        AdminRole::Admin
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "admin" => Ok(AdminRole::Admin),
            "superadmin" => Ok(AdminRole::Superadmin),
            other => Err(format!("Unknown role '{}'", other)),
        }
    }
}

/// A staff account as returned by the admin listing endpoint. The password
/// is write-only and never appears on this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    pub id: i64,
    pub username: String,
    pub role: AdminRole,
    pub created_at: DateTime<Utc>,
}

/// The identity attached to a validated session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub id: i64,
    pub username: String,
    pub role: AdminRole,
}

/// Result of validating the current session against the backend.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResult {
    pub success: bool,
    pub user: Option<AuthUser>,
}

impl AuthResult {
    pub fn authenticated(user: AuthUser) -> Self {
        Self {
            success: true,
            user: Some(user),
        }
    }

    pub fn unauthenticated() -> Self {
        Self {
            success: false,
            user: None,
        }
    }
}
