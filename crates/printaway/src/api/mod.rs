//! HTTP plumbing for the print-shop backend.

mod client;
mod error;

pub use client::{extract_auth_token, ApiClient, AUTH_COOKIE_NAME};
pub use error::{extract_error_message, ApiError, ApiResult};
