//! Staff account management. Listing and creation are superadmin-only
//! server-side; callers gate the UI on the session role as well.

use secrecy::ExposeSecret;
use serde_json::json;
use tracing::info;

use crate::alert::Outcome;
use crate::api::{ApiClient, ApiResult};
use crate::schema::{Admin, CreateAdminForm};

/// Loads every staff account.
pub async fn list_admins(client: &ApiClient) -> ApiResult<Vec<Admin>> {
    client.get_json("/api/admin").await
}

/// Creates a staff account. The form is assumed validated already; backend
/// rejections (duplicate username, weak password policy) come back as an
/// error outcome with the backend's message.
pub async fn create_admin(client: &ApiClient, form: &CreateAdminForm) -> Outcome<Admin> {
    let body = json!({
        "username": form.username,
        "password": form.password.expose_secret(),
        "role": form.role.as_str(),
    });

    let result = async {
        let response = ApiClient::send(client.post("/api/admin").json(&body)).await?;
        response.json::<Admin>().await.map_err(crate::api::ApiError::from)
    }
    .await;

    match result {
        Ok(admin) => {
            info!(username = %admin.username, "Admin account created");
            Outcome::success(
                "Admin Created",
                format!("Admin account '{}' created successfully.", admin.username),
            )
            .with_data(admin)
        }
        Err(err) => Outcome::error("Create Failed", err.detail()),
    }
}
