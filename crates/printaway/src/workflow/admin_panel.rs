//! The create-admin dialog on the superadmin panel.

use crate::alert::Alert;
use crate::api::ApiClient;
use crate::schema::{AdminRole, CreateAdminForm, FieldError};
use crate::services::create_admin;

/// Dialog state for creating a staff account.
///
/// Validation failures annotate fields without a request; a backend
/// rejection keeps the dialog open with its inputs intact so the operator
/// can correct and resubmit.
#[derive(Debug, Clone, Default)]
pub struct CreateAdminDialog {
    pub open: bool,
    pub username: String,
    pub password: String,
    pub role: AdminRole,
    pub field_errors: Vec<FieldError>,
    pub inline_error: Option<String>,
    needs_refresh: bool,
}

impl CreateAdminDialog {
    pub fn open() -> Self {
        Self {
            open: true,
            ..Self::default()
        }
    }

    fn clear_inputs(&mut self) {
        self.username.clear();
        self.password.clear();
        self.role = AdminRole::default();
        self.field_errors.clear();
        self.inline_error = None;
    }

    pub fn close(&mut self) {
        self.open = false;
        self.clear_inputs();
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// True once a creation succeeded; the caller re-fetches the admin
    /// list and resets the flag.
    pub fn take_needs_refresh(&mut self) -> bool {
        std::mem::take(&mut self.needs_refresh)
    }

    /// Validates and submits. Invalid input never reaches the network.
    pub async fn submit(&mut self, client: &ApiClient) -> Option<Alert> {
        let form = CreateAdminForm::new(self.username.trim(), self.password.clone(), self.role);

        let errors = form.validate();
        if !errors.is_empty() {
            self.field_errors = errors;
            self.inline_error = None;
            return None;
        }
        self.field_errors.clear();

        let outcome = create_admin(client, &form).await;
        if outcome.is_success() {
            self.needs_refresh = true;
            self.close();
            Some(outcome.into_alert())
        } else {
            // Keep the dialog open with the input preserved.
            self.inline_error = outcome.alert.description.clone();
            None
        }
    }
}
