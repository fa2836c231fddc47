//! Form inputs and their field-level validation.
//!
//! Validation errors are reported per field so the front-end can render
//! them inline; a form with any error never reaches the network.

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::admin::AdminRole;
use super::print_job::Customer;

/// A single inline validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .map(|re| re.is_match(email))
        .unwrap_or(false)
}

fn is_valid_phone(phone: &str) -> bool {
    Regex::new(r"^\d{11}$")
        .map(|re| re.is_match(phone))
        .unwrap_or(false)
}

/// Validates the customer block of the order form.
pub fn validate_customer(customer: &Customer) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if customer.name.trim().is_empty() {
        errors.push(FieldError::new("customer.name", "Name is required"));
    }
    if customer.email.trim().is_empty() {
        errors.push(FieldError::new("customer.email", "Email is required"));
    } else if !is_valid_email(&customer.email) {
        errors.push(FieldError::new("customer.email", "Invalid email address"));
    }
    if let Some(phone) = customer.phone_number.as_deref() {
        if !phone.is_empty() && !is_valid_phone(phone) {
            errors.push(FieldError::new(
                "customer.phoneNumber",
                "Phone must be exactly 11 digits",
            ));
        }
    }

    errors
}

/// Credentials entered on the staff login view.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub username: String,
    pub password: SecretString,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.username.trim().is_empty() {
            errors.push(FieldError::new("username", "Username is required"));
        }
        if self.password.expose_secret().is_empty() {
            errors.push(FieldError::new("password", "Password is required"));
        }
        errors
    }
}

/// Input for the Superadmin-only account creation form.
#[derive(Debug, Clone)]
pub struct CreateAdminForm {
    pub username: String,
    pub password: SecretString,
    pub role: AdminRole,
}

impl CreateAdminForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: AdminRole) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
            role,
        }
    }

    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        if self.username.trim().len() < 3 {
            errors.push(FieldError::new(
                "username",
                "Username must be at least 3 characters",
            ));
        }
        if self.password.expose_secret().len() < 6 {
            errors.push(FieldError::new(
                "password",
                "Password must be at least 6 characters",
            ));
        }
        errors
    }
}
