//! Client library for the Printaway print-shop backend.
//!
//! Customers submit multi-file print jobs and track them by reference
//! code; staff manage the job queue and accounts. Everything talks to the
//! backend through [`ApiClient`], and user-visible operations resolve to
//! alert-shaped [`Outcome`]s.

pub mod alert;
pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod schema;
pub mod services;
pub mod workflow;

pub use alert::{Alert, AlertKind, Outcome};
pub use api::{ApiClient, ApiError};
pub use config::{load_config, ClientConfig};
pub use error::{ConfigError, PrintawayError, Result};
pub use schema::{
    Admin, AdminRole, AuthResult, AuthUser, Customer, JobStatus, PaperSize, PaymentStatus,
    PrintFile, PrintJob,
};
pub use workflow::{CreateAdminDialog, JobTable, OrderForm, SessionStore, StatusView};
