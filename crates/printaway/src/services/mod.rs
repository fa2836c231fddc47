//! One function per backend operation.
//!
//! Services translate a client intent into an HTTP call and normalize the
//! result into an alert-shaped [`crate::alert::Outcome`] (for user actions)
//! or a plain [`crate::api::ApiResult`] (for data loaders).

pub mod admin;
pub mod auth;
pub mod print_job;

pub use admin::{create_admin, list_admins};
pub use auth::{login, logout, validate_session, LoginResult};
pub use print_job::{
    apply_update, bulk_delete, check_reference_code, create_print_job, delete_print_job,
    get_print_job, list_print_jobs, lookup_reference_code, mark_file_downloaded,
    mark_file_downloaded_for, mark_paid, update_status,
    OrderSubmission, SubmissionFile, UpdateIntent, UpdatedRecord,
};
