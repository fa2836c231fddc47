//! Domain schemas shared by the services and workflows.

mod admin;
mod forms;
mod print_job;

pub use admin::{Admin, AdminRole, AuthResult, AuthUser};
pub use forms::{validate_customer, CreateAdminForm, FieldError, LoginForm};
pub use print_job::{
    CreatedJob, Customer, JobListResponse, JobStatus, PaperSize, PaymentStatus, PrintFile,
    PrintJob,
};
