//! Stateful workflows driving the user-facing flows: order submission,
//! status lookup, the staff job table, session handling, and admin
//! management. Each type owns its state and calls into [`crate::services`].

pub mod admin_panel;
pub mod order_form;
pub mod session;
pub mod stats;
pub mod status_view;
pub mod table;

pub use admin_panel::CreateAdminDialog;
pub use order_form::{FileEntry, FileUpload, OrderForm, PrintOptions};
pub use session::{guard_admin, guard_superadmin, SessionStore};
pub use stats::JobStats;
pub use status_view::{LookupState, StatusView};
pub use table::{partition_by_age, JobTable, SortColumn, SortDirection};
