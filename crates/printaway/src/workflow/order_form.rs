//! The order submission form.
//!
//! Files and their options travel together as one list of entries. Each
//! entry either uses the shared default options or its own overrides; the
//! choice is resolved once, when the form is turned into a submission.

use std::path::{Path, PathBuf};

use tracing::debug;
use uuid::Uuid;

use crate::alert::Outcome;
use crate::api::ApiClient;
use crate::schema::{validate_customer, CreatedJob, Customer, FieldError, PaperSize};
use crate::services::{create_print_job, OrderSubmission, SubmissionFile};

/// Print options for one file or for the whole order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintOptions {
    pub copies: u32,
    pub is_colored: bool,
    pub paper_size: PaperSize,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            copies: 1,
            is_colored: false,
            paper_size: PaperSize::A4,
        }
    }
}

/// A file staged for upload, captured at selection time.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub path: PathBuf,
    pub size_mb: f64,
}

impl FileUpload {
    /// Stages a local file, recording its size in megabytes (two decimals).
    pub fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let metadata = std::fs::metadata(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let size_mb = (metadata.len() as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0;

        Ok(Self {
            name,
            path: path.to_path_buf(),
            size_mb,
        })
    }
}

/// One file in the form together with its per-file options.
///
/// The id is stable across insertions and removals, so option edits can
/// never drift onto a neighbouring file when the list changes.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry {
    pub id: Uuid,
    pub upload: FileUpload,
    pub options: PrintOptions,
    pub notes: Option<String>,
}

impl FileEntry {
    fn new(upload: FileUpload, options: PrintOptions) -> Self {
        Self {
            id: Uuid::new_v4(),
            upload,
            options,
            notes: None,
        }
    }
}

/// State of the customer-facing order form.
#[derive(Debug, Clone, Default)]
pub struct OrderForm {
    pub customer: Customer,
    /// When set, the shared options apply to every file.
    pub use_default_options: bool,
    pub default_options: PrintOptions,
    entries: Vec<FileEntry>,
}

impl OrderForm {
    pub fn new() -> Self {
        Self {
            use_default_options: true,
            ..Self::default()
        }
    }

    /// Adds a file, seeded with the current default options so switching
    /// to per-file mode starts from something sensible.
    pub fn add_file(&mut self, upload: FileUpload) -> Uuid {
        let entry = FileEntry::new(upload, self.default_options);
        let id = entry.id;
        self.entries.push(entry);
        id
    }

    /// Removes the entry at `index` together with its options.
    pub fn remove_file(&mut self, index: usize) -> Option<FileEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    pub fn entry_mut(&mut self, id: Uuid) -> Option<&mut FileEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    pub fn file_count(&self) -> usize {
        self.entries.len()
    }

    /// Validates the customer fields and the file list.
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = validate_customer(&self.customer);
        if self.entries.is_empty() {
            errors.push(FieldError::new("files", "Upload at least 1 file"));
        }
        errors
    }

    /// Resolves each entry's effective options and produces the request
    /// payload. Resolution happens here, not at file-add time, so default
    /// edits made after adding files still apply.
    pub fn to_submission(&self) -> OrderSubmission {
        let files = self
            .entries
            .iter()
            .map(|entry| {
                let options = if self.use_default_options {
                    self.default_options
                } else {
                    entry.options
                };
                SubmissionFile {
                    name: entry.upload.name.clone(),
                    path: entry.upload.path.clone(),
                    size_mb: entry.upload.size_mb,
                    copies: options.copies,
                    is_colored: options.is_colored,
                    paper_size: options.paper_size,
                    notes: entry.notes.clone(),
                }
            })
            .collect();

        OrderSubmission {
            customer: self.customer.clone(),
            files,
        }
    }

    /// Submits the order. With no files attached this returns a warning
    /// without touching the network. On success the form resets; on failure
    /// every input survives for correction.
    pub async fn submit(&mut self, client: &ApiClient) -> Outcome<CreatedJob> {
        if self.entries.is_empty() {
            return Outcome::warning(
                "No Files Attached",
                "Attach at least one file before submitting.",
            );
        }

        let submission = self.to_submission();
        debug!(files = submission.files.len(), "Submitting order form");
        let outcome = create_print_job(client, &submission).await;

        if outcome.is_success() {
            self.reset();
        }
        outcome
    }

    /// Clears all inputs back to a fresh form.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
