//! Builder patterns for creating test data programmatically.
//!
//! These builders allow creating realistic jobs and files without
//! repetitive boilerplate code.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use printaway::schema::{Customer, JobStatus, PaperSize, PaymentStatus, PrintFile, PrintJob};

/// Builder for creating `PrintFile` instances.
pub struct PrintFileBuilder {
    id: i64,
    name: String,
    copies: u32,
    is_colored: bool,
    paper_size: PaperSize,
    notes: Option<String>,
    is_downloaded: bool,
}

impl PrintFileBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: format!("file-{id}.pdf"),
            copies: 1,
            is_colored: false,
            paper_size: PaperSize::A4,
            notes: None,
            is_downloaded: false,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn copies(mut self, copies: u32) -> Self {
        self.copies = copies;
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.is_colored = colored;
        self
    }

    pub fn paper_size(mut self, size: PaperSize) -> Self {
        self.paper_size = size;
        self
    }

    pub fn notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    pub fn downloaded(mut self, downloaded: bool) -> Self {
        self.is_downloaded = downloaded;
        self
    }

    pub fn build(self) -> PrintFile {
        PrintFile {
            id: self.id,
            name: self.name,
            path: format!("uploads/{}", self.id),
            file_size_mb: 1.0,
            copies: self.copies,
            is_colored: self.is_colored,
            paper_size: self.paper_size,
            notes: self.notes,
            created_at: Utc::now(),
            is_downloaded: self.is_downloaded,
        }
    }
}

/// Builder for creating `PrintJob` instances.
pub struct PrintJobBuilder {
    id: i64,
    reference_code: String,
    customer_name: String,
    customer_email: String,
    phone_number: Option<String>,
    files: Vec<PrintFile>,
    status: JobStatus,
    payment_status: PaymentStatus,
    created_at: DateTime<Utc>,
}

impl PrintJobBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            reference_code: format!("PJ-{id:06}"),
            customer_name: "Test Customer".to_string(),
            customer_email: format!("customer{id}@example.com"),
            phone_number: None,
            files: vec![PrintFileBuilder::new(id * 100).build()],
            status: JobStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            created_at: Utc::now(),
        }
    }

    pub fn reference_code(mut self, code: &str) -> Self {
        self.reference_code = code.to_string();
        self
    }

    pub fn customer(mut self, name: &str, email: &str) -> Self {
        self.customer_name = name.to_string();
        self.customer_email = email.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone_number = Some(phone.to_string());
        self
    }

    pub fn files(mut self, files: Vec<PrintFile>) -> Self {
        self.files = files;
        self
    }

    pub fn status(mut self, status: JobStatus) -> Self {
        self.status = status;
        self
    }

    pub fn payment_status(mut self, status: PaymentStatus) -> Self {
        self.payment_status = status;
        self
    }

    /// Backdate the job by the given number of hours.
    pub fn created_hours_ago(mut self, hours: i64) -> Self {
        self.created_at = Utc::now() - Duration::hours(hours);
        self
    }

    /// Pin the creation time exactly.
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    pub fn build(self) -> PrintJob {
        PrintJob {
            id: self.id,
            reference_code: self.reference_code,
            customer: Customer {
                name: self.customer_name,
                email: self.customer_email,
                phone_number: self.phone_number,
            },
            print_files: self.files,
            status: self.status,
            payment_status: self.payment_status,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
