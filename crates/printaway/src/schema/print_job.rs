//! Print-job domain types.
//!
//! One canonical shape is used for the job record: a four-state lifecycle
//! status plus a separate three-state payment status. Wire field names are
//! camelCase to match the backend.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A3,
    A2,
    Letter,
    Long,
}

impl PaperSize {
    pub const ALL: [PaperSize; 5] = [
        PaperSize::A4,
        PaperSize::A3,
        PaperSize::A2,
        PaperSize::Letter,
        PaperSize::Long,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaperSize::A4 => "A4",
            PaperSize::A3 => "A3",
            PaperSize::A2 => "A2",
            PaperSize::Letter => "Letter",
            PaperSize::Long => "Long",
        }
    }
}

impl Default for PaperSize {
    fn default() -> Self {
        PaperSize::A4
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaperSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a4" => Ok(PaperSize::A4),
            "a3" => Ok(PaperSize::A3),
            "a2" => Ok(PaperSize::A2),
            "letter" => Ok(PaperSize::Letter),
            "long" => Ok(PaperSize::Long),
            other => Err(format!("Unknown paper size '{}'", other)),
        }
    }
}

/// Lifecycle status of a print job. Transitions are made by staff; the
/// customer can only move a Pending job to Cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub const ALL: [JobStatus; 4] = [
        JobStatus::Pending,
        JobStatus::Processing,
        JobStatus::Completed,
        JobStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "Pending",
            JobStatus::Processing => "Processing",
            JobStatus::Completed => "Completed",
            JobStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Ok(JobStatus::Pending),
            "processing" => Ok(JobStatus::Processing),
            "completed" => Ok(JobStatus::Completed),
            "cancelled" => Ok(JobStatus::Cancelled),
            other => Err(format!("Unknown job status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Unpaid => "Unpaid",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Refunded => "Refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The customer who placed the order. Immutable once the job exists.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

/// One uploaded file within a job, with its resolved print options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintFile {
    pub id: i64,
    pub name: String,
    /// Upload location or object reference assigned by the backend.
    pub path: String,
    #[serde(rename = "fileSizeMB")]
    pub file_size_mb: f64,
    pub copies: u32,
    pub is_colored: bool,
    pub paper_size: PaperSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Set by the backend when a paid file is fetched.
    #[serde(default)]
    pub is_downloaded: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrintJob {
    pub id: i64,
    /// Human-shareable lookup key, independent of `id`.
    pub reference_code: String,
    pub customer: Customer,
    pub print_files: Vec<PrintFile>,
    pub status: JobStatus,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PrintJob {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }

    /// Only Pending jobs may be cancelled by the customer.
    pub fn can_cancel(&self) -> bool {
        self.status == JobStatus::Pending
    }

    /// Files may be downloaded only once the job is paid.
    pub fn can_download(&self) -> bool {
        self.is_paid()
    }

    pub fn total_copies(&self) -> u32 {
        self.print_files.iter().map(|f| f.copies).sum()
    }

    /// True when the job was created within the last 24 hours.
    pub fn is_recent(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.created_at) < Duration::hours(24)
    }
}

/// Envelope of the job listing endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct JobListResponse {
    pub data: Vec<PrintJob>,
}

/// Response of the job creation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedJob {
    pub reference_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_file() -> PrintFile {
        PrintFile {
            id: 1,
            name: "thesis.pdf".to_string(),
            path: "uploads/thesis.pdf".to_string(),
            file_size_mb: 1.25,
            copies: 3,
            is_colored: false,
            paper_size: PaperSize::A4,
            notes: None,
            created_at: Utc::now(),
            is_downloaded: false,
        }
    }

    fn sample_job(status: JobStatus, payment: PaymentStatus) -> PrintJob {
        PrintJob {
            id: 42,
            reference_code: "PJ-ABC123".to_string(),
            customer: Customer {
                name: "Juan Dela Cruz".to_string(),
                email: "juan@x.com".to_string(),
                phone_number: None,
            },
            print_files: vec![sample_file()],
            status,
            payment_status: payment,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_cancel_only_while_pending() {
        assert!(sample_job(JobStatus::Pending, PaymentStatus::Unpaid).can_cancel());
        for status in [JobStatus::Processing, JobStatus::Completed, JobStatus::Cancelled] {
            assert!(!sample_job(status, PaymentStatus::Unpaid).can_cancel());
        }
    }

    #[test]
    fn test_download_requires_paid() {
        assert!(!sample_job(JobStatus::Completed, PaymentStatus::Unpaid).can_download());
        assert!(!sample_job(JobStatus::Completed, PaymentStatus::Refunded).can_download());
        assert!(sample_job(JobStatus::Completed, PaymentStatus::Paid).can_download());
    }

    #[test]
    fn test_recent_boundary() {
        let now = Utc::now();
        let mut job = sample_job(JobStatus::Pending, PaymentStatus::Unpaid);
        job.created_at = now - Duration::hours(23);
        assert!(job.is_recent(now));
        job.created_at = now - Duration::hours(25);
        assert!(!job.is_recent(now));
    }

    #[test]
    fn test_wire_field_names_are_camel_case() {
        let job = sample_job(JobStatus::Pending, PaymentStatus::Unpaid);
        let json = serde_json::to_value(&job).unwrap();

        assert_eq!(json["referenceCode"], "PJ-ABC123");
        assert_eq!(json["paymentStatus"], "Unpaid");
        assert_eq!(json["printFiles"][0]["fileSizeMB"], 1.25);
        assert_eq!(json["printFiles"][0]["isColored"], false);
        assert_eq!(json["printFiles"][0]["paperSize"], "A4");
    }

    #[test]
    fn test_status_round_trip() {
        for status in JobStatus::ALL {
            let parsed: JobStatus = status.as_str().to_ascii_lowercase().parse().unwrap();
            assert_eq!(parsed, status);
        }
        assert!("shredded".parse::<JobStatus>().is_err());
    }

    #[test]
    fn test_total_copies() {
        let mut job = sample_job(JobStatus::Pending, PaymentStatus::Unpaid);
        let mut second = sample_file();
        second.copies = 2;
        job.print_files.push(second);
        assert_eq!(job.total_copies(), 5);
    }
}
