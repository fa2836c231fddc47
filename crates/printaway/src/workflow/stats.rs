//! Aggregate figures for the staff dashboard header.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::schema::{JobStatus, PrintJob};

/// Price per printed page, colored and black-and-white.
const PRICE_COLORED: f64 = 0.25;
const PRICE_BW: f64 = 0.10;

/// Dashboard aggregates, computed in one pass over the job list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobStats {
    pub total_jobs: usize,
    pub pending: usize,
    pub processing: usize,
    pub completed: usize,
    pub cancelled: usize,
    pub total_files: usize,
    pub colored_files: usize,
    pub total_copies: u32,
    pub unique_customers: usize,
    /// Jobs created on the same calendar date as `now`, not a rolling
    /// 24-hour window.
    pub today_jobs: usize,
    /// Projected revenue over every job in the list.
    pub revenue: f64,
}

impl JobStats {
    pub fn from_jobs(jobs: &[PrintJob], now: DateTime<Utc>) -> Self {
        let mut stats = Self {
            total_jobs: jobs.len(),
            ..Self::default()
        };
        let mut customers: HashSet<String> = HashSet::new();

        for job in jobs {
            match job.status {
                JobStatus::Pending => stats.pending += 1,
                JobStatus::Processing => stats.processing += 1,
                JobStatus::Completed => stats.completed += 1,
                JobStatus::Cancelled => stats.cancelled += 1,
            }

            customers.insert(job.customer.email.to_lowercase());
            if job.created_at.date_naive() == now.date_naive() {
                stats.today_jobs += 1;
            }

            for file in &job.print_files {
                stats.total_files += 1;
                stats.total_copies += file.copies;
                if file.is_colored {
                    stats.colored_files += 1;
                }
                let price = if file.is_colored {
                    PRICE_COLORED
                } else {
                    PRICE_BW
                };
                stats.revenue += price * f64::from(file.copies);
            }
        }

        stats.unique_customers = customers.len();
        stats
    }
}
