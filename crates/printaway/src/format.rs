//! Presentation helpers: date formatting and status color mapping.

use chrono::{DateTime, Utc};

use crate::schema::{JobStatus, PaymentStatus};

/// Short date-time used everywhere a timestamp is shown,
/// e.g. "Jan 15, 2026, 10:30 AM".
pub fn format_date_time(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y, %I:%M %p").to_string()
}

/// Semantic color for a job status badge.
pub fn status_color(status: JobStatus) -> &'static str {
    match status {
        JobStatus::Pending => "yellow",
        JobStatus::Processing => "blue",
        JobStatus::Completed => "green",
        JobStatus::Cancelled => "red",
    }
}

/// Semantic color for a payment status badge.
pub fn payment_color(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Unpaid => "red",
        PaymentStatus::Paid => "green",
        PaymentStatus::Refunded => "yellow",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_date_time() {
        let date = Utc.with_ymd_and_hms(2026, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date_time(&date), "Jan 15, 2026, 10:30 AM");
    }

    #[test]
    fn test_format_date_time_single_digit_day() {
        let date = Utc.with_ymd_and_hms(2026, 3, 5, 18, 5, 0).unwrap();
        assert_eq!(format_date_time(&date), "Mar 5, 2026, 06:05 PM");
    }

    #[test]
    fn test_status_colors_distinct() {
        let colors: std::collections::HashSet<_> =
            JobStatus::ALL.iter().map(|s| status_color(*s)).collect();
        assert_eq!(colors.len(), 4);
    }
}
