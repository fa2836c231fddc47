//! Reference-code lookup and the customer's view of their job.

use tracing::debug;

use crate::alert::{Alert, Outcome};
use crate::api::{ApiClient, ApiError};
use crate::schema::{JobStatus, PrintJob};
use crate::services::{lookup_reference_code, update_status};

/// What the view currently shows. Not-found is its own state, distinct
/// from a transport or backend failure.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupState {
    Idle,
    Found(PrintJob),
    NotFound,
    Failed(Alert),
}

/// State machine behind the status page: enter a code, see the job,
/// optionally cancel it.
#[derive(Debug, Clone)]
pub struct StatusView {
    pub reference_code: String,
    state: LookupState,
}

impl Default for StatusView {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusView {
    pub fn new() -> Self {
        Self {
            reference_code: String::new(),
            state: LookupState::Idle,
        }
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn job(&self) -> Option<&PrintJob> {
        match &self.state {
            LookupState::Found(job) => Some(job),
            _ => None,
        }
    }

    /// Looks up the entered reference code and records the result.
    pub async fn check(&mut self, client: &ApiClient) -> Alert {
        let code = self.reference_code.trim().to_string();
        if code.is_empty() {
            self.state = LookupState::Idle;
            return Alert::error("Missing Reference Code", "Reference code is required.");
        }

        match lookup_reference_code(client, &code).await {
            Ok(job) => {
                let alert = Alert::success(
                    "Print Job Found",
                    format!("Print job with reference code {code} was found."),
                );
                self.state = LookupState::Found(job);
                alert
            }
            Err(ApiError::NotFound) => {
                self.state = LookupState::NotFound;
                Alert::error(
                    "Not Found",
                    "Print job not found. Please check your reference code.",
                )
            }
            Err(ApiError::Network(e)) => {
                debug!("Status lookup failed: {}", e);
                let alert = Alert::error(
                    "Network Error",
                    "An error occurred while checking the status.",
                );
                self.state = LookupState::Failed(alert.clone());
                alert
            }
            Err(err) => {
                let alert = Alert::error(
                    "Request Failed",
                    format!("Error fetching print job: {}", err.detail()),
                );
                self.state = LookupState::Failed(alert.clone());
                alert
            }
        }
    }

    pub fn can_cancel(&self) -> bool {
        self.job().map(PrintJob::can_cancel).unwrap_or(false)
    }

    /// Cancels the displayed job, then re-fetches it so the view shows the
    /// backend's record rather than a locally patched copy.
    pub async fn cancel(&mut self, client: &ApiClient) -> Alert {
        let job = match self.job() {
            Some(job) => job.clone(),
            None => {
                return Alert::warning("No Job Selected", "Look up a print job first.");
            }
        };
        if !job.can_cancel() {
            return Alert::warning(
                "Cannot Cancel",
                "Only pending jobs can be cancelled.",
            );
        }

        let outcome: Outcome<PrintJob> =
            update_status(client, job.id, JobStatus::Cancelled).await;
        if !outcome.is_success() {
            return outcome.into_alert();
        }

        debug!(job_id = job.id, "Job cancelled, refreshing view");
        let refresh = self.check(client).await;
        self.cancellation_alert(refresh)
    }

    /// The banner reported after a successful cancel. When the follow-up
    /// re-fetch failed, its alert is surfaced so the banner matches what
    /// the view now shows.
    fn cancellation_alert(&self, refresh: Alert) -> Alert {
        if matches!(self.state, LookupState::Found(_)) {
            Alert::success("Job Cancelled", "Your print job has been cancelled.")
        } else {
            refresh
        }
    }

    /// Clears the view for a fresh search. Purely local.
    pub fn new_search(&mut self) {
        self.reference_code.clear();
        self.state = LookupState::Idle;
    }

    /// Customer-facing explanation of the displayed job's status.
    pub fn status_message(&self) -> Option<&'static str> {
        self.job().map(|job| match job.status {
            JobStatus::Pending => "Your print job is in the queue and will be processed shortly.",
            JobStatus::Processing => "Your files are being printed right now.",
            JobStatus::Completed => "Your print job is ready for pickup.",
            JobStatus::Cancelled => "This print job has been cancelled.",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{Customer, PaymentStatus};
    use chrono::Utc;

    fn found_view(status: JobStatus) -> StatusView {
        let mut view = StatusView::new();
        view.reference_code = "PJ-ABC123".to_string();
        view.state = LookupState::Found(PrintJob {
            id: 7,
            reference_code: "PJ-ABC123".to_string(),
            customer: Customer::default(),
            print_files: Vec::new(),
            status,
            payment_status: PaymentStatus::Unpaid,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        });
        view
    }

    #[test]
    fn test_can_cancel_requires_pending() {
        assert!(found_view(JobStatus::Pending).can_cancel());
        assert!(!found_view(JobStatus::Processing).can_cancel());
        assert!(!StatusView::new().can_cancel());
    }

    #[tokio::test]
    async fn test_cancel_guard_skips_network_for_non_pending() {
        let config = crate::config::ClientConfig {
            api_base_url: "http://127.0.0.1:9".to_string(),
            ..Default::default()
        };
        let client = ApiClient::new(&config).unwrap();

        let mut view = found_view(JobStatus::Completed);
        let alert = view.cancel(&client).await;
        assert_eq!(alert.title, "Cannot Cancel");
        // The displayed job survives the rejected attempt.
        assert!(view.job().is_some());
    }

    #[test]
    fn test_cancel_banner_matches_refetched_state() {
        let refresh_failure = Alert::error(
            "Network Error",
            "An error occurred while checking the status.",
        );

        // Re-fetch came back fine: report the cancellation.
        let view = found_view(JobStatus::Cancelled);
        let alert = view.cancellation_alert(refresh_failure.clone());
        assert_eq!(alert.title, "Job Cancelled");

        // Re-fetch failed: the failure is what the caller sees.
        let mut view = found_view(JobStatus::Cancelled);
        view.state = LookupState::Failed(refresh_failure.clone());
        let alert = view.cancellation_alert(refresh_failure.clone());
        assert_eq!(alert, refresh_failure);

        view.state = LookupState::NotFound;
        let alert = view.cancellation_alert(refresh_failure.clone());
        assert_eq!(alert.title, "Network Error");
    }

    #[test]
    fn test_new_search_resets_locally() {
        let mut view = found_view(JobStatus::Pending);
        view.new_search();
        assert_eq!(view.reference_code, "");
        assert_eq!(*view.state(), LookupState::Idle);
    }

    #[test]
    fn test_status_message_per_status() {
        assert_eq!(
            found_view(JobStatus::Completed).status_message(),
            Some("Your print job is ready for pickup.")
        );
        assert_eq!(StatusView::new().status_message(), None);
    }
}
