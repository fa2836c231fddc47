//! Uniform alert-shaped outcomes for service calls.
//!
//! Every backend operation resolves to an [`Outcome`]: an alert banner plus
//! an optional typed payload. The presentation layer renders outcomes
//! directly and never branches on raw HTTP status codes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A user-facing alert banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Alert {
    pub fn new(kind: AlertKind, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            description: Some(description.into()),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(AlertKind::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(AlertKind::Error, title, description)
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(AlertKind::Warning, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(AlertKind::Info, title, description)
    }
}

/// Result of a service call: an alert plus the created/fetched payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome<T> {
    #[serde(flatten)]
    pub alert: Alert,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_code: Option<String>,
}

impl<T> Outcome<T> {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::from_alert(Alert::success(title, description))
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::from_alert(Alert::error(title, description))
    }

    pub fn warning(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::from_alert(Alert::warning(title, description))
    }

    pub fn from_alert(alert: Alert) -> Self {
        Self {
            alert,
            data: None,
            reference_code: None,
        }
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_reference_code(mut self, code: impl Into<String>) -> Self {
        self.reference_code = Some(code.into());
        self
    }

    pub fn is_success(&self) -> bool {
        self.alert.kind == AlertKind::Success
    }

    /// Drops the payload, keeping the alert. Useful when a caller only
    /// surfaces the banner.
    pub fn into_alert(self) -> Alert {
        self.alert
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_success_round_trip() {
        let outcome: Outcome<u32> = Outcome::success("Print Job Created", "done")
            .with_data(7)
            .with_reference_code("PJ-ABC123");

        assert!(outcome.is_success());
        assert_eq!(outcome.data, Some(7));
        assert_eq!(outcome.reference_code.as_deref(), Some("PJ-ABC123"));
    }

    #[test]
    fn test_alert_serializes_with_type_tag() {
        let alert = Alert::error("Not Found", "Print job not found.");
        let json = serde_json::to_value(&alert).unwrap();

        assert_eq!(json["type"], "error");
        assert_eq!(json["title"], "Not Found");
    }

    #[test]
    fn test_info_alert_kind() {
        let alert = Alert::info("Aborted", "No jobs were deleted.");
        assert_eq!(alert.kind, AlertKind::Info);
        assert_eq!(serde_json::to_value(&alert).unwrap()["type"], "info");
    }

    #[test]
    fn test_outcome_flattens_alert_fields() {
        let outcome: Outcome<()> = Outcome::warning("No Selection", "Select at least one job.");
        let json = serde_json::to_value(&outcome).unwrap();

        assert_eq!(json["type"], "warning");
        assert_eq!(json["title"], "No Selection");
        assert!(json.get("data").is_none());
    }
}
