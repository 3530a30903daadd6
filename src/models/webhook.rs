//! Webhook registration models.
//!
//! These describe webhook *endpoints* registered with the API (where the
//! provider delivers events). Inbound event verification and parsing lives
//! in [`crate::webhook`].

use serde::{Deserialize, Serialize};

use super::primitives::WebhookId;

/// Environment a webhook registration listens to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WebhookEnvironment {
    /// Sandbox/test traffic only
    Sandbox,
    /// Live traffic only
    Live,
}

/// Event types a webhook registration can subscribe to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    /// A report was withdrawn
    #[serde(rename = "report.withdrawn")]
    ReportWithdrawn,
    /// A paused report was resumed
    #[serde(rename = "report.resumed")]
    ReportResumed,
    /// A report was cancelled
    #[serde(rename = "report.cancelled")]
    ReportCancelled,
    /// A report is awaiting manual approval
    #[serde(rename = "report.awaiting_approval")]
    ReportAwaitingApproval,
    /// A report started processing
    #[serde(rename = "report.initiated")]
    ReportInitiated,
    /// A report finished
    #[serde(rename = "report.completed")]
    ReportCompleted,
    /// A check started processing
    #[serde(rename = "check.started")]
    CheckStarted,
    /// A completed check was reopened
    #[serde(rename = "check.reopened")]
    CheckReopened,
    /// A check was withdrawn
    #[serde(rename = "check.withdrawn")]
    CheckWithdrawn,
    /// A check finished
    #[serde(rename = "check.completed")]
    CheckCompleted,
    /// The applicant opened the check form
    #[serde(rename = "check.form_opened")]
    CheckFormOpened,
    /// The applicant completed the check form
    #[serde(rename = "check.form_completed")]
    CheckFormCompleted,
}

/// Request body for registering or updating a webhook endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookRequest {
    /// Delivery URL; the API requires HTTPS
    pub url: String,
    /// Whether deliveries are enabled
    pub enabled: bool,
    /// Environments to deliver for; the API defaults to both when omitted
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub environments: Vec<WebhookEnvironment>,
    /// Event types to deliver; the API defaults to all when omitted
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub events: Vec<EventType>,
}

/// A webhook endpoint registration as returned by the Onfido API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Webhook {
    /// Unique webhook identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<WebhookId>,
    /// Delivery URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Whether deliveries are enabled
    #[serde(default)]
    pub enabled: bool,
    /// API href for this registration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Shared secret used to sign deliveries to this endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Environments delivered for
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<WebhookEnvironment>,
    /// Event types delivered
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<EventType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&EventType::CheckCompleted).unwrap(),
            "\"check.completed\""
        );
        assert_eq!(
            serde_json::from_str::<EventType>("\"report.awaiting_approval\"").unwrap(),
            EventType::ReportAwaitingApproval
        );
    }

    #[test]
    fn request_omits_empty_scopes() {
        let req = WebhookRequest {
            url: "https://example.com/hook".into(),
            enabled: true,
            environments: Vec::new(),
            events: Vec::new(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("environments").is_none());
        assert!(json.get("events").is_none());
    }
}
