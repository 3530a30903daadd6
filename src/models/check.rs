//! Check models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::{ApplicantId, CheckId, ReportId, WebhookId};
use super::report::{Report, ReportName};

/// Status of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckStatus {
    /// Reports are still being processed
    InProgress,
    /// Waiting on applicant-provided data
    AwaitingApplicant,
    /// All reports finished
    Complete,
    /// Check was withdrawn
    Withdrawn,
    /// Check is paused pending action
    Paused,
    /// A completed check was reopened
    Reopened,
}

/// Overall result of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckResult {
    /// All reports came back clear
    Clear,
    /// At least one report needs consideration
    Consider,
}

/// Request body for creating a check.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckRequest {
    /// Applicant the check runs against
    pub applicant_id: ApplicantId,
    /// Reports to run as part of this check
    pub report_names: Vec<ReportName>,
    /// Restrict document reports to specific uploaded documents
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub document_ids: Vec<String>,
    /// Whether the applicant supplies data via the provider's form
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub applicant_provides_data: bool,
    /// Process the check asynchronously (the API default)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asynchronous: Option<bool>,
    /// URL to redirect the applicant to after form completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    /// Free-form tags
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    /// Suppress applicant form emails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suppress_form_emails: Option<bool>,
    /// Only notify these webhook registrations
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub webhook_ids: Vec<WebhookId>,
    /// Sandbox-only: force specific report results
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub consider: Vec<String>,
}

/// A check as returned by the Onfido API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Check {
    /// Unique check identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<CheckId>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// API href for this check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Applicant this check belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<ApplicantId>,
    /// Whether the applicant supplies data via the provider's form
    #[serde(default)]
    pub applicant_provides_data: bool,
    /// Current status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CheckStatus>,
    /// Overall result, present once complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<CheckResult>,
    /// Applicant form URI, when applicable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_uri: Option<String>,
    /// Redirect URI configured at creation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect_uri: Option<String>,
    /// Dashboard URI with the check results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results_uri: Option<String>,
    /// Reports belonging to this check
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub report_ids: Vec<ReportId>,
    /// Free-form tags
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Webhook registrations notified for this check
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub webhook_ids: Vec<WebhookId>,
    /// Whether the check is currently paused
    #[serde(default)]
    pub paused: bool,
    /// Whether the check lives in the sandbox environment
    #[serde(default)]
    pub sandbox: bool,
}

/// A check with its reports fetched and attached.
///
/// The API itself only returns report IDs on the check object; this type
/// is produced by [`ChecksService::get_expanded`], which fetches each
/// report individually.
///
/// [`ChecksService::get_expanded`]: crate::api::ChecksService::get_expanded
#[derive(Debug, Clone)]
pub struct CheckExpanded {
    /// The base check
    pub check: Check,
    /// Fetched report objects, in `report_ids` order
    pub reports: Vec<Report>,
}
