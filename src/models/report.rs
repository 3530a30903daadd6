//! Report and breakdown models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::ReportId;

/// Name of a report type that can be requested as part of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportName {
    /// Document authenticity report
    Document,
    /// Document report with extracted address information
    DocumentWithAddressInformation,
    /// Document report with extracted driving licence information
    DocumentWithDrivingLicenceInformation,
    /// Photo-based facial similarity
    FacialSimilarityPhoto,
    /// Video-based facial similarity
    FacialSimilarityVideo,
    /// Known faces search
    KnownFaces,
    /// Enhanced identity verification
    IdentityEnhanced,
    /// Enhanced watchlist screening
    WatchlistEnhanced,
    /// AML watchlist screening
    WatchlistAml,
    /// Standard watchlist screening
    WatchlistStandard,
    /// PEPs-only watchlist screening
    WatchlistPepsOnly,
    /// Sanctions-only watchlist screening
    WatchlistSanctionsOnly,
    /// Proof of address report
    ProofOfAddress,
}

/// Result of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportResult {
    /// No issues found
    Clear,
    /// Needs human consideration
    Consider,
    /// Identity could not be established
    Unidentified,
}

/// Sub-result of a document report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportSubResult {
    /// No issues found
    Clear,
    /// Document rejected
    Rejected,
    /// Document suspected fraudulent
    Suspected,
    /// Needs caution
    Caution,
}

/// Free-form extracted properties attached to reports and breakdowns.
pub type Properties = HashMap<String, serde_json::Value>;

/// Per-category breakdown of a report result.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Breakdown {
    /// Category result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Nested sub-breakdowns, keyed by category name
    #[serde(default, rename = "breakdown", skip_serializing_if = "HashMap::is_empty")]
    pub sub_breakdowns: HashMap<String, SubBreakdown>,
}

/// A nested sub-breakdown within a [`Breakdown`] category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubBreakdown {
    /// Sub-category result
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    /// Extracted properties for this sub-category
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: Properties,
}

/// A report as returned by the Onfido API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Unique report identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ReportId>,
    /// Which report this is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<ReportName>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Processing status
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Result, present once complete
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ReportResult>,
    /// Sub-result for document reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_result: Option<ReportSubResult>,
    /// API href for this report
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Report-specific options echoed back by the API
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub options: HashMap<String, serde_json::Value>,
    /// Result breakdown by category
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub breakdown: HashMap<String, Breakdown>,
    /// Extracted properties
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: Properties,
}
