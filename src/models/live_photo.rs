//! Live photo models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A live photo captured by the applicant-facing SDK.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LivePhoto {
    /// Unique live photo identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// API href for this photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Href for downloading the raw image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_href: Option<String>,
    /// Original file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// File type as detected by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    /// File size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}
