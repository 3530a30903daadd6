//! SDK token models.

use serde::{Deserialize, Serialize};

use super::primitives::ApplicantId;

/// Request and response shape for SDK token generation.
///
/// Web SDK tokens are scoped to a `referrer` URL pattern; mobile SDK
/// tokens are scoped to an `application_id` instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SdkToken {
    /// Applicant the token is issued for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<ApplicantId>,
    /// Referrer URL pattern (web SDK)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub referrer: Option<String>,
    /// Mobile application identifier (iOS/Android SDK)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// The issued JWT, present in responses
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}
