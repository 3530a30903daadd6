//! SDK token service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{ApplicantId, SdkToken};
use crate::Result;

/// Service for generating short-lived SDK tokens.
///
/// SDK tokens are handed to the browser or mobile SDKs so they can talk
/// to the API on an applicant's behalf without exposing the account
/// token.
pub struct SdkTokensService {
    inner: Arc<ClientInner>,
}

impl SdkTokensService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Generate an SDK token for use in a web integration.
    ///
    /// `referrer` is the pattern the token is pinned to, for example
    /// `https://*.example.com/*`.
    pub async fn create(&self, applicant_id: &ApplicantId, referrer: &str) -> Result<SdkToken> {
        let request = SdkToken {
            applicant_id: Some(applicant_id.clone()),
            referrer: Some(referrer.to_string()),
            application_id: None,
            token: None,
        };
        self.inner.post("/sdk_token", &request).await
    }

    /// Generate an SDK token pinned to a mobile application ID.
    pub async fn create_for_mobile(
        &self,
        applicant_id: &ApplicantId,
        application_id: &str,
    ) -> Result<SdkToken> {
        let request = SdkToken {
            applicant_id: Some(applicant_id.clone()),
            referrer: None,
            application_id: Some(application_id.to_string()),
            token: None,
        };
        self.inner.post("/sdk_token", &request).await
    }
}
