//! Live photos service.

use std::sync::Arc;

use crate::client::{ClientInner, PageIter};
use crate::models::{ApplicantId, LivePhoto};

/// Service for live photo operations.
pub struct LivePhotosService {
    inner: Arc<ClientInner>,
}

impl LivePhotosService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the live photos for an applicant, lazily fetching pages.
    pub fn list(&self, applicant_id: &ApplicantId) -> PageIter<LivePhoto> {
        #[derive(serde::Deserialize)]
        struct Page {
            live_photos: Vec<LivePhoto>,
        }

        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("applicant_id", applicant_id.as_str())
            .finish();

        PageIter::new(
            self.inner.clone(),
            format!("/live_photos?{query}"),
            |body| {
                let page: Page = serde_json::from_slice(body)?;
                Ok(page.live_photos)
            },
        )
    }
}
