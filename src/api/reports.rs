//! Reports service.

use std::sync::Arc;

use crate::client::{ClientInner, PageIter};
use crate::models::{CheckId, Report, ReportId};
use crate::Result;

/// Service for report-related operations.
pub struct ReportsService {
    inner: Arc<ClientInner>,
}

impl ReportsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Retrieve a report by its ID.
    pub async fn get(&self, id: &ReportId) -> Result<Report> {
        self.inner.get(&format!("/reports/{id}")).await
    }

    /// Resume a paused report by its ID.
    pub async fn resume(&self, id: &ReportId) -> Result<()> {
        self.inner.post_discard(&format!("/reports/{id}/resume")).await
    }

    /// Cancel a report by its ID.
    pub async fn cancel(&self, id: &ReportId) -> Result<()> {
        self.inner.post_discard(&format!("/reports/{id}/cancel")).await
    }

    /// List the reports belonging to a check, lazily fetching pages.
    pub fn list(&self, check_id: &CheckId) -> PageIter<Report> {
        #[derive(serde::Deserialize)]
        struct Page {
            reports: Vec<Report>,
        }

        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("check_id", check_id.as_str())
            .finish();

        PageIter::new(self.inner.clone(), format!("/reports?{query}"), |body| {
            let page: Page = serde_json::from_slice(body)?;
            Ok(page.reports)
        })
    }
}
