//! Checks service.

use std::sync::Arc;

use crate::client::{ClientInner, PageIter};
use crate::models::{ApplicantId, Check, CheckExpanded, CheckId, CheckRequest};
use crate::Result;

/// Service for check-related operations.
///
/// # Example
///
/// ```no_run
/// use onfido::{ApplicantId, CheckRequest, ReportName};
///
/// # async fn example(client: onfido::OnfidoClient) -> onfido::Result<()> {
/// let check = client.checks().create(&CheckRequest {
///     applicant_id: ApplicantId::new("appl-123"),
///     report_names: vec![ReportName::Document, ReportName::FacialSimilarityPhoto],
///     ..Default::default()
/// }).await?;
/// println!("check {:?} is {:?}", check.id, check.status);
/// # Ok(())
/// # }
/// ```
pub struct ChecksService {
    inner: Arc<ClientInner>,
}

impl ChecksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a new check for an applicant.
    pub async fn create(&self, check: &CheckRequest) -> Result<Check> {
        self.inner.post("/checks", check).await
    }

    /// Retrieve a check by its ID.
    pub async fn get(&self, id: &CheckId) -> Result<Check> {
        self.inner.get(&format!("/checks/{id}")).await
    }

    /// Retrieve a check with each of its reports fetched and attached.
    ///
    /// The check object itself only carries report IDs; this issues one
    /// extra request per report, in `report_ids` order.
    pub async fn get_expanded(&self, id: &CheckId) -> Result<CheckExpanded> {
        let check = self.get(id).await?;

        let mut reports = Vec::with_capacity(check.report_ids.len());
        for report_id in &check.report_ids {
            reports.push(self.inner.get(&format!("/reports/{report_id}")).await?);
        }

        Ok(CheckExpanded { check, reports })
    }

    /// Resume a paused check by its ID.
    pub async fn resume(&self, id: &CheckId) -> Result<Check> {
        self.inner.post_empty(&format!("/checks/{id}/resume")).await
    }

    /// Download the PDF summary of a check by its ID.
    pub async fn download(&self, id: &CheckId) -> Result<Vec<u8>> {
        self.inner.get_bytes(&format!("/checks/{id}/download")).await
    }

    /// List the checks for an applicant, lazily fetching pages.
    pub fn list(&self, applicant_id: &ApplicantId) -> PageIter<Check> {
        #[derive(serde::Deserialize)]
        struct Page {
            checks: Vec<Check>,
        }

        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("applicant_id", applicant_id.as_str())
            .finish();

        PageIter::new(self.inner.clone(), format!("/checks?{query}"), |body| {
            let page: Page = serde_json::from_slice(body)?;
            Ok(page.checks)
        })
    }
}
