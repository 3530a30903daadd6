//! Applicants service for applicant CRUD operations.

use std::sync::Arc;

use crate::client::{ClientInner, PageIter};
use crate::models::{Applicant, ApplicantId, ApplicantRequest};
use crate::Result;

/// Service for applicant-related operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: onfido::OnfidoClient) -> onfido::Result<()> {
/// let mut applicants = client.applicants().list();
/// while let Some(applicant) = applicants.next().await? {
///     println!("{:?} {:?}", applicant.first_name, applicant.last_name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct ApplicantsService {
    inner: Arc<ClientInner>,
}

impl ApplicantsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Create a new applicant.
    pub async fn create(&self, applicant: &ApplicantRequest) -> Result<Applicant> {
        self.inner.post("/applicants", applicant).await
    }

    /// Retrieve an applicant by its ID.
    pub async fn get(&self, id: &ApplicantId) -> Result<Applicant> {
        self.inner.get(&format!("/applicants/{id}")).await
    }

    /// Update an applicant by its ID.
    pub async fn update(&self, id: &ApplicantId, applicant: &ApplicantRequest) -> Result<Applicant> {
        self.inner.put(&format!("/applicants/{id}"), applicant).await
    }

    /// Delete an applicant by its ID.
    pub async fn delete(&self, id: &ApplicantId) -> Result<()> {
        self.inner.delete(&format!("/applicants/{id}")).await
    }

    /// List all applicants, lazily fetching pages.
    pub fn list(&self) -> PageIter<Applicant> {
        #[derive(serde::Deserialize)]
        struct Page {
            applicants: Vec<Applicant>,
        }

        PageIter::new(self.inner.clone(), "/applicants", |body| {
            let page: Page = serde_json::from_slice(body)?;
            Ok(page.applicants)
        })
    }
}
