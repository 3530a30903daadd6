//! An async client for the Onfido identity verification API (v3).
//!
//! The entry point is [`OnfidoClient`]; per-resource operations hang off
//! its service accessors:
//!
//! ```no_run
//! use onfido::{ApplicantRequest, OnfidoClient};
//!
//! # async fn example() -> onfido::Result<()> {
//! let client = OnfidoClient::from_env()?;
//!
//! let applicant = client.applicants().create(&ApplicantRequest {
//!     first_name: "Jane".into(),
//!     last_name: "Doe".into(),
//!     ..Default::default()
//! }).await?;
//!
//! let mut checks = client.checks().list(applicant.id.as_ref().unwrap());
//! while let Some(check) = checks.next().await? {
//!     println!("{:?}: {:?}", check.id, check.status);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Inbound webhook deliveries are verified and decoded with
//! [`webhook::WebhookVerifier`].

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod webhook;

pub use client::{ClientConfig, OnfidoClient, PageIter, DEFAULT_ENDPOINT, TOKEN_ENV};
pub use error::{ApiError, Error, Result};
pub use models::{
    Address, ApiToken, Applicant, ApplicantId, ApplicantRequest, Breakdown, Check, CheckExpanded,
    CheckId, CheckRequest, CheckResult, CheckStatus, Document, DocumentId, DocumentSide,
    DocumentType, DocumentUpload, EventType, IdNumber, IdNumberType, LivePhoto, Properties,
    Report, ReportId, ReportName, ReportResult, ReportSubResult, SdkToken, SubBreakdown, Webhook,
    WebhookEnvironment, WebhookId, WebhookRequest,
};
pub use webhook::WebhookVerifier;

/// Convenience re-exports for glob imports.
pub mod prelude {
    pub use crate::api::{
        AddressesService, ApplicantsService, ChecksService, DocumentsService, LivePhotosService,
        ReportsService, SdkTokensService, WebhooksService,
    };
    pub use crate::webhook::WebhookVerifier;
    pub use crate::{
        ApiToken, ClientConfig, Error, OnfidoClient, PageIter, Result,
    };
}
