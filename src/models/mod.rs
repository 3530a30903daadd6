//! Data models for the Onfido API.
//!
//! All wire types follow the provider's snake_case JSON field names.
//! Optional response fields are `Option` (or default-empty collections) so
//! partial objects decode cleanly.

mod address;
mod applicant;
mod check;
mod document;
mod live_photo;
mod primitives;
mod report;
mod sdk_token;
mod webhook;

pub use address::Address;
pub use applicant::{Applicant, ApplicantRequest, IdNumber, IdNumberType};
pub use check::{Check, CheckExpanded, CheckRequest, CheckResult, CheckStatus};
pub use document::{Document, DocumentSide, DocumentType, DocumentUpload};
pub use live_photo::LivePhoto;
pub use primitives::{ApiToken, ApplicantId, CheckId, DocumentId, ReportId, WebhookId};
pub use report::{
    Breakdown, Properties, Report, ReportName, ReportResult, ReportSubResult, SubBreakdown,
};
pub use sdk_token::SdkToken;
pub use webhook::{EventType, Webhook, WebhookEnvironment, WebhookRequest};
