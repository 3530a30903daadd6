//! Document models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::primitives::{ApplicantId, DocumentId};

/// Type of an identity document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Type could not be determined
    Unknown,
    /// Passport
    Passport,
    /// National identity card
    NationalIdentityCard,
    /// Driving licence
    DrivingLicence,
    /// UK biometric residence permit
    UkBiometricResidencePermit,
    /// Tax ID document
    TaxId,
    /// Voter ID document
    VoterId,
}

/// Which side of a document an image shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentSide {
    /// Front side
    Front,
    /// Back side
    Back,
}

/// A document as returned by the Onfido API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// API href for this document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// Href for downloading the raw file
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
    /// Declared document type
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub document_type: Option<DocumentType>,
    /// Declared document side
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<DocumentSide>,
}

/// A document upload request.
///
/// The file content type is not taken from the caller: it is sniffed from
/// the first bytes of `data` when the multipart body is built, because the
/// API rejects parts tagged `application/octet-stream`.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    /// Applicant the document belongs to
    pub applicant_id: ApplicantId,
    /// Declared document type
    pub document_type: DocumentType,
    /// Declared document side, when relevant
    pub side: Option<DocumentSide>,
    /// File name reported to the API
    pub file_name: String,
    /// Raw file bytes
    pub data: Vec<u8>,
}
