//! Applicant models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::primitives::ApplicantId;

/// An ID number attached to an applicant (SSN, tax ID, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdNumber {
    /// Number type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_type: Option<IdNumberType>,
    /// The number itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Two-letter state code (US driving licenses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_code: Option<String>,
}

/// Supported ID number types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdNumberType {
    /// US social security number
    Ssn,
    /// Social insurance number
    SocialInsurance,
    /// Tax identification number
    TaxId,
    /// National identity card number
    IdentityCard,
    /// Driving license number
    DrivingLicense,
}

/// An applicant as returned by the Onfido API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Applicant {
    /// Unique applicant identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ApplicantId>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Whether this applicant lives in the sandbox environment
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub sandbox: bool,
    /// API href for this applicant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    /// First name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    /// Email address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Date of birth, `YYYY-MM-DD`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// Telephone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    /// Mobile number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    /// ID numbers on file
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub id_numbers: Vec<IdNumber>,
    /// Current address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Request body for creating or updating an applicant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApplicantRequest {
    /// First name (required on create)
    pub first_name: String,
    /// Last name (required on create)
    pub last_name: String,
    /// Email address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Date of birth, `YYYY-MM-DD`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    /// Current address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    /// ID numbers
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub id_numbers: Vec<IdNumber>,
}
