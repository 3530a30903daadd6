//! Address models.

use serde::{Deserialize, Serialize};

/// An address, as returned by the address picker or attached to an
/// applicant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    /// Flat number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flat_number: Option<String>,
    /// Building number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_number: Option<String>,
    /// Building name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    /// Street name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Secondary street
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_street: Option<String>,
    /// Town or city
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub town: Option<String>,
    /// State (US addresses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    /// ISO 3166-1 alpha-3 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Residency start date (applicant address history)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// Residency end date (applicant address history)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}
