//! Primitive types and newtypes for type-safe API interactions.
//!
//! Resource identifiers get their own wrapper types so that a check ID can
//! never be passed where a report ID is expected. The API token is wrapped
//! in [`ApiToken`], which keeps the secret out of debug output and knows
//! the live/sandbox prefix convention.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// An Onfido API authentication token.
///
/// Tokens beginning with `test_` address the sandbox environment; anything
/// else is treated as a live token. The classification is a pure string
/// prefix check, no network validation is performed.
///
/// # Example
///
/// ```
/// use onfido::ApiToken;
///
/// assert!(!ApiToken::new("test_122333").is_live());
/// assert!(ApiToken::new("122333").is_live());
/// ```
#[derive(Clone)]
pub struct ApiToken(SecretString);

impl ApiToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    /// Returns `true` unless the token carries the sandbox `test_` prefix.
    pub fn is_live(&self) -> bool {
        !self.0.expose_secret().starts_with("test_")
    }

    /// Build the `Authorization` header value for this token.
    pub(crate) fn authorization(&self) -> String {
        format!("Token token={}", self.0.expose_secret())
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiToken").field(&"[redacted]").finish()
    }
}

impl From<&str> for ApiToken {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ApiToken {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

macro_rules! resource_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

resource_id! {
    /// A strongly-typed applicant identifier.
    ApplicantId
}

resource_id! {
    /// A strongly-typed check identifier.
    CheckId
}

resource_id! {
    /// A strongly-typed report identifier.
    ReportId
}

resource_id! {
    /// A strongly-typed document identifier.
    DocumentId
}

resource_id! {
    /// A strongly-typed webhook registration identifier.
    WebhookId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_prefix_classification() {
        assert!(!ApiToken::new("test_122333").is_live());
        assert!(ApiToken::new("122333").is_live());
        assert!(ApiToken::new("prod_122333").is_live());
    }

    #[test]
    fn token_debug_is_redacted() {
        let token = ApiToken::new("test_super_secret");
        let rendered = format!("{token:?}");
        assert!(!rendered.contains("super_secret"));
    }

    #[test]
    fn authorization_header_format() {
        let token = ApiToken::new("test_122333");
        assert_eq!(token.authorization(), "Token token=test_122333");
    }

    #[test]
    fn resource_ids_round_trip() {
        let id = ApplicantId::new("appl-123");
        assert_eq!(id.as_str(), "appl-123");
        assert_eq!(id.to_string(), "appl-123");

        let check: CheckId = "chk-9".into();
        assert_eq!(check.as_ref(), "chk-9");
    }

    #[test]
    fn resource_ids_default_empty() {
        // Request structs embedding an ID rely on `..Default::default()`.
        assert_eq!(ApplicantId::default().as_str(), "");
        assert_eq!(
            crate::models::CheckRequest::default().applicant_id,
            ApplicantId::default()
        );
    }
}
