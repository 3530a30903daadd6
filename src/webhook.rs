//! Inbound webhook event verification and parsing.
//!
//! Deliveries from the API carry an HMAC-SHA1 signature over the raw
//! request body in the `X-Signature` header, keyed with the webhook's
//! shared secret. [`WebhookVerifier::parse`] checks that signature in
//! constant time before decoding the event, so a handler never acts on
//! a payload that was not produced by the provider.

use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha1::Sha1;
use subtle::ConstantTimeEq;

use crate::error::{Error, Result};

/// HTTP header carrying the hex-encoded HMAC-SHA1 of the request body.
pub const SIGNATURE_HEADER: &str = "X-Signature";

/// Environment variable holding the webhook shared secret.
pub const WEBHOOK_TOKEN_ENV: &str = "ONFIDO_WEBHOOK_TOKEN";

type HmacSha1 = Hmac<Sha1>;

/// Verifies and decodes inbound webhook deliveries.
///
/// # Example
///
/// ```
/// use onfido::webhook::WebhookVerifier;
///
/// # fn example(body: &[u8], signature: &str) -> onfido::Result<()> {
/// let verifier = WebhookVerifier::new("webhook-secret");
/// let event = verifier.parse(body, signature)?;
/// println!("{} on {}", event.payload.action, event.payload.object.id);
/// # Ok(())
/// # }
/// ```
pub struct WebhookVerifier {
    token: SecretString,
    skip_signature_verification: bool,
}

impl WebhookVerifier {
    /// Create a verifier keyed with the webhook's shared secret.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::new(token.into()),
            skip_signature_verification: false,
        }
    }

    /// Create a verifier from the `ONFIDO_WEBHOOK_TOKEN` environment
    /// variable.
    pub fn from_env() -> Result<Self> {
        match std::env::var(WEBHOOK_TOKEN_ENV) {
            Ok(token) if !token.is_empty() => Ok(Self::new(token)),
            _ => Err(Error::Config(format!(
                "{WEBHOOK_TOKEN_ENV} environment variable is not set"
            ))),
        }
    }

    /// Disable signature verification.
    ///
    /// Only intended for local development against replayed payloads;
    /// a verifier in this mode accepts any body.
    pub fn insecure_skip_verification(mut self) -> Self {
        self.skip_signature_verification = true;
        self
    }

    /// Check `signature` (hex, from the `X-Signature` header) against the
    /// raw request body.
    ///
    /// The comparison is constant-time. A signature that is not valid hex
    /// fails like any other mismatch.
    pub fn verify_signature(&self, body: &[u8], signature: &str) -> Result<()> {
        let Ok(expected) = hex::decode(signature) else {
            return Err(Error::InvalidSignature);
        };

        let mut mac = HmacSha1::new_from_slice(self.token.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(body);
        let computed = mac.finalize().into_bytes();

        if computed.ct_eq(expected.as_slice()).into() {
            Ok(())
        } else {
            Err(Error::InvalidSignature)
        }
    }

    /// Verify the delivery signature, then decode the event payload.
    ///
    /// Returns [`Error::InvalidSignature`] when the signature does not
    /// match and [`Error::Json`] when the body is not a well-formed
    /// event, so callers can distinguish forgery from malformed input.
    pub fn parse(&self, body: &[u8], signature: &str) -> Result<WebhookEvent> {
        if !self.skip_signature_verification {
            self.verify_signature(body, signature)?;
        }
        Ok(serde_json::from_slice(body)?)
    }
}

impl std::fmt::Debug for WebhookVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookVerifier")
            .field("token", &"[redacted]")
            .field(
                "skip_signature_verification",
                &self.skip_signature_verification,
            )
            .finish()
    }
}

/// A decoded webhook delivery.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEvent {
    /// The event payload
    pub payload: EventPayload,
}

/// The payload of a webhook event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    /// Kind of resource the event concerns, e.g. `check` or `report`
    pub resource_type: String,
    /// What happened, e.g. `check.completed`
    pub action: String,
    /// The resource the event concerns
    pub object: EventObject,
}

/// The resource a webhook event refers to.
#[derive(Debug, Clone, Deserialize)]
pub struct EventObject {
    /// Identifier of the resource
    pub id: String,
    /// Status the resource moved to, when applicable
    #[serde(default)]
    pub status: Option<String>,
    /// Completion timestamp, when applicable
    #[serde(default)]
    pub completed_at_iso8601: Option<DateTime<Utc>>,
    /// API href for fetching the full resource
    #[serde(default)]
    pub href: Option<String>,
}
