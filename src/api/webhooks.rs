//! Webhook registration service.

use std::sync::Arc;

use crate::client::{ClientInner, PageIter};
use crate::models::{Webhook, WebhookId, WebhookRequest};
use crate::Result;

/// Service for managing webhook endpoint registrations.
///
/// The `token` field on a freshly created [`Webhook`] is the shared
/// secret used to verify inbound deliveries; see
/// [`WebhookVerifier`](crate::webhook::WebhookVerifier).
pub struct WebhooksService {
    inner: Arc<ClientInner>,
}

impl WebhooksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Register a new webhook endpoint.
    pub async fn create(&self, webhook: &WebhookRequest) -> Result<Webhook> {
        self.inner.post("/webhooks", webhook).await
    }

    /// Retrieve a webhook registration by its ID.
    pub async fn get(&self, id: &WebhookId) -> Result<Webhook> {
        self.inner.get(&format!("/webhooks/{id}")).await
    }

    /// Update an existing webhook registration.
    pub async fn update(&self, id: &WebhookId, webhook: &WebhookRequest) -> Result<Webhook> {
        self.inner.put(&format!("/webhooks/{id}"), webhook).await
    }

    /// List all registered webhook endpoints, lazily fetching pages.
    pub fn list(&self) -> PageIter<Webhook> {
        #[derive(serde::Deserialize)]
        struct Page {
            webhooks: Vec<Webhook>,
        }

        PageIter::new(self.inner.clone(), "/webhooks".to_string(), |body| {
            let page: Page = serde_json::from_slice(body)?;
            Ok(page.webhooks)
        })
    }
}
