//! Address picker service.

use std::sync::Arc;

use crate::client::{ClientInner, PageIter};
use crate::models::Address;
use crate::Error;

/// Service for the postcode address picker.
pub struct AddressesService {
    inner: Arc<ClientInner>,
}

impl AddressesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Look up addresses matching the provided postcode.
    ///
    /// An empty postcode is a failed precondition: the returned iterator
    /// reports the error on its first advance and never issues a request.
    pub fn pick(&self, postcode: &str) -> PageIter<Address> {
        if postcode.is_empty() {
            return PageIter::failing(
                self.inner.clone(),
                Error::InvalidInput("empty postcode".to_string()),
            );
        }

        #[derive(serde::Deserialize)]
        struct Page {
            addresses: Vec<Address>,
        }

        let query = url::form_urlencoded::Serializer::new(String::new())
            .append_pair("postcode", postcode)
            .finish();

        PageIter::new(
            self.inner.clone(),
            format!("/addresses/pick?{query}"),
            |body| {
                let page: Page = serde_json::from_slice(body)?;
                Ok(page.addresses)
            },
        )
    }
}
