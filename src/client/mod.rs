//! HTTP client and transport layer for the Onfido API.
//!
//! This module provides the main entry point [`OnfidoClient`] together
//! with the request pipeline and the pagination iterator the resource
//! services are built on.

mod config;
mod http;
pub mod paginated;

pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use http::{OnfidoClient, TOKEN_ENV};
pub use paginated::PageIter;
pub(crate) use http::ClientInner;
