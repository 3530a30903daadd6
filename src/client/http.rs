//! HTTP transport for the Onfido API.
//!
//! [`ClientInner`] owns the request pipeline: building authenticated
//! requests, executing them, and routing each response into exactly one of
//! three outcomes per call (JSON decode, raw byte copy, or discard). Non-2xx
//! responses are decoded into [`crate::ApiError`] before being returned.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::{
    AddressesService, ApplicantsService, ChecksService, DocumentsService, LivePhotosService,
    ReportsService, SdkTokensService, WebhooksService,
};
use crate::error::ApiErrorEnvelope;
use crate::models::ApiToken;
use crate::{ApiError, Error, Result};

use super::config::ClientConfig;
use super::paginated::next_link;

/// Environment variable holding the API token for [`OnfidoClient::from_env`].
pub const TOKEN_ENV: &str = "ONFIDO_TOKEN";

/// The main client for interacting with the Onfido API.
///
/// The client is cheap to clone and safe to share: all state is immutable
/// after construction. Access to endpoints goes through service structs.
///
/// # Example
///
/// ```no_run
/// use onfido::{OnfidoClient, ApplicantRequest};
///
/// # async fn example() -> onfido::Result<()> {
/// let client = OnfidoClient::new("test_122333")?;
///
/// let applicant = client.applicants().create(&ApplicantRequest {
///     first_name: "Jane".into(),
///     last_name: "Doe".into(),
///     ..Default::default()
/// }).await?;
/// # Ok(())
/// # }
/// ```
pub struct OnfidoClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) token: ApiToken,
    pub(crate) config: ClientConfig,
}

impl OnfidoClient {
    /// Create a new client with the given API token and default
    /// configuration.
    pub fn new(token: impl Into<ApiToken>) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a new client reading the API token from the `ONFIDO_TOKEN`
    /// environment variable.
    ///
    /// This is the process-boundary adapter; the library itself never reads
    /// the environment after construction.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var(TOKEN_ENV)
            .map_err(|_| Error::Config(format!("api token not found in `{TOKEN_ENV}`")))?;
        if token.is_empty() {
            return Err(Error::Config(format!("api token not found in `{TOKEN_ENV}`")));
        }
        Self::new(token)
    }

    /// Create a new client with a custom configuration.
    pub fn with_config(token: impl Into<ApiToken>, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                token: token.into(),
                config,
            }),
        })
    }

    /// Get the applicants service.
    pub fn applicants(&self) -> ApplicantsService {
        ApplicantsService::new(self.inner.clone())
    }

    /// Get the address picker service.
    pub fn addresses(&self) -> AddressesService {
        AddressesService::new(self.inner.clone())
    }

    /// Get the checks service.
    pub fn checks(&self) -> ChecksService {
        ChecksService::new(self.inner.clone())
    }

    /// Get the reports service.
    pub fn reports(&self) -> ReportsService {
        ReportsService::new(self.inner.clone())
    }

    /// Get the documents service.
    pub fn documents(&self) -> DocumentsService {
        DocumentsService::new(self.inner.clone())
    }

    /// Get the live photos service.
    pub fn live_photos(&self) -> LivePhotosService {
        LivePhotosService::new(self.inner.clone())
    }

    /// Get the SDK tokens service.
    pub fn sdk_tokens(&self) -> SdkTokensService {
        SdkTokensService::new(self.inner.clone())
    }

    /// Get the webhook registrations service.
    pub fn webhooks(&self) -> WebhooksService {
        WebhooksService::new(self.inner.clone())
    }

    /// Get a reference to the API token.
    pub fn token(&self) -> &ApiToken {
        &self.inner.token
    }
}

impl Clone for OnfidoClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for OnfidoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnfidoClient")
            .field("config", &self.inner.config)
            .finish()
    }
}

impl ClientInner {
    /// Resolve a request path against the configured endpoint.
    ///
    /// Absolute URLs (as handed back in `Link` pagination headers) pass
    /// through untouched; relative paths get a normalized leading slash.
    pub(crate) fn endpoint_url(&self, path: &str) -> Result<Url> {
        if path.starts_with("http://") || path.starts_with("https://") {
            return Ok(Url::parse(path)?);
        }
        let base = self.config.endpoint.trim_end_matches('/');
        let url = if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        };
        Ok(Url::parse(&url)?)
    }

    /// Build request headers with authentication.
    pub(crate) fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&self.token.authorization())
                .map_err(|_| Error::Config("invalid token format".to_string()))?,
        );
        Ok(headers)
    }

    /// Execute a request, mapping deadline expiry to [`Error::Timeout`] so
    /// callers can tell "I gave up" apart from "the network failed".
    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Response> {
        request.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout
            } else {
                Error::Http(e)
            }
        })
    }

    fn start(&self, method: Method, url: Url) -> Result<reqwest::RequestBuilder> {
        tracing::debug!(%method, %url, "sending request");
        Ok(self.http.request(method, url).headers(self.build_headers()?))
    }

    /// Make a GET request, decoding the JSON response into `T`.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint_url(path)?;
        let response = self.send(self.start(Method::GET, url)?).await?;
        Self::handle_json(response).await
    }

    /// Make a GET request, copying the response body verbatim (downloads).
    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let url = self.endpoint_url(path)?;
        let response = self.send(self.start(Method::GET, url)?).await?;
        let response = Self::check_status(response).await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// Fetch one page of a paginated collection.
    ///
    /// Returns the raw body bytes together with the `rel="next"` target
    /// from the `Link` response header, if any. The body must be
    /// JSON-typed; the caller supplies the page decoder.
    pub(crate) async fn get_page(&self, url: &str) -> Result<(Vec<u8>, Option<String>)> {
        let url = self.endpoint_url(url)?;
        let response = self.send(self.start(Method::GET, url)?).await?;
        let response = Self::check_status(response).await?;

        if !Self::is_json(&response) {
            return Err(Error::UnsupportedResponse {
                target: "paginated response",
                content_type: Self::content_type(&response),
            });
        }

        let next = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(next_link);
        let body = response.bytes().await?.to_vec();
        Ok((body, next))
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint_url(path)?;
        let response = self.send(self.start(Method::POST, url)?.json(body)).await?;
        Self::handle_json(response).await
    }

    /// Make a POST request without a body.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint_url(path)?;
        let response = self.send(self.start(Method::POST, url)?).await?;
        Self::handle_json(response).await
    }

    /// Make a POST request without a body, discarding the response body.
    pub(crate) async fn post_discard(&self, path: &str) -> Result<()> {
        let url = self.endpoint_url(path)?;
        let response = self.send(self.start(Method::POST, url)?).await?;
        Self::check_status(response).await?;
        Ok(())
    }

    /// Make a POST request with a multipart form body.
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = self.endpoint_url(path)?;
        let response = self
            .send(self.start(Method::POST, url)?.multipart(form))
            .await?;
        Self::handle_json(response).await
    }

    /// Make a PUT request with a JSON body.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.endpoint_url(path)?;
        let response = self.send(self.start(Method::PUT, url)?.json(body)).await?;
        Self::handle_json(response).await
    }

    /// Make a DELETE request, discarding the response body.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let url = self.endpoint_url(path)?;
        let response = self.send(self.start(Method::DELETE, url)?).await?;
        Self::check_status(response).await?;
        Ok(())
    }

    fn is_json(response: &Response) -> bool {
        Self::content_type(response)
            .is_some_and(|ct| ct.contains("application/json"))
    }

    fn content_type(response: &Response) -> Option<String> {
        response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    /// Decode a JSON response into `T` after the status check.
    ///
    /// A 2xx response without a JSON content type cannot be routed into a
    /// typed target and fails with [`Error::UnsupportedResponse`].
    async fn handle_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;

        if !Self::is_json(&response) {
            return Err(Error::UnsupportedResponse {
                target: std::any::type_name::<T>(),
                content_type: Self::content_type(&response),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Pass 2xx responses through; decode everything else into an API
    /// error.
    ///
    /// A JSON error body is decoded into the structured envelope; a
    /// malformed one short-circuits as a decode error so callers can tell
    /// "the server complained" apart from "the response was garbage". The
    /// status code is attached in every case.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        tracing::debug!(status = status.as_u16(), "request rejected");
        Err(Self::decode_error(response, status).await)
    }

    async fn decode_error(response: Response, status: StatusCode) -> Error {
        let mut api_error = if Self::is_json(&response) {
            let body = match response.bytes().await {
                Ok(body) => body,
                Err(e) => return Error::Http(e),
            };
            if body.is_empty() {
                ApiError::default()
            } else {
                match serde_json::from_slice::<ApiErrorEnvelope>(&body) {
                    Ok(envelope) => envelope.error,
                    Err(e) => return Error::Json(e),
                }
            }
        } else {
            ApiError::default()
        };

        api_error.status = Some(status.as_u16());
        Error::Api(api_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_inner(endpoint: &str) -> ClientInner {
        ClientInner {
            http: reqwest::Client::new(),
            token: ApiToken::new("test_122333"),
            config: ClientConfig::default().with_endpoint(endpoint),
        }
    }

    #[test]
    fn relative_paths_join_the_endpoint() {
        let inner = test_inner("https://api.onfido.com/v3");
        assert_eq!(
            inner.endpoint_url("/applicants").unwrap().as_str(),
            "https://api.onfido.com/v3/applicants"
        );
        // Missing leading slash is normalized.
        assert_eq!(
            inner.endpoint_url("applicants").unwrap().as_str(),
            "https://api.onfido.com/v3/applicants"
        );
        // Trailing slash on the endpoint doesn't double up.
        let inner = test_inner("https://api.onfido.com/v3/");
        assert_eq!(
            inner.endpoint_url("/checks").unwrap().as_str(),
            "https://api.onfido.com/v3/checks"
        );
    }

    #[test]
    fn absolute_urls_pass_through() {
        let inner = test_inner("https://api.onfido.com/v3");
        assert_eq!(
            inner
                .endpoint_url("https://api.onfido.com/v3/applicants?page=2")
                .unwrap()
                .as_str(),
            "https://api.onfido.com/v3/applicants?page=2"
        );
    }

    #[test]
    fn http_prefixed_relative_paths_still_join() {
        // A path that merely starts with "http" is not an absolute URL.
        let inner = test_inner("https://api.onfido.com/v3");
        assert_eq!(
            inner.endpoint_url("http_logs").unwrap().as_str(),
            "https://api.onfido.com/v3/http_logs"
        );
    }

    #[test]
    fn malformed_paths_are_construction_errors() {
        let inner = test_inner("not a url");
        assert!(matches!(
            inner.endpoint_url("/applicants"),
            Err(Error::UrlParse(_))
        ));
    }

    #[test]
    fn authorization_header_uses_token_scheme() {
        let inner = test_inner("https://api.onfido.com/v3");
        let headers = inner.build_headers().unwrap();
        assert_eq!(
            headers.get(AUTHORIZATION).unwrap(),
            "Token token=test_122333"
        );
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }
}
