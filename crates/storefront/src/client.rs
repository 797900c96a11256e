//! HTTP client core shared by every API surface.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use tienda_core::session::{SessionManager, SessionStore};

use crate::config::ClientConfig;
use crate::envelope::Envelope;
use crate::error::{ApiError, Result};

/// How much of a non-JSON error body to keep for diagnostics.
const MAX_ERROR_BODY: usize = 512;

struct Inner<S> {
    http: reqwest::Client,
    base_url: Url,
    session: SessionManager<S>,
    default_page_size: u32,
}

/// Client for the remote storefront API.
///
/// Cheap to clone; all clones share the same HTTP connection pool and
/// session manager.
pub struct ApiClient<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for ApiClient<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: SessionStore> ApiClient<S> {
    /// Create a client backed by the given session store.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the underlying HTTP client cannot
    /// be constructed.
    pub fn new(config: &ClientConfig, store: S) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(Inner {
                http,
                base_url: config.api_base_url.clone(),
                session: SessionManager::new(store),
                default_page_size: config.default_page_size,
            }),
        })
    }

    /// The session manager backing this client.
    pub fn session(&self) -> &SessionManager<S> {
        &self.inner.session
    }

    /// Default page size for paginated listings.
    #[must_use]
    pub fn default_page_size(&self) -> u32 {
        self.inner.default_page_size
    }

    /// Whether a valid credential is currently stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.inner.session.token().is_some()
    }

    /// Resolve `path` against the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Url` if the path cannot be joined.
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// Build a request with the session headers attached.
    ///
    /// Every request carries `X-Session-ID`; `Authorization` is added
    /// only when a valid credential is stored.
    pub fn request(&self, method: Method, url: Url) -> Result<RequestBuilder> {
        let mut builder = self
            .inner
            .http
            .request(method, url)
            .header("X-Session-ID", self.inner.session.anonymous_id()?);

        if let Some(token) = self.inner.session.token() {
            builder = builder.bearer_auth(token);
        }

        Ok(builder)
    }

    /// Send a prepared request and unwrap the response envelope.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Api` for business errors reported in the
    /// envelope, `ApiError::Status` for other non-success responses,
    /// `ApiError::Http` / `ApiError::Parse` for transport and decode
    /// failures.
    pub async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!(status = %status, "api response");

        match serde_json::from_str::<Envelope<T>>(&body) {
            Ok(envelope) => envelope.into_data(),
            Err(err) if status.is_success() => Err(ApiError::Parse(err)),
            Err(_) => {
                warn!(status = %status, "non-envelope error response");
                Err(status_error(status, &body))
            }
        }
    }

    /// GET `path` and unwrap the envelope.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path)?;
        self.send(self.request(Method::GET, url)?).await
    }

    /// GET `path` with query parameters and unwrap the envelope.
    pub async fn get_with<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.send(self.request(Method::GET, url)?.query(query)).await
    }

    /// Send `body` as JSON with the given method and unwrap the envelope.
    pub async fn send_json<T, B>(&self, method: Method, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        self.send(self.request(method, url)?.json(body)).await
    }

    /// Send a bodyless request with the given method and unwrap the envelope.
    pub async fn send_empty<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
    ) -> Result<T> {
        let url = self.url(path)?;
        self.send(self.request(method, url)?).await
    }

    /// Send a multipart form with the given method and unwrap the envelope.
    pub async fn send_multipart<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        let url = self.url(path)?;
        self.send(self.request(method, url)?.multipart(form)).await
    }
}

fn status_error(status: StatusCode, body: &str) -> ApiError {
    let mut body = body.to_string();
    if body.len() > MAX_ERROR_BODY {
        let mut end = MAX_ERROR_BODY;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
        body.push_str("...");
    }
    ApiError::Status {
        status: status.as_u16(),
        body,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_truncates_body() {
        let long = "x".repeat(2000);
        match status_error(StatusCode::BAD_GATEWAY, &long) {
            ApiError::Status { status, body } => {
                assert_eq!(status, 502);
                assert_eq!(body.len(), MAX_ERROR_BODY + 3);
                assert!(body.ends_with("..."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_url_join() {
        use tienda_core::session::MemoryStore;

        let config = ClientConfig::for_base_url("https://shop.example.com".parse().unwrap());
        let client = ApiClient::new(&config, MemoryStore::new()).unwrap();
        assert_eq!(
            client.url("/api/products").unwrap().as_str(),
            "https://shop.example.com/api/products"
        );
    }
}
