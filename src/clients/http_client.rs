//! HTTP transport for Model Information Service communication.
//!
//! This module provides the [`HttpClient`] type, the reqwest-backed
//! [`Transport`] used by [`Client::from_config`](crate::Client::from_config).

use std::collections::HashMap;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;
use crate::clients::transport::Transport;
use crate::config::{Endpoint, ServiceConfig};
use crate::rest::url_join;

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making GET requests to the service.
///
/// The client handles:
/// - URL construction from the configured endpoint
/// - Default headers including User-Agent and Accept
/// - Collecting status, headers and body into an [`HttpResponse`]
///
/// Status codes are not interpreted here. A 404 is a successful round-trip
/// that yields an `HttpResponse` with `code == 404`.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use smis::{Endpoint, HttpClient, ServiceConfig, Transport};
///
/// let config = ServiceConfig::builder()
///     .endpoint(Endpoint::new("https://svc.example.com/api").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config)?;
/// let response = client.get("projects").await?;
/// println!("{}", response.code);
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL of the service.
    endpoint: Endpoint,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &ServiceConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}MIS Client Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        for (key, value) in config.default_headers() {
            default_headers.insert(key.clone(), value.clone());
        }

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint().clone(),
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a GET request for `path` and collects the raw response.
    async fn fetch(&self, path: &str) -> Result<HttpResponse, HttpError> {
        let url = url_join(self.endpoint.as_ref(), path);

        let mut req_builder = self.client.get(&url);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        tracing::debug!(url = %url, "GET");
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;
        tracing::debug!(url = %url, status = code, bytes = body.len(), "Received response");

        Ok(HttpResponse::new(code, url, headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

impl Transport for HttpClient {
    fn endpoint(&self) -> &str {
        self.endpoint.as_ref()
    }

    async fn get(&self, path: &str) -> Result<HttpResponse, HttpError> {
        self.fetch(path).await
    }
}
