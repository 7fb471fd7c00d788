//! Configuration types for the Model Information Service client.
//!
//! # Overview
//!
//! - [`ServiceConfig`]: settings used to build the HTTP transport
//! - [`ServiceConfigBuilder`]: a builder for constructing [`ServiceConfig`] instances
//! - [`Endpoint`]: a validated service base URL
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use smis::{Endpoint, ServiceConfig};
//!
//! let config = ServiceConfig::builder()
//!     .endpoint(Endpoint::new("https://svc.example.com/api").unwrap())
//!     .timeout(Duration::from_secs(30))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), "https://svc.example.com/api");
//! ```

mod newtypes;

pub use newtypes::Endpoint;

use std::collections::HashMap;
use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for the HTTP transport of the client.
///
/// # Thread Safety
///
/// `ServiceConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct ServiceConfig {
    endpoint: Endpoint,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    default_headers: HashMap<String, String>,
}

impl ServiceConfig {
    /// Creates a new builder for constructing a `ServiceConfig`.
    #[must_use]
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder::new()
    }

    /// Returns the service endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the extra headers sent with every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }
}

// Verify ServiceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ServiceConfig>();
};

/// Builder for constructing [`ServiceConfig`] instances.
///
/// `endpoint` is required. Everything else is optional:
///
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no timeout beyond reqwest's defaults)
/// - `default_headers`: empty
#[derive(Debug, Default)]
pub struct ServiceConfigBuilder {
    endpoint: Option<Endpoint>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    default_headers: HashMap<String, String>,
}

impl ServiceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the service endpoint (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the total timeout applied to each request.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds a header sent with every request.
    ///
    /// Headers set here override the built-in `Accept` and `User-Agent`
    /// values when the names match exactly.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(key.into(), value.into());
        self
    }

    /// Builds the [`ServiceConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `endpoint` is not set.
    pub fn build(self) -> Result<ServiceConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;

        Ok(ServiceConfig {
            endpoint,
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            default_headers: self.default_headers,
        })
    }
}
