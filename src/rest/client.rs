//! Entry point of the Model Information Service client.
//!
//! This module provides the [`Client`] type, which binds a transport to a
//! resource tree rooted at the service endpoint.

use std::fmt;
use std::sync::Arc;

use crate::clients::{HttpClient, HttpError, HttpResponse, Transport};
use crate::config::ServiceConfig;
use crate::rest::resource::Resource;

/// Model Information Service client.
///
/// The client owns the root [`Resource`] (empty path, addressing the
/// endpoint itself) and hands out child resources on demand. Any name is
/// accepted; whether it exists is only known once the service answers a
/// fetch.
///
/// # Example
///
/// ```rust,ignore
/// use smis::{Client, Endpoint, ServiceConfig};
///
/// let config = ServiceConfig::builder()
///     .endpoint(Endpoint::new("https://svc.example.com/api").unwrap())
///     .build()
///     .unwrap();
///
/// let mut client = Client::from_config(&config)?;
///
/// // Service description at the endpoint itself
/// let index = client.get().await?;
///
/// // GET https://svc.example.com/api/projects/42/files
/// let mut files = client.child("projects").item(42).child("files");
/// let listing = files.get().await?;
/// ```
pub struct Client<T = HttpClient> {
    transport: Arc<T>,
    root: Resource<T>,
}

impl Client<HttpClient> {
    /// Creates a client backed by an [`HttpClient`] built from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be created.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, HttpError> {
        Ok(Self::new(HttpClient::new(config)?))
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client over `transport`.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::with_shared(Arc::new(transport))
    }

    /// Creates a client over a transport that is already shared.
    #[must_use]
    pub fn with_shared(transport: Arc<T>) -> Self {
        let root = Resource::root(Arc::clone(&transport));
        Self { transport, root }
    }

    /// Returns the endpoint URL of the service.
    #[must_use]
    pub fn url(&self) -> &str {
        self.transport.endpoint()
    }

    /// Returns the response of the last [`get`](Self::get), or `None` if the
    /// root was never fetched.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        self.root.response()
    }

    /// Fetches the service endpoint itself and returns its decoded payload.
    ///
    /// # Errors
    ///
    /// See [`Resource::get`].
    pub async fn get(&mut self) -> Result<serde_json::Value, HttpError> {
        self.root.get().await
    }

    /// Returns a new top-level resource named `name`.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Resource<T> {
        self.root.child(name)
    }

    /// Returns a new top-level resource addressed by `identity`.
    #[must_use]
    pub fn item(&self, identity: impl fmt::Display) -> Resource<T> {
        self.root.item(identity)
    }

    /// Returns the root resource.
    #[must_use]
    pub const fn root(&self) -> &Resource<T> {
        &self.root
    }

    /// Returns the underlying transport.
    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

impl<T> fmt::Debug for Client<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}
