//! Lazily fetched resource nodes.
//!
//! A [`Resource`] is one segment of a URL path. It knows its parent, so its
//! full path is computed on demand; nothing is requested until
//! [`Resource::get`] is called.
//!
//! # Fetch Order
//!
//! `get()` performs three steps in a fixed order:
//!
//! 1. Request the path through the transport
//! 2. Store the raw response on the node (replacing any earlier one)
//! 3. Check the status, then decode the body
//!
//! A fetch that fails on status or decoding therefore still leaves the
//! failing response in [`Resource::response`]. Only a network error, where no
//! response exists, leaves the stored response untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut files = client.child("projects").item(42).child("files");
//! assert_eq!(files.path(), "projects/42/files");
//!
//! let listing = files.get().await?;
//! println!("{} files", listing.as_array().map_or(0, Vec::len));
//! ```

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::{HttpError, HttpResponse, Transport};
use crate::rest::path::url_join;

/// Immutable link in the ownership chain used for path computation.
#[derive(Debug)]
struct Segment {
    token: String,
    parent: Option<Arc<Segment>>,
}

impl Segment {
    fn path(&self) -> String {
        match &self.parent {
            Some(parent) => url_join(&parent.path(), &self.token),
            None => self.token.clone(),
        }
    }
}

/// A node in the service's resource hierarchy.
///
/// Nodes are cheap to create and are never cached: two calls to
/// `child("projects")` return two independent nodes, each with its own
/// response state.
pub struct Resource<T> {
    segment: Arc<Segment>,
    transport: Arc<T>,
    response: Option<HttpResponse>,
}

impl<T: Transport> Resource<T> {
    /// Creates a parentless node with an empty token, addressing the
    /// endpoint itself.
    pub(crate) fn root(transport: Arc<T>) -> Self {
        Self {
            segment: Arc::new(Segment {
                token: String::new(),
                parent: None,
            }),
            transport,
            response: None,
        }
    }

    /// Returns this node's own path segment.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.segment.token
    }

    /// Returns the path of this node relative to the service endpoint.
    ///
    /// The root's path is the empty string.
    #[must_use]
    pub fn path(&self) -> String {
        self.segment.path()
    }

    /// Returns the full URL of this node.
    #[must_use]
    pub fn url(&self) -> String {
        url_join(self.transport.endpoint(), &self.path())
    }

    /// Returns the response of the last [`get`](Self::get) on this node, or
    /// `None` if it was never fetched.
    ///
    /// After a failed fetch this holds the failing response, which is useful
    /// for inspecting what went wrong.
    #[must_use]
    pub const fn response(&self) -> Option<&HttpResponse> {
        self.response.as_ref()
    }

    /// Returns a new child node addressed by `identity`.
    ///
    /// Use this for segments that are not plain names, such as numeric IDs.
    #[must_use]
    pub fn item(&self, identity: impl fmt::Display) -> Self {
        self.spawn(identity.to_string())
    }

    /// Returns a new child node named `name`.
    #[must_use]
    pub fn child(&self, name: impl Into<String>) -> Self {
        self.spawn(name.into())
    }

    fn spawn(&self, token: String) -> Self {
        Self {
            segment: Arc::new(Segment {
                token,
                parent: Some(Arc::clone(&self.segment)),
            }),
            transport: Arc::clone(&self.transport),
            response: None,
        }
    }

    /// Fetches this resource and returns the decoded JSON payload.
    ///
    /// The payload is an object for single resources and an array for
    /// collections, as returned by the service.
    ///
    /// # Errors
    ///
    /// - [`HttpError::Network`] if no response was received
    /// - [`HttpError::Response`] if the service returned a 4xx or 5xx status
    /// - [`HttpError::Decode`] if the body is not valid JSON
    pub async fn get(&mut self) -> Result<serde_json::Value, HttpError> {
        self.get_as().await
    }

    /// Fetches this resource and decodes the payload into `D`.
    ///
    /// # Errors
    ///
    /// Same as [`get`](Self::get); [`HttpError::Decode`] is also returned
    /// when the payload does not match `D`.
    pub async fn get_as<D: DeserializeOwned>(&mut self) -> Result<D, HttpError> {
        let path = self.path();
        let response = self.transport.get(&path).await?;
        let response = self.response.insert(response);

        if let Err(error) = response.raise_for_status() {
            tracing::warn!(path = %path, status = error.code, "Resource request failed");
            return Err(error.into());
        }

        Ok(response.json()?)
    }
}

impl<T: Transport> fmt::Display for Resource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}

impl<T> fmt::Debug for Resource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Resource")
            .field("path", &self.segment.path())
            .field("response", &self.response.as_ref().map(|r| r.code))
            .finish_non_exhaustive()
    }
}
