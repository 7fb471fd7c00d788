//! The transport capability consumed by resources.

use std::future::Future;

use crate::clients::errors::HttpError;
use crate::clients::http_response::HttpResponse;

/// A service endpoint that can perform GET requests.
///
/// Resources never talk HTTP themselves; they compute a path and hand it to
/// a `Transport`. [`HttpClient`](crate::clients::HttpClient) is the
/// reqwest-backed implementation.
///
/// `get` must return `Err` only when no response was obtained at all. A
/// response with an error status is still `Ok`: status checking is done by
/// the caller through [`HttpResponse::raise_for_status`].
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use smis::clients::{HttpError, HttpResponse, Transport};
/// use smis::rest::url_join;
///
/// struct Canned;
///
/// impl Transport for Canned {
///     fn endpoint(&self) -> &str {
///         "https://svc.example.com/api"
///     }
///
///     async fn get(&self, path: &str) -> Result<HttpResponse, HttpError> {
///         let url = url_join(self.endpoint(), path);
///         Ok(HttpResponse::new(200, url, HashMap::new(), "{}"))
///     }
/// }
/// ```
pub trait Transport {
    /// Returns the base URL of the service.
    fn endpoint(&self) -> &str;

    /// Performs a GET request for `path`, relative to [`endpoint`](Self::endpoint).
    fn get(&self, path: &str) -> impl Future<Output = Result<HttpResponse, HttpError>> + Send;
}
