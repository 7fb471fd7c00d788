//! HTTP transport types for Model Information Service communication.
//!
//! # Overview
//!
//! - [`Transport`]: the capability resources fetch through
//! - [`HttpClient`]: the reqwest-backed transport
//! - [`HttpResponse`]: a raw response with `raise_for_status()` and `json()`
//! - [`HttpError`], [`HttpResponseError`], [`DecodeError`]: failure types
//!
//! # Example
//!
//! ```rust,ignore
//! use smis::clients::{HttpClient, Transport};
//! use smis::{Endpoint, ServiceConfig};
//!
//! let config = ServiceConfig::builder()
//!     .endpoint(Endpoint::new("https://svc.example.com/api").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = HttpClient::new(&config)?;
//! let response = client.get("projects").await?;
//! response.raise_for_status()?;
//! let projects: serde_json::Value = response.json()?;
//! ```

mod errors;
mod http_client;
mod http_response;
mod transport;

pub use errors::{DecodeError, HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;
pub use transport::Transport;
