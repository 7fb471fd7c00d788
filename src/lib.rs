//! # Model Information Service Client
//!
//! A Rust client for the Model Information Service, a resource-oriented REST
//! API. Resources are addressed by chaining lookups from a [`Client`]; each
//! lookup builds one more path segment, and nothing is requested until
//! `get()` is called on a node.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use smis::{Client, Endpoint, ServiceConfig};
//!
//! let config = ServiceConfig::builder()
//!     .endpoint(Endpoint::new("https://svc.example.com/api").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let client = Client::from_config(&config)?;
//!
//! // GET https://svc.example.com/api/projects/42/files
//! let mut files = client.child("projects").item(42).child("files");
//! let listing = files.get().await?;
//!
//! // The raw response stays on the node, also after a failed fetch
//! if let Some(response) = files.response() {
//!     println!("status {}", response.code);
//! }
//! ```
//!
//! ## Custom Transports
//!
//! [`Client::new`] accepts any [`Transport`]. The bundled [`HttpClient`] is
//! built on reqwest; tests or alternative stacks can supply their own.
//!
//! ## Design Principles
//!
//! - **No global state**: configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: the endpoint is validated on construction
//! - **Lazy fetching**: building paths never touches the network
//! - **No node cache**: every lookup returns a fresh node with its own response

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use config::{Endpoint, ServiceConfig, ServiceConfigBuilder};
pub use error::ConfigError;

pub use clients::{
    DecodeError, HttpClient, HttpError, HttpResponse, HttpResponseError, Transport,
};

pub use rest::{url_join, Client, Resource};
