//! Resource navigation for the Model Information Service.
//!
//! The service is a hierarchy of resources addressed by URL paths. This
//! module turns explicit, chained lookups into those paths and fetches them
//! on demand.
//!
//! # Overview
//!
//! - [`Client`]: entry point holding the transport and the root resource
//! - [`Resource`]: one node of the hierarchy; computes its path and fetches it
//! - [`url_join`]: the slash-normalizing join used for paths and URLs
//!
//! # Path Building
//!
//! Each lookup creates a new node whose parent is the node it was called on:
//!
//! | Expression                                        | Path                |
//! |---------------------------------------------------|---------------------|
//! | `client.root()`                                   | `""`                |
//! | `client.child("projects")`                        | `projects`          |
//! | `client.child("projects").item(42)`               | `projects/42`       |
//! | `client.child("projects").item(42).child("files")`| `projects/42/files` |
//!
//! Segments are not interpreted: an unknown resource is only detected when
//! the service answers with an error status.

mod client;
mod path;
mod resource;

pub use client::Client;
pub use path::url_join;
pub use resource::Resource;
