//! Read-only HTTP view of the published model registry.
//!
//! # Endpoints
//!
//! - `GET /models` - summaries of every loaded model, in declaration order
//! - `GET /models/{name}` - summary of a single model
//!
//! Responses are JSON. Requests made before the registry is published get a
//! `503 Service Unavailable`, unknown routes and models a `404 Not Found`.

/// Response bodies.
pub mod structs;

/// Implementation blocks for response bodies.
pub mod impls;

/// Route table and server setup.
#[allow(clippy::module_inception)]
pub mod http;
