//! HTTP transport for the resource hierarchy.
//!
//! One [`CouchClient`] is created when a [`Node`](crate::Node) is
//! constructed, and every Database, Document, and Attachment descended
//! from that Node reuses it. The client is a thin wrapper around
//! `reqwest::Client`: each verb helper performs exactly one round trip,
//! collects the result into a [`CouchResponse`](crate::CouchResponse),
//! and hands interpretation to the resource layer. No retries, no
//! request queuing.
//!
//! # Examples
//!
//! ```
//! use couch_rs::{ClientConfig, CouchClient};
//!
//! // Default configuration
//! let client = CouchClient::new();
//!
//! // Custom configuration
//! let config = ClientConfig {
//!     request_timeout_ms: 5_000,
//!     ..Default::default()
//! };
//! let client = CouchClient::with_config(config);
//! ```

mod config;
mod http;

pub use config::ClientConfig;
pub use http::CouchClient;
