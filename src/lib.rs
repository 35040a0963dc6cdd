//! couch_rs: a client-side object model for CouchDB-compatible document stores.
//!
//! The crate models the server's resource hierarchy as four cooperating
//! types, each owning the one below it and deriving that child's address:
//!
//! ```text
//! Node          http://localhost:5984/
//! └── Database  http://localhost:5984/invoices/
//!     └── Document  http://localhost:5984/invoices/abc/
//!         └── Attachment  http://localhost:5984/invoices/abc/scan.png?rev=1-xyz
//! ```
//!
//! Every create/delete issues exactly one HTTP round trip. On a successful
//! document or attachment write the server-assigned identifier and revision
//! are propagated back into the owning [`Document`], which is how the
//! optimistic-concurrency protocol stays consistent: each mutation of an
//! existing document must present the revision the client last observed.
//!
//! # Modules
//!
//! - [`client`] - HTTP transport ([`CouchClient`]) and its configuration
//! - [`resource`] - the Node / Database / Document / Attachment hierarchy
//! - [`types`] - revisions, responses, and write acknowledgements
//! - [`error`] - the crate-wide error taxonomy
//! - [`sniff`] - content-type detection for the batch loader binary
//!
//! # Quick Start
//!
//! ```no_run
//! use couch_rs::Node;
//!
//! # async fn run() -> couch_rs::Result<()> {
//! let node = Node::new();
//! let db = node.create_database("invoices").await?;
//!
//! let mut doc = db
//!     .create_document(serde_json::Map::from_iter([(
//!         "name".to_string(),
//!         serde_json::json!("march"),
//!     )]))
//!     .await?;
//!
//! doc.create_standalone_attachment("scan.png", "image/png", 4, b"\x89PNG".to_vec())
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod resource;
pub mod sniff;
pub mod types;

// Re-export commonly used types at crate root
pub use client::{ClientConfig, CouchClient};
pub use error::{CouchError, Result};
pub use resource::{Attachment, Database, Document, Node, NodeConfig};
pub use types::{CouchResponse, Revision, WriteAck};
