//! Error types for document-store operations.
//!
//! This module defines all error types that can occur when talking to a
//! CouchDB-compatible server. The [`Result`] type alias provides a
//! convenient shorthand for operations that may fail.
//!
//! # Error Categories
//!
//! | Category | Variants | Propagation |
//! |----------|----------|-------------|
//! | Transport | `Transport`, `Http`, `Io` | Un-wrapped, straight to the caller |
//! | Decoding | `Json` | Un-wrapped |
//! | Database | `DatabaseCreation`, `DatabaseNotFound` | Logged at error level, then returned |
//! | Write protocol | `WriteRejected`, `MissingDocumentId` | Returned; local id/rev untouched |
//!
//! # The not-ok path
//!
//! A request can complete at the transport level while the parsed body does
//! not report success (`"ok": true`). The source design this crate descends
//! from silently handed the caller a stale entity in that case; here it is
//! surfaced as [`CouchError::WriteRejected`] so a stale entity can never be
//! mistaken for a persisted one. The entity's local identifier and revision
//! are left unchanged either way.

use std::io;
use thiserror::Error;

/// Result type for document-store operations.
pub type Result<T> = std::result::Result<T, CouchError>;

/// Errors that can occur during document-store operations.
///
/// # Examples
///
/// ```
/// use couch_rs::CouchError;
///
/// let err = CouchError::DatabaseNotFound {
///     name: "invoices".to_string(),
/// };
/// assert!(err.to_string().contains("invoices"));
/// assert!(err.is_not_found());
/// ```
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CouchError {
    /// Failure at the HTTP layer: connection refused, timeout, TLS, etc.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Transport-complete response with a non-2xx status not otherwise
    /// classified.
    #[error("HTTP {status} from {url}")]
    Http {
        /// Status code of the response.
        status: u16,
        /// Request target that produced it.
        url: String,
    },

    /// Network or filesystem I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Response body failed to decode as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Database create request failed.
    ///
    /// Wraps the underlying error, which may be a transport failure, a
    /// non-2xx status (the server answers 412 when the database already
    /// exists), or a body that did not report success.
    #[error("database create failed for {name}: {source}")]
    DatabaseCreation {
        /// Name of the database that could not be created.
        name: String,
        /// The underlying failure.
        #[source]
        source: Box<CouchError>,
    },

    /// Database delete targeted a database the server does not know.
    #[error("database not found: {name}")]
    DatabaseNotFound {
        /// Name of the missing database.
        name: String,
    },

    /// The request completed but the parsed body did not report
    /// `"ok": true`. The entity's local identifier/revision are unchanged.
    #[error("write rejected by server at {url}")]
    WriteRejected {
        /// Request target whose write was rejected.
        url: String,
    },

    /// An attachment operation was attempted against a document with no
    /// identifier, so no URL can be derived for it.
    #[error("document has no identifier, cannot derive attachment URL")]
    MissingDocumentId,
}

impl CouchError {
    /// Check if this error represents a missing resource.
    ///
    /// `true` for [`CouchError::DatabaseNotFound`] and for raw 404
    /// responses.
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            CouchError::DatabaseNotFound { .. } => true,
            CouchError::Http { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// Check if this error represents a revision conflict (HTTP 409).
    ///
    /// The server answers 409 when a write presents a stale revision, the
    /// ordinary outcome of two uncoordinated writers racing on one
    /// document.
    #[inline]
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, CouchError::Http { status: 409, .. })
    }
}
