//! HTTP response as seen by the resource layer.
//!
//! The [`CouchResponse`] type collects status, headers, and the complete
//! body of one round trip. The transport never interprets it; deciding
//! what a status or body means is the resource layer's job, which keeps
//! the classification rules (404 on a database delete is "not found", a
//! 2xx body without `"ok": true` is a rejected write) next to the
//! operations they belong to.
//!
//! # Examples
//!
//! ```
//! use couch_rs::CouchResponse;
//!
//! let response = CouchResponse::new(201, r#"{"ok":true,"id":"a","rev":"1-x"}"#)
//!     .with_header("Content-Type", "application/json");
//!
//! assert!(response.is_success());
//! let ack = response.ack().unwrap();
//! assert!(ack.ok);
//! ```

use crate::error::Result;
use crate::types::WriteAck;
use bytes::Bytes;
use std::collections::BTreeMap;

/// One complete HTTP response: status, headers, body.
///
/// The body is held entirely in memory; attachment streaming is out of
/// scope for this client.
#[derive(Clone, Debug)]
pub struct CouchResponse {
    /// HTTP status code.
    pub status: u16,

    /// Response headers.
    pub headers: BTreeMap<String, String>,

    /// Response body.
    pub body: Bytes,
}

impl CouchResponse {
    /// Create a new response with status and body.
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        CouchResponse {
            status,
            headers: BTreeMap::new(),
            body: body.into(),
        }
    }

    /// Add a header to the response.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Get a header value by name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use couch_rs::CouchResponse;
    ///
    /// let response = CouchResponse::new(200, "")
    ///     .with_header("Content-Type", "application/json");
    ///
    /// assert_eq!(response.header("content-type"), Some("application/json"));
    /// ```
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Get the body as a UTF-8 string, if it is one.
    pub fn body_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Parse the body as a write acknowledgement.
    pub fn ack(&self) -> Result<WriteAck> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Check if this is a successful response (2xx status).
    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Check if this is a missing-resource response (404).
    #[inline]
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl Default for CouchResponse {
    fn default() -> Self {
        CouchResponse {
            status: 200,
            headers: BTreeMap::new(),
            body: Bytes::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let response = CouchResponse::new(201, "body");
        assert_eq!(response.status, 201);
        assert_eq!(response.body_str(), Some("body"));
    }

    #[test]
    fn test_with_header() {
        let response = CouchResponse::new(200, "").with_header("Server", "CouchDB");
        assert_eq!(response.header("Server"), Some("CouchDB"));
    }

    #[test]
    fn test_header_case_insensitive() {
        let response = CouchResponse::new(200, "").with_header("Content-Type", "application/json");
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("CONTENT-TYPE"), Some("application/json"));
    }

    #[test]
    fn test_missing_header() {
        let response = CouchResponse::new(200, "");
        assert_eq!(response.header("etag"), None);
    }

    #[test]
    fn test_is_success() {
        assert!(CouchResponse::new(200, "").is_success());
        assert!(CouchResponse::new(201, "").is_success());
        assert!(!CouchResponse::new(404, "").is_success());
        assert!(!CouchResponse::new(412, "").is_success());
    }

    #[test]
    fn test_is_not_found() {
        assert!(CouchResponse::new(404, "").is_not_found());
        assert!(!CouchResponse::new(200, "").is_not_found());
    }

    #[test]
    fn test_ack_parses_body() {
        let response = CouchResponse::new(201, r#"{"ok":true,"id":"abc","rev":"1-xyz"}"#);
        let ack = response.ack().unwrap();
        assert!(ack.ok);
        assert_eq!(ack.id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_ack_rejects_garbage() {
        let response = CouchResponse::new(200, "not json");
        assert!(response.ack().is_err());
    }

    #[test]
    fn test_body_str_non_utf8() {
        let response = CouchResponse::new(200, vec![0xff, 0xfe]);
        assert_eq!(response.body_str(), None);
    }
}
